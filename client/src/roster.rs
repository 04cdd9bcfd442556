//! Roster loading

use futures_util::future::try_join_all;
use pokeclash_battle::Creature;

use crate::error::RosterError;
use crate::source::CreatureSource;

/// Load `limit` creatures from `source`
///
/// Detail records are fetched concurrently. The first failure aborts the
/// whole load and the remaining requests are dropped; there is no partial
/// roster.
pub async fn fetch_roster<S>(source: &S, limit: usize) -> Result<Vec<Creature>, RosterError>
where
    S: CreatureSource + ?Sized,
{
    tracing::info!(limit, "Loading roster");

    let entries = source.list(limit).await?;
    let details = try_join_all(entries.iter().map(|entry| source.detail(entry))).await?;

    let creatures = details
        .iter()
        .map(|detail| {
            Creature::from_protocol(detail).map_err(|source| RosterError::Data {
                name: detail.name.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(count = creatures.len(), "Roster loaded");
    Ok(creatures)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;
    use pokeclash_protocol::{DataError, NamedResource, PokemonDetail, parse_pokemon_detail};

    use super::*;

    enum Reply {
        Detail(String),
        Fail(u16),
        Hang,
    }

    struct FakeSource {
        entries: Vec<NamedResource>,
        replies: HashMap<String, Reply>,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                entries: Vec::new(),
                replies: HashMap::new(),
            }
        }

        fn with(mut self, name: &str, reply: Reply) -> Self {
            self.entries.push(NamedResource::new(name, format!("fake://{name}")));
            self.replies.insert(name.to_string(), reply);
            self
        }
    }

    #[async_trait]
    impl CreatureSource for FakeSource {
        async fn list(&self, limit: usize) -> Result<Vec<NamedResource>, RosterError> {
            Ok(self.entries.iter().take(limit).cloned().collect())
        }

        async fn detail(&self, entry: &NamedResource) -> Result<PokemonDetail, RosterError> {
            match self.replies.get(&entry.name) {
                Some(Reply::Detail(body)) => {
                    parse_pokemon_detail(body).map_err(|source| RosterError::Data {
                        name: entry.name.clone(),
                        source,
                    })
                }
                Some(Reply::Fail(status)) => Err(RosterError::Status {
                    url: entry.url.clone(),
                    status: *status,
                }),
                Some(Reply::Hang) | None => std::future::pending().await,
            }
        }
    }

    fn detail(name: &str, hp: u32, attack: u32) -> Reply {
        Reply::Detail(
            serde_json::json!({
                "name": name,
                "sprites": {"front_default": format!("{name}.png")},
                "abilities": [
                    {"ability": {"name": "one", "url": ""}},
                    {"ability": {"name": "two", "url": ""}},
                    {"ability": {"name": "three", "url": ""}},
                    {"ability": {"name": "four", "url": ""}}
                ],
                "stats": [
                    {"base_stat": hp, "stat": {"name": "hp", "url": ""}},
                    {"base_stat": attack, "stat": {"name": "attack", "url": ""}}
                ]
            })
            .to_string(),
        )
    }

    #[tokio::test]
    async fn test_fetch_roster() {
        let source = FakeSource::new()
            .with("bulbasaur", detail("bulbasaur", 45, 49))
            .with("charmander", detail("charmander", 39, 52))
            .with("squirtle", detail("squirtle", 44, 48));

        let roster = fetch_roster(&source, 151).await.unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[1].name(), "charmander");
        assert_eq!(roster[1].max_hp(), 195);
        assert_eq!(roster[1].current_hp(), 195);
        assert_eq!(roster[1].base_attack(), 52);
        assert_eq!(roster[1].image_ref(), "charmander.png");
        assert_eq!(roster[1].abilities(), &["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_fetch_roster_respects_limit() {
        let source = FakeSource::new()
            .with("a", detail("a", 10, 10))
            .with("b", detail("b", 10, 10))
            .with("c", Reply::Hang);

        let roster = fetch_roster(&source, 2).await.unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[tokio::test]
    async fn test_first_failure_aborts_load() {
        // A hanging request must not keep the load alive once another failed
        let source = FakeSource::new()
            .with("a", detail("a", 10, 10))
            .with("slow", Reply::Hang)
            .with("broken", Reply::Fail(500));

        let result = tokio::time::timeout(Duration::from_secs(5), fetch_roster(&source, 151))
            .await
            .expect("load should fail fast");

        let err = result.unwrap_err();
        assert!(err.is_network());
        assert!(matches!(err, RosterError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_detail() {
        let source = FakeSource::new()
            .with("a", detail("a", 10, 10))
            .with("bad", Reply::Detail(r#"{"name": "bad"}"#.to_string()));

        let err = fetch_roster(&source, 151).await.unwrap_err();
        assert!(!err.is_network());
        assert!(matches!(err, RosterError::Data { ref name, .. } if name == "bad"));
    }

    #[tokio::test]
    async fn test_missing_attack_stat() {
        let body = serde_json::json!({
            "name": "weak",
            "sprites": {"front_default": "weak.png"},
            "abilities": [],
            "stats": [{"base_stat": 10, "stat": {"name": "hp", "url": ""}}]
        })
        .to_string();
        let source = FakeSource::new().with("weak", Reply::Detail(body));

        match fetch_roster(&source, 151).await {
            Err(RosterError::Data { name, source }) => {
                assert_eq!(name, "weak");
                assert_eq!(
                    source,
                    DataError::MissingField("stats[1].base_stat".to_string())
                );
            }
            other => panic!("expected data error, got {other:?}"),
        }
    }
}

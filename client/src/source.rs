//! Remote creature data
//!
//! [`CreatureSource`] is the seam between roster loading and the network.
//! [`HttpSource`] talks to the real API.

use async_trait::async_trait;
use pokeclash_protocol::{
    NamedResource, PokemonDetail, parse_pokemon_detail, parse_resource_list, pokemon_list_url,
};

use crate::error::RosterError;

/// Read-only access to roster listings and detail records
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// The first `limit` entries of the creature listing
    async fn list(&self, limit: usize) -> Result<Vec<NamedResource>, RosterError>;

    /// Full detail record for one listing entry
    async fn detail(&self, entry: &NamedResource) -> Result<PokemonDetail, RosterError>;
}

/// HTTP source backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET a URL and return the body of a successful response
    async fn get_text(&self, url: &str) -> Result<String, RosterError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| RosterError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| RosterError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl CreatureSource for HttpSource {
    async fn list(&self, limit: usize) -> Result<Vec<NamedResource>, RosterError> {
        let url = pokemon_list_url(&self.base_url, limit);
        let body = self.get_text(&url).await?;

        let list = parse_resource_list(&body).map_err(|source| RosterError::Data {
            name: "roster listing".to_string(),
            source,
        })?;

        Ok(list.results.into_iter().take(limit).collect())
    }

    async fn detail(&self, entry: &NamedResource) -> Result<PokemonDetail, RosterError> {
        tracing::debug!(name = %entry.name, url = %entry.url, "Fetching creature detail");

        let body = self.get_text(&entry.url).await?;
        parse_pokemon_detail(&body).map_err(|source| RosterError::Data {
            name: entry.name.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    const LISTING: &str = r#"{"count": 3, "results": [
        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
        {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"},
        {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/"}
    ]}"#;

    const BULBASAUR: &str = r#"{
        "name": "bulbasaur",
        "sprites": {"front_default": "1.png"},
        "abilities": [{"ability": {"name": "overgrow", "url": ""}}],
        "stats": [{"base_stat": 45}, {"base_stat": 49}]
    }"#;

    /// Answer every connection with the same response; returns the base URL
    async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_list_truncates_to_limit() {
        let base = serve("200 OK", LISTING).await;

        let entries = HttpSource::new(base).list(2).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "ivysaur");
    }

    #[tokio::test]
    async fn test_detail() {
        let base = serve("200 OK", BULBASAUR).await;
        let entry = NamedResource::new("bulbasaur", format!("{base}/pokemon/1/"));

        let detail = HttpSource::new(base).detail(&entry).await.unwrap();
        assert_eq!(detail.attack_basis(), Ok(49));
        assert_eq!(detail.ability_names(), vec!["overgrow"]);
    }

    #[tokio::test]
    async fn test_status_error() {
        let base = serve("404 Not Found", "").await;

        let err = HttpSource::new(base.clone()).list(3).await.unwrap_err();
        assert!(err.is_network());
        match err {
            RosterError::Status { url, status } => {
                assert_eq!(status, 404);
                assert_eq!(url, format!("{base}/pokemon?limit=3"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpSource::new(format!("http://{addr}"))
            .list(3)
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert!(matches!(err, RosterError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_malformed_listing() {
        let base = serve("200 OK", r#"{"results": 5}"#).await;

        let err = HttpSource::new(base).list(3).await.unwrap_err();
        assert!(!err.is_network());
        assert!(matches!(err, RosterError::Data { ref name, .. } if name == "roster listing"));
    }
}

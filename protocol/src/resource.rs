//! Paginated `NamedAPIResourceList` payloads

use serde::Deserialize;

use crate::DataError;

/// A `{ name, url }` pair pointing at a detail record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One page of a resource listing
///
/// Pagination fields are ignored; the limit asks for everything at once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceList {
    pub results: Vec<NamedResource>,
}

/// Build the roster listing URL: `{base}/pokemon?limit={limit}`
pub fn pokemon_list_url(base: &str, limit: usize) -> String {
    format!("{}/pokemon?limit={}", base.trim_end_matches('/'), limit)
}

/// Parse a listing body
pub fn parse_resource_list(body: &str) -> Result<ResourceList, DataError> {
    if body.trim().is_empty() {
        return Err(DataError::EmptyPayload);
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_list_url() {
        assert_eq!(
            pokemon_list_url("https://pokeapi.co/api/v2", 151),
            "https://pokeapi.co/api/v2/pokemon?limit=151"
        );
        assert_eq!(
            pokemon_list_url("http://localhost:8080/", 3),
            "http://localhost:8080/pokemon?limit=3"
        );
    }

    #[test]
    fn test_parse_resource_list() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let list = parse_resource_list(body).unwrap();
        assert_eq!(list.results.len(), 2);
        assert_eq!(
            list.results[1],
            NamedResource::new("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/")
        );
    }

    #[test]
    fn test_parse_resource_list_missing_results() {
        let result = parse_resource_list(r#"{"count": 0}"#);
        assert!(matches!(result, Err(DataError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_resource_list_empty() {
        assert_eq!(parse_resource_list("  "), Err(DataError::EmptyPayload));
    }
}

//! Wire types for the PokeAPI endpoints PokeClash reads.
//!
//! Only the fields the game consumes are modelled; everything else in the
//! payloads is ignored by serde.

use thiserror::Error;

pub mod pokemon;
pub mod resource;

pub use pokemon::{
    ABILITY_LIMIT, AbilityRef, AbilitySlot, PokemonDetail, Sprites, StatEntry, parse_pokemon_detail,
};
pub use resource::{NamedResource, ResourceList, parse_resource_list, pokemon_list_url};

/// Default public API root
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Empty payload")]
    EmptyPayload,
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::InvalidFormat(err.to_string())
    }
}

//! `/pokemon/{id}` detail payloads


use serde::Deserialize;

use crate::DataError;

/// Maximum number of abilities carried over from a detail record
pub const ABILITY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Only the ability name is read; its `url` may be absent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilityRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: AbilityRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
}

/// Detail record for a single creature
///
/// Stats are positional as served by the API: index 0 is HP, index 1 is attack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub sprites: Sprites,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatEntry>,
}

impl PokemonDetail {
    /// HP base stat (`stats[0].base_stat`)
    pub fn hp_basis(&self) -> Result<u32, DataError> {
        self.base_stat(0, "stats[0].base_stat")
    }

    /// Attack base stat (`stats[1].base_stat`)
    pub fn attack_basis(&self) -> Result<u32, DataError> {
        self.base_stat(1, "stats[1].base_stat")
    }

    /// Default front sprite URL
    pub fn sprite(&self) -> Result<&str, DataError> {
        self.sprites
            .front_default
            .as_deref()
            .ok_or_else(|| DataError::MissingField("sprites.front_default".to_string()))
    }

    /// Names of the first [`ABILITY_LIMIT`] abilities, in slot order as served
    pub fn ability_names(&self) -> Vec<String> {
        self.abilities
            .iter()
            .take(ABILITY_LIMIT)
            .map(|slot| slot.ability.name.clone())
            .collect()
    }

    fn base_stat(&self, index: usize, field: &str) -> Result<u32, DataError> {
        let entry = self
            .stats
            .get(index)
            .ok_or_else(|| DataError::MissingField(field.to_string()))?;

        if entry.base_stat == 0 {
            return Err(DataError::InvalidValue {
                field: field.to_string(),
                value: entry.base_stat.to_string(),
            });
        }

        Ok(entry.base_stat)
    }
}

/// Parse a detail body
pub fn parse_pokemon_detail(body: &str) -> Result<PokemonDetail, DataError> {
    if body.trim().is_empty() {
        return Err(DataError::EmptyPayload);
    }

    Ok(serde_json::from_str(body)?)
}

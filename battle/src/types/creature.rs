//! Creature state types

use pokeclash_protocol::{ABILITY_LIMIT, DataError, PokemonDetail};

use crate::damage::ATTACK;

/// Max HP is the HP base stat scaled by this factor
pub const HP_MULTIPLIER: u32 = 5;

/// A playable or opponent creature
///
/// Identity and stats are fixed at creation. Only `current_hp` changes, and
/// only through [`Creature::take_damage`] and [`Creature::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    image_ref: String,
    abilities: Vec<String>,
    max_hp: u32,
    current_hp: u32,
    base_attack: u32,
}

impl Creature {
    /// Create a creature at full health
    ///
    /// `hp_stat` is the HP base stat; max HP is derived from it. Abilities
    /// beyond the first three are dropped.
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        abilities: Vec<String>,
        hp_stat: u32,
        base_attack: u32,
    ) -> Self {
        let max_hp = hp_stat.saturating_mul(HP_MULTIPLIER);
        let mut abilities = abilities;
        abilities.truncate(ABILITY_LIMIT);

        Self {
            name: name.into(),
            image_ref: image_ref.into(),
            abilities,
            max_hp,
            current_hp: max_hp,
            base_attack,
        }
    }

    /// Create from a protocol detail record
    pub fn from_protocol(detail: &PokemonDetail) -> Result<Self, DataError> {
        Ok(Self::new(
            detail.name.clone(),
            detail.sprite()?,
            detail.ability_names(),
            detail.hp_basis()?,
            detail.attack_basis()?,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    /// Abilities the player can pick from
    ///
    /// A creature with no abilities falls back to a plain attack.
    pub fn moves(&self) -> Vec<String> {
        if self.abilities.is_empty() {
            vec![ATTACK.to_string()]
        } else {
            self.abilities.clone()
        }
    }

    /// Whether `ability` is one of [`Creature::moves`]
    pub fn knows(&self, ability: &str) -> bool {
        if self.abilities.is_empty() {
            ability == ATTACK
        } else {
            self.abilities.iter().any(|a| a == ability)
        }
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        hp_percent(self.current_hp, self.max_hp)
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, saturating at zero. Returns the remaining HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.current_hp
    }

    /// Back to full health
    pub fn restore(&mut self) {
        self.current_hp = self.max_hp;
    }
}

/// Health bar fill for `current` out of `max`, clamped to 0-100
pub fn hp_percent(current: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let percent = (u64::from(current) * 100) / u64::from(max);
    percent.min(100) as u32
}

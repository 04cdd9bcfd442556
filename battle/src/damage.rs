//! Damage model
//!
//! `damage = floor(base_attack * multiplier * (0.2 + roll * 0.3))` with `roll`
//! uniform in `[0, 1)`. Plain [`ATTACK`] uses a multiplier of 1.0; every other
//! ability is boosted to 1.5.

use rand::Rng;

/// The plain attack every enemy uses
pub const ATTACK: &str = "Attack";

pub const ATTACK_MULTIPLIER: f64 = 1.0;
pub const BOOSTED_MULTIPLIER: f64 = 1.5;

/// Lowest scaling factor (roll = 0)
pub const MIN_FACTOR: f64 = 0.2;
/// Width of the scaling factor range, exclusive upper end at 0.5
pub const FACTOR_SPREAD: f64 = 0.3;

/// Damage multiplier for an ability name
pub fn multiplier(ability: &str) -> f64 {
    if ability == ATTACK {
        ATTACK_MULTIPLIER
    } else {
        BOOSTED_MULTIPLIER
    }
}

/// Roll damage with `rng`
pub fn compute_damage<R: Rng + ?Sized>(base_attack: u32, ability: &str, rng: &mut R) -> u32 {
    let roll = rng.gen_range(0.0..1.0);
    damage_for_roll(base_attack, ability, roll)
}

/// Damage for a given roll in `[0, 1)`
///
/// Out of range rolls are clamped. The result always lies within
/// [`damage_bounds`].
pub fn damage_for_roll(base_attack: u32, ability: &str, roll: f64) -> u32 {
    let roll = if roll.is_nan() {
        0.0
    } else {
        roll.clamp(0.0, 1.0)
    };
    let factor = MIN_FACTOR + roll * FACTOR_SPREAD;
    let raw = (f64::from(base_attack) * multiplier(ability) * factor).floor();

    let (min, max) = damage_bounds(base_attack, ability);
    (raw.max(0.0) as u32).clamp(min, max)
}

/// Inclusive `(min, max)` damage for an attacker and ability
///
/// Computed in tenths so the bounds are exact: `min = floor(x * 0.2)` and
/// `max` is the largest integer strictly below `x * 0.5`, where
/// `x = base_attack * multiplier`.
pub fn damage_bounds(base_attack: u32, ability: &str) -> (u32, u32) {
    let tenths_per_point: u64 = if ability == ATTACK { 10 } else { 15 };
    let tenths = u64::from(base_attack) * tenths_per_point;

    let min = tenths / 50;
    let max = if tenths % 20 == 0 {
        (tenths / 20).saturating_sub(1)
    } else {
        tenths / 20
    };

    (min as u32, max.max(min) as u32)
}

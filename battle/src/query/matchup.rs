//! Enemy selection and candidate filtering

use rand::Rng;

use crate::types::{Creature, Roster};

/// Pick an enemy uniformly at random and remove it from the roster
pub fn pick_enemy<R: Rng + ?Sized>(roster: &mut Roster, rng: &mut R) -> Option<Creature> {
    if roster.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..roster.len());
    roster.remove_at(index)
}

/// Roster creatures whose attack is within `attack_tolerance` of the enemy's
///
/// Keeps roster order and stops after `max_candidates`. May be empty.
pub fn candidates_for(
    enemy: &Creature,
    roster: &Roster,
    max_candidates: usize,
    attack_tolerance: u32,
) -> Vec<Creature> {
    roster
        .iter()
        .filter(|c| c.base_attack().abs_diff(enemy.base_attack()) <= attack_tolerance)
        .take(max_candidates)
        .cloned()
        .collect()
}

/// The `max_candidates` roster creatures closest in attack to the enemy
///
/// Ties keep roster order. Only empty when the roster is.
pub fn closest_candidates(
    enemy: &Creature,
    roster: &Roster,
    max_candidates: usize,
) -> Vec<Creature> {
    let mut ranked: Vec<&Creature> = roster.iter().collect();
    ranked.sort_by_key(|c| c.base_attack().abs_diff(enemy.base_attack()));

    ranked.into_iter().take(max_candidates).cloned().collect()
}

/// Take `candidates[index]` out of the roster for the player
pub fn select_player(
    candidates: &[Creature],
    index: usize,
    roster: &mut Roster,
) -> Option<Creature> {
    let chosen = candidates.get(index)?;
    roster.take(chosen.name())
}

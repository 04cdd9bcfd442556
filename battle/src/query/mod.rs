//! Matchup selection
//!
//! Helpers that pick the enemy for a round and narrow the roster down to
//! creatures the player may field against it.

mod matchup;

pub use matchup::{candidates_for, closest_candidates, pick_enemy, select_player};

//! Domain types for battle state

mod creature;
mod roster;
mod side;

pub use creature::{Creature, HP_MULTIPLIER, hp_percent};
pub use roster::Roster;
pub use side::Side;

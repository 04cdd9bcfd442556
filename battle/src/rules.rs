//! Game rules

/// Tunable limits for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Rounds played before the game ends
    pub max_rounds: u32,

    /// How many creatures the player is offered each round
    pub max_candidates: usize,

    /// Largest attack difference between enemy and candidate
    pub attack_tolerance: u32,
}

impl Rules {
    /// Round wins needed to take the game (a majority of `max_rounds`)
    pub fn wins_needed(&self) -> u32 {
        self.max_rounds / 2 + 1
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            max_candidates: 6,
            attack_tolerance: 10,
        }
    }
}

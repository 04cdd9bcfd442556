//! Intents consumed by the session and events it emits

use crate::types::{Creature, Side};

/// A command from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Pick the candidate at this index of the last offered list
    SelectCreature(usize),

    /// Use a named ability of the player's creature
    UseAbility(String),
}

/// One attack landing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Who attacked
    pub attacker: Side,
    pub attacker_name: String,
    pub ability: String,
    pub damage: u32,
    /// Defender HP after the hit
    pub target_hp: u32,
    pub target_max_hp: u32,
}

impl Hit {
    pub fn target(&self) -> Side {
        self.attacker.opponent()
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Side,
    pub player_wins: u32,
    pub enemy_wins: u32,
}

impl GameOutcome {
    pub fn player_won(&self) -> bool {
        self.winner == Side::Player
    }
}

/// State change notifications, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    RoundStarted { round: u32 },
    EnemyChosen(Creature),
    CandidatesOffered(Vec<Creature>),
    PlayerChosen(Creature),
    AbilitiesOffered(Vec<String>),
    Hit(Hit),
    RoundEnded {
        winner: Side,
        player_wins: u32,
        enemy_wins: u32,
    },
    GameEnded(GameOutcome),
}

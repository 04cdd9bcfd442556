//! Battle session: round and game state machine

mod dispatch;
mod event;
mod state;

pub use event::{BattleEvent, GameOutcome, Hit, Intent};
pub use state::{BattleSession, Phase, SessionError};

//! Battle rules and state for PokeClash.
//!
//! # Overview
//!
//! `pokeclash-battle` sits between `pokeclash-protocol` (wire format) and the
//! client that drives a game:
//!
//! ```text
//! pokeclash-protocol (wire format)
//!        │
//!        ▼
//! pokeclash-battle (domain types + session) ← THIS CRATE
//!        │
//!        ▼
//! pokeclash-client (roster loading, presentation, game loop)
//! ```
//!
//! Everything here is synchronous and free of I/O. Randomness comes from a
//! session-owned [`rand::rngs::StdRng`].
//!
//! # Main Types
//!
//! - [`Creature`] - a fighter with fixed stats and mutable HP
//! - [`Roster`] - creatures not yet assigned to a combat role
//! - [`Rules`] - round count, candidate limit, attack tolerance
//! - [`BattleSession`] - the round/game state machine, driven by [`Intent`]s
//!   and reporting [`BattleEvent`]s
//!
//! # Example Usage
//!
//! ```ignore
//! use pokeclash_battle::{BattleSession, Intent, Roster, Rules};
//!
//! let mut session = BattleSession::new(Roster::new(creatures), Rules::default())?;
//! for event in session.drain_events() {
//!     println!("{:?}", event);
//! }
//!
//! let events = session.dispatch(Intent::SelectCreature(0))?;
//! let events = session.dispatch(Intent::UseAbility("overgrow".into()))?;
//! ```

pub mod damage;
pub mod query;
pub mod rules;
pub mod session;
pub mod types;

pub use damage::{ATTACK, compute_damage, damage_bounds, damage_for_roll, multiplier};
pub use query::{candidates_for, closest_candidates, pick_enemy, select_player};
pub use rules::Rules;
pub use session::{BattleEvent, BattleSession, GameOutcome, Hit, Intent, Phase, SessionError};
pub use types::{Creature, Roster, Side, hp_percent};

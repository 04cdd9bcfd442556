//! Async client for PokeClash: loads the roster over HTTP and runs games
//! against a [`Presenter`].
//!
//! # Example
//!
//! ```ignore
//! let config = ClientConfig::from_env();
//! let source = HttpSource::new(config.api_url.clone());
//! let (mut game, handle) = Game::new(source, MyPresenter::default(), config);
//!
//! // From the UI side
//! handle.select_creature(0)?;
//! handle.use_ability("overgrow")?;
//!
//! game.run().await?;
//! ```

pub mod config;
mod error;
mod game;
mod handle;
mod presenter;
mod roster;
pub mod sounds;
mod source;
mod stage;
mod timers;

pub use config::{ClientConfig, SoundConfig, TimingConfig};
pub use error::{PlaybackError, RosterError};
pub use game::Game;
pub use handle::GameHandle;
pub use presenter::Presenter;
pub use roster::fetch_roster;
pub use sounds::{Sound, SoundBank};
pub use source::{CreatureSource, HttpSource};
pub use stage::{GAME_LOST, GAME_WON, LOAD_FAILED, ROUND_LOST, ROUND_WON};

pub use pokeclash_battle::{
    BattleEvent, Creature, GameOutcome, Intent, Phase, Roster, Rules, Side,
};
pub use pokeclash_protocol::{NamedResource, POKEAPI_URL, PokemonDetail};

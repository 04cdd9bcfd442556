use pokeclash_battle::{Creature, Side};

use crate::error::PlaybackError;

/// Trait for presenting a game to the user.
///
/// The game loop calls these as notifications and never reads anything back.
/// All methods have default no-op implementations, so you only need to
/// implement what your frontend shows. User input goes the other way, as
/// intents sent through a [`GameHandle`](crate::GameHandle).
///
/// # Example
///
/// ```ignore
/// struct Console;
///
/// impl Presenter for Console {
///     fn append_log_entry(&mut self, text: &str) {
///         println!("{}", text);
///     }
/// }
/// ```
pub trait Presenter: Send {
    /// Called when a new round begins.
    fn render_round(&mut self, round: u32) {
        let _ = round;
    }

    /// Called when a creature takes the player or enemy slot.
    fn render_combatant(&mut self, side: Side, creature: &Creature) {
        let _ = (side, creature);
    }

    /// Called whenever a combatant's HP changes.
    fn update_health_bar(&mut self, side: Side, current_hp: u32, max_hp: u32) {
        let _ = (side, current_hp, max_hp);
    }

    /// Called with the creatures the player may pick this round.
    /// Picks are sent back by index into this slice.
    fn render_choices(&mut self, candidates: &[Creature]) {
        let _ = candidates;
    }

    /// Called with the abilities the player's creature can use.
    fn render_abilities(&mut self, abilities: &[String]) {
        let _ = abilities;
    }

    /// Called with a line for the battle log.
    fn append_log_entry(&mut self, text: &str) {
        let _ = text;
    }

    /// Called to show a transient message.
    fn show_flash_message(&mut self, text: &str) {
        let _ = text;
    }

    /// Called when the current flash message should disappear.
    fn hide_flash_message(&mut self) {}

    /// Called to play a sound effect.
    fn play_sound(&mut self, path: &str) -> Result<(), PlaybackError> {
        let _ = path;
        Ok(())
    }

    /// Called to play a creature's cry.
    fn play_creature_cry(&mut self, name: &str, path: &str) -> Result<(), PlaybackError> {
        let _ = (name, path);
        Ok(())
    }

    /// Called when the game cannot start.
    fn show_alert(&mut self, text: &str) {
        let _ = text;
    }
}

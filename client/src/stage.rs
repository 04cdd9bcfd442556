//! Turns battle events into presenter calls

use pokeclash_battle::{BattleEvent, Creature, GameOutcome, Hit, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::presenter::Presenter;
use crate::sounds::{Sound, SoundBank};

pub const ROUND_WON: &str = "You won this round!";
pub const ROUND_LOST: &str = "You lost this round.";
pub const GAME_WON: &str = "Congratulations! You won the game!";
pub const GAME_LOST: &str = "You lost the game. Better luck next time!";
pub const LOAD_FAILED: &str = "Failed to load Pokémon. Please try again later.";

/// Follow-up the game loop has to schedule after an event was shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cue {
    /// A flash message went up and needs dismissing later
    Flash,
    /// The game ended
    GameOver,
}

/// Presenter plus the bits needed to drive it: sound paths and the RNG that
/// picks attack sound variants
pub(crate) struct Stage<P> {
    presenter: P,
    sounds: SoundBank,
    rng: StdRng,
}

impl<P: Presenter> Stage<P> {
    pub fn new(presenter: P, sounds: SoundBank) -> Self {
        Self {
            presenter,
            sounds,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Show one event, returning what the caller should schedule for it
    pub fn show(&mut self, event: &BattleEvent) -> Vec<Cue> {
        match event {
            BattleEvent::RoundStarted { round } => {
                self.play(Sound::RoundStart);
                self.presenter.render_round(*round);
                Vec::new()
            }
            BattleEvent::EnemyChosen(creature) => {
                self.show_combatant(Side::Enemy, creature);
                Vec::new()
            }
            BattleEvent::CandidatesOffered(candidates) => {
                self.presenter.render_choices(candidates);
                Vec::new()
            }
            BattleEvent::PlayerChosen(creature) => {
                self.show_combatant(Side::Player, creature);
                Vec::new()
            }
            BattleEvent::AbilitiesOffered(abilities) => {
                self.presenter.render_abilities(abilities);
                Vec::new()
            }
            BattleEvent::Hit(hit) => {
                self.show_hit(hit);
                Vec::new()
            }
            BattleEvent::RoundEnded { winner, .. } => {
                if *winner == Side::Player {
                    self.presenter.show_flash_message(ROUND_WON);
                    self.play(Sound::WinRound);
                } else {
                    self.presenter.show_flash_message(ROUND_LOST);
                    self.play(Sound::LoseRound);
                }
                vec![Cue::Flash]
            }
            BattleEvent::GameEnded(outcome) => {
                self.show_outcome(outcome);
                vec![Cue::Flash, Cue::GameOver]
            }
        }
    }

    pub fn hide_flash(&mut self) {
        self.presenter.hide_flash_message();
    }

    pub fn alert(&mut self, text: &str) {
        self.presenter.show_alert(text);
    }

    fn show_combatant(&mut self, side: Side, creature: &Creature) {
        tracing::info!(side = %side, name = creature.name(), "Creature chosen");

        self.presenter.render_combatant(side, creature);
        self.presenter.update_health_bar(side, creature.current_hp(), creature.max_hp());

        let path = self.sounds.cry_path(creature.name());
        if let Err(e) = self.presenter.play_creature_cry(creature.name(), &path) {
            tracing::warn!(error = %e, name = creature.name(), "Cry not found or failed to play");
        }
    }

    fn show_hit(&mut self, hit: &Hit) {
        self.presenter.update_health_bar(hit.target(), hit.target_hp, hit.target_max_hp);

        let line = match hit.attacker {
            Side::Player => format!(
                "Your {} used {} and dealt {} damage!",
                hit.attacker_name, hit.ability, hit.damage
            ),
            Side::Enemy => format!(
                "Enemy {} attacked and dealt {} damage!",
                hit.attacker_name, hit.damage
            ),
        };
        self.presenter.append_log_entry(&line);

        let sound = SoundBank::random_attack(&mut self.rng);
        self.play(sound);
    }

    fn show_outcome(&mut self, outcome: &GameOutcome) {
        tracing::info!(
            player_wins = outcome.player_wins,
            enemy_wins = outcome.enemy_wins,
            "Game over"
        );

        if outcome.player_won() {
            self.presenter.show_flash_message(GAME_WON);
            self.play(Sound::WinGame);
        } else {
            self.presenter.show_flash_message(GAME_LOST);
            self.play(Sound::LoseGame);
        }
    }

    fn play(&mut self, sound: Sound) {
        let path = self.sounds.path(sound);
        if let Err(e) = self.presenter.play_sound(&path) {
            tracing::warn!(error = %e, "Failed to play sound");
        }
    }
}

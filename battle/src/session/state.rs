//! BattleSession - state for one game

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use super::event::{BattleEvent, GameOutcome};
use crate::query::{candidates_for, closest_candidates, pick_enemy};
use crate::rules::Rules;
use crate::types::{Creature, Roster};

/// Where the session is in the round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to pick a creature from the candidates
    Selecting,

    /// Player and enemy are trading turns
    Fighting,

    /// Terminal; a new session is needed to play again
    ///
    /// A game the roster could not fill to `max_rounds` is scored on the
    /// rounds played: the leader wins and a tie goes to the enemy.
    GameOver(GameOutcome),
}

/// Why an intent was rejected
///
/// A rejected intent leaves the session untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No creature selection is pending")]
    NotSelecting,

    #[error("No fight in progress")]
    NotFighting,

    #[error("The game is over")]
    GameOver,

    #[error("Candidate {index} out of range ({len} offered)")]
    CandidateOutOfRange { index: usize, len: usize },

    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    #[error("Not enough creatures left in the roster")]
    RosterExhausted,
}

/// One game: rounds, tallies and the two active combatants
///
/// Created with the first round already set up. Apply player intents with
/// [`BattleSession::dispatch`]; opening events are available from
/// [`BattleSession::drain_events`].
#[derive(Debug)]
pub struct BattleSession {
    pub(crate) rules: Rules,
    pub(crate) roster: Roster,

    /// Current round (1-based)
    pub(crate) round: u32,
    pub(crate) player_wins: u32,
    pub(crate) enemy_wins: u32,

    pub(crate) player: Option<Creature>,
    pub(crate) enemy: Option<Creature>,

    /// Creatures offered for the pending selection
    pub(crate) candidates: Vec<Creature>,

    pub(crate) phase: Phase,
    pub(crate) rng: StdRng,

    /// Events not yet handed out
    pub(crate) pending: Vec<BattleEvent>,
}

impl BattleSession {
    /// Start a game with an entropy-seeded random source
    pub fn new(roster: Roster, rules: Rules) -> Result<Self, SessionError> {
        Self::with_rng(roster, rules, StdRng::from_entropy())
    }

    /// Start a game with a fixed seed
    pub fn with_seed(roster: Roster, rules: Rules, seed: u64) -> Result<Self, SessionError> {
        Self::with_rng(roster, rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(roster: Roster, rules: Rules, rng: StdRng) -> Result<Self, SessionError> {
        let mut session = Self {
            rules,
            roster,
            round: 1,
            player_wins: 0,
            enemy_wins: 0,
            player: None,
            enemy: None,
            candidates: Vec::new(),
            phase: Phase::Selecting,
            rng,
            pending: Vec::new(),
        };
        session.begin_round()?;
        Ok(session)
    }

    /// Set up the current round: new enemy, fresh candidate list
    pub(crate) fn begin_round(&mut self) -> Result<(), SessionError> {
        // One enemy plus at least one candidate
        if self.roster.len() < 2 {
            return Err(SessionError::RosterExhausted);
        }

        let mut enemy =
            pick_enemy(&mut self.roster, &mut self.rng).ok_or(SessionError::RosterExhausted)?;
        enemy.restore();

        let mut candidates = candidates_for(
            &enemy,
            &self.roster,
            self.rules.max_candidates,
            self.rules.attack_tolerance,
        );
        if candidates.is_empty() {
            candidates = closest_candidates(&enemy, &self.roster, self.rules.max_candidates);
        }

        self.pending.push(BattleEvent::RoundStarted { round: self.round });
        self.pending.push(BattleEvent::EnemyChosen(enemy.clone()));
        self.pending.push(BattleEvent::CandidatesOffered(candidates.clone()));

        self.enemy = Some(enemy);
        self.player = None;
        self.candidates = candidates;
        self.phase = Phase::Selecting;
        Ok(())
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn enemy_wins(&self) -> u32 {
        self.enemy_wins
    }

    /// Player's active creature (only while fighting)
    pub fn player(&self) -> Option<&Creature> {
        self.player.as_ref()
    }

    /// Enemy for the current round
    pub fn enemy(&self) -> Option<&Creature> {
        self.enemy.as_ref()
    }

    /// Creatures offered for the pending selection
    pub fn candidates(&self) -> &[Creature] {
        &self.candidates
    }

    /// Creatures not yet assigned to a combat role
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Final result, once the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(name: &str, attack: u32) -> Creature {
        Creature::new(name, "", vec!["tackle".to_string()], 20, attack)
    }

    #[test]
    fn test_new_session() {
        let roster = Roster::new((0..8).map(|i| creature(&format!("c{i}"), 50)).collect());
        let mut session = BattleSession::with_seed(roster, Rules::default(), 3).unwrap();

        assert_eq!(session.round(), 1);
        assert_eq!(session.player_wins(), 0);
        assert_eq!(session.enemy_wins(), 0);
        assert_eq!(session.phase(), Phase::Selecting);
        assert!(session.player().is_none());
        assert!(!session.is_over());
        assert!(session.outcome().is_none());

        let enemy = session.enemy().unwrap().clone();
        assert!(!session.roster().contains(enemy.name()));
        assert_eq!(session.roster().len(), 7);
        assert_eq!(session.candidates().len(), 6);

        let events = session.drain_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], BattleEvent::RoundStarted { round: 1 });
        assert_eq!(events[1], BattleEvent::EnemyChosen(enemy));
        assert!(matches!(&events[2], BattleEvent::CandidatesOffered(c) if c.len() == 6));

        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_new_session_needs_two_creatures() {
        let roster = Roster::new(vec![creature("only", 50)]);
        let result = BattleSession::with_seed(roster, Rules::default(), 1);
        assert!(matches!(result, Err(SessionError::RosterExhausted)));

        let result = BattleSession::new(Roster::default(), Rules::default());
        assert!(matches!(result, Err(SessionError::RosterExhausted)));
    }

    #[test]
    fn test_candidates_fall_back_to_closest() {
        let roster = Roster::new(vec![
            creature("a", 10),
            creature("b", 100),
            creature("c", 200),
            creature("d", 300),
        ]);
        let session = BattleSession::with_seed(roster, Rules::default(), 9).unwrap();

        let enemy_attack = session.enemy().unwrap().base_attack();
        assert_eq!(session.candidates().len(), 3);
        assert!(
            session
                .candidates()
                .iter()
                .all(|c| c.base_attack().abs_diff(enemy_attack) > 10)
        );
    }

    #[test]
    fn test_candidates_respect_tolerance() {
        let roster = Roster::new(
            (0..40)
                .map(|i| creature(&format!("c{i}"), 30 + i * 2))
                .collect(),
        );

        for seed in 0..20 {
            let session = BattleSession::with_seed(roster.clone(), Rules::default(), seed).unwrap();
            let enemy_attack = session.enemy().unwrap().base_attack();
            let matching = session
                .roster()
                .iter()
                .filter(|c| c.base_attack().abs_diff(enemy_attack) <= 10)
                .count();

            assert_eq!(session.candidates().len(), matching.min(6));
            for c in session.candidates() {
                assert!(c.base_attack().abs_diff(enemy_attack) <= 10);
            }
        }
    }
}

//! Intent handling: selection, turns and round resolution

use super::event::{BattleEvent, GameOutcome, Hit, Intent};
use super::state::{BattleSession, Phase, SessionError};
use crate::damage::{ATTACK, compute_damage};
use crate::query::select_player;
use crate::types::Side;

impl BattleSession {
    /// Apply one intent and return the events it produced
    ///
    /// Events still pending from session creation are returned first.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Vec<BattleEvent>, SessionError> {
        match intent {
            Intent::SelectCreature(index) => self.select_creature(index)?,
            Intent::UseAbility(ability) => self.use_ability(&ability)?,
        }
        Ok(self.drain_events())
    }

    fn select_creature(&mut self, index: usize) -> Result<(), SessionError> {
        match self.phase {
            Phase::Selecting => {}
            Phase::Fighting => return Err(SessionError::NotSelecting),
            Phase::GameOver(_) => return Err(SessionError::GameOver),
        }

        let len = self.candidates.len();
        let mut player = select_player(&self.candidates, index, &mut self.roster)
            .ok_or(SessionError::CandidateOutOfRange { index, len })?;

        player.restore();
        if let Some(enemy) = self.enemy.as_mut() {
            enemy.restore();
        }

        self.candidates.clear();
        self.pending.push(BattleEvent::PlayerChosen(player.clone()));
        self.pending.push(BattleEvent::AbilitiesOffered(player.moves()));

        self.player = Some(player);
        self.phase = Phase::Fighting;
        Ok(())
    }

    /// Player turn, then enemy turn unless the enemy went down
    fn use_ability(&mut self, ability: &str) -> Result<(), SessionError> {
        match self.phase {
            Phase::Fighting => {}
            Phase::Selecting => return Err(SessionError::NotFighting),
            Phase::GameOver(_) => return Err(SessionError::GameOver),
        }

        let (Some(player), Some(enemy)) = (self.player.as_mut(), self.enemy.as_mut()) else {
            return Err(SessionError::NotFighting);
        };

        if !player.knows(ability) {
            return Err(SessionError::UnknownAbility(ability.to_string()));
        }

        let damage = compute_damage(player.base_attack(), ability, &mut self.rng);
        let remaining = enemy.take_damage(damage);
        self.pending.push(BattleEvent::Hit(Hit {
            attacker: Side::Player,
            attacker_name: player.name().to_string(),
            ability: ability.to_string(),
            damage,
            target_hp: remaining,
            target_max_hp: enemy.max_hp(),
        }));

        let winner = if enemy.is_defeated() {
            Some(Side::Player)
        } else {
            let damage = compute_damage(enemy.base_attack(), ATTACK, &mut self.rng);
            let remaining = player.take_damage(damage);
            self.pending.push(BattleEvent::Hit(Hit {
                attacker: Side::Enemy,
                attacker_name: enemy.name().to_string(),
                ability: ATTACK.to_string(),
                damage,
                target_hp: remaining,
                target_max_hp: player.max_hp(),
            }));

            player.is_defeated().then_some(Side::Enemy)
        };

        if let Some(winner) = winner {
            self.finish_round(winner);
        }
        Ok(())
    }

    /// Record the round result, then either end the game or set up the next round
    fn finish_round(&mut self, winner: Side) {
        match winner {
            Side::Player => self.player_wins += 1,
            Side::Enemy => self.enemy_wins += 1,
        }

        self.pending.push(BattleEvent::RoundEnded {
            winner,
            player_wins: self.player_wins,
            enemy_wins: self.enemy_wins,
        });

        // Combatants are spent; they never return to the roster
        self.player = None;
        self.enemy = None;

        if self.round >= self.rules.max_rounds {
            self.end_game();
            return;
        }

        if self.reset_round().is_err() {
            self.end_game();
        }
    }

    /// Advance to the next round with a new enemy and candidate list
    pub(crate) fn reset_round(&mut self) -> Result<(), SessionError> {
        if self.roster.len() < 2 {
            return Err(SessionError::RosterExhausted);
        }

        self.round += 1;
        self.begin_round()
    }

    /// Close the game
    ///
    /// A full game goes to the player with a majority of `max_rounds`. A game
    /// cut short by an empty roster goes to whoever leads the tally, and a tie
    /// goes to the enemy.
    fn end_game(&mut self) {
        let player_won = if self.round < self.rules.max_rounds {
            self.player_wins > self.enemy_wins
        } else {
            self.player_wins >= self.rules.wins_needed()
        };
        let winner = if player_won {
            Side::Player
        } else {
            Side::Enemy
        };

        let outcome = GameOutcome {
            winner,
            player_wins: self.player_wins,
            enemy_wins: self.enemy_wins,
        };

        self.candidates.clear();
        self.phase = Phase::GameOver(outcome);
        self.pending.push(BattleEvent::GameEnded(outcome));
    }
}

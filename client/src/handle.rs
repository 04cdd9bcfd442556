use anyhow::{Result, anyhow};
use pokeclash_battle::Intent;
use tokio::sync::mpsc;

/// Cloneable handle for sending player intents to a running game.
///
/// Dropping every handle stops the game loop.
#[derive(Clone, Debug)]
pub struct GameHandle {
    tx: mpsc::UnboundedSender<Intent>,
}

impl GameHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Intent>) -> Self {
        Self { tx }
    }

    fn send(&self, intent: Intent) -> Result<()> {
        self.tx.send(intent).map_err(|_| anyhow!("Game stopped"))
    }

    /// Pick the creature at `index` of the last rendered choices
    pub fn select_creature(&self, index: usize) -> Result<()> {
        self.send(Intent::SelectCreature(index))
    }

    /// Use one of the player's abilities
    pub fn use_ability(&self, ability: &str) -> Result<()> {
        self.send(Intent::UseAbility(ability.to_string()))
    }
}

//! Pool of creatures still available for selection

use std::collections::HashSet;

use super::creature::Creature;

/// Creatures not yet assigned to a combat role
///
/// Names are unique. Once a creature is taken out it never comes back.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    creatures: Vec<Creature>,
}

impl Roster {
    /// Build a roster, keeping the first creature for any repeated name
    pub fn new(creatures: Vec<Creature>) -> Self {
        let mut seen = HashSet::new();
        let creatures = creatures
            .into_iter()
            .filter(|c| seen.insert(c.name().to_string()))
            .collect();

        Self { creatures }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.creatures.iter().any(|c| c.name() == name)
    }

    /// Remove and return the creature at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<Creature> {
        if index < self.creatures.len() {
            Some(self.creatures.remove(index))
        } else {
            None
        }
    }

    /// Remove and return the creature named `name`
    pub fn take(&mut self, name: &str) -> Option<Creature> {
        let index = self.creatures.iter().position(|c| c.name() == name)?;
        self.remove_at(index)
    }
}

impl From<Vec<Creature>> for Roster {
    fn from(creatures: Vec<Creature>) -> Self {
        Self::new(creatures)
    }
}

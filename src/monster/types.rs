use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Immutable reference stats for one monster.
///
/// Combat never mutates a record; bouts work on a
/// [`CombatState`](crate::combat::CombatState) copied from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterRecord {
    /// Short stable key, e.g. `"dragon"`.
    pub label: String,
    /// Display name.
    pub name: String,
    /// Starting hit points.
    pub hp: i32,
    /// Base damage dealt per attack.
    pub attack: i32,
    /// Percentage of incoming damage absorbed, in `0..100`.
    pub defense: i32,
}

impl MonsterRecord {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        hp: i32,
        attack: i32,
        defense: i32,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            hp,
            attack,
            defense,
        }
    }
}

/// Ordered collection of monster records as supplied by a record source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    monsters: Vec<MonsterRecord>,
}

impl Roster {
    pub fn new(monsters: Vec<MonsterRecord>) -> Self {
        Self { monsters }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonsterRecord> {
        self.monsters.iter()
    }

    pub fn as_slice(&self) -> &[MonsterRecord] {
        &self.monsters
    }

    pub fn into_vec(self) -> Vec<MonsterRecord> {
        self.monsters
    }

    pub fn labels(&self) -> Vec<&str> {
        self.monsters.iter().map(|m| m.label.as_str()).collect()
    }

    /// Finds a monster by its label.
    pub fn find(&self, label: &str) -> Result<&MonsterRecord> {
        self.monsters
            .iter()
            .find(|m| m.label == label)
            .ok_or_else(|| RosterError::UnknownMonster(label.to_string()))
    }
}

impl From<Vec<MonsterRecord>> for Roster {
    fn from(monsters: Vec<MonsterRecord>) -> Self {
        Self::new(monsters)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a MonsterRecord;
    type IntoIter = std::slice::Iter<'a, MonsterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.monsters.iter()
    }
}

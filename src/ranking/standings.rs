//! Round-robin scoring: every pair fights once and wins are counted.

use serde::Serialize;

use crate::combat::resolve;
use crate::monster::MonsterRecord;

/// Win/loss tally for one monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub record: MonsterRecord,
    pub wins: u32,
    pub losses: u32,
}

/// Round-robin result, strongest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    pub entries: Vec<Standing>,
    pub bouts: usize,
}

impl Standings {
    /// Fights every unordered pair once, the earlier record as side A.
    ///
    /// Entries are ordered by wins, highest first. Equal scores keep roster
    /// order.
    pub fn compute(records: &[MonsterRecord]) -> Self {
        let mut wins = vec![0u32; records.len()];
        let mut losses = vec![0u32; records.len()];
        let mut bouts = 0;

        for i in 0..records.len() {
            for j in (i + 1)..records.len() {
                bouts += 1;
                let (winner, loser) = if resolve(&records[i], &records[j]) {
                    (i, j)
                } else {
                    (j, i)
                };
                wins[winner] += 1;
                losses[loser] += 1;
            }
        }

        let mut entries: Vec<Standing> = records
            .iter()
            .zip(wins.into_iter().zip(losses))
            .map(|(record, (wins, losses))| Standing {
                record: record.clone(),
                wins,
                losses,
            })
            .collect();
        entries.sort_by(|a, b| b.wins.cmp(&a.wins));

        Self { entries, bouts }
    }

    pub fn into_records(self) -> Vec<MonsterRecord> {
        self.entries.into_iter().map(|s| s.record).collect()
    }

    pub fn wins_of(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|s| s.record.label == label)
            .map(|s| s.wins)
    }
}

use clap::ValueEnum;
use serde::Serialize;

use super::sort::merge_sort_by;
use super::standings::Standings;
use crate::combat::resolve;
use crate::monster::MonsterRecord;

/// How the roster is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Sort with the bout resolver as the ordering predicate.
    #[default]
    Pairwise,
    /// Fight every pair once and sort by win count.
    RoundRobin,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Pairwise => write!(f, "pairwise"),
            Strategy::RoundRobin => write!(f, "round-robin"),
        }
    }
}

/// Adjacent pair in a ranking where the earlier monster loses to the later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderViolation {
    pub position: usize,
    pub ahead: String,
    pub behind: String,
}

/// Result of ranking a roster.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub strategy: Strategy,
    /// Strongest first.
    pub order: Vec<MonsterRecord>,
    /// Bouts fought to produce `order`.
    pub bouts: usize,
    /// Round-robin tally, present only for [`Strategy::RoundRobin`].
    pub standings: Option<Standings>,
    pub violations: Vec<OrderViolation>,
}

impl Ranking {
    pub fn labels(&self) -> Vec<&str> {
        self.order.iter().map(|m| m.label.as_str()).collect()
    }

    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Orders `records` strongest first using the bout resolver as predicate.
///
/// Every input record appears exactly once in the output. The input is not
/// modified.
pub fn rank_pairwise(records: &[MonsterRecord]) -> (Vec<MonsterRecord>, usize) {
    let mut bouts = 0;
    let order = merge_sort_by(records.to_vec(), |ahead, behind| {
        bouts += 1;
        resolve(ahead, behind)
    });
    (order, bouts)
}

/// Ranks a roster with the given strategy.
pub fn rank(records: &[MonsterRecord], strategy: Strategy) -> Ranking {
    let (order, bouts, standings) = match strategy {
        Strategy::Pairwise => {
            let (order, bouts) = rank_pairwise(records);
            (order, bouts, None)
        }
        Strategy::RoundRobin => {
            let standings = Standings::compute(records);
            let bouts = standings.bouts;
            (standings.clone().into_records(), bouts, Some(standings))
        }
    };

    let violations = adjacent_violations(&order);
    if !violations.is_empty() {
        tracing::warn!(
            %strategy,
            count = violations.len(),
            "ranking has adjacent pairs where the lower monster wins"
        );
    }
    tracing::info!(%strategy, monsters = order.len(), bouts, "roster ranked");

    Ranking {
        strategy,
        order,
        bouts,
        standings,
        violations,
    }
}

/// Lists adjacent pairs in `order` where the earlier monster loses the bout.
pub fn adjacent_violations(order: &[MonsterRecord]) -> Vec<OrderViolation> {
    order
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| !resolve(&pair[0], &pair[1]))
        .map(|(position, pair)| OrderViolation {
            position,
            ahead: pair[0].label.clone(),
            behind: pair[1].label.clone(),
        })
        .collect()
}

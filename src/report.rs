//! Ranking and bout report generation.

use serde::Serialize;

use crate::build_info::{self, BUILD_COMMIT};
use crate::combat::{BoutOutcome, Side};
use crate::monster::{MonsterRecord, Roster};
use crate::ranking::Ranking;

/// Everything printed for one ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub source: String,
    /// Roster in source order, with starting stats.
    pub roster: Roster,
    pub ranking: Ranking,
    pub build_commit: String,
    pub generated_at: String,
}

impl RankReport {
    pub fn new(source: impl Into<String>, roster: Roster, ranking: Ranking) -> Self {
        Self {
            source: source.into(),
            roster,
            ranking,
            build_commit: BUILD_COMMIT.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Produce a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      BESTIARY RANKING\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Source: {} ({} monsters)\nStrategy: {}, {} bouts\n\n",
            self.source,
            self.roster.len(),
            self.ranking.strategy,
            self.ranking.bouts
        ));

        report.push_str("── BEFORE ───────────────────────────────────────────────────────\n");
        push_table(&mut report, self.roster.iter());
        report.push('\n');

        report.push_str("── AFTER ────────────────────────────────────────────────────────\n");
        push_table(&mut report, self.ranking.order.iter());
        report.push('\n');

        if let Some(standings) = &self.ranking.standings {
            report.push_str("── STANDINGS ────────────────────────────────────────────────────\n");
            for (place, entry) in standings.entries.iter().enumerate() {
                report.push_str(&format!(
                    "  {:>2}. {:<10} {:>2} W {:>2} L\n",
                    place + 1,
                    entry.record.label,
                    entry.wins,
                    entry.losses
                ));
            }
            report.push('\n');
        }

        if !self.ranking.violations.is_empty() {
            report.push_str("── UPSETS ───────────────────────────────────────────────────────\n");
            report.push_str("  Bout outcomes are not a total order; these neighbours disagree:\n");
            for v in &self.ranking.violations {
                report.push_str(&format!(
                    "  #{} {} ranked above {} but loses to it\n",
                    v.position + 1,
                    v.ahead,
                    v.behind
                ));
            }
            report.push('\n');
        }

        report.push_str(&format!("{}\n", build_info::summary()));
        report
    }

    /// Export report as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// One fixed-width roster row.
pub fn format_row(monster: &MonsterRecord) -> String {
    format!(
        "{:>10} {:>12} : HP({:>4}) ATK({:>3}) DEF({:>3})",
        monster.label, monster.name, monster.hp, monster.attack, monster.defense
    )
}

fn push_table<'a>(report: &mut String, monsters: impl Iterator<Item = &'a MonsterRecord>) {
    let mut empty = true;
    for monster in monsters {
        report.push_str(&format_row(monster));
        report.push('\n');
        empty = false;
    }
    if empty {
        report.push_str("  (no monsters)\n");
    }
}

/// Round-by-round narration of a single bout.
pub fn bout_transcript(a: &MonsterRecord, b: &MonsterRecord, outcome: &BoutOutcome) -> String {
    let mut text = format!("{} vs {}\n", a.name, b.name);

    if outcome.stalemate {
        text.push_str("  Neither side can deal damage; decided on starting HP.\n");
    }

    for round in &outcome.log {
        text.push_str(&format!("Round {}\n", round.round));
        text.push_str(&format!(
            "  {:>12} attacks! {:>12} takes {:>3} damage! HP left ({:>4})\n",
            a.name, b.name, round.damage_to_b, round.b_hp
        ));
        text.push_str(&format!(
            "  {:>12} attacks! {:>12} takes {:>3} damage! HP left ({:>4})\n",
            b.name, a.name, round.damage_to_a, round.a_hp
        ));
    }

    let winner = match outcome.winner {
        Side::A => a,
        Side::B => b,
    };
    text.push_str(&format!(
        "Winner: {} after {} rounds (HP {} vs {})\n",
        winner.name, outcome.rounds, outcome.a_hp, outcome.b_hp
    ));

    text
}

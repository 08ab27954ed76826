//! One-on-one bouts between two monsters.
//!
//! Both monsters attack once per round, then knockouts are checked. The side
//! left with more HP wins and the first monster wins exact ties, so a monster
//! ending at -5 beats one ending at -20.

use serde::Serialize;

use super::math::{apply_damage, compute_damage, is_knocked_out};
use crate::monster::MonsterRecord;

/// Transient per-bout copy of the stats a monster fights with.
///
/// Only `hp` changes during a bout, and only through [`CombatState::struck`],
/// which returns a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatState {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
}

impl CombatState {
    pub fn from_record(record: &MonsterRecord) -> Self {
        Self {
            hp: i64::from(record.hp),
            attack: i64::from(record.attack),
            defense: i64::from(record.defense),
        }
    }

    /// Damage this combatant deals to `defender` with one attack.
    pub fn damage_against(&self, defender: &CombatState) -> i64 {
        compute_damage(self.attack, defender.defense)
    }

    /// State after taking `damage`.
    #[must_use]
    pub fn struck(self, damage: i64) -> Self {
        Self {
            hp: apply_damage(self.hp, damage),
            ..self
        }
    }

    pub fn is_knocked_out(&self) -> bool {
        is_knocked_out(self.hp)
    }
}

/// Which side of a bout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first monster passed in.
    A,
    /// The second monster passed in.
    B,
}

/// One exchange of attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundLog {
    /// 1-based round number.
    pub round: u64,
    pub damage_to_b: i64,
    pub damage_to_a: i64,
    /// HP after the round.
    pub a_hp: i64,
    pub b_hp: i64,
}

/// Result of a single bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoutOutcome {
    pub winner: Side,
    pub rounds: u64,
    pub a_hp: i64,
    pub b_hp: i64,
    /// Neither side could deal damage; decided on starting HP.
    pub stalemate: bool,
    pub log: Vec<RoundLog>,
}

impl BoutOutcome {
    pub fn a_wins(&self) -> bool {
        self.winner == Side::A
    }
}

/// Returns true if `a` is judged stronger than, or tied ahead of, `b`.
///
/// Neither record is modified.
pub fn resolve(a: &MonsterRecord, b: &MonsterRecord) -> bool {
    let (a_end, b_end, rounds, stalemate) = simulate(a, b, |_| {});
    let a_wins = a_end.hp >= b_end.hp;
    let winner = if a_wins { &a.label } else { &b.label };
    tracing::debug!(
        a = %a.label,
        b = %b.label,
        rounds,
        stalemate,
        a_hp = a_end.hp,
        b_hp = b_end.hp,
        winner = %winner,
        "bout resolved"
    );
    a_wins
}

/// Runs a bout and keeps the full round-by-round transcript.
pub fn fight(a: &MonsterRecord, b: &MonsterRecord) -> BoutOutcome {
    let mut log = Vec::new();
    let (a_end, b_end, rounds, stalemate) = simulate(a, b, |round| log.push(round));
    let winner = if a_end.hp >= b_end.hp { Side::A } else { Side::B };

    BoutOutcome {
        winner,
        rounds,
        a_hp: a_end.hp,
        b_hp: b_end.hp,
        stalemate,
        log,
    }
}

/// Core bout loop on private copies. Returns (a, b, rounds, stalemate).
fn simulate(
    a: &MonsterRecord,
    b: &MonsterRecord,
    mut on_round: impl FnMut(RoundLog),
) -> (CombatState, CombatState, u64, bool) {
    let mut a_state = CombatState::from_record(a);
    let mut b_state = CombatState::from_record(b);

    let damage_to_b = a_state.damage_against(&b_state);
    let damage_to_a = b_state.damage_against(&a_state);

    // Without positive damage in either direction no round can make progress.
    if damage_to_b <= 0 && damage_to_a <= 0 {
        tracing::debug!(a = %a.label, b = %b.label, "stalemate, deciding on starting hp");
        return (a_state, b_state, 0, true);
    }

    let mut rounds = 0u64;
    loop {
        rounds += 1;

        b_state = b_state.struck(damage_to_b);
        tracing::trace!(
            attacker = %a.name,
            defender = %b.name,
            damage = damage_to_b,
            remaining_hp = b_state.hp,
            "attack"
        );

        a_state = a_state.struck(damage_to_a);
        tracing::trace!(
            attacker = %b.name,
            defender = %a.name,
            damage = damage_to_a,
            remaining_hp = a_state.hp,
            "attack"
        );

        on_round(RoundLog {
            round: rounds,
            damage_to_b,
            damage_to_a,
            a_hp: a_state.hp,
            b_hp: b_state.hp,
        });

        if a_state.is_knocked_out() || b_state.is_knocked_out() {
            break;
        }
    }

    (a_state, b_state, rounds, false)
}

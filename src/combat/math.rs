//! Pure damage functions shared by bouts and reports.

use crate::constants::DEFENSE_SCALE;

/// Damage dealt by an attacker to a defender.
///
/// The defender absorbs `defense` percent of `attack`; any fraction is
/// truncated toward zero (20 attack into 30 defense deals 14).
pub fn compute_damage(attack: i64, defense: i64) -> i64 {
    attack * (DEFENSE_SCALE - defense) / DEFENSE_SCALE
}

/// Apply damage to HP, returning remaining HP. May go below zero.
pub fn apply_damage(current_hp: i64, damage: i64) -> i64 {
    current_hp - damage
}

/// A combatant is knocked out at zero HP or below.
pub fn is_knocked_out(current_hp: i64) -> bool {
    current_hp <= 0
}

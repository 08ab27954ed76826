//! The built-in eight-monster roster.

use super::types::{MonsterRecord, Roster};

/// (label, name, hp, attack, defense)
const BUILTIN_MONSTERS: [(&str, &str, i32, i32, i32); 8] = [
    ("demon", "デーモン", 800, 40, 25),
    ("dragon", "ドラゴン", 900, 45, 10),
    ("ghost", "ゴースト", 500, 20, 25),
    ("hapry", "ハーピィ", 600, 30, 20),
    ("ninja", "ニンジャ", 400, 85, 20),
    ("slime", "スライム", 200, 10, 90),
    ("vampire", "バンパイア", 700, 15, 60),
    ("zombie", "ゾンビ", 300, 20, 30),
];

/// Returns a fresh copy of the built-in roster in its canonical order.
pub fn builtin_roster() -> Roster {
    BUILTIN_MONSTERS
        .iter()
        .map(|&(label, name, hp, attack, defense)| {
            MonsterRecord::new(label, name, hp, attack, defense)
        })
        .collect::<Vec<_>>()
        .into()
}

//! Integration test: ranking the built-in roster end to end.

use bestiary::combat::{fight, resolve, Side};
use bestiary::ranking::{adjacent_violations, rank, rank_pairwise, Strategy};
use bestiary::{builtin_roster, MonsterRecord};

/// Recorded baseline for the built-in roster.
const BASELINE: [&str; 8] = [
    "dragon", "ninja", "demon", "hapry", "slime", "vampire", "ghost", "zombie",
];

fn labels(records: &[MonsterRecord]) -> Vec<&str> {
    records.iter().map(|m| m.label.as_str()).collect()
}

// =============================================================================
// Baseline ordering
// =============================================================================

#[test]
fn test_pairwise_matches_baseline() {
    let roster = builtin_roster();
    let (order, bouts) = rank_pairwise(roster.as_slice());
    assert_eq!(labels(&order), BASELINE);
    assert_eq!(bouts, 15);
}

#[test]
fn test_round_robin_matches_baseline() {
    let ranking = rank(builtin_roster().as_slice(), Strategy::RoundRobin);
    assert_eq!(ranking.labels(), BASELINE);

    let standings = ranking.standings.expect("round robin keeps standings");
    let wins: Vec<u32> = standings.entries.iter().map(|s| s.wins).collect();
    assert_eq!(wins, vec![7, 6, 5, 3, 3, 3, 1, 0]);
}

#[test]
fn test_baseline_agrees_with_adjacent_bouts() {
    let roster = builtin_roster();
    let (order, _) = rank_pairwise(roster.as_slice());
    for pair in order.windows(2) {
        assert!(
            resolve(&pair[0], &pair[1]),
            "{} should beat {}",
            pair[0].label,
            pair[1].label
        );
    }
    assert!(adjacent_violations(&order).is_empty());
}

#[test]
fn test_dragon_beats_everyone() {
    let roster = builtin_roster();
    let dragon = roster.find("dragon").unwrap();
    for other in roster.iter().filter(|m| m.label != "dragon") {
        assert!(resolve(dragon, other), "dragon should beat {}", other.label);
        assert!(!resolve(other, dragon), "{} should lose to dragon", other.label);
    }
}

#[test]
fn test_zombie_loses_to_everyone() {
    let roster = builtin_roster();
    let zombie = roster.find("zombie").unwrap();
    for other in roster.iter().filter(|m| m.label != "zombie") {
        assert!(!resolve(zombie, other), "zombie should lose to {}", other.label);
    }
}

// =============================================================================
// Non-transitive outcomes
// =============================================================================

#[test]
fn test_builtin_roster_contains_a_cycle() {
    let roster = builtin_roster();
    let hapry = roster.find("hapry").unwrap();
    let slime = roster.find("slime").unwrap();
    let vampire = roster.find("vampire").unwrap();

    assert!(resolve(hapry, slime));
    assert!(!resolve(slime, hapry));
    assert!(resolve(slime, vampire));
    assert!(!resolve(vampire, slime));
    assert!(resolve(vampire, hapry));
    assert!(!resolve(hapry, vampire));
}

#[test]
fn test_cycle_sorts_without_adjacent_upsets() {
    let roster = builtin_roster();
    let cycle: Vec<MonsterRecord> = ["hapry", "slime", "vampire"]
        .iter()
        .map(|l| roster.find(l).unwrap().clone())
        .collect();

    let ranking = rank(&cycle, Strategy::Pairwise);
    assert_eq!(ranking.labels(), vec!["hapry", "slime", "vampire"]);
    assert!(ranking.is_consistent());

    // The wrap-around result is hidden: last place beats first place.
    assert!(resolve(&ranking.order[2], &ranking.order[0]));
}

// =============================================================================
// Purity and repeatability
// =============================================================================

#[test]
fn test_ranking_is_idempotent() {
    let roster = builtin_roster();
    let first = rank(roster.as_slice(), Strategy::Pairwise);
    let second = rank(roster.as_slice(), Strategy::Pairwise);
    assert_eq!(first.order, second.order);
    assert_eq!(first.bouts, second.bouts);
}

#[test]
fn test_ranking_keeps_starting_stats() {
    let roster = builtin_roster();
    let ranking = rank(roster.as_slice(), Strategy::Pairwise);

    assert_eq!(roster, builtin_roster());
    for monster in &ranking.order {
        assert_eq!(roster.find(&monster.label).unwrap(), monster);
    }
}

#[test]
fn test_reranking_ranked_output_is_stable() {
    let roster = builtin_roster();
    let ranking = rank(roster.as_slice(), Strategy::Pairwise);
    let again = rank(&ranking.order, Strategy::Pairwise);
    assert_eq!(again.labels(), BASELINE);
}

#[test]
fn test_reversed_input_reaches_same_order() {
    let mut records = builtin_roster().into_vec();
    records.reverse();
    let ranking = rank(&records, Strategy::Pairwise);
    assert_eq!(ranking.labels(), BASELINE);
}

// =============================================================================
// Bout details
// =============================================================================

#[test]
fn test_simultaneous_knockout_in_roster() {
    let roster = builtin_roster();
    let outcome = fight(roster.find("ninja").unwrap(), roster.find("demon").unwrap());
    assert!(outcome.a_hp <= 0 && outcome.b_hp <= 0);
    assert_eq!(outcome.winner, Side::A);
}

#[test]
fn test_slime_survives_long_exchanges() {
    let roster = builtin_roster();
    let outcome = fight(roster.find("slime").unwrap(), roster.find("vampire").unwrap());
    assert_eq!(outcome.rounds, 175);
    assert_eq!((outcome.a_hp, outcome.b_hp), (25, 0));
    assert_eq!(outcome.winner, Side::A);
}

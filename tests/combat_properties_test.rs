//! Property tests for bout resolution and ranking over arbitrary stats.

use bestiary::combat::{compute_damage, fight, resolve, Side};
use bestiary::ranking::{rank, Standings, Strategy as RankStrategy};
use bestiary::MonsterRecord;
use proptest::prelude::*;

fn monster_strategy() -> impl Strategy<Value = (i32, i32, i32)> {
    (1i32..2000, 0i32..200, 0i32..100)
}

fn roster_strategy() -> impl Strategy<Value = Vec<MonsterRecord>> {
    prop::collection::vec(monster_strategy(), 0..12).prop_map(|stats| {
        stats
            .into_iter()
            .enumerate()
            .map(|(i, (hp, attack, defense))| {
                MonsterRecord::new(format!("m{i}"), format!("Monster {i}"), hp, attack, defense)
            })
            .collect()
    })
}

fn record((hp, attack, defense): (i32, i32, i32), label: &str) -> MonsterRecord {
    MonsterRecord::new(label, label, hp, attack, defense)
}

proptest! {
    #[test]
    fn prop_monster_never_loses_to_itself(stats in monster_strategy()) {
        let m = record(stats, "self");
        prop_assert!(resolve(&m, &m));
    }

    #[test]
    fn prop_damage_truncates_toward_zero(attack in 0i64..10_000, defense in 0i64..100) {
        let damage = compute_damage(attack, defense);
        let exact = attack * (100 - defense);
        prop_assert!(damage * 100 <= exact);
        prop_assert!(exact < (damage + 1) * 100);
    }

    #[test]
    fn prop_every_bout_terminates_and_agrees(a in monster_strategy(), b in monster_strategy()) {
        let a = record(a, "a");
        let b = record(b, "b");

        let outcome = fight(&a, &b);
        prop_assert_eq!(outcome.a_wins(), resolve(&a, &b));
        prop_assert_eq!(outcome.log.len() as u64, outcome.rounds);

        if outcome.stalemate {
            prop_assert_eq!(outcome.rounds, 0);
            prop_assert_eq!(outcome.a_wins(), a.hp >= b.hp);
        } else {
            prop_assert!(outcome.a_hp <= 0 || outcome.b_hp <= 0);
        }

        let expected = if outcome.a_hp >= outcome.b_hp { Side::A } else { Side::B };
        prop_assert_eq!(outcome.winner, expected);
    }

    #[test]
    fn prop_rank_is_permutation(records in roster_strategy()) {
        for strategy in [RankStrategy::Pairwise, RankStrategy::RoundRobin] {
            let ranking = rank(&records, strategy);
            let mut got: Vec<_> = ranking.labels().into_iter().map(String::from).collect();
            let mut want: Vec<_> = records.iter().map(|m| m.label.clone()).collect();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn prop_rank_is_deterministic(records in roster_strategy()) {
        let first = rank(&records, RankStrategy::Pairwise);
        let second = rank(&records, RankStrategy::Pairwise);
        prop_assert_eq!(first.order, second.order);
    }

    #[test]
    fn prop_round_robin_scores_every_pair(records in roster_strategy()) {
        let n = records.len();
        let standings = Standings::compute(&records);
        let total: u32 = standings.entries.iter().map(|s| s.wins).sum();
        prop_assert_eq!(total as usize, n * n.saturating_sub(1) / 2);
        prop_assert_eq!(standings.bouts, n * n.saturating_sub(1) / 2);

        for pair in standings.entries.windows(2) {
            prop_assert!(pair[0].wins >= pair[1].wins);
        }
    }
}

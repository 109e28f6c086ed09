//! Round-robin completion, knockout locking and semifinal seeding.

mod common;

use common::{hidden, played, scheduled, teams};
use tournament_engine::{
    aggregate_round_robin, is_knockout_unlocked, is_round_robin_complete, knockout_seeding,
    match_availability, rank_round_robin, Availability, BracketType,
};

#[test]
fn no_round_robin_matches_is_not_complete() {
    common::init_logging();
    assert!(!is_round_robin_complete(&[]));

    let t = teams(&["A", "B"]);
    let knockout_only = vec![played(&t[0], &t[1], BracketType::KnockoutFinal, 1, 2, 1)];
    assert!(!is_round_robin_complete(&knockout_only));
}

#[test]
fn one_scheduled_match_keeps_phase_open() {
    let t = teams(&["A", "B", "C"]);
    let mut matches = vec![played(&t[0], &t[1], BracketType::RoundRobin, 1, 2, 0)];
    assert!(is_round_robin_complete(&matches));

    matches.push(scheduled(&t[1], &t[2], BracketType::RoundRobin, 2));
    assert!(!is_round_robin_complete(&matches));
    assert!(!is_knockout_unlocked(&matches));
}

#[test]
fn hidden_matches_are_ignored_by_the_gate() {
    let t = teams(&["A", "B", "C"]);
    let matches = vec![
        played(&t[0], &t[1], BracketType::RoundRobin, 1, 1, 1),
        hidden(scheduled(&t[1], &t[2], BracketType::RoundRobin, 2)),
    ];
    assert!(is_round_robin_complete(&matches));

    let only_hidden = vec![hidden(played(&t[0], &t[2], BracketType::RoundRobin, 1, 3, 0))];
    assert!(!is_round_robin_complete(&only_hidden));
}

#[test]
fn knockout_matches_lock_until_round_robin_is_done() {
    let t = teams(&["A", "B", "C", "D"]);
    let semi = scheduled(&t[0], &t[3], BracketType::KnockoutSemifinal, 1);
    let third = scheduled(&t[1], &t[2], BracketType::KnockoutThirdPlace, 1);
    let group = scheduled(&t[0], &t[1], BracketType::RoundRobin, 1);
    let winners = scheduled(&t[0], &t[1], BracketType::Winner, 1);

    assert_eq!(match_availability(&semi, false), Availability::Locked);
    assert_eq!(match_availability(&third, false), Availability::Locked);
    assert_eq!(match_availability(&group, false), Availability::Active);
    assert_eq!(match_availability(&winners, false), Availability::Active);

    assert_eq!(match_availability(&semi, true), Availability::Active);
    assert_eq!(match_availability(&hidden(semi), true), Availability::Hidden);
}

#[test]
fn seeding_pairs_first_with_fourth_and_second_with_third() {
    let t = teams(&["A", "B", "C", "D", "E"]);
    // A > B > C > D > E by points.
    let mut matches = Vec::new();
    for (i, winner) in t.iter().enumerate() {
        for loser in &t[i + 1..] {
            matches.push(played(winner, loser, BracketType::RoundRobin, 1, 2, 1));
        }
    }
    let ranked = rank_round_robin(aggregate_round_robin(&matches));
    let seeding = knockout_seeding(&ranked).unwrap();

    let [first, second] = &seeding.semifinals;
    assert_eq!((first.high.rank, first.low.rank), (1, 4));
    assert_eq!((second.high.rank, second.low.rank), (2, 3));
    assert_eq!(first.high.team_name, "A");
    assert_eq!(first.low.team_name, "D");
    assert_eq!(second.high.team_id, t[1].id);
    assert_eq!(second.low.team_id, t[2].id);
}

#[test]
fn seeding_needs_four_teams() {
    let t = teams(&["A", "B", "C"]);
    let matches = vec![
        played(&t[0], &t[1], BracketType::RoundRobin, 1, 2, 1),
        played(&t[1], &t[2], BracketType::RoundRobin, 2, 2, 1),
    ];
    let ranked = rank_round_robin(aggregate_round_robin(&matches));
    assert!(knockout_seeding(&ranked).is_none());
}

//! Round label decoding for every bracket layout.

use tournament_engine::{decode_round, BracketType};

#[test]
fn reserved_rounds_win_over_bracket_type() {
    for bracket in [
        BracketType::RoundRobin,
        BracketType::Winner,
        BracketType::Loser,
        BracketType::Championship,
        BracketType::Other,
    ] {
        assert_eq!(decode_round(200, bracket), "Grand Final");
        assert_eq!(decode_round(201, bracket), "Bracket Reset");
    }
}

#[test]
fn championship_rounds_count_from_two_hundred() {
    assert_eq!(decode_round(205, BracketType::Championship), "Championship Round 6");
    assert_eq!(decode_round(202, BracketType::Championship), "Championship Round 3");
}

#[test]
fn loser_bracket_rounds_count_from_one_hundred() {
    assert_eq!(decode_round(150, BracketType::Loser), "LB Round 50");
    assert_eq!(decode_round(101, BracketType::Loser), "LB Round 1");
    // The numeric range alone marks a loser-bracket round.
    assert_eq!(decode_round(120, BracketType::Winner), "LB Round 20");
    assert_eq!(decode_round(199, BracketType::Other), "LB Round 99");
}

#[test]
fn plain_rounds_and_fallback() {
    assert_eq!(decode_round(5, BracketType::Winner), "Round 5");
    assert_eq!(decode_round(1, BracketType::RoundRobin), "Round 1");
    assert_eq!(decode_round(100, BracketType::Other), "Round 100");
    assert_eq!(decode_round(250, BracketType::KnockoutFinal), "Round 250");
    assert_eq!(decode_round(0, BracketType::Other), "Round 0");
}

#[test]
fn extreme_round_numbers_still_get_a_label() {
    assert_eq!(
        decode_round(i64::MIN, BracketType::Championship),
        format!("Championship Round {}", i64::MIN)
    );
    assert_eq!(
        decode_round(i64::MIN, BracketType::Loser),
        format!("LB Round {}", i64::MIN)
    );
    assert_eq!(
        decode_round(i64::MAX, BracketType::Championship),
        format!("Championship Round {}", i64::MAX - 199)
    );
    assert_eq!(
        decode_round(i64::MAX, BracketType::Other),
        format!("Round {}", i64::MAX)
    );
}

//! Round labels: decode the overloaded round number into a stage name.

use crate::models::BracketType;

/// Round number reserved for the double-elimination grand final.
pub const GRAND_FINAL_ROUND: i64 = 200;
/// Round number reserved for the bracket reset after a loser-bracket team wins the grand final.
pub const BRACKET_RESET_ROUND: i64 = 201;

/// Human label for a round. Rules are checked in order; the last one always matches.
///
/// 1. 200 is the grand final, 201 the bracket reset (any bracket).
/// 2. Championship rounds count from 200 (`round - 199`).
/// 3. Loser-bracket rounds, or 101..=199, count from 100 (`round - 100`).
/// 4. Everything else is `Round n`.
///
/// Offsets saturate, so extreme round numbers still get a label.
pub fn decode_round(round_number: i64, bracket_type: BracketType) -> String {
    if round_number == GRAND_FINAL_ROUND {
        return "Grand Final".to_string();
    }
    if round_number == BRACKET_RESET_ROUND {
        return "Bracket Reset".to_string();
    }
    if bracket_type == BracketType::Championship {
        return format!("Championship Round {}", round_number.saturating_sub(199));
    }
    if bracket_type == BracketType::Loser || (101..200).contains(&round_number) {
        return format!("LB Round {}", round_number.saturating_sub(100));
    }
    format!("Round {}", round_number)
}

//! Derived player scores: basketball MVP score and volleyball positional award scores.

use crate::logic::metrics::{
    round_to, safe_divide, sets_played, BasketballRate, MetricSource, VolleyballRate,
    RATE_DECIMALS,
};
use crate::models::{DisplayMode, Position, PositionSynonyms, VolleyballStatLine};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Size of the all-star selection.
pub const MYTHICAL_FIVE_SIZE: usize = 5;

/// An entry with its derived score and 1-based rank in a leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scored<T> {
    pub rank: u32,
    pub score: f64,
    pub entry: T,
}

/// `ppg + rpg + apg + spg + bpg - tpg`. Missing rates are derived or 0.
///
/// Precomputed rates are summed as given; only derived rates are rounded.
pub fn mvp_score<S: MetricSource + ?Sized>(player: &S) -> f64 {
    BasketballRate::ALL
        .into_iter()
        .map(|rate| match rate {
            BasketballRate::Tpg => -rate.resolve(player),
            _ => rate.resolve(player),
        })
        .sum()
}

/// Top `limit` players by MVP score. Equal scores keep their input order.
pub fn top_by_mvp<T>(players: &[T], limit: usize) -> Vec<Scored<T>>
where
    T: MetricSource + Clone,
{
    rank_by_score(players.iter().map(|p| (mvp_score(p), p.clone())), Some(limit))
}

/// The five best players by MVP score.
pub fn mythical_five<T>(players: &[T]) -> Vec<Scored<T>>
where
    T: MetricSource + Clone,
{
    top_by_mvp(players, MYTHICAL_FIVE_SIZE)
}

/// Whether positional formulas read per-set rates or raw totals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    #[default]
    PerSet,
    Totals,
}

impl From<DisplayMode> for ScoreBasis {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Averages => ScoreBasis::PerSet,
            DisplayMode::Totals => ScoreBasis::Totals,
        }
    }
}

/// (positive terms, penalty terms) of each position's award formula.
fn formula(position: Position) -> (&'static [&'static str], &'static [&'static str]) {
    match position {
        Position::Setter => (
            &["assists"],
            &["assist_errors", "ball_handling_errors", "serve_errors"],
        ),
        Position::Libero => (
            &["digs", "receptions"],
            &["reception_errors", "ball_handling_errors", "blocking_errors"],
        ),
        Position::OutsideHitter => (
            &["kills", "service_aces", "blocks"],
            &["attack_errors", "serve_errors", "blocking_errors"],
        ),
        Position::OppositeHitter => (
            &["kills", "blocks", "service_aces"],
            &["attack_errors", "blocking_errors"],
        ),
        Position::MiddleBlocker => (&["blocks", "kills"], &["blocking_errors", "attack_errors"]),
    }
}

/// One formula input: the raw counter, or its per-set rate (precomputed rates win).
fn term<S: MetricSource + ?Sized>(entity: &S, key: &str, basis: ScoreBasis) -> f64 {
    match basis {
        ScoreBasis::Totals => entity.field(key).unwrap_or(0.0),
        ScoreBasis::PerSet => match VolleyballRate::for_total(key) {
            Some(rate) => rate.resolve(entity),
            None => safe_divide(
                entity.field(key).unwrap_or(0.0),
                sets_played(entity),
                RATE_DECIMALS,
            ),
        },
    }
}

/// Award score for `position`: positives minus penalties. May be negative.
pub fn position_score<S: MetricSource + ?Sized>(
    entity: &S,
    position: Position,
    basis: ScoreBasis,
) -> f64 {
    let (positives, penalties) = formula(position);
    let sum = |keys: &[&str]| keys.iter().map(|k| term(entity, k, basis)).sum::<f64>();
    round_to(sum(positives) - sum(penalties), RATE_DECIMALS)
}

/// Players whose position resolves to `position`, ranked by that position's score.
///
/// Unrecognised position labels are left out of every leaderboard.
pub fn position_leaderboard(
    players: &[VolleyballStatLine],
    position: Position,
    synonyms: &PositionSynonyms,
    basis: ScoreBasis,
    limit: Option<usize>,
) -> Vec<Scored<VolleyballStatLine>> {
    let members = players
        .iter()
        .filter(|p| synonyms.resolve(&p.position) == Some(position))
        .map(|p| (position_score(p, position, basis), p.clone()));
    rank_by_score(members, limit)
}

/// Leaderboard for one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionLeaderboard {
    pub position: Position,
    pub entries: Vec<Scored<VolleyballStatLine>>,
}

/// Every position's leaderboard, in [`Position::ALL`] order.
pub fn award_leaderboards(
    players: &[VolleyballStatLine],
    synonyms: &PositionSynonyms,
    basis: ScoreBasis,
    limit: Option<usize>,
) -> Vec<PositionLeaderboard> {
    let unplaced = players
        .iter()
        .filter(|p| synonyms.resolve(&p.position).is_none())
        .count();
    if unplaced > 0 {
        log::debug!("{} players have no recognised position", unplaced);
    }
    Position::ALL
        .into_iter()
        .map(|position| PositionLeaderboard {
            position,
            entries: position_leaderboard(players, position, synonyms, basis, limit),
        })
        .collect()
}

/// Match-level efficiency: `kills + digs + blocks + aces` minus every error counter.
///
/// A separate metric from the positional award scores.
pub fn match_efficiency<S: MetricSource + ?Sized>(entity: &S) -> f64 {
    const POSITIVE: [&str; 4] = ["kills", "digs", "blocks", "service_aces"];
    const ERRORS: [&str; 6] = [
        "serve_errors",
        "attack_errors",
        "reception_errors",
        "assist_errors",
        "blocking_errors",
        "ball_handling_errors",
    ];
    let sum = |keys: &[&str]| {
        keys.iter()
            .map(|k| entity.field(k).unwrap_or(0.0))
            .sum::<f64>()
    };
    sum(&POSITIVE[..]) - sum(&ERRORS[..])
}

/// Stable sort by score descending, then rank 1..N and truncate.
fn rank_by_score<T>(scored: impl Iterator<Item = (f64, T)>, limit: Option<usize>) -> Vec<Scored<T>> {
    let mut all: Vec<(f64, T)> = scored.collect();
    all.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    if let Some(limit) = limit {
        all.truncate(limit);
    }
    all.into_iter()
        .enumerate()
        .map(|(i, (score, entry))| Scored {
            rank: i as u32 + 1,
            score,
            entry,
        })
        .collect()
}

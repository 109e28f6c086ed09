//! Metric resolution: safe per-unit rates and one resolver shared by sorting and colouring.

use crate::models::lenient::coerce_number;
use crate::models::{BasketballStatLine, DisplayMode, SportType, VolleyballStatLine};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Decimal places for every derived rate.
pub const RATE_DECIMALS: u32 = 2;

/// Round half away from zero to `decimals` places. Non-finite results become 0.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        0.0
    }
}

/// `numerator / denominator` rounded, or 0 when the denominator is not positive.
///
/// Never returns NaN or infinity.
pub fn safe_divide(numerator: f64, denominator: f64, decimals: u32) -> f64 {
    if denominator > 0.0 && numerator.is_finite() {
        round_to(numerator / denominator, decimals)
    } else {
        0.0
    }
}

/// Anything a metric can be read off by key: typed stat lines or raw API rows.
pub trait MetricSource {
    /// Value stored under `key`, or `None` when absent.
    fn field(&self, key: &str) -> Option<f64>;
}

impl MetricSource for serde_json::Value {
    fn field(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(coerce_number)
    }
}

impl MetricSource for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(coerce_number)
    }
}

/// Volleyball per-set rate keys.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolleyballRate {
    Kps,
    Sas,
    Aps,
    Rps,
    Dps,
    Bps,
}

impl VolleyballRate {
    pub const ALL: [VolleyballRate; 6] = [
        VolleyballRate::Kps,
        VolleyballRate::Sas,
        VolleyballRate::Aps,
        VolleyballRate::Rps,
        VolleyballRate::Dps,
        VolleyballRate::Bps,
    ];

    pub fn key(self) -> &'static str {
        match self {
            VolleyballRate::Kps => "kps",
            VolleyballRate::Sas => "sas",
            VolleyballRate::Aps => "aps",
            VolleyballRate::Rps => "rps",
            VolleyballRate::Dps => "dps",
            VolleyballRate::Bps => "bps",
        }
    }

    /// Counter the rate is derived from.
    pub fn total_key(self) -> &'static str {
        match self {
            VolleyballRate::Kps => "kills",
            VolleyballRate::Sas => "service_aces",
            VolleyballRate::Aps => "assists",
            VolleyballRate::Rps => "receptions",
            VolleyballRate::Dps => "digs",
            VolleyballRate::Bps => "blocks",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    /// The rate derived from counter `total_key`, if it has one.
    pub fn for_total(total_key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.total_key() == total_key)
    }

    /// Precomputed value if present, otherwise total over sets played.
    pub fn resolve<S: MetricSource + ?Sized>(self, entity: &S) -> f64 {
        entity.field(self.key()).unwrap_or_else(|| {
            let total = entity.field(self.total_key()).unwrap_or(0.0);
            safe_divide(total, sets_played(entity), RATE_DECIMALS)
        })
    }
}

/// Basketball per-game rate keys.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasketballRate {
    Ppg,
    Rpg,
    Apg,
    Spg,
    Bpg,
    Tpg,
}

impl BasketballRate {
    pub const ALL: [BasketballRate; 6] = [
        BasketballRate::Ppg,
        BasketballRate::Rpg,
        BasketballRate::Apg,
        BasketballRate::Spg,
        BasketballRate::Bpg,
        BasketballRate::Tpg,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BasketballRate::Ppg => "ppg",
            BasketballRate::Rpg => "rpg",
            BasketballRate::Apg => "apg",
            BasketballRate::Spg => "spg",
            BasketballRate::Bpg => "bpg",
            BasketballRate::Tpg => "tpg",
        }
    }

    pub fn total_key(self) -> &'static str {
        match self {
            BasketballRate::Ppg => "points",
            BasketballRate::Rpg => "rebounds",
            BasketballRate::Apg => "assists",
            BasketballRate::Spg => "steals",
            BasketballRate::Bpg => "blocks",
            BasketballRate::Tpg => "turnovers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    /// Precomputed value if present, otherwise total over games played.
    pub fn resolve<S: MetricSource + ?Sized>(self, entity: &S) -> f64 {
        entity.field(self.key()).unwrap_or_else(|| {
            let total = entity.field(self.total_key()).unwrap_or(0.0);
            let games = entity.field("games_played").unwrap_or(0.0);
            safe_divide(total, games, RATE_DECIMALS)
        })
    }
}

/// Sets played; team rows report `sets_played`, player rows `total_sets_played`.
pub fn sets_played<S: MetricSource + ?Sized>(entity: &S) -> f64 {
    entity
        .field("total_sets_played")
        .or_else(|| entity.field("sets_played"))
        .unwrap_or(0.0)
}

/// Value of `key` for display, sorting and threshold colouring.
///
/// In averages mode a volleyball rate key resolves to its per-set value (derived when not
/// precomputed). Anything else is the stored field, or 0 when absent.
///
/// Typed stat lines always carry their rate keys (precomputed or derived), so they report a
/// rate even in totals mode. Raw JSON rows report only the rates they actually hold.
pub fn resolve_metric<S: MetricSource + ?Sized>(
    entity: &S,
    sport: SportType,
    mode: DisplayMode,
    key: &str,
) -> f64 {
    match (mode, sport, VolleyballRate::from_key(key)) {
        (DisplayMode::Averages, SportType::Volleyball, Some(rate)) => rate.resolve(entity),
        _ => entity.field(key).unwrap_or(0.0),
    }
}

/// Sort descending by the resolved metric. Equal values keep their input order.
pub fn sort_by_metric<T>(entities: &[T], sport: SportType, mode: DisplayMode, key: &str) -> Vec<T>
where
    T: MetricSource + Clone,
{
    let mut keyed: Vec<(f64, T)> = entities
        .iter()
        .map(|e| (resolve_metric(e, sport, mode, key), e.clone()))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Colour band for a metric value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Inclusive lower bounds of the medium and high bands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub medium: f64,
    pub high: f64,
}

impl Thresholds {
    pub fn new(medium: f64, high: f64) -> Self {
        Self { medium, high }
    }

    pub fn classify(&self, value: f64) -> Severity {
        if value >= self.high {
            Severity::High
        } else if value >= self.medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Band for `key` on `entity`, using the same resolver as [`sort_by_metric`].
pub fn classify_metric<S: MetricSource + ?Sized>(
    entity: &S,
    sport: SportType,
    mode: DisplayMode,
    key: &str,
    thresholds: &Thresholds,
) -> Severity {
    thresholds.classify(resolve_metric(entity, sport, mode, key))
}

impl MetricSource for BasketballStatLine {
    fn field(&self, key: &str) -> Option<f64> {
        let precomputed = match key {
            "points" => return Some(self.points),
            "rebounds" => return Some(self.rebounds),
            "assists" => return Some(self.assists),
            "steals" => return Some(self.steals),
            "blocks" => return Some(self.blocks),
            "three_points_made" => return Some(self.three_points_made),
            "turnovers" => return Some(self.turnovers),
            "fouls" => return Some(self.fouls),
            "games_played" => return Some(self.games_played),
            "ppg" => self.ppg,
            "rpg" => self.rpg,
            "apg" => self.apg,
            "spg" => self.spg,
            "bpg" => self.bpg,
            "tpg" => self.tpg,
            _ => return None,
        };
        let rate = BasketballRate::from_key(key)?;
        Some(precomputed.unwrap_or_else(|| {
            let total = self.field(rate.total_key()).unwrap_or(0.0);
            safe_divide(total, self.games_played, RATE_DECIMALS)
        }))
    }
}

impl MetricSource for VolleyballStatLine {
    fn field(&self, key: &str) -> Option<f64> {
        let precomputed = match key {
            "kills" => return Some(self.kills),
            "assists" => return Some(self.assists),
            "digs" => return Some(self.digs),
            "blocks" => return Some(self.blocks),
            "service_aces" => return Some(self.service_aces),
            "receptions" => return Some(self.receptions),
            "serve_errors" => return Some(self.serve_errors),
            "attack_errors" => return Some(self.attack_errors),
            "reception_errors" => return Some(self.reception_errors),
            "assist_errors" => return Some(self.assist_errors),
            "blocking_errors" => return Some(self.blocking_errors),
            "ball_handling_errors" => return Some(self.ball_handling_errors),
            "total_sets_played" => return Some(self.total_sets_played),
            "kps" => self.kps,
            "sas" => self.sas,
            "aps" => self.aps,
            "rps" => self.rps,
            "dps" => self.dps,
            "bps" => self.bps,
            _ => return None,
        };
        let rate = VolleyballRate::from_key(key)?;
        Some(precomputed.unwrap_or_else(|| {
            let total = self.field(rate.total_key()).unwrap_or(0.0);
            safe_divide(total, self.total_sets_played, RATE_DECIMALS)
        }))
    }
}

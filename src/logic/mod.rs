//! Tournament engine logic: round labels, phase gating, standings, metrics, scoring, views.

mod metrics;
mod phase;
mod rounds;
mod scoring;
mod standings;
mod view;

pub use metrics::{
    classify_metric, resolve_metric, round_to, safe_divide, sets_played, sort_by_metric,
    BasketballRate, MetricSource, Severity, Thresholds, VolleyballRate, RATE_DECIMALS,
};
pub use phase::{
    is_knockout_unlocked, is_round_robin_complete, knockout_seeding, match_availability,
    visible_matches, Availability, KnockoutSeeding, Seed, SeedPair,
};
pub use rounds::{decode_round, BRACKET_RESET_ROUND, GRAND_FINAL_ROUND};
pub use scoring::{
    award_leaderboards, match_efficiency, mvp_score, mythical_five, position_leaderboard,
    position_score, top_by_mvp, PositionLeaderboard, ScoreBasis, Scored, MYTHICAL_FIVE_SIZE,
};
pub use standings::{
    aggregate_general_standings, aggregate_round_robin, champion_name, rank_round_robin,
    rank_standings, reorder_champion_first,
};
pub use view::{
    build_award_view, build_bracket_view, build_round_robin_view, build_standings_view,
    BracketView, LabeledMatch, RoundRobinView, RoundView, StandingsView,
};

//! Tournament progression and scoring engine: pure functions over match and stat snapshots.

pub mod logic;
pub mod models;

pub use logic::{
    aggregate_general_standings, aggregate_round_robin, award_leaderboards, build_award_view,
    build_bracket_view, build_round_robin_view, build_standings_view, champion_name,
    classify_metric, decode_round, is_knockout_unlocked, is_round_robin_complete,
    knockout_seeding, match_availability, match_efficiency, mvp_score, mythical_five,
    position_leaderboard, position_score, rank_round_robin, rank_standings,
    reorder_champion_first, resolve_metric, round_to, safe_divide, sets_played, sort_by_metric,
    top_by_mvp, visible_matches, Availability, BasketballRate, BracketView, KnockoutSeeding,
    LabeledMatch, MetricSource, PositionLeaderboard, RoundRobinView, RoundView, ScoreBasis,
    Scored, Seed, SeedPair, Severity, StandingsView, Thresholds, VolleyballRate,
    BRACKET_RESET_ROUND, GRAND_FINAL_ROUND, MYTHICAL_FIVE_SIZE, RATE_DECIMALS,
};
pub use models::{
    BasketballStatLine, BracketType, DisplayMode, EngineConfig, EngineError, GameMatch, MatchId,
    MatchStatus, Position, PositionSynonyms, RoundRobinStanding, SportType, StandingRow,
    TeamId, TeamStanding, VolleyballStatLine,
};

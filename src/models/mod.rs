//! Data structures consumed by the engine: matches, standings, stat lines, configuration.

pub mod lenient;

mod game;
mod player;
mod standing;
mod tournament;

pub use game::{BracketType, GameMatch, MatchId, MatchStatus, TeamId};
pub use player::{BasketballStatLine, Position, PositionSynonyms, VolleyballStatLine};
pub use standing::{RoundRobinStanding, StandingRow, TeamStanding};
pub use tournament::{DisplayMode, EngineConfig, EngineError, SportType};

//! League table and team statistics from historical match results.
//!
//! Everything here is a pure function of a [`TeamRegistry`] and a slice of [`MatchRecord`]s.
//! Nothing is cached between calls, so the same input always gives the same output.

pub mod data_loader;
pub mod filters;
pub mod outcome;
pub mod ranking;
pub mod ranking_context;
pub mod registry;
pub mod statistics;

pub use data_loader::{
    load_registry, load_season, load_seasons, parse_registry, parse_season_csv, LoadError,
    MatchRecord, TeamIdentity,
};
pub use filters::{
    head_to_head, head_to_head_record, latest_matches, leaders_by, matches_for_team, matches_in_season,
    HeadToHeadRecord,
};
pub use outcome::{Outcome, Perspective};
pub use ranking::{generate_standings, standings_order, TeamStanding};
pub use ranking_context::RankingContext;
pub use registry::{RegistryError, TeamEntry, TeamHandle, TeamRegistry};
pub use statistics::{compute_team_statistics, TeamStatistics};

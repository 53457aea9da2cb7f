//! Tournament match scheduling: library with models and pairing logic.
//!
//! The generators are pure functions from a roster (and, for Swiss, a match
//! history) to a list of matches; persistence and result entry live with the
//! caller (see the `web` binary for the bundled one).

pub mod logic;
pub mod models;

pub use logic::{
    generate_round_robin, generate_schedule, generate_single_elimination,
    generate_single_elimination_with_rng, generate_swiss_round, generate_swiss_round_with_rng,
    report_match_result, shuffled, standings,
};
pub use models::{
    Match, MatchId, MatchStatus, StoredMatch, Team, TeamId, Tournament, TournamentError,
    TournamentFormat, TournamentId, POINTS_PER_WIN,
};

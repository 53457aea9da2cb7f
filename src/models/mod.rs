//! Data structures for tournament scheduling: teams, matches, tournament state.

mod game;
mod team;
mod tournament;

pub use game::{Match, MatchId, MatchStatus, StoredMatch};
pub use team::{Team, TeamId, POINTS_PER_WIN};
pub use tournament::{Tournament, TournamentError, TournamentFormat, TournamentId};

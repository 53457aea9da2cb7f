//! Match and StoredMatch: generated pairings and their stored form.

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored match (assigned by storage, not by generation).
pub type MatchId = Uuid;

/// Whether a match still awaits a result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    /// Result known. Byes are created already completed.
    Completed,
}

/// One scheduled pairing, as produced by a generator.
///
/// Carries no identity of its own; the caller that persists matches assigns
/// ids (see [`StoredMatch`]). A bye has exactly one team id and is completed
/// with `winner_id` set. A placeholder (elimination rounds past the first, or
/// an unfilled round-1 bracket slot) has no team ids until the surrounding
/// application fills it from earlier results.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub tournament_id: TournamentId,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    /// 1-based round number.
    pub round: u32,
    pub status: MatchStatus,
    /// Set at generation time only for byes (the sole team).
    pub winner_id: Option<TeamId>,
    /// Absent until a result is reported.
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    /// Match with no real opponent.
    pub is_bye: bool,
}

impl Match {
    /// A regular match between two teams, awaiting a result.
    pub fn pending(
        tournament_id: TournamentId,
        round: u32,
        team1_id: TeamId,
        team2_id: TeamId,
    ) -> Self {
        Self {
            tournament_id,
            team1_id: Some(team1_id),
            team2_id: Some(team2_id),
            round,
            status: MatchStatus::Pending,
            winner_id: None,
            team1_score: None,
            team2_score: None,
            is_bye: false,
        }
    }

    /// A bye: one team, no opponent, auto-completed with that team as winner.
    pub fn bye(tournament_id: TournamentId, round: u32, team_id: TeamId) -> Self {
        Self {
            tournament_id,
            team1_id: Some(team_id),
            team2_id: None,
            round,
            status: MatchStatus::Completed,
            winner_id: Some(team_id),
            team1_score: None,
            team2_score: None,
            is_bye: true,
        }
    }

    /// A bracket slot reserved by round/position, with both teams unknown.
    pub fn placeholder(tournament_id: TournamentId, round: u32) -> Self {
        Self {
            tournament_id,
            team1_id: None,
            team2_id: None,
            round,
            status: MatchStatus::Pending,
            winner_id: None,
            team1_score: None,
            team2_score: None,
            is_bye: false,
        }
    }

    /// Whether the given team is one of this match's participants.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == Some(team_id) || self.team2_id == Some(team_id)
    }
}

/// A generated match as kept by storage: id and creation time on top of the
/// generated fields.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StoredMatch {
    pub id: MatchId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: Match,
}

impl StoredMatch {
    pub fn new(details: Match) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            details,
        }
    }
}

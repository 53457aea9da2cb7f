//! Tournament state held by the surrounding application: roster, stored
//! matches, and the errors its operations can raise.

use crate::models::game::{MatchId, MatchStatus, StoredMatch};
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Errors that can occur during tournament operations.
///
/// The generators themselves are total functions; these errors belong to the
/// caller-side state machine (roster management, schedule lifecycle, result
/// reporting).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Need at least 2 teams to generate a schedule.
    NotEnoughTeams,
    /// Roster changes are not allowed once matches exist.
    RosterLocked,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Team name is empty after trimming.
    InvalidTeamName,
    /// Team not found in the roster.
    TeamNotFound(TeamId),
    /// Match not found in this tournament.
    MatchNotFound(MatchId),
    /// Round-robin and elimination schedules are generated once.
    ScheduleAlreadyGenerated,
    /// The current Swiss round still has pending matches.
    RoundInProgress,
    /// Byes and placeholder slots take no result reports.
    MatchNotReportable,
    /// The match already has a reported result.
    MatchAlreadyCompleted,
    /// The reported winner is not a participant of the match.
    WinnerNotInMatch(TeamId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughTeams => write!(f, "Need at least 2 teams to generate a schedule"),
            TournamentError::RosterLocked => write!(f, "Roster cannot change once matches are generated"),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::InvalidTeamName => write!(f, "Team name must not be empty"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::ScheduleAlreadyGenerated => write!(f, "Schedule has already been generated"),
            TournamentError::RoundInProgress => {
                write!(f, "Current round still has pending matches")
            }
            TournamentError::MatchNotReportable => {
                write!(f, "Byes and placeholder matches take no results")
            }
            TournamentError::MatchAlreadyCompleted => write!(f, "Match already has a result"),
            TournamentError::WinnerNotInMatch(_) => {
                write!(f, "Reported winner is not a participant of this match")
            }
        }
    }
}

/// Scheduling format of a tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Every team meets every other team exactly once (circle method).
    #[default]
    RoundRobin,
    /// Bracket padded to the next power of two; one loss eliminates.
    SingleElimination,
    /// One round at a time, paired by standings while avoiding rematches.
    Swiss,
}

/// Full tournament state: roster, stored matches, and scheduling progress.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    pub teams: Vec<Team>,
    /// Generated matches with storage-assigned ids, all rounds so far.
    pub matches: Vec<StoredMatch>,
    /// Rounds generated so far (Swiss grows one at a time; the other formats
    /// get their full schedule in one shot).
    pub rounds_generated: u32,
}

impl Tournament {
    /// Create a new tournament with an empty roster and no matches.
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            teams: Vec::new(),
            matches: Vec::new(),
            rounds_generated: 0,
        }
    }

    /// Whether any matches have been generated (roster is then locked).
    pub fn schedule_started(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Whether every stored match so far has a result (byes count as completed).
    pub fn current_round_complete(&self) -> bool {
        self.matches
            .iter()
            .all(|m| m.details.status == MatchStatus::Completed)
    }

    /// Mutable reference to a roster team by id.
    pub fn get_team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Add a team to the roster. Names must be unique (case-insensitive) and
    /// non-empty; the roster is locked once matches exist.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        if self.schedule_started() {
            return Err(TournamentError::RosterLocked);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::InvalidTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by id (only before any matches are generated).
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if self.schedule_started() {
            return Err(TournamentError::RosterLocked);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        Ok(())
    }
}

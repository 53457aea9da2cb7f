//! Schedule lifecycle for a stored tournament: generation and result reporting.
//!
//! The generators themselves are pure; this module is the caller side that
//! feeds them the roster and history, stores what they produce, and applies
//! reported results back onto team records.

use crate::logic::round_robin::generate_round_robin;
use crate::logic::single_elimination::generate_single_elimination;
use crate::logic::swiss::generate_swiss_round;
use crate::models::{
    Match, MatchId, MatchStatus, StoredMatch, TeamId, Tournament, TournamentError,
    TournamentFormat,
};

/// Generate matches for a tournament.
///
/// Round-robin and single-elimination produce their complete schedule on the
/// first call and refuse a second. Swiss produces one round per call: round 1
/// immediately, later rounds only once every match so far is completed (byes
/// count as completed), with the accumulated history passed to the pairer.
pub fn generate_schedule(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }

    let generated = match tournament.format {
        TournamentFormat::RoundRobin | TournamentFormat::SingleElimination => {
            if tournament.schedule_started() {
                return Err(TournamentError::ScheduleAlreadyGenerated);
            }
            match tournament.format {
                TournamentFormat::RoundRobin => {
                    generate_round_robin(tournament.id, &tournament.teams)
                }
                _ => generate_single_elimination(tournament.id, &tournament.teams),
            }
        }
        TournamentFormat::Swiss => {
            if !tournament.current_round_complete() {
                return Err(TournamentError::RoundInProgress);
            }
            let round = tournament.rounds_generated + 1;
            let history: Vec<Match> = tournament
                .matches
                .iter()
                .map(|m| m.details.clone())
                .collect();
            generate_swiss_round(tournament.id, &tournament.teams, round, &history)
        }
    };

    tournament.rounds_generated = generated
        .iter()
        .map(|m| m.round)
        .max()
        .unwrap_or(tournament.rounds_generated);
    store_generated(tournament, generated);
    Ok(())
}

/// Report a result for a pending match: mark it completed, record winner and
/// scores, and update both teams' records.
pub fn report_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    winner_id: TeamId,
    team1_score: Option<u32>,
    team2_score: Option<u32>,
) -> Result<(), TournamentError> {
    // Copy the participant ids out so the match borrow ends before we mutate teams.
    let (team1, team2) = {
        let stored = tournament
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        let (team1, team2) = match (stored.details.team1_id, stored.details.team2_id) {
            (Some(a), Some(b)) if !stored.details.is_bye => (a, b),
            _ => return Err(TournamentError::MatchNotReportable),
        };
        if stored.details.status == MatchStatus::Completed {
            return Err(TournamentError::MatchAlreadyCompleted);
        }
        if winner_id != team1 && winner_id != team2 {
            return Err(TournamentError::WinnerNotInMatch(winner_id));
        }
        stored.details.status = MatchStatus::Completed;
        stored.details.winner_id = Some(winner_id);
        stored.details.team1_score = team1_score;
        stored.details.team2_score = team2_score;
        (team1, team2)
    };

    let loser = if winner_id == team1 { team2 } else { team1 };
    tournament
        .get_team_mut(winner_id)
        .ok_or(TournamentError::TeamNotFound(winner_id))?
        .record_win();
    tournament
        .get_team_mut(loser)
        .ok_or(TournamentError::TeamNotFound(loser))?
        .record_loss();
    Ok(())
}

/// Store generated matches, crediting byes to their team on the way in (a bye
/// is an automatic win; the generators never touch team records themselves).
fn store_generated(tournament: &mut Tournament, generated: Vec<Match>) {
    for m in generated {
        if m.is_bye {
            if let Some(winner) = m.winner_id {
                if let Some(team) = tournament.get_team_mut(winner) {
                    team.record_win();
                }
            }
        }
        tournament.matches.push(StoredMatch::new(m));
    }
}

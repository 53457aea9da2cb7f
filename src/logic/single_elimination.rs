//! Single-elimination bracket generation.

use crate::logic::shuffle::shuffled;
use crate::models::{Match, Team, TournamentId};
use rand::Rng;

/// Generate a single-elimination bracket with random seeding, using the
/// thread-local RNG.
pub fn generate_single_elimination(tournament_id: TournamentId, teams: &[Team]) -> Vec<Match> {
    generate_single_elimination_with_rng(tournament_id, teams, &mut rand::thread_rng())
}

/// Generate a single-elimination bracket with random seeding.
///
/// The bracket is sized to the smallest power of two holding the roster, and
/// only round 1 gets concrete teams:
///
/// 1. Shuffle the roster (seeding is random, not ranked).
/// 2. Fill `bracketSize / 2` round-1 slots with consecutive shuffled pairs: a
///    full pair is a pending match, a lone team is a bye that auto-advances,
///    and a slot past the roster stays an empty placeholder.
/// 3. Each later round holds half its predecessor's matches, all placeholders
///    to be filled as winners advance (the surrounding application's job).
///
/// Fewer than 2 teams yields no matches.
pub fn generate_single_elimination_with_rng<R: Rng + ?Sized>(
    tournament_id: TournamentId,
    teams: &[Team],
    rng: &mut R,
) -> Vec<Match> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let seeded = shuffled(teams, rng);
    let bracket_size = teams.len().next_power_of_two();
    let total_rounds = bracket_size.trailing_zeros();

    // A full bracket always holds bracket_size - 1 matches.
    let mut matches = Vec::with_capacity(bracket_size - 1);
    for slot in 0..bracket_size / 2 {
        let m = match (seeded.get(slot * 2), seeded.get(slot * 2 + 1)) {
            (Some(a), Some(b)) => Match::pending(tournament_id, 1, a.id, b.id),
            (Some(a), None) => Match::bye(tournament_id, 1, a.id),
            _ => Match::placeholder(tournament_id, 1),
        };
        matches.push(m);
    }

    let mut slots = bracket_size / 2;
    for round in 2..=total_rounds {
        slots /= 2;
        for _ in 0..slots {
            matches.push(Match::placeholder(tournament_id, round));
        }
    }
    matches
}

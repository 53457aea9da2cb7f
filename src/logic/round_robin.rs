//! Round-robin scheduling (circle method).

use crate::models::{Match, Team, TeamId, TournamentId};

/// Generate the full round-robin schedule: every team meets every other team
/// exactly once.
///
/// Circle method: with an odd roster one synthetic slot is added so the
/// effective count `n` is even; that slot sits in the fixed position, so its
/// pairing becomes a bye that rotates to a different team each round. One
/// slot stays fixed while the other `n - 1` rotate, for `n - 1` rounds; in
/// each round, rotated position `i` pairs with rotated position `n - 1 - i`,
/// and the anchor pairing (`i = 0`) plays the fixed slot.
///
/// Fewer than 2 teams yields no matches. The schedule is deterministic in the
/// roster order; callers that want a randomized schedule shuffle first.
pub fn generate_round_robin(tournament_id: TournamentId, teams: &[Team]) -> Vec<Match> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<TeamId>> = teams.iter().map(|t| Some(t.id)).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }
    let n = slots.len();
    let fixed = slots[n - 1];
    let rotating = &slots[..n - 1];

    let mut matches = Vec::with_capacity((n - 1) * (n / 2));
    for r in 0..n - 1 {
        let round = (r + 1) as u32;
        for i in 0..n / 2 {
            let a = rotating[(r + i) % (n - 1)];
            let b = if i == 0 {
                fixed
            } else {
                rotating[(r + n - 1 - i) % (n - 1)]
            };
            match (a, b) {
                (Some(x), Some(y)) => matches.push(Match::pending(tournament_id, round, x, y)),
                (Some(x), None) | (None, Some(x)) => {
                    matches.push(Match::bye(tournament_id, round, x))
                }
                // At most one synthetic slot exists, so two can never pair.
                (None, None) => {}
            }
        }
    }
    matches
}

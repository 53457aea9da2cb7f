//! Swiss-system pairing: one round at a time, by standings, avoiding rematches.

use crate::logic::shuffle::shuffled;
use crate::models::{Match, Team, TeamId, TournamentId};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Generate one Swiss round using the thread-local RNG (round 1 only is
/// randomized; later rounds are deterministic in the standings).
pub fn generate_swiss_round(
    tournament_id: TournamentId,
    teams: &[Team],
    round: u32,
    previous_matches: &[Match],
) -> Vec<Match> {
    generate_swiss_round_with_rng(
        tournament_id,
        teams,
        round,
        previous_matches,
        &mut rand::thread_rng(),
    )
}

/// Generate one Swiss round.
///
/// Round 1 shuffles the roster and pairs consecutive teams; an odd leftover
/// receives a bye. Later rounds sort by standings (see [`standings`]) and
/// greedily pair from the top: each unpaired team takes the first unpaired
/// team below it that it has not already faced. A team whose scan comes up
/// empty receives a bye rather than a forced rematch; the pairing is greedy,
/// not globally rematch-minimal.
///
/// `previous_matches` is the accumulated history of this tournament; only
/// matches with both team ids present contribute opponent relations, so byes
/// never block a future pairing. The caller updates team records between
/// rounds, which is what makes the standings meaningful.
///
/// Fewer than 2 teams yields no matches.
pub fn generate_swiss_round_with_rng<R: Rng + ?Sized>(
    tournament_id: TournamentId,
    teams: &[Team],
    round: u32,
    previous_matches: &[Match],
    rng: &mut R,
) -> Vec<Match> {
    if teams.len() < 2 {
        return Vec::new();
    }
    let round = round.max(1);
    if round == 1 {
        return pair_random(tournament_id, teams, round, rng);
    }

    let ranked = standings(teams);
    let opponents = previous_opponents(previous_matches);

    let mut paired = vec![false; ranked.len()];
    let mut matches = Vec::with_capacity(ranked.len() / 2 + 1);
    for i in 0..ranked.len() {
        if paired[i] {
            continue;
        }
        paired[i] = true;
        let faced = opponents.get(&ranked[i].id);
        let partner = (i + 1..ranked.len())
            .find(|&j| !paired[j] && faced.map_or(true, |f| !f.contains(&ranked[j].id)));
        match partner {
            Some(j) => {
                paired[j] = true;
                matches.push(Match::pending(
                    tournament_id,
                    round,
                    ranked[i].id,
                    ranked[j].id,
                ));
            }
            None => matches.push(Match::bye(tournament_id, round, ranked[i].id)),
        }
    }
    matches
}

/// Rank a roster for Swiss pairing and leaderboards: points descending, then
/// wins descending, then losses ascending. The sort is stable, so teams tied
/// on all three keep their input order.
pub fn standings(teams: &[Team]) -> Vec<Team> {
    let mut ranked = teams.to_vec();
    ranked.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(a.losses.cmp(&b.losses))
    });
    ranked
}

/// Round 1: shuffle and pair consecutive teams; an odd leftover gets a bye.
fn pair_random<R: Rng + ?Sized>(
    tournament_id: TournamentId,
    teams: &[Team],
    round: u32,
    rng: &mut R,
) -> Vec<Match> {
    let order = shuffled(teams, rng);
    order
        .chunks(2)
        .map(|pair| {
            if pair.len() == 2 {
                Match::pending(tournament_id, round, pair[0].id, pair[1].id)
            } else {
                Match::bye(tournament_id, round, pair[0].id)
            }
        })
        .collect()
}

/// Opponent sets from the match history. Byes carry no second team id and so
/// contribute no relation.
fn previous_opponents(previous_matches: &[Match]) -> HashMap<TeamId, HashSet<TeamId>> {
    let mut opponents: HashMap<TeamId, HashSet<TeamId>> = HashMap::new();
    for m in previous_matches {
        if let (Some(a), Some(b)) = (m.team1_id, m.team2_id) {
            opponents.entry(a).or_default().insert(b);
            opponents.entry(b).or_default().insert(a);
        }
    }
    opponents
}

//! Team data structure and record keeping.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// Points awarded to a team for a won (or bye) match.
pub const POINTS_PER_WIN: u32 = 3;

/// A team competing in a tournament.
///
/// The generators read `points`/`wins`/`losses` (Swiss standings) but never
/// mutate them; record updates happen in the result-reporting flow after a
/// match completes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Standings points (wins are worth [`POINTS_PER_WIN`]).
    pub points: u32,
}

impl Team {
    /// Create a new team with the given name. Record fields start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            name,
            wins: 0,
            losses: 0,
            points: 0,
        }
    }

    /// Credit a won match (or bye): one win and the win points.
    pub fn record_win(&mut self) {
        self.wins += 1;
        self.points += POINTS_PER_WIN;
    }

    /// Credit a lost match.
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }
}

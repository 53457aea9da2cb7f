//! Scheduling logic: shuffle, the three generators, and the schedule lifecycle.

mod round_robin;
mod schedule;
mod shuffle;
mod single_elimination;
mod swiss;

pub use round_robin::generate_round_robin;
pub use schedule::{generate_schedule, report_match_result};
pub use shuffle::shuffled;
pub use single_elimination::{generate_single_elimination, generate_single_elimination_with_rng};
pub use swiss::{generate_swiss_round, generate_swiss_round_with_rng, standings};

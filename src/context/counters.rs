use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// The number of restarts through a solve.
    pub restarts: usize,

    /// A count of clauses learnt from conflicts.
    pub learned: usize,

    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of the literals implied by some decision which were removed from the trail by a backjump.
    pub implications: usize,

    /// A count of every conflict seen during a solve.
    pub conflicts: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

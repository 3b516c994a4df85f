/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [initial propagation](crate::procedures::bootstrap) of a solve.
    pub const BOOTSTRAP: &str = "bootstrap";

    /// Logs related to [BCP](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [decisions](crate::procedures::decision).
    pub const DECISION: &str = "decision";

    /// Logs related to [analysis](crate::procedures::analysis).
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to the [clause database](crate::db::clause).
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [backjumping](crate::procedures::backjump).
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [restarts](crate::procedures::restart).
    pub const RESTART: &str = "restart";
}

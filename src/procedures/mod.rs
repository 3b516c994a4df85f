//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! In the order a solve uses them:
//! - [bootstrap] propagates the formula without any decision, fixes the baseline of restarts, and watches the remaining clauses.
//! - [decision] picks a literal to value by activity.
//! - [bcp] propagates a literal through the watched clauses, and notices a conflict.
//! - [analysis] learns a clause from a conflict.
//! - [backjump] undoes the most recent decision, and returns the literal to assert in its place.
//! - [restart] may return the trail to the baseline.
//!
//! And, [solve] composes each of these.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod bootstrap;
pub mod decision;
pub mod restart;
pub mod solve;

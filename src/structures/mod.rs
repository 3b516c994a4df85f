//! The abstract elements of a solve and their representation.
//!
//! - [Atoms](atom), aka. variables.
//! - [Literals](literal), an atom paired with a polarity.
//! - [Clauses](clause), disjunctions of literals.
//! - [Valuations](valuation), collections of literals taken to be true.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;

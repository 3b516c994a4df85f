//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some of these are internally expected --- e.g. BCP and backjump errors are used to control the flow of a solve, and are never returned from a solve.
//! - Some are external --- e.g. a parse error in some DIMACS input.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Backjump(BackjumpError),
    BCP(BCPError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Decision(DecisionError),
    Parse(ParseError),

    /// Some result was requested from a context in a state which does not support the result.
    InvalidState,
}

/// Noted errors during a backjump.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BackjumpError {
    /// There is no decision to jump back over.
    /// During a solve, this is how a conflict independent of any decision is noticed, and so the formula is unsatisfiable.
    NoDecision,
}

impl From<BackjumpError> for ErrorKind {
    fn from(e: BackjumpError) -> Self {
        ErrorKind::Backjump(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// An attempt to use 0 as a literal.
    ZeroLiteral,

    /// A solve has begun, and the formula may no longer be extended.
    SolveStarted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    /// An empty clause is unsatisfiable, and so is the formula it belongs to.
    EmptyClause,

    /// A key without a clause.
    Missing,

    /// All possible keys have been used.
    StorageExhausted,

    /// A watch was requested to be removed from a list which did not contain the watch.
    CorruptWatch,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when setting a configuration option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors when making a decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionError {
    /// A decision was requested, though every atom has a value.
    /// A solve checks for a complete valuation before any decision, so this is an internal fault.
    NoUnassignedAtom,
}

impl From<DecisionError> for ErrorKind {
    fn from(e: DecisionError) -> Self {
        ErrorKind::Decision(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// An atom larger than the atom count of the problem specification, at the given line.
    IllegalAtom(usize),

    /// More clauses than the clause count of the problem specification, noticed at the given line.
    ClauseCount(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

//! Clauses, aka. disjunctions of literals.
//!
//! The canonical representation of a clause is a vector of literals.
//! Though, methods on a clause are given through the [Clause] trait, implemented for any slice of literals.
//!
//! A clause is assumed to contain no duplicate literals and no literal together with its negation.
//! Each of these is ensured when a clause is [added](crate::context::GenericContext::add_clause) to a context.

use crate::structures::literal::{CLiteral, Literal};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// Methods on a clause.
pub trait Clause {
    /// A string of the clause in DIMACS form, optionally terminated with a `0`.
    fn as_dimacs(&self, zero: bool) -> String;

    /// True if some literal appears in the clause together with its negation.
    fn is_tautology(&self) -> bool;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.iter() {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn is_tautology(&self) -> bool {
        self.iter().any(|literal| self.contains(&literal.negate()))
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn is_tautology(&self) -> bool {
        self.as_slice().is_tautology()
    }
}

//! Literals are atoms paired with a (boolean) polarity.
//!
//! A literal is represented as a signed integer, with the magnitude of the integer being the atom and the sign the polarity.
//! So, negation is a flip of the sign, and `0` is never a literal.
//!
//! ```rust
//! # use otter_pup::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert_eq!(literal.negate(), 79);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The index of the literal in a table with two slots per atom.
    ///
    /// The negative literal of atom *a* is at 2*a*, the positive literal at 2*a* + 1.
    fn index(&self) -> usize;
}

/// The canonical representation of a literal.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn index(&self) -> usize {
        2 * (self.atom() as usize) + (self.polarity() as usize)
    }
}

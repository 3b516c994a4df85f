/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms of a formula over *n* atoms are the integers 1..=*n*.
The integer 0 is never an atom, as 0 is used to end a clause in the DIMACS format and has no sign.

In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by the largest magnitude of a [CLiteral](crate::structures::literal::CLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/*!
The trail, the literals currently valued true in the order they were valued.

A literal is true exactly when it is on the trail.
The trail also records the position of each decision, as a stack of positions.
Any literal on the trail which is not at one of these positions is a consequence of the decisions before it, or of the formula alone.

The decision level of a position *p* is the count of decision positions at or before *p*.

# Implementation

A membership check on the trail itself would be linear in the length of the trail.
So, for each atom, the trail also keeps the position (if any) at which a literal of the atom was placed on the trail.
This table is a cache of the trail: it is written only by [push](Trail::push), [push_decision](Trail::push_decision), and [truncate](Trail::truncate), and never read independently of the literals it indexes.

```rust
# use otter_pup::db::trail::Trail;
let mut trail = Trail::default();
trail.ensure_atoms(3);

trail.push(2);
trail.push_decision(-1);
trail.push(3);

assert!(trail.is_true(-1));
assert!(trail.is_false(1));
assert_eq!(trail.decision_level_of(0), 0);
assert_eq!(trail.decision_level_of(2), 1);

trail.truncate(1);
assert_eq!(trail.literals(), &[2]);
assert_eq!(trail.decision_count(), 0);
assert_eq!(trail.value_of(1), None);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

#[derive(Default, Clone, Debug)]
pub struct Trail {
    /// The literals valued true, in order.
    literals: Vec<CLiteral>,

    /// The positions of decisions on the trail, in order.
    decision_indicies: Vec<usize>,

    /// For each atom, the position of the literal of the atom on the trail, if any.
    positions: Vec<Option<usize>>,
}

impl Trail {
    /// Ensures the trail is able to record a value for each atom up to and including `atom`.
    pub fn ensure_atoms(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.positions.len() < required {
            self.positions.resize(required, None);
        }
    }

    /// Places a literal on the trail as a consequence of those before it.
    ///
    /// # Soundness
    /// The atom of the literal must not have a value.
    pub fn push(&mut self, literal: CLiteral) {
        debug_assert!(self.value_of(literal.atom()).is_none());
        self.positions[literal.atom() as usize] = Some(self.literals.len());
        self.literals.push(literal);
    }

    /// Places a literal on the trail as a decision.
    ///
    /// # Soundness
    /// The atom of the literal must not have a value.
    pub fn push_decision(&mut self, literal: CLiteral) {
        self.decision_indicies.push(self.literals.len());
        self.push(literal);
    }

    /// Removes every literal from `position` to the end of the trail, together with any decision made at or after `position`.
    pub fn truncate(&mut self, position: usize) {
        if position >= self.literals.len() {
            return;
        }

        for literal in self.literals.drain(position..) {
            self.positions[literal.atom() as usize] = None;
        }

        let remaining_decisions = self.decision_indicies.partition_point(|&d| d < position);
        self.decision_indicies.truncate(remaining_decisions);
    }

    /// Removes the most recent decision from the stack of decisions, returning the position of the decision on the trail together with the decision.
    ///
    /// The trail itself is unchanged.
    pub fn pop_decision(&mut self) -> Option<(usize, CLiteral)> {
        let position = self.decision_indicies.pop()?;
        Some((position, self.literals[position]))
    }

    /// The literals on the trail, in order.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The positions of decisions, in order.
    pub fn decision_indicies(&self) -> &[usize] {
        &self.decision_indicies
    }

    /// The decisions on the trail, in order.
    pub fn decisions(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.decision_indicies
            .iter()
            .map(|&position| self.literals[position])
    }

    /// A count of the literals on the trail.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True if no literal is on the trail.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A count of the decisions on the trail.
    pub fn decision_count(&self) -> usize {
        self.decision_indicies.len()
    }

    /// The decision level of the given position.
    pub fn decision_level_of(&self, position: usize) -> usize {
        self.decision_indicies.partition_point(|&d| d <= position)
    }

    /// The value of an atom on the trail, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        match self.positions.get(atom as usize) {
            Some(Some(position)) => Some(self.literals[*position].polarity()),
            _ => None,
        }
    }

    /// True if the literal is on the trail.
    pub fn is_true(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == Some(literal.polarity())
    }

    /// True if the negation of the literal is on the trail.
    pub fn is_false(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == Some(!literal.polarity())
    }
}

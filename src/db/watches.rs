/*!
A structure to record which clauses are watching a literal.

# Theory

A core part of a solve is [Boolean Constraint Propagation](crate::procedures::bcp) (BCP).
In short, BCP is the observation that some literal in a clause must be true due to all other literals in the clause being false.

For example, given the clause p ∨ -q ∨ r and a valuation v such that p is false and q is true, the clause is true on the valuation *only if* r is (made) true.

Note, BCP only applies when:
- There is exactly one literal without a value.
- All other literals conflict with the background valuation.

This motivates the use of two watches on each clause with at least two literals.
So long as neither watched literal is false, the clause cannot assert anything, and so there is no need to examine the clause when any other literal of the clause is made false.

# Implementation

For each literal there is a list of the keys to clauses watching the literal.
Lists are indexed by [Literal::index], and so the lists of both literals of an atom sit together.

The watched pair of a clause is stored with the [clause](crate::db::clause::DbClause) itself, and the lists here are kept consistent with those pairs:
- A clause key appears in the list of a literal if and only if the literal is one of the two watched literals of the clause.
- When a watch is moved, the key is removed from the list of the old literal before it is added to the list of the new literal.

During [BCP](crate::procedures::bcp) the list of a literal made false is [taken](Watches::take) from the database, revised, and [restored](Watches::restore).
This avoids a borrow of the database for the list while other lists are updated.
For, a watch is only ever moved to a literal which is not false, and so never to the list taken.

# Literature

[The art of computer programming, Volume 4](https://www-cs-faculty.stanford.edu/~knuth/taocp.html) discusses watched literals in the *Lazy data structures* section of *Backtracking Algorithms*.
It seems general use of watched literals followed from [Chaff](https://dl.acm.org/doi/10.1145/378239.379017).
*/

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err,
};

/// Watch lists for each literal, indexed by [Literal::index].
#[derive(Default, Debug)]
pub struct Watches {
    lists: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Ensures a list exists for both literals of each atom up to and including `atom`.
    pub fn ensure_atoms(&mut self, atom: Atom) {
        let required = 2 * (atom as usize + 1);
        if self.lists.len() < required {
            self.lists.resize_with(required, Vec::default);
        }
    }

    /// Notes the clause of `key` is watching `literal`.
    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.lists[literal.index()].push(key);
    }

    /// Removes the note that the clause of `key` is watching `literal`.
    ///
    /// As the list is shuffled, any heuristic on the traversal order of the list is void.
    pub fn unwatch(
        &mut self,
        literal: CLiteral,
        key: ClauseKey,
    ) -> Result<(), err::ClauseDBError> {
        let list = &mut self.lists[literal.index()];
        match list.iter().position(|&watcher| watcher == key) {
            Some(index) => {
                list.swap_remove(index);
                Ok(())
            }
            None => Err(err::ClauseDBError::CorruptWatch),
        }
    }

    /// The clauses watching `literal`.
    pub fn watchers(&self, literal: CLiteral) -> &[ClauseKey] {
        match self.lists.get(literal.index()) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Takes the list of clauses watching `literal`, leaving an empty list until the list is [restored](Watches::restore).
    pub fn take(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Sets the list of clauses watching `literal` to `list`.
    /// To be used in conjunction with [take](Watches::take).
    pub fn restore(&mut self, literal: CLiteral, list: Vec<ClauseKey>) {
        self.lists[literal.index()] = list;
    }

    /// A count of all watches, across all lists.
    pub fn watch_count(&self) -> usize {
        self.lists.iter().map(|list| list.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_and_unwatch() {
        let mut watches = Watches::default();
        watches.ensure_atoms(3);

        watches.watch(1, ClauseKey(0));
        watches.watch(-2, ClauseKey(0));
        watches.watch(1, ClauseKey(1));

        assert_eq!(watches.watchers(1), &[ClauseKey(0), ClauseKey(1)]);
        assert!(watches.watchers(-1).is_empty());
        assert_eq!(watches.watch_count(), 3);

        assert!(watches.unwatch(1, ClauseKey(0)).is_ok());
        assert_eq!(watches.watchers(1), &[ClauseKey(1)]);

        assert_eq!(
            watches.unwatch(1, ClauseKey(0)),
            Err(err::ClauseDBError::CorruptWatch)
        );
    }

    #[test]
    fn take_and_restore() {
        let mut watches = Watches::default();
        watches.ensure_atoms(2);
        watches.watch(2, ClauseKey(4));

        let list = watches.take(2);
        assert!(watches.watchers(2).is_empty());

        watches.restore(2, list);
        assert_eq!(watches.watchers(2), &[ClauseKey(4)]);
    }
}

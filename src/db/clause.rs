/*!
A database of clauses.

Clauses are either *original*, given as part of the formula, or *additions*, learnt during a solve.
Both are stored together, and no distinction is made between the two during a solve beyond the [source](ClauseSource) noted with each clause.

The database only ever grows.
A clause is given a [key](ClauseKey) when stored, and the key is valid for the life of the database.

# Storing a clause

[store](ClauseDB::store) distinguishes clauses by length:
- An empty clause is not stored, and an [EmptyClause](err::ClauseDBError::EmptyClause) error is returned, as the clause (and so the formula) is unsatisfiable.
- A unit clause is stored, though the literal is returned in order to be valued directly, as a unit clause never watches a literal.
- Any other clause is stored, and may be given a pair of [watched literals](crate::db::watches).

```rust
# use otter_pup::db::clause::{ClauseDB, ClauseSource, StoreOk};
# use otter_pup::types::err::ClauseDBError;
let mut clause_db = ClauseDB::default();

assert!(matches!(clause_db.store(vec![-3], ClauseSource::Original), Ok(StoreOk::Unit(_, -3))));
assert!(matches!(clause_db.store(vec![1, 2], ClauseSource::Original), Ok(StoreOk::Long(_))));
assert_eq!(clause_db.store(vec![], ClauseSource::Addition), Err(ClauseDBError::EmptyClause));

assert_eq!(clause_db.len(), 2);
```
*/

use crate::{
    db::{trail::Trail, ClauseKey},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err,
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// The clause was given as part of the formula.
    Original,

    /// The clause was learnt from a conflict.
    Addition,
}

/// Ok results from storing a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOk {
    /// A clause of one literal, to be valued directly rather than watched.
    Unit(ClauseKey, CLiteral),

    /// A clause of at least two literals.
    Long(ClauseKey),
}

/// The status of a clause relative to some valuation, as observed when one of the watched literals is made false.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// A watched literal is true.
    Witnessed,

    /// A literal which is not watched is true.
    Satisfied(CLiteral),

    /// Exactly one literal is not false, and that literal has no value.
    Unit(CLiteral),

    /// At least two literals have no value, the first two of which are given.
    Unresolved(CLiteral, CLiteral),

    /// Every literal is false.
    Conflict,
}

/// A clause, as stored in the database.
#[derive(Clone, Debug)]
pub struct DbClause {
    key: ClauseKey,
    clause: CClause,
    source: ClauseSource,
    watched: Option<[CLiteral; 2]>,
}

impl DbClause {
    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the clause.
    pub fn literals(&self) -> &[CLiteral] {
        &self.clause
    }

    /// The source of the clause.
    pub fn source(&self) -> ClauseSource {
        self.source
    }

    /// The watched literals of the clause, if the clause is watched.
    pub fn watched(&self) -> Option<[CLiteral; 2]> {
        self.watched
    }

    /// Sets the watched literals of the clause.
    ///
    /// # Soundness
    /// The [watch database](crate::db::watches) must be updated alongside the clause.
    pub fn set_watched(&mut self, watched: [CLiteral; 2]) {
        self.watched = Some(watched);
    }

    /// The status of the clause on the given trail.
    ///
    /// Literals are examined in the order they appear in the clause, so the literals returned are the first of their kind.
    pub fn status(&self, trail: &Trail) -> ClauseStatus {
        if let Some([a, b]) = self.watched {
            if trail.is_true(a) || trail.is_true(b) {
                return ClauseStatus::Witnessed;
            }
        }

        let mut first = None;
        let mut second = None;

        for &literal in &self.clause {
            if trail.is_true(literal) {
                return ClauseStatus::Satisfied(literal);
            }

            if !trail.is_false(literal) {
                if first.is_none() {
                    first = Some(literal);
                } else if second.is_none() {
                    second = Some(literal);
                }
            }
        }

        match (first, second) {
            (Some(x), Some(y)) => ClauseStatus::Unresolved(x, y),
            (Some(x), None) => ClauseStatus::Unit(x),
            _ => ClauseStatus::Conflict,
        }
    }
}

/// The clause database.
#[derive(Default, Debug)]
pub struct ClauseDB {
    clauses: Vec<DbClause>,
    original_count: usize,
    addition_count: usize,
}

impl ClauseDB {
    /// Stores a clause, returning the key to the clause.
    ///
    /// For details, see [db::clause](crate::db::clause).
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
    ) -> Result<StoreOk, err::ClauseDBError> {
        if clause.is_empty() {
            log::trace!(target: targets::CLAUSE_DB, "Empty clause from {source:?}");
            return Err(err::ClauseDBError::EmptyClause);
        }

        let key = match u32::try_from(self.clauses.len()) {
            Ok(index) => ClauseKey(index),
            Err(_) => return Err(err::ClauseDBError::StorageExhausted),
        };

        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));

        let result = match clause.as_slice() {
            [literal] => StoreOk::Unit(key, *literal),
            _ => StoreOk::Long(key),
        };

        match source {
            ClauseSource::Original => self.original_count += 1,
            ClauseSource::Addition => self.addition_count += 1,
        }

        self.clauses.push(DbClause {
            key,
            clause,
            source,
            watched: None,
        });

        Ok(result)
    }

    /// The clause of a key.
    pub fn get(&self, key: ClauseKey) -> Result<&DbClause, err::ClauseDBError> {
        self.clauses
            .get(key.index())
            .ok_or(err::ClauseDBError::Missing)
    }

    /// The clause of a key, mutably.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut DbClause, err::ClauseDBError> {
        self.clauses
            .get_mut(key.index())
            .ok_or(err::ClauseDBError::Missing)
    }

    /// A count of all clauses in the database.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True if no clause has been stored.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// A count of the original clauses in the database.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of the clauses added to the database during a solve.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// All clauses in the database, in order of addition.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DbClause> {
        self.clauses.iter()
    }

    /// The literals of each original clause, in order of addition.
    pub fn original_clauses(&self) -> impl Iterator<Item = &[CLiteral]> {
        self.clauses
            .iter()
            .filter(|clause| clause.source == ClauseSource::Original)
            .map(|clause| clause.literals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail_of(literals: &[CLiteral]) -> Trail {
        let mut trail = Trail::default();
        trail.ensure_atoms(5);
        for &literal in literals {
            trail.push(literal);
        }
        trail
    }

    fn long_clause(clause_db: &mut ClauseDB, clause: CClause) -> ClauseKey {
        match clause_db.store(clause, ClauseSource::Original) {
            Ok(StoreOk::Long(key)) => key,
            _ => panic!("expected a long clause"),
        }
    }

    #[test]
    fn keys_follow_order_of_addition() {
        let mut clause_db = ClauseDB::default();
        let a = long_clause(&mut clause_db, vec![1, 2]);
        let b = long_clause(&mut clause_db, vec![-1, 3]);
        assert_eq!(a, ClauseKey(0));
        assert_eq!(b, ClauseKey(1));

        assert!(clause_db.store(vec![4, 5], ClauseSource::Addition).is_ok());
        assert_eq!(clause_db.original_count(), 2);
        assert_eq!(clause_db.addition_count(), 1);
        assert_eq!(clause_db.original_clauses().count(), 2);

        assert_eq!(clause_db.get(ClauseKey(7)).err(), Some(err::ClauseDBError::Missing));
    }

    #[test]
    fn status() {
        let mut clause_db = ClauseDB::default();
        let key = long_clause(&mut clause_db, vec![1, 2, 3]);
        let clause = clause_db.get(key).expect("stored");

        assert_eq!(clause.status(&trail_of(&[])), ClauseStatus::Unresolved(1, 2));
        assert_eq!(clause.status(&trail_of(&[-1])), ClauseStatus::Unresolved(2, 3));
        assert_eq!(clause.status(&trail_of(&[-1, -3])), ClauseStatus::Unit(2));
        assert_eq!(clause.status(&trail_of(&[-1, -2, -3])), ClauseStatus::Conflict);
        assert_eq!(clause.status(&trail_of(&[-1, 3])), ClauseStatus::Satisfied(3));
    }

    #[test]
    fn watched_witness() {
        let mut clause_db = ClauseDB::default();
        let key = long_clause(&mut clause_db, vec![1, 2, 3]);
        let clause = clause_db.get_mut(key).expect("stored");
        clause.set_watched([3, 1]);

        assert_eq!(clause.status(&trail_of(&[-1, 3])), ClauseStatus::Witnessed);
    }
}

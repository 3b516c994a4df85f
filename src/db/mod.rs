/*!
Databases for holding information relevant to a solve.

- [The clause database](crate::db::clause)
  + A collection of clauses, each indexed by a clause key.
- [The trail](crate::db::trail)
  + The literals valued true, in the order they were valued, together with the positions of decisions.
- [The watch database](crate::db::watches)
  + For each literal, the clauses watching the literal.
- [The activity database](crate::db::activity)
  + For each literal, a score used when making decisions.

Clauses are only ever referenced by [key](ClauseKey), so a watch list records an index into the clause database rather than a reference to a clause.
*/

pub mod activity;
pub mod clause;
pub mod trail;
pub mod watches;

/// A key to a clause in the [clause database](crate::db::clause).
///
/// Keys are issued in order of addition, and as clauses are never removed a key is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(pub u32);

impl ClauseKey {
    /// The index of the clause in the database.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/*!
Analysis of a conflict.

# Overview

The clause learnt from a conflict is the negation of each decision on the trail, in the order the decisions were made.

For, propagation from the decisions (and the formula) led to a conflict, so the decisions may not all be true together.
A learnt clause is a consequence of the formula, though typically larger than a clause found by resolution, as no literal implied by a decision is considered.

If no decision has been made, the learnt clause is empty, and so the formula is unsatisfiable.

# Watches of a learnt clause

A learnt clause of at least two literals watches its *last* two literals, the negations of the two most recent decisions.
After a [backjump](crate::procedures::backjump) the negation of the most recent decision is asserted, and so the clause is satisfied by a watched literal.
The other watched literal is false, though it is undone by any backjump which undoes the asserted literal.

A unit clause is stored without watches, as the literal of the clause is asserted directly by the backjump.

```rust,ignore
let learnt_clause = self.analyze_conflict();
match self.store_learnt(learnt_clause) {
    Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause)) => { /* unsatisfiable */ }
    ...
}
```
*/

use crate::{
    context::GenericContext,
    db::clause::{ClauseSource, StoreOk},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The negation of each decision, in the order of decisions.
    pub fn analyze_conflict(&self) -> CClause {
        let clause: CClause = self
            .trail
            .decisions()
            .map(|decision| decision.negate())
            .collect();

        log::trace!(target: targets::ANALYSIS, "Learnt: {}", clause.as_dimacs(false));
        clause
    }

    /// Stores a learnt clause, watching the last two literals of the clause if the clause is not unit.
    pub fn store_learnt(&mut self, clause: CClause) -> Result<StoreOk, ErrorKind> {
        let watch_pair = match clause.as_slice() {
            [.., a, b] => Some([*a, *b]),
            _ => None,
        };

        let result = self.clause_db.store(clause, ClauseSource::Addition)?;

        if let (StoreOk::Long(key), Some([a, b])) = (result, watch_pair) {
            let the_clause = self.clause_db.get_mut(key)?;
            the_clause.set_watched([a, b]);
            self.watches.watch(a, key);
            self.watches.watch(b, key);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        db::{clause::StoreOk, ClauseKey},
        types::err::{self, ErrorKind},
    };

    #[test]
    fn learnt_clause_negates_decisions() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2, 3, 4]).is_ok());
        assert!(the_context.bootstrap().is_ok());

        the_context.trail.push_decision(-1);
        the_context.trail.push(5);
        the_context.trail.push_decision(2);
        the_context.trail.push_decision(-3);

        let learnt = the_context.analyze_conflict();
        assert_eq!(learnt, vec![1, -2, 3]);

        assert_eq!(
            the_context.store_learnt(learnt),
            Ok(StoreOk::Long(ClauseKey(1)))
        );
        assert_eq!(the_context.watches.watchers(-2), &[ClauseKey(1)]);
        assert_eq!(the_context.watches.watchers(3), &[ClauseKey(1)]);
        assert_eq!(the_context.clause_db.addition_count(), 1);
    }

    #[test]
    fn learnt_units_are_not_watched() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.bootstrap().is_ok());
        let watch_count = the_context.watches.watch_count();

        assert_eq!(
            the_context.store_learnt(vec![-2]),
            Ok(StoreOk::Unit(ClauseKey(1), -2))
        );
        assert_eq!(the_context.watches.watch_count(), watch_count);
    }

    #[test]
    fn nothing_learnt_without_a_decision() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.bootstrap().is_ok());

        let learnt = the_context.analyze_conflict();
        assert!(learnt.is_empty());
        assert_eq!(
            the_context.store_learnt(learnt),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause))
        );
    }
}

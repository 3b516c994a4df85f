/*!
Preparation of a context for search.

Before any decision is made:
1. Unit propagation is applied to the formula until no clause is unit on the trail.
   Each clause is examined in full, and so no watches are required.
2. The trail is recorded as the baseline, which any [restart](crate::procedures::restart) returns to.
3. The activity of each literal is set to the count of original clauses containing the literal.
4. Each clause not satisfied by the baseline watches the first two literals in the clause which are not false.

A conflict during (1) is independent of any decision, and so the formula is unsatisfiable.

After (1) no clause is unit or conflicting on the trail, so a clause in (4) is either satisfied or has at least two literals without a value.
And, as the baseline is never undone, a satisfied clause may be ignored for the rest of the solve.
*/

use crate::{
    context::GenericContext,
    db::{activity::ActivityDB, clause::ClauseStatus, ClauseKey},
    misc::log::targets::{self},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates the formula, records the baseline, and initialises activity and watches.
    ///
    /// For documentation, see [procedures::bootstrap](crate::procedures::bootstrap).
    pub fn bootstrap(&mut self) -> Result<(), err::BCPError> {
        self.propagate_units()?;

        self.baseline = self.trail.literals().to_vec();
        log::info!(target: targets::BOOTSTRAP, "Baseline of {} literals", self.baseline.len());

        self.activity =
            ActivityDB::from_occurrences(self.clause_db.original_clauses(), self.atom_count);

        for index in 0..self.clause_db.len() {
            let key = ClauseKey(index as u32);
            let Ok(clause) = self.clause_db.get_mut(key) else {
                return Err(err::BCPError::CorruptWatch);
            };

            match clause.status(&self.trail) {
                ClauseStatus::Unresolved(a, b) => {
                    clause.set_watched([a, b]);
                    self.watches.watch(a, key);
                    self.watches.watch(b, key);
                }

                ClauseStatus::Satisfied(_) | ClauseStatus::Witnessed => {}

                ClauseStatus::Unit(_) | ClauseStatus::Conflict => {
                    log::error!(target: targets::BOOTSTRAP, "{key} is not settled by propagation");
                    return Err(err::BCPError::CorruptWatch);
                }
            }
        }

        Ok(())
    }

    /// Values the literal of each unit clause until no clause is unit, or some clause is found to conflict with the trail.
    fn propagate_units(&mut self) -> Result<(), err::BCPError> {
        loop {
            let mut fresh_value = false;

            for clause in self.clause_db.all_clauses() {
                match clause.status(&self.trail) {
                    ClauseStatus::Unit(literal) => {
                        log::trace!(target: targets::BOOTSTRAP, "{literal} from {}", clause.key());
                        self.trail.push(literal);
                        fresh_value = true;
                    }

                    ClauseStatus::Conflict => {
                        log::info!(target: targets::BOOTSTRAP, "Conflict at {}", clause.key());
                        return Err(err::BCPError::Conflict(clause.key()));
                    }

                    _ => {}
                }
            }

            if !fresh_value {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, db::ClauseKey, types::err};

    #[test]
    fn units_are_propagated() {
        let mut the_context = Context::from_config(Config::default());
        for clause in [vec![-1, 2], vec![1], vec![-2, 3, 4], vec![2, 5]] {
            assert!(the_context.add_clause(clause).is_ok());
        }

        assert!(the_context.bootstrap().is_ok());
        assert_eq!(the_context.baseline, vec![1, 2]);

        // Only the clause -2 3 4 remains unsettled, watching 3 and 4.
        assert_eq!(the_context.watches.watch_count(), 2);
        assert_eq!(the_context.watches.watchers(3), &[ClauseKey(2)]);
        assert_eq!(the_context.watches.watchers(4), &[ClauseKey(2)]);
        assert_eq!(the_context.activity.score(2), 2.0);
    }

    #[test]
    fn conflict_without_decision() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1]).is_ok());
        assert!(the_context.add_clause([-1]).is_ok());

        assert_eq!(
            the_context.bootstrap(),
            Err(err::BCPError::Conflict(ClauseKey(1)))
        );
    }
}

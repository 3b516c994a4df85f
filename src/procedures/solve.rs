/*!
The search for a model of a formula.

# Overview

A solve begins with [bootstrap](crate::procedures::bootstrap), and a conflict there is immediate unsatisfiability.

After, each iteration of the solve loop:
1. Ends the solve with a model, if every atom has a value.
2. Ends the solve with an unknown result, if the [terminate callback](crate::context::callbacks) returns true or the [time limit](crate::config::Config::time_limit) is exceeded.
3. Makes a [decision](crate::procedures::decision), and [propagates](crate::procedures::bcp) the decision.

Each conflict found by propagation is handled in turn:
1. Activity is bumped for the conflicting clause, and then decays.
2. A clause is [learnt](crate::procedures::analysis), and stored.
   If the clause is empty, the formula is unsatisfiable.
3. A [backjump](crate::procedures::backjump) undoes the most recent decision.
   If there is no decision to undo, the formula is unsatisfiable.
4. The negation of the undone decision is placed on the trail.
5. A [restart](crate::procedures::restart) may happen, in which case the loop continues to a decision.
   Otherwise, the negation of the undone decision is propagated, and any conflict is handled in turn.

```rust
# use otter_pup::context::Context;
# use otter_pup::config::Config;
# use otter_pup::reports::Report;
let mut the_context = Context::from_config(Config::default());

for clause in [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]] {
    assert!(the_context.add_clause(clause).is_ok());
}

assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
assert!(the_context.counters.learned >= 1);
```

# Interrupted solves

A solve which ends with an unknown result leaves the trail as it was after the last propagation, and the context remains in the [Solving](crate::context::ContextState::Solving) state.
So, a further call to solve continues the search.
*/

use crate::{
    context::{ContextState, GenericContext},
    db::clause::StoreOk,
    misc::log::targets::{self},
    reports::Report,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),

            ContextState::Input => {
                self.state = ContextState::Solving;
                match self.bootstrap() {
                    Ok(()) => {}
                    Err(err::BCPError::Conflict(_)) => {
                        self.state = ContextState::Unsatisfiable;
                        return Ok(self.report());
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            ContextState::Solving => {}
        }

        let this_total_time = std::time::Instant::now();
        let time_before = self.counters.time;
        let time_limit = self.config.time_limit;

        'solve_loop: loop {
            self.counters.time = time_before + this_total_time.elapsed();

            if self.trail.len() >= self.atom_count as usize {
                self.state = ContextState::Satisfiable;
                break 'solve_loop;
            }

            if self.check_callback_terminate() {
                log::info!(target: targets::DECISION, "Solve terminated by callback");
                return Ok(Report::Unknown);
            }

            if time_limit.is_some_and(|limit| self.counters.time > limit) {
                log::info!(target: targets::DECISION, "Time limit of {time_limit:?} exceeded");
                return Ok(Report::Unknown);
            }

            let decision = self.decide()?;
            self.counters.decisions += 1;
            self.trail.push_decision(decision);
            self.make_callback_progress();

            let mut propagation = self.bcp(decision);

            loop {
                let key = match propagation {
                    Ok(()) => continue 'solve_loop,
                    Err(err::BCPError::Conflict(key)) => key,
                    Err(e) => return Err(e.into()),
                };

                self.counters.conflicts += 1;
                log::trace!(target: targets::ANALYSIS, "Conflict {} at {key}", self.counters.conflicts);

                self.bump_on_conflict(key)?;
                self.decay_activity();

                let learnt_clause = self.analyze_conflict();
                let stored = match self.store_learnt(learnt_clause) {
                    Ok(stored) => stored,
                    Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause)) => {
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop;
                    }
                    Err(e) => return Err(e),
                };
                self.counters.learned += 1;

                let asserted = match self.backjump() {
                    Ok(literal) => literal,
                    Err(err::BackjumpError::NoDecision) => {
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop;
                    }
                };

                if let StoreOk::Unit(_, literal) = stored {
                    debug_assert_eq!(literal, asserted);
                }

                self.trail.push(asserted);

                if self.maybe_restart() {
                    continue 'solve_loop;
                }

                propagation = self.bcp(asserted);
            }
        }

        log::info!("Solve complete: {}", self.report());
        Ok(self.report())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use crate::{
        config::Config,
        context::{Context, ContextState},
        reports::Report,
        structures::valuation::verify,
    };

    #[test]
    fn solved_contexts_keep_their_report() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, -2]).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        let model = the_context.valuation();
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.valuation(), model);
        assert!(the_context.add_clause([2]).is_err());
    }

    #[test]
    fn terminate_callback_interrupts() {
        let mut the_context = Context::from_config(Config::default());
        for clause in [vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3]] {
            assert!(the_context.add_clause(clause).is_ok());
        }

        let calls = Rc::new(Cell::new(0));
        let callback_calls = calls.clone();
        the_context.set_callback_terminate(Box::new(move || {
            callback_calls.set(callback_calls.get() + 1);
            callback_calls.get() == 1
        }));

        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.state, ContextState::Solving);
        assert_eq!(the_context.counters.decisions, 0);

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(calls.get() > 1);
        let formula = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3]];
        assert!(verify(&the_context.valuation(), &formula));
    }

    #[test]
    fn progress_callback_sees_each_decision() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.add_clause([3, 4]).is_ok());

        let seen = Rc::new(Cell::new(0));
        let callback_seen = seen.clone();
        the_context.set_callback_progress(Box::new(move |trail_length, atom_count| {
            assert!(trail_length <= atom_count);
            callback_seen.set(callback_seen.get() + 1);
        }));

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(seen.get(), the_context.counters.decisions);
    }

    #[test]
    fn counters_exclude_the_final_empty_clause() {
        let mut config = Config::default();
        config.restart.value = false;
        let mut the_context = Context::from_config(config);
        for clause in [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]] {
            assert!(the_context.add_clause(clause).is_ok());
        }

        // -2 is decided and conflicts, 2 is asserted at the top level and conflicts without a decision.
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.counters.decisions, 1);
        assert_eq!(the_context.counters.conflicts, 2);
        assert_eq!(the_context.counters.learned, 1);
        assert_eq!(the_context.counters.implications, 1);
        assert_eq!(the_context.clause_db.addition_count(), 1);
    }

    #[test]
    fn zero_time_limit() {
        let mut config = Config::default();
        config.time_limit = Some(std::time::Duration::ZERO);
        let mut the_context = Context::from_config(config);
        assert!(the_context.add_clause([1, 2]).is_ok());

        // Some time passes before the limit is checked, though a solve may end before any is measured.
        let report = the_context.solve();
        assert!(matches!(report, Ok(Report::Unknown) | Ok(Report::Satisfiable)));
    }
}

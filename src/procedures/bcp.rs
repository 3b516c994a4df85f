/*!
A context method for boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates a literal being made true.

Each clause watching the negation of the literal, which has just been made false, is examined:
- If the clause is satisfied, nothing need happen, though a watch is moved from the false literal to the true literal if one of the watched literals is not true.
- If the clause is unit, the remaining literal is made true and queued for propagation in turn.
- If at least two literals are without a value, the watches move to the first two such literals.
- If every literal is false, the clause is returned as a conflict.

The queued literals are worked through as a stack, until the stack is empty or some conflict is found.
On a conflict, any literals which remain on the stack are left on the trail though not propagated, and it is for the caller to undo the trail past these.

# Complications

The list of clauses watching the false literal is [taken](crate::db::watches::Watches::take) from the watch database while it is examined, and restored after.
As a watch only ever moves to a literal which is not false, no watch moves to the taken list.
Though, a watch may move *from* the taken list, in which case the key is removed from the taken list directly and the following key is examined at the same index.

# Example

bcp is a mutating method, and a typical application will match against the result of the mutation.
For example, a conflict may lead to conflict analysis and no conflict may lead to a decision being made.

```rust,ignore
match self.bcp(literal) {
    Err(err::BCPError::Conflict(key)) => {
        self.bump_on_conflict(key)?;
        ...
    }
    ...
    Ok(()) => {
        let decision = self.decide()?;
        ...
    }
}
```
*/

use crate::{
    context::GenericContext,
    db::{clause::ClauseStatus, ClauseKey},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// # Soundness
    /// `literal` must be on the trail.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let mut work_list = vec![literal];

        while let Some(valued) = work_list.pop() {
            let falsified = valued.negate();
            let mut list = self.watches.take(falsified);

            let result = self.bcp_list(falsified, &mut list, &mut work_list);
            self.watches.restore(falsified, list);
            result?;
        }

        Ok(())
    }

    /// Examines each clause of `list`, the clauses watching `falsified`.
    fn bcp_list(
        &mut self,
        falsified: CLiteral,
        list: &mut Vec<ClauseKey>,
        work_list: &mut Vec<CLiteral>,
    ) -> Result<(), err::BCPError> {
        let mut index = 0;

        while index < list.len() {
            let key = list[index];

            let Ok(clause) = self.clause_db.get_mut(key) else {
                log::error!(target: targets::PROPAGATION, "Missing clause {key}");
                return Err(err::BCPError::CorruptWatch);
            };

            let old_pair = match clause.watched() {
                Some(pair) if pair.contains(&falsified) => pair,
                _ => {
                    log::error!(target: targets::PROPAGATION, "{key} does not watch {falsified}");
                    return Err(err::BCPError::CorruptWatch);
                }
            };

            let new_pair = match clause.status(&self.trail) {
                ClauseStatus::Witnessed => {
                    index += 1;
                    continue;
                }

                ClauseStatus::Satisfied(literal) => replace(old_pair, falsified, literal),

                ClauseStatus::Unit(literal) => {
                    log::trace!(target: targets::PROPAGATION, "{literal} from {key}");
                    self.trail.push(literal);
                    work_list.push(literal);

                    if old_pair.contains(&literal) {
                        index += 1;
                        continue;
                    }
                    replace(old_pair, falsified, literal)
                }

                ClauseStatus::Unresolved(a, b) => [a, b],

                ClauseStatus::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Conflict at {key}");
                    return Err(err::BCPError::Conflict(key));
                }
            };

            clause.set_watched(new_pair);

            let mut falsified_dropped = false;
            for old_literal in old_pair {
                if new_pair.contains(&old_literal) {
                    continue;
                }

                if old_literal == falsified {
                    list.swap_remove(index);
                    falsified_dropped = true;
                } else if self.watches.unwatch(old_literal, key).is_err() {
                    log::error!(target: targets::PROPAGATION, "{key} missing from the list of {old_literal}");
                    return Err(err::BCPError::CorruptWatch);
                }
            }

            for new_literal in new_pair {
                if !old_pair.contains(&new_literal) {
                    self.watches.watch(new_literal, key);
                }
            }

            if !falsified_dropped {
                index += 1;
            }
        }

        Ok(())
    }
}

/// The pair with `from` replaced by `to`.
fn replace(pair: [CLiteral; 2], from: CLiteral, to: CLiteral) -> [CLiteral; 2] {
    match pair {
        [a, b] if a == from => [to, b],
        [a, _] => [a, to],
    }
}

/*!
Methods for choosing the value of an atom.

# Overview

A decision is made by activity alone: of the literals whose atom has no value on the trail, the literal with the highest [activity](crate::db::activity) is chosen.
A tie is settled in favour of the lowest literal, so decisions are deterministic.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Activity on conflict

After each conflict the activity of each literal in the conflicting clause is [bumped](GenericContext::bump_on_conflict), and then the activity of every literal [decays](GenericContext::decay_activity).

```rust,ignore
self.bump_on_conflict(key)?;
self.decay_activity();
```
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The most active literal of an atom without a value.
    ///
    /// As a solve checks for a complete valuation before each decision, an error is an internal fault.
    pub fn decide(&self) -> Result<CLiteral, err::DecisionError> {
        match self.activity.most_active_unvalued(&self.trail, self.atom_count) {
            Some(literal) => {
                log::trace!(target: targets::DECISION, "Decision {literal}");
                Ok(literal)
            }
            None => Err(err::DecisionError::NoUnassignedAtom),
        }
    }

    /// Bumps the activity of each literal in the clause of `key`.
    pub fn bump_on_conflict(&mut self, key: ClauseKey) -> Result<(), ErrorKind> {
        let clause = self.clause_db.get(key)?;
        self.activity
            .bump(clause.literals().iter(), self.config.activity_bump.value);
        Ok(())
    }

    /// Decays the activity of every literal.
    pub fn decay_activity(&mut self) {
        self.activity.decay(self.config.activity_decay.value);
    }
}

//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump undoes the most recent decision, together with every literal placed on the trail after the decision.
//! The negation of the decision is returned, to be asserted in place of the decision.
//!
//! The clause [learnt](crate::procedures::analysis) from the conflict is the negation of each decision, so after a backjump every literal of the clause other than the negation of the undone decision is false, and the clause asserts the returned literal.
//!
//! If no decision has been made, there is nothing to undo, and the conflict holds independent of any decision.
//! So, the formula is unsatisfiable.
//!
//! # Implications
//!
//! Each backjump adds the count of literals on the trail which are not decisions to the [implications](crate::context::Counters::implications) counter, whether or not a decision is found.
//!
//! # Example
//!
//! ```rust,ignore
//! match self.backjump() {
//!     Ok(literal) => self.trail.push(literal),
//!     Err(err::BackjumpError::NoDecision) => { /* unsatisfiable */ }
//! }
//! ```

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Undoes the most recent decision, returning the negation of the decision.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self) -> Result<CLiteral, err::BackjumpError> {
        self.counters.implications += self.trail.len() - self.trail.decision_count();

        let Some((position, decision)) = self.trail.pop_decision() else {
            log::trace!(target: targets::BACKJUMP, "No decision to undo");
            return Err(err::BackjumpError::NoDecision);
        };

        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {position}", self.trail.len());
        self.trail.truncate(position);

        Ok(decision.negate())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, types::err};

    #[test]
    fn backjump_undoes_the_last_decision() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2, 3, 4]).is_ok());
        assert!(the_context.bootstrap().is_ok());

        the_context.trail.push_decision(-1);
        the_context.trail.push(4);
        the_context.trail.push_decision(2);
        the_context.trail.push(-3);

        assert_eq!(the_context.backjump(), Ok(-2));
        assert_eq!(the_context.trail.literals(), &[-1, 4]);
        assert_eq!(the_context.trail.decision_count(), 1);
        assert_eq!(the_context.counters.implications, 2);

        assert_eq!(the_context.backjump(), Ok(1));
        assert!(the_context.trail.is_empty());
        assert_eq!(the_context.counters.implications, 3);

        assert_eq!(
            the_context.backjump(),
            Err(err::BackjumpError::NoDecision)
        );
    }
}

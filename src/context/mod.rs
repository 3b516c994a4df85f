/*!
The context, to which a formula is added and within which a solve takes place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, which is used only by [restarts](crate::procedures::restart).
[from_config](Context::from_config) is implemented for a context rather than a generic context, to avoid requiring a source of randomness to be supplied alongside a config.

A context moves through the states of [ContextState]:
- Clauses may be added while in the [Input](ContextState::Input) state, and to a context already known to be [Unsatisfiable](ContextState::Unsatisfiable).
- A call to [solve](GenericContext::solve) moves the context to [Solving](ContextState::Solving), and from there to [Satisfiable](ContextState::Satisfiable) or [Unsatisfiable](ContextState::Unsatisfiable).
- A solve interrupted by a callback or time limit remains [Solving](ContextState::Solving), and may be resumed by a further call to [solve](GenericContext::solve).

# Example
```rust
# use otter_pup::context::Context;
# use otter_pup::config::Config;
# use otter_pup::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1]).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.valuation(), vec![-1, 2]);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve has begun, and the consistency of the formula is unknown.
    Solving,

    /// The formula is known to be consistent, with a complete valuation on the trail.
    Satisfiable,

    /// The formula is known to be inconsistent.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

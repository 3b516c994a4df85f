use crate::{
    config::Config,
    db::{activity::ActivityDB, clause::ClauseDB, trail::Trail, watches::Watches},
    procedures::restart::RestartPolicy,
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

use super::{
    callbacks::{CallbackProgress, CallbackTerminate},
    ContextState, Counters,
};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use otter_pup::context::GenericContext;
/// # use otter_pup::generic::MinimalPCG32;
/// # use otter_pup::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail, and stack of decisions.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// Watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The activity of each literal.
    /// See [db::activity](crate::db::activity) for details.
    pub activity: ActivityDB,

    /// The trail immediately after the initial propagation of a solve, and so the trail after any restart.
    pub baseline: Vec<CLiteral>,

    /// The current state of the restart policy.
    pub restart_policy: RestartPolicy,

    /// The count of atoms in the context, and so the largest atom.
    pub(crate) atom_count: Atom,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Terminates a solve, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    /// Observes the progress of a solve.
    pub(super) callback_progress: Option<Box<CallbackProgress>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from some configuration and a source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            restart_policy: RestartPolicy::from_config(&config),
            config,

            counters: Counters::default(),

            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            watches: Watches::default(),
            activity: ActivityDB::default(),
            baseline: Vec::default(),

            atom_count: 0,

            state: ContextState::Input,
            rng,

            callback_terminate: None,
            callback_progress: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The count of atoms in the context.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The literals of the trail, ordered by atom.
    ///
    /// After a satisfiable solve, this is a model of the formula with exactly one literal for each atom.
    pub fn valuation(&self) -> Vec<CLiteral> {
        let mut valuation = self.trail.literals().to_vec();
        valuation.sort_unstable_by_key(|literal| literal.atom());
        valuation
    }

    /// The model found by a solve, or an error if the solve did not end with a model.
    pub fn model(&self) -> Result<Vec<CLiteral>, ErrorKind> {
        match self.state {
            ContextState::Satisfiable => Ok(self.valuation()),
            _ => Err(ErrorKind::InvalidState),
        }
    }
}

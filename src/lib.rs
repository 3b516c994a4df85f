//! A small library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! otter_pup is a conflict-driven clause-learning solver kept deliberately small, so that each part of a solve may be read in a sitting.
//! The search is the familiar loop of decisions, propagation, conflicts, learning, and backjumps, together with randomised restarts.
//! Conflict analysis is intentionally simple: the clause learnt from a conflict is the negation of every decision made, rather than a clause found by resolution to some unique implication point.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built with a [configuration](config), and clauses may be added through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - A formula is stored in a [clause database](db::clause), indexed by [keys](db::ClauseKey).
//! - A valuation is stored on a [trail](db::trail), in the order literals were valued, alongside the positions of decisions.
//! - Clauses which may be of interest after a literal is valued are found in the [watch database](db::watches).
//! - The preference for literals to decide on is stored in the [activity database](db::activity).
//!
//! The [procedures] mutate these databases, and the high-level [solve procedure](crate::procedures::solve) is a good place to start.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use otter_pup::context::Context;
//! # use otter_pup::config::Config;
//! # use otter_pup::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Build a formula programatically and verify the model found.
//!
//! ```rust
//! # use otter_pup::context::Context;
//! # use otter_pup::config::Config;
//! # use otter_pup::reports::Report;
//! # use otter_pup::structures::valuation::verify;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let formula = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3]];
//! for clause in &formula {
//!     assert!(the_context.add_clause(clause).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert!(verify(&the_context.valuation(), &formula));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library, though the binary installs one when built with the `log` feature.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

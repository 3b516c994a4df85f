/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

In addition, [read_dimacs](crate::context::GenericContext::read_dimacs) adds each clause of a formula in the DIMACS format.

Atoms need not be created before use, as adding a clause ensures the context has each atom of the clause.
Still, a fresh atom is always one more than the largest atom in the context, so the atoms of a context are always 1 to the [atom count](crate::context::GenericContext::atom_count).

When a clause is added:
- Duplicate literals are removed, keeping the first instance of each.
- A clause containing some literal and its negation is a tautology, and is not added.
- An empty clause is not added, and the context is noted to be unsatisfiable.

# Examples

```rust
# use otter_pup::builder::ClauseOk;
# use otter_pup::context::Context;
# use otter_pup::config::Config;
# use otter_pup::reports::Report;
# use otter_pup::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = vec![CLiteral::new(p, true), CLiteral::new(q, false)];
let clause_b = vec![CLiteral::new(p, false), CLiteral::new(q, true), CLiteral::new(q, true)];
let clause_c = vec![CLiteral::new(q, false), CLiteral::new(q, true)];

assert_eq!(the_context.add_clause(clause_a), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(clause_b), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(clause_c), Ok(ClauseOk::Tautology));

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{ContextState, GenericContext},
    db::clause::ClauseSource,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A fresh atom, one more than the largest atom in the context.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        self.input_permitted()?;

        if self.atom_count >= ATOM_MAX {
            return Err(err::BuildError::AtomsExhausted.into());
        }

        let atom = self.atom_count + 1;
        self.ensure_atoms(atom);
        Ok(atom)
    }

    /// Ensures each atom up to and including `atom` is part of the context.
    pub fn ensure_atoms(&mut self, atom: Atom) {
        if atom > self.atom_count {
            self.atom_count = atom;
            self.trail.ensure_atoms(atom);
            self.watches.ensure_atoms(atom);
            self.activity.ensure_atoms(atom);
        }
    }

    /// Adds a clause to the context.
    ///
    /// For details, see [builder](crate::builder).
    pub fn add_clause(&mut self, clause: impl AsRef<[CLiteral]>) -> Result<ClauseOk, ErrorKind> {
        self.input_permitted()?;

        let mut the_clause: CClause = Vec::with_capacity(clause.as_ref().len());
        let mut max_atom = 0;

        for &literal in clause.as_ref() {
            if literal == 0 {
                return Err(err::BuildError::ZeroLiteral.into());
            }
            if literal.atom() > ATOM_MAX {
                return Err(err::BuildError::AtomsExhausted.into());
            }
            if !the_clause.contains(&literal) {
                max_atom = std::cmp::max(max_atom, literal.atom());
                the_clause.push(literal);
            }
        }

        if the_clause.is_tautology() {
            log::trace!(target: targets::CLAUSE_DB, "Tautology skipped: {}", the_clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        self.ensure_atoms(max_atom);

        match self.clause_db.store(the_clause, ClauseSource::Original) {
            Ok(_) => Ok(ClauseOk::Added),

            Err(err::ClauseDBError::EmptyClause) => {
                log::info!(target: targets::CLAUSE_DB, "Empty clause added");
                self.state = ContextState::Unsatisfiable;
                Err(err::ClauseDBError::EmptyClause.into())
            }

            Err(e) => Err(e.into()),
        }
    }

    /// Clauses may be added before a solve begins, and to a formula known to be unsatisfiable.
    fn input_permitted(&self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Input | ContextState::Unsatisfiable => Ok(()),
            ContextState::Solving | ContextState::Satisfiable => {
                Err(err::BuildError::SolveStarted.into())
            }
        }
    }
}

#![allow(dead_code)]

use std::{fs::File, io::BufReader, path::Path};

use rand::Rng;

use otter_pup::{
    config::Config,
    context::Context,
    generic::MinimalPCG32,
    reports::Report,
    structures::{clause::CClause, literal::CLiteral},
    types::err,
};

pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<(), err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    context.read_dimacs(BufReader::new(&file))?;
    Ok(())
}

/// The report of a solve on the formula at `path`, together with the context of the solve.
pub fn formula_report(path: &Path, config: &Config) -> (Report, Context) {
    let mut ctx = Context::from_config(config.clone());
    match load_dimacs(&mut ctx, path) {
        Ok(()) => {}
        Err(err::ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause)) => {
            return (Report::Unsatisfiable, ctx);
        }
        Err(e) => panic!("c Error loading {path:?}: {e:?}"),
    };

    match ctx.solve() {
        Ok(report) => (report, ctx),
        Err(e) => panic!("{e:?}"),
    }
}

/// A context with each clause of `formula` added.
pub fn context_from(formula: &[CClause], config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    for clause in formula {
        assert!(the_context.add_clause(clause).is_ok());
    }
    the_context
}

/// The pigeonhole formula, placing `pigeons` pigeons in `holes` holes.
///
/// The atom for pigeon `i` in hole `j` is `i * holes + j + 1`.
pub fn pigeonhole(pigeons: usize, holes: usize) -> Vec<CClause> {
    let atom = |pigeon: usize, hole: usize| (pigeon * holes + hole + 1) as CLiteral;
    let mut formula = Vec::default();

    for pigeon in 0..pigeons {
        formula.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }

    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                formula.push(vec![-atom(a, hole), -atom(b, hole)]);
            }
        }
    }

    formula
}

/// A random formula of `clause_count` clauses of three distinct atoms from 1 to `atom_count`.
pub fn random_three_sat(seed: u64, atom_count: u32, clause_count: usize) -> Vec<CClause> {
    let mut rng = MinimalPCG32::from_u64_seed(seed);
    let mut formula = Vec::with_capacity(clause_count);

    while formula.len() < clause_count {
        let mut clause: CClause = Vec::with_capacity(3);
        while clause.len() < 3 {
            let atom = rng.gen_range(1..=atom_count) as CLiteral;
            if clause.iter().any(|literal: &CLiteral| literal.abs() == atom) {
                continue;
            }
            match rng.gen_bool(0.5) {
                true => clause.push(atom),
                false => clause.push(-atom),
            }
        }
        formula.push(clause);
    }

    formula
}

/// Satisfiability by an exhaustive search of valuations, for small formulas.
pub fn brute_force_satisfiable(formula: &[CClause], atom_count: u32) -> bool {
    (0..(1_u64 << atom_count)).any(|valuation| {
        formula.iter().all(|clause| {
            clause.iter().any(|&literal| {
                let value = valuation & (1 << (literal.unsigned_abs() - 1)) != 0;
                value == literal.is_positive()
            })
        })
    })
}

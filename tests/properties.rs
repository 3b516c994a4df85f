mod common;

use otter_pup::{
    config::Config,
    context::{Context, ContextState},
    db::{clause::ClauseStatus, ClauseKey},
    reports::Report,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
        valuation::{is_total, verify},
    },
};

use common::{brute_force_satisfiable, context_from, pigeonhole, random_three_sat};

/// Each watched clause is in the list of exactly its two watched literals, each list holds only clauses watching the literal, and each unwatched clause is settled by the baseline.
fn check_watches(context: &Context) {
    let mut watched_clauses = 0;

    for clause in context.clause_db.all_clauses() {
        let key = clause.key();
        match clause.watched() {
            Some([a, b]) => {
                watched_clauses += 1;
                assert_ne!(a, b);
                assert!(clause.literals().contains(&a));
                assert!(clause.literals().contains(&b));
                for literal in [a, b] {
                    let count = context
                        .watches
                        .watchers(literal)
                        .iter()
                        .filter(|&&watcher| watcher == key)
                        .count();
                    assert_eq!(count, 1, "{key} in the list of {literal}");
                }
            }

            None => {
                assert!(
                    clause.literals().len() < 2
                        || clause
                            .literals()
                            .iter()
                            .any(|literal| context.baseline.contains(literal)),
                    "{key} is neither watched nor settled"
                );
            }
        }
    }

    assert_eq!(context.watches.watch_count(), 2 * watched_clauses);

    for atom in 1..=context.atom_count() {
        for literal in [CLiteral::new(atom, true), CLiteral::new(atom, false)] {
            for &key in context.watches.watchers(literal) {
                let clause = context.clause_db.get(key).expect("watched clause");
                assert!(clause.watched().is_some_and(|pair| pair.contains(&literal)));
            }
        }
    }
}

/// No atom appears on the trail twice.
fn check_trail(context: &Context) {
    let mut atoms = context
        .trail
        .literals()
        .iter()
        .map(|literal| literal.atom())
        .collect::<Vec<_>>();
    atoms.sort_unstable();
    atoms.dedup();
    assert_eq!(atoms.len(), context.trail.len());
}

/// Solves the formula, interrupting the solve before each of the first `interruptions` decisions to check the databases.
fn interrupted_solve(formula: &[CClause], config: Config, interruptions: usize) -> Context {
    let mut the_context = context_from(formula, config);

    the_context.set_callback_terminate(Box::new(|| true));

    let mut clause_count = the_context.clause_db.len();

    for _ in 0..interruptions {
        match the_context.solve() {
            Ok(Report::Unknown) => {
                assert_eq!(the_context.state, ContextState::Solving);
                check_watches(&the_context);
                check_trail(&the_context);
                assert!(the_context.trail.literals().starts_with(&the_context.baseline));

                assert!(the_context.clause_db.len() >= clause_count);
                clause_count = the_context.clause_db.len();

                // Propagation is complete at each decision.
                for clause in the_context.clause_db.all_clauses() {
                    if clause.watched().is_some() {
                        assert!(!matches!(
                            clause.status(&the_context.trail),
                            ClauseStatus::Conflict
                        ));
                    }
                }
            }
            Ok(_) => return the_context,
            Err(e) => panic!("{e:?}"),
        }

        // One decision before the next interruption.
        let mut calls = 0;
        the_context.set_callback_terminate(Box::new(move || {
            calls += 1;
            calls > 1
        }));
    }

    the_context.set_callback_terminate(Box::new(|| false));
    assert!(the_context.solve().is_ok());
    the_context
}

mod properties {
    use super::*;

    #[test]
    fn soundness_and_totality_on_random_formulas() {
        for seed in 0..40 {
            let formula = random_three_sat(seed, 10, 43);
            let mut the_context = context_from(&formula, Config::default());

            let report = the_context.solve().expect("solve");
            let satisfiable = brute_force_satisfiable(&formula, 10);

            match report {
                Report::Satisfiable => {
                    assert!(satisfiable, "seed {seed}");
                    let valuation = the_context.valuation();
                    assert!(verify(&valuation, &formula), "seed {seed}");
                    assert!(
                        is_total(&valuation, the_context.atom_count() as usize),
                        "seed {seed}"
                    );
                }
                Report::Unsatisfiable => assert!(!satisfiable, "seed {seed}"),
                Report::Unknown => panic!("seed {seed} unknown"),
            }
        }
    }

    #[test]
    fn soundness_without_restarts() {
        let mut config = Config::default();
        config.restart.value = false;

        for seed in 100..120 {
            let formula = random_three_sat(seed, 8, 36);
            let mut the_context = context_from(&formula, config.clone());

            let report = the_context.solve().expect("solve");
            assert_eq!(
                report == Report::Satisfiable,
                brute_force_satisfiable(&formula, 8),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn invariants_through_a_solve() {
        for seed in 0..10 {
            let formula = random_three_sat(seed, 12, 52);
            let the_context = interrupted_solve(&formula, Config::default(), 64);
            check_watches(&the_context);
            check_trail(&the_context);
        }

        let the_context = interrupted_solve(&pigeonhole(4, 3), Config::default(), 64);
        assert_eq!(the_context.report(), Report::Unsatisfiable);
    }

    #[test]
    fn restart_returns_to_the_baseline() {
        let mut config = Config::default();
        config.restart_probability.value = 1.0;

        let mut formula = pigeonhole(4, 3);
        formula.push(vec![13]);
        formula.push(vec![-13, 14]);
        let mut the_context = context_from(&formula, config);
        assert!(the_context.bootstrap().is_ok());
        assert_eq!(the_context.baseline, vec![13, 14]);

        for _ in 0..3 {
            let Ok(decision) = the_context.decide() else {
                panic!("no decision")
            };
            the_context.trail.push_decision(decision);
            if the_context.bcp(decision).is_err() {
                break;
            }
        }
        assert!(the_context.trail.len() > the_context.baseline.len());

        assert!(the_context.maybe_restart());
        assert_eq!(the_context.trail.literals(), the_context.baseline.as_slice());
        assert_eq!(the_context.trail.decision_count(), 0);
        check_watches(&the_context);
    }

    #[test]
    fn backjump_correctness() {
        let formula = random_three_sat(7, 20, 40);
        let mut the_context = context_from(&formula, Config::default());
        assert!(the_context.bootstrap().is_ok());

        let mut decisions = 0;
        while decisions < 4 {
            let Ok(decision) = the_context.decide() else {
                break;
            };
            the_context.trail.push_decision(decision);
            decisions += 1;
            if the_context.bcp(decision).is_err() {
                break;
            }
        }
        assert!(the_context.trail.decision_count() >= 2);

        let positions = the_context.trail.decision_indicies().to_vec();
        let last_position = positions[positions.len() - 1];
        let last_decision = the_context.trail.literals()[last_position];

        let asserted = the_context.backjump().expect("decision");
        assert_eq!(the_context.trail.len(), last_position);
        assert_eq!(asserted, last_decision.negate());
        assert_eq!(
            the_context.trail.decision_indicies(),
            &positions[..positions.len() - 1]
        );
    }

    #[test]
    fn learnt_clauses_are_consequences() {
        let formula = pigeonhole(4, 3);
        let mut the_context = context_from(&formula, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

        // Each learnt clause negates decisions, and so is the negation of a conjunction of literals.
        for clause in the_context.clause_db.all_clauses() {
            if clause.key() >= ClauseKey(formula.len() as u32) {
                let mut with_clause = formula.clone();
                with_clause.extend(
                    clause
                        .literals()
                        .iter()
                        .map(|&literal| vec![literal.negate()]),
                );
                assert!(!brute_force_satisfiable(&with_clause, 12));
            }
        }
    }
}

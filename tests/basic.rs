mod common;

use otter_pup::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{
        clause::CClause,
        valuation::{is_total, verify},
    },
};

use common::{context_from, pigeonhole};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = context_from(&[vec![1]], Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.trail.literals(), &[1]);
        assert_eq!(the_context.counters.decisions, 0);
    }

    #[test]
    fn complementary_units() {
        let mut the_context = context_from(&[vec![1], vec![-1]], Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.counters.decisions, 0);
        assert_eq!(the_context.counters.learned, 0);
    }

    #[test]
    fn conflict() {
        let formula = vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
        let mut the_context = context_from(&formula, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert!(the_context.counters.conflicts >= 1);
    }

    #[test]
    fn exactly_one_of_three() {
        let formula = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3]];
        let mut the_context = context_from(&formula, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let valuation = the_context.valuation();
        assert!(verify(&valuation, &formula));
        assert!(is_total(&valuation, 3));
        assert_eq!(valuation.iter().filter(|l| l.is_positive()).count(), 1);
    }

    #[test]
    fn pigeonhole_requires_learning() {
        let formula = pigeonhole(4, 3);
        let mut the_context = context_from(&formula, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert!(the_context.counters.learned >= 1);
        assert!(the_context.counters.decisions >= 2);
    }

    #[test]
    fn pigeons_with_room() {
        let formula = pigeonhole(3, 3);
        let mut the_context = context_from(&formula, Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(verify(&the_context.valuation(), &formula));
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(the_context.valuation().is_empty());
    }

    #[test]
    fn empty_clause() {
        let mut the_context = context_from(&[vec![1, 2]], Config::default());
        let empty: CClause = Vec::default();
        assert!(the_context.add_clause(empty).is_err());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn duplicates() {
        let mut the_context = context_from(&[vec![1, 2, 2]], Config::default());
        let database = the_context.clause_db.all_clauses().collect::<Vec<_>>();
        assert_eq!(database.len(), 1);
        assert_eq!(database[0].literals(), &[1, 2]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn tautology_skip() {
        let mut the_context = context_from(&[vec![1, -1, 2], vec![-2]], Config::default());
        assert_eq!(the_context.clause_db.len(), 1);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(the_context.valuation().contains(&-2));
    }

    #[test]
    fn unused_atoms_are_valued() {
        let mut the_context = Context::from_config(Config::default());
        the_context.ensure_atoms(4);
        assert!(the_context.add_clause([2, 3]).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(is_total(&the_context.valuation(), 4));
    }

    #[test]
    fn without_restarts() {
        let mut config = Config::default();
        config.restart.value = false;

        let formula = pigeonhole(5, 4);
        let mut the_context = context_from(&formula, config);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.counters.restarts, 0);
    }

    #[test]
    fn seeds_agree_on_the_report() {
        let formula = pigeonhole(5, 4);
        for seed in [0, 1, 73, 1024] {
            let mut config = Config::default();
            config.seed.value = seed;
            let mut the_context = context_from(&formula, config);
            assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        }
    }
}

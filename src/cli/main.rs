#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use otter_pup::{
    context::Context,
    reports::Report,
    structures::{
        literal::CLiteral,
        valuation::{is_total, verify},
    },
    types::err::{ClauseDBError, ErrorKind},
};

mod args;
mod output;
mod read;
mod window;

use args::Args;
use read::ReadError;

fn main() {
    #[cfg(feature = "log")]
    init_logger();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(config);

    match read::read_dimacs(&args.formula_file, &mut the_context) {
        Ok(_) => {}

        // The context notes the formula is unsatisfiable.
        Err(ReadError::ParseError(ErrorKind::ClauseDB(ClauseDBError::EmptyClause))) => {
            println!("c The formula contains an empty clause.");
        }

        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    }

    if args.progress {
        window::install(&mut the_context);
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    if args.progress {
        println!();
    }

    if args.stats {
        output::print_stats(&the_context);
    }

    match report {
        Report::Satisfiable => {
            let valuation = the_context.valuation();

            let original_clauses = the_context.clause_db.original_clauses().collect::<Vec<_>>();
            if !verify(&valuation, &original_clauses)
                || !is_total(&valuation, the_context.atom_count() as usize)
            {
                println!("c The model found does not satisfy the formula.");
                std::process::exit(2);
            }

            println!("s SATISFIABLE");

            if args.model {
                println!("{}", output::model_line(&valuation));
            }

            if let Some(path) = &args.solution {
                write_solution_or_exit(path, &valuation);
            }

            std::process::exit(10)
        }

        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20)
        }

        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(0)
        }
    }
}

fn write_solution_or_exit(path: &std::path::Path, valuation: &[CLiteral]) {
    match output::write_solution(path, valuation) {
        Ok(()) => println!("c Solution written to {path:?}"),
        Err(e) => {
            println!("c Failed to write solution: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "log")]
fn init_logger() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} [{t}] {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Info));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                println!("c Failed to initialise logs: {e}");
            }
        }
        Err(e) => println!("c Failed to configure logs: {e}"),
    }
}

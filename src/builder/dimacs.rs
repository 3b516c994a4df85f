use std::io::BufRead;

use crate::{
    context::GenericContext,
    structures::{atom::ATOM_MAX, clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// Information about a formula read from some DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem specification, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem specification, if any.
    pub expected_clauses: Option<usize>,

    /// The count of atoms in the context after reading.
    pub added_atoms: usize,

    /// The count of clauses read, including any tautologies skipped.
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS file into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// - Lines beginning with `c` are comments.
    /// - The problem specification `p cnf <atoms> <clauses>`, if present, bounds the atoms and clauses which follow.
    /// - A clause is ended by `0`, and may span several lines.
    /// - A line beginning with `%` ends the formula.
    ///
    /// ```rust
    /// # use otter_pup::context::Context;
    /// # use otter_pup::config::Config;
    /// # use otter_pup::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2
    ///             0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;
        let mut formula_started = false;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    if formula_started || info.expected_atoms.is_some() {
                        return Err(err::ParseError::MisplacedProblem(line_counter).into());
                    }

                    let (atoms, clauses) = parse_problem(&buffer)?;
                    let atom_bound = match u32::try_from(atoms) {
                        Ok(bound) if bound <= ATOM_MAX => bound,
                        _ => return Err(err::BuildError::AtomsExhausted.into()),
                    };
                    self.ensure_atoms(atom_bound);

                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => {
                    formula_started = true;

                    for item in buffer.split_whitespace() {
                        let literal = match item.parse::<CLiteral>() {
                            Ok(literal) => literal,
                            Err(_) => return Err(err::ParseError::Line(line_counter).into()),
                        };

                        match literal {
                            0 => {
                                info.added_clauses += 1;
                                if info.expected_clauses.is_some_and(|m| info.added_clauses > m) {
                                    return Err(err::ParseError::ClauseCount(line_counter).into());
                                }

                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                            }

                            _ => {
                                if info
                                    .expected_atoms
                                    .is_some_and(|n| literal.unsigned_abs() as usize > n)
                                {
                                    return Err(err::ParseError::IllegalAtom(line_counter).into());
                                }
                                clause_buffer.push(literal);
                            }
                        }
                    }
                }
            }
        }

        // A final clause without a terminating 0.
        if !clause_buffer.is_empty() {
            info.added_clauses += 1;
            if info.expected_clauses.is_some_and(|m| info.added_clauses > m) {
                return Err(err::ParseError::ClauseCount(line_counter).into());
            }
            self.add_clause(clause_buffer)?;
        }

        info.added_atoms = self.atom_count() as usize;

        Ok(info)
    }
}

/// The counts of atoms and clauses in a line of the form `p cnf <atoms> <clauses>`.
fn parse_problem(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification.into()),
    }

    let mut count = || -> Result<usize, ErrorKind> {
        match problem_details.next().map(|string| string.parse::<usize>()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification.into()),
        }
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}

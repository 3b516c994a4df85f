use std::{ffi::OsString, path::Path};

use otter_pup::{builder::ParserInfo, context::Context, types::err::ErrorKind};

pub enum ReadError {
    NoExtension,
    ParseError(ErrorKind),
    UnknownExtension(OsString),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoExtension => write!(f, "The file does not have an extension."),
            Self::ParseError(err) => write!(f, "Parse error: '{err:?}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::FailedToOpen => write!(f, "Failed to open CNF file."),
        }
    }
}

/// Reads the DIMACS file at `path` to `context` and writes a report.
pub fn read_dimacs(path: &Path, context: &mut Context) -> Result<ParserInfo, ReadError> {
    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            context.read_dimacs(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if extension == "cnf" => {
            context.read_dimacs(std::io::BufReader::new(&file))
        }

        Some(unknown) => return Err(ReadError::UnknownExtension(unknown.to_owned())),

        None => return Err(ReadError::NoExtension),
    };

    match parse_report {
        Ok(info) => {
            match info.expected_atoms {
                Some(count) => println!("c Expected atoms:   {count}"),
                None => println!("c No preamble was found."),
            }

            println!("c Atom count:       {}", info.added_atoms);

            if let Some(count) = info.expected_clauses {
                println!("c Expected clauses: {count}")
            }

            println!("c Clause count:     {}", info.added_clauses);

            Ok(info)
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use otter_pup::{context::Context, structures::literal::CLiteral};

/// Writes a valuation to the file at `path`, one literal per line.
pub fn write_solution(path: &Path, valuation: &[CLiteral]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for literal in valuation {
        writeln!(writer, "{literal}")?;
    }
    writer.flush()
}

/// Writes the counters of a context as comments.
pub fn print_stats(context: &Context) {
    let counters = &context.counters;
    println!("c Restarts:     {}", counters.restarts);
    println!("c Learned:      {}", counters.learned);
    println!("c Decisions:    {}", counters.decisions);
    println!("c Implications: {}", counters.implications);
    println!("c Conflicts:    {}", counters.conflicts);
    println!("c Time:         {:.2?}", counters.time);
}

/// The valuation as a DIMACS `v` line.
pub fn model_line(valuation: &[CLiteral]) -> String {
    let mut line = String::from("v");
    for literal in valuation {
        line.push_str(&format!(" {literal}"));
    }
    line.push_str(" 0");
    line
}

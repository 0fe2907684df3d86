//! BLAST text-report mining
//!
//! BLAST's human-readable report lists, for every query, a section headed
//! `Sequences producing significant alignments:` followed by a blank line
//! and then one description row per hit, best hit first:
//!
//! ```text
//! Sequences producing significant alignments:          (Bits)  Value
//!
//! DNA polymerase III subunit alpha [Escherichia coli]...  331   2e-112
//! DNA polymerase III [Shigella sonnei]...                 329   9e-112
//! ```
//!
//! This module pulls out the best-hit description of every such section —
//! the text before the trailing `...` — and reports the collected names in
//! alphabetical order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Section marker preceding the hit table in a BLAST text report
const ALIGNMENTS_MARKER: &str = "Sequences producing significant alignments:";

/// Extract the best-hit description from every alignments section
///
/// For each marker line, the description row two lines below it (past the
/// blank line) is taken and truncated at the first `...`. Rows that turn out
/// empty are skipped. Names are returned in file order, unsorted.
fn extract_best_hits<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;

    let mut names = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if !line.trim_start().starts_with(ALIGNMENTS_MARKER) {
            continue;
        }
        let Some(first_hit) = lines.get(i + 2) else {
            continue;
        };
        let name = first_hit.trim().split("...").next().unwrap_or("").trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Collect best-hit protein names from a BLAST text report
///
/// Reads the report at `input`, extracts one description per
/// `Sequences producing significant alignments:` section, sorts them
/// alphabetically (duplicates kept), and writes them one per line to
/// `output`. The sorted list is also returned.
///
/// # Example
///
/// ```no_run
/// use bioprep::formats::parse_blast_output;
///
/// # fn main() -> bioprep::Result<()> {
/// let names = parse_blast_output("results.txt", "proteins.txt")?;
/// println!("{} proteins found", names.len());
/// # Ok(())
/// # }
/// ```
pub fn parse_blast_output<I, O>(input: I, output: O) -> Result<Vec<String>>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let mut names = extract_best_hits(BufReader::new(File::open(input)?))?;
    names.sort();
    debug!(count = names.len(), "extracted best-hit protein names");

    let mut writer = BufWriter::new(File::create(output)?);
    for name in &names {
        writer.write_all(name.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(names)
}

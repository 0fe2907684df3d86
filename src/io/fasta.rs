//! FASTA flattening: multiline records to one sequence line each
//!
//! FASTA sequences are conventionally wrapped at 60-80 columns. Some tools
//! want the whole sequence on a single line; this module rewrites a FASTA
//! file accordingly, keeping header lines verbatim and joining the wrapped
//! sequence lines beneath each one.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::FastaRecord;

/// Collect FASTA records, joining wrapped sequence lines
///
/// Lines before the first header are discarded; a header immediately
/// followed by another header yields a record with an empty sequence.
fn read_records<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut header = String::new();
    let mut sequence: Vec<u8> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.starts_with('>') {
            if !header.is_empty() {
                records.push(FastaRecord::new(
                    std::mem::take(&mut header),
                    std::mem::take(&mut sequence),
                ));
            }
            header = line.to_string();
            sequence.clear();
        } else {
            sequence.extend_from_slice(line.as_bytes());
        }
    }

    if !header.is_empty() {
        records.push(FastaRecord::new(header, sequence));
    }

    Ok(records)
}

/// Derive the default output path: input text before the first `.`,
/// suffixed with `_output.fasta`.
fn default_output_path(input: &Path) -> PathBuf {
    let text = input.to_string_lossy();
    let prefix = text.split('.').next().unwrap_or("");
    PathBuf::from(format!("{}_output.fasta", prefix))
}

/// Rewrite a multiline FASTA file with one sequence line per record
///
/// Header lines are carried over verbatim; the wrapped sequence lines under
/// each header are concatenated into a single line. When `output` is `None`
/// the output path is derived from the input name (text before the first
/// `.` plus `_output.fasta`). Returns the path written.
///
/// # Example
///
/// ```no_run
/// use bioprep::io::convert_multiline_to_oneline;
///
/// # fn main() -> bioprep::Result<()> {
/// let written = convert_multiline_to_oneline("genome.fasta", None)?;
/// println!("flattened into {}", written.display());
/// # Ok(())
/// # }
/// ```
pub fn convert_multiline_to_oneline<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    };
    debug!(
        input = %input.display(),
        output = %output.display(),
        "flattening multiline FASTA"
    );

    let records = read_records(BufReader::new(File::open(input)?))?;

    let mut writer = BufWriter::new(File::create(&output)?);
    for record in &records {
        writer.write_all(record.header.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.write_all(&record.sequence)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(output)
}

//! FASTQ reading and writing
//!
//! Records are four-line groups: header, sequence, separator (content
//! ignored), quality. The reader is deliberately lenient about structure —
//! headers are taken verbatim without checking for `@`, and a trailing group
//! of fewer than four lines is dropped silently — but it does insist that
//! sequence and quality lines have equal length, because every downstream
//! quality computation is meaningless otherwise.
//!
//! Writing goes to a fixed `filtered/` subdirectory and never overwrites: an
//! existing output file turns the call into a warning and a no-op, so
//! repeated pipeline runs are at-most-once on the filesystem.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{BioprepError, Result};
use crate::types::{FastqRecord, RecordSet};

/// Fixed output subdirectory used by [`write_fastq`]
pub const OUTPUT_DIR: &str = "filtered";

/// Separator line emitted between sequence and quality, padding included
///
/// Readers discard separator content, so the padding survives round-trips.
const SEPARATOR_LINE: &str = " + ";

/// FASTQ reader yielding one record per four-line group
///
/// # Example
///
/// ```
/// use std::io::{BufReader, Cursor};
/// use bioprep::io::FastqReader;
///
/// # fn main() -> bioprep::Result<()> {
/// let data = b"@read1\nATGC\n+\nIIII\n";
/// let reader = FastqReader::from_reader(BufReader::new(Cursor::new(data)));
///
/// for record in reader {
///     let record = record?;
///     assert_eq!(record.id, "@read1");
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastqReader<R: BufRead> {
    reader: R,
    header: String,
    sequence: String,
    separator: String,
    quality: String,
    line_number: usize,
}

impl FastqReader<BufReader<File>> {
    /// Open a FASTQ file for reading
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> FastqReader<R> {
    /// Create a reader from any buffered source
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            header: String::with_capacity(256),
            sequence: String::with_capacity(256),
            separator: String::with_capacity(8),
            quality: String::with_capacity(256),
            line_number: 0,
        }
    }

    /// Read one four-line record
    ///
    /// Returns `Ok(None)` at end of input. A trailing group of fewer than
    /// four lines is treated as end of input, not as an error.
    fn read_record(&mut self) -> Result<Option<FastqRecord>> {
        self.header.clear();
        self.sequence.clear();
        self.separator.clear();
        self.quality.clear();

        for buffer in [
            &mut self.header,
            &mut self.sequence,
            &mut self.separator,
            &mut self.quality,
        ] {
            if self.reader.read_line(buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
        }

        // Header kept verbatim; the separator line content is discarded
        let id = self.header.trim_end().to_string();
        let sequence = self.sequence.trim_end().as_bytes().to_vec();
        let quality = self.quality.trim_end().as_bytes().to_vec();

        if sequence.len() != quality.len() {
            return Err(BioprepError::InvalidFastqFormat {
                line: self.line_number,
                msg: format!(
                    "Sequence length ({}) != quality length ({})",
                    sequence.len(),
                    quality.len()
                ),
            });
        }

        Ok(Some(FastqRecord { id, sequence, quality }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read a whole FASTQ file into a [`RecordSet`]
///
/// Records appear in file order; a repeated identifier replaces the earlier
/// record (last occurrence wins).
///
/// # Errors
///
/// Fails if the path cannot be opened or a record has mismatched sequence
/// and quality lengths.
pub fn read_fastq<P: AsRef<Path>>(path: P) -> Result<RecordSet> {
    let reader = FastqReader::from_path(path)?;
    let mut records = RecordSet::new();
    for record in reader {
        records.insert(record?);
    }
    Ok(records)
}

/// Write a record set as FASTQ under the fixed [`OUTPUT_DIR`] directory
///
/// Equivalent to [`write_fastq_under`] with `OUTPUT_DIR` as the base
/// directory. Returns the path written, or `None` if the target already
/// existed and the write was skipped.
pub fn write_fastq<P: AsRef<Path>>(records: &RecordSet, output_name: P) -> Result<Option<PathBuf>> {
    write_fastq_under(OUTPUT_DIR, records, output_name)
}

/// Write a record set as FASTQ under an explicit base directory
///
/// The directory is created if absent, and the output path is the join of
/// directory and file name. If the target file already exists the call is a
/// no-op: a warning is logged, the existing file is left untouched, and
/// `Ok(None)` is returned. Each record is serialized as four lines —
/// identifier (verbatim), sequence, the literal ` + ` separator, quality.
pub fn write_fastq_under<D, P>(dir: D, records: &RecordSet, output_name: P) -> Result<Option<PathBuf>>
where
    D: AsRef<Path>,
    P: AsRef<Path>,
{
    fs::create_dir_all(&dir)?;
    let path = dir.as_ref().join(output_name);

    if path.exists() {
        warn!(
            path = %path.display(),
            "output file already exists, leaving it untouched"
        );
        return Ok(None);
    }

    let mut writer = BufWriter::new(File::create(&path)?);
    for record in records {
        writer.write_all(record.id.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.write_all(&record.sequence)?;
        writer.write_all(b"\n")?;
        writer.write_all(SEPARATOR_LINE.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.write_all(&record.quality)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), records = records.len(), "wrote FASTQ output");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_over(data: &[u8]) -> FastqReader<BufReader<Cursor<Vec<u8>>>> {
        FastqReader::from_reader(BufReader::new(Cursor::new(data.to_vec())))
    }

    #[test]
    fn test_parse_valid_record() {
        let mut reader = reader_over(b"@SEQ_ID\nGATTACA\n+\n!!!!!!!\n");
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.id, "@SEQ_ID");
        assert_eq!(record.sequence, b"GATTACA");
        assert_eq!(record.quality, b"!!!!!!!");
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_parse_multiple_records() {
        let reader = reader_over(b"@SEQ1\nGAT\n+\n!!!\n@SEQ2\nTACA\n+\n!!!!\n");
        let records: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "@SEQ1");
        assert_eq!(records[1].id, "@SEQ2");
    }

    #[test]
    fn test_header_kept_verbatim_without_marker() {
        // No '@' convention check; the line is stored as-is
        let mut reader = reader_over(b"SEQ_ID\nGAT\n+\n!!!\n");
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.id, "SEQ_ID");
    }

    #[test]
    fn test_separator_content_ignored() {
        let mut reader = reader_over(b"@r1\nGAT\n+anything at all\n!!!\n");
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.sequence, b"GAT");
    }

    #[test]
    fn test_trailing_partial_group_dropped() {
        // Second group has only two of its four lines
        let reader = reader_over(b"@r1\nGAT\n+\n!!!\n@r2\nACGT\n");
        let records: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "@r1");
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let mut reader = reader_over(b"@r1\nGATTACA\n+\n!!!\n");
        let result = reader.next().unwrap();
        assert!(matches!(
            result,
            Err(BioprepError::InvalidFastqFormat { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let mut reader = reader_over(b"");
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_crlf_trimmed() {
        let mut reader = reader_over(b"@r1\r\nGAT\r\n+\r\n!!!\r\n");
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.id, "@r1");
        assert_eq!(record.sequence, b"GAT");
        assert_eq!(record.quality, b"!!!");
    }

    #[test]
    fn test_read_fastq_missing_file() {
        let result = read_fastq("definitely/not/a/real/path.fastq");
        assert!(matches!(result, Err(BioprepError::Io(_))));
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Any well-formed four-line group parses back to its parts
        #[test]
        fn prop_parse_well_formed(
            id in "@[A-Za-z0-9_]{1,50}",
            seq in "[ACGTN]{1,200}",
        ) {
            let qual = "I".repeat(seq.len());
            let data = format!("{}\n{}\n+\n{}\n", id, seq, qual);

            let mut reader = reader_over(data.as_bytes());
            let record = reader.next().unwrap().unwrap();
            prop_assert_eq!(&record.id, &id);
            prop_assert_eq!(&record.sequence, seq.as_bytes());
            prop_assert_eq!(&record.quality, qual.as_bytes());
        }

        /// Record count equals the number of complete four-line groups
        #[test]
        fn prop_record_count(count in 0usize..20) {
            let mut data = String::new();
            for i in 0..count {
                data.push_str(&format!("@read_{}\nACGT\n+\nIIII\n", i));
            }

            let reader = reader_over(data.as_bytes());
            let records: Vec<_> = reader.collect::<Result<Vec<_>>>().unwrap();
            prop_assert_eq!(records.len(), count);
        }
    }
}

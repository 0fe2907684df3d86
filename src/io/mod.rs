//! File I/O: FASTQ reading and writing, FASTA flattening

mod fasta;
mod fastq;

pub use fasta::convert_multiline_to_oneline;
pub use fastq::{read_fastq, write_fastq, write_fastq_under, FastqReader, OUTPUT_DIR};

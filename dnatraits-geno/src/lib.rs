//! dnatraits-geno: Genotype file ingestion for dnatraits
//!
//! Memory-maps 23andMe-style raw exports and decodes them directly into a
//! `Genome` or `SnpStore`.

pub mod error;
pub mod mapped;
pub mod parser;

pub use error::ParseError;
pub use mapped::MappedFile;
pub use parser::{parse_bytes, parse_file, parse_file_with, ParseOptions, ParseSummary};

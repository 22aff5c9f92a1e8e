//! Parser for 23andMe-style raw genotype exports.
//!
//! One record per line, four tab-separated columns:
//! ```text
//! # rsid	chromosome	position	genotype
//! rs4778241	8	115110000	CC
//! rs1800401	15	28230318	TC
//! rs13328684	1	74792	--
//! ```
//!
//! The file is memory-mapped and decoded in a single pass straight into a
//! [`RecordSink`]; lines are borrowed slices of the mapping and no per-line
//! buffer is allocated. The first malformed line aborts the parse.

use std::path::Path;

use dnatraits_core::{Chromosome, Genotype, RecordSink, Rsid, Snp};
use tracing::{debug, info, warn};

use crate::error::ParseError;
use crate::mapped::MappedFile;

/// Load factor above which a finished parse warns that the store is
/// undersized.
const LOAD_FACTOR_WARN: f64 = 0.9;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Lines starting with this byte are comments.
    pub comment: u8,
    /// Skip records whose id lacks the `rs` prefix (e.g. 23andMe's internal
    /// `i…` ids) instead of rejecting them.
    pub skip_unknown_ids: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comment: b'#',
            skip_unknown_ids: false,
        }
    }
}

/// Facts gathered while scanning a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Records inserted, counting overwrites of a repeated RSID.
    pub records: usize,
    /// Records skipped because of an unknown id.
    pub skipped: usize,
    /// Lines scanned, including comments and blank lines.
    pub lines: usize,
    /// True if a Y-chromosome record had at least one called allele.
    pub y_chromosome: bool,
    /// Lowest RSID seen, 0 if none.
    pub first: Rsid,
    /// Highest RSID seen, 0 if none.
    pub last: Rsid,
}

impl ParseSummary {
    fn observe(&mut self, rsid: Rsid, snp: &Snp) {
        if self.records == 0 {
            self.first = rsid;
            self.last = rsid;
        } else {
            self.first = self.first.min(rsid);
            self.last = self.last.max(rsid);
        }
        self.records += 1;
        if snp.chromosome == Chromosome::Y && snp.genotype.is_called() {
            self.y_chromosome = true;
        }
    }
}

/// Parse `path` into `sink` with default options.
pub fn parse_file<P, S>(path: P, sink: &mut S) -> Result<ParseSummary, ParseError>
where
    P: AsRef<Path>,
    S: RecordSink + ?Sized,
{
    parse_file_with(path, sink, &ParseOptions::default())
}

/// Parse `path` into `sink`.
///
/// On any error after the file is opened, `sink` is cleared so that no
/// record from a rejected file stays queryable.
pub fn parse_file_with<P, S>(
    path: P,
    sink: &mut S,
    options: &ParseOptions,
) -> Result<ParseSummary, ParseError>
where
    P: AsRef<Path>,
    S: RecordSink + ?Sized,
{
    let mapped = MappedFile::open(path)?;
    debug!(path = %mapped.path().display(), bytes = mapped.len(), "parsing genotype file");

    let summary = parse_bytes(mapped.bytes(), sink, options)?;

    info!(
        path = %mapped.path().display(),
        records = summary.records,
        skipped = summary.skipped,
        y_chromosome = summary.y_chromosome,
        first = summary.first,
        last = summary.last,
        "parsed genotype file"
    );
    if sink.load_factor() > LOAD_FACTOR_WARN {
        warn!(
            load_factor = sink.load_factor(),
            "SNP store is nearly full; use a larger capacity"
        );
    }
    Ok(summary)
}

/// Parse an in-memory export into `sink`. Clears `sink` on error.
pub fn parse_bytes<S>(
    bytes: &[u8],
    sink: &mut S,
    options: &ParseOptions,
) -> Result<ParseSummary, ParseError>
where
    S: RecordSink + ?Sized,
{
    let result = scan(bytes, sink, options);
    if result.is_err() {
        sink.clear();
    }
    result
}

fn scan<S>(bytes: &[u8], sink: &mut S, options: &ParseOptions) -> Result<ParseSummary, ParseError>
where
    S: RecordSink + ?Sized,
{
    let mut summary = ParseSummary::default();
    if bytes.is_empty() {
        return Ok(summary);
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);

    for (index, line) in body.split(|&b| b == b'\n').enumerate() {
        let line_no = index + 1;
        summary.lines = line_no;

        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() || line[0] == options.comment {
            continue;
        }

        let Some((rsid, snp)) = decode_record(line, options)
            .map_err(|msg| ParseError::MalformedRecord { line: line_no, msg })?
        else {
            summary.skipped += 1;
            continue;
        };

        sink.insert(rsid, snp)
            .map_err(|source| ParseError::Store { line: line_no, source })?;
        summary.observe(rsid, &snp);
    }

    Ok(summary)
}

/// Decode one data line. `Ok(None)` means the record was skipped.
fn decode_record(line: &[u8], options: &ParseOptions) -> Result<Option<(Rsid, Snp)>, String> {
    let mut fields = line.split(|&b| b == b'\t');
    let (Some(id), Some(chromosome), Some(position), Some(genotype), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        let found = line.split(|&b| b == b'\t').count();
        return Err(format!("expected 4 tab-separated fields, found {found}"));
    };

    let Some(digits) = id.strip_prefix(b"rs") else {
        if options.skip_unknown_ids {
            return Ok(None);
        }
        return Err(format!("invalid RSID '{}'", String::from_utf8_lossy(id)));
    };
    let rsid = parse_u32(digits)
        .ok_or_else(|| format!("invalid RSID '{}'", String::from_utf8_lossy(id)))?;

    let chromosome = Chromosome::decode(chromosome).map_err(|e| e.to_string())?;
    let position = parse_u32(position)
        .ok_or_else(|| format!("invalid position '{}'", String::from_utf8_lossy(position)))?;
    let genotype = Genotype::decode(genotype).map_err(|e| e.to_string())?;

    Ok(Some((rsid, Snp::new(chromosome, position, genotype))))
}

/// Unsigned decimal without sign or whitespace; `None` on overflow.
fn parse_u32(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

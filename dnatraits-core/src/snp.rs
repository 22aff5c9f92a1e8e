//! Chromosome enumeration and the SNP record stored per RSID.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::GenomeError;
use crate::genotype::{Genotype, NN};

/// Reference SNP identifier with the `rs` prefix stripped.
pub type Rsid = u32;

/// Offset within a chromosome.
pub type Position = u32;

const CHROMOSOME_BITS: u8 = 5;

/// Chromosome of a SNP. Fits in 5 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Chromosome {
    #[default]
    None = 0,
    Chr1,
    Chr2,
    Chr3,
    Chr4,
    Chr5,
    Chr6,
    Chr7,
    Chr8,
    Chr9,
    Chr10,
    Chr11,
    Chr12,
    Chr13,
    Chr14,
    Chr15,
    Chr16,
    Chr17,
    Chr18,
    Chr19,
    Chr20,
    Chr21,
    Chr22,
    /// Mitochondrial DNA.
    Mt,
    X,
    Y,
}

impl Chromosome {
    const ALL: [Chromosome; 26] = [
        Chromosome::None,
        Chromosome::Chr1,
        Chromosome::Chr2,
        Chromosome::Chr3,
        Chromosome::Chr4,
        Chromosome::Chr5,
        Chromosome::Chr6,
        Chromosome::Chr7,
        Chromosome::Chr8,
        Chromosome::Chr9,
        Chromosome::Chr10,
        Chromosome::Chr11,
        Chromosome::Chr12,
        Chromosome::Chr13,
        Chromosome::Chr14,
        Chromosome::Chr15,
        Chromosome::Chr16,
        Chromosome::Chr17,
        Chromosome::Chr18,
        Chromosome::Chr19,
        Chromosome::Chr20,
        Chromosome::Chr21,
        Chromosome::Chr22,
        Chromosome::Mt,
        Chromosome::X,
        Chromosome::Y,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Chromosome::code`]. Values that do not fit the 5-bit
    /// field or name no chromosome give `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        if code >> CHROMOSOME_BITS != 0 {
            return None;
        }
        Self::ALL.get(code as usize).copied()
    }

    /// Autosome by number, 1 through 22.
    pub fn autosome(n: u8) -> Option<Self> {
        match n {
            1..=22 => Self::from_code(n),
            _ => None,
        }
    }

    /// Decode the chromosome column: `1`..`22`, `X`, `Y` or `MT`.
    pub fn decode(field: &[u8]) -> Result<Self, GenomeError> {
        let invalid = || GenomeError::InvalidChromosome(String::from_utf8_lossy(field).into_owned());
        match field {
            b"X" => Ok(Chromosome::X),
            b"Y" => Ok(Chromosome::Y),
            b"MT" => Ok(Chromosome::Mt),
            [d @ b'1'..=b'9'] => Self::autosome(d - b'0').ok_or_else(invalid),
            [t @ b'1'..=b'2', d @ b'0'..=b'9'] => {
                Self::autosome((t - b'0') * 10 + (d - b'0')).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chromosome::None => write!(f, "?"),
            Chromosome::Mt => write!(f, "MT"),
            Chromosome::X => write!(f, "X"),
            Chromosome::Y => write!(f, "Y"),
            autosome => write!(f, "{}", autosome.code()),
        }
    }
}

impl FromStr for Chromosome {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chromosome::decode(s.as_bytes())
    }
}

/// One observed SNP: where it sits and which alleles were called.
///
/// Records order by chromosome, then position, then genotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snp {
    pub chromosome: Chromosome,
    pub position: Position,
    pub genotype: Genotype,
}

impl Snp {
    /// Placeholder record: no chromosome, position 0, no-call.
    pub const NONE: Snp = Snp {
        chromosome: Chromosome::None,
        position: 0,
        genotype: NN,
    };

    pub const fn new(chromosome: Chromosome, position: Position, genotype: Genotype) -> Self {
        Snp {
            chromosome,
            position,
            genotype,
        }
    }
}

impl Ord for Snp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chromosome
            .cmp(&other.chromosome)
            .then(self.position.cmp(&other.position))
            .then(self.genotype.cmp(&other.genotype))
    }
}

impl PartialOrd for Snp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Genotype> for Snp {
    fn eq(&self, genotype: &Genotype) -> bool {
        self.genotype == *genotype
    }
}

impl fmt::Display for Snp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chr{}:{}", self.genotype, self.chromosome, self.position)
    }
}

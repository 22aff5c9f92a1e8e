//! Allele codec and the packed two-allele genotype.
//!
//! An allele fits in 3 bits. A genotype packs two of them into one byte:
//! the first allele in bits 0..3, the second in bits 3..6.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::error::GenomeError;

const ALLELE_BITS: u8 = 3;
const ALLELE_MASK: u8 = (1 << ALLELE_BITS) - 1;

/// One observed allele. `Absent` is the zero value and marks a no-call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Allele {
    #[default]
    Absent = 0,
    A = 1,
    G = 2,
    C = 3,
    T = 4,
    Deletion = 5,
    Insertion = 6,
}

impl Allele {
    /// Decode an uppercase allele letter. `-` is the no-call marker.
    pub fn decode(letter: u8) -> Result<Self, GenomeError> {
        match letter {
            b'A' => Ok(Allele::A),
            b'C' => Ok(Allele::C),
            b'G' => Ok(Allele::G),
            b'T' => Ok(Allele::T),
            b'-' => Ok(Allele::Absent),
            b'D' => Ok(Allele::Deletion),
            b'I' => Ok(Allele::Insertion),
            other => Err(GenomeError::InvalidAllele(other as char)),
        }
    }

    /// Watson-Crick complement. Deletion, insertion and absent map to themselves.
    #[inline]
    pub const fn complement(self) -> Self {
        match self {
            Allele::A => Allele::T,
            Allele::T => Allele::A,
            Allele::C => Allele::G,
            Allele::G => Allele::C,
            other => other,
        }
    }

    /// True for the four nucleotides A, C, G, T.
    #[inline]
    pub const fn is_base(self) -> bool {
        matches!(self, Allele::A | Allele::C | Allele::G | Allele::T)
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Allele::code`]. Returns `None` for values outside 0..=6.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Allele::Absent),
            1 => Some(Allele::A),
            2 => Some(Allele::G),
            3 => Some(Allele::C),
            4 => Some(Allele::T),
            5 => Some(Allele::Deletion),
            6 => Some(Allele::Insertion),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Allele::Absent => '-',
            Allele::A => 'A',
            Allele::G => 'G',
            Allele::C => 'C',
            Allele::T => 'T',
            Allele::Deletion => 'D',
            Allele::Insertion => 'I',
        }
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Ordered allele pair packed into a single byte.
///
/// Order is significant: `AG` and `GA` are distinct values. Equality and
/// ordering compare the packed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Genotype(u8);

impl Genotype {
    pub const fn new(first: Allele, second: Allele) -> Self {
        Genotype(first.code() | (second.code() << ALLELE_BITS))
    }

    /// Rebuild a genotype from its packed byte, rejecting bit patterns that
    /// do not hold two valid allele codes.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits >> (2 * ALLELE_BITS) != 0 {
            return None;
        }
        match (
            Allele::from_code(bits & ALLELE_MASK),
            Allele::from_code((bits >> ALLELE_BITS) & ALLELE_MASK),
        ) {
            (Some(_), Some(_)) => Some(Genotype(bits)),
            _ => None,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn first(self) -> Allele {
        // Both halves were validated on construction.
        Allele::from_code(self.0 & ALLELE_MASK).unwrap_or_default()
    }

    #[inline]
    pub fn second(self) -> Allele {
        Allele::from_code((self.0 >> ALLELE_BITS) & ALLELE_MASK).unwrap_or_default()
    }

    /// Complement both alleles, keeping their order.
    #[inline]
    pub fn complement(self) -> Self {
        Genotype::new(self.first().complement(), self.second().complement())
    }

    /// True when neither allele was called.
    pub fn is_no_call(self) -> bool {
        self.first() == Allele::Absent && self.second() == Allele::Absent
    }

    /// True when at least one allele is present.
    pub fn is_called(self) -> bool {
        !self.is_no_call()
    }

    /// Decode a genotype column: one or two allele letters, `--` for no-call.
    pub fn decode(field: &[u8]) -> Result<Self, GenomeError> {
        match *field {
            [a] => Ok(Genotype::new(Allele::decode(a)?, Allele::Absent)),
            [a, b] => Ok(Genotype::new(Allele::decode(a)?, Allele::decode(b)?)),
            _ => Err(GenomeError::InvalidGenotype(
                String::from_utf8_lossy(field).into_owned(),
            )),
        }
    }

    /// The named constants as a lookup table, e.g. for printing or for
    /// mapping a call set given as text.
    pub const NAMED: [(&'static str, Genotype); 17] = [
        ("AA", AA),
        ("AC", AC),
        ("AG", AG),
        ("AT", AT),
        ("CA", CA),
        ("CC", CC),
        ("CG", CG),
        ("CT", CT),
        ("GA", GA),
        ("GC", GC),
        ("GG", GG),
        ("GT", GT),
        ("NN", NN),
        ("TA", TA),
        ("TC", TC),
        ("TG", TG),
        ("TT", TT),
    ];
}

impl Not for Genotype {
    type Output = Genotype;

    fn not(self) -> Genotype {
        self.complement()
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first(), self.second())
    }
}

impl FromStr for Genotype {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genotype::decode(s.as_bytes())
    }
}

pub const AA: Genotype = Genotype::new(Allele::A, Allele::A);
pub const AC: Genotype = Genotype::new(Allele::A, Allele::C);
pub const AG: Genotype = Genotype::new(Allele::A, Allele::G);
pub const AT: Genotype = Genotype::new(Allele::A, Allele::T);
pub const CA: Genotype = Genotype::new(Allele::C, Allele::A);
pub const CC: Genotype = Genotype::new(Allele::C, Allele::C);
pub const CG: Genotype = Genotype::new(Allele::C, Allele::G);
pub const CT: Genotype = Genotype::new(Allele::C, Allele::T);
pub const GA: Genotype = Genotype::new(Allele::G, Allele::A);
pub const GC: Genotype = Genotype::new(Allele::G, Allele::C);
pub const GG: Genotype = Genotype::new(Allele::G, Allele::G);
pub const GT: Genotype = Genotype::new(Allele::G, Allele::T);
/// No-call: both alleles absent.
pub const NN: Genotype = Genotype::new(Allele::Absent, Allele::Absent);
pub const TA: Genotype = Genotype::new(Allele::T, Allele::A);
pub const TC: Genotype = Genotype::new(Allele::T, Allele::C);
pub const TG: Genotype = Genotype::new(Allele::T, Allele::G);
pub const TT: Genotype = Genotype::new(Allele::T, Allele::T);

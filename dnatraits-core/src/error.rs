//! Error type shared by the genotype codec and the SNP store.

use thiserror::Error;

use crate::snp::Rsid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    #[error("Invalid allele '{0}': expected one of A, C, G, T, -, D, I")]
    InvalidAllele(char),

    #[error("Invalid genotype '{0}': expected one or two allele letters")]
    InvalidGenotype(String),

    #[error("Invalid chromosome '{0}': expected 1-22, X, Y or MT")]
    InvalidChromosome(String),

    #[error("SNP store is full (capacity {capacity}); construct it with a larger capacity")]
    CapacityExceeded { capacity: usize },

    #[error("RSID rs{0} not found")]
    NotFound(Rsid),
}

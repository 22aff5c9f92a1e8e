//! dnatraits-core: SNP types and storage for dnatraits
//!
//! Provides the allele codec and packed genotype, the chromosome and SNP
//! record types, a fixed-capacity open-addressing table keyed by RSID, and
//! the `Genome` facade built on top of it.

pub mod error;
pub mod genome;
pub mod genotype;
pub mod snp;
pub mod store;
pub mod traits;

pub use error::GenomeError;
pub use genome::{Genome, GenomeIter};
pub use genotype::{Allele, Genotype};
pub use snp::{Chromosome, Position, Rsid, Snp};
pub use store::SnpStore;
pub use traits::RecordSink;

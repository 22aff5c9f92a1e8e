//! Destination trait for decoded records.

use crate::error::GenomeError;
use crate::genome::Genome;
use crate::snp::{Rsid, Snp};
use crate::store::SnpStore;

/// Anything a parser can decode records into.
///
/// Implemented by the bare [`SnpStore`] and by the [`Genome`] facade, which
/// also keeps its summary scalars current.
pub trait RecordSink {
    /// Insert or overwrite the record for `rsid`.
    fn insert(&mut self, rsid: Rsid, snp: Snp) -> Result<(), GenomeError>;

    /// Drop every record, e.g. after a failed parse.
    fn clear(&mut self);

    fn size(&self) -> usize;

    fn load_factor(&self) -> f64;
}

impl RecordSink for SnpStore {
    fn insert(&mut self, rsid: Rsid, snp: Snp) -> Result<(), GenomeError> {
        SnpStore::insert(self, rsid, snp)
    }

    fn clear(&mut self) {
        SnpStore::clear(self)
    }

    fn size(&self) -> usize {
        SnpStore::size(self)
    }

    fn load_factor(&self) -> f64 {
        SnpStore::load_factor(self)
    }
}

impl RecordSink for Genome {
    fn insert(&mut self, rsid: Rsid, snp: Snp) -> Result<(), GenomeError> {
        Genome::insert(self, rsid, snp)
    }

    fn clear(&mut self) {
        Genome::clear(self)
    }

    fn size(&self) -> usize {
        Genome::size(self)
    }

    fn load_factor(&self) -> f64 {
        Genome::load_factor(self)
    }
}

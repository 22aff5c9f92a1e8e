//! The `Genome` facade: one owned [`SnpStore`] plus summary facts gathered
//! while records go in.

use std::ops::Index;

use crate::error::GenomeError;
use crate::genotype::Genotype;
use crate::snp::{Chromosome, Rsid, Snp};
use crate::store::{Iter, SnpStore};

/// Iterator over a genome's `(Rsid, Snp)` pairs in slot order.
pub type GenomeIter<'a> = Iter<'a>;

/// A single sample's SNPs keyed by RSID.
#[derive(Debug, Clone)]
pub struct Genome {
    store: SnpStore,
    y_chromosome: bool,
    /// Lowest and highest RSID inserted so far.
    range: Option<(Rsid, Rsid)>,
}

impl Genome {
    /// Create an empty genome with room for `capacity` records. The table
    /// does not grow, so size it for the largest expected input.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: SnpStore::with_capacity(capacity),
            y_chromosome: false,
            range: None,
        }
    }

    /// Insert or overwrite a record and update the summary facts.
    pub fn insert(&mut self, rsid: Rsid, snp: Snp) -> Result<(), GenomeError> {
        self.store.insert(rsid, snp)?;
        if snp.chromosome == Chromosome::Y && snp.genotype.is_called() {
            self.y_chromosome = true;
        }
        self.range = Some(match self.range {
            Some((first, last)) => (first.min(rsid), last.max(rsid)),
            None => (rsid, rsid),
        });
        Ok(())
    }

    /// True if some Y-chromosome record has at least one called allele.
    pub fn y_chromosome(&self) -> bool {
        self.y_chromosome
    }

    /// Lowest RSID inserted, or 0 for an empty genome.
    pub fn first(&self) -> Rsid {
        self.range.map_or(0, |(first, _)| first)
    }

    /// Highest RSID inserted, or 0 for an empty genome.
    pub fn last(&self) -> Rsid {
        self.range.map_or(0, |(_, last)| last)
    }

    pub fn has(&self, rsid: Rsid) -> bool {
        self.store.has(rsid)
    }

    pub fn get(&self, rsid: Rsid) -> Option<&Snp> {
        self.store.get(rsid)
    }

    pub fn lookup(&self, rsid: Rsid) -> Result<&Snp, GenomeError> {
        self.store.lookup(rsid)
    }

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Load factor of the underlying table, for diagnostics.
    pub fn load_factor(&self) -> f64 {
        self.store.load_factor()
    }

    /// RSIDs present in both genomes, ascending.
    pub fn intersect_rsid(&self, other: &Genome) -> Vec<Rsid> {
        self.store.intersect_rsid(&other.store)
    }

    /// RSIDs whose records are identical in both genomes, ascending.
    pub fn intersect_snp(&self, other: &Genome) -> Vec<Rsid> {
        self.store.intersect_snp(&other.store)
    }

    /// All RSIDs in slot order.
    pub fn rsids(&self) -> Vec<Rsid> {
        self.iter().map(|(rsid, _)| rsid).collect()
    }

    /// Copies of all SNPs in slot order.
    pub fn snps(&self) -> Vec<Snp> {
        self.iter().map(|(_, snp)| snp).collect()
    }

    /// True if every `(rsid, genotype)` criterion is present with exactly
    /// that genotype.
    pub fn matches(&self, criteria: &[(Rsid, Genotype)]) -> bool {
        criteria
            .iter()
            .all(|&(rsid, genotype)| self.get(rsid).is_some_and(|snp| *snp == genotype))
    }

    pub fn iter(&self) -> GenomeIter<'_> {
        self.store.iter()
    }

    /// Alias of [`Genome::iter`], paired with [`Genome::end`].
    pub fn begin(&self) -> GenomeIter<'_> {
        self.store.iter()
    }

    pub fn end(&self) -> GenomeIter<'_> {
        self.store.end()
    }

    /// Drop all records and reset the summary facts. Capacity is kept.
    pub fn clear(&mut self) {
        self.store.clear();
        self.y_chromosome = false;
        self.range = None;
    }
}

impl Index<Rsid> for Genome {
    type Output = Snp;

    /// # Panics
    ///
    /// Panics if `rsid` is not present; use [`Genome::lookup`] to get an error.
    fn index(&self, rsid: Rsid) -> &Snp {
        match self.store.get(rsid) {
            Some(snp) => snp,
            None => panic!("{}", GenomeError::NotFound(rsid)),
        }
    }
}

impl PartialEq for Genome {
    /// Same RSID → SNP mapping, regardless of capacity or slot layout.
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.iter().all(|(rsid, snp)| other.get(rsid) == Some(&snp))
    }
}

impl Eq for Genome {}

impl<'a> IntoIterator for &'a Genome {
    type Item = (Rsid, Snp);
    type IntoIter = GenomeIter<'a>;

    fn into_iter(self) -> GenomeIter<'a> {
        self.iter()
    }
}

//! Fixed-capacity open-addressing hash table keyed by RSID.
//!
//! The slot array, the occupancy markers and the probe sequence stay private
//! to this module; callers only see [`SnpStore`] operations and [`Iter`].
//!
//! The table never grows. Size it for the whole input up front: a
//! dbSNP-scale export holds several hundred thousand to a few million
//! records, and probe sequences get long as the load factor approaches 1.
//!
//! Mutation needs `&mut SnpStore` while an [`Iter`] or an intersection holds
//! `&SnpStore`, so inserting during enumeration does not compile. Any number
//! of readers may share a store across threads.

use std::iter::FusedIterator;

use crate::error::GenomeError;
use crate::snp::{Rsid, Snp};

/// 2^64 / golden ratio; spreads dense integer keys across the table.
const FIBONACCI_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    rsid: Rsid,
    snp: Snp,
}

/// Where a probe for an RSID ended.
enum Probe {
    Found(usize),
    Vacant(usize),
    Full,
}

/// RSID → SNP map with a capacity fixed at construction.
#[derive(Debug, Clone)]
pub struct SnpStore {
    /// `None` marks an unused slot, so every `u32` stays a valid RSID.
    slots: Box<[Option<Slot>]>,
    occupied: usize,
}

#[inline]
fn home_slot(rsid: Rsid, capacity: usize) -> usize {
    let h = u64::from(rsid).wrapping_mul(FIBONACCI_MULTIPLIER);
    ((h ^ (h >> 32)) % capacity as u64) as usize
}

impl SnpStore {
    /// Allocate a store with `capacity` slots. The capacity never changes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            occupied: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Occupied slots over capacity. Zero for an empty or zero-capacity store.
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.occupied as f64 / self.slots.len() as f64
    }

    /// Linear probe from the home slot; visits each slot at most once.
    fn probe(&self, rsid: Rsid) -> Probe {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Probe::Full;
        }
        let home = home_slot(rsid, capacity);
        for step in 0..capacity {
            let index = (home + step) % capacity;
            match &self.slots[index] {
                None => return Probe::Vacant(index),
                Some(slot) if slot.rsid == rsid => return Probe::Found(index),
                Some(_) => {}
            }
        }
        Probe::Full
    }

    /// Store `snp` under `rsid`. An existing entry for `rsid` is overwritten
    /// and the size does not change.
    pub fn insert(&mut self, rsid: Rsid, snp: Snp) -> Result<(), GenomeError> {
        match self.probe(rsid) {
            Probe::Found(index) | Probe::Vacant(index) => {
                if self.slots[index].is_none() {
                    self.occupied += 1;
                }
                self.slots[index] = Some(Slot { rsid, snp });
                Ok(())
            }
            Probe::Full => Err(GenomeError::CapacityExceeded {
                capacity: self.capacity(),
            }),
        }
    }

    pub fn has(&self, rsid: Rsid) -> bool {
        matches!(self.probe(rsid), Probe::Found(_))
    }

    pub fn get(&self, rsid: Rsid) -> Option<&Snp> {
        match self.probe(rsid) {
            Probe::Found(index) => self.slots[index].as_ref().map(|slot| &slot.snp),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Like [`SnpStore::get`], failing with [`GenomeError::NotFound`].
    pub fn lookup(&self, rsid: Rsid) -> Result<&Snp, GenomeError> {
        self.get(rsid).ok_or(GenomeError::NotFound(rsid))
    }

    /// Walk occupied slots in slot order (neither RSID nor insertion order).
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.slots, 0)
    }

    /// The exhausted iterator every traversal of this store ends at.
    pub fn end(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cursor: self.slots.len(),
        }
    }

    /// RSIDs present in both stores, ascending.
    ///
    /// Walks the smaller store and probes the larger one, so the cost is
    /// `O(min(n, m))` probes.
    pub fn intersect_rsid(&self, other: &SnpStore) -> Vec<Rsid> {
        let (small, large) = self.by_size(other);
        let mut shared: Vec<Rsid> = small
            .iter()
            .filter(|(rsid, _)| large.has(*rsid))
            .map(|(rsid, _)| rsid)
            .collect();
        shared.sort_unstable();
        shared
    }

    /// RSIDs present in both stores with equal records (chromosome,
    /// position and genotype), ascending.
    pub fn intersect_snp(&self, other: &SnpStore) -> Vec<Rsid> {
        let (small, large) = self.by_size(other);
        let mut shared: Vec<Rsid> = small
            .iter()
            .filter(|(rsid, snp)| large.get(*rsid) == Some(snp))
            .map(|(rsid, _)| rsid)
            .collect();
        shared.sort_unstable();
        shared
    }

    fn by_size<'a>(&'a self, other: &'a SnpStore) -> (&'a SnpStore, &'a SnpStore) {
        if self.size() <= other.size() {
            (self, other)
        } else {
            (other, self)
        }
    }

    /// Mark every slot unused, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.occupied = 0;
    }
}

impl<'a> IntoIterator for &'a SnpStore {
    type Item = (Rsid, Snp);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Forward cursor over the occupied slots of a [`SnpStore`].
///
/// The cursor always rests on an occupied slot or at the end. Two iterators
/// are equal when they walk the same store and rest on the same slot.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    slots: &'a [Option<Slot>],
    cursor: usize,
}

impl<'a> Iter<'a> {
    fn new(slots: &'a [Option<Slot>], start: usize) -> Self {
        let mut iter = Iter {
            slots,
            cursor: start,
        };
        iter.skip_vacant();
        iter
    }

    fn skip_vacant(&mut self) {
        while self.cursor < self.slots.len() && self.slots[self.cursor].is_none() {
            self.cursor += 1;
        }
    }

    /// The entry under the cursor, copied out; `None` at the end.
    pub fn current(&self) -> Option<(Rsid, Snp)> {
        self.slots
            .get(self.cursor)
            .copied()
            .flatten()
            .map(|slot| (slot.rsid, slot.snp))
    }

    pub fn is_end(&self) -> bool {
        self.cursor >= self.slots.len()
    }
}

impl Iterator for Iter<'_> {
    type Item = (Rsid, Snp);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?;
        self.cursor += 1;
        self.skip_vacant();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len().saturating_sub(self.cursor);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Iter<'_> {}

impl PartialEq for Iter<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slots, other.slots) && self.cursor == other.cursor
    }
}

impl Eq for Iter<'_> {}

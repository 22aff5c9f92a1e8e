//! Pairwise comparison of the genomes that parsed successfully.

use std::path::PathBuf;

use dnatraits_core::Genome;
use tracing::warn;

/// Shared RSIDs and identical SNPs between two genomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub shared_rsids: usize,
    pub shared_snps: usize,
}

impl Overlap {
    pub fn between(a: &Genome, b: &Genome) -> Self {
        Self {
            shared_rsids: a.intersect_rsid(b).len(),
            shared_snps: a.intersect_snp(b).len(),
        }
    }

    /// Percentage of shared RSIDs that also carry identical SNPs.
    pub fn concordance(&self) -> f64 {
        if self.shared_rsids == 0 {
            return 0.0;
        }
        100.0 * self.shared_snps as f64 / self.shared_rsids as f64
    }
}

pub fn run(genomes: &[(PathBuf, Genome)]) {
    if genomes.len() < 2 {
        warn!("--compare needs at least two files that parse successfully");
        return;
    }

    println!("COMPARISON");
    println!();
    for (i, (path_a, a)) in genomes.iter().enumerate() {
        for (path_b, b) in &genomes[i + 1..] {
            let overlap = Overlap::between(a, b);
            println!(
                "  {} vs {}: {} shared RSIDs, {} identical SNPs ({:.1}%)",
                path_a.display(),
                path_b.display(),
                overlap.shared_rsids,
                overlap.shared_snps,
                overlap.concordance(),
            );
        }
    }
    println!();
}

//! Illustrative trait heuristics over a handful of well-known SNPs.
//!
//! Use with caution: these are toy rules from SNPedia, not diagnostics.
//! A missing RSID never fails a heuristic; it just gives the negative or
//! unknown answer.

use dnatraits_core::genotype::{AA, AG, CC, GA, GG, TT};
use dnatraits_core::{Genome, Genotype, Rsid};

/// gs237 criteria for blue eyes, see <http://snpedia.com/index.php/Gs237/criteria>.
const GS237: [(Rsid, Genotype); 6] = [
    (4778241, CC),
    (12913832, GG),
    (7495174, AA),
    (8028689, TT),
    (7183877, CC),
    // CC read from the opposite strand.
    (1800401, GG),
];

/// Skin pigmentation marker in SLC24A5.
pub const RS1426654: Rsid = 1426654;

pub fn blue_eyes(genome: &Genome) -> bool {
    genome.matches(&GS237)
}

pub fn skin_color(genome: &Genome) -> &'static str {
    match genome.get(RS1426654).map(|snp| snp.genotype) {
        Some(AA) => "Probably light-skinned, European ancestry",
        Some(GA) | Some(AG) => "Mixed African/European ancestry possible",
        Some(GG) => "Probably darker-skinned, Asian or African ancestry",
        _ => "Unknown",
    }
}

pub fn is_male(genome: &Genome) -> bool {
    genome.y_chromosome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnatraits_core::{Chromosome, Snp};

    fn genome_with(calls: &[(Rsid, Genotype)]) -> Genome {
        let mut genome = Genome::new(64);
        for (i, &(rsid, genotype)) in calls.iter().enumerate() {
            genome
                .insert(rsid, Snp::new(Chromosome::Chr15, i as u32, genotype))
                .unwrap();
        }
        genome
    }

    #[test]
    fn test_blue_eyes() {
        assert!(blue_eyes(&genome_with(&GS237)));
        assert_eq!(GS237[5].1, !CC);

        let mut brown = GS237;
        brown[1].1 = AG;
        assert!(!blue_eyes(&genome_with(&brown)));
        assert!(!blue_eyes(&genome_with(&GS237[..5])));
    }

    #[test]
    fn test_skin_color() {
        assert_eq!(
            skin_color(&genome_with(&[(RS1426654, AA)])),
            "Probably light-skinned, European ancestry"
        );
        assert_eq!(
            skin_color(&genome_with(&[(RS1426654, GA)])),
            "Mixed African/European ancestry possible"
        );
        assert_eq!(
            skin_color(&genome_with(&[(RS1426654, GG)])),
            "Probably darker-skinned, Asian or African ancestry"
        );
        assert_eq!(skin_color(&genome_with(&[(RS1426654, TT)])), "Unknown");
        assert_eq!(skin_color(&genome_with(&[])), "Unknown");
    }

    #[test]
    fn test_gender() {
        let mut genome = Genome::new(8);
        assert!(!is_male(&genome));
        genome.insert(2032651, Snp::new(Chromosome::Y, 1, AA)).unwrap();
        assert!(is_male(&genome));
    }
}

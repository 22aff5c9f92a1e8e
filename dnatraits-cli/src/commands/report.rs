//! Per-file report: parse each export and print counts, example lookups
//! and the trait summary.
//!
//! dnatraits [--capacity N] [--skip-unknown-ids] [--compare] FILE...

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use dnatraits_core::{Chromosome, Genome, Genotype, Rsid, Snp};
use dnatraits_geno::{parse_file_with, ParseOptions};

use super::{compare, heuristics};

/// SNPs printed for every genome.
const EXAMPLE_RSIDS: [Rsid; 5] = [7495174, 1805007, 1800401, 28357092, 12087250];

#[derive(Args)]
pub struct ReportArgs {
    /// 23andMe-style raw genotype files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Slots in each genome's hash table; the table does not grow
    #[arg(long, default_value = "2000000")]
    capacity: usize,

    /// Skip records whose id is not an rsID (e.g. 23andMe internal i-ids)
    #[arg(long, default_value = "false")]
    skip_unknown_ids: bool,

    /// Also report shared RSIDs and SNPs for every pair of files
    #[arg(long, default_value = "false")]
    compare: bool,
}

/// Report on every file. Returns false if any file failed; failures are
/// printed and the remaining files are still processed.
pub fn run(args: ReportArgs) -> Result<bool> {
    let options = ParseOptions {
        skip_unknown_ids: args.skip_unknown_ids,
        ..ParseOptions::default()
    };
    info!("Reporting on {} file(s), capacity {}", args.files.len(), args.capacity);

    let mut all_ok = true;
    let mut genomes: Vec<(PathBuf, Genome)> = Vec::new();

    for path in &args.files {
        match report_file(path, args.capacity, &options) {
            Ok(genome) => {
                if args.compare {
                    genomes.push((path.clone(), genome));
                }
            }
            Err(e) => {
                println!();
                println!("Error: {e:#}");
                all_ok = false;
            }
        }
    }

    if args.compare {
        compare::run(&genomes);
    }
    Ok(all_ok)
}

fn report_file(path: &Path, capacity: usize, options: &ParseOptions) -> Result<Genome> {
    print!("Reading {} ... ", path.display());
    std::io::stdout().flush()?;

    let mut genome = Genome::new(capacity);
    let summary = parse_file_with(path, &mut genome, options)?;
    debug!("{:?}", summary);

    println!("done");
    println!("Read {} unique SNPs", genome.size());
    println!();

    println!("Example SNPs in this genome:");
    println!();
    for rsid in EXAMPLE_RSIDS {
        println!("  {}", format_snp(&genome, rsid));
    }
    println!();

    print!("{}", summary_text(&genome));

    println!("Developer info:");
    println!("  sizeof(Chromosome) = {}", std::mem::size_of::<Chromosome>());
    println!("  sizeof(Genotype) = {}", std::mem::size_of::<Genotype>());
    println!("  sizeof(Snp) = {}", std::mem::size_of::<Snp>());
    println!("  sizeof(Rsid) = {}", std::mem::size_of::<Rsid>());
    println!("  RSID range = rs{}..rs{}", genome.first(), genome.last());
    println!("  load factor = {:.4}", genome.load_factor());
    println!();

    Ok(genome)
}

fn format_snp(genome: &Genome, rsid: Rsid) -> String {
    match genome.get(rsid) {
        Some(snp) => format!("rs{rsid} {snp}"),
        None => format!("rs{rsid} <not found>"),
    }
}

fn summary_text(genome: &Genome) -> String {
    let male = heuristics::is_male(genome);
    format!(
        "SUMMARY\n\n  \
         Gender:     {} ({} Y-chromosome)\n  \
         Blue eyes?  {} (gs237)\n  \
         Skin color: {} (rs{})\n\n",
        if male { "Male" } else { "Female" },
        if male { "has" } else { "no" },
        if heuristics::blue_eyes(genome) { "Yes" } else { "No" },
        heuristics::skin_color(genome),
        heuristics::RS1426654,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnatraits_core::genotype::{AA, TC};

    #[test]
    fn test_format_snp() {
        let mut genome = Genome::new(8);
        genome
            .insert(1800401, Snp::new(Chromosome::Chr15, 28230318, TC))
            .unwrap();
        assert_eq!(format_snp(&genome, 1800401), "rs1800401 TC chr15:28230318");
        assert_eq!(format_snp(&genome, 7495174), "rs7495174 <not found>");
    }

    #[test]
    fn test_summary_text() {
        let mut genome = Genome::new(8);
        genome
            .insert(heuristics::RS1426654, Snp::new(Chromosome::Chr15, 48426484, AA))
            .unwrap();
        let text = summary_text(&genome);
        assert!(text.contains("Gender:     Female (no Y-chromosome)"), "{text}");
        assert!(text.contains("Blue eyes?  No (gs237)"), "{text}");
        assert!(text.contains("Probably light-skinned"), "{text}");
        assert!(text.contains("(rs1426654)"), "{text}");
    }
}

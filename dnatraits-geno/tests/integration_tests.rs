//! End-to-end tests: write an export to disk, parse it, query the genome.

use std::io::Write;
use std::path::PathBuf;

use dnatraits_core::genotype::{AG, CC, GG, TC};
use dnatraits_core::{Chromosome, Genome, GenomeError, SnpStore};
use dnatraits_geno::{parse_file, parse_file_with, ParseError, ParseOptions};

/// Write `contents` to a fresh file inside `dir`.
fn write_export(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const HEADER: &str = "# This data file generated by 23andMe at: Thu Jan 01 00:00:00 2015\n\
                      # rsid\tchromosome\tposition\tgenotype\n";

mod parse {
    use super::*;

    #[test]
    fn test_two_line_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(
            &dir,
            "genome.txt",
            "rs4778241\t8\t115110000\tCC\nrs1800401\t15\t28230318\tTC\n",
        );

        let mut genome = Genome::new(1000);
        let summary = parse_file(&path, &mut genome).unwrap();

        assert_eq!(summary.records, 2);
        assert_eq!(genome.size(), 2);
        assert_eq!(genome[4778241], CC);
        assert_eq!(genome[1800401], TC);
        assert_eq!(!genome[1800401].genotype, AG);
    }

    #[test]
    fn test_header_and_summary_facts() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!(
            "{HEADER}rs548049170\t1\t69869\tTT\n\
             rs13328684\t1\t74792\t--\n\
             rs2032651\tY\t21867787\tA\n\
             rs3094315\tMT\t752566\tG\n"
        );
        let path = write_export(&dir, "male.txt", &body);

        let mut genome = Genome::new(64);
        let summary = parse_file(&path, &mut genome).unwrap();

        assert_eq!(summary.lines, 6);
        assert_eq!(summary.records, 4);
        assert!(summary.y_chromosome);
        assert!(genome.y_chromosome());
        assert_eq!(genome.first(), 2032651);
        assert_eq!(genome.last(), 548049170);
        assert_eq!(summary.first, genome.first());
        assert_eq!(summary.last, genome.last());
        assert_eq!(genome[3094315].chromosome, Chromosome::Mt);
    }

    #[test]
    fn test_no_call_on_y_is_not_male() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, "female.txt", "rs2032651\tY\t21867787\t--\n");
        let mut genome = Genome::new(8);
        parse_file(&path, &mut genome).unwrap();
        assert!(!genome.y_chromosome());
        assert!(genome.has(2032651));
    }

    #[test]
    fn test_parse_into_bare_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, "store.txt", "rs1\t1\t10\tGG\nrs1\t1\t10\tCC\n");
        let mut store = SnpStore::with_capacity(4);
        let summary = parse_file(&path, &mut store).unwrap();
        assert_eq!(summary.records, 2);
        // Last write wins.
        assert_eq!(store.size(), 1);
        assert_eq!(*store.lookup(1).unwrap(), CC);
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut genome = Genome::new(8);
        let err = parse_file(dir.path().join("nope.txt"), &mut genome).unwrap_err();
        assert!(matches!(err, ParseError::FileOpen { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_three_field_line_discards_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(
            &dir,
            "broken.txt",
            "rs4778241\t8\t115110000\tCC\nrs1800401\t15\t28230318\n",
        );
        let mut genome = Genome::new(16);
        let err = parse_file(&path, &mut genome).unwrap_err();

        assert!(matches!(err, ParseError::MalformedRecord { line: 2, .. }), "{err}");
        assert_eq!(genome.size(), 0);
        assert!(!genome.has(4778241));
        assert_eq!(genome.lookup(4778241), Err(GenomeError::NotFound(4778241)));
    }

    #[test]
    fn test_undersized_genome() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, "big.txt", "rs1\t1\t1\tAA\nrs2\t1\t2\tAA\nrs3\t1\t3\tAA\n");
        let mut genome = Genome::new(2);
        let err = parse_file(&path, &mut genome).unwrap_err();
        match err {
            ParseError::Store { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, GenomeError::CapacityExceeded { capacity: 2 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_internal_ids_need_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, "ids.txt", "i4000001\t1\t5\tAA\nrs9\t2\t7\tGG\n");

        let mut genome = Genome::new(8);
        assert!(parse_file(&path, &mut genome).is_err());

        let options = ParseOptions {
            skip_unknown_ids: true,
            ..ParseOptions::default()
        };
        let summary = parse_file_with(&path, &mut genome, &options).unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(genome[9], GG);
    }
}

mod compare {
    use super::*;

    #[test]
    fn test_intersections_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_export(
            &dir,
            "a.txt",
            "rs1\t1\t100\tAA\nrs2\t1\t200\tCC\nrs3\t2\t300\tGG\n",
        );
        let b = write_export(&dir, "b.txt", "rs2\t1\t200\tCC\nrs3\t2\t300\tAG\nrs4\t3\t1\tTT\n");

        let mut ga = Genome::new(16);
        let mut gb = Genome::new(16);
        parse_file(&a, &mut ga).unwrap();
        parse_file(&b, &mut gb).unwrap();

        assert_eq!(ga.intersect_rsid(&gb), vec![2, 3]);
        assert_eq!(gb.intersect_rsid(&ga), vec![2, 3]);
        assert_eq!(ga.intersect_snp(&gb), vec![2]);
        assert_eq!(gb.intersect_snp(&ga), vec![2]);
        assert_ne!(ga, gb);
    }

    #[test]
    fn test_same_file_twice_is_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, "twin.txt", &format!("{HEADER}rs1\t1\t100\tAA\nrs2\tX\t5\tC\n"));
        let mut first = Genome::new(8);
        let mut second = Genome::new(32);
        parse_file(&path, &mut first).unwrap();
        parse_file(&path, &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.intersect_snp(&second).len(), 2);
    }
}

//! Property-style tests of the matcher against loaded genome libraries.

use std::collections::HashSet;

use genome_matcher::parsing::fasta::parse_genome_text;
use genome_matcher::{Genome, GenomeMatch, GenomeMatcher};

const LIBRARY: &str = "\
>Halobacterium
ACGTACGTTAGCCGATAGCTTAGCNNACGATCGATCGGGCTAAATCG
>Ferroplasma
TTAGCCGATAGCTTAGCAAACGATGGGATCGAAATTTCCCGGGAAAC
>Desulfurococcus
acgtacgttagccgatagcttagcaaacgatcgatcgggctaaatcg
";

fn load_matcher(window: usize) -> GenomeMatcher {
    let mut matcher = GenomeMatcher::new(window);
    for genome in parse_genome_text(LIBRARY).expect("library should parse") {
        matcher.add_genome(genome);
    }
    matcher
}

#[test]
fn test_every_kmer_is_found_exactly() {
    let window = 6;
    let matcher = load_matcher(window);

    for genome in matcher.genomes() {
        for position in 0..=genome.length() - window {
            let kmer = genome.extract(position, window).unwrap();
            let mut matches = Vec::new();
            assert!(
                matcher.find_genomes_with_this_dna(kmer, window, true, &mut matches),
                "k-mer {kmer} of {} not found",
                genome.name()
            );
            let hit = matches
                .iter()
                .find(|m| m.genome_name == genome.name())
                .expect("source genome should match its own k-mer");
            assert!(hit.length >= window);
        }
    }
}

#[test]
fn test_results_never_repeat_a_genome() {
    let matcher = load_matcher(5);

    for fragment in ["TTAGCCGATAGC", "ACGATCGATCGG", "GGGCTAAATCG", "CGATAGCTTAGCAAACG"] {
        for exact in [true, false] {
            let mut matches = Vec::new();
            matcher.find_genomes_with_this_dna(fragment, 5, exact, &mut matches);
            let names: HashSet<&str> = matches.iter().map(|m| m.genome_name.as_str()).collect();
            assert_eq!(names.len(), matches.len(), "duplicate genome for {fragment}");
        }
    }
}

#[test]
fn test_invalid_lengths_always_fail() {
    let matcher = load_matcher(5);
    let mut matches = Vec::new();

    for exact in [true, false] {
        assert!(!matcher.find_genomes_with_this_dna("TTAGCCGATAGC", 4, exact, &mut matches));
        assert!(!matcher.find_genomes_with_this_dna("TTAGC", 6, exact, &mut matches));
    }
    assert!(matches.is_empty());
}

#[test]
fn test_single_substitution_found_except_at_first_base() {
    let window = 8;
    let mut matcher = GenomeMatcher::new(window);
    matcher.add_genome(Genome::new("target", "GATTACAGATTACA"));

    let original = "GATTACAG";
    for index in 0..window {
        let mut mutated: Vec<u8> = original.bytes().collect();
        mutated[index] = if mutated[index] == b'C' { b'G' } else { b'C' };
        let mutated = String::from_utf8(mutated).unwrap();

        let mut fuzzy = Vec::new();
        let found = matcher.find_genomes_with_this_dna(&mutated, window, false, &mut fuzzy);
        assert_eq!(found, index != 0, "substitution at {index}: {mutated}");

        let mut exact = Vec::new();
        assert!(!matcher.find_genomes_with_this_dna(&mutated, window, true, &mut exact));
    }
}

#[test]
fn test_loader_uppercases_library_genomes() {
    let matcher = load_matcher(6);
    let mut matches = Vec::new();

    assert!(matcher.find_genomes_with_this_dna("ACGTACGTTAGC", 12, true, &mut matches));
    let names: Vec<&str> = matches.iter().map(|m| m.genome_name.as_str()).collect();
    assert_eq!(names, vec!["Halobacterium", "Desulfurococcus"]);
}

#[test]
fn test_related_results_sorted() {
    let matcher = load_matcher(6);
    let query = Genome::new(
        "query",
        "ACGTACGTTAGCCGATAGCTTAGCAAACGATCGATCGGGCTAAATCG",
    );

    let mut results: Vec<GenomeMatch> = Vec::new();
    assert!(matcher.find_related_genomes(&query, 8, false, 0.0, &mut results));

    for pair in results.windows(2) {
        assert!(
            pair[0].percent_match > pair[1].percent_match
                || (pair[0].percent_match == pair[1].percent_match
                    && pair[0].genome_name < pair[1].genome_name),
            "results out of order: {results:?}"
        );
    }
    assert_eq!(results[0].genome_name, "Desulfurococcus");
    assert!((results[0].percent_match - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_copies_are_independent() {
    let original = load_matcher(6);
    let mut copy = original.clone();
    copy.reset();

    assert!(copy.is_empty());
    assert_eq!(original.len(), 3);

    let mut matches = Vec::new();
    assert!(original.find_genomes_with_this_dna("GGGCTAAATCG", 6, true, &mut matches));
}

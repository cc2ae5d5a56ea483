//! Fragment search and relatedness scoring.
//!
//! - [`GenomeMatcher`]: Owns the genome collection and its k-mer index
//! - [`extension`]: Grows a k-mer anchor into a full match under a mismatch budget
//! - [`scoring`]: Coverage percentages and ranked insertion of related genomes
//!
//! ## Matching Algorithm
//!
//! 1. **Anchoring**: The first k bases of a fragment are looked up in the trie,
//!    tolerating one substitution (never at the first base) unless exact matching
//!    was requested
//! 2. **Extension**: Each anchor is compared base by base against its genome,
//!    spending the same single-substitution budget
//! 3. **Reconciliation**: Only the longest match per genome name is kept
//!
//! Related genomes are found by cutting a query into non-overlapping windows,
//! searching each window, and scoring every genome by the percentage of windows
//! it matched.
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{Genome, GenomeMatcher};
//!
//! let mut matcher = GenomeMatcher::new(4);
//! matcher.add_genome(Genome::new("A", "ACGTACGT"));
//!
//! let mut matches = Vec::new();
//! assert!(matcher.find_genomes_with_this_dna("ACTTACGT", 4, false, &mut matches));
//! assert_eq!(matches[0].length, 8);
//! ```

pub mod engine;
pub mod extension;
pub mod scoring;

pub use engine::GenomeMatcher;

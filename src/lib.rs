//! # genome-matcher
//!
//! A library for finding which genomes contain a DNA fragment, and which genomes
//! are related to a query genome.
//!
//! Every k-mer of every genome in a library is stored in a trie. Fragment
//! searches look up the fragment's first k-mer, tolerating one substituted base
//! anywhere except the first, and extend each hit base by base into a full
//! match. Relatedness is scored by cutting a query genome into windows and
//! counting the fraction of windows each library genome matches.
//!
//! ## Features
//!
//! - **Fuzzy search**: One substitution tolerated per match, or exact-only
//! - **Longest match per genome**: Results are reconciled by genome name
//! - **Related genome ranking**: Coverage percentages, highest first
//! - **Strict loading**: Malformed library files are rejected as a whole
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{Genome, GenomeMatcher};
//!
//! let mut matcher = GenomeMatcher::new(4);
//! matcher.add_genome(Genome::new("X", "ACGTTGCA"));
//! matcher.add_genome(Genome::new("Y", "GGGGTGCA"));
//!
//! let query = Genome::new("query", "ACGTTGCA");
//! let mut results = Vec::new();
//! assert!(matcher.find_related_genomes(&query, 4, true, 40.0, &mut results));
//!
//! for m in &results {
//!     println!("{}: {:.1}%", m.genome_name, m.percent_match);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Genomes, result types, and configuration
//! - [`index`]: The fuzzy k-mer trie
//! - [`matching`]: Fragment search and relatedness scoring
//! - [`parsing`]: Strict genome library loader
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::config::MatcherConfig;
pub use core::genome::Genome;
pub use core::types::*;
pub use index::trie::Trie;
pub use matching::engine::GenomeMatcher;

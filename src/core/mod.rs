//! Core data types for genome search.
//!
//! - [`Genome`]: A named DNA sequence supporting bounded extraction
//! - [`SequenceAnchor`]: A `(genome, position)` pair stored in the k-mer index
//! - [`DnaMatch`], [`GenomeMatch`]: Result types returned by the matcher
//! - [`MatcherConfig`]: Search parameters, loadable from JSON

pub mod config;
pub mod genome;
pub mod types;

pub use config::MatcherConfig;
pub use genome::Genome;
pub use types::{DnaMatch, GenomeMatch, SequenceAnchor};

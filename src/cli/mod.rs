//! Command-line interface for genome-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find genomes in a library containing a DNA fragment
//! - **related**: Rank library genomes by how much of a query genome they cover
//! - **list**: Show the genomes in a library with their lengths and checksums
//!
//! ## Usage
//!
//! ```text
//! # Search a library for a fragment, allowing one substitution
//! genome-matcher search library.fa GAATACGATAC --min-length 10
//!
//! # Exact matches only, as JSON
//! genome-matcher search library.fa GAATACGATAC --exact --format json
//!
//! # Find genomes related to each genome in query.fa
//! genome-matcher related library.fa query.fa --fragment-length 20 --threshold 25
//!
//! # Use defaults from a config file
//! genome-matcher --config matcher.json related library.fa query.fa
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::config::MatcherConfig;
use crate::core::genome::Genome;
use crate::matching::engine::GenomeMatcher;
use crate::parsing::fasta::{is_fasta_file, parse_genome_file};

pub mod list;
pub mod related;
pub mod search;

#[derive(Parser)]
#[command(name = "genome-matcher")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Search genome libraries for DNA fragments and related genomes")]
#[command(
    long_about = "genome-matcher indexes every k-mer of a genome library and answers two questions:\n- Which genomes contain this fragment, exactly or with one substitution?\n- What percentage of a query genome does each library genome cover?"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// JSON file with default search parameters
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find genomes containing a DNA fragment
    Search(search::SearchArgs),

    /// Rank genomes by coverage of a query genome
    Related(related::RelatedArgs),

    /// List the genomes in a library
    List(list::ListArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the config file if one was given, defaults otherwise
///
/// # Errors
///
/// Returns an error if the config file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<MatcherConfig> {
    match path {
        Some(path) => Ok(MatcherConfig::load_from_file(path)?),
        None => Ok(MatcherConfig::default()),
    }
}

/// Load every genome from a library or query file
///
/// # Errors
///
/// Returns an error if the file extension is not a recognized genome format,
/// or the file cannot be read or is malformed.
pub fn load_genomes(path: &Path) -> anyhow::Result<Vec<Genome>> {
    if !is_fasta_file(path) {
        anyhow::bail!(
            "Unrecognized genome file extension: {} (expected .fa, .fasta, .fna or .txt, optionally .gz/.bgz)",
            path.display()
        );
    }
    parse_genome_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display()))
}

/// Load a genome library and index it with k-mers of `minimum_search_length`
///
/// # Errors
///
/// Returns an error if the library cannot be read or is malformed.
pub fn build_matcher(
    library: &Path,
    minimum_search_length: usize,
    verbose: bool,
) -> anyhow::Result<GenomeMatcher> {
    if minimum_search_length == 0 {
        anyhow::bail!("Window length must be at least 1");
    }

    let genomes = load_genomes(library)?;

    let mut matcher = GenomeMatcher::new(minimum_search_length);
    for genome in genomes {
        matcher.add_genome(genome);
    }

    if verbose {
        eprintln!(
            "Indexed {} genomes from {} (k-mer length {})",
            matcher.len(),
            library.display(),
            minimum_search_length
        );
    }

    Ok(matcher)
}

use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{build_matcher, load_config, load_genomes, OutputFormat};
use crate::core::genome::Genome;
use crate::core::types::GenomeMatch;
use crate::matching::engine::GenomeMatcher;

#[derive(Args)]
pub struct RelatedArgs {
    /// Genome library file (FASTA-style, optionally gzipped)
    #[arg(required = true)]
    pub library: PathBuf,

    /// File holding one or more query genomes
    #[arg(required = true)]
    pub query: PathBuf,

    /// Length of the k-mers indexed from the library
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Length of the non-overlapping windows each query is cut into
    #[arg(long)]
    pub fragment_length: Option<usize>,

    /// Only count windows matching without any substituted base
    #[arg(long)]
    pub exact: bool,

    /// Report genomes covering strictly more than this percentage (0-100)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Related genomes found for one query genome
#[derive(Debug, serde::Serialize)]
struct QueryResults {
    query: String,
    windows: usize,
    related: Vec<GenomeMatch>,
}

/// Execute related subcommand
///
/// # Errors
///
/// Returns an error if the config, library, or query file cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: RelatedArgs,
    format: OutputFormat,
    verbose: bool,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let window = args.window.unwrap_or(config.minimum_search_length);
    let fragment_match_length = args
        .fragment_length
        .unwrap_or_else(|| config.fragment_match_length.max(window));
    let exact_match_only = args.exact || config.exact_match_only;
    let threshold = args.threshold.unwrap_or(config.match_percent_threshold);

    if !(0.0..=100.0).contains(&threshold) {
        anyhow::bail!("Threshold must be between 0 and 100, got {threshold}");
    }

    let matcher = build_matcher(&args.library, window, verbose)?;
    let queries = load_genomes(&args.query)?;

    if verbose {
        eprintln!(
            "Scoring {} query genome(s) in {}-base windows (threshold {:.1}%)",
            queries.len(),
            fragment_match_length,
            threshold
        );
    }

    let results: Vec<QueryResults> = queries
        .iter()
        .map(|query| {
            score_query(
                &matcher,
                query,
                fragment_match_length,
                exact_match_only,
                threshold,
            )
        })
        .collect();

    if results.iter().all(|r| r.related.is_empty()) {
        eprintln!("No related genomes found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn score_query(
    matcher: &GenomeMatcher,
    query: &Genome,
    fragment_match_length: usize,
    exact_match_only: bool,
    threshold: f64,
) -> QueryResults {
    let mut related = Vec::new();
    matcher.find_related_genomes(
        query,
        fragment_match_length,
        exact_match_only,
        threshold,
        &mut related,
    );

    QueryResults {
        query: query.name().to_string(),
        windows: query.length().checked_div(fragment_match_length).unwrap_or(0),
        related,
    }
}

fn print_text_results(results: &[QueryResults]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({} windows)", result.query, result.windows);
        if result.related.is_empty() {
            println!("  No related genomes");
            continue;
        }
        for (rank, m) in result.related.iter().enumerate() {
            println!("  #{} {}: {:.2}%", rank + 1, m.genome_name, m.percent_match);
        }
    }
}

fn print_json_results(results: &[QueryResults]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

fn print_tsv_results(results: &[QueryResults]) {
    println!("query\tgenome_name\tpercent_match");
    for result in results {
        for m in &result.related {
            println!("{}\t{}\t{:.4}", result.query, m.genome_name, m.percent_match);
        }
    }
}

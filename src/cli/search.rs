use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{build_matcher, load_config, OutputFormat};
use crate::core::types::DnaMatch;
use crate::utils::validation::normalize_base;

#[derive(Args)]
pub struct SearchArgs {
    /// Genome library file (FASTA-style, optionally gzipped)
    #[arg(required = true)]
    pub library: PathBuf,

    /// DNA fragment to search for
    #[arg(required = true)]
    pub fragment: String,

    /// Length of the k-mers indexed from the library
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Shortest match to report (at least the window length)
    #[arg(short, long)]
    pub min_length: Option<usize>,

    /// Only report matches without any substituted base
    #[arg(long)]
    pub exact: bool,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the config or library cannot be loaded, or the fragment
/// holds characters other than `ACGTN`.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: SearchArgs,
    format: OutputFormat,
    verbose: bool,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let window = args.window.unwrap_or(config.minimum_search_length);
    let minimum_length = args.min_length.unwrap_or(config.minimum_length.max(window));
    let exact_match_only = args.exact || config.exact_match_only;

    let fragment = normalize_fragment(&args.fragment)?;
    let matcher = build_matcher(&args.library, window, verbose)?;

    if verbose {
        eprintln!(
            "Searching for {} bases (minimum match {}, {})",
            fragment.len(),
            minimum_length,
            if exact_match_only { "exact" } else { "one substitution allowed" }
        );
    }

    let mut matches = Vec::new();
    if !matcher.find_genomes_with_this_dna(
        &fragment,
        minimum_length,
        exact_match_only,
        &mut matches,
    ) {
        eprintln!("No genomes contain this fragment.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&fragment, &matches),
        OutputFormat::Json => print_json_results(&fragment, &matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

/// Upper-case a fragment given on the command line, rejecting non-DNA characters
fn normalize_fragment(fragment: &str) -> anyhow::Result<String> {
    fragment
        .bytes()
        .map(|b| normalize_base(b).map(char::from))
        .collect::<Option<String>>()
        .ok_or_else(|| {
            anyhow::anyhow!("Fragment '{fragment}' contains characters other than ACGTN")
        })
}

fn print_text_results(fragment: &str, matches: &[DnaMatch]) {
    println!(
        "{} genome(s) match the {}-base fragment:",
        matches.len(),
        fragment.len()
    );
    for m in matches {
        println!(
            "  {}: length {} at position {}",
            m.genome_name, m.length, m.position
        );
    }
}

fn print_json_results(fragment: &str, matches: &[DnaMatch]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "fragment": fragment,
        "matches": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[DnaMatch]) {
    println!("genome_name\tposition\tlength");
    for m in matches {
        println!("{}\t{}\t{}", m.genome_name, m.position, m.length);
    }
}

use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_genomes, OutputFormat};
use crate::core::genome::Genome;

#[derive(Args)]
pub struct ListArgs {
    /// Genome library file (FASTA-style, optionally gzipped)
    #[arg(required = true)]
    pub library: PathBuf,
}

/// Execute list subcommand
///
/// # Errors
///
/// Returns an error if the library cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ListArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let genomes = load_genomes(&args.library)?;

    if verbose {
        let total: usize = genomes.iter().map(Genome::length).sum();
        eprintln!("Loaded {} genomes ({total} bases)", genomes.len());
    }

    match format {
        OutputFormat::Text => {
            for (i, genome) in genomes.iter().enumerate() {
                println!(
                    "{:>4}. {} ({} bp, md5 {})",
                    i + 1,
                    genome.name(),
                    genome.length(),
                    genome.md5()
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = genomes
                .iter()
                .map(|genome| {
                    serde_json::json!({
                        "name": genome.name(),
                        "length": genome.length(),
                        "md5": genome.md5(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tlength\tmd5");
            for genome in &genomes {
                println!("{}\t{}\t{}", genome.name(), genome.length(), genome.md5());
            }
        }
    }

    Ok(())
}

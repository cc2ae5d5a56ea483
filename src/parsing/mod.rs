//! Loading genome libraries from text files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_matcher::parsing::fasta::{parse_genome_file, parse_genome_text};
//! use std::path::Path;
//!
//! // Load from a file (gzip is detected by extension)
//! let genomes = parse_genome_file(Path::new("library.fa")).unwrap();
//!
//! // Or from text already in memory
//! let genomes = parse_genome_text(">Genome 1\nACGTACGT\n").unwrap();
//! ```
//!
//! ## Format Rules
//!
//! | Line | Rule |
//! |------|------|
//! | Name | `>` followed by at least one character |
//! | Sequence | 1-80 bases from `ACGTN`, case-insensitive |
//!
//! Every name needs at least one sequence line after it. A single bad line
//! rejects the whole file.

pub mod fasta;

//! Strict loader for genome library files.
//!
//! The format is FASTA with tighter rules:
//! - every name line starts with `>` and has at least one character after it
//! - every sequence line holds 1 to 80 bases from `ACGTN`, in either case
//! - every name is followed by at least one sequence line
//!
//! Bases are upper-cased on load. Any violation rejects the whole input, so a
//! caller either gets every genome or none of them.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, `.txt` (uncompressed)
//! - any of the above with `.gz` or `.bgz` appended (gzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::genome::Genome;
use crate::utils::validation::{check_genome_limit, normalize_sequence_line};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No genomes found in input")]
    Empty,

    #[error("Line {line}: expected a name line starting with '>'")]
    MissingHeader { line: usize },

    #[error("Line {line}: genome name is empty")]
    EmptyName { line: usize },

    #[error("Line {line}: sequence lines must hold 1-80 bases from ACGTN")]
    InvalidSequenceLine { line: usize },

    #[error("Line {line}: genome '{name}' is not followed by any sequence")]
    MissingSequence { name: String, line: usize },

    #[error("{0}")]
    TooManyGenomes(String),
}

/// Check if the path has a genome library extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    let stripped = path_str
        .strip_suffix(".gz")
        .or_else(|| path_str.strip_suffix(".bgz"))
        .unwrap_or(&path_str);

    matches!(
        Path::new(stripped).extension().and_then(OsStr::to_str),
        Some("fa" | "fasta" | "fna" | "txt")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load every genome from a file, decompressing gzip input by extension.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the first format
/// violation found in its content.
pub fn parse_genome_file(path: &Path) -> Result<Vec<Genome>, ParseError> {
    let file = std::fs::File::open(path)?;
    let genomes = if is_gzipped(path) {
        parse_genome_reader(BufReader::new(GzDecoder::new(file)))?
    } else {
        parse_genome_reader(BufReader::new(file))?
    };

    debug!("Loaded {} genomes from {}", genomes.len(), path.display());
    Ok(genomes)
}

/// Load every genome from in-memory text
///
/// # Errors
///
/// Returns the first format violation found in `text`.
pub fn parse_genome_text(text: &str) -> Result<Vec<Genome>, ParseError> {
    parse_genome_reader(text.as_bytes())
}

/// Load every genome from a buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, `ParseError::Empty` for empty
/// input, `ParseError::TooManyGenomes` past
/// [`MAX_GENOMES`](crate::utils::validation::MAX_GENOMES), or the format
/// violation with its 1-based line number.
pub fn parse_genome_reader<R: BufRead>(reader: R) -> Result<Vec<Genome>, ParseError> {
    let mut genomes = Vec::new();
    // (name, bases, line of the name)
    let mut current: Option<(String, String, usize)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let line_number = index + 1;

        if let Some(name) = line.strip_prefix('>') {
            if name.is_empty() {
                return Err(ParseError::EmptyName { line: line_number });
            }
            if let Some(previous) = current.take() {
                push_genome(&mut genomes, previous)?;
            }
            current = Some((name.to_string(), String::new(), line_number));
            continue;
        }

        let Some((_, bases, _)) = current.as_mut() else {
            return Err(ParseError::MissingHeader { line: line_number });
        };
        let normalized = normalize_sequence_line(line)
            .ok_or(ParseError::InvalidSequenceLine { line: line_number })?;
        bases.push_str(&normalized);
    }

    let last = current.ok_or(ParseError::Empty)?;
    push_genome(&mut genomes, last)?;

    Ok(genomes)
}

fn push_genome(
    genomes: &mut Vec<Genome>,
    (name, bases, line): (String, String, usize),
) -> Result<(), ParseError> {
    if bases.is_empty() {
        return Err(ParseError::MissingSequence { name, line });
    }
    if let Some(message) = check_genome_limit(genomes.len()) {
        return Err(ParseError::TooManyGenomes(message));
    }
    genomes.push(Genome::new(name, bases));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("Ferroplasma.txt")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Reference.FA")));

        assert!(!is_fasta_file(Path::new("test.bam")));
        assert!(!is_fasta_file(Path::new("test.gz")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_parse_multiple_genomes() {
        let text = ">Genome 1\nacgtacgt\nACGT\n>Genome 2\nGGGGNNNN\n";
        let genomes = parse_genome_text(text).unwrap();

        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].name(), "Genome 1");
        assert_eq!(genomes[0].bases(), "ACGTACGTACGT");
        assert_eq!(genomes[1].name(), "Genome 2");
        assert_eq!(genomes[1].bases(), "GGGGNNNN");
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let genomes = parse_genome_text(">g\nACGT").unwrap();
        assert_eq!(genomes.len(), 1);
        assert_eq!(genomes[0].bases(), "ACGT");
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let genomes = parse_genome_text(">g\r\nACGT\r\nTTTT\r\n").unwrap();
        assert_eq!(genomes[0].name(), "g");
        assert_eq!(genomes[0].bases(), "ACGTTTTT");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_genome_text(""), Err(ParseError::Empty)));
    }

    #[test]
    fn test_parse_requires_leading_name() {
        let result = parse_genome_text("ACGT\n>g\nACGT\n");
        assert!(matches!(result, Err(ParseError::MissingHeader { line: 1 })));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let result = parse_genome_text(">\nACGT\n");
        assert!(matches!(result, Err(ParseError::EmptyName { line: 1 })));
    }

    #[test]
    fn test_parse_rejects_name_without_sequence() {
        let result = parse_genome_text(">a\n>b\nACGT\n");
        assert!(matches!(
            result,
            Err(ParseError::MissingSequence { ref name, line: 1 }) if name == "a"
        ));

        let result = parse_genome_text(">a\nACGT\n>b\n");
        assert!(matches!(
            result,
            Err(ParseError::MissingSequence { ref name, line: 3 }) if name == "b"
        ));
    }

    #[test]
    fn test_parse_rejects_bad_sequence_lines() {
        // Invalid base
        assert!(matches!(
            parse_genome_text(">g\nACGU\n"),
            Err(ParseError::InvalidSequenceLine { line: 2 })
        ));
        // Blank line
        assert!(matches!(
            parse_genome_text(">g\nACGT\n\nACGT\n"),
            Err(ParseError::InvalidSequenceLine { line: 3 })
        ));
        // Line too long
        let text = format!(">g\n{}\n", "A".repeat(81));
        assert!(matches!(
            parse_genome_text(&text),
            Err(ParseError::InvalidSequenceLine { line: 2 })
        ));
    }

    #[test]
    fn test_parse_is_all_or_nothing() {
        // First genome is fine, second is broken: nothing is returned
        let result = parse_genome_text(">ok\nACGT\n>broken\nACGX\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_too_many_genomes() {
        use crate::utils::validation::MAX_GENOMES;

        let at_limit = ">g\nA\n".repeat(MAX_GENOMES);
        assert_eq!(parse_genome_text(&at_limit).unwrap().len(), MAX_GENOMES);

        let over_limit = format!("{at_limit}>extra\nA\n");
        let err = parse_genome_text(&over_limit).unwrap_err();
        assert!(matches!(err, ParseError::TooManyGenomes(_)));
        assert!(err.to_string().contains("would exceed maximum of 100000"));
    }

    #[test]
    fn test_parse_genome_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGTACGT\nACGT\n>chr2\nGGGG\n").unwrap();
        temp.flush().unwrap();

        let genomes = parse_genome_file(temp.path()).unwrap();
        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].length(), 12);
        assert_eq!(genomes[1].length(), 4);
    }

    #[test]
    fn test_parse_gzipped_genome_file() {
        let temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        let mut encoder = GzEncoder::new(temp.reopen().unwrap(), Compression::default());
        encoder.write_all(b">chr1\nacgt\n").unwrap();
        encoder.finish().unwrap();

        let genomes = parse_genome_file(temp.path()).unwrap();
        assert_eq!(genomes.len(), 1);
        assert_eq!(genomes[0].bases(), "ACGT");
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_genome_file(Path::new("/nonexistent/library.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}

use serde::{Deserialize, Serialize};

/// Location of one indexed k-mer: which genome, and where in it.
///
/// Stored by value in the trie, so it never borrows from the genome collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceAnchor {
    /// Index of the genome in insertion order
    pub genome_index: usize,

    /// Start offset of the k-mer within that genome
    pub position: usize,
}

impl SequenceAnchor {
    #[must_use]
    pub fn new(genome_index: usize, position: usize) -> Self {
        Self {
            genome_index,
            position,
        }
    }
}

/// A stretch of a genome matching a query fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaMatch {
    /// Name of the matching genome
    pub genome_name: String,

    /// Start offset of the match within the genome
    pub position: usize,

    /// Number of consecutive bases matched from `position`
    pub length: usize,
}

/// How much of a query genome is covered by a reference genome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeMatch {
    /// Name of the reference genome
    pub genome_name: String,

    /// Percentage of query windows that matched this genome (0-100)
    pub percent_match: f64,
}

impl GenomeMatch {
    /// Ordering used for ranked results: higher percentage first, then name ascending.
    ///
    /// Returns `true` if `self` belongs before `other`.
    #[must_use]
    pub fn ranks_before(&self, other: &GenomeMatch) -> bool {
        #[allow(clippy::float_cmp)] // Percentages from identical counts compare exactly
        let tied = self.percent_match == other.percent_match;
        self.percent_match > other.percent_match || (tied && self.genome_name < other.genome_name)
    }
}

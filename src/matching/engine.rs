use std::collections::HashMap;

use tracing::{debug, trace};

use crate::core::config::MatcherConfig;
use crate::core::genome::Genome;
use crate::core::types::{DnaMatch, GenomeMatch, SequenceAnchor};
use crate::index::trie::Trie;
use crate::matching::extension::extend_match;
use crate::matching::scoring::{coverage_percentage, insert_ranked};

/// Index of genomes searchable by fragment, with one tolerated substitution.
///
/// Every k-mer of length [`GenomeMatcher::minimum_search_length`] of every added
/// genome is stored in a trie. Genomes are only ever added; [`GenomeMatcher::reset`]
/// is the only way to shrink the index.
///
/// Query methods follow a single success channel: they append to a caller-provided
/// vector and return `true` if anything was appended. Invalid arguments and an
/// honest lack of matches both return `false`.
#[derive(Debug, Clone)]
pub struct GenomeMatcher {
    minimum_search_length: usize,
    genomes: Vec<Genome>,
    kmers: Trie<SequenceAnchor>,
}

impl GenomeMatcher {
    /// Create an empty matcher indexing k-mers of `minimum_search_length` bases.
    ///
    /// `minimum_search_length` must be at least 1.
    #[must_use]
    pub fn new(minimum_search_length: usize) -> Self {
        debug_assert!(minimum_search_length > 0, "k-mer length must be at least 1");
        Self {
            minimum_search_length,
            genomes: Vec::new(),
            kmers: Trie::new(),
        }
    }

    /// Create an empty matcher using the k-mer length from `config`
    #[must_use]
    pub fn with_config(config: &MatcherConfig) -> Self {
        Self::new(config.minimum_search_length)
    }

    #[must_use]
    pub fn minimum_search_length(&self) -> usize {
        self.minimum_search_length
    }

    /// Genomes in the order they were added
    #[must_use]
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Drop every genome and the whole index
    pub fn reset(&mut self) {
        self.genomes.clear();
        self.kmers.reset();
    }

    /// Add a genome and index each of its k-mers.
    ///
    /// A genome shorter than the k-mer length is kept but contributes nothing to
    /// the index, so fragment searches never find it.
    pub fn add_genome(&mut self, genome: Genome) {
        let genome_index = self.genomes.len();
        let window = self.minimum_search_length;

        let kmer_count = (genome.length() + 1).saturating_sub(window);
        for position in 0..kmer_count {
            if let Some(kmer) = genome.extract(position, window) {
                self.kmers
                    .insert(kmer, SequenceAnchor::new(genome_index, position));
            }
        }

        debug!(
            "Indexed genome '{}' ({} bases, {} k-mers, {} trie nodes)",
            genome.name(),
            genome.length(),
            kmer_count,
            self.kmers.node_count()
        );
        self.genomes.push(genome);
    }

    /// Find genomes containing `fragment`, or a prefix of it at least `minimum_length` long.
    ///
    /// Candidates come from looking up the first k-mer of `fragment`; each is then
    /// extended base by base. Unless `exact_match_only` is set, one substitution is
    /// tolerated per match, never at the first base. At most one match per genome
    /// name is kept, the longest one found first.
    ///
    /// Appends to `matches` and returns `true` if at least one match was found.
    /// Returns `false` without touching `matches` if `fragment` is shorter than
    /// `minimum_length` or `minimum_length` is below the k-mer length.
    pub fn find_genomes_with_this_dna(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_match_only: bool,
        matches: &mut Vec<DnaMatch>,
    ) -> bool {
        if fragment.len() < minimum_length || minimum_length < self.minimum_search_length {
            return false;
        }
        let Some(probe) = fragment.get(..self.minimum_search_length) else {
            return false;
        };

        let anchors = self.kmers.find(probe, exact_match_only);
        trace!("Probe {} produced {} anchors", probe, anchors.len());

        let mut found: Vec<DnaMatch> = Vec::new();
        let mut by_name: HashMap<&str, usize> = HashMap::new();

        for anchor in anchors {
            let genome = &self.genomes[anchor.genome_index];
            let length = extend_match(fragment, genome, anchor.position, exact_match_only);

            if let Some(&existing) = by_name.get(genome.name()) {
                if length > found[existing].length {
                    found[existing].position = anchor.position;
                    found[existing].length = length;
                }
            } else if length >= minimum_length {
                by_name.insert(genome.name(), found.len());
                found.push(DnaMatch {
                    genome_name: genome.name().to_string(),
                    position: anchor.position,
                    length,
                });
            }
        }

        let success = !found.is_empty();
        matches.extend(found);
        success
    }

    /// Rank genomes by how much of `query` they cover.
    ///
    /// `query` is cut into non-overlapping windows of `fragment_match_length`
    /// bases (a shorter tail is ignored) and each window is searched with
    /// [`GenomeMatcher::find_genomes_with_this_dna`]. A genome's score is the
    /// percentage of windows it matched; genomes scoring strictly above
    /// `match_percent_threshold` are appended to `results`, highest first and
    /// ties by name.
    ///
    /// Returns `true` if any genome qualified. Returns `false` if
    /// `fragment_match_length` is below the k-mer length or the query holds no
    /// complete window.
    pub fn find_related_genomes(
        &self,
        query: &Genome,
        fragment_match_length: usize,
        exact_match_only: bool,
        match_percent_threshold: f64,
        results: &mut Vec<GenomeMatch>,
    ) -> bool {
        if fragment_match_length < self.minimum_search_length || fragment_match_length == 0 {
            return false;
        }

        let window_count = query.length() / fragment_match_length;
        if window_count == 0 {
            return false;
        }

        let mut pooled = Vec::new();
        for window in 0..window_count {
            let start = window * fragment_match_length;
            if let Some(fragment) = query.extract(start, fragment_match_length) {
                self.find_genomes_with_this_dna(
                    fragment,
                    fragment_match_length,
                    exact_match_only,
                    &mut pooled,
                );
            }
        }
        debug!(
            "Query '{}' split into {} windows, {} window matches",
            query.name(),
            window_count,
            pooled.len()
        );

        let mut ranked = Vec::new();
        for genome in &self.genomes {
            let percent_match = coverage_percentage(&pooled, genome.name(), window_count);
            if percent_match > match_percent_threshold {
                insert_ranked(
                    &mut ranked,
                    GenomeMatch {
                        genome_name: genome.name().to_string(),
                        percent_match,
                    },
                );
            }
        }

        let success = !ranked.is_empty();
        results.extend(ranked);
        success
    }
}

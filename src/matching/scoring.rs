use crate::core::types::{DnaMatch, GenomeMatch};

/// Safely convert usize to f64 for percentage calculations
///
/// Window and match counts stay far below the f64 mantissa limit.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Percentage of `window_count` query windows matched by the genome called `genome_name`.
///
/// Every pooled match carrying that name counts, so genomes sharing a name share a score.
/// Returns 0 when there are no windows.
#[must_use]
pub fn coverage_percentage(pooled: &[DnaMatch], genome_name: &str, window_count: usize) -> f64 {
    if window_count == 0 {
        return 0.0;
    }
    let hits = pooled
        .iter()
        .filter(|m| m.genome_name == genome_name)
        .count();
    count_to_f64(hits) / count_to_f64(window_count) * 100.0
}

/// Insert `candidate` into `ranked`, keeping descending percentage with ties by ascending name.
///
/// `candidate` goes in front of the first entry it ranks before, so entries that
/// compare equal keep their insertion order.
pub fn insert_ranked(ranked: &mut Vec<GenomeMatch>, candidate: GenomeMatch) {
    let index = ranked
        .iter()
        .position(|existing| candidate.ranks_before(existing))
        .unwrap_or(ranked.len());
    ranked.insert(index, candidate);
}

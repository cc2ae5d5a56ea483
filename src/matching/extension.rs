use crate::core::genome::Genome;

/// Count how many bases of `fragment` match `genome` starting at `position`.
///
/// Compares over the overlap `min(fragment.len(), genome.length() - position)`.
/// Unless `exact_match_only` is set, the first mismatch is tolerated and counted
/// as part of the match; the next one ends it. In exact mode the first mismatch
/// ends it. A `position` past the end of the genome yields zero.
#[must_use]
pub fn extend_match(
    fragment: &str,
    genome: &Genome,
    position: usize,
    exact_match_only: bool,
) -> usize {
    let overlap = fragment.len().min(genome.length().saturating_sub(position));
    let Some(window) = genome.extract(position, overlap) else {
        return 0;
    };

    let mut mismatch_spent = exact_match_only;
    let mut length = 0;
    for (query_base, genome_base) in fragment.bytes().zip(window.bytes()) {
        if query_base != genome_base {
            if mismatch_spent {
                break;
            }
            mismatch_spent = true;
        }
        length += 1;
    }
    length
}

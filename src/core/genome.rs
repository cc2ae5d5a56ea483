use serde::{Deserialize, Serialize};

/// A named DNA sequence.
///
/// Bases are stored exactly as given; genomes produced by the loader in
/// [`crate::parsing::fasta`] are guaranteed to be uppercase and restricted to
/// `A`, `C`, `G`, `T` and `N`. A genome never changes after construction, and
/// cloning one yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    /// Name taken from the header line, without the leading `>`
    name: String,

    /// The sequence itself
    bases: String,
}

impl Genome {
    pub fn new(name: impl Into<String>, bases: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: bases.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bases(&self) -> &str {
        &self.bases
    }

    /// Number of bases in the sequence
    #[must_use]
    pub fn length(&self) -> usize {
        self.bases.len()
    }

    /// Extract `length` bases starting at `position`.
    ///
    /// Returns `None` unless the whole window `[position, position + length)`
    /// lies inside the sequence. A partial window is never returned.
    #[must_use]
    pub fn extract(&self, position: usize, length: usize) -> Option<&str> {
        let end = position.checked_add(length)?;
        if end > self.bases.len() {
            return None;
        }
        self.bases.get(position..end)
    }

    /// MD5 checksum of the uppercase sequence, as lowercase hex
    #[must_use]
    pub fn md5(&self) -> String {
        let uppercase: Vec<u8> = self.bases.bytes().map(|b| b.to_ascii_uppercase()).collect();
        format!("{:x}", md5::compute(&uppercase))
    }
}

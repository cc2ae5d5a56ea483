//! K-mer index over genome collections.
//!
//! [`Trie`] maps fixed-length keys to every value inserted under them and
//! supports lookups that tolerate one substituted base. The matcher stores a
//! [`crate::core::SequenceAnchor`] for each k-mer of each genome it indexes.
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::index::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("ACGT", 1);
//! trie.insert("ACTT", 2);
//!
//! assert_eq!(trie.find("ACGT", true), vec![1]);
//! assert_eq!(trie.find("ACGT", false), vec![1, 2]);
//! ```

pub mod trie;

pub use trie::Trie;

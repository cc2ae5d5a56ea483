//! Prefix tree mapping fixed-length keys to multisets of values.
//!
//! Lookups can tolerate a single substituted character anywhere except the
//! first position of the key, which always has to match exactly.

const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct Node<V> {
    /// Character on the edge leading into this node (unused for the root)
    label: u8,

    /// Values whose key ends at this node, in insertion order
    values: Vec<V>,

    /// Arena indices of child nodes, in insertion order
    children: Vec<usize>,
}

impl<V> Node<V> {
    fn new(label: u8) -> Self {
        Self {
            label,
            values: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A trie whose nodes live in a single arena.
///
/// Each parent exclusively owns the indices of its children, so the structure
/// is a strict tree and dropping it never recurses.
#[derive(Debug, Clone)]
pub struct Trie<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
        }
    }

    /// Discard every key and value
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::new(0));
    }

    /// True if nothing has been inserted since creation or the last reset
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[ROOT].values.is_empty()
    }

    /// Number of nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Store `value` under `key`. Repeated inserts at one key accumulate.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut current = ROOT;
        for &label in key.as_bytes() {
            current = match self.child(current, label) {
                Some(child) => child,
                None => self.add_child(current, label),
            };
        }
        self.nodes[current].values.push(value);
    }

    fn child(&self, node: usize, label: u8) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].label == label)
    }

    fn add_child(&mut self, node: usize, label: u8) -> usize {
        let child = self.nodes.len();
        self.nodes.push(Node::new(label));
        self.nodes[node].children.push(child);
        child
    }
}

impl<V: Clone> Trie<V> {
    /// Return every value stored under `key` or under a key one substitution away.
    ///
    /// The first character must always match. With `exact_match_only` no
    /// substitution is allowed at all. Values are returned in a deterministic
    /// order: depth-first over children in the order they were created.
    /// An empty key matches nothing.
    #[must_use]
    pub fn find(&self, key: &str, exact_match_only: bool) -> Vec<V> {
        let mut values = Vec::new();
        let Some((&first, rest)) = key.as_bytes().split_first() else {
            return values;
        };

        if let Some(child) = self.child(ROOT, first) {
            self.collect(child, rest, exact_match_only, &mut values);
        }
        values
    }

    /// Walk below `node` following `key`. Once `mismatch_spent` is set every
    /// remaining character on that branch has to match exactly.
    fn collect(&self, node: usize, key: &[u8], mismatch_spent: bool, values: &mut Vec<V>) {
        let Some((&next, rest)) = key.split_first() else {
            values.extend_from_slice(&self.nodes[node].values);
            return;
        };

        for &child in &self.nodes[node].children {
            if self.nodes[child].label == next {
                self.collect(child, rest, mismatch_spent, values);
            } else if !mismatch_spent {
                self.collect(child, rest, true, values);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trie() -> Trie<i32> {
        let mut trie = Trie::new();
        trie.insert("hit", 1);
        trie.insert("hit", 2);
        trie.insert("hip", 10);
        trie.insert("hip", 20);
        trie.insert("hat", 7);
        trie.insert("hat", 8);
        trie.insert("hat", 9);
        trie.insert("a", 14);
        trie.insert("to", 22);
        trie.insert("to", 23);
        trie.insert("tap", 19);
        trie.insert("tap", 6);
        trie.insert("tap", 32);
        trie
    }

    #[test]
    fn test_find_exact() {
        let trie = sample_trie();
        assert_eq!(trie.find("hit", true), vec![1, 2]);
        assert_eq!(trie.find("tap", true), vec![19, 6, 32]);
        assert_eq!(trie.find("a", true), vec![14]);
        assert!(trie.find("hot", true).is_empty());
    }

    #[test]
    fn test_find_fuzzy_allows_one_substitution() {
        let trie = sample_trie();
        assert_eq!(trie.find("hit", false), vec![1, 2, 10, 20, 7, 8, 9]);
    }

    #[test]
    fn test_find_fuzzy_never_substitutes_first_character() {
        let trie = sample_trie();
        assert!(trie.find("sit", false).is_empty());
        assert!(trie.find("b", false).is_empty());
    }

    #[test]
    fn test_find_fuzzy_allows_only_one_substitution() {
        let trie = sample_trie();
        // "hop" is one away from "hip" but two away from "hit" and "hat"
        assert_eq!(trie.find("hop", false), vec![10, 20]);
        assert!(trie.find("hxx", false).is_empty());
    }

    #[test]
    fn test_find_respects_key_length() {
        let trie = sample_trie();
        // "to" and "ta" lead to different depths than "tap"
        assert_eq!(trie.find("to", true), vec![22, 23]);
        assert_eq!(trie.find("ta", false), vec![22, 23]);
    }

    #[test]
    fn test_insert_accumulates_duplicates() {
        let mut trie = Trie::new();
        trie.insert("ACGT", 'x');
        trie.insert("ACGT", 'x');
        assert_eq!(trie.find("ACGT", true), vec!['x', 'x']);
    }

    #[test]
    fn test_empty_key_matches_nothing() {
        let trie = sample_trie();
        assert!(trie.find("", false).is_empty());
    }

    #[test]
    fn test_reset() {
        let mut trie = sample_trie();
        assert!(!trie.is_empty());
        assert!(trie.node_count() > 1);

        trie.reset();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.find("hit", false).is_empty());

        trie.insert("hit", 5);
        assert_eq!(trie.find("hit", true), vec![5]);
    }

    #[test]
    fn test_dna_keys() {
        let mut trie = Trie::new();
        trie.insert("ACGT", 0);
        trie.insert("ACTT", 1);
        trie.insert("TCGT", 2);

        assert_eq!(trie.find("ACGT", true), vec![0]);
        assert_eq!(trie.find("ACGT", false), vec![0, 1]);
        // TCGT differs only at index 0
        assert_eq!(trie.find("TCGT", false), vec![2]);
    }
}

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

struct Node<I> {
    children: HashMap<char, Node<I>>,
    ids: HashSet<I>,
    end_of_word: bool,
}

impl<I> Node<I> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            ids: HashSet::new(),
            end_of_word: false,
        }
    }
}

/// Character-keyed prefix tree mapping strings to sets of identifiers.
///
/// Every node along an inserted string's path carries the union of the ids of
/// all strings passing through it, so a prefix lookup reads one pre-aggregated
/// set instead of walking a subtree. The tree only ever grows.
pub struct PrefixTree<I> {
    root: Node<I>,
}

impl<I: Clone + Eq + Hash> PrefixTree<I> {
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Associate `id` with `text`, registering it at every prefix node along
    /// the way (the root included, so the empty prefix matches everything).
    pub fn insert(&mut self, text: &str, id: I) {
        self.root.ids.insert(id.clone());
        let mut node = &mut self.root;
        for ch in text.chars() {
            node = node.children.entry(ch).or_insert_with(Node::new);
            node.ids.insert(id.clone());
        }
        node.end_of_word = true;
    }

    /// Ids of every inserted string starting with `prefix`. An unmatched
    /// character yields an empty set, never a partial match.
    pub fn search(&self, prefix: &str) -> HashSet<I> {
        match self.walk(prefix) {
            Some(node) => node.ids.clone(),
            None => HashSet::new(),
        }
    }

    /// Whether `word` was inserted as a complete string, not just a prefix.
    pub fn contains_word(&self, word: &str) -> bool {
        self.walk(word).map_or(false, |node| node.end_of_word)
    }

    fn walk(&self, prefix: &str) -> Option<&Node<I>> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

impl<I: Clone + Eq + Hash> Default for PrefixTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

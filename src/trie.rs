use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use log::debug;

use crate::error::{Result, StructureError};

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode, FnvBuildHasher>,
    is_word: bool,
}

impl TrieNode {
    /// Number of letter nodes below this one.
    fn count(&self) -> usize {
        self.children.values().map(|c| 1 + c.count()).sum()
    }

    fn collect(&self, prefix: &mut String, out: &mut Vec<String>) {
        if self.is_word {
            out.push(prefix.clone());
        }
        for (&c, child) in &self.children {
            prefix.push(c);
            child.collect(prefix, out);
            prefix.pop();
        }
    }

    /// Clears the word flag at the end of `rest`, dropping nodes that no
    /// longer lead to a word. Returns true if this node should be dropped.
    fn remove(&mut self, rest: &[char]) -> bool {
        match rest.split_first() {
            None => self.is_word = false,
            Some((c, tail)) => {
                let prune = self.children.get_mut(c).is_some_and(|child| child.remove(tail));
                if prune {
                    self.children.remove(c);
                    debug!("trie: pruned branch at '{}'", c);
                }
            }
        }
        !self.is_word && self.children.is_empty()
    }
}

/// A character trie of whole words.
///
/// `len` counts letter nodes rather than words: "hello" and "hey" share
/// "he" and give 6.
#[derive(Clone, Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word`. Empty words and words containing whitespace are invalid.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(StructureError::InvalidWord(word.to_owned()));
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.is_word {
            return Err(StructureError::WordExists(word.to_owned()));
        }
        node.is_word = true;
        Ok(())
    }

    /// Inserts every word; returns the last failure, if any.
    pub fn insert_all<'a, I: IntoIterator<Item = &'a str>>(&mut self, words: I) -> Result<()> {
        let mut outcome = Ok(());
        for word in words {
            if let Err(e) = self.insert(word) {
                outcome = Err(e);
            }
        }
        outcome
    }

    /// True if some stored word starts with `prefix`. Always false on an empty trie.
    pub fn validate_prefix(&self, prefix: &str) -> bool {
        !self.is_empty() && self.walk(prefix).is_some()
    }

    pub fn validate_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| n.is_word)
    }

    /// Every stored word beginning with `prefix`, sorted.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.walk(prefix) {
            let mut buf = prefix.to_owned();
            node.collect(&mut buf, &mut out);
        }
        out.sort_unstable();
        out
    }

    /// Removes `word` and any nodes left without a word below them.
    pub fn remove(&mut self, word: &str) -> Result<()> {
        if !self.validate_word(word) {
            return Err(StructureError::not_found(word));
        }
        let letters: Vec<char> = word.chars().collect();
        self.root.remove(&letters);
        Ok(())
    }

    /// Number of letter nodes, root excluded.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::default();
    }

    fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

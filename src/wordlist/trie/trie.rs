use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet;
use crate::wordlist::error::DictError;
use crate::wordlist::trie::node::TrieNode;

/// Prefix tree over the lowercase alphabet. Every inserted word ends at a
/// terminal node carrying its occurrence count. The trie owns its root
/// inline and every other node through the arena, so dropping it releases
/// the whole tree at once.
pub struct Trie<'a> {
    root: TrieNode<'a>,
    arena: Arena<TrieNode<'a>>,
}

impl Trie<'_> {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
            arena: Arena::new(),
        }
    }
}

impl<'a> Trie<'a> {
    pub fn insert(&'a self, word: &str) -> Result<(), DictError> {
        self.insert_with_count(word, 1)
    }

    pub fn insert_all<'f, I>(&'a self, items: I) -> Result<(), DictError>
    where
        I: IntoIterator<Item = &'f str>,
    {
        for word in items {
            self.insert(word)?;
        }
        Ok(())
    }

    /// One insertion contributing `n` occurrences. The whole word is
    /// validated before any node is created, so a rejected word leaves the
    /// node set untouched. `n == 0` is a no-op, keeping nodes terminal
    /// exactly when their count is positive.
    pub fn insert_with_count(&'a self, word: &str, n: usize) -> Result<(), DictError> {
        let indices = letter_indices(word)?;
        if n == 0 {
            return Ok(());
        }
        let mut current = &self.root;
        for idx in indices {
            current = current.get_or_create_child(idx, &self.arena);
        }
        current.is_terminal.set(true);
        current.count.set(current.count.get() + n);
        Ok(())
    }

    /// Number of times `word` was inserted; 0 when it never was, even if
    /// other words pass through its prefix nodes.
    pub fn occurrences(&self, word: &str) -> Result<usize, DictError> {
        let indices = letter_indices(word)?;
        let mut current = &self.root;
        for idx in indices {
            current = match current.get_child(idx) {
                Some(child) => child,
                None => return Ok(0),
            };
        }
        if current.is_terminal.get() {
            Ok(current.count.get())
        } else {
            Ok(0)
        }
    }

    pub fn contains(&self, word: &str) -> Result<bool, DictError> {
        Ok(self.occurrences(word)? > 0)
    }

    /// Every (word, count) pair, in lexicographic order.
    pub fn words(&self) -> Vec<(String, usize)> {
        let mut results = Vec::new();
        let mut prefix = String::new();
        collect(&self.root, &mut prefix, &mut results);
        results
    }

    /// Live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.len() + 1
    }
}

fn collect(node: &TrieNode<'_>, prefix: &mut String, results: &mut Vec<(String, usize)>) {
    if node.is_terminal.get() {
        results.push((prefix.clone(), node.count.get()));
    }
    for (c, child) in node.iter_children() {
        prefix.push(c);
        collect(child, prefix, results);
        prefix.pop();
    }
}

fn letter_indices(word: &str) -> Result<Vec<usize>, DictError> {
    word.chars()
        .map(|c| {
            alphabet::index(c).ok_or_else(|| DictError::InvalidCharacter {
                word: word.to_string(),
                ch: c,
            })
        })
        .collect()
}

impl Debug for Trie<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.words()).finish()
    }
}

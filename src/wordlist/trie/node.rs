use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::{letter, ALPHABET};

/// One prefix position. Invariant: `count > 0` exactly when `is_terminal`.
#[derive(Default)]
pub(crate) struct TrieNode<'a> {
    pub(crate) children: [Cell<Option<&'a TrieNode<'a>>>; ALPHABET.len()],
    pub(crate) is_terminal: Cell<bool>,
    pub(crate) count: Cell<usize>,
}

impl<'a> TrieNode<'a> {
    pub(crate) fn get_child(&self, idx: usize) -> Option<&'a TrieNode<'a>> {
        self.children[idx].get()
    }

    pub(crate) fn get_or_create_child(
        &self,
        idx: usize,
        arena: &'a Arena<TrieNode<'a>>,
    ) -> &'a TrieNode<'a> {
        if self.children[idx].get().is_none() {
            self.children[idx].set(Some(arena.alloc(TrieNode::default())));
        }
        self.children[idx].get().unwrap()
    }

    pub(crate) fn iter_children(&self) -> impl Iterator<Item = (char, &'a TrieNode<'a>)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.get().map(|child| (letter(idx), child)))
    }
}

impl Debug for TrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal.get())
            .field("count", &self.count.get())
            .field(
                "children",
                &self.iter_children().map(|(c, _)| c).collect::<Vec<_>>(),
            )
            .finish()
    }
}

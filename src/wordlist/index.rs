use crate::wordlist::error::DictError;
use crate::wordlist::trie::Trie;

/// Contract between a word-source and the dictionary index: words go in
/// through `add`, occurrence counts come back out through `count`.
pub trait Index {
    fn add(&self, word: &str) -> Result<(), DictError>;
    fn count(&self, word: &str) -> Result<usize, DictError>;

    fn contains(&self, word: &str) -> Result<bool, DictError> {
        Ok(self.count(word)? > 0)
    }

    fn add_all<'f, I>(&self, items: I) -> Result<(), DictError>
    where
        I: IntoIterator<Item = &'f str>,
        Self: Sized,
    {
        for word in items {
            self.add(word)?;
        }
        Ok(())
    }
}

impl<'a> Index for &'a Trie<'a> {
    fn add(&self, word: &str) -> Result<(), DictError> {
        Trie::insert(*self, word)
    }

    fn count(&self, word: &str) -> Result<usize, DictError> {
        Trie::occurrences(*self, word)
    }
}

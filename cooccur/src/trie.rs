//! Case-insensitive prefix tree over the English alphabet.
mod iter;
mod node;

pub use iter::Iter;
pub use node::TrieNode;

use crate::errors::{CooccurError, Result};

/// Prefix tree keyed by the 26 English letters.
///
/// Letters are folded to lowercase on every operation, so `"Cat"` and `"cat"` reach the same
/// node. A node holds the number of times the word ending there was inserted, and optionally a
/// nested trie (the *subtrie*) attached by [`Indexer`](crate::Indexer) to record the words
/// co-occurring with it.
#[derive(Default, Debug)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word, incrementing its frequency by one.
    ///
    /// # Arguments
    ///
    ///  - `word`: A non-empty sequence of English letters in any case.
    ///
    /// # Returns
    ///
    /// The frequency of the word after the insertion.
    ///
    /// # Errors
    ///
    /// [`CooccurError`] is returned when `word` is empty or contains a character other than
    /// `A-Z` and `a-z`, or when its frequency would exceed [`u32::MAX`]. The frequency is left
    /// untouched in that case.
    pub fn insert<S>(&mut self, word: S) -> Result<u32>
    where
        S: AsRef<str>,
    {
        let word = word.as_ref();
        let node = self.entry(word)?;
        node.count = node.count.checked_add(1).ok_or_else(|| {
            CooccurError::invalid_argument("word", format!("the frequency of {word:?} overflowed"))
        })?;
        Ok(node.count)
    }

    /// Walks the path of `word`, creating the missing nodes, and returns its last node.
    pub(crate) fn entry(&mut self, word: &str) -> Result<&mut TrieNode> {
        validate_word(word)?;
        let mut node = &mut self.root;
        for b in word.bytes() {
            node = node.children[letter_index(b)].get_or_insert_with(Box::default).as_mut();
        }
        Ok(node)
    }

    /// Looks up the terminal node of an inserted word.
    ///
    /// Returns [`None`] if `word` was never inserted, even when it is a prefix of an inserted
    /// word.
    pub fn get<S>(&self, word: S) -> Option<&TrieNode>
    where
        S: AsRef<str>,
    {
        let mut node = &self.root;
        for b in word.as_ref().bytes() {
            if !b.is_ascii_alphabetic() {
                return None;
            }
            node = node.children[letter_index(b)].as_deref()?;
        }
        (node.count > 0).then_some(node)
    }

    pub(crate) fn get_mut(&mut self, word: &str) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for b in word.bytes() {
            if !b.is_ascii_alphabetic() {
                return None;
            }
            node = node.children[letter_index(b)].as_deref_mut()?;
        }
        (node.count > 0).then_some(node)
    }

    /// Gets the frequency of a word, or 0 if it was never inserted.
    pub fn count<S>(&self, word: S) -> u32
    where
        S: AsRef<str>,
    {
        self.get(word).map_or(0, TrieNode::count)
    }

    /// Creates an iterator over the inserted words and their frequencies in alphabetical order.
    ///
    /// Words are yielded in lowercase.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Checks if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.num_words() == 0
    }

    /// Gets the number of distinct words.
    pub fn num_words(&self) -> usize {
        self.root.num_words()
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = (String, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(CooccurError::invalid_argument("word", "must not be empty"));
    }
    if let Some(c) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        let msg = format!("{word:?} contains a non-alphabetic character {c:?}");
        return Err(CooccurError::invalid_argument("word", msg));
    }
    Ok(())
}

/// Maps an ASCII letter to its child slot. The input must be alphabetic.
#[inline(always)]
fn letter_index(b: u8) -> usize {
    debug_assert!(b.is_ascii_alphabetic());
    usize::from(b.to_ascii_lowercase() - b'a')
}

use crate::common::ALPHABET_SIZE;
use crate::trie::Trie;

/// Node of [`Trie`].
#[derive(Default, Debug)]
pub struct TrieNode {
    pub(super) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    pub(super) count: u32,
    pub(super) subtrie: Option<Box<Trie>>,
}

impl TrieNode {
    /// Gets the number of times the word ending at this node was inserted.
    #[inline(always)]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Gets the co-occurrence trie of the word ending at this node.
    ///
    /// Returns [`None`] if the word has not co-occurred with any other word.
    #[inline(always)]
    pub fn subtrie(&self) -> Option<&Trie> {
        self.subtrie.as_deref()
    }

    /// Gets the co-occurrence trie, creating it on first use.
    pub(crate) fn subtrie_mut(&mut self) -> &mut Trie {
        self.subtrie.get_or_insert_with(Box::default)
    }

    #[inline(always)]
    pub(super) fn child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(super) fn num_words(&self) -> usize {
        let below: usize = self.children.iter().flatten().map(|c| c.num_words()).sum();
        below + usize::from(self.count > 0)
    }
}

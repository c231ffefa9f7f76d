use crate::common::ALPHABET_SIZE;
use crate::trie::TrieNode;

/// Iterator over the words of a [`Trie`](super::Trie) in alphabetical order.
///
/// Yields pairs of a lowercase word and its frequency. The traversal is a depth-first walk
/// visiting children from `a` to `z`, kept on an explicit stack, so no sorting takes place.
pub struct Iter<'a> {
    root: Option<&'a TrieNode>,
    // Pairs of a node on the current path and the next child slot to visit.
    stack: Vec<(&'a TrieNode, usize)>,
    word: String,
}

impl<'a> Iter<'a> {
    pub(super) fn new(root: &'a TrieNode) -> Self {
        Self {
            root: Some(root),
            stack: vec![],
            word: String::new(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (String, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push((root, 0));
            if root.count() > 0 {
                return Some((String::new(), root.count()));
            }
        }

        while let Some((node, next)) = self.stack.last_mut() {
            let node: &'a TrieNode = *node;
            let found = (*next..ALPHABET_SIZE).find_map(|i| node.child(i).map(|c| (i, c)));
            let Some((i, child)) = found else {
                self.stack.pop();
                self.word.pop();
                continue;
            };
            *next = i + 1;
            self.word.push(letter(i));
            self.stack.push((child, 0));
            if child.count() > 0 {
                return Some((self.word.clone(), child.count()));
            }
        }
        None
    }
}

#[inline(always)]
fn letter(idx: usize) -> char {
    debug_assert!(idx < ALPHABET_SIZE);
    char::from(b'a' + idx as u8)
}

//! Common settings in Cooccur.

/// Number of letters in the English alphabet, i.e., the branching factor of a trie node.
pub const ALPHABET_SIZE: usize = 26;

/// Leading character of the token that ends a sentence in a corpus.
pub const SENTENCE_TERMINATOR: char = '.';

/// Query token requesting the listing of all indexed words.
pub const LIST_ALL_DIRECTIVE: &str = "!";

/// Maximum number of words in a sentence accepted by the original corpus format.
pub const DEFAULT_MAX_SENTENCE_LEN: usize = 20;

/// Maximum number of characters in a word accepted by the original corpus format.
pub const DEFAULT_MAX_WORD_LEN: usize = 1023;

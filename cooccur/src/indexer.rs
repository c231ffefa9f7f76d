//! Word frequency and co-occurrence indexer.
//!
//! Indexing runs in two phases. The frequency phase inserts every token of every sentence into
//! the main trie. The co-occurrence phase then revisits each sentence and, for the first
//! occurrence of each distinct word, inserts every other token of the sentence into that word's
//! subtrie. Partners are not deduplicated, so a partner appearing three times in a sentence adds
//! three to its count. The co-occurrence phase looks words up in the main trie, so it must only
//! start after the frequency phase has seen the whole corpus.
use hashbrown::HashSet;

use crate::corpus::Corpus;
use crate::errors::{CooccurError, Result};
use crate::trie::{Iter, Trie};

/// Builder of an [`Index`].
///
/// [`Index::from_sentences`] drives both phases for an in-memory corpus. Use this type directly
/// to stream sentences, calling [`Indexer::count_sentence`] for all of them before the first
/// [`Indexer::link_sentence`].
#[derive(Default)]
pub struct Indexer {
    trie: Trie,
    num_tokens: usize,
    num_skipped: usize,
}

impl Indexer {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the word frequencies of a sentence.
    ///
    /// Tokens that are not a word of English letters are skipped.
    ///
    /// # Returns
    ///
    /// The number of tokens counted.
    pub fn count_sentence<W>(&mut self, sentence: &[W]) -> usize
    where
        W: AsRef<str>,
    {
        let mut counted = 0;
        for token in sentence {
            let token = token.as_ref();
            match self.trie.insert(token) {
                Ok(_) => counted += 1,
                Err(e) => {
                    tracing::warn!(token, error = %e, "skipped a malformed token");
                    self.num_skipped += 1;
                }
            }
        }
        self.num_tokens += counted;
        counted
    }

    /// Records the co-occurrences within a sentence.
    ///
    /// Each distinct word (compared case-insensitively) is processed at its first occurrence
    /// only. Malformed tokens are skipped, both as words and as partners.
    ///
    /// # Errors
    ///
    /// [`CooccurError`] is returned when a word of the sentence was not counted by
    /// [`Indexer::count_sentence`] beforehand. Nothing is recorded in that case.
    pub fn link_sentence<W>(&mut self, sentence: &[W]) -> Result<()>
    where
        W: AsRef<str>,
    {
        let tokens = words(sentence);
        if let Some(word) = tokens.iter().find(|w| self.trie.get(w).is_none()) {
            return Err(CooccurError::invalid_argument(
                "sentence",
                format!("{word:?} has not been counted"),
            ));
        }
        self.link_words(&tokens);
        Ok(())
    }

    /// Records the co-occurrences among valid word tokens. Words not counted are skipped.
    fn link_words(&mut self, tokens: &[&str]) {
        let mut seen = HashSet::with_capacity(tokens.len());
        for &word in tokens {
            if !seen.insert(word.to_ascii_lowercase()) {
                continue;
            }
            let Some(node) = self.trie.get_mut(word) else {
                continue;
            };
            let subtrie = node.subtrie_mut();
            for &partner in tokens {
                if partner.eq_ignore_ascii_case(word) {
                    continue;
                }
                if let Err(e) = subtrie.insert(partner) {
                    tracing::warn!(word, partner, error = %e, "skipped a co-occurrence");
                }
            }
        }
    }

    /// Finishes indexing.
    pub fn finish(self) -> Index {
        tracing::debug!(
            num_tokens = self.num_tokens,
            num_skipped = self.num_skipped,
            num_words = self.trie.num_words(),
            "finished indexing"
        );
        Index { trie: self.trie }
    }
}

/// Index of word frequencies and co-occurrences.
pub struct Index {
    trie: Trie,
}

impl Index {
    /// Builds an index from sentences of word tokens.
    ///
    /// Sentence-ending punctuation must be stripped beforehand.
    ///
    /// # Examples
    ///
    /// ```
    /// use cooccur::{Cooccurrences, Index};
    ///
    /// let index = Index::from_sentences(&[vec!["the", "cat", "sat"], vec!["the", "dog"]]);
    /// assert_eq!(index.trie().count("the"), 2);
    /// assert!(matches!(index.cooccurrences("bird"), Cooccurrences::NotFound));
    /// ```
    pub fn from_sentences<S, W>(sentences: &[S]) -> Self
    where
        S: AsRef<[W]>,
        W: AsRef<str>,
    {
        Self::build(sentences.iter().map(|s| (s.as_ref(), true)))
    }

    /// Builds an index from a loaded corpus.
    ///
    /// Words following the last period are counted but take no part in co-occurrences.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::build(
            corpus
                .sentences()
                .iter()
                .map(|s| (s.words(), s.is_terminated())),
        )
    }

    /// Runs both phases over pairs of a sentence and whether its co-occurrences are recorded.
    fn build<'a, I, W>(sentences: I) -> Self
    where
        I: Iterator<Item = (&'a [W], bool)> + Clone,
        W: AsRef<str> + 'a,
    {
        let mut indexer = Indexer::new();
        let mut num_sentences = 0;
        for (sentence, _) in sentences.clone() {
            indexer.count_sentence(sentence);
            num_sentences += 1;
        }
        tracing::debug!(num_sentences, "counted word frequencies");
        let mut num_linked = 0;
        for (sentence, _) in sentences.filter(|&(_, linked)| linked) {
            indexer.link_words(&words(sentence));
            num_linked += 1;
        }
        tracing::debug!(num_sentences = num_linked, "recorded co-occurrences");
        indexer.finish()
    }

    /// Gets the reference to the main trie.
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Creates an iterator over all indexed words and their frequencies in alphabetical order.
    pub fn words(&self) -> Iter<'_> {
        self.trie.iter()
    }

    /// Gets the co-occurrences of a word.
    pub fn cooccurrences<S>(&self, word: S) -> Cooccurrences<'_>
    where
        S: AsRef<str>,
    {
        match self.trie.get(word) {
            None => Cooccurrences::NotFound,
            Some(node) => node
                .subtrie()
                .map_or(Cooccurrences::Empty, Cooccurrences::Partners),
        }
    }
}

/// Outcome of a co-occurrence query.
#[derive(Debug)]
pub enum Cooccurrences<'a> {
    /// The word has not been indexed.
    NotFound,

    /// The word has been indexed but never co-occurred with another word.
    Empty,

    /// Trie of the words co-occurring with the queried word and their counts.
    Partners(&'a Trie),
}

fn words<W>(sentence: &[W]) -> Vec<&str>
where
    W: AsRef<str>,
{
    sentence
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| is_word(t))
        .collect()
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partners(index: &Index, word: &str) -> Vec<(String, u32)> {
        match index.cooccurrences(word) {
            Cooccurrences::Partners(trie) => trie.iter().collect(),
            other => panic!("unexpected outcome for {word}: {other:?}"),
        }
    }

    fn pairs(items: &[(&str, u32)]) -> Vec<(String, u32)> {
        items.iter().map(|&(w, c)| (w.to_string(), c)).collect()
    }

    #[test]
    fn test_repeated_word_is_processed_once() {
        let index = Index::from_sentences(&[["a", "b", "a", "c"]]);
        assert_eq!(index.trie().count("a"), 2);
        assert_eq!(partners(&index, "a"), pairs(&[("b", 1), ("c", 1)]));
        assert_eq!(partners(&index, "b"), pairs(&[("a", 2), ("c", 1)]));
        assert_eq!(partners(&index, "c"), pairs(&[("a", 2), ("b", 1)]));
    }

    #[test]
    fn test_case_insensitive_self_match() {
        let index = Index::from_sentences(&[["The", "cat", "the", "THE"]]);
        assert_eq!(index.trie().count("the"), 3);
        assert_eq!(partners(&index, "the"), pairs(&[("cat", 1)]));
        assert_eq!(partners(&index, "CAT"), pairs(&[("the", 3)]));
    }

    #[test]
    fn test_counts_accumulate_across_sentences() {
        let index = Index::from_sentences(&[
            vec!["red", "fish"],
            vec!["blue", "fish"],
            vec!["red", "fish", "fish"],
        ]);
        assert_eq!(partners(&index, "fish"), pairs(&[("blue", 1), ("red", 2)]));
        assert_eq!(partners(&index, "red"), pairs(&[("fish", 3)]));
    }

    #[test]
    fn test_single_word_sentence_is_empty() {
        let index = Index::from_sentences(&[vec!["alone"], vec!["hello", "world"]]);
        assert!(matches!(index.cooccurrences("alone"), Cooccurrences::Empty));
        assert!(matches!(index.cooccurrences("hello"), Cooccurrences::Partners(_)));
    }

    #[test]
    fn test_repeated_only_word_is_empty() {
        let index = Index::from_sentences(&[["echo", "Echo", "ECHO"]]);
        assert_eq!(index.trie().count("echo"), 3);
        assert!(matches!(index.cooccurrences("echo"), Cooccurrences::Empty));
    }

    #[test]
    fn test_not_found() {
        let index = Index::from_sentences(&[["some", "words", "here"]]);
        assert!(matches!(index.cooccurrences("zzz"), Cooccurrences::NotFound));
        assert!(matches!(index.cooccurrences("wor"), Cooccurrences::NotFound));
        assert!(matches!(index.cooccurrences("!"), Cooccurrences::NotFound));
        assert!(matches!(index.cooccurrences(""), Cooccurrences::NotFound));
    }

    #[test]
    fn test_malformed_tokens_are_skipped() {
        let index = Index::from_sentences(&[["good", "b4d", "", "word", "x-y"]]);
        assert_eq!(index.trie().num_words(), 2);
        assert!(matches!(index.cooccurrences("b4d"), Cooccurrences::NotFound));
        assert_eq!(partners(&index, "good"), pairs(&[("word", 1)]));
    }

    #[test]
    fn test_streaming_phases() {
        let sentences = [["one", "two"], ["two", "three"]];
        let mut indexer = Indexer::new();
        for s in &sentences {
            assert_eq!(indexer.count_sentence(s), 2);
        }
        for s in &sentences {
            indexer.link_sentence(s).unwrap();
        }
        let index = indexer.finish();
        assert_eq!(partners(&index, "two"), pairs(&[("one", 1), ("three", 1)]));
    }

    #[test]
    fn test_link_before_count_fails() {
        let mut indexer = Indexer::new();
        indexer.count_sentence(&["known"]);
        assert!(indexer.link_sentence(&["known", "unknown"]).is_err());
        let index = indexer.finish();
        assert!(matches!(index.cooccurrences("known"), Cooccurrences::Empty));
    }

    #[test]
    fn test_unterminated_sentence_is_counted_only() {
        let corpus = Corpus::from_reader("x y .\na b".as_bytes()).unwrap();
        let index = Index::from_corpus(&corpus);
        assert_eq!(index.trie().count("a"), 1);
        assert_eq!(index.trie().count("b"), 1);
        assert!(matches!(index.cooccurrences("a"), Cooccurrences::Empty));
        assert!(matches!(index.cooccurrences("b"), Cooccurrences::Empty));
        assert_eq!(partners(&index, "x"), pairs(&[("y", 1)]));
    }
}

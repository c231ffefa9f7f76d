//! Loader of a plain-text corpus.
use std::io::{BufRead, BufReader, Read};

use crate::common::SENTENCE_TERMINATOR;
use crate::errors::{CooccurError, Result};

/// Representation of a sentence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<String>,
    terminated: bool,
}

impl Sentence {
    /// Returns a slice of word tokens.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of word tokens.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks if the sentence has no word token.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks if the sentence was ended by a period.
    ///
    /// Only the words following the last period of a corpus form an unterminated sentence.
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl AsRef<[String]> for Sentence {
    fn as_ref(&self) -> &[String] {
        &self.words
    }
}

/// Representation of a corpus.
#[derive(Debug, Default)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    /// Loads a corpus with no limit on sentence and word lengths.
    ///
    /// See [`CorpusReader`] for the format.
    ///
    /// # Errors
    ///
    /// [`CooccurError`] is returned when reading fails.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        CorpusReader::new().read(rdr)
    }

    /// Returns a slice of sentences.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Returns the total number of word tokens.
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

/// Reader of a corpus.
///
/// A corpus is a sequence of tokens separated by whitespace, line breaks included. A token
/// starting with a period ends the current sentence and is not a word itself, e.g.,
///
/// ```text
/// the cat sat .
/// the dog ran .
/// ```
///
/// Tokens following the last period form a final, unterminated sentence: their frequencies
/// are counted, but [`Index::from_corpus`](crate::Index::from_corpus) records no
/// co-occurrences for them. Consecutive periods do not produce empty sentences. Tokens are
/// kept as they are; the indexer decides which are words.
#[derive(Debug, Default, Clone)]
pub struct CorpusReader {
    max_sentence_len: Option<usize>,
    max_word_len: Option<usize>,
}

impl CorpusReader {
    /// Creates a reader with no limit.
    pub const fn new() -> Self {
        Self {
            max_sentence_len: None,
            max_word_len: None,
        }
    }

    /// Specifies the maximum number of words in a sentence.
    ///
    /// # Arguments
    ///
    ///  - `max_sentence_len`: The maximum number of words.
    ///    The default value is 0, indicating the infinity length.
    pub const fn max_sentence_len(mut self, max_sentence_len: usize) -> Self {
        if max_sentence_len != 0 {
            self.max_sentence_len = Some(max_sentence_len);
        } else {
            self.max_sentence_len = None;
        }
        self
    }

    /// Specifies the maximum number of characters in a word.
    ///
    /// # Arguments
    ///
    ///  - `max_word_len`: The maximum number of characters.
    ///    The default value is 0, indicating the infinity length.
    pub const fn max_word_len(mut self, max_word_len: usize) -> Self {
        if max_word_len != 0 {
            self.max_word_len = Some(max_word_len);
        } else {
            self.max_word_len = None;
        }
        self
    }

    /// Reads a corpus.
    ///
    /// # Errors
    ///
    /// [`CooccurError`] is returned when reading fails or a sentence or word exceeds the
    /// specified limit.
    pub fn read<R>(&self, rdr: R) -> Result<Corpus>
    where
        R: Read,
    {
        let buf = BufReader::new(rdr);

        let mut sentences = vec![];
        let mut words = vec![];
        for (i, line) in buf.lines().enumerate() {
            let line = line?;
            for token in line.split_whitespace() {
                if token.starts_with(SENTENCE_TERMINATOR) {
                    if !words.is_empty() {
                        sentences.push(Sentence {
                            words,
                            terminated: true,
                        });
                        words = vec![];
                    }
                    continue;
                }
                if let Some(max) = self.max_word_len {
                    if token.chars().count() > max {
                        let msg = format!("a word at line {} exceeds {max} characters", i + 1);
                        return Err(CooccurError::invalid_format("corpus", msg));
                    }
                }
                if let Some(max) = self.max_sentence_len {
                    if words.len() == max {
                        let msg = format!("a sentence at line {} exceeds {max} words", i + 1);
                        return Err(CooccurError::invalid_format("corpus", msg));
                    }
                }
                words.push(token.to_string());
            }
        }
        if !words.is_empty() {
            sentences.push(Sentence {
                words,
                terminated: false,
            });
        }

        Ok(Corpus { sentences })
    }
}

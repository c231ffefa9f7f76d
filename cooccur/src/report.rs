//! Text report of an [`Index`].
use std::io::Write;

use crate::errors::Result;
use crate::indexer::{Cooccurrences, Index};
use crate::query::Query;
use crate::trie::Trie;

/// Marker printed for a word that has not been indexed.
pub const NOT_FOUND_MARKER: &str = "(INVALID STRING)";

/// Marker printed for an indexed word without co-occurrences.
pub const EMPTY_MARKER: &str = "(EMPTY)";

/// Prefix of each line listing a co-occurring word.
pub const PARTNER_PREFIX: &str = "- ";

/// Writer of query results in the line-oriented text format.
///
/// ```text
/// cat (1)         <- listing of all words
/// the (2)
/// the             <- co-occurrences of "the"
/// - cat (1)
/// zzz             <- a word not indexed
/// (INVALID STRING)
/// ```
pub struct Report<W> {
    wtr: W,
}

impl<W> Report<W>
where
    W: Write,
{
    /// Creates a new instance writing to `wtr`.
    pub const fn new(wtr: W) -> Self {
        Self { wtr }
    }

    /// Answers a query.
    ///
    /// # Errors
    ///
    /// [`CooccurError`](crate::errors::CooccurError) is returned when writing fails.
    pub fn write_query(&mut self, index: &Index, query: &Query) -> Result<()> {
        match query {
            Query::ListAll => self.write_words(index),
            Query::Word(word) => self.write_cooccurrences(index, word),
        }
    }

    /// Lists all indexed words as `<word> (<count>)` in alphabetical order.
    ///
    /// # Errors
    ///
    /// [`CooccurError`](crate::errors::CooccurError) is returned when writing fails.
    pub fn write_words(&mut self, index: &Index) -> Result<()> {
        self.write_listing(index.trie(), "")
    }

    /// Writes `word` followed by its co-occurring words, or by a marker if there are none.
    ///
    /// # Errors
    ///
    /// [`CooccurError`](crate::errors::CooccurError) is returned when writing fails.
    pub fn write_cooccurrences(&mut self, index: &Index, word: &str) -> Result<()> {
        writeln!(self.wtr, "{word}")?;
        match index.cooccurrences(word) {
            Cooccurrences::NotFound => writeln!(self.wtr, "{NOT_FOUND_MARKER}")?,
            Cooccurrences::Empty => writeln!(self.wtr, "{EMPTY_MARKER}")?,
            Cooccurrences::Partners(trie) => self.write_listing(trie, PARTNER_PREFIX)?,
        }
        Ok(())
    }

    fn write_listing(&mut self, trie: &Trie, prefix: &str) -> Result<()> {
        for (word, count) in trie {
            writeln!(self.wtr, "{prefix}{word} ({count})")?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// [`CooccurError`](crate::errors::CooccurError) is returned when flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.wtr.flush()?;
        Ok(())
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.wtr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(index: &Index, queries: &[Query]) -> String {
        let mut report = Report::new(vec![]);
        for q in queries {
            report.write_query(index, q).unwrap();
        }
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn test_markers() {
        let index = Index::from_sentences(&[vec!["lonely"], vec!["two", "words"]]);
        let out = render(
            &index,
            &[
                Query::parse("Lonely"),
                Query::parse("missing"),
                Query::parse("TWO"),
            ],
        );
        assert_eq!(out, "Lonely\n(EMPTY)\nmissing\n(INVALID STRING)\nTWO\n- words (1)\n");
    }

    #[test]
    fn test_words_are_lowercase() {
        let index = Index::from_sentences(&[["Bob", "ALICE", "bob"]]);
        assert_eq!(render(&index, &[Query::ListAll]), "alice (1)\nbob (2)\n");
    }

    #[test]
    fn test_empty_index() {
        let index = Index::from_sentences::<Vec<&str>, &str>(&[]);
        assert_eq!(render(&index, &[Query::ListAll]), "");
        assert_eq!(
            render(&index, &[Query::parse("x")]),
            "x\n(INVALID STRING)\n"
        );
    }
}

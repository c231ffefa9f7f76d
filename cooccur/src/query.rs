//! Loader of query directives.
use std::io::{BufRead, BufReader, Read};

use crate::common::LIST_ALL_DIRECTIVE;
use crate::errors::{CooccurError, Result};

/// Query against an [`Index`](crate::Index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Lists all indexed words with their frequencies.
    ListAll,

    /// Lists the words co-occurring with the given word.
    Word(String),
}

impl Query {
    /// Parses a single token.
    ///
    /// `"!"` is [`Query::ListAll`]; any other token is a [`Query::Word`] kept as it is, so a
    /// token that cannot be a word is reported as not found.
    pub fn parse<S>(token: S) -> Self
    where
        S: AsRef<str>,
    {
        let token = token.as_ref();
        if token == LIST_ALL_DIRECTIVE {
            Self::ListAll
        } else {
            Self::Word(token.to_string())
        }
    }
}

/// Reader of whitespace-separated queries.
#[derive(Debug, Default, Clone)]
pub struct QueryReader {
    max_word_len: Option<usize>,
}

impl QueryReader {
    /// Creates a reader with no limit.
    pub const fn new() -> Self {
        Self { max_word_len: None }
    }

    /// Specifies the maximum number of characters in a queried word.
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

    /// Reads all queries.
    ///
    /// # Errors
    ///
    /// [`CooccurError`] is returned when reading fails or a word exceeds the specified limit.
    pub fn read<R>(&self, rdr: R) -> Result<Vec<Query>>
    where
        R: Read,
    {
        let mut queries = vec![];
        for (i, line) in BufReader::new(rdr).lines().enumerate() {
            let line = line?;
            for token in line.split_whitespace() {
                if let Some(max) = self.max_word_len {
                    if token.chars().count() > max {
                        let msg = format!("a word at line {} exceeds {max} characters", i + 1);
                        return Err(CooccurError::invalid_format("queries", msg));
                    }
                }
                queries.push(Query::parse(token));
            }
        }
        Ok(queries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Query::parse("!"), Query::ListAll);
        assert_eq!(Query::parse("Cat"), Query::Word("Cat".to_string()));
        assert_eq!(Query::parse("!!"), Query::Word("!!".to_string()));
    }

    #[test]
    fn test_read() {
        let data = "the\n!\n  cat dog\n\nzzz\n";
        let queries = QueryReader::new().read(data.as_bytes()).unwrap();
        assert_eq!(
            queries,
            vec![
                Query::Word("the".to_string()),
                Query::ListAll,
                Query::Word("cat".to_string()),
                Query::Word("dog".to_string()),
                Query::Word("zzz".to_string()),
            ]
        );
    }

    #[test]
    fn test_max_word_len() {
        let reader = QueryReader::new().max_word_len(3);
        assert!(reader.read("cat\n!".as_bytes()).is_ok());
        assert!(reader.read("cats".as_bytes()).is_err());
    }
}

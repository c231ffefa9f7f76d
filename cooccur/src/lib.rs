//! # Cooccur
//!
//! Cooccur indexes the word frequencies of a corpus together with, for each word, the
//! frequencies of the words appearing in the same sentences. Both levels are stored in
//! case-insensitive letter tries, so listings come out in alphabetical order without sorting.
//!
//! ## Examples
//!
//! ```
//! use cooccur::{Corpus, Index, Query, Report};
//!
//! let corpus = Corpus::from_reader("the cat sat .\nthe dog ran .\n".as_bytes()).unwrap();
//! let index = Index::from_corpus(&corpus);
//!
//! let mut report = Report::new(vec![]);
//! report.write_query(&index, &Query::parse("cat")).unwrap();
//! report.write_query(&index, &Query::parse("zzz")).unwrap();
//!
//! let output = String::from_utf8(report.into_inner()).unwrap();
//! assert_eq!(output, "cat\n- sat (1)\n- the (1)\nzzz\n(INVALID STRING)\n");
//! ```
#![deny(missing_docs)]

pub mod common;
pub mod corpus;
pub mod errors;
pub mod indexer;
pub mod query;
pub mod report;
pub mod trie;


pub use corpus::{Corpus, CorpusReader};
pub use indexer::{Cooccurrences, Index, Indexer};
pub use query::{Query, QueryReader};
pub use report::Report;
pub use trie::Trie;

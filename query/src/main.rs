use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use cooccur::common::{DEFAULT_MAX_SENTENCE_LEN, DEFAULT_MAX_WORD_LEN};
use cooccur::{CorpusReader, Index, QueryReader, Report};

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "query",
    about = "Answer word frequency and co-occurrence queries over a corpus"
)]
struct Args {
    /// Corpus of sentences, each ended by a period token.
    #[clap(short = 'c', long)]
    corpus: PathBuf,

    /// Queries, one word or `!` per token. Reads stdin if unspecified.
    #[clap(short = 'q', long)]
    queries: Option<PathBuf>,

    /// Output file. Writes to stdout if unspecified.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Rejects sentences longer than 20 words and words longer than 1023 characters.
    #[clap(long)]
    strict: bool,

    /// Reports progress on stderr.
    #[clap(short = 'v', long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (corpus_reader, query_reader) = if args.strict {
        (
            CorpusReader::new()
                .max_sentence_len(DEFAULT_MAX_SENTENCE_LEN)
                .max_word_len(DEFAULT_MAX_WORD_LEN),
            QueryReader::new().max_word_len(DEFAULT_MAX_WORD_LEN),
        )
    } else {
        (CorpusReader::new(), QueryReader::new())
    };

    tracing::info!(corpus = %args.corpus.display(), "loading the corpus");
    let start = Instant::now();
    let corpus = corpus_reader.read(File::open(&args.corpus)?)?;
    let index = Index::from_corpus(&corpus);
    tracing::info!(
        num_sentences = corpus.sentences().len(),
        num_tokens = corpus.num_tokens(),
        num_words = index.trie().num_words(),
        seconds = start.elapsed().as_secs_f64(),
        "indexed the corpus"
    );

    let rdr: Box<dyn Read> = match &args.queries {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(std::io::stdin().lock()),
    };
    let queries = query_reader.read(rdr)?;
    tracing::info!(num_queries = queries.len(), "loaded queries");

    let wtr: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut report = Report::new(BufWriter::new(wtr));
    for query in &queries {
        report.write_query(&index, query)?;
    }
    report.flush()?;

    Ok(())
}

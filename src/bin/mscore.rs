//! Command-line motif scorer: count a tagged corpus, normalize, and
//! print one score per book.

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use motif_score::{
    config, count_corpus, score_books, verify_terms, BookScore, CorpusSource, FrequencyModel,
    MatchPolicy, TaggedCorpus,
};

#[derive(Parser)]
#[command(
    name = "mscore",
    version,
    about = "Quantify motif prevalence per book of a tagged corpus"
)]
struct Cli {
    /// Tagged corpus file (MorphGNT-style columns).
    #[arg(long)]
    corpus: PathBuf,

    /// Stopword list, one lemma per line.
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Multi-word token definitions, one `name = alt1 , alt2` per line.
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Clear the matching window at book boundaries instead of letting
    /// tokens straddle two books.
    #[arg(long)]
    reset_window: bool,

    /// Exclude occurrences already folded into a token from later
    /// overlapping matches.
    #[arg(long)]
    no_reuse_consumed: bool,

    /// Emit scores as a JSON array instead of text lines.
    #[arg(long)]
    json: bool,

    /// Motif term list, one lemma or token name per line.
    motif_terms: PathBuf,
}

/// Stage timer printing `<label>...<elapsed> seconds` on stderr, so
/// stdout carries nothing but scores.
struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    fn start(label: &str) -> Self {
        eprint!("{label}...");
        let _ = std::io::stderr().flush();
        Self {
            start: Instant::now(),
        }
    }

    fn finish(self) {
        eprintln!("{:.2} seconds", self.start.elapsed().as_secs_f64());
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let stopwords = match &cli.stopwords {
        Some(path) => config::load_stopwords(path)?,
        None => HashSet::new(),
    };
    let tokens = match &cli.tokens {
        Some(path) => config::load_token_definitions(path)?,
        None => Vec::new(),
    };
    let terms = config::load_motif_terms(&cli.motif_terms)?;
    let corpus = TaggedCorpus::open(&cli.corpus)?;
    let policy = MatchPolicy {
        reset_at_book_boundary: cli.reset_window,
        reuse_consumed: !cli.no_reuse_consumed,
    };

    let watch = Stopwatch::start("Counting words");
    let frequencies = count_corpus(&corpus, stopwords, tokens, policy)?;
    watch.finish();

    verify_terms(&frequencies, &terms)?;

    let watch = Stopwatch::start("Calculating augmented term frequencies");
    let model = FrequencyModel::build(&frequencies)?;
    watch.finish();

    let watch = Stopwatch::start("Calculating scores");
    let scores = score_books(&model, &frequencies, &terms)?;
    watch.finish();

    let rows: Vec<BookScore> = scores
        .into_iter()
        .enumerate()
        .map(|(index, score)| BookScore {
            book: corpus.book_abbrev(index + 1).to_string(),
            score,
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}: {:.3}", row.book, row.score);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use search_cli::{load_corpus, render_json, render_outcome, render_stats, run_repl};
use search_core::{MatchMode, SearchOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Index plain-text documents in memory and search them with TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Text file or directory of .txt files to index (repeatable)
    #[arg(long, required = true)]
    docs: Vec<PathBuf>,
}

#[derive(Args)]
struct Ranking {
    /// Maximum number of results per query
    #[arg(long, default_value_t = search_core::config::DEFAULT_MAX_RESULTS)]
    limit: usize,
    /// Only match documents containing every query term
    #[arg(long, default_value_t = false)]
    all: bool,
}

impl Ranking {
    fn options(&self) -> SearchOptions {
        let match_mode = if self.all { MatchMode::All } else { MatchMode::Any };
        SearchOptions { max_results: self.limit, match_mode }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more queries and print ranked results
    Query {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        ranking: Ranking,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Queries to run
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Print corpus statistics
    Stats {
        #[command(flatten)]
        source: Source,
        /// Print statistics as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read queries from stdin until `quit` or `exit`
    Repl {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        ranking: Ranking,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { source, ranking, json, queries } => {
            let corpus = load_corpus(&source.docs)?;
            let opts = ranking.options();
            for query in &queries {
                let outcome = corpus.search(query, &opts);
                if json {
                    println!("{}", render_json(query, &outcome)?);
                } else {
                    println!("{}", render_outcome(query, &outcome));
                }
            }
        }
        Commands::Stats { source, json } => {
            let corpus = load_corpus(&source.docs)?;
            let stats = corpus.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render_stats(&stats));
            }
        }
        Commands::Repl { source, ranking } => {
            let corpus = load_corpus(&source.docs)?;
            print!("{}", render_stats(&corpus.stats()));
            run_repl(&corpus, &ranking.options(), io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}

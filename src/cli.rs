use std::path::PathBuf;

use clap::{
    CommandFactory,
    Parser,
    Subcommand,
    builder::RangedU64ValueParser,
};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "docbrief",
    version,
    about = "Citation-backed answers from a local folder of documents"
)]
pub struct Cli {
    /// Override the XDG data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory of PDF/text documents [default: <data-dir>/pdfs]
    #[arg(long, global = true)]
    pub corpus_dir: Option<PathBuf>,

    /// Config file [default: <data-dir>/docbrief.json if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum characters per chunk
    #[arg(long, global = true)]
    pub max_chars: Option<usize>,

    /// Characters shared between consecutive chunks of a page
    #[arg(long, global = true)]
    pub overlap_chars: Option<usize>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a question with cited passages from the corpus
    Ask(AskArgs),
    /// List the best-matching passages for a query
    Search(SearchArgs),
    /// Show corpus statistics
    Status(StatusArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

fn at_least_one() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}

// -- Ask --

#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The clinical question
    pub question: String,

    /// Number of passages to retrieve [default: from config, 8]
    #[arg(short = 'k', long, value_parser = at_least_one())]
    pub top_k: Option<usize>,

    /// Heading language (en, ar); unknown values fall back to en
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Output the structured answer as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Number of results to return
    #[arg(short = 'n', long, default_value = "8", value_parser = at_least_one())]
    pub count: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "docbrief",
            &mut std::io::stdout(),
        );
    }
}

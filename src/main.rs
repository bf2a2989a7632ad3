use clap::Parser;
use docbrief::{
    DataDir,
    Pipeline,
    PipelineConfig,
    Result,
    compose::Locale,
    search,
};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{AskArgs, Cli, Command, SearchArgs};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCBRIEF_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Ask(args) => {
            let pipeline = Pipeline::build(&load_config(&cli)?)?;
            cmd_ask(&pipeline, args)?;
        }
        Command::Search(args) => {
            let pipeline = Pipeline::build(&load_config(&cli)?)?;
            cmd_search(&pipeline, args)?;
        }
        Command::Status(args) => {
            let pipeline = Pipeline::build(&load_config(&cli)?)?;
            cmd_status(&pipeline, args.json)?;
        }
        Command::Completions(args) => args.generate(),
    }

    Ok(())
}

/// Data directory and config file first, then command-line overrides.
fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    let data_dir = DataDir::resolve(cli.data_dir.as_deref())?;
    let mut config = PipelineConfig::load(&data_dir, cli.config.as_deref())?;

    if let Some(dir) = &cli.corpus_dir {
        config.corpus_dir = dir.clone();
    }
    if let Some(max_chars) = cli.max_chars {
        config.chunking.max_chars = max_chars;
    }
    if let Some(overlap_chars) = cli.overlap_chars {
        config.chunking.overlap_chars = overlap_chars;
    }
    Ok(config)
}

fn cmd_ask(pipeline: &Pipeline, args: &AskArgs) -> Result<()> {
    let locale = Locale::parse_lenient(&args.lang);
    let answer = pipeline.ask(&args.question, args.top_k, locale);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("{answer}");
    }
    Ok(())
}

fn cmd_search(pipeline: &Pipeline, args: &SearchArgs) -> Result<()> {
    let results = search::execute_search(pipeline, &args.query, args.count);

    if args.json {
        println!("{}", search::format_json(&results, &args.query)?);
    } else {
        println!("{}", search::format_human(&results));
    }
    Ok(())
}

fn cmd_status(pipeline: &Pipeline, json: bool) -> Result<()> {
    let status = pipeline.status();

    if json {
        println!("{}", serde_json::to_string_pretty(status)?);
    } else {
        println!("Corpus directory: {}", status.corpus_dir.display());
        println!(
            "Documents: {} ({} with text)",
            status.documents, status.documents_with_text
        );
        println!("Pages: {}", status.spans);
        println!("Chunks: {}", status.chunks);
        println!("Vocabulary: {}", status.vocabulary);
    }
    Ok(())
}

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use minidown::Config;

#[derive(Parser)]
#[command(name = "minidown")]
#[command(about = "Convert a small subset of Markdown to a standalone HTML page")]
struct Cli {
    /// Input Markdown file (defaults to the configured input, input.md)
    input: Option<PathBuf>,

    /// Output HTML file (defaults to the configured output, output.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "minidown.toml")]
    config: PathBuf,

    /// Author named in the provenance stamp
    #[arg(long)]
    author: Option<String>,

    /// Leave out the provenance stamp
    #[arg(long)]
    no_stamp: bool,

    /// Keep a paragraph, list item or code block left open at end of input
    #[arg(long)]
    flush_unterminated: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(author) = cli.author {
        config.stamp.author = author;
    }
    if cli.no_stamp {
        config.stamp.enabled = false;
    }
    if cli.flush_unterminated {
        config.parser.flush_unterminated = true;
    }

    let input = cli.input.unwrap_or_else(|| config.paths.input.clone());
    let output = cli.output.unwrap_or_else(|| config.paths.output.clone());
    let today = chrono::Local::now().date_naive();
    log::info!("converting {} to {}", input.display(), output.display());

    if let Err(e) = minidown::convert_file(&input, &output, &config, today) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}

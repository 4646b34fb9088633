use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use lexan::{
    errors::errors::{write_failed, Error, ErrorTip},
    input::input::{assemble_lines, read_source_file, BANNER, PROMPT},
    lexer::scanner::tokenize,
    report::report::{render, OutputFormat, ReportOptions},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "lexan",
    about = "Lexical analyzer for a C-like language",
    long_about = "Splits C-like source into lexemes and prints the category of each one",
    version
)]
struct Cli {
    /// Source file to tokenize. Without it, lines are read from stdin until a line `EOF`
    input: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Reference, env = "LEXAN_FORMAT")]
    format: OutputFormat,
    /// Prefix tokens with line:col (named format)
    #[arg(long)]
    positions: bool,
    /// Print per-category token counts after the stream
    #[arg(long)]
    summary: bool,
    /// Do not print the banner and `-->` prompts when reading stdin
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, &cli);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LEXAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (source, file) = match &cli.input {
        Some(path) => (
            read_source_file(path)?,
            Some(path.to_string_lossy().to_string()),
        ),
        None => {
            let prompt = if cli.no_prompt {
                None
            } else {
                writeln!(out, "{}", BANNER).map_err(|e| write_failed(&e))?;
                Some(PROMPT)
            };
            (assemble_lines(io::stdin().lock(), &mut out, prompt)?, None)
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source, file);
    debug!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let options = ReportOptions {
        format: cli.format,
        positions: cli.positions,
        summary: cli.summary,
    };
    render(&tokens, &source, options, &mut out)
}

fn display_error(error: &Error, cli: &Cli) {
    /*
        Error: ReadFailed (Could not read `missing.c`, does it exist?)
        -> missing.c
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("   {}", error);

    match &cli.input {
        Some(path) => eprintln!("-> {}", path.to_string_lossy()),
        None => eprintln!("-> stdin"),
    }
}

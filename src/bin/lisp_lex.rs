//! lisp-lex - print the tokens of a LISP source file.
//!
//! Reads a file (or standard input), tokenizes it and prints one token per
//! line. Stops at the first lexical error, reporting it with its position.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lisp_lexer::{CharSource, Encoding, LexerConfig, TokenStream};

/// Tokenize LISP source and print one token per line
#[derive(Parser, Debug)]
#[command(name = "lisp-lex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize LISP source and print one token per line", long_about = None)]
struct Cli {
    /// Source file (default: standard input)
    file: Option<PathBuf>,

    /// Source encoding (utf-8, us-ascii, iso-8859-1, utf-16le, utf-16be)
    #[arg(short, long)]
    encoding: Option<Encoding>,

    /// Longest symbol or number accepted, in characters
    #[arg(long)]
    max_token_len: Option<usize>,

    /// Bytes read from the source per refill
    #[arg(long)]
    buffer_size: Option<usize>,

    /// JSON configuration file; command line options take precedence
    #[arg(short, long, env = "LISP_LEX_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// How tokens are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `(`, `)`, `<symbol>`, `<42>`
    Text,
    /// One JSON value per line
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("warning: {:#}", err);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the token output
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to initialize logging")
}

/// Builds the lexer configuration from the config file and the overrides
fn load_config(cli: &Cli) -> Result<LexerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            LexerConfig::from_json(&text).with_context(|| path.display().to_string())?
        }
        None => LexerConfig::default(),
    };

    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }
    if let Some(max_token_len) = cli.max_token_len {
        config.max_token_len = max_token_len;
    }
    if let Some(buffer_size) = cli.buffer_size {
        config.buffer_size = buffer_size;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let (name, reader): (String, Box<dyn Read>) = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            (path.display().to_string(), Box::new(file))
        }
        None => ("<stdin>".to_string(), Box::new(io::stdin().lock())),
    };

    let mut stream = TokenStream::from_reader(reader, &config)?;
    let mut out = BufWriter::new(io::stdout().lock());

    let result = print_tokens(&mut stream, cli.format, &mut out);
    stream.close();
    out.flush()?;

    result.with_context(|| name)
}

fn print_tokens<S: CharSource>(
    stream: &mut TokenStream<S>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    while stream.peek_available()? {
        let token = stream.take_token()?;
        match format {
            OutputFormat::Text => writeln!(out, "{}", token)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &token)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

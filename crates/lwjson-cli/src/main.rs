use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QuoteArg {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FailureArg {
    Silent,
    Verbose,
    Nullify,
    Exception,
}

#[derive(Parser, Debug)]
#[command(
    name = "lwjson-cli",
    about = "Parse JSON and re-emit it as compact single-line output",
    version
)]
struct Args {
    /// Parse only; report success or failure without printing output
    #[arg(long)]
    check: bool,

    /// Quote style for emitted keys and strings
    #[arg(long, value_enum, default_value_t = QuoteArg::Double)]
    quote_style: QuoteArg,

    /// Policy for bare literals that fit no scalar kind
    #[arg(long, value_enum, default_value_t = FailureArg::Verbose)]
    failure_mode: FailureArg,

    /// Treat a backslash-preceded closing quote as a terminator
    #[arg(long)]
    no_escape_check: bool,

    /// Print a per-value parse trace to stderr
    #[arg(long)]
    trace: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = lwjson::Options {
        quote_style: match args.quote_style {
            QuoteArg::Single => lwjson::QuoteStyle::Single,
            QuoteArg::Double => lwjson::QuoteStyle::Double,
        },
        failure_mode: match args.failure_mode {
            FailureArg::Silent => lwjson::FailureMode::Silent,
            FailureArg::Verbose => lwjson::FailureMode::Verbose,
            FailureArg::Nullify => lwjson::FailureMode::Nullify,
            FailureArg::Exception => lwjson::FailureMode::Exception,
        },
        check_escaped: !args.no_escape_check,
    };

    let node = if args.trace {
        lwjson::parse_with_observer(&buf, &options, |line| eprintln!("{line}"))?
    } else {
        lwjson::parse_with_options(&buf, &options)?
    };

    if args.check {
        eprintln!("ok");
    } else {
        println!("{}", lwjson::to_string_with_options(&node, &options));
    }

    Ok(())
}

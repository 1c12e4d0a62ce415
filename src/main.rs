use ansi_term::Colour::Red;
use clap::Parser;
use minibasic::lang::{self, ast};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[derive(Parser)]
#[command(name = "minibasic", about = "Tokenize and parse line-numbered BASIC source")]
struct Args {
    /// BASIC source file
    file: PathBuf,

    /// Print the classified token stream before the tree
    #[arg(long)]
    tokens: bool,

    /// Emit tokens, tree, and errors as JSON instead
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    tokens: &'a [lang::token::Token],
    tree: &'a lang::Tree,
    errors: &'a [lang::Error],
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let source = match std::fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", Red.paint(format!("{}: {}", args.file.display(), e)));
            return ExitCode::FAILURE;
        }
    };

    let parsed = lang::parse(&source);

    if args.json {
        let report = Report {
            tokens: &parsed.tokens,
            tree: &parsed.tree,
            errors: &parsed.errors,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", Red.paint(format!("JSON report: {}", e)));
                return ExitCode::FAILURE;
            }
        }
    } else {
        if args.tokens {
            for token in &parsed.tokens {
                println!("{:<10} {}", token.kind().to_string(), token);
            }
        }
        print!("{}", ast::dump(&parsed.tree, parsed.program));
    }

    for error in &parsed.errors {
        eprintln!("{}", Red.paint(error.to_string()));
    }
    if parsed.errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(EnvFilter::from_default_env()))
        .init();
}

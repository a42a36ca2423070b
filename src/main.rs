//! shipfee CLI - Command-line interface
//!
//! Commands:
//!   quote    - Price a package
//!   rates    - Print the rate card
//!   schema   - Print JSON schema for an output type

mod cli;

use shipfee::VERSION;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "quote" => cli::cmd_quote(&args[2..]),
        "rates" => cli::cmd_rates(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("shipfee {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `shipfee=warn`).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shipfee=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_usage() {
    println!(
        r#"
shipfee - Tiered shipping fee calculator

USAGE:
    shipfee <COMMAND> [OPTIONS]

COMMANDS:
    quote <weight> <zone> [--insured]   Price a package (zone: Domestic, International, Express)
    rates                               Print the rate card
    schema [name]                       Print JSON schema for an output type
    version                             Print version

OPTIONS:
    --insured                           Add insurance (1.5% of subtotal)
    --format <text|json|yaml>           Output format (default: text)

EXAMPLES:
    shipfee quote 5 Domestic
    shipfee quote 20 Domestic --insured --format json
    shipfee rates --format yaml
"#
    );
}

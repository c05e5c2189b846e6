//! ISBN Normalization CLI
//!
//! Normalizes scanned book codes to the canonical 13-digit form and checks
//! ISBN check digits.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bookland::{
    isbn10_check_digit, isbn10_verify, isbn13_check_digit, isbn13_verify, normalize,
    Conversion, JsonCatalog, NoCatalog, NormalizerConfig, UpcResolver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "isbn-normalize")]
#[command(about = "Normalize scanned book codes to canonical 13-digit ISBNs")]
struct Cli {
    /// Path to a JSON UPC catalog (overrides the config file)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Path to a config file
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize scanned codes to 13-digit ISBNs
    Normalize {
        /// Codes as scanned (10, 13, 14, 17, or 18 characters)
        codes: Vec<String>,
    },

    /// Strictly verify a code's check digit (10- or 13-digit)
    Verify {
        /// The code to verify
        code: String,
    },

    /// Compute the check digit for a code
    CheckDigit {
        /// A 10-character ISBN or a 12-digit ISBN-13 payload
        code: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = NormalizerConfig::load_from(cli.config.as_deref())?;

    let resolver: Box<dyn UpcResolver> = match cli.catalog.or(config.catalog_path()) {
        Some(path) => Box::new(JsonCatalog::load(path)?),
        None => Box::new(NoCatalog),
    };

    match cli.command {
        Commands::Normalize { codes } => {
            let mut any_failed = false;

            for code in &codes {
                match normalize(code, resolver.as_ref()) {
                    Conversion::Converted(isbn) => {
                        println!("✅ {} -> {}", code, isbn);
                    }
                    Conversion::Unsupported { length } => {
                        println!("⚠️  {} - unsupported length ({})", code, length);
                    }
                    Conversion::Failed(e) => {
                        any_failed = true;
                        println!("❌ {} - {}", code, e);
                    }
                }
            }

            if any_failed {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Verify { code } => {
            let valid = match code.chars().count() {
                10 => isbn10_verify(&code),
                13 => isbn13_verify(&code),
                n => {
                    println!("❌ {} - cannot verify a {}-character code", code, n);
                    std::process::exit(1);
                }
            };

            if valid {
                println!("✅ {} - check digit valid", code);
            } else {
                println!("❌ {} - check digit INVALID", code);
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::CheckDigit { code } => {
            let check = match code.chars().count() {
                10 => isbn10_check_digit(&code)?,
                12 => isbn13_check_digit(&code)?,
                13 => {
                    let payload: String = code.chars().take(12).collect();
                    isbn13_check_digit(&payload)?
                }
                n => {
                    println!("❌ {} - no check digit defined for {} characters", code, n);
                    std::process::exit(1);
                }
            };
            println!("{}", check);
            Ok(())
        }
    }
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use fxconv::cli::commands::{convert_once, interactive, list_currencies};
use fxconv::cli::config::resolve_config;
use fxconv::cli::logging::init_logging;
use fxconv::exchange::create_service;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,

    /// Configuration file (defaults to ~/.config/fxconv/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "INFO", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick an amount and two currencies interactively (the default)
    Interactive,
    /// Convert once and print the result
    Convert {
        /// Amount to convert, e.g. 12.5
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
    },
    /// List the currencies offered for selection
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if cli.version {
        print_version();
        return Ok(());
    }

    let log_file = init_logging(&cli.log_level)?;
    let config = resolve_config(cli.config.as_deref())?;
    log::debug!("logging to {}", log_file.display());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let session = interactive(&config).await?;
            log::debug!("final stage: {}", session.stage.name());
        }
        Commands::Convert { amount, from, to } => {
            let service = create_service(config.exchange_options()?)?;
            match convert_once(service.as_ref(), &config.currencies, &amount, &from, &to).await {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("{} {:#}", "Eroare:".red().bold(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Currencies => {
            println!("{}", list_currencies(&config.currencies));
        }
    }

    Ok(())
}

fn print_version() {
    println!("{}: {}", "fxconv".green(), env!("CARGO_PKG_VERSION").cyan().bold());
}

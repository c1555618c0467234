mod cli;
mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "brres=warn,brres_cli=info",
        1 => "brres=debug,brres_cli=debug",
        _ => "brres=trace,brres_cli=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            input,
            output,
            organize,
            flat,
            mmap,
        } => {
            commands::extract::handle(&input, output.as_deref(), organize, flat, mmap)?;
        }

        Commands::Scan {
            input,
            classify,
            json,
        } => {
            commands::scan::handle(&input, classify, json)?;
        }

        Commands::Configure {
            organize,
            output,
            show,
        } => {
            commands::configure::handle(organize, output, show)?;
        }
    }

    Ok(())
}

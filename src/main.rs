mod cli;
mod commands;
mod mcp;
mod page_order;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries results and the MCP transport
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdforg=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
        Commands::Merge { inputs, output } => {
            commands::merge::run(&inputs, output)?;
        }
        Commands::Split {
            path,
            pages,
            output,
        } => {
            commands::split::run(&path, &pages, &output)?;
        }
        Commands::Text {
            path,
            pages,
            output,
        } => {
            commands::text::run(&path, &pages, output.as_deref())?;
        }
        Commands::Reorder {
            path,
            order,
            moves,
            output,
        } => {
            commands::reorder::run(&path, order.as_deref(), &moves, &output)?;
        }
        Commands::Encrypt {
            path,
            output,
            user_password,
            owner_password,
        } => {
            commands::encrypt::run(&path, &output, &user_password, owner_password.as_deref())?;
        }
        Commands::Decrypt {
            path,
            output,
            password,
        } => {
            commands::decrypt::run(&path, &output, &password)?;
        }
    }

    Ok(())
}

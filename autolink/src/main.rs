//! Autolink CLI
//!
//! Entry points for editor scripts:
//! - `autolink open <terms>` opens a browser search
//! - `autolink link <terms>` prints a Vim `let` statement holding the first
//!   external result link
//! - `autolink serve` runs the same entry points as an MCP server on stdio

use anyhow::Result;
use clap::{Parser, Subcommand};
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;

use autolink::cli::{apply_var_override, link_output};
use autolink::{AutolinkMcpServer, BrowserLauncher, Config, EditorBridge};

#[derive(Parser)]
#[command(name = "autolink")]
#[command(about = "Look up the first search result link for a phrase, or open a browser search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ~/.config/autolink/config.toml)
    #[arg(long, global = true, env = "AUTOLINK_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Log level for autolink itself, used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a browser search for the terms
    Open {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },
    /// Print the first external result link for the terms
    Link {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
        /// Editor variable to assign (overrides editor.variable)
        #[arg(long)]
        var: Option<String>,
        /// Print only the URL; exit with an error when none is found
        #[arg(long)]
        raw: bool,
    },
    /// Run as an MCP server over stdio
    Serve,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    autolink::logging::init_tracing(&cli.log_level)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(Some(path.as_path()))?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Open { terms } => {
            config.browser.validate()?;
            BrowserLauncher::new(&config.browser).open_search(&terms.join(" "));
        }
        Commands::Link { terms, var, raw } => {
            apply_var_override(&mut config, var)?;

            let bridge = EditorBridge::from_config(&config)?;
            let output = link_output(&bridge, &terms.join(" "), raw).await?;
            println!("{}", output);
        }
        Commands::Serve => {
            tracing::info!("Starting autolink MCP server");

            let server = AutolinkMcpServer::new(config)?;
            let service = server.serve(stdio()).await?;

            tracing::info!("Server running, waiting for requests...");
            service.waiting().await?;

            tracing::info!("Server shutting down");
        }
    }

    Ok(())
}

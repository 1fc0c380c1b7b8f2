//! GasyWay CLI
//!
//! Inspect, export, push and diagnose the live design tokens from a terminal.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// GasyWay design token tool
#[derive(Parser, Debug)]
#[command(name = "gasyway")]
#[command(about = "Inspect, push and diagnose GasyWay design tokens")]
#[command(version)]
struct Cli {
    /// Directory containing gasyway.toml, or the config file itself
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Bearer token for the authenticated endpoints
    #[arg(long, global = true, env = "GASYWAY_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default gasyway.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Base URL of the token functions
        #[arg(long, default_value = "http://localhost:54321/functions/v1")]
        base_url: String,

        /// Public (anonymous) key
        #[arg(long, default_value = "")]
        public_key: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check store reachability, health, applied variables and the full load path
    Diagnose {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read and write the stored token set
    #[command(subcommand)]
    Tokens(TokensCommand),
}

#[derive(Subcommand, Debug)]
enum TokensCommand {
    /// Print the public active token set
    Active,

    /// Print the token set for the authenticated session
    Current,

    /// Print the CSS custom properties for the active tokens
    Css {
        /// Use the built-in defaults instead of the store
        #[arg(long)]
        defaults: bool,

        /// Write to the configured stylesheet instead of stdout
        #[arg(long)]
        write: bool,
    },

    /// Save a token set read from a JSON file
    Push {
        /// JSON object of token field edits, e.g. {"primary": "#ff0000"}
        file: PathBuf,

        /// Show the changed fields without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove duplicate stored token records
    Cleanup,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Init {
            path,
            base_url,
            public_key,
            force,
        } => commands::init(&path, &base_url, &public_key, force),
        Commands::Diagnose { json } => commands::diagnose(&cli.config, json).await,
        Commands::Tokens(command) => match command {
            TokensCommand::Active => commands::active(&cli.config).await,
            TokensCommand::Current => commands::current(&cli.config, cli.token).await,
            TokensCommand::Css { defaults, write } => {
                commands::css(&cli.config, defaults, write).await
            }
            TokensCommand::Push { file, dry_run } => {
                commands::push(&cli.config, cli.token, &file, dry_run).await
            }
            TokensCommand::Cleanup => commands::cleanup(&cli.config, cli.token).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn push_takes_file_and_global_flags() {
        let cli = Cli::try_parse_from([
            "gasyway",
            "tokens",
            "push",
            "theme.json",
            "--dry-run",
            "--token",
            "jwt",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.token.as_deref(), Some("jwt"));
        match cli.command {
            Commands::Tokens(TokensCommand::Push { file, dry_run }) => {
                assert_eq!(file, PathBuf::from("theme.json"));
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn push_requires_a_file() {
        assert!(Cli::try_parse_from(["gasyway", "tokens", "push"]).is_err());
    }
}

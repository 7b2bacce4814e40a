//! CLI for inspecting s3:// URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use s3url_core::config;

use commands::{resolve_default, run_completions, run_config, run_http_url, run_man, run_parse};

/// Top-level CLI for s3url.
#[derive(Debug, Parser)]
#[command(name = "s3url")]
#[command(about = "s3url: parse and render s3://bucket/key identifiers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL and print its scheme, bucket, key and query.
    Parse {
        /// URL such as s3://bucket/key, s3:///key or /key.
        url: String,
        /// Bucket to use when the URL has none (overrides config).
        #[arg(long)]
        bucket: Option<String>,
        /// Print a JSON object instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the HTTP(S) location of an object.
    HttpUrl {
        /// URL such as s3://bucket/key.
        url: String,
        /// Bucket to use when the URL has none (overrides config).
        #[arg(long)]
        bucket: Option<String>,
        /// Use path-style addressing (host/bucket/key) regardless of config.
        #[arg(long)]
        path_style: bool,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, bucket, json } => {
                run_parse(&url, &resolve_default(bucket, &cfg), json)?
            }
            CliCommand::HttpUrl {
                url,
                bucket,
                path_style,
            } => {
                let mut endpoint = cfg.http_endpoint().clone();
                endpoint.path_style |= path_style;
                run_http_url(&url, &resolve_default(bucket, &cfg), &endpoint)?
            }
            CliCommand::Config => run_config(&cfg, &config::config_path()?)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

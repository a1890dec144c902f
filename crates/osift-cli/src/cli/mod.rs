//! CLI for the osift pipeline.
//!
//! With a subcommand, osift runs non-interactively (missing values are
//! still prompted for). With no subcommand it presents the interactive
//! four-option menu.

mod commands;
mod menu;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use osift_core::config;
use std::path::PathBuf;

/// Top-level CLI for the osift pipeline.
#[derive(Debug, Parser)]
#[command(name = "osift")]
#[command(about = "osift: anonymized fetch, unpack and keyword search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a file through the proxy, then unpack and search it.
    Fetch {
        /// URL to download. Prompted for when omitted.
        url: Option<String>,
        /// Directory the download lands in (default from config).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
        /// Final file name the download is renamed to.
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
        /// Comma-separated keywords to search for after unpacking.
        #[arg(long, value_name = "LIST")]
        keywords: Option<String>,
    },

    /// Skip downloading: unpack an existing file, then search.
    Unpack {
        /// Path of the file to process.
        file: Option<PathBuf>,
        /// Directory extracted files (and results) go into.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Comma-separated keywords to search for.
        #[arg(long, value_name = "LIST")]
        keywords: Option<String>,
    },

    /// Skip unpacking: search a directory for keywords.
    Search {
        /// Directory to search in.
        dir: Option<PathBuf>,
        /// Comma-separated keywords to search for.
        #[arg(long, value_name = "LIST")]
        keywords: Option<String>,
    },
}

/// Loads the config on demand so commands that never touch it (search,
/// menu exit) do no filesystem work beyond their own.
fn load_config() -> Result<osift_core::config::OsiftConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(CliCommand::Fetch {
            url,
            download_dir,
            name,
            keywords,
        }) => commands::run_fetch(&load_config()?, url, download_dir, name, keywords),
        Some(CliCommand::Unpack {
            file,
            dir,
            keywords,
        }) => commands::run_unpack(&load_config()?, file, dir, keywords).map(|_| ()),
        Some(CliCommand::Search { dir, keywords }) => commands::run_search(dir, keywords),
        None => menu::run(),
    }
}

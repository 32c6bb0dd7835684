use std::path::PathBuf;

use clap::Parser;

/// Interactive terminal client for MiniVector semantic search
#[derive(Debug, Parser)]
#[command(name = "mvsearch", version, about)]
pub struct Cli {
    /// Base URL of the search service
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Number of results to request per search
    #[arg(short, long, value_name = "N")]
    pub k: Option<u32>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

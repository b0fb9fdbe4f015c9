//! Process configuration
//!
//! Two knobs, resolved once at startup: command-line argument wins over
//! environment variable, which wins over the compiled default.

use clap::Parser;
use std::path::PathBuf;

/// College records web backend
#[derive(Parser, Debug, Clone)]
#[command(name = "college-records", version)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path to the SQLite database file (created on first run)
    #[arg(long, env = "COLLEGE_DB", default_value = "college.db")]
    pub database: PathBuf,
}

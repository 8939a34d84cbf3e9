// CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use assembly64_cli::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Search the Assembly64 catalog and download the files of a release.
#[derive(Parser, Debug)]
#[command(name = "assembly64")]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the Assembly64 service
    #[arg(long, env = "ASSEMBLY64_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (must be greater than zero)
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Session cookie sent with every request
    #[arg(long, env = "ASSEMBLY64_COOKIE")]
    pub cookie: Option<String>,

    /// Game name to search for (prompted when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// File type filter
    #[arg(long = "type", default_value = "d64")]
    pub kind: String,

    /// Category filter
    #[arg(long, default_value = "games")]
    pub category: String,

    /// Directory downloaded files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Default log filter derived from `-v` / `-q`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

// Entrypoint for the CLI application.
// - Parses arguments, installs logging, builds the API client and hands it
//   to the interactive flow in `ui`.

use anyhow::Result;
use assembly64_cli::logging::init_logging;
use assembly64_cli::ui::{self, SearchOptions};
use assembly64_cli::{ApiClient, ClientConfig, Timeout};
use clap::Parser;
use tracing::debug;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    // Parse first so --help and --version work without a subscriber.
    let args = Args::parse();
    init_logging(args.log_level())?;
    debug!(?args, "CLI arguments parsed");

    let mut config = ClientConfig::new(&args.base_url, Timeout::from_secs(args.timeout)?);
    if let Some(cookie) = &args.cookie {
        config = config.with_cookie(cookie.as_str());
    }
    let api = ApiClient::new(config)?;

    let options = SearchOptions {
        name: args.name,
        kind: args.kind,
        category: args.category,
        output_dir: args.output_dir,
    };
    ui::run(&api, &options)
}

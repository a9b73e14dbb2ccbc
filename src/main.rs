use clap::Parser;
use std::path::PathBuf;

use folio::{Config, logging};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A personal portfolio, rendered as a desktop app")]
struct Cli {
    /// Configuration file (defaults to ./folio.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog file replacing the built-in content
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Directory image references are resolved against
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose)?;

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(catalog) = args.catalog {
        config.content.catalog = Some(catalog);
    }
    if let Some(assets) = args.assets {
        config.content.assets_dir = assets;
    }

    let catalog = config.catalog()?;
    tracing::info!(
        catalog = ?config.content.catalog,
        assets = %config.content.assets_dir.display(),
        "starting"
    );

    folio::gui::run(config, catalog)
        .map_err(|e| anyhow::anyhow!("Failed to run the portfolio window: {}", e))
}

use argh::FromArgs;
use tracing::info;

use wordbook::{AppState, Config, http, server};

/// Look up English words and their pronunciation over HTTP.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, default = "String::from(\"config.toml\")")]
    config_path: String,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    // Load the config file and merge it with the environment
    let config = Config::load(&opts.config_path)?;

    // Initialize logging
    wordbook::tracing::try_init(&config.tracing)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %opts.config_path,
        "starting wordbook"
    );

    let dictionary = http::build_dictionary(&config.dictionary)?;

    server::serve(&config.server, AppState::new(dictionary)).await?;

    Ok(())
}

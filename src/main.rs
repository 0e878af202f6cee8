//! Folio - renders a personal guides site's home bio and 404 page from site metadata.

mod build;
mod cli;
mod config;
mod data;
mod image;
mod init;
mod render;
mod utils;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands, QueryTarget};
use config::SiteConfig;
use init::new_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Init { name } => new_site(&config, name.is_some()),
        Commands::Build { .. } => build_site(&config),
        Commands::Query { target, shape, .. } => query(&config, *target, *shape),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() && !cli.is_init() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}

/// Resolve one metadata query and print it as JSON, or print its shape.
fn query(config: &SiteConfig, target: QueryTarget, shape: bool) -> Result<()> {
    if shape {
        let query = match target {
            QueryTarget::Bio => data::BIO_QUERY,
            QueryTarget::NotFound => data::NOT_FOUND_QUERY,
        };
        println!("{query}");
        return Ok(());
    }

    let provider = data::provider(config, false)?;
    let json = match target {
        QueryTarget::Bio => serde_json::to_string_pretty(&provider.bio()?)?,
        QueryTarget::NotFound => serde_json::to_string_pretty(&provider.not_found()?)?,
    };
    println!("{json}");
    Ok(())
}

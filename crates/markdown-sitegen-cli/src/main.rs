mod generate;

use anyhow::{Context, Result};
use markdown_sitegen_config::SiteConfig;
use std::{env, path::PathBuf, process};

use generate::{copy_recursive, generate_pages_recursive, prepare_public_dir};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine config from CLI args or the default config file
    let args: Vec<String> = env::args().collect();

    let (config, from_config) = if args.len() == 2 {
        let config_path = PathBuf::from(&args[1]);
        match SiteConfig::load_from_path(&config_path) {
            Ok(Some(config)) => (config, true),
            Ok(None) => {
                eprintln!("Error: Config file '{}' not found", config_path.display());
                eprintln!("Usage: {} [config-path]", args[0]);
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else if args.len() == 1 {
        match SiteConfig::load_from_path(SiteConfig::config_path()) {
            Ok(Some(config)) => (config, true),
            Ok(None) => (SiteConfig::default(), false),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [config-path]", args[0]);
        process::exit(1);
    };

    if from_config {
        log::info!("Loaded site config: {config:?}");
    } else {
        log::info!("No config file found, using default layout: {config:?}");
    }

    prepare_public_dir(&config.public_dir).context("Failed to prepare output directory")?;
    copy_recursive(&config.static_dir, &config.public_dir)
        .context("Failed to copy static files")?;

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
    )
    .context("Failed to generate pages")?;

    log::info!(
        "Generated {pages} pages into '{}'",
        config.public_dir.display()
    );
    Ok(())
}

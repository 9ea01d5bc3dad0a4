mod directory;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use directory::Directory;
use sone_text_config::Config;
use sone_text_engine::{PostingContext, TextParser};
use std::{fs, io, path::PathBuf};

/// Print the parts that Sone would split a post into.
#[derive(Debug, Parser)]
#[command(name = "sone-text", version, about)]
struct Args {
    /// File to parse; reads standard input when omitted.
    file: Option<PathBuf>,

    /// Config file with owner, identities and posts.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Identity id of the poster, overriding the configured owner.
    #[arg(short, long)]
    owner: Option<String>,

    /// Print the parts as JSON.
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.clone()),
        None => Config::config_path(),
    };
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if path.is_some() => {
            anyhow::bail!("Config file {} does not exist", config_path.display())
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_source(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read standard input"),
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let context = match &args.owner {
        Some(owner) => Some(
            PostingContext::for_identity(owner)
                .with_context(|| format!("Invalid owner id {owner:?}"))?,
        ),
        None => config.posting_context()?,
    };

    let directory = Directory::new(config.identities, config.posts);
    log::info!(
        "Known identities: {}, known posts: {}",
        directory.identity_count(),
        directory.post_count()
    );

    let source = read_source(args.file.as_ref())?;
    let parts = TextParser::new()
        .with_identities(&directory)
        .with_posts(&directory)
        .parse(&source, context.as_ref());

    if args.json {
        println!("{}", render::render_json(&parts)?);
    } else {
        print!("{}", render::render_listing(&parts));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    run(Args::parse())
}

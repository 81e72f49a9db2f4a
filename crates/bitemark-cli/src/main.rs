//! Bitemark CLI
//!
//! Command-line interface for Bitemark - restaurant cards with bookmarks.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bitemark_core::{Catalog, Config, StaticImageResolver};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "bitemark")]
#[command(about = "Bitemark - Restaurant cards with in-memory bookmarks")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the restaurant catalog (JSON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render restaurant cards
    #[command(alias = "ls")]
    Cards {
        /// Bookmark a restaurant before rendering
        #[arg(short, long)]
        bookmark: Vec<String>,
        /// Toggle a restaurant's bookmark before rendering (applied in order)
        #[arg(short, long)]
        toggle: Vec<String>,
        /// Only show bookmarked restaurants
        #[arg(long)]
        bookmarked: bool,
    },
    /// Show a single card and open it
    Show {
        /// Restaurant ID
        id: String,
    },
    /// Start an interactive bookmarking session
    Session,
    /// Show configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config doesn't need a catalog
    if let Commands::Config { command } = &cli.command {
        return match command {
            Some(ConfigCommands::Show) | None => {
                commands::config::show(cli.config.as_ref(), &output)
            }
        };
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    init_logging(&config, cli.verbose);

    let catalog = load_catalog(cli.catalog.as_ref(), &config)?;
    let resolver = StaticImageResolver::from_config(&config);

    match cli.command {
        Commands::Cards {
            bookmark,
            toggle,
            bookmarked,
        } => commands::cards::list(&catalog, &resolver, &bookmark, &toggle, bookmarked, &output),
        Commands::Show { id } => commands::cards::show(&catalog, &resolver, &id, &output),
        Commands::Session => commands::session::run(&catalog, &resolver, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

/// Load the catalog given on the command line, or the configured one
fn load_catalog(cli_path: Option<&PathBuf>, config: &Config) -> Result<Catalog> {
    let path = cli_path
        .or(config.catalog_path.as_ref())
        .ok_or_else(|| {
            anyhow!("No catalog given. Pass --catalog <file> or set catalog_path in the config.")
        })?;

    Catalog::load(path).map_err(|e| match e.recovery_suggestion() {
        Some(hint) => anyhow!("{}\n{}", e, hint),
        None => anyhow!(e),
    })
}

/// Initialize stderr logging
///
/// `RUST_LOG` wins over the configured level; each `-v` raises it.
fn init_logging(config: &Config, verbose: u8) {
    let log_level = match verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bitemark_core={},bitemark_cli={}",
            log_level, log_level
        ))
    });

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    debug!(level = log_level, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cards_flags() {
        let cli = Cli::try_parse_from([
            "bitemark", "--json", "cards", "-b", "r1", "-t", "r2", "-t", "r1", "--bookmarked",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Cards {
                bookmark,
                toggle,
                bookmarked,
            } => {
                assert_eq!(bookmark, vec!["r1"]);
                assert_eq!(toggle, vec!["r2", "r1"]);
                assert!(bookmarked);
            }
            _ => panic!("expected cards command"),
        }
    }

    #[test]
    fn test_parse_verbose_count() {
        let cli = Cli::try_parse_from(["bitemark", "-vv", "session"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_load_catalog_requires_path() {
        let config = Config::default();
        let err = load_catalog(None, &config).unwrap_err();
        assert!(err.to_string().contains("No catalog given"));
    }

    #[test]
    fn test_load_catalog_prefers_cli_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"id":"r1","name":"A","images":{"poster":"a"},"distance":"1 km","time":"5 min","rating":4,"reviewCount":1}]"#)
            .unwrap();

        let config = Config {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Config::default()
        };

        let path = file.path().to_path_buf();
        let catalog = load_catalog(Some(&path), &config).unwrap();
        assert_eq!(catalog.len(), 1);

        let err = load_catalog(None, &config).unwrap_err();
        assert!(err.to_string().contains("--catalog"));
    }
}

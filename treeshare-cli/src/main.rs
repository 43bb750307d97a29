//! Treeshare CLI
//!
//! Command-line front end for threshold secret splitting.
//!
//! # Commands
//! - `split` - Split a secret into share files
//! - `reconstruct` - Rebuild a secret from share files
//! - `derive` - Re-issue a share for one holder from a full secret
//! - `expand` - Print a share's zero-padded full-size view
//! - `inspect` - Show share file metadata
//! - `config` - Show or initialize configuration
//!
//! # Configuration
//! Config file: ~/.treeshare/config.toml

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod share_file;
mod symbols;

use commands::{derive, expand, inspect, reconstruct, split};

#[derive(Parser)]
#[command(name = "treeshare")]
#[command(about = "Combinatorial threshold secret splitting")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Scheme overrides shared by split and derive
#[derive(Args)]
struct SchemeArgs {
    /// Number of holders (n)
    #[arg(short = 'n', long, env = "TREESHARE_HOLDERS")]
    holders: Option<u16>,

    /// Shares needed to reconstruct (t)
    #[arg(short = 't', long, env = "TREESHARE_THRESHOLD")]
    threshold: Option<u16>,

    /// Bytes per leaf (c)
    #[arg(short = 'c', long, env = "TREESHARE_CHUNK_SIZE")]
    chunk_size: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a secret into one share file per holder
    Split {
        #[command(flatten)]
        scheme: SchemeArgs,

        /// Secret as hex (must be exactly the scheme's secret size)
        #[arg(short, long, conflicts_with = "random")]
        secret: Option<String>,

        /// Generate a random secret of the right size
        #[arg(short, long)]
        random: bool,

        /// Output directory (defaults to config output.share_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Split holders in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Rebuild a secret from at least threshold share files
    Reconstruct {
        /// Share files
        #[arg(required = true)]
        shares: Vec<PathBuf>,

        /// Expected secret fingerprint (hex)
        #[arg(short, long)]
        fingerprint: Option<String>,

        /// Write the raw secret to this file instead of printing hex
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Re-issue a share for one holder from a full secret
    Derive {
        #[command(flatten)]
        scheme: SchemeArgs,

        /// Full secret as hex
        #[arg(short, long)]
        secret: String,

        /// Holder index to derive for
        #[arg(long)]
        holder: u16,

        /// Output share file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Print a share laid out at full size, zeros where it has no data
    Expand {
        /// Share file
        share: PathBuf,
    },

    /// Show share file metadata
    Inspect {
        /// Share file
        share: PathBuf,

        /// Also print share bytes as hex
        #[arg(short, long)]
        data: bool,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration from ~/.treeshare/config.toml
    let cfg = config::load_config();

    match cli.command {
        Commands::Split {
            scheme,
            secret,
            random,
            out,
            parallel,
        } => {
            let params = cfg
                .scheme
                .resolve(scheme.holders, scheme.threshold, scheme.chunk_size)?;
            let config = split::SplitConfig {
                params,
                secret,
                random,
                output: out.unwrap_or_else(|| PathBuf::from(&cfg.output.share_dir)),
                parallel,
            };
            split::run(config)?;
        }

        Commands::Reconstruct {
            shares,
            fingerprint,
            out,
        } => {
            let config = reconstruct::ReconstructConfig {
                shares,
                fingerprint,
                output: out,
            };
            reconstruct::run(config)?;
        }

        Commands::Derive {
            scheme,
            secret,
            holder,
            out,
        } => {
            let params = cfg
                .scheme
                .resolve(scheme.holders, scheme.threshold, scheme.chunk_size)?;
            let config = derive::DeriveConfig {
                params,
                secret,
                holder,
                output: out,
            };
            derive::run(config)?;
        }

        Commands::Expand { share } => {
            expand::run(share)?;
        }

        Commands::Inspect { share, data } => {
            inspect::run(share, data)?;
        }

        Commands::Config { command } => {
            handle_config_command(command, &cfg)?;
        }
    }

    Ok(())
}

/// Handle config subcommands
fn handle_config_command(
    command: Option<ConfigCommands>,
    cfg: &config::TreeshareConfig,
) -> Result<()> {
    use console::style;

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("{}", style("Treeshare Configuration").bold().underlined());
            println!();
            println!("{}", style("[scheme]").cyan());
            println!("  holders = {}", cfg.scheme.holders);
            println!("  threshold = {}", cfg.scheme.threshold);
            println!("  chunk_size = {}", cfg.scheme.chunk_size);
            println!();
            println!("{}", style("[output]").cyan());
            println!("  share_dir = \"{}\"", cfg.output.share_dir);
            println!();

            if let Ok(path) = config::config_file_path() {
                println!("{} {}", style("Config file:").dim(), path.display());
                if !path.exists() {
                    println!(
                        "{} Run '{}' to create it",
                        style("(not created yet)").yellow(),
                        style("treeshare config init").green()
                    );
                }
            }
        }

        Some(ConfigCommands::Path) => {
            if let Ok(path) = config::config_file_path() {
                println!("{}", path.display());
            }
        }

        Some(ConfigCommands::Init { force }) => {
            let path = config::config_file_path()?;
            if path.exists() && !force {
                println!(
                    "{} Config file already exists at {}",
                    style("!").yellow(),
                    path.display()
                );
                println!("Use --force to overwrite");
                return Ok(());
            }

            config::save_config(&config::TreeshareConfig::default())?;
            println!(
                "{} Config file created at {}",
                style(symbols::CHECK).green(),
                path.display()
            );
        }
    }

    Ok(())
}

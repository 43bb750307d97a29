//! Reconstruct Command
//!
//! Rebuilds a secret from share files.

use crate::share_file;
use crate::symbols;
use anyhow::{bail, Context, Result};
use console::style;
use std::fs;
use std::path::PathBuf;
use treeshare_core::{reconstruct, Fingerprint, Share};

/// Reconstruct configuration
pub struct ReconstructConfig {
    pub shares: Vec<PathBuf>,
    /// Expected fingerprint (hex) to verify against
    pub fingerprint: Option<String>,
    /// Write raw secret bytes here instead of printing hex
    pub output: Option<PathBuf>,
}

/// Run reconstruct command
pub fn run(config: ReconstructConfig) -> Result<()> {
    let shares = config
        .shares
        .iter()
        .map(|path| share_file::read_share(path))
        .collect::<Result<Vec<Share>>>()?;

    let secret = reconstruct(&shares).context("Failed to reconstruct secret")?;
    let fingerprint = secret.fingerprint();

    if let Some(expected) = &config.fingerprint {
        let expected = Fingerprint::from_hex(expected).context("Invalid --fingerprint")?;
        if expected != fingerprint {
            bail!(
                "{} Fingerprint mismatch: expected {}, got {}",
                symbols::CROSS,
                expected,
                fingerprint
            );
        }
        println!("{} Fingerprint verified", style(symbols::CHECK).green());
    }

    match &config.output {
        Some(path) => {
            fs::write(path, secret.data())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Secret ({} bytes) written to {}",
                style(symbols::CHECK).green(),
                secret.size(),
                path.display()
            );
        }
        None => println!("{}", hex::encode(secret.data())),
    }
    println!("{} {}", style("Fingerprint:").bold(), fingerprint);

    Ok(())
}

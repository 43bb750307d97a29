//! Derive Command
//!
//! Issues a share for one holder from a known full secret.

use crate::share_file;
use crate::symbols;
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use treeshare_core::{derive_share, SchemeParameters};

/// Derive configuration
pub struct DeriveConfig {
    pub params: SchemeParameters,
    pub secret: String,
    pub holder: u16,
    pub output: PathBuf,
}

/// Run derive command
pub fn run(config: DeriveConfig) -> Result<()> {
    let secret = share_file::parse_secret(config.params, &config.secret)?;
    let share = derive_share(&secret, config.holder).context("Failed to derive share")?;

    share_file::write_share_to(&config.output, &share)?;
    println!(
        "{} {} Share for holder {} written to {}",
        style(symbols::CHECK).green(),
        symbols::KEY,
        share.holder(),
        config.output.display()
    );

    Ok(())
}

//! Split Command
//!
//! Splits a secret into one share file per holder.

use crate::share_file;
use crate::symbols;
use anyhow::{bail, Context, Result};
use console::style;
use std::path::PathBuf;
use treeshare_core::{split_all, split_all_parallel, FullSecret, SchemeParameters};

/// Split configuration
pub struct SplitConfig {
    pub params: SchemeParameters,
    /// Hex secret; exactly one of `secret` / `random` is set
    pub secret: Option<String>,
    pub random: bool,
    pub output: PathBuf,
    pub parallel: bool,
}

/// Run split command
pub fn run(config: SplitConfig) -> Result<()> {
    let params = config.params;

    let secret = match (&config.secret, config.random) {
        (Some(hex_str), false) => share_file::parse_secret(params, hex_str)?,
        (None, true) => FullSecret::random(params, &mut rand::thread_rng()),
        _ => bail!("Pass either --secret <hex> or --random"),
    };

    let shares = if config.parallel {
        split_all_parallel(&secret)
    } else {
        split_all(&secret)
    }
    .context("Failed to split secret")?;

    println!(
        "Scheme {}: secret {} bytes, {} shares of {} bytes",
        style(params).cyan(),
        params.full_size(),
        shares.len(),
        params.compressed_size()
    );

    for share in &shares {
        let path = share_file::write_share(&config.output, share)?;
        println!(
            "  {} holder {} -> {}",
            style(symbols::CHECK).green(),
            share.holder(),
            path.display()
        );
    }

    if config.random {
        println!();
        println!("{} {}", style("Secret:").bold(), hex::encode(secret.data()));
    }
    println!("{} {}", style("Fingerprint:").bold(), secret.fingerprint());

    Ok(())
}

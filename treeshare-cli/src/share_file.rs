//! Share files and hex input
//!
//! One share per file, named `share-<holder>.bin`, holding the bincode
//! encoding produced by `Share::to_bytes`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use treeshare_core::{FullSecret, SchemeParameters, Share};

/// File name used for a holder's share
pub fn file_name(holder: u16) -> String {
    format!("share-{}.bin", holder)
}

/// Write `share` into `dir`, creating the directory if needed
pub fn write_share(dir: &Path, share: &Share) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    let path = dir.join(file_name(share.holder()));
    write_share_to(&path, share)?;
    Ok(path)
}

/// Write `share` to an explicit path
pub fn write_share_to(path: &Path, share: &Share) -> Result<()> {
    let bytes = share.to_bytes().context("Failed to encode share")?;
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read and validate a share file
pub fn read_share(path: &Path) -> Result<Share> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Share::from_bytes(&bytes).with_context(|| format!("Invalid share file {}", path.display()))
}

/// Parse a hex-encoded secret for `params`
pub fn parse_secret(params: SchemeParameters, hex_str: &str) -> Result<FullSecret> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&cleaned).context("Secret is not valid hex")?;
    FullSecret::new(params, bytes).with_context(|| {
        format!(
            "Secret must be exactly {} bytes for scheme {}",
            params.full_size(),
            params
        )
    })
}

//! Expand Command
//!
//! Prints a share laid out at full secret size, zeros where it has no data.

use crate::share_file;
use anyhow::Result;
use std::path::PathBuf;
use treeshare_core::expand;

/// Run expand command
pub fn run(path: PathBuf) -> Result<()> {
    let share = share_file::read_share(&path)?;
    println!("{}", hex::encode(expand(&share).data()));
    Ok(())
}

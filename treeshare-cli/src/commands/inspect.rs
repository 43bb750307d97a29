//! Inspect Command
//!
//! Shows the metadata of a share file.

use crate::share_file;
use anyhow::Result;
use console::style;
use std::path::PathBuf;

/// Run inspect command
pub fn run(path: PathBuf, show_data: bool) -> Result<()> {
    let share = share_file::read_share(&path)?;
    let params = share.params();

    println!("{}", style(path.display()).bold().underlined());
    println!();
    println!("  Holder:        {} of 0..{}", style(share.holder()).cyan(), params.max_holder());
    println!("  Threshold:     {}", style(params.threshold()).cyan());
    println!("  Chunk size:    {}", params.chunk_size());
    println!("  Share size:    {} bytes", share.size());
    println!(
        "  Secret size:   {} bytes ({:.1}% carried)",
        params.full_size(),
        params.compression_ratio() * 100.0
    );

    if show_data {
        println!();
        println!("  {}", hex::encode(share.data()));
    }

    Ok(())
}

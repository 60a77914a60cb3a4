pub mod algo;
pub mod calc;
pub mod ops;
pub mod palindrome;
pub mod replace;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a record as a single JSON line on stdout
pub(crate) fn print_json<T: Serialize>(record: &T) -> Result<()> {
    let line = serde_json::to_string(record).context("Failed to serialize output")?;
    println!("{}", line);
    Ok(())
}

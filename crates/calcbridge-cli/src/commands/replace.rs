//! Replace command - byte-wise replacement on UTF-8 text

use super::print_json;
use crate::records::{AlgoOutput, AlgoRecord};
use anyhow::{Context, Result};
use calcbridge_algo::{replace_with_mode, ReplaceMode};
use tracing::debug;

pub fn run(input: &str, old: &str, new: &str, mode: ReplaceMode, json: bool) -> Result<()> {
    debug!(%mode, old, new, "replacing");
    let bytes = replace_with_mode(input.as_bytes(), old.as_bytes(), new.as_bytes(), mode);
    // Matches and empty-pattern insertions fall on UTF-8 boundaries
    let replaced = String::from_utf8(bytes).context("Replacement produced invalid UTF-8")?;

    let output = AlgoOutput::Text(replaced);
    if json {
        print_json(&AlgoRecord::new("replace", output).with_text(input))
    } else {
        println!("{}", output.render());
        Ok(())
    }
}

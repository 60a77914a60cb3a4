//! Ops command - list the operation table

use super::print_json;
use crate::records::OpRecord;
use anyhow::Result;
use calcbridge_ffi::Operation;

pub fn run(json: bool) -> Result<()> {
    if json {
        let records: Vec<OpRecord> = Operation::ALL.into_iter().map(OpRecord::from).collect();
        return print_json(&records);
    }

    for op in Operation::ALL {
        let marker = if op.is_fallible() { "  (may fail)" } else { "" };
        println!(
            "{:<12} {:<24} {}{}",
            op.name(),
            op.symbol(),
            op.signature(),
            marker
        );
    }
    Ok(())
}

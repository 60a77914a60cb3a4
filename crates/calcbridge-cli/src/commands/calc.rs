//! Calc command - call one operation through the selected backend

use super::print_json;
use crate::records::CallRecord;
use anyhow::Result;
use calcbridge_ffi::{invoke, Arithmetic, Operation};
use tracing::debug;

/// Call `op` with `args` and print the result
///
/// Error signals are printed (as a record with `--json`) and returned, so the
/// process exits non-zero.
pub fn run(backend: &dyn Arithmetic, op: Operation, args: &[i64], json: bool) -> Result<()> {
    debug!(%op, ?args, "calling");
    let result = invoke(backend, op, args);

    if json {
        print_json(&CallRecord::new(op, args, &result))?;
    }

    match result {
        Ok(value) => {
            if !json {
                println!("{}", value.to_i64());
            }
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(e).context(format!("{} failed", op))),
    }
}

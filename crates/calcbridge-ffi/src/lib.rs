//! Native arithmetic boundary
//!
//! Integer arithmetic computed by a C library (`native/calc.c`) instead of by
//! Rust, behind a safe API:
//! - Type marshaling (host integers ↔ C `int` / `long long`)
//! - Statically linked calls into the bundled library (default)
//! - Dynamically loaded calls through `libloading`
//! - A pure Rust reference backend for cross-checking
//!
//! # Example
//!
//! ```
//! use calcbridge_ffi::{calc, CalcError};
//!
//! assert_eq!(calc::add(3, 4), 7);
//! assert_eq!(calc::divide(12, 3), Ok(4));
//! assert_eq!(calc::divide(10, 0), Err(CalcError::DivisionByZero));
//! ```
//!
//! # Safety
//!
//! All `unsafe` code lives in `sys`, `calc` and `loader`. Every call that
//! crosses the boundary is independent and touches no shared state, so the
//! whole API is safe to use from any number of threads.

pub mod backend;
pub mod calc;
pub mod caller;
pub mod error;
pub mod loader;
pub mod marshal;
pub mod operation;
pub mod types;

mod sys;

pub use backend::{Arithmetic, BackendKind, Checked, Linked};
pub use caller::{invoke, CallError};
pub use error::{CalcError, CalcResult};
pub use loader::{Dynamic, LibraryLoader, LoadError};
pub use marshal::MarshalError;
pub use operation::Operation;
pub use types::{CType, ExternType};

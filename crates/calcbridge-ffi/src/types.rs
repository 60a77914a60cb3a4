//! FFI type system - C-compatible types at the boundary
//!
//! Defines:
//! - `ExternType`: the declared C type of a parameter or return slot
//! - `CType`: a C value on its way across the boundary
//!
//! Type mapping:
//! - ExternType::CInt → CType::Int(i32)
//! - ExternType::CLongLong → CType::LongLong(i64)

use serde::{Deserialize, Serialize};
use std::fmt;

/// C types that appear in native signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExternType {
    /// C `int` (32 bits on every supported target)
    CInt,
    /// C `long long` (64 bits)
    CLongLong,
}

impl ExternType {
    /// Get a display name for this extern type
    pub fn display_name(&self) -> &'static str {
        match self {
            ExternType::CInt => "c_int",
            ExternType::CLongLong => "c_longlong",
        }
    }

    /// Inclusive range of host values representable in this type
    pub fn range(&self) -> (i64, i64) {
        match self {
            ExternType::CInt => (i32::MIN as i64, i32::MAX as i64),
            ExternType::CLongLong => (i64::MIN, i64::MAX),
        }
    }
}

impl fmt::Display for ExternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// C value representation for the FFI boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    /// C int value
    Int(i32),
    /// C long long value
    LongLong(i64),
}

impl CType {
    /// The extern type this value inhabits
    pub fn extern_type(&self) -> ExternType {
        match self {
            CType::Int(_) => ExternType::CInt,
            CType::LongLong(_) => ExternType::CLongLong,
        }
    }

    /// Widen to the host integer type. Lossless for every variant.
    pub fn to_i64(self) -> i64 {
        match self {
            CType::Int(i) => i as i64,
            CType::LongLong(l) => l,
        }
    }
}

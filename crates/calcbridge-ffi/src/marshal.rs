//! Type marshaling - host integers ↔ C values
//!
//! Host-side operands arrive as `i64` (the widest signed type the command
//! line and the dynamic entry point accept) and are narrowed to the declared
//! C type of each parameter. Narrowing never truncates: a value outside the
//! target range is a `MarshalError`.
//!
//! The conversion functions hold no state; marshaling one argument never
//! depends on another.

use crate::types::{CType, ExternType};
use thiserror::Error;

/// Marshal error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// Value does not fit the target C type
    #[error("Number {value} out of range for {target}")]
    NumberOutOfRange { value: i64, target: ExternType },

    /// C value has a different type than the slot it is used for
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: ExternType, got: ExternType },
}

/// Marshal a host integer to the given C type
///
/// # Examples
///
/// ```
/// # use calcbridge_ffi::marshal::to_c;
/// # use calcbridge_ffi::{CType, ExternType};
/// assert_eq!(to_c(42, ExternType::CInt), Ok(CType::Int(42)));
/// assert!(to_c(3_000_000_000, ExternType::CInt).is_err());
/// assert_eq!(to_c(3_000_000_000, ExternType::CLongLong), Ok(CType::LongLong(3_000_000_000)));
/// ```
pub fn to_c(value: i64, target: ExternType) -> Result<CType, MarshalError> {
    match target {
        ExternType::CInt => i32::try_from(value)
            .map(CType::Int)
            .map_err(|_| MarshalError::NumberOutOfRange { value, target }),
        ExternType::CLongLong => Ok(CType::LongLong(value)),
    }
}

/// Marshal a C value back to a host integer
pub fn from_c(value: CType) -> i64 {
    value.to_i64()
}

/// Extract a C `int`, rejecting any other C type
pub fn expect_int(value: CType) -> Result<i32, MarshalError> {
    match value {
        CType::Int(i) => Ok(i),
        other => Err(MarshalError::TypeMismatch {
            expected: ExternType::CInt,
            got: other.extern_type(),
        }),
    }
}

/// Extract a C `long long`, rejecting any other C type
pub fn expect_long_long(value: CType) -> Result<i64, MarshalError> {
    match value {
        CType::LongLong(l) => Ok(l),
        other => Err(MarshalError::TypeMismatch {
            expected: ExternType::CLongLong,
            got: other.extern_type(),
        }),
    }
}

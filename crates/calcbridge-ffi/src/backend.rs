//! Backends implementing the arithmetic boundary
//!
//! `Arithmetic` is the seam: callers hold a `&dyn Arithmetic` and do not care
//! how the routine is reached.
//! - `Linked`: the C library bundled with this crate, linked statically
//! - `Dynamic` (see `loader`): the same routines resolved from a shared library
//! - `Checked`: plain Rust, built from the standard checked/wrapping primitives

use crate::calc;
use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer arithmetic across a native boundary
///
/// Every method is a pure function of its arguments. Implementations must be
/// callable from many threads at once.
pub trait Arithmetic: Send + Sync {
    /// Short backend name for logs and output
    fn name(&self) -> &'static str;

    fn add(&self, a: i32, b: i32) -> i32;
    fn subtract(&self, a: i32, b: i32) -> i32;
    fn multiply(&self, a: i32, b: i32) -> i32;
    /// Fails with `DivisionByZero` when `b == 0`
    fn divide(&self, a: i32, b: i32) -> CalcResult<i32>;
    /// Fails with `Overflow` when the sum leaves the 32-bit range
    fn add_with_overflow_check(&self, a: i32, b: i32) -> CalcResult<i32>;
    fn add_long(&self, a: i64, b: i64) -> i64;
    fn abs_value(&self, a: i32) -> i32;
    fn max_value(&self, a: i32, b: i32) -> i32;
    fn min_value(&self, a: i32, b: i32) -> i32;
}

/// Which backend to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Linked,
    Dynamic,
    Checked,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Linked => "linked",
            BackendKind::Dynamic => "dynamic",
            BackendKind::Checked => "checked",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linked" | "native" => Ok(BackendKind::Linked),
            "dynamic" => Ok(BackendKind::Dynamic),
            "checked" | "rust" => Ok(BackendKind::Checked),
            other => Err(format!(
                "unknown backend '{}' (expected 'linked', 'dynamic' or 'checked')",
                other
            )),
        }
    }
}

/// The bundled C library, linked into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct Linked;

impl Arithmetic for Linked {
    fn name(&self) -> &'static str {
        "linked"
    }

    fn add(&self, a: i32, b: i32) -> i32 {
        calc::add(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        calc::subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        calc::multiply(a, b)
    }

    fn divide(&self, a: i32, b: i32) -> CalcResult<i32> {
        calc::divide(a, b)
    }

    fn add_with_overflow_check(&self, a: i32, b: i32) -> CalcResult<i32> {
        calc::add_with_overflow_check(a, b)
    }

    fn add_long(&self, a: i64, b: i64) -> i64 {
        calc::add_long(a, b)
    }

    fn abs_value(&self, a: i32) -> i32 {
        calc::abs_value(a)
    }

    fn max_value(&self, a: i32, b: i32) -> i32 {
        calc::max_value(a, b)
    }

    fn min_value(&self, a: i32, b: i32) -> i32 {
        calc::min_value(a, b)
    }
}

/// Reference implementation in plain Rust
///
/// Wrapping results match two's complement, which is what the bundled C
/// library produces too.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checked;

impl Arithmetic for Checked {
    fn name(&self) -> &'static str {
        "checked"
    }

    fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }

    fn divide(&self, a: i32, b: i32) -> CalcResult<i32> {
        if b == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a.wrapping_div(b))
    }

    fn add_with_overflow_check(&self, a: i32, b: i32) -> CalcResult<i32> {
        a.checked_add(b).ok_or(CalcError::Overflow { a, b })
    }

    fn add_long(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    fn abs_value(&self, a: i32) -> i32 {
        a.wrapping_abs()
    }

    fn max_value(&self, a: i32, b: i32) -> i32 {
        a.max(b)
    }

    fn min_value(&self, a: i32, b: i32) -> i32 {
        a.min(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("linked".parse::<BackendKind>(), Ok(BackendKind::Linked));
        assert_eq!("Dynamic".parse::<BackendKind>(), Ok(BackendKind::Dynamic));
        assert_eq!("rust".parse::<BackendKind>(), Ok(BackendKind::Checked));
        assert!("jit".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_backend_kind_default_is_linked() {
        assert_eq!(BackendKind::default(), BackendKind::Linked);
        assert_eq!(BackendKind::default().to_string(), "linked");
    }

    #[test]
    fn test_checked_backend() {
        let c = Checked;
        assert_eq!(c.add(3, 4), 7);
        assert_eq!(c.divide(i32::MIN, -1), Ok(i32::MIN));
        assert_eq!(c.divide(1, 0), Err(CalcError::DivisionByZero));
        assert!(c.add_with_overflow_check(i32::MAX, 1).is_err());
        assert_eq!(c.abs_value(i32::MIN), i32::MIN);
    }

    #[test]
    fn test_backends_are_object_safe() {
        let backends: Vec<Box<dyn Arithmetic>> = vec![Box::new(Linked), Box::new(Checked)];
        for backend in &backends {
            assert_eq!(backend.multiply(6, 7), 42, "backend {}", backend.name());
        }
    }
}

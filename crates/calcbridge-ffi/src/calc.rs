//! Safe wrappers over the statically linked C library
//!
//! Each function converts its operands to C types, crosses the boundary once
//! and converts the result back. Nothing is cached between calls.
//!
//! Wrapping results (`add`, `subtract`, `multiply`, `add_long`) are whatever
//! the native side produces on overflow; callers should not depend on the
//! exact value.

use crate::error::{CalcError, CalcResult};
use crate::sys;
use std::os::raw::{c_int, c_longlong};
use tracing::{debug, warn};

/// `a + b`, computed natively.
pub fn add(a: i32, b: i32) -> i32 {
    let result = unsafe { sys::add(a as c_int, b as c_int) } as i32;
    debug!(op = "add", a, b, result, "native call");
    result
}

/// `a - b`, computed natively.
pub fn subtract(a: i32, b: i32) -> i32 {
    let result = unsafe { sys::subtract(a as c_int, b as c_int) } as i32;
    debug!(op = "subtract", a, b, result, "native call");
    result
}

/// `a * b`, computed natively.
pub fn multiply(a: i32, b: i32) -> i32 {
    let result = unsafe { sys::multiply(a as c_int, b as c_int) } as i32;
    debug!(op = "multiply", a, b, result, "native call");
    result
}

/// Truncating division.
///
/// The divisor is checked before the call: a zero divisor never reaches the
/// native side.
///
/// ```
/// # use calcbridge_ffi::{calc, CalcError};
/// assert_eq!(calc::divide(-7, 2), Ok(-3));
/// assert_eq!(calc::divide(1, 0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide(a: i32, b: i32) -> CalcResult<i32> {
    if b == 0 {
        warn!(op = "divide", a, "division by zero");
        return Err(CalcError::DivisionByZero);
    }
    let result = unsafe { sys::divide(a as c_int, b as c_int) } as i32;
    debug!(op = "divide", a, b, result, "native call");
    Ok(result)
}

/// `a + b`, failing when the sum leaves the 32-bit range.
///
/// Overflow is detected on the native side and reported through an out-flag.
pub fn add_with_overflow_check(a: i32, b: i32) -> CalcResult<i32> {
    let mut has_overflow: c_int = 0;
    let result = unsafe { sys::add_with_overflow_check(a as c_int, b as c_int, &mut has_overflow) };
    if has_overflow != 0 {
        warn!(op = "add_with_overflow_check", a, b, "integer overflow");
        return Err(CalcError::Overflow { a, b });
    }
    debug!(op = "add_with_overflow_check", a, b, result, "native call");
    Ok(result as i32)
}

/// 64-bit `a + b`, computed natively. No overflow check.
pub fn add_long(a: i64, b: i64) -> i64 {
    let result = unsafe { sys::add_long(a as c_longlong, b as c_longlong) } as i64;
    debug!(op = "add_long", a, b, result, "native call");
    result
}

/// Absolute value. `abs_value(i32::MIN)` is `i32::MIN`.
pub fn abs_value(a: i32) -> i32 {
    let result = unsafe { sys::abs_value(a as c_int) } as i32;
    debug!(op = "abs_value", a, result, "native call");
    result
}

/// The larger of `a` and `b`.
pub fn max_value(a: i32, b: i32) -> i32 {
    let result = unsafe { sys::max_value(a as c_int, b as c_int) } as i32;
    debug!(op = "max_value", a, b, result, "native call");
    result
}

/// The smaller of `a` and `b`.
pub fn min_value(a: i32, b: i32) -> i32 {
    let result = unsafe { sys::min_value(a as c_int, b as c_int) } as i32;
    debug!(op = "min_value", a, b, result, "native call");
    result
}

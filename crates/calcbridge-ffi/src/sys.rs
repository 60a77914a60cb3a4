//! Raw declarations for the bundled C library (see `native/calc.h`).
//!
//! The build script compiles `native/calc.c` into a static archive and emits
//! the link directive, so no `#[link]` attribute is needed here.

use std::os::raw::{c_int, c_longlong};

extern "C" {
    pub fn add(a: c_int, b: c_int) -> c_int;
    pub fn subtract(a: c_int, b: c_int) -> c_int;
    pub fn multiply(a: c_int, b: c_int) -> c_int;
    /// `b` must be non-zero.
    pub fn divide(a: c_int, b: c_int) -> c_int;
    pub fn add_with_overflow_check(a: c_int, b: c_int, has_overflow: *mut c_int) -> c_int;
    pub fn add_long(a: c_longlong, b: c_longlong) -> c_longlong;
    pub fn abs_value(a: c_int) -> c_int;
    pub fn max_value(a: c_int, b: c_int) -> c_int;
    pub fn min_value(a: c_int, b: c_int) -> c_int;
}

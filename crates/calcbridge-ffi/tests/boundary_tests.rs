//! Boundary behaviour of the native arithmetic routines
//!
//! Covers:
//! - Worked examples and table-driven cases
//! - Error signals (division by zero, overflow)
//! - Algebraic properties over the whole i32 range
//! - Agreement between the native and pure Rust backends
//! - Concurrent use from many threads

use calcbridge_ffi::{calc, Arithmetic, CalcError, Checked, Linked};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::thread;

// ============================================================================
// Table-driven cases
// ============================================================================

#[rstest]
#[case::positive_numbers(3, 4, 7)]
#[case::zero_and_positive(0, 4, 4)]
#[case::zero_and_zero(0, 0, 0)]
#[case::negative_numbers(-3, -4, -7)]
#[case::mixed_numbers(-3, 4, 1)]
fn test_add_table(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(calc::add(a, b), expected);
}

#[rstest]
#[case::normal_division(10, 2, Ok(5))]
#[case::division_by_zero(10, 0, Err(CalcError::DivisionByZero))]
#[case::negative_division(-10, 2, Ok(-5))]
#[case::zero_dividend(0, 5, Ok(0))]
fn test_divide_table(#[case] a: i32, #[case] b: i32, #[case] expected: Result<i32, CalcError>) {
    assert_eq!(calc::divide(a, b), expected);
}

#[test]
fn test_error_messages() {
    let err = calc::divide(10, 0).unwrap_err();
    assert!(err.to_string().contains("division by zero"));

    let err = calc::add_with_overflow_check(i32::MAX, 1).unwrap_err();
    assert!(err.to_string().contains("integer overflow"));

    let err = calc::add_with_overflow_check(i32::MIN, -1).unwrap_err();
    assert!(err.to_string().contains("integer overflow"));
}

#[test]
fn test_large_numbers_addition() {
    let result = calc::add_long(i32::MAX as i64 + 1, i32::MAX as i64 + 1);
    assert!(result > i32::MAX as i64);
}

#[test]
fn test_composite_operations() {
    // (10 + 5) * 2 - 8
    let step1 = calc::add(10, 5);
    let step2 = calc::multiply(step1, 2);
    let step3 = calc::subtract(step2, 8);
    assert_eq!(step3, 22);

    // |a + b| with both negative
    assert_eq!(calc::abs_value(calc::add(-5, -3)), 8);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_divide_nonzero_truncates(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        prop_assert_eq!(calc::divide(a, b), Ok(a.wrapping_div(b)));
    }

    #[test]
    fn prop_divide_by_zero_always_fails(a in any::<i32>()) {
        prop_assert_eq!(calc::divide(a, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn prop_abs_is_symmetric(x in (i32::MIN + 1)..=i32::MAX) {
        prop_assert_eq!(calc::abs_value(x), calc::abs_value(-x));
    }

    #[test]
    fn prop_max_plus_min_is_sum(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(
            calc::max_value(a, b).wrapping_add(calc::min_value(a, b)),
            a.wrapping_add(b)
        );
    }

    #[test]
    fn prop_overflow_flag_matches_checked_add(a in any::<i32>(), b in any::<i32>()) {
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(calc::add_with_overflow_check(a, b), Ok(sum)),
            None => prop_assert_eq!(
                calc::add_with_overflow_check(a, b),
                Err(CalcError::Overflow { a, b })
            ),
        }
    }

    #[test]
    fn prop_native_agrees_with_reference(a in any::<i32>(), b in any::<i32>(), x in any::<i64>(), y in any::<i64>()) {
        let native: &dyn Arithmetic = &Linked;
        let reference: &dyn Arithmetic = &Checked;
        prop_assert_eq!(native.add(a, b), reference.add(a, b));
        prop_assert_eq!(native.subtract(a, b), reference.subtract(a, b));
        prop_assert_eq!(native.multiply(a, b), reference.multiply(a, b));
        prop_assert_eq!(native.divide(a, b), reference.divide(a, b));
        prop_assert_eq!(native.add_long(x, y), reference.add_long(x, y));
        prop_assert_eq!(native.abs_value(a), reference.abs_value(a));
        prop_assert_eq!(native.max_value(a, b), reference.max_value(a, b));
        prop_assert_eq!(native.min_value(a, b), reference.min_value(a, b));
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_addition() {
    let results: Vec<i32> = thread::scope(|s| {
        let handles: Vec<_> = (0..100)
            .map(|i| s.spawn(move || calc::add(i, i)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result, i as i32 * 2, "concurrent addition failed");
    }
}

#[test]
fn test_concurrent_mixed_operations() {
    let backend: &dyn Arithmetic = &Linked;
    thread::scope(|s| {
        for val in 0..100 {
            s.spawn(move || {
                assert_eq!(backend.add(val, val), val * 2);
                assert_eq!(backend.subtract(val * 2, val), val);
                assert_eq!(backend.multiply(val, 2), val * 2);
                if val != 0 {
                    assert_eq!(backend.divide(val * 2, 2), Ok(val));
                }
            });
        }
    });
}

//! Calling a routine by name with host values
//!
//! `invoke` is the dynamic entry point used by the command line: it checks the
//! argument count against the operation's declared signature, marshals each
//! argument to its C type, dispatches to the backend and hands back the C
//! result.

use crate::backend::Arithmetic;
use crate::error::CalcError;
use crate::marshal::{self, MarshalError};
use crate::operation::Operation;
use crate::types::CType;
use thiserror::Error;

/// Errors from a dynamic call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// Host ↔ C conversion failed
    #[error("Marshal error: {0}")]
    Marshal(#[from] MarshalError),

    /// The routine reported an error signal
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Wrong number of arguments
    #[error("{op} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        op: Operation,
        expected: usize,
        got: usize,
    },
}

/// Call `op` on `backend` with host integer arguments
///
/// # Examples
///
/// ```
/// # use calcbridge_ffi::{invoke, CType, Linked, Operation, CallError, CalcError};
/// assert_eq!(invoke(&Linked, Operation::Add, &[3, 4]), Ok(CType::Int(7)));
/// assert_eq!(
///     invoke(&Linked, Operation::Divide, &[1, 0]),
///     Err(CallError::Calc(CalcError::DivisionByZero))
/// );
/// ```
pub fn invoke(backend: &dyn Arithmetic, op: Operation, args: &[i64]) -> Result<CType, CallError> {
    if args.len() != op.arity() {
        return Err(CallError::ArityMismatch {
            op,
            expected: op.arity(),
            got: args.len(),
        });
    }

    let c_args = args
        .iter()
        .zip(op.params())
        .map(|(&arg, &ty)| marshal::to_c(arg, ty))
        .collect::<Result<Vec<_>, _>>()?;

    dispatch(backend, op, &c_args)
}

fn dispatch(backend: &dyn Arithmetic, op: Operation, args: &[CType]) -> Result<CType, CallError> {
    let int = |i: usize| marshal::expect_int(args[i]);

    let result = match op {
        Operation::Add => CType::Int(backend.add(int(0)?, int(1)?)),
        Operation::Subtract => CType::Int(backend.subtract(int(0)?, int(1)?)),
        Operation::Multiply => CType::Int(backend.multiply(int(0)?, int(1)?)),
        Operation::Divide => CType::Int(backend.divide(int(0)?, int(1)?)?),
        Operation::AddWithOverflowCheck => {
            CType::Int(backend.add_with_overflow_check(int(0)?, int(1)?)?)
        }
        Operation::AddLong => {
            let a = marshal::expect_long_long(args[0])?;
            let b = marshal::expect_long_long(args[1])?;
            CType::LongLong(backend.add_long(a, b))
        }
        Operation::AbsValue => CType::Int(backend.abs_value(int(0)?)),
        Operation::MaxValue => CType::Int(backend.max_value(int(0)?, int(1)?)),
        Operation::MinValue => CType::Int(backend.min_value(int(0)?, int(1)?)),
    };
    Ok(result)
}

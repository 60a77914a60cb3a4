//! Error signals produced at the arithmetic boundary

use thiserror::Error;

/// The two error kinds an arithmetic call can report
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow: {a} + {b} does not fit in 32 bits")]
    Overflow { a: i32, b: i32 },
}

/// Result type for fallible arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_signal() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        let msg = CalcError::Overflow { a: i32::MAX, b: 1 }.to_string();
        assert!(msg.contains("integer overflow"));
        assert!(msg.contains("2147483647"));
    }
}

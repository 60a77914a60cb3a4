//! The operation table: one entry per native routine
//!
//! Each `Operation` knows its command-line name, its C symbol and its C
//! signature. The dynamic entry point (`caller::invoke`) and the dynamic
//! loader are both driven from this table.

use crate::types::ExternType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A native arithmetic routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "sub")]
    Subtract,
    #[serde(rename = "mul")]
    Multiply,
    #[serde(rename = "div")]
    Divide,
    #[serde(rename = "add-checked")]
    AddWithOverflowCheck,
    #[serde(rename = "add-long")]
    AddLong,
    #[serde(rename = "abs")]
    AbsValue,
    #[serde(rename = "max")]
    MaxValue,
    #[serde(rename = "min")]
    MinValue,
}

const INT: &[ExternType] = &[ExternType::CInt];
const INT_INT: &[ExternType] = &[ExternType::CInt, ExternType::CInt];
const LONG_LONG: &[ExternType] = &[ExternType::CLongLong, ExternType::CLongLong];

impl Operation {
    /// Every operation, in declaration order of `calc.h`
    pub const ALL: [Operation; 9] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::AddWithOverflowCheck,
        Operation::AddLong,
        Operation::AbsValue,
        Operation::MaxValue,
        Operation::MinValue,
    ];

    /// Short name used on the command line and in JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
            Operation::AddWithOverflowCheck => "add-checked",
            Operation::AddLong => "add-long",
            Operation::AbsValue => "abs",
            Operation::MaxValue => "max",
            Operation::MinValue => "min",
        }
    }

    /// Exported C symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::AddWithOverflowCheck => "add_with_overflow_check",
            Operation::AddLong => "add_long",
            Operation::AbsValue => "abs_value",
            Operation::MaxValue => "max_value",
            Operation::MinValue => "min_value",
        }
    }

    /// Declared C parameter types, excluding the overflow out-flag
    pub fn params(&self) -> &'static [ExternType] {
        match self {
            Operation::AbsValue => INT,
            Operation::AddLong => LONG_LONG,
            _ => INT_INT,
        }
    }

    /// Declared C return type
    pub fn returns(&self) -> ExternType {
        match self {
            Operation::AddLong => ExternType::CLongLong,
            _ => ExternType::CInt,
        }
    }

    pub fn arity(&self) -> usize {
        self.params().len()
    }

    /// Whether the operation can report an error signal
    pub fn is_fallible(&self) -> bool {
        matches!(self, Operation::Divide | Operation::AddWithOverflowCheck)
    }

    /// Signature key, e.g. `(c_int, c_int) -> c_int`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.params().iter().map(|t| t.display_name()).collect();
        format!("({}) -> {}", params.join(", "), self.returns())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Accepts either the short name or the C symbol
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s || op.symbol() == s)
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

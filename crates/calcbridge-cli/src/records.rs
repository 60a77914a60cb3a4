//! JSON output records
//!
//! Empty optional fields are left out of the output.

use calcbridge_ffi::{CallError, CType, Operation};
use serde::Serialize;

/// One call through the boundary
#[derive(Debug, Serialize)]
pub struct CallRecord {
    pub op: Operation,
    pub args: Vec<i64>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CallRecord {
    pub fn new(op: Operation, args: &[i64], result: &Result<CType, CallError>) -> Self {
        let (value, error) = match result {
            Ok(value) => (Some(value.to_i64()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            op,
            args: args.to_vec(),
            ok: result.is_ok(),
            value,
            error,
        }
    }
}

/// One entry of the operation table
#[derive(Debug, Serialize)]
pub struct OpRecord {
    pub name: &'static str,
    pub symbol: &'static str,
    pub signature: String,
    pub fallible: bool,
}

impl From<Operation> for OpRecord {
    fn from(op: Operation) -> Self {
        Self {
            name: op.name(),
            symbol: op.symbol(),
            signature: op.signature(),
            fallible: op.is_fallible(),
        }
    }
}

/// Result of an exercise or text command
#[derive(Debug, Serialize)]
pub struct AlgoRecord {
    pub exercise: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
    pub output: AlgoOutput,
}

impl AlgoRecord {
    pub fn new(exercise: &'static str, output: AlgoOutput) -> Self {
        Self {
            exercise,
            input: None,
            text: None,
            target: None,
            k: None,
            output,
        }
    }

    pub fn with_input(mut self, input: &[i64]) -> Self {
        self.input = Some(input.to_vec());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AlgoOutput {
    Pair(Option<[usize; 2]>),
    Triples(Vec<[i64; 3]>),
    Values(Vec<i64>),
    Digits(Vec<u8>),
    Scalar(i64),
    Flag(bool),
    Text(String),
}

impl AlgoOutput {
    /// Plain text rendering
    pub fn render(&self) -> String {
        match self {
            AlgoOutput::Pair(Some([i, j])) => format!("{} {}", i, j),
            AlgoOutput::Pair(None) => "no pair".to_string(),
            AlgoOutput::Triples(triples) => triples
                .iter()
                .map(|t| format!("{:?}", t))
                .collect::<Vec<_>>()
                .join("\n"),
            AlgoOutput::Values(values) => format!("{:?}", values),
            AlgoOutput::Digits(digits) => format!("{:?}", digits),
            AlgoOutput::Scalar(n) => n.to_string(),
            AlgoOutput::Flag(b) => b.to_string(),
            AlgoOutput::Text(s) => s.clone(),
        }
    }
}

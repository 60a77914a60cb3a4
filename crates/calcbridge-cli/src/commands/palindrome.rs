//! Palindrome command

use super::print_json;
use crate::records::{AlgoOutput, AlgoRecord};
use anyhow::Result;
use calcbridge_algo::is_palindrome;

pub fn run(text: &str, json: bool) -> Result<()> {
    let output = AlgoOutput::Flag(is_palindrome(text));
    if json {
        print_json(&AlgoRecord::new("palindrome", output).with_text(text))
    } else {
        println!("{}", output.render());
        Ok(())
    }
}

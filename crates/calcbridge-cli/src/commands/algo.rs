//! Algo command - array exercises on integers from the command line

use super::print_json;
use crate::records::{AlgoOutput, AlgoRecord};
use anyhow::{bail, Result};
use calcbridge_algo::arrays;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Exercise {
    /// Indices of two values that add up to the target
    TwoSum {
        /// Sum to look for
        #[arg(long, short = 't', allow_hyphen_values = true)]
        target: i64,
        /// Use the nested-loop search instead of the hash map
        #[arg(long)]
        brute: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Unique triples that sum to zero
    ThreeSum {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Quicksort in place
    Sort {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Largest sum of a contiguous run (0 for no input)
    MaxSubarray {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Merge two sorted lists
    Merge {
        /// First sorted list, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        first: Vec<i64>,
        /// Second sorted list, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        second: Vec<i64>,
    },
    /// Drop repeated values from a sorted list
    Dedup {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Rotate right by k places
    Rotate {
        #[arg(long, short = 'k')]
        k: usize,
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Add one to a number given as decimal digits
    PlusOne {
        #[arg(required = true, value_parser = clap::value_parser!(u8).range(0..=9))]
        digits: Vec<u8>,
    },
    /// Move zeros to the end, keeping the order of the rest
    MoveZeroes {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Values present in both lists
    Intersection {
        /// Comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        first: Vec<i64>,
        /// Comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        second: Vec<i64>,
    },
}

pub fn run(exercise: Exercise, json: bool) -> Result<()> {
    let record = evaluate(exercise)?;
    if json {
        print_json(&record)
    } else {
        println!("{}", record.output.render());
        Ok(())
    }
}

fn evaluate(exercise: Exercise) -> Result<AlgoRecord> {
    let record = match exercise {
        Exercise::TwoSum {
            target,
            brute,
            nums,
        } => {
            let found = if brute {
                arrays::two_sum_brute(&nums, target)
            } else {
                arrays::two_sum(&nums, target)
            };
            let mut record = AlgoRecord::new("two-sum", AlgoOutput::Pair(found.map(|(i, j)| [i, j])))
                .with_input(&nums);
            record.target = Some(target);
            record
        }
        Exercise::ThreeSum { nums } => {
            AlgoRecord::new("three-sum", AlgoOutput::Triples(arrays::three_sum(&nums)))
                .with_input(&nums)
        }
        Exercise::Sort { nums } => {
            let mut sorted = nums.clone();
            arrays::quick_sort(&mut sorted);
            AlgoRecord::new("sort", AlgoOutput::Values(sorted)).with_input(&nums)
        }
        Exercise::MaxSubarray { nums } => {
            AlgoRecord::new("max-subarray", AlgoOutput::Scalar(arrays::max_sub_array(&nums)))
                .with_input(&nums)
        }
        Exercise::Merge { first, second } => {
            ensure_sorted("--first", &first)?;
            ensure_sorted("--second", &second)?;
            let mut merged = first.clone();
            merged.resize(first.len() + second.len(), 0);
            arrays::merge(&mut merged, first.len(), &second, second.len());
            AlgoRecord::new("merge", AlgoOutput::Values(merged))
        }
        Exercise::Dedup { nums } => {
            ensure_sorted("input", &nums)?;
            let mut unique = nums.clone();
            let len = arrays::remove_duplicates(&mut unique);
            unique.truncate(len);
            AlgoRecord::new("dedup", AlgoOutput::Values(unique)).with_input(&nums)
        }
        Exercise::Rotate { k, nums } => {
            let mut rotated = nums.clone();
            arrays::rotate(&mut rotated, k);
            let mut record =
                AlgoRecord::new("rotate", AlgoOutput::Values(rotated)).with_input(&nums);
            record.k = Some(k);
            record
        }
        Exercise::PlusOne { digits } => {
            AlgoRecord::new("plus-one", AlgoOutput::Digits(arrays::plus_one(&digits)))
        }
        Exercise::MoveZeroes { nums } => {
            let mut moved = nums.clone();
            arrays::move_zeroes(&mut moved);
            AlgoRecord::new("move-zeroes", AlgoOutput::Values(moved)).with_input(&nums)
        }
        Exercise::Intersection { first, second } => AlgoRecord::new(
            "intersection",
            AlgoOutput::Values(arrays::intersection(&first, &second)),
        ),
    };
    Ok(record)
}

fn ensure_sorted(what: &str, nums: &[i64]) -> Result<()> {
    if nums.windows(2).any(|w| w[0] > w[1]) {
        bail!("{} must be sorted in ascending order", what);
    }
    Ok(())
}

//! Array exercises
//!
//! All functions work on `i64` so that values parsed from the command line
//! need no narrowing. Sums that could leave the `i64` range are computed in
//! `i128`.

use std::collections::{HashMap, HashSet};

/// Indices of two elements summing to `target`, using a single hash map pass
///
/// Returns the first pair completed while scanning left to right, lower index
/// first.
///
/// ```
/// # use calcbridge_algo::arrays::two_sum;
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2, 3], 10), None);
/// ```
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (i, &n) in nums.iter().enumerate() {
        if let Some(&j) = target.checked_sub(n).and_then(|another| seen.get(&another)) {
            return Some((j, i));
        }
        seen.insert(n, i);
    }
    None
}

/// Quadratic two-sum: the lexicographically smallest index pair
pub fn two_sum_brute(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] as i128 + nums[j] as i128 == target as i128 {
                return Some((i, j));
            }
        }
    }
    None
}

/// All unique triples summing to zero, each sorted, in ascending order
///
/// Sorts a copy of the input with `quick_sort`, then sweeps two pointers.
pub fn three_sum(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut result = Vec::new();
    if nums.len() < 3 {
        return result;
    }

    let mut nums = nums.to_vec();
    quick_sort(&mut nums);

    for i in 0..nums.len() - 2 {
        if i > 0 && nums[i] == nums[i - 1] {
            continue;
        }

        let (mut left, mut right) = (i + 1, nums.len() - 1);
        while left < right {
            let sum = nums[i] as i128 + nums[left] as i128 + nums[right] as i128;
            if sum == 0 {
                result.push([nums[i], nums[left], nums[right]]);
                while left < right && nums[left] == nums[left + 1] {
                    left += 1;
                }
                while left < right && nums[right] == nums[right - 1] {
                    right -= 1;
                }
                left += 1;
                right -= 1;
            } else if sum < 0 {
                left += 1;
            } else {
                right -= 1;
            }
        }
    }
    result
}

/// In-place quicksort with the first element as pivot
///
/// Recurses into the smaller partition and loops on the larger one, so stack
/// depth stays logarithmic even for already sorted input.
pub fn quick_sort(mut nums: &mut [i64]) {
    while nums.len() > 1 {
        let mid = partition(nums);
        let (lo, hi) = std::mem::take(&mut nums).split_at_mut(mid);
        let hi = &mut hi[1..];
        if lo.len() < hi.len() {
            quick_sort(lo);
            nums = hi;
        } else {
            quick_sort(hi);
            nums = lo;
        }
    }
}

/// Hole-filling partition around `nums[0]`; returns the pivot's final index
fn partition(nums: &mut [i64]) -> usize {
    let pivot = nums[0];
    let (mut left, mut right) = (0, nums.len() - 1);
    while left < right {
        while left < right && nums[right] >= pivot {
            right -= 1;
        }
        nums[left] = nums[right];
        while left < right && nums[left] <= pivot {
            left += 1;
        }
        nums[right] = nums[left];
    }
    nums[left] = pivot;
    left
}

/// Largest sum of a non-empty contiguous subarray (Kadane). Empty input gives 0.
pub fn max_sub_array(nums: &[i64]) -> i64 {
    let Some((&first, rest)) = nums.split_first() else {
        return 0;
    };
    let mut best = first;
    let mut current = first;
    for &n in rest {
        current = n.max(current.saturating_add(n));
        best = best.max(current);
    }
    best
}

/// Merge sorted `nums2[..n]` into `nums1`, whose first `m` elements are live
///
/// Fills from the back so no element of `nums1` is overwritten before it is
/// read.
///
/// # Panics
///
/// Panics if `nums1` is shorter than `m + n` or `nums2` shorter than `n`.
pub fn merge(nums1: &mut [i64], m: usize, nums2: &[i64], n: usize) {
    assert!(nums1.len() >= m + n, "nums1 has no room for {} elements", m + n);
    assert!(nums2.len() >= n, "nums2 has fewer than {} elements", n);

    let (mut p1, mut p2, mut p) = (m, n, m + n);
    while p2 > 0 {
        p -= 1;
        if p1 > 0 && nums1[p1 - 1] > nums2[p2 - 1] {
            nums1[p] = nums1[p1 - 1];
            p1 -= 1;
        } else {
            nums1[p] = nums2[p2 - 1];
            p2 -= 1;
        }
    }
}

/// Compact a sorted slice so its unique values come first; returns their count
pub fn remove_duplicates(nums: &mut [i64]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut k = 1;
    for i in 1..nums.len() {
        if nums[i] != nums[i - 1] {
            nums[k] = nums[i];
            k += 1;
        }
    }
    k
}

/// Rotate right by `k` positions using three reversals
pub fn rotate(nums: &mut [i64], k: usize) {
    let n = nums.len();
    if n == 0 {
        return;
    }
    let k = k % n;
    nums.reverse();
    nums[..k].reverse();
    nums[k..].reverse();
}

/// Add one to a number stored as most-significant-first decimal digits
pub fn plus_one(digits: &[u8]) -> Vec<u8> {
    let mut digits = digits.to_vec();
    for d in digits.iter_mut().rev() {
        if *d < 9 {
            *d += 1;
            return digits;
        }
        *d = 0;
    }
    digits.insert(0, 1);
    digits
}

/// Move every zero to the end, keeping the order of the other elements
pub fn move_zeroes(nums: &mut [i64]) {
    let mut non_zero = 0;
    for i in 0..nums.len() {
        if nums[i] != 0 {
            nums.swap(non_zero, i);
            non_zero += 1;
        }
    }
}

/// Values present in both slices, each once, in order of first appearance in `b`
pub fn intersection(a: &[i64], b: &[i64]) -> Vec<i64> {
    let set: HashSet<i64> = a.iter().copied().collect();
    let mut seen = HashSet::new();
    b.iter()
        .copied()
        .filter(|n| set.contains(n) && seen.insert(*n))
        .collect()
}

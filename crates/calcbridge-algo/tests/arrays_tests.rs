//! Array exercise tests: worked cases plus properties

use calcbridge_algo::arrays::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// Two sum
// ============================================================================

#[rstest]
#[case(&[2, 7, 11, 15], 9, Some((0, 1)))]
#[case(&[3, 2, 4], 6, Some((1, 2)))]
#[case(&[3, 3], 6, Some((0, 1)))]
#[case(&[1, 2, 3, 4, 5], 10, None)]
fn test_two_sum(#[case] nums: &[i64], #[case] target: i64, #[case] want: Option<(usize, usize)>) {
    assert_eq!(two_sum(nums, target), want);
}

#[rstest]
#[case(&[2, 7, 11, 15], 9, Some((0, 1)))]
#[case(&[3, 2, 4], 6, Some((1, 2)))]
#[case(&[3, 3], 6, Some((0, 1)))]
#[case(&[1, 2, 3, 4, 5], 10, None)]
#[case(&[2, 4, 5], 9, Some((1, 2)))]
#[case(&[2, 4, 5], 10, None)]
#[case(&[2, 4, 5], 7, Some((0, 2)))]
#[case(&[2, 4, 5], 12, None)]
#[case(&[2, 4, 5], 13, None)]
fn test_two_sum_brute(#[case] nums: &[i64], #[case] target: i64, #[case] want: Option<(usize, usize)>) {
    assert_eq!(two_sum_brute(nums, target), want);
}

// ============================================================================
// Three sum and sorting
// ============================================================================

#[rstest]
#[case(&[-1, 0, 1, 2, -1, -4], vec![[-1, -1, 2], [-1, 0, 1]])]
#[case(&[], vec![])]
#[case(&[0], vec![])]
#[case(&[0, 0, 0], vec![[0, 0, 0]])]
#[case(&[0, 0, 0, 0], vec![[0, 0, 0]])]
fn test_three_sum(#[case] nums: &[i64], #[case] want: Vec<[i64; 3]>) {
    assert_eq!(three_sum(nums), want);
}

#[test]
fn test_three_sum_leaves_input_untouched() {
    let nums = [3, -2, 1, 0, -1];
    let _ = three_sum(&nums);
    assert_eq!(nums, [3, -2, 1, 0, -1]);
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![1])]
#[case(vec![3, 1, 2], vec![1, 2, 3])]
#[case(vec![5, 5, 1, 5, 0], vec![0, 1, 5, 5, 5])]
#[case(vec![-4, 9, -4, 0, i64::MAX, i64::MIN], vec![i64::MIN, -4, -4, 0, 9, i64::MAX])]
fn test_quick_sort(#[case] mut nums: Vec<i64>, #[case] want: Vec<i64>) {
    quick_sort(&mut nums);
    assert_eq!(nums, want);
}

// ============================================================================
// Scans and in-place rewrites
// ============================================================================

#[rstest]
#[case(&[-2, 1, -3, 4, -1, 2, 1, -5, 4], 6)]
#[case(&[1], 1)]
#[case(&[5, 4, -1, 7, 8], 23)]
#[case(&[-1], -1)]
#[case(&[-2, -1], -1)]
fn test_max_sub_array(#[case] nums: &[i64], #[case] want: i64) {
    assert_eq!(max_sub_array(nums), want);
}

#[rstest]
#[case(vec![1, 2, 3, 0, 0, 0], 3, vec![2, 5, 6], 3, vec![1, 2, 2, 3, 5, 6])]
#[case(vec![1], 1, vec![], 0, vec![1])]
#[case(vec![0], 0, vec![1], 1, vec![1])]
#[case(vec![4, 5, 6, 0, 0, 0], 3, vec![1, 2, 3], 3, vec![1, 2, 3, 4, 5, 6])]
fn test_merge(
    #[case] mut nums1: Vec<i64>,
    #[case] m: usize,
    #[case] nums2: Vec<i64>,
    #[case] n: usize,
    #[case] want: Vec<i64>,
) {
    merge(&mut nums1, m, &nums2, n);
    assert_eq!(nums1, want);
}

#[test]
#[should_panic(expected = "no room")]
fn test_merge_without_room_panics() {
    let mut nums1 = vec![1, 2];
    merge(&mut nums1, 2, &[3], 1);
}

#[rstest]
#[case(vec![1, 1, 2], 2, vec![1, 2])]
#[case(vec![0, 0, 1, 1, 1, 2, 2, 3, 3, 4], 5, vec![0, 1, 2, 3, 4])]
#[case(vec![], 0, vec![])]
#[case(vec![1], 1, vec![1])]
#[case(vec![1, 1], 1, vec![1])]
fn test_remove_duplicates(#[case] mut nums: Vec<i64>, #[case] want: usize, #[case] prefix: Vec<i64>) {
    let k = remove_duplicates(&mut nums);
    assert_eq!(k, want);
    assert_eq!(&nums[..k], prefix.as_slice());
}

#[rstest]
#[case(vec![1, 2, 3, 4, 5, 6, 7], 3, vec![5, 6, 7, 1, 2, 3, 4])]
#[case(vec![-1, -100, 3, 99], 2, vec![3, 99, -1, -100])]
#[case(vec![1], 0, vec![1])]
#[case(vec![1, 2], 3, vec![2, 1])]
fn test_rotate(#[case] mut nums: Vec<i64>, #[case] k: usize, #[case] want: Vec<i64>) {
    rotate(&mut nums, k);
    assert_eq!(nums, want);
}

#[rstest]
#[case(&[1, 2, 3], vec![1, 2, 4])]
#[case(&[4, 3, 2, 1], vec![4, 3, 2, 2])]
#[case(&[9], vec![1, 0])]
#[case(&[9, 9], vec![1, 0, 0])]
#[case(&[], vec![1])]
fn test_plus_one(#[case] digits: &[u8], #[case] want: Vec<u8>) {
    assert_eq!(plus_one(digits), want);
}

#[rstest]
#[case(vec![0, 1, 0, 3, 12], vec![1, 3, 12, 0, 0])]
#[case(vec![0], vec![0])]
#[case(vec![1], vec![1])]
#[case(vec![0, 0, 1], vec![1, 0, 0])]
fn test_move_zeroes(#[case] mut nums: Vec<i64>, #[case] want: Vec<i64>) {
    move_zeroes(&mut nums);
    assert_eq!(nums, want);
}

#[rstest]
#[case(&[1, 2, 2, 1], &[2, 2], vec![2])]
#[case(&[4, 9, 5], &[9, 4, 9, 8, 4], vec![9, 4])]
#[case(&[1, 2], &[3, 4], vec![])]
#[case(&[], &[1], vec![])]
fn test_intersection(#[case] a: &[i64], #[case] b: &[i64], #[case] want: Vec<i64>) {
    assert_eq!(intersection(a, b), want);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_quick_sort_matches_std(mut nums in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut expected = nums.clone();
        expected.sort_unstable();
        quick_sort(&mut nums);
        prop_assert_eq!(nums, expected);
    }

    #[test]
    fn prop_two_sum_pair_hits_target(nums in prop::collection::vec(-1000i64..1000, 0..50), target in -2000i64..2000) {
        let hashed = two_sum(&nums, target);
        let brute = two_sum_brute(&nums, target);
        prop_assert_eq!(hashed.is_some(), brute.is_some());
        if let Some((i, j)) = hashed {
            prop_assert!(i < j);
            prop_assert_eq!(nums[i] + nums[j], target);
        }
    }

    #[test]
    fn prop_three_sum_triples_are_sorted_unique_zero(nums in prop::collection::vec(-20i64..20, 0..40)) {
        let triples = three_sum(&nums);
        for t in &triples {
            prop_assert_eq!(t[0] + t[1] + t[2], 0);
            prop_assert!(t[0] <= t[1] && t[1] <= t[2]);
        }
        let mut deduped = triples.clone();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), triples.len());
    }

    #[test]
    fn prop_rotate_by_len_is_identity(nums in prop::collection::vec(any::<i64>(), 1..50)) {
        let mut rotated = nums.clone();
        rotate(&mut rotated, nums.len());
        prop_assert_eq!(rotated, nums);
    }

    #[test]
    fn prop_move_zeroes_keeps_non_zero_order(nums in prop::collection::vec(-3i64..3, 0..50)) {
        let mut moved = nums.clone();
        move_zeroes(&mut moved);
        let non_zero: Vec<i64> = nums.iter().copied().filter(|&n| n != 0).collect();
        prop_assert_eq!(&moved[..non_zero.len()], non_zero.as_slice());
        prop_assert!(moved[non_zero.len()..].iter().all(|&n| n == 0));
    }
}

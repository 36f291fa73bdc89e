use keysort::prelude::*;
use rand::Rng;
use std::cell::Cell;

#[test]
fn test_concrete_scenario_every_algorithm() {
    let input: Vec<i64> = vec![5, 3, 8, 3, 1];

    for algorithm in Algorithm::ALL {
        let ascending = algorithm.sort(&input, |&k| k, false).unwrap();
        assert_eq!(ascending, vec![1, 3, 3, 5, 8], "{algorithm}");

        let descending = algorithm.sort(&input, |&k| k, true).unwrap();
        assert_eq!(descending, vec![8, 5, 3, 3, 1], "{algorithm}");
    }
}

#[test]
fn test_free_functions_match_catalog() {
    let input = vec![9u32, 0, 4, 4, 7, 1, 12, 3];
    let expected = vec![0, 1, 3, 4, 4, 7, 9, 12];

    assert_eq!(adaptive_hybrid_sort(&input, |&k| k, false), expected);
    assert_eq!(binary_insertion_sort(&input, |&k| k, false), expected);
    assert_eq!(selection_sort(&input, |&k| k, false), expected);
    assert_eq!(comb_sort(&input, |&k| k, false), expected);
    assert_eq!(gnome_sort(&input, |&k| k, false), expected);
    assert_eq!(quick_sort(&input, |&k| k, false), expected);
    assert_eq!(heap_sort(&input, |&k| k, false), expected);
    assert_eq!(tree_sort(&input, |&k| k, false), expected);
    assert_eq!(bitonic_sort(&input, |&k| k, false), expected);
    assert_eq!(pigeonhole_sort(&input, |&k| k, false).unwrap(), expected);
    assert_eq!(bucket_sort(&input, |&k| k, false).unwrap(), expected);
    assert_eq!(radix_sort(&input, |&k| k, false).unwrap(), expected);
}

#[test]
fn test_empty() {
    let input: Vec<u64> = vec![];
    for algorithm in Algorithm::ALL {
        assert!(algorithm.sort(&input, |&k| k, false).unwrap().is_empty());
        assert!(algorithm.sort(&input, |&k| k, true).unwrap().is_empty());
    }
}

#[test]
fn test_singleton() {
    let input = vec![("only", 7u8)];
    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sort(&input, |p| p.1, false).unwrap();
        assert_eq!(sorted, input, "{algorithm}");
    }
}

#[test]
fn test_already_sorted_is_unchanged() {
    let input: Vec<u16> = (0..300).map(|i| i / 3).collect();
    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sort(&input, |&k| k, false).unwrap();
        assert_eq!(sorted, input, "{algorithm}");
    }
}

#[test]
fn test_reversed_input() {
    let input: Vec<i32> = (0..257).rev().collect();
    let mut expected = input.clone();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sort(&input, |&k| k, false).unwrap();
        assert_eq!(sorted, expected, "{algorithm}");
    }
}

#[test]
fn test_caller_slice_is_not_modified() {
    let input = vec![4i64, 2, 9, 1, 1, 0, 6, 3];
    let snapshot = input.clone();

    for algorithm in Algorithm::ALL {
        let _ = algorithm.sort(&input, |&k| k, false).unwrap();
        let _ = algorithm.sort(&input, |&k| k, true).unwrap();
        assert_eq!(input, snapshot, "{algorithm}");
    }
}

#[test]
fn test_key_function_runs_once_per_element() {
    let input: Vec<u32> = (0..100).rev().collect();

    for algorithm in Algorithm::ALL {
        let calls = Cell::new(0);
        let sorted = algorithm
            .sort(
                &input,
                |&k| {
                    calls.set(calls.get() + 1);
                    k
                },
                false,
            )
            .unwrap();
        assert_eq!(sorted.len(), input.len());
        assert_eq!(calls.get(), input.len(), "{algorithm}");
    }
}

#[test]
fn test_bitonic_fallback_for_non_power_of_two() {
    let input = vec![10, -4, 7, 7, 0];
    assert_eq!(bitonic_sort(&input, |&k| k, false), vec![-4, 0, 7, 7, 10]);
    assert_eq!(bitonic_sort(&input, |&k| k, true), vec![10, 7, 7, 0, -4]);

    for len in 2..70 {
        let input: Vec<i32> = (0..len).map(|i| (i * 37) % 11).collect();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(bitonic_sort(&input, |&k| k, false), expected, "len {len}");
    }
}

#[test]
fn test_string_keys() {
    let input = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];

    for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_distribution()) {
        let sorted = algorithm.sort_ordered(&input, |s| s.clone(), false).unwrap();
        assert_eq!(sorted, vec!["apple", "banana", "cherry", "date"], "{algorithm}");
    }
}

#[test]
fn test_composite_tuple_keys() {
    let input = vec![
        (2021, "zeta"),
        (2019, "alpha"),
        (2021, "beta"),
        (2020, "gamma"),
        (2019, "delta"),
    ];
    let expected = vec![
        (2019, "alpha"),
        (2019, "delta"),
        (2020, "gamma"),
        (2021, "beta"),
        (2021, "zeta"),
    ];

    for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_distribution()) {
        let sorted = algorithm.sort_ordered(&input, |&(y, t)| (y, t), false).unwrap();
        assert_eq!(sorted, expected, "{algorithm}");
    }
}

#[test]
fn test_float_keys_with_bucket_sort() {
    let input = vec![0.5f64, -2.25, 3.0, 0.5, 1e-9, -0.0];
    let sorted = bucket_sort(&input, |&k| k, false).unwrap();
    assert_eq!(sorted, vec![-2.25, -0.0, 1e-9, 0.5, 0.5, 3.0]);

    let wide = vec![f64::MAX, -f64::MAX, 0.0, 1.0];
    let sorted = bucket_sort(&wide, |&k| k, false).unwrap();
    assert_eq!(sorted, vec![-f64::MAX, 0.0, 1.0, f64::MAX]);
}

#[test]
fn test_bucket_and_radix_options() {
    let input: Vec<u64> = vec![1000, 7, 65_536, 0, 255, 256, 7];
    let mut expected = input.clone();
    expected.sort();

    for buckets in [1, 2, 3, 16, 1000] {
        let sorted = bucket_sort_with_buckets(&input, |&k| k, false, buckets).unwrap();
        assert_eq!(sorted, expected, "buckets {buckets}");
    }
    for base in [2, 3, 10, 16, 256] {
        let sorted = radix_sort_with_base(&input, |&k| k, false, base).unwrap();
        assert_eq!(sorted, expected, "base {base}");
    }
}

#[test]
fn test_all_equal_keys() {
    let input: Vec<(u8, usize)> = (0..64).map(|i| (3, i)).collect();
    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sort(&input, |p| p.0, false).unwrap();
        let mut ids: Vec<usize> = sorted.iter().map(|p| p.1).collect();
        if algorithm.is_stable() {
            assert_eq!(ids, (0..64).collect::<Vec<_>>(), "{algorithm}");
        }
        ids.sort();
        assert_eq!(ids, (0..64).collect::<Vec<_>>(), "{algorithm}");
    }
}

#[test]
fn test_fuzz_random_against_std() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..300);
        let range = rng.random_range(1..1_000u64);
        let input: Vec<u64> = (0..len).map(|_| rng.random_range(0..range)).collect();

        let mut expected = input.clone();
        expected.sort();
        let mut expected_desc = expected.clone();
        expected_desc.reverse();

        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.sort(&input, |&k| k, false).unwrap(),
                expected,
                "{algorithm}"
            );
            assert_eq!(
                algorithm.sort(&input, |&k| k, true).unwrap(),
                expected_desc,
                "{algorithm}"
            );
        }
    }
}

#[test]
fn test_cross_algorithm_agreement_on_key_sequence() {
    let mut rng = rand::rng();
    let input: Vec<(u32, u32)> = (0..1024)
        .map(|i| (rng.random_range(0..50), i))
        .collect();

    let reference: Vec<u32> = Algorithm::AdaptiveHybrid
        .sort(&input, |p| p.0, false)
        .unwrap()
        .iter()
        .map(|p| p.0)
        .collect();

    for algorithm in Algorithm::ALL {
        let keys: Vec<u32> = algorithm
            .sort(&input, |p| p.0, false)
            .unwrap()
            .iter()
            .map(|p| p.0)
            .collect();
        assert_eq!(keys, reference, "{algorithm}");
    }
}

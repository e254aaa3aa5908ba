use rand::Rng;
use std::time::Instant;
use tallysort::prelude::*;

#[test]
fn test_sort_1m_dense() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<i32> = (0..count).map(|_| rng.random_range(0..65_536)).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let sorted = counting_sort(&input, Direction::Ascending).unwrap();
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(sorted.len(), count);

    for i in 0..count - 1 {
        assert!(sorted[i] <= sorted[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_sort_wide_range() {
    // 16M distinct possible keys for 100k elements: the frequency table
    // (~128MB of usize counts) dominates the cost here, not n.
    let count = 100_000;
    let mut rng = rand::rng();
    let input: Vec<i32> = (0..count)
        .map(|_| rng.random_range(-8_000_000..8_000_000))
        .collect();

    let mut expected = input.clone();
    expected.sort_unstable();
    expected.reverse();

    let sorted = counting_sort(&input, Direction::Descending).unwrap();
    assert_eq!(sorted, expected);
}

#[test]
#[ignore]
fn test_sort_pathological_range() {
    // WARNING: This test requires significant RAM (32GB+).
    // Two elements spanning the full u32 range force a frequency table of
    // 2^32 usize entries (~32GB on 64-bit targets). Counting sort makes no
    // attempt to dodge this; the test only documents that the result is
    // still correct when the allocation succeeds.
    let input = vec![u32::MAX, 0];

    let sorted = counting_sort(&input, Direction::Ascending).unwrap();
    assert_eq!(sorted, vec![0, u32::MAX]);
}

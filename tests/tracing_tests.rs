//! Tests for the per-placement state side-channel and the stability guarantee.

use tallysort::prelude::*;

#[test]
fn test_one_snapshot_per_element() {
    let input = vec![5, 3, 9, 3, 1, 7];

    let mut trace = CollectStates::new();
    counting_sort_observed(&input, Direction::Ascending, &mut trace).unwrap();

    assert_eq!(trace.snapshots().len(), input.len());
}

#[test]
fn test_snapshot_progression_ascending() {
    // Placement walks the input in reverse: 2 first, then 1, then 3.
    // Unwritten slots report the key type's default (0 for integers).
    let mut trace = CollectStates::new();
    let sorted = counting_sort_observed(&[1, 2, 3], Direction::Ascending, &mut trace).unwrap();

    assert_eq!(
        trace.snapshots(),
        vec![vec![0, 0, 3], vec![0, 2, 3], vec![1, 2, 3]]
    );
    assert_eq!(trace.snapshots().last().unwrap(), &sorted);
}

#[test]
fn test_snapshot_progression_descending() {
    let mut trace = CollectStates::new();
    let sorted = counting_sort_observed(&[1, 2, 3], Direction::Descending, &mut trace).unwrap();

    assert_eq!(
        trace.snapshots(),
        vec![vec![3, 0, 0], vec![3, 2, 0], vec![3, 2, 1]]
    );
    assert_eq!(trace.snapshots().last().unwrap(), &sorted);
}

#[test]
fn test_no_snapshots_on_error() {
    let empty: [i32; 0] = [];

    let mut trace = CollectStates::new();
    let result = counting_sort_observed(&empty, Direction::Ascending, &mut trace);

    assert_eq!(result, Err(SortError::InvalidInput));
    assert!(trace.snapshots().is_empty());
}

#[test]
fn test_observer_by_mutable_borrow() {
    // A closure-free observer passed as &mut twice over still compiles and
    // fires; guards the forwarding impl.
    let mut trace = CollectStates::new();
    let observer = &mut trace;
    counting_sort_observed(&[4, 4, 4], Direction::Ascending, observer).unwrap();

    assert_eq!(trace.into_snapshots().len(), 3);
}

#[test]
fn test_ignore_state_matches_untraced() {
    let input = vec![9, -2, 4, -2];

    let untraced = counting_sort(&input, Direction::Descending).unwrap();
    let ignored =
        counting_sort_observed(&input, Direction::Descending, &mut IgnoreState).unwrap();

    assert_eq!(untraced, ignored);
}

/// A key that carries its deal order along but sorts only by rank, making
/// stability directly observable on otherwise-equal keys.
#[derive(Clone, Copy, Debug, Default)]
struct Card {
    rank: u8,
    deal: u8,
}

impl Card {
    fn new(rank: u8, deal: u8) -> Self {
        Self { rank, deal }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl CountKey for Card {
    fn offset_from(self, min: Self) -> usize {
        self.rank.offset_from(min.rank)
    }
}

#[test]
fn test_stability_ascending() {
    let input = vec![
        Card::new(2, 0),
        Card::new(1, 1),
        Card::new(2, 2),
        Card::new(1, 3),
        Card::new(2, 4),
    ];

    let sorted = counting_sort(&input, Direction::Ascending).unwrap();

    let ranks: Vec<u8> = sorted.iter().map(|c| c.rank).collect();
    let deals: Vec<u8> = sorted.iter().map(|c| c.deal).collect();

    assert_eq!(ranks, vec![1, 1, 2, 2, 2]);
    // Equal ranks must come out in deal order.
    assert_eq!(deals, vec![1, 3, 0, 2, 4]);
}

#[test]
fn test_stability_descending() {
    let input = vec![
        Card::new(2, 0),
        Card::new(1, 1),
        Card::new(2, 2),
        Card::new(1, 3),
        Card::new(2, 4),
    ];

    let sorted = counting_sort(&input, Direction::Descending).unwrap();

    let ranks: Vec<u8> = sorted.iter().map(|c| c.rank).collect();
    let deals: Vec<u8> = sorted.iter().map(|c| c.deal).collect();

    assert_eq!(ranks, vec![2, 2, 2, 1, 1]);
    assert_eq!(deals, vec![0, 2, 4, 1, 3]);
}

#[test]
fn test_stability_single_run() {
    // All keys equal: output deal order must be exactly input deal order.
    let input: Vec<Card> = (0..50).map(|deal| Card::new(9, deal)).collect();

    let sorted = counting_sort(&input, Direction::Descending).unwrap();
    let deals: Vec<u8> = sorted.iter().map(|c| c.deal).collect();

    assert_eq!(deals, (0..50).collect::<Vec<u8>>());
}

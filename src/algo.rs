//! The counting sort engine.
//!
//! Counting sort is a non-comparison sort: it counts occurrences of each
//! distinct key, turns the counts into prefix sums, and uses those sums to
//! compute every element's final position directly. Runtime is O(n + k) and
//! space is O(n + k), where k is the span of the key range (`max - min + 1`).
//!
//! The main entry points are [`counting_sort`], [`counting_sort_observed`]
//! and [`counting_sort_mut`].

use crate::core::{CountKey, Direction, IgnoreState, SortError, StateObserver};

/// Sorts a sequence of integer keys into a new vector.
///
/// The input is not modified. Equal keys keep their relative input order
/// (the sort is stable).
///
/// # Errors
///
/// Returns [`SortError::InvalidInput`] if `values` is empty.
///
/// # Resource usage
///
/// The frequency table has one entry per possible value between the observed
/// minimum and maximum. A pathological spread (say one key near `i64::MIN`
/// and another near `i64::MAX`) therefore demands a table allocation on the
/// order of the full key range. That is inherent to counting sort and is not
/// mitigated here; keep the value span in mind before sorting wide-ranged
/// data.
///
/// # Examples
///
/// ```
/// use tallysort::{counting_sort, Direction};
///
/// let sorted = counting_sort(&[3, 1, 2, 1, 3], Direction::Ascending)?;
/// assert_eq!(sorted, vec![1, 1, 2, 3, 3]);
///
/// let sorted = counting_sort(&[-5, 0, 5, -5], Direction::Ascending)?;
/// assert_eq!(sorted, vec![-5, -5, 0, 5]);
/// # Ok::<(), tallysort::SortError>(())
/// ```
pub fn counting_sort<T: CountKey>(
    values: &[T],
    direction: Direction,
) -> Result<Vec<T>, SortError> {
    counting_sort_observed(values, direction, &mut IgnoreState)
}

/// Sorts a sequence of integer keys, reporting the output buffer to
/// `observer` after every placement.
///
/// The observer fires exactly once per input element, after that element has
/// been written into its final slot. Slots the placement phase has not
/// reached yet still hold `T::default()` in the reported state. On error the
/// observer is never called.
///
/// # Errors
///
/// Returns [`SortError::InvalidInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use tallysort::{counting_sort_observed, CollectStates, Direction};
///
/// let mut trace = CollectStates::new();
/// let sorted = counting_sort_observed(&[2, 1, 2], Direction::Ascending, &mut trace)?;
///
/// assert_eq!(sorted, vec![1, 2, 2]);
/// // One snapshot per element; the last snapshot is the sorted sequence.
/// assert_eq!(trace.snapshots().len(), 3);
/// assert_eq!(trace.snapshots()[2], sorted);
/// # Ok::<(), tallysort::SortError>(())
/// ```
pub fn counting_sort_observed<T, O>(
    values: &[T],
    direction: Direction,
    observer: &mut O,
) -> Result<Vec<T>, SortError>
where
    T: CountKey,
    O: StateObserver<T>,
{
    if values.is_empty() {
        return Err(SortError::InvalidInput);
    }

    // Phase 1: range discovery.
    let (min_value, max_value) = value_range(values);
    let unique_values = max_value.offset_from(min_value) + 1;

    // Phase 2: frequency counting. table[0] counts min_value occurrences.
    let mut table = vec![0usize; unique_values];
    for &value in values {
        table[value.offset_from(min_value)] += 1;
    }

    // Phase 3: cumulative transform. The traversal direction of the prefix
    // sum is what selects the sort order: accumulating left-to-right makes
    // table[k] the number of elements <= (min + k), so small values land at
    // the front; right-to-left mirrors it.
    match direction {
        Direction::Ascending => {
            for k in 1..unique_values {
                table[k] += table[k - 1];
            }
        }
        Direction::Descending => {
            for k in (0..unique_values - 1).rev() {
                table[k] += table[k + 1];
            }
        }
    }

    // Phase 4: placement. The input is traversed in reverse and the count is
    // decremented after each write; this pairing is what makes the sort
    // stable, so equal keys drain from the back of their slot range in
    // reverse input order and come out in input order.
    let mut output = vec![T::default(); values.len()];
    for &value in values.iter().rev() {
        let slot = value.offset_from(min_value);
        output[table[slot] - 1] = value;
        table[slot] -= 1;
        observer.on_placement(&output);
    }

    Ok(output)
}

/// Sorts a vector in place.
///
/// Convenience wrapper around [`counting_sort`] that replaces the vector's
/// contents with the sorted sequence. On error the vector is untouched.
///
/// # Errors
///
/// Returns [`SortError::InvalidInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use tallysort::{counting_sort_mut, Direction};
///
/// let mut data = vec![4u8, 2, 7, 2];
/// counting_sort_mut(&mut data, Direction::Descending)?;
/// assert_eq!(data, vec![7, 4, 2, 2]);
/// # Ok::<(), tallysort::SortError>(())
/// ```
pub fn counting_sort_mut<T: CountKey>(
    values: &mut Vec<T>,
    direction: Direction,
) -> Result<(), SortError> {
    let sorted = counting_sort(values, direction)?;
    *values = sorted;
    Ok(())
}

/// Single pass over `values` returning `(min, max)`.
///
/// Seeds both bounds from the first element, so the caller must have
/// rejected empty input already.
fn value_range<T: CountKey>(values: &[T]) -> (T, T) {
    let mut min_value = values[0];
    let mut max_value = values[0];

    for &value in values {
        if value < min_value {
            min_value = value;
        } else if value > max_value {
            max_value = value;
        }
    }

    (min_value, max_value)
}

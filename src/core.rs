//! Core traits and types for tallysort.
//!
//! This module defines:
//! - [`CountKey`]: The trait integer key types implement so the engine can index them.
//! - [`Direction`]: Sort order selector.
//! - [`StateObserver`]: The hook that receives the output buffer after each placement.
//! - [`SortError`]: The engine's error type.

use std::fmt;

use thiserror::Error;

/// Errors reported by the sorting engine.
///
/// The engine has a single failure mode: it refuses to sort an empty
/// sequence, because range discovery needs at least one element to seed the
/// minimum and maximum. There are no partial results; on error nothing has
/// been sorted and no observer callbacks have fired.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The input sequence was empty.
    #[error("cannot sort an empty sequence")]
    InvalidInput,
}

/// The order in which the output sequence is arranged.
///
/// The direction is encoded entirely in the traversal direction of the
/// cumulative-sum pass over the frequency table; the placement phase is
/// identical for both variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Smallest values first.
    #[default]
    Ascending,
    /// Largest values first.
    Descending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

/// A sortable integer key.
///
/// Counting sort indexes its frequency table by the distance of each value
/// from the minimum observed value, so a key type only has to provide that
/// distance as a `usize`. All primitive integers implement this, signed
/// types included: negative ranges need no special casing beyond the offset.
///
/// `Default` supplies the value unfilled output slots hold while the
/// placement phase is still running; for the primitive integers that is `0`.
///
/// # Examples
///
/// Implementing for a record type sorted by one field:
///
/// ```
/// use tallysort::core::CountKey;
///
/// #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
/// struct Priority(u8);
///
/// impl CountKey for Priority {
///     fn offset_from(self, min: Self) -> usize {
///         self.0.offset_from(min.0)
///     }
/// }
/// ```
pub trait CountKey: Copy + Ord + Default {
    /// Returns the distance from `min` to `self` as a table index.
    ///
    /// Callers guarantee `min <= self`; the result is the exact non-negative
    /// distance between the two values.
    fn offset_from(self, min: Self) -> usize;
}

macro_rules! impl_count_key {
    ($($int:ty => $uint:ty),* $(,)?) => {
        $(
            impl CountKey for $int {
                #[inline(always)]
                fn offset_from(self, min: Self) -> usize {
                    // Wrapping subtraction reinterpreted as unsigned yields
                    // the true distance even when `self - min` would
                    // overflow the signed type (e.g. MAX - MIN).
                    self.wrapping_sub(min) as $uint as usize
                }
            }
        )*
    };
}

impl_count_key! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
}

/// A hook receiving the output buffer after every placement step.
///
/// When passed to [`counting_sort_observed`](crate::algo::counting_sort_observed),
/// the observer is called exactly once per input element, immediately after
/// that element has been written into its final slot. The slice it receives
/// is the whole output buffer, so slots not yet written still hold
/// `T::default()`.
pub trait StateObserver<T> {
    /// Called after a single value has been placed.
    fn on_placement(&mut self, state: &[T]);
}

// Forwarding impl so an observer can be passed by mutable borrow.
impl<T, O: StateObserver<T> + ?Sized> StateObserver<T> for &mut O {
    fn on_placement(&mut self, state: &[T]) {
        (**self).on_placement(state);
    }
}

/// An observer that discards every state. Backs the untraced entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreState;

impl<T> StateObserver<T> for IgnoreState {
    fn on_placement(&mut self, _state: &[T]) {}
}

/// An observer that keeps a snapshot of the output buffer per placement.
///
/// Mostly useful for tests and for embedders that want to render the
/// animation after the fact rather than streaming it.
#[derive(Debug, Default, Clone)]
pub struct CollectStates<T> {
    snapshots: Vec<Vec<T>>,
}

impl<T> CollectStates<T> {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Returns the recorded snapshots, one per placed element, in placement order.
    pub fn snapshots(&self) -> &[Vec<T>] {
        &self.snapshots
    }

    /// Consumes the collector and returns the snapshots.
    pub fn into_snapshots(self) -> Vec<Vec<T>> {
        self.snapshots
    }
}

impl<T: Clone> StateObserver<T> for CollectStates<T> {
    fn on_placement(&mut self, state: &[T]) {
        self.snapshots.push(state.to_vec());
    }
}

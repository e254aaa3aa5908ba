//! # Tallysort
//!
//! `tallysort` is a stable counting sort for integer keys, ascending or
//! descending, with an optional side-channel that streams the output buffer
//! to the caller after every placement step, which is handy for teaching,
//! demos and visualizations of how the algorithm fills in the result.
//!
//! Counting sort is a non-comparison sort: it tallies how often each
//! distinct key occurs, turns those tallies into prefix sums, and reads each
//! element's final position straight out of the table. For a sequence of n
//! elements whose values span k distinct keys it runs in O(n + k) time and
//! O(n + k) space.
//!
//! ## Key Features
//!
//! - **Any primitive integer key**: the [`CountKey`] trait is implemented
//!   for all signed and unsigned primitive integers; negative values are
//!   handled by simple offsetting from the observed minimum.
//! - **Direction as data**: [`Direction::Ascending`] and
//!   [`Direction::Descending`] select the traversal direction of the
//!   prefix-sum pass, so descending output costs nothing extra.
//! - **Stable by construction**: equal keys keep their relative input order.
//! - **Placement tracing**: [`counting_sort_observed`] reports the partially
//!   filled output buffer through a [`StateObserver`] after each placement,
//!   one callback per input element.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use tallysort::{counting_sort, Direction};
//!
//! let sorted = counting_sort(&[3, 1, 2, 1, 3], Direction::Ascending).unwrap();
//! assert_eq!(sorted, vec![1, 1, 2, 3, 3]);
//!
//! let sorted = counting_sort(&[3, 1, 2, 1, 3], Direction::Descending).unwrap();
//! assert_eq!(sorted, vec![3, 3, 2, 1, 1]);
//! ```
//!
//! ### Watching the placement phase
//!
//! ```rust
//! use tallysort::{counting_sort_observed, CollectStates, Direction};
//!
//! let mut trace = CollectStates::new();
//! let sorted = counting_sort_observed(&[2i32, -1, 1], Direction::Ascending, &mut trace).unwrap();
//!
//! assert_eq!(sorted, vec![-1, 1, 2]);
//! assert_eq!(trace.snapshots().len(), 3);
//! ```
//!
//! Any type implementing [`StateObserver`] works, so a caller can just as
//! easily print each state as collect it.
//!
//! ## Caveats
//!
//! The frequency table is sized by the spread between the smallest and
//! largest key, not by the number of elements. Sorting `[i64::MIN, i64::MAX]`
//! would ask for a table with 2^64 entries; that resource exhaustion is
//! inherent to the algorithm and deliberately not papered over with a
//! comparison-sort fallback.

pub mod algo;
pub mod core;
pub use self::algo::{counting_sort, counting_sort_mut, counting_sort_observed};
pub use self::core::{CollectStates, CountKey, Direction, IgnoreState, SortError, StateObserver};

pub mod prelude {
    pub use crate::algo::{counting_sort, counting_sort_mut, counting_sort_observed};
    pub use crate::core::{
        CollectStates, CountKey, Direction, IgnoreState, SortError, StateObserver,
    };
}

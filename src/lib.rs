//! Alphanumeric ("natural") ordering of strings.
//!
//! Runs of ASCII digits compare by numeric value, so `abc2` sorts before `abc10`:
//!
//! ```
//! use alnum_cmp::compare_str;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare_str("abc2", "abc10"), Ordering::Less);
//! assert_eq!(compare_str("abc07", "abc007"), Ordering::Less);
//! ```
//!
//! Digit runs are compared digit by digit, never converted to an integer, so
//! there is no limit on their length. Expect this to be several times slower
//! than plain byte-wise sorting.

mod compare;
mod config;
mod cursor;
mod digits;
mod error;
mod sortable;

pub use compare::{compare, compare_str, less, try_compare};
pub use config::{Comparator, Malformed};
pub use cursor::Cursor;
pub use digits::{compare_runs, DigitRun};
pub use error::{CompareError, Side};
pub use sortable::{sort, sort_sequence, NaturalOrd, Sequence, Strings};

use std::{cmp::Ordering, iter};

/// Digits of the run currently open on one side of a comparison.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DigitRun {
    digits: Vec<u8>,
}

impl DigitRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `c` if it is an ASCII digit. Returns whether it was.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_ascii_digit() {
            self.digits.push(c as u8);
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }
}

impl Ord for DigitRun {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_runs(self.as_bytes(), other.as_bytes())
    }
}
impl PartialOrd for DigitRun {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two runs of ASCII digits by value, then by digit count.
///
/// The shorter run is left-padded with virtual `'0'`s so both are compared
/// place by place from the most significant digit. No integer conversion
/// happens, so runs of any length compare correctly. When the values are
/// equal the run with fewer literal digits (fewer leading zeros) is smaller.
/// An empty run acts as zero written with no digits.
///
/// ```
/// # use alnum_cmp::compare_runs;
/// # use std::cmp::Ordering;
/// assert_eq!(compare_runs(b"2", b"10"), Ordering::Less);
/// assert_eq!(compare_runs(b"007", b"07"), Ordering::Greater);
/// assert_eq!(compare_runs(b"123", b"123"), Ordering::Equal);
/// ```
pub fn compare_runs(left: &[u8], right: &[u8]) -> Ordering {
    let width = left.len().max(right.len());
    padded(left, width)
        .cmp(padded(right, width))
        .then_with(|| left.len().cmp(&right.len()))
}

fn padded(run: &[u8], width: usize) -> impl Iterator<Item = u8> + '_ {
    iter::repeat(b'0')
        .take(width - run.len())
        .chain(run.iter().copied())
}

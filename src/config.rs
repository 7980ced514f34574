use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{compare, error::CompareError, try_compare};

/// What to do with bytes that are not well-formed UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Malformed {
    /// Decode each bad byte as U+FFFD.
    #[default]
    Replace,
    /// Fail the comparison.
    Reject,
}

/// Configurable alphanumeric comparator.
///
/// The default replaces malformed bytes and sorts ascending, which is the
/// same ordering as [`compare`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comparator {
    pub malformed: Malformed,
    pub descending: bool,
}

impl Comparator {
    pub fn strict() -> Self {
        Self {
            malformed: Malformed::Reject,
            ..Self::default()
        }
    }

    pub fn compare<L, R>(&self, left: L, right: R) -> Result<Ordering, CompareError>
    where
        L: AsRef<[u8]>,
        R: AsRef<[u8]>,
    {
        let (left, right) = (left.as_ref(), right.as_ref());
        let ord = match self.malformed {
            Malformed::Replace => compare(left, right),
            Malformed::Reject => try_compare(left, right)?,
        };
        Ok(if self.descending { ord.reverse() } else { ord })
    }

    pub fn less<L, R>(&self, left: L, right: R) -> Result<bool, CompareError>
    where
        L: AsRef<[u8]>,
        R: AsRef<[u8]>,
    {
        Ok(self.compare(left, right)? == Ordering::Less)
    }

    /// Sorts `items` stably.
    /// # Errors
    /// With [`Malformed::Reject`], fails on the first malformed element the sort compares;
    /// `items` is left in an unspecified order.
    #[tracing::instrument(level = "trace", skip_all, fields(len = items.len()))]
    pub fn sort<S: AsRef<[u8]>>(&self, items: &mut [S]) -> Result<(), CompareError> {
        let mut failure = None;
        items.sort_by(|a, b| match self.compare(a, b) {
            Ok(ord) => ord,
            Err(e) => {
                failure.get_or_insert(e);
                Ordering::Equal
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

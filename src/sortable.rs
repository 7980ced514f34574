use std::cmp::Ordering;

use crate::compare;

/// The minimal contract an in-place sorting algorithm needs from a collection.
pub trait Sequence {
    fn len(&self) -> usize;
    fn swap(&mut self, i: usize, j: usize);
    fn less(&self, i: usize, j: usize) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type CompareFn = fn(&[u8], &[u8]) -> Ordering;

/// A mutable slice of strings viewed as a [`Sequence`] ordered by an injected comparator.
#[derive(Debug)]
pub struct Strings<'a, S, F = CompareFn> {
    items: &'a mut [S],
    cmp: F,
}

impl<'a, S: AsRef<[u8]>> Strings<'a, S> {
    /// Orders `items` alphanumerically.
    pub fn new(items: &'a mut [S]) -> Self {
        Self {
            items,
            cmp: compare,
        }
    }
}

impl<'a, S, F> Strings<'a, S, F>
where
    S: AsRef<[u8]>,
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    pub fn with_comparator(items: &'a mut [S], cmp: F) -> Self {
        Self { items, cmp }
    }

    pub fn as_slice(&self) -> &[S] {
        self.items
    }
}

impl<S, F> Sequence for Strings<'_, S, F>
where
    S: AsRef<[u8]>,
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.cmp)(self.items[i].as_ref(), self.items[j].as_ref()) == Ordering::Less
    }
}

/// Heapsort over anything implementing [`Sequence`]. Not stable.
#[tracing::instrument(level = "trace", skip_all, fields(len = seq.len()))]
pub fn sort_sequence<Q: Sequence + ?Sized>(seq: &mut Q) {
    let len = seq.len();
    for root in (0..len / 2).rev() {
        sift_down(seq, root, len);
    }
    for end in (1..len).rev() {
        seq.swap(0, end);
        sift_down(seq, 0, end);
    }
}

fn sift_down<Q: Sequence + ?Sized>(seq: &mut Q, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && seq.less(child, child + 1) {
            child += 1;
        }
        if !seq.less(root, child) {
            return;
        }
        seq.swap(root, child);
        root = child;
    }
}

/// Sorts `items` in alphanumeric order. Stable.
///
/// ```
/// # use alnum_cmp::sort;
/// let mut files = ["img12.png", "img2.png", "img1.png", "img10.png"];
/// sort(&mut files);
/// assert_eq!(files, ["img1.png", "img2.png", "img10.png", "img12.png"]);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = items.len()))]
pub fn sort<S: AsRef<[u8]>>(items: &mut [S]) {
    items.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}

/// Wrapper ordering its content alphanumerically, for ordered collections and sort keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrd<T>(pub T);

impl<T: AsRef<[u8]>> Ord for NaturalOrd<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.0.as_ref(), other.0.as_ref())
    }
}
impl<T: AsRef<[u8]>> PartialOrd for NaturalOrd<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: AsRef<[u8]>> PartialEq for NaturalOrd<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: AsRef<[u8]>> Eq for NaturalOrd<T> {}

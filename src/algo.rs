//! The interchangeable sorting strategies (Bubble, Insertion, Merge).
//!
//! All three share one contract: reorder the same N elements of a mutable
//! slice in place, ordered by a caller-supplied comparator and an explicit
//! [`Direction`]. Each algorithm acts only on strict `Greater` outcomes, so
//! reflecting the comparator for descending runs preserves whatever
//! stability the algorithm provides in the ascending case.
//!
//! The main entry points are [`Strategy::sort_by`] and the free functions
//! [`bubble_sort`], [`insertion_sort`], and [`merge_sort`].

use crate::error::Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Requested ordering of the sorted output.
///
/// There is deliberately no `Default` impl: a shell must state its default
/// direction explicitly rather than inherit one from the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Reflects a comparator outcome for descending runs.
    #[inline(always)]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(Error::InvalidArgument {
                what: "direction",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

/// Enumerated identifier for the available sorting strategies.
///
/// Unknown names are rejected at the boundary by the [`FromStr`] impl; the
/// algorithms themselves never see an unvalidated strategy choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bubble,
    Insertion,
    Merge,
}

impl Strategy {
    /// All strategies, in menu order.
    pub const ALL: [Strategy; 3] = [Strategy::Bubble, Strategy::Insertion, Strategy::Merge];

    /// Sorts `data` in place with this strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortbench::{Direction, Strategy};
    ///
    /// let mut data = vec![3, 1, 2];
    /// Strategy::Merge.sort_by(&mut data, |a, b| a.cmp(b), Direction::Ascending);
    ///
    /// assert_eq!(data, vec![1, 2, 3]);
    /// ```
    pub fn sort_by<T, F>(self, data: &mut [T], cmp: F, direction: Direction)
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        match self {
            Strategy::Bubble => bubble_sort(data, cmp, direction),
            Strategy::Insertion => insertion_sort(data, cmp, direction),
            Strategy::Merge => merge_sort(data, cmp, direction),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Strategy::Bubble),
            "insertion" => Ok(Strategy::Insertion),
            "merge" => Ok(Strategy::Merge),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bubble => f.write_str("Bubble"),
            Strategy::Insertion => f.write_str("Insertion"),
            Strategy::Merge => f.write_str("Merge"),
        }
    }
}

/// Bubble sort: repeated adjacent-pair passes, swapping only on a strict
/// violation of the requested direction.
///
/// Terminates early once a full pass performs zero swaps. Because equal
/// keys never trigger a swap, the algorithm is stable in practice, though
/// that is incidental rather than part of its design.
///
/// O(N²) comparisons worst and average case, O(1) extra space.
pub fn bubble_sort<T, F>(data: &mut [T], cmp: F, direction: Direction)
where
    F: Fn(&T, &T) -> Ordering,
{
    let n = data.len();
    if n < 2 {
        return;
    }

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if direction.apply(cmp(&data[j], &data[j + 1])) == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Insertion sort: grows a sorted prefix, shifting each new element
/// leftward past prefix elements that strictly violate the requested
/// direction relative to it.
///
/// Equal keys stop the shift, so relative input order of equal elements is
/// preserved (stable). O(N²) worst case, O(N) on nearly sorted input,
/// O(1) extra space.
pub fn insertion_sort<T, F>(data: &mut [T], cmp: F, direction: Direction)
where
    F: Fn(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }

    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && direction.apply(cmp(&data[j - 1], &data[j])) == Ordering::Greater {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Merge sort: splits at the midpoint, recursively sorts each half, then
/// merges. On equal keys the merge always takes the left head, so the sort
/// is stable.
///
/// O(N log N) time. A single scratch buffer is allocated up front and
/// re-sliced through the recursion, so auxiliary space is O(N) total.
pub fn merge_sort<T, F>(data: &mut [T], cmp: F, direction: Direction)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }

    let mut scratch = data.to_vec();
    sort_halves(data, &mut scratch, &|a: &T, b: &T| direction.apply(cmp(a, b)));
}

fn sort_halves<T, F>(data: &mut [T], scratch: &mut [T], cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    sort_halves(&mut data[..mid], &mut scratch[..mid], cmp);
    sort_halves(&mut data[mid..], &mut scratch[mid..], cmp);
    merge(data, mid, scratch, cmp);
}

/// Merges the two sorted halves of `data` (split at `mid`) through
/// `scratch`, then copies the result back.
fn merge<T, F>(data: &mut [T], mid: usize, scratch: &mut [T], cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = data.len();
    let (mut i, mut j) = (0, mid);

    for slot in scratch[..len].iter_mut() {
        // Left head wins ties to keep the merge stable.
        let take_left = if i == mid {
            false
        } else if j == len {
            true
        } else {
            cmp(&data[i], &data[j]) != Ordering::Greater
        };

        if take_left {
            *slot = data[i].clone();
            i += 1;
        } else {
            *slot = data[j].clone();
            j += 1;
        }
    }

    data.clone_from_slice(&scratch[..len]);
}

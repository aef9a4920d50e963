//! Wall-clock timing harness and the shell-facing invocation surface.
//!
//! [`time`] is the single timing primitive: one monotonic clock reading
//! immediately before the operation, one immediately after, nothing else in
//! the window. Load and every sort strategy go through it, so elapsed
//! figures are comparable across algorithms and against the load itself.
//! Formatting and I/O happen outside the window, in the shells.

use crate::algo::{Direction, Strategy};
use crate::error::{Error, Result};
use crate::record::{Field, FieldValue, Record};
use crate::store::{self, RecordStore};
use std::path::Path;
use std::time::{Duration, Instant};

/// The value produced by a timed operation, paired with its elapsed time.
///
/// Created per invocation and handed straight to the caller; never
/// retained. Near-zero durations on tiny inputs are valid readings, not
/// errors.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in seconds, for report formatting.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Splits into the value and its duration.
    pub fn into_parts(self) -> (T, Duration) {
        (self.value, self.elapsed)
    }
}

/// Runs `op` between two monotonic clock readings.
///
/// # Examples
///
/// ```
/// let timed = sortbench::time(|| (0..100).sum::<u64>());
///
/// assert_eq!(timed.value, 4950);
/// assert!(timed.elapsed_secs() >= 0.0);
/// ```
pub fn time<R>(op: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let value = op();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Timed load of a CSV source. The window covers opening, parsing, and
/// validating; a load error carries no partial store and no timing.
pub fn load(path: impl AsRef<Path>) -> Result<Timed<RecordStore>> {
    let Timed { value, elapsed } = time(|| RecordStore::load(path));
    Ok(Timed {
        value: value?,
        elapsed,
    })
}

/// Times one strategy invocation over records the caller already owns.
///
/// Consuming the vector makes the mutation contract explicit: strategies
/// reorder their input in place, so the caller hands over a copy (normally
/// from [`RecordStore::slice`]) and the live store is never touched.
///
/// # Examples
///
/// ```
/// use sortbench::{Direction, Field, Record, Strategy, benchmark_sort};
///
/// let records = vec![
///     Record { id: 3, first_name: "A".into(), last_name: "X".into() },
///     Record { id: 1, first_name: "B".into(), last_name: "Y".into() },
///     Record { id: 2, first_name: "C".into(), last_name: "Z".into() },
/// ];
///
/// let timed = benchmark_sort(Strategy::Merge, records, Field::Id, Direction::Ascending);
/// let ids: Vec<u32> = timed.value.iter().map(|r| r.id).collect();
///
/// assert_eq!(ids, vec![1, 2, 3]);
/// ```
pub fn benchmark_sort(
    strategy: Strategy,
    mut records: Vec<Record>,
    field: Field,
    direction: Direction,
) -> Timed<Vec<Record>> {
    time(move || {
        strategy.sort_by(&mut records, |a, b| field.compare(a, b), direction);
        records
    })
}

/// Exact-match query over a record slice. Not part of the timed surface.
pub fn query(records: &[Record], field: Field, value: &FieldValue) -> Vec<Record> {
    store::find_by_field(records, field, value)
}

/// Boundary conversion from raw shell input to a slice size.
pub fn parse_count(raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| Error::InvalidArgument {
        what: "row count",
        value: raw.to_string(),
    })
}

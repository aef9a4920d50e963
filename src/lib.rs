//! # Sortbench
//!
//! `sortbench` is a benchmarking harness for classic sorting strategies
//! (Bubble, Insertion, Merge) over record sets loaded from delimited text
//! sources.
//!
//! It loads a CSV record set, applies any of the interchangeable strategies
//! to a caller-chosen prefix of the records, and reports wall-clock elapsed
//! time alongside the sorted result. Exact-match search over a chosen field
//! rounds out the surface.
//!
//! ## Key Features
//!
//! - **Interchangeable Strategies**: All three algorithms share one
//!   contract (same elements, caller-supplied comparator, explicit
//!   [`Direction`]), so results and timings are directly comparable.
//! - **Fair Timing**: A single monotonic-clock wrapper ([`time`]) times the
//!   load and every strategy invocation identically; formatting and I/O
//!   stay outside the window.
//! - **Typed Field Access**: Runtime field selection goes through the
//!   [`Field`] enum rather than string keys; name validation is confined to
//!   the boundary via `FromStr`.
//! - **Immutable Store**: [`RecordStore`] is read-only after load and hands
//!   out owned copies for sorting, so repeated benchmark runs in one
//!   session see identical input.
//!
//! ## Usage
//!
//! ### Scalars
//!
//! The strategies are generic over the element type and comparator, so any
//! comparable sequence sorts through the same entry points.
//!
//! ```rust
//! use sortbench::{Direction, Strategy};
//!
//! let mut data = vec![5, 1, 4, 2, 3];
//! Strategy::Insertion.sort_by(&mut data, |a, b| a.cmp(b), Direction::Descending);
//!
//! assert_eq!(data, vec![5, 4, 3, 2, 1]);
//! ```
//!
//! ### Records
//!
//! A shell loads a store once, slices off the prefix it wants, and
//! benchmarks any strategy against it.
//!
//! ```rust
//! use sortbench::{
//!     Direction, Field, FieldValue, Record, RecordStore, Strategy, benchmark_sort, query,
//! };
//!
//! let store = RecordStore::from_records(vec![
//!     Record { id: 3, first_name: "Ada".into(), last_name: "Lovelace".into() },
//!     Record { id: 1, first_name: "Edsger".into(), last_name: "Dijkstra".into() },
//!     Record { id: 2, first_name: "Grace".into(), last_name: "Hopper".into() },
//! ]);
//!
//! let timed = benchmark_sort(Strategy::Bubble, store.slice(3), Field::Id, Direction::Ascending);
//! assert_eq!(timed.value[0].id, 1);
//!
//! let matches = query(store.records(), Field::Id, &FieldValue::Id(2));
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].first_name, "Grace");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Bubble / Insertion**: O(N²) worst case, O(1) extra space; Insertion
//!   degrades gracefully to O(N) on nearly sorted input.
//! - **Merge**: O(N log N) with one O(N) scratch buffer per call.
//!
//! The harness itself adds two `Instant` reads per timed operation.

pub mod algo;
pub mod bench;
pub mod error;
pub mod record;
pub mod store;

pub use algo::{Direction, Strategy, bubble_sort, insertion_sort, merge_sort};
pub use bench::{Timed, benchmark_sort, load, parse_count, query, time};
pub use error::{Error, Result};
pub use record::{Field, FieldValue, Record};
pub use store::RecordStore;

pub mod prelude {
    pub use crate::algo::{Direction, Strategy, bubble_sort, insertion_sort, merge_sort};
    pub use crate::bench::{Timed, benchmark_sort, load, parse_count, query, time};
    pub use crate::error::{Error, Result};
    pub use crate::record::{Field, FieldValue, Record};
    pub use crate::store::RecordStore;
}

//! Vec-like record containers whose memory layout is a type parameter.
//!
//! A [`RecordVec<T, L>`] stores records of type `T`, which is a tuple of 1 to
//! 12 fields, in one of two layouts:
//!
//! - [`Aos`] (array of structures) keeps one `Vec<T>`. Elements are handed
//!   out as `&T` and `&mut T`.
//! - [`Soa`] (structure of arrays) keeps one column per field. Elements are
//!   handed out as [`SoaRef`] and [`SoaMut`] proxies that hold an index and
//!   the column pointers. No contiguous record ever exists in memory.
//!
//! The [`ElementRef`] and [`ElementMut`] traits give both kinds of handle the
//! same interface, so client code is written once against `L: Layout`:
//!
//! ```
//! use layout_vec::{Aos, ElementMut, ElementRef, Layout, RecordVec, Soa};
//!
//! fn rotate<L: Layout>(vec: &mut RecordVec<(String, u32), L>) {
//!     let saved = vec.idx_mut(0).replace((String::new(), 0));
//!     for i in 1..vec.len() {
//!         vec.move_element(i, i - 1);
//!     }
//!     let last = vec.len() - 1;
//!     vec.idx_mut(last).set(saved);
//! }
//!
//! let records = [("a", 1), ("b", 2), ("c", 3)].map(|(s, n)| (s.to_string(), n));
//! let mut aos = RecordVec::<_, Aos>::from(records.clone());
//! let mut soa = RecordVec::<_, Soa>::from(records);
//! rotate(&mut aos);
//! rotate(&mut soa);
//! assert_eq!(aos, soa);
//! assert_eq!(soa.column::<0>(), ["b", "c", "a"]);
//! assert_eq!(*soa.idx(2).get::<1>(), 1);
//! ```
//!
//! Whole-record operations on elements ([`ElementMut::assign_from`],
//! [`ElementMut::assign_moving`], [`ElementMut::swap_with`]) run field by
//! field in field order. They are not atomic: a panic while cloning one field
//! leaves the earlier fields already updated. Moves go through the explicit
//! [`Moving`] wrapper and leave `Default::default()` in the source fields.
//!
//! User structs convert to and from their tuple record with
//! [`#[derive(AsRecord)]`](derive@AsRecord).

mod aos;
mod columns;
mod cursor;
mod element;
mod eq_impl;
mod error;
mod iter;
mod layout;
mod macros;
mod proxy;
mod record;
mod soa;
mod tuple;
mod vec;

#[cfg(feature = "serde")]
mod serde;

#[cfg(doctest)]
mod borrow_tests;

pub use aos::AosStorage;
#[doc(hidden)]
pub use columns::Columns;
pub use cursor::Cursor;
pub use element::{ElementMut, ElementRef, Moving};
pub use error::TryReserveError;
pub use iter::{IntoIter, Iter, IterMut};
pub use layout::{Aos, ElemMut, ElemRef, Layout, Soa, Storage};
pub use layout_vec_derive::AsRecord;
pub use proxy::{SoaMut, SoaRef};
pub use record::{AsFields, AsRecord, CloneFields, Field, Record, TakeFields};
pub use soa::{SoaIntoIter, SoaStorage};
pub use vec::{AosVec, RecordVec, SoaVec};

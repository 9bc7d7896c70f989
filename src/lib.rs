//! A small commons library for operating-systems course projects.
//!
//! The crate bundles the handful of building blocks that course assignments reach for over and
//! over: a generic singly linked [`List`](collections::list::List) with higher-order operations
//! and a stable merge sort, a chained [`Dictionary`](collections::dict::Dictionary), a FIFO
//! [`Queue`](collections::queue::Queue), a [`BitArray`](collections::bits::BitArray) over a raw
//! byte buffer, plain-text helpers under [`text`], and a `KEY=VALUE` configuration file under
//! [`config`].
//!
//! # Design
//! The list is the heart of the crate. It is built around one abstraction: a *slot*, the storage
//! location that currently holds a link to a node, which is either the list's head field or some
//! node's `next` field. Insertions and removals are written once against slots, so the head, middle and
//! tail cases share a single code path, and every derived operation (sorting, slicing, filtered
//! removal, the removing cursor) reduces to "find the right slot, splice through it".
//!
//! # Error Handling
//! Operations with an index precondition come in pairs: a `try_` method returning a strongly
//! typed error, and a panicking convenience method that delegates to it. Absence (a search that
//! finds nothing) is never an error and is reported as [`None`]. Operations that select a range
//! beyond the available elements truncate silently; that policy is deliberate and covered by
//! tests.
//!
//! # Concurrency
//! None. Every structure here assumes a single owner, which Rust's borrow rules enforce for free.
//! [`List`](collections::list::List) holds raw node pointers internally and is therefore neither
//! [`Send`] nor [`Sync`]; wrap it externally if you must share it.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "text")]
pub mod text;

pub(crate) mod util;

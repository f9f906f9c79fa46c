//! This crate provides an insertion-ordered key/value collection for
//! dynamically typed values.
//!
//! A [`SeqMap`] stores its entries as a flat sequence and preserves the
//! order in which keys were first inserted: replacing a key's value keeps
//! the entry's position, and iteration always walks entries oldest-first.
//! Keys and values are [`Value`]s, so a single map can hold integers,
//! floats, booleans, strings, and null side by side.
//!
//! Key matching is *coercive* by default: the integer `1` and the string
//! `"1"` name the same entry. The relation is pluggable through
//! [`Equivalence`], with a strict mode for callers that want same-type
//! matching only.
//!
//! Every container operation is fail-soft. Nothing panics; a lookup that
//! finds nothing returns `None`, a mutation that cannot apply returns
//! `false` and leaves the map untouched. Lookups are linear scans over the
//! entry sequence, which is the intended trade for the target workload of
//! small, short-lived collections (a handful of entries built once and
//! iterated once).

pub mod error;
pub mod loader;
pub mod map;
pub mod value;

#[cfg(test)]
mod map_tests;

pub use crate::error::SeqMapError;
pub use crate::map::{Entry, Equivalence, SeqMap};
pub use crate::value::Value;

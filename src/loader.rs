//! The container side of the asynchronous resource-loader boundary.
//!
//! The loader proper (fetching bytes, decoding, attaching the result to a
//! page) is an external collaborator. This module fixes the two call
//! patterns that collaborator relies on: pairing resource handles with
//! their source locations, and walking the pairs in a predictable order.
//! The fetches themselves may complete out of order; the order they are
//! *issued* in is the insertion order of the collection.

use crate::map::SeqMap;
use crate::value::Value;

/// Builds the handle-to-source collection for one load pass, pairing
/// `resources[i]` with `sources[i]`.
///
/// Returns ```None``` if the two sequences differ in length; no partial
/// collection is built.
pub fn source_collection(resources: &[Value], sources: &[Value]) -> Option<SeqMap> {
  SeqMap::from_pairs(resources, sources)
}

/// Snapshots the `(resource, source)` pairs a loader would walk, in
/// insertion order.
pub fn load_order(collection: &SeqMap) -> Vec<(Value, Value)> {
  collection
    .iter()
    .map(|(key, value)| (key.clone(), value.clone()))
    .collect()
}

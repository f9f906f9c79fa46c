//! This module defines the `SeqMap` struct, an insertion-ordered key/value
//! collection over dynamically typed `Value`s.

use crate::error::SeqMapError;
use crate::value::Value;

/// The relation used to match keys (and values) during lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Equivalence {
  /// Coercive matching via [`Value::loose_eq`]: `1` and `"1"` name the
  /// same entry. The default.
  #[default]
  Loose,
  /// Same-type matching via `PartialEq` (numbers still compare across the
  /// int/float split).
  Strict,
}

impl Equivalence {
  fn matches(self, a: &Value, b: &Value) -> bool {
    match self {
      Equivalence::Loose => a.loose_eq(b),
      Equivalence::Strict => a == b,
    }
  }
}

/// A single key/value pair of a `SeqMap`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
  pub key: Value,
  pub value: Value,
}

/// An insertion-ordered key/value collection.
///
/// Entries live in a flat sequence; every lookup and mutation is a linear
/// scan matching keys with the map's [`Equivalence`]. The map holds at most
/// one entry per key under that relation, and the order in which keys were
/// first inserted survives replacement and removal.
///
/// No operation panics. Lookups that find nothing return `None`, mutations
/// that cannot apply return `false` and leave the map unchanged, so callers
/// check return values rather than catch faults.
///
/// ```
/// # use seqmap::{SeqMap, Value};
/// let mut map = SeqMap::new();
/// map.put(Value::from("item1Key"), Value::from("item1Value"));
/// assert_eq!(map.get(&Value::from("item1Key")), Some(&Value::from("item1Value")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeqMap {
  entries: Vec<Entry>,
  equivalence: Equivalence,
}

impl SeqMap {
  /// Creates an empty map with the default coercive key relation.
  pub fn new() -> SeqMap {
    SeqMap::default()
  }

  /// Creates an empty map matching keys with the given relation.
  pub fn with_equivalence(equivalence: Equivalence) -> SeqMap {
    SeqMap { entries: Vec::new(), equivalence }
  }

  /// Returns the relation this map matches keys with.
  pub fn equivalence(&self) -> Equivalence {
    self.equivalence
  }

  /// Returns the number of entries in the map.
  pub fn size(&self) -> usize {
    self.entries.len()
  }

  /// Returns ```true``` if the map contains no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Deletes all entries of the map.
  pub fn clear(&mut self) {
    self.entries.clear();
  }

  /// Index of the first entry whose key matches, if any.
  fn position(&self, key: &Value) -> Option<usize> {
    self
      .entries
      .iter()
      .position(|entry| self.equivalence.matches(&entry.key, key))
  }

  /// Puts an entry into the map.
  ///
  /// If an entry with a matching key already exists its value is replaced
  /// in place and the entry keeps its position; otherwise the new entry is
  /// appended at the end. Returns ```true``` on success; ```false``` is
  /// reserved for internal failure, in which case the map is unchanged.
  pub fn put(&mut self, key: Value, value: Value) -> bool {
    match self.position(&key) {
      Some(i) => self.entries[i].value = value,
      None => self.entries.push(Entry { key, value }),
    }
    true
  }

  /// Removes the entry with a matching key from the map.
  ///
  /// Returns ```true``` if an entry was removed, ```false``` if no key
  /// matched.
  pub fn remove(&mut self, key: &Value) -> bool {
    match self.position(key) {
      Some(i) => {
        self.entries.remove(i);
        true
      }
      None => false,
    }
  }

  /// Returns the value associated with the matching key, or ```None``` if
  /// no key matches.
  pub fn get(&self, key: &Value) -> Option<&Value> {
    self.position(key).map(|i| &self.entries[i].value)
  }

  /// Returns the key/value pair at the given 0-based insertion position,
  /// or ```None``` if the index is out of range.
  pub fn element(&self, index: usize) -> Option<&Entry> {
    self.entries.get(index)
  }

  /// Returns ```true``` if the map contains a key matching the given one.
  pub fn contains_key(&self, key: &Value) -> bool {
    self.position(key).is_some()
  }

  /// Returns ```true``` if the map contains a value matching the given one.
  pub fn contains_value(&self, value: &Value) -> bool {
    self
      .entries
      .iter()
      .any(|entry| self.equivalence.matches(&entry.value, value))
  }

  /// Returns the keys of the map in insertion order.
  pub fn keys(&self) -> Vec<Value> {
    self.entries.iter().map(|entry| entry.key.clone()).collect()
  }

  /// Returns the values of the map in insertion order, index-aligned with
  /// [`keys`](SeqMap::keys).
  pub fn values(&self) -> Vec<Value> {
    self.entries.iter().map(|entry| entry.value.clone()).collect()
  }

  /// Iterates over `(key, value)` pairs in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
    self.entries.iter().map(|entry| (&entry.key, &entry.value))
  }

  /// Builds a map from parallel key and value sequences, pairing
  /// `keys[i]` with `values[i]` in order.
  ///
  /// Yields ```None``` if the sequences differ in length; no partial map is
  /// built.
  pub fn from_pairs(keys: &[Value], values: &[Value]) -> Option<SeqMap> {
    SeqMap::try_from_pairs(keys, values).ok()
  }

  pub(crate) fn try_from_pairs(keys: &[Value], values: &[Value]) -> Result<SeqMap, SeqMapError> {
    if keys.len() != values.len() {
      return Err(SeqMapError::LengthMismatch {
        keys: keys.len(),
        values: values.len(),
      });
    }
    let mut map = SeqMap::new();
    for (key, value) in keys.iter().zip(values.iter()) {
      map.put(key.clone(), value.clone());
    }
    Ok(map)
  }

  /// Parses a map from a JSON string. Accepts the array-of-pairs form
  /// produced by [`to_string`](SeqMap::to_string) as well as a plain JSON
  /// object (string keys, insertion order of the document).
  #[cfg(feature = "serde_support")]
  pub fn from_string(s: &str) -> Result<SeqMap, SeqMapError> {
    let value: serde_json::Value = serde_json::from_str(s)?;
    SeqMap::from_json(&value)
  }

  /// Serializes the map to a JSON string.
  #[cfg(feature = "serde_support")]
  pub fn to_string(&self) -> String {
    self.to_json().to_string()
  }

  /// Converts a JSON value into a map. See [`from_string`](SeqMap::from_string).
  #[cfg(feature = "serde_support")]
  pub fn from_json(value: &serde_json::Value) -> Result<SeqMap, SeqMapError> {
    match value {
      serde_json::Value::Array(pairs) => {
        let mut map = SeqMap::new();
        for pair in pairs {
          let pair = pair
            .as_array()
            .ok_or(SeqMapError::Shape("a non-pair array element"))?;
          if pair.len() != 2 {
            return Err(SeqMapError::Shape("a non-pair array element"));
          }
          map.put(Value::from_json(&pair[0])?, Value::from_json(&pair[1])?);
        }
        Ok(map)
      }
      serde_json::Value::Object(fields) => {
        let mut map = SeqMap::new();
        for (key, val) in fields {
          map.put(Value::String(key.clone()), Value::from_json(val)?);
        }
        Ok(map)
      }
      serde_json::Value::Null => Err(SeqMapError::Shape("null")),
      serde_json::Value::Bool(_) => Err(SeqMapError::Shape("a boolean")),
      serde_json::Value::Number(_) => Err(SeqMapError::Shape("a number")),
      serde_json::Value::String(_) => Err(SeqMapError::Shape("a string")),
    }
  }

  /// Converts the map to JSON as an array of two-element `[key, value]`
  /// arrays. A JSON object cannot carry non-string keys, so the pair form
  /// is the canonical one; it also keeps insertion order on its face.
  #[cfg(feature = "serde_support")]
  pub fn to_json(&self) -> serde_json::Value {
    let pairs: Vec<serde_json::Value> = self
      .entries
      .iter()
      .map(|entry| serde_json::Value::Array(vec![entry.key.to_json(), entry.value.to_json()]))
      .collect();
    serde_json::Value::Array(pairs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn put_then_get() {
    let mut map = SeqMap::new();
    assert!(map.put(Value::from("x"), Value::Int(1)));
    assert_eq!(map.size(), 1);
    assert_eq!(map.get(&Value::from("x")), Some(&Value::Int(1)));
    assert!(map.contains_key(&Value::from("x")));
  }

  #[test]
  fn replace_keeps_size_and_position() {
    let mut map = SeqMap::new();
    map.put(Value::from("a"), Value::Int(1));
    map.put(Value::from("b"), Value::Int(2));
    map.put(Value::from("a"), Value::Int(10));

    assert_eq!(map.size(), 2);
    assert_eq!(map.get(&Value::from("a")), Some(&Value::Int(10)));
    assert_eq!(map.keys(), vec![Value::from("a"), Value::from("b")]);
    assert_eq!(map.values(), vec![Value::Int(10), Value::Int(2)]);
  }

  #[test]
  fn remove_first_match_only() {
    let mut map = SeqMap::new();
    map.put(Value::from("a"), Value::Int(1));
    map.put(Value::from("b"), Value::Int(2));

    assert!(map.remove(&Value::from("a")));
    assert!(!map.contains_key(&Value::from("a")));
    assert_eq!(map.get(&Value::from("a")), None);
    assert_eq!(map.size(), 1);
    assert_eq!(map.keys(), vec![Value::from("b")]);

    assert!(!map.remove(&Value::from("a")));
    assert_eq!(map.size(), 1);
  }

  #[test]
  fn order_survives_interleaved_mutation() {
    let mut map = SeqMap::new();
    map.put(Value::from("a"), Value::Int(1));
    map.put(Value::from("b"), Value::Int(2));
    map.put(Value::from("c"), Value::Int(3));
    map.remove(&Value::from("b"));
    map.put(Value::from("d"), Value::Int(4));
    map.put(Value::from("a"), Value::Int(5));

    assert_eq!(
      map.keys(),
      vec![Value::from("a"), Value::from("c"), Value::from("d")]
    );
    assert_eq!(map.values(), vec![Value::Int(5), Value::Int(3), Value::Int(4)]);
  }

  #[test]
  fn keys_and_values_are_aligned() {
    let mut map = SeqMap::new();
    map.put(Value::Int(1), Value::from("one"));
    map.put(Value::from("two"), Value::Int(2));
    map.put(Value::Null, Value::Boolean(true));

    let keys = map.keys();
    let values = map.values();
    assert_eq!(keys.len(), map.size());
    assert_eq!(values.len(), map.size());
    for (i, key) in keys.iter().enumerate() {
      assert_eq!(map.get(key), Some(&values[i]));
    }
  }

  #[test]
  fn clear_empties_the_map() {
    let mut map = SeqMap::new();
    map.put(Value::from("x"), Value::Int(1));
    map.clear();

    assert_eq!(map.size(), 0);
    assert!(map.is_empty());
    assert!(map.keys().is_empty());
    assert!(map.values().is_empty());
  }

  #[test]
  fn is_empty_tracks_size() {
    let mut map = SeqMap::new();
    assert!(map.is_empty());
    map.put(Value::from("x"), Value::Int(1));
    assert!(!map.is_empty());
    map.remove(&Value::from("x"));
    assert!(map.is_empty());
  }

  #[test]
  fn coercive_keys_cross_types() {
    let mut map = SeqMap::new();
    map.put(Value::Int(1), Value::from("a"));

    assert_eq!(map.get(&Value::from("1")), Some(&Value::from("a")));
    assert!(map.contains_key(&Value::Float(1.0)));

    // A coercively-equal key replaces rather than appends.
    map.put(Value::from("1"), Value::from("b"));
    assert_eq!(map.size(), 1);
    assert_eq!(map.get(&Value::Int(1)), Some(&Value::from("b")));
  }

  #[test]
  fn strict_mode_keeps_cross_type_keys_apart() {
    let mut map = SeqMap::with_equivalence(Equivalence::Strict);
    map.put(Value::Int(1), Value::from("a"));
    map.put(Value::from("1"), Value::from("b"));

    assert_eq!(map.size(), 2);
    assert_eq!(map.get(&Value::Int(1)), Some(&Value::from("a")));
    assert_eq!(map.get(&Value::from("1")), Some(&Value::from("b")));
  }

  #[test]
  fn contains_value_uses_the_map_relation() {
    let mut map = SeqMap::new();
    map.put(Value::from("k"), Value::Int(5));
    assert!(map.contains_value(&Value::from("5")));
    assert!(!map.contains_value(&Value::Int(6)));

    let mut strict = SeqMap::with_equivalence(Equivalence::Strict);
    strict.put(Value::from("k"), Value::Int(5));
    assert!(!strict.contains_value(&Value::from("5")));
    assert!(strict.contains_value(&Value::Int(5)));
  }

  #[test]
  fn element_by_position() {
    let mut map = SeqMap::new();
    assert!(map.element(0).is_none());

    map.put(Value::from("x"), Value::Int(1));
    let entry = map.element(0).unwrap();
    assert_eq!(entry.key, Value::from("x"));
    assert_eq!(entry.value, Value::Int(1));
    assert!(map.element(1).is_none());
  }

  #[test]
  fn from_pairs_builds_in_order() {
    let keys = [Value::from("imgA"), Value::from("imgB")];
    let values = [Value::from("a.png"), Value::from("b.png")];
    let map = SeqMap::from_pairs(&keys, &values).unwrap();

    assert_eq!(map.size(), 2);
    assert_eq!(map.keys(), keys.to_vec());
    assert_eq!(map.values(), values.to_vec());
  }

  #[test]
  fn from_pairs_rejects_mismatched_lengths() {
    let keys = [Value::from("imgA")];
    let values = [Value::from("a.png"), Value::from("b.png")];
    assert!(SeqMap::from_pairs(&keys, &values).is_none());

    let err = SeqMap::try_from_pairs(&keys, &values).unwrap_err();
    assert!(matches!(
      err,
      SeqMapError::LengthMismatch { keys: 1, values: 2 }
    ));
  }

  #[cfg(feature = "serde_support")]
  #[test]
  fn json_round_trip_keeps_order() {
    let mut map = SeqMap::new();
    map.put(Value::from("b"), Value::Int(2));
    map.put(Value::from("a"), Value::Int(1));
    map.put(Value::Int(3), Value::Null);

    let s = map.to_string();
    assert_eq!(s, r#"[["b",2],["a",1],[3,null]]"#);

    let back = SeqMap::from_string(&s).unwrap();
    assert_eq!(back.keys(), map.keys());
    assert_eq!(back.values(), map.values());
  }

  #[cfg(feature = "serde_support")]
  #[test]
  fn json_object_form_is_accepted() {
    let map = SeqMap::from_string(r#"{"name":"test","value":123,"active":true}"#).unwrap();
    assert_eq!(map.size(), 3);
    assert_eq!(map.get(&Value::from("name")), Some(&Value::from("test")));
    assert_eq!(map.get(&Value::from("value")), Some(&Value::Int(123)));
    assert_eq!(map.get(&Value::from("active")), Some(&Value::Boolean(true)));
    assert_eq!(
      map.keys(),
      vec![Value::from("name"), Value::from("value"), Value::from("active")]
    );
  }

  #[cfg(feature = "serde_support")]
  #[test]
  fn json_bad_shapes_are_reported() {
    assert!(SeqMap::from_string("42").is_err());
    assert!(SeqMap::from_string(r#"[["k"]]"#).is_err());
    assert!(SeqMap::from_string(r#"[[{"nested":1},"v"]]"#).is_err());
    assert!(SeqMap::from_string("not json").is_err());
  }
}

//! Error types for the crate's constructors.
//!
//! Container operations never surface these: `put`/`remove`/`get` and
//! friends fold every failure into their neutral return value (`false` or
//! `None`), and callers distinguish presence from absence by checking that
//! value. The errors below exist for the build-from-input paths, which may
//! legitimately report what went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqMapError {
  /// Parallel key/value sequences differ in length.
  #[error("mismatched sequence lengths: {keys} keys, {values} values")]
  LengthMismatch { keys: usize, values: usize },

  /// A JSON document could not be parsed.
  #[cfg(feature = "serde_support")]
  #[error("malformed JSON: {0}")]
  Json(#[from] serde_json::Error),

  /// A JSON value has no representation in `Value`.
  #[cfg(feature = "serde_support")]
  #[error("unsupported JSON value of type {0}")]
  Unsupported(&'static str),

  /// A JSON document does not have the shape of a map.
  #[cfg(feature = "serde_support")]
  #[error("expected an array of [key, value] pairs or an object, found {0}")]
  Shape(&'static str),
}

//! This module defines the `Value` enum, the dynamically typed unit a
//! `SeqMap` stores as both key and value.

#[cfg(feature = "serde_support")]
use crate::error::SeqMapError;

/// A dynamically typed scalar value.
///
/// A `SeqMap` entry is not type-homogeneous with its neighbors: one entry
/// may pair a string with an integer while the next pairs a float with
/// null. `Value` is the closed set of types the container admits.
#[derive(Debug, Clone)]
pub enum Value {
  /// Contains no value.
  ///
  /// ```
  /// # use seqmap::Value;
  /// let v = Value::Null;
  /// ```
  Null,
  /// Contains a bool value.
  ///
  /// ```
  /// # use seqmap::Value;
  /// let v = Value::Boolean(true);
  /// ```
  Boolean(bool),
  /// Contains an i64 value.
  ///
  /// ```
  /// # use seqmap::Value;
  /// let v = Value::Int(99);
  /// ```
  Int(i64),
  /// Contains an f64 value.
  ///
  /// ```
  /// # use seqmap::Value;
  /// let v = Value::Float(99.99);
  /// ```
  Float(f64),
  /// Contains a String value.
  ///
  /// ```
  /// # use seqmap::Value;
  /// let v = Value::String("hello world".to_owned());
  /// ```
  String(String),
}

impl Value {
  /// Returns ```true``` if the value is of type ```Null```.
  pub fn is_null(&self) -> bool {
    if let Value::Null = self { true } else { false }
  }

  /// Returns ```true``` if the value is of type ```Boolean```.
  pub fn is_boolean(&self) -> bool {
    if let Value::Boolean(_b) = self { true } else { false }
  }

  /// Returns ```true``` if the value is of type ```Int```.
  pub fn is_int(&self) -> bool {
    if let Value::Int(_i) = self { true } else { false }
  }

  /// Returns ```true``` if the value is of type ```Float```.
  pub fn is_float(&self) -> bool {
    if let Value::Float(_f) = self { true } else { false }
  }

  /// Returns ```true``` if the value is of type ```Int``` or ```Float```.
  pub fn is_number(&self) -> bool {
    self.is_int() || self.is_float()
  }

  /// Returns ```true``` if the value is of type ```String```.
  pub fn is_string(&self) -> bool {
    if let Value::String(_s) = self { true } else { false }
  }

  /// Returns the underlying ```bool``` value, or ```None``` if not ```Boolean```.
  pub fn as_boolean(&self) -> Option<bool> {
    if let Value::Boolean(b) = self { Some(*b) } else { None }
  }

  /// Returns the underlying ```i64``` value, or ```None``` if not ```Int```.
  pub fn as_int(&self) -> Option<i64> {
    if let Value::Int(i) = self { Some(*i) } else { None }
  }

  /// Returns the numeric value as ```f64```, or ```None``` if the value is
  /// not a number. An ```Int``` widens losslessly for the magnitudes this
  /// container is meant for.
  pub fn as_float(&self) -> Option<f64> {
    match self {
      Value::Int(i) => Some(*i as f64),
      Value::Float(f) => Some(*f),
      _ => None,
    }
  }

  /// Returns the underlying string, or ```None``` if not ```String```.
  pub fn as_str(&self) -> Option<&str> {
    if let Value::String(s) = self { Some(s) } else { None }
  }

  /// Returns the name of the value's runtime type.
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Null => "null",
      Value::Boolean(_) => "boolean",
      Value::Int(_) => "int",
      Value::Float(_) => "float",
      Value::String(_) => "string",
    }
  }

  /// Returns a ```String``` representation of the underlying value.
  pub fn as_string(&self) -> String {
    match self {
      Value::Null => "null".to_string(),
      Value::Boolean(b) => b.to_string(),
      Value::Int(i) => i.to_string(),
      Value::Float(f) => f.to_string(),
      Value::String(s) => s.to_owned(),
    }
  }

  /// Numeric reading used by the loose relation. Null is excluded on
  /// purpose: null matches nothing but null. A blank string reads as 0; a
  /// string that does not parse as a number reads as nothing and can never
  /// match.
  fn numeric_cast(&self) -> Option<f64> {
    match self {
      Value::Int(i) => Some(*i as f64),
      Value::Float(f) => Some(*f),
      Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
      Value::String(s) => {
        let trimmed = s.trim();
        if trimmed.is_empty() {
          Some(0.0)
        } else {
          trimmed.parse::<f64>().ok()
        }
      }
      Value::Null => None,
    }
  }

  /// Coercive equality: the relation `SeqMap` matches keys with by default.
  ///
  /// Two strings compare textually and two booleans compare directly, but
  /// any other mixed pairing converts both sides to numbers first, so
  /// ```Int(1)```, ```Float(1.0)```, ```String("1")```, and
  /// ```Boolean(true)``` all match each other. Null matches only null.
  /// `NaN` matches nothing, itself included.
  ///
  /// ```
  /// # use seqmap::Value;
  /// assert!(Value::Int(1).loose_eq(&Value::String("1".to_owned())));
  /// assert!(!Value::String("1".to_owned()).loose_eq(&Value::String("01".to_owned())));
  /// ```
  pub fn loose_eq(&self, other: &Value) -> bool {
    match (self, other) {
      (Value::Null, Value::Null) => true,
      (Value::Null, _) | (_, Value::Null) => false,
      (Value::String(a), Value::String(b)) => a == b,
      (Value::Boolean(a), Value::Boolean(b)) => a == b,
      _ => match (self.numeric_cast(), other.numeric_cast()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
      },
    }
  }

  /// Converts a JSON scalar into a `Value`. Integers that fit an ```i64```
  /// become ```Int```; larger ones widen (lossily past 2^53) to
  /// ```Float```. Arrays and objects have no representation here and are
  /// reported rather than silently flattened.
  #[cfg(feature = "serde_support")]
  pub fn from_json(value: &serde_json::Value) -> Result<Value, SeqMapError> {
    match value {
      serde_json::Value::Null => Ok(Value::Null),
      serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
      serde_json::Value::Number(n) if n.is_i64() => Ok(Value::Int(n.as_i64().unwrap())),
      serde_json::Value::Number(n) => n
        .as_f64()
        .map(Value::Float)
        .ok_or(SeqMapError::Unsupported("number")),
      serde_json::Value::String(s) => Ok(Value::String(s.clone())),
      serde_json::Value::Array(_) => Err(SeqMapError::Unsupported("array")),
      serde_json::Value::Object(_) => Err(SeqMapError::Unsupported("object")),
    }
  }

  /// Converts the value into its JSON form. JSON has no non-finite
  /// numbers, so ```NaN``` and the infinities serialize to null and do not
  /// survive a round trip.
  #[cfg(feature = "serde_support")]
  pub fn to_json(&self) -> serde_json::Value {
    match self {
      Value::Null => serde_json::Value::Null,
      Value::Boolean(b) => serde_json::json!(b),
      Value::Int(i) => serde_json::json!(i),
      Value::Float(f) => serde_json::json!(f),
      Value::String(s) => serde_json::json!(s),
    }
  }
}

/// Strict equality. Numbers still compare numerically across the int/float
/// split (1 and 1.0 are the same number, not two values that happen to
/// coincide), but no pairing of distinct runtime types ever matches.
impl PartialEq for Value {
  fn eq(&self, other: &Value) -> bool {
    match (self, other) {
      (Value::Null, Value::Null) => true,
      (Value::Boolean(a), Value::Boolean(b)) => a == b,
      (Value::String(a), Value::String(b)) => a == b,
      _ => match (self.as_float(), other.as_float()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
      },
    }
  }
}

/// The default for ```Value``` is ```Null```.
impl Default for Value {
  fn default() -> Value {
    Value::Null
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Value {
    Value::Boolean(value)
  }
}

impl From<i64> for Value {
  fn from(value: i64) -> Value {
    Value::Int(value)
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Value {
    Value::Float(value)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Value {
    Value::String(value.to_string())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Value {
    Value::String(value)
  }
}

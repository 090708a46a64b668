//! Scalar JSON values.
//!
//! [`Value`] covers the four scalar kinds this crate parses. There are no
//! strings, arrays, or objects, so a `Value` never borrows from its input and
//! can be copied freely.
use core::fmt;

/// A scalar JSON value.
///
/// # Examples
///
/// ```
/// use scalarjson::{Value, ValueType};
///
/// let v = scalarjson::parse(" -1.5e-3 ").unwrap();
/// assert_eq!(v.value_type(), ValueType::Number);
/// assert_eq!(v.as_f64(), Some(-0.0015));
/// ```
// Serde support is compiled in for tests and when the optional `serde`
// feature is enabled by downstream crates.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A finite number.
    Number(f64),
}

/// The tag of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// [`Value::Null`]
    Null,
    /// [`Value::True`]
    True,
    /// [`Value::False`]
    False,
    /// [`Value::Number`]
    Number,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Null => "null",
            ValueType::True => "true",
            ValueType::False => "false",
            ValueType::Number => "number",
        })
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Returns the active variant's tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalarjson::{Value, ValueType};
    ///
    /// assert_eq!(Value::False.value_type(), ValueType::False);
    /// assert_eq!(Value::Number(2.0).value_type(), ValueType::Number);
    /// ```
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::True => ValueType::True,
            Self::False => ValueType::False,
            Self::Number(_) => ValueType::Number,
        }
    }

    /// Returns the number if the value is [`Number`], `None` otherwise.
    ///
    /// [`Number`]: Value::Number
    ///
    /// # Examples
    ///
    /// ```
    /// use scalarjson::Value;
    ///
    /// assert_eq!(Value::Number(0.5).as_f64(), Some(0.5));
    /// assert_eq!(Value::True.as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use scalarjson::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::False.is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }
}

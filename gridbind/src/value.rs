//! Dynamic cell values and the column type-tag.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The type-tag carried by a column descriptor.
///
/// Every [`Value`] reports its kind; a column declares the kind its cells
/// are expected to hold so the host can pick renderers and editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Null/empty cell.
    Null,
    /// Boolean value.
    Bool,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// 64-bit floating point.
    Float,
    /// String value.
    String,
    /// GUID/UUID value.
    Guid,
    /// Date and time with timezone.
    DateTime,
}

impl ValueKind {
    /// Returns the lowercase name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Guid => "guid",
            ValueKind::DateTime => "datetime",
        }
    }
}

/// A dynamic value held by one table cell.
///
/// Accessors on [`TableModel`](crate::model::TableModel) produce `Value`s and
/// mutators consume them, so the host-facing surface stays independent of the
/// concrete entity type.
///
/// # Example
///
/// ```
/// use gridbind::value::Value;
///
/// let name = Value::from("Rex");
/// let age = Value::from(3i32);
/// let none = Value::Null;
/// assert_eq!(age.as_i32(), Some(3));
/// assert!(none.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Long(_) => ValueKind::Long,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Guid(_) => ValueKind::Guid,
            Value::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `i32`, if this is an `Int`.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `i64`, widening `Int` if necessary.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(i64::from(*v)),
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `f64`, widening integers if necessary.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(f64::from(*v)),
            Value::Long(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the GUID, if this is a `Guid`.
    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            Value::Guid(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a `DateTime`.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

// =============================================================================
// FromValue
// =============================================================================

/// Extraction from a dynamic [`Value`] back into a concrete field type.
///
/// This is the conversion seam the `#[derive(Entity)]` macro generates
/// against: the declared `KIND` becomes the column type-tag and
/// `from_value` implements `set_field` without the macro ever matching on
/// field types.
pub trait FromValue: Sized {
    /// The column kind a field of this type declares.
    const KIND: ValueKind;

    /// Extract a field value, or `None` on a kind mismatch.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i32()
    }
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Long;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for Uuid {
    const KIND: ValueKind = ValueKind::Guid;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_guid()
    }
}

impl FromValue for DateTime<Utc> {
    const KIND: ValueKind = ValueKind::DateTime;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_datetime()
    }
}

impl<V: FromValue> FromValue for Option<V> {
    const KIND: ValueKind = V::KIND;

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            V::from_value(value).map(Some)
        }
    }
}

use {
    crate::IniTable,
    std::{
        convert::From,
        fmt::{Display, Formatter},
    },
};

/// Represents a value produced by the [`.ini parser`](struct.IniParser.html).
///
/// Unquoted values may be coerced to [`Null`], [`Bool`], [`I64`] or [`F64`];
/// quoted values are always [`String`]'s.
/// Bracketed keys (`a[b][]`) produce nested [`Table`]'s.
///
/// [`Null`]: enum.IniValue.html#variant.Null
/// [`Bool`]: enum.IniValue.html#variant.Bool
/// [`I64`]: enum.IniValue.html#variant.I64
/// [`F64`]: enum.IniValue.html#variant.F64
/// [`String`]: enum.IniValue.html#variant.String
/// [`Table`]: enum.IniValue.html#variant.Table
#[derive(Clone, PartialEq, Debug)]
pub enum IniValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    Table(IniTable),
}

impl From<bool> for IniValue {
    fn from(val: bool) -> Self {
        IniValue::Bool(val)
    }
}

impl From<i64> for IniValue {
    fn from(val: i64) -> Self {
        IniValue::I64(val)
    }
}

impl From<f64> for IniValue {
    fn from(val: f64) -> Self {
        IniValue::F64(val)
    }
}

impl From<String> for IniValue {
    fn from(val: String) -> Self {
        IniValue::String(val)
    }
}

impl<'a> From<&'a str> for IniValue {
    fn from(val: &'a str) -> Self {
        IniValue::String(val.into())
    }
}

impl From<IniTable> for IniValue {
    fn from(val: IniTable) -> Self {
        IniValue::Table(val)
    }
}

impl<T: Into<IniValue>> From<Option<T>> for IniValue {
    fn from(val: Option<T>) -> Self {
        val.map_or(IniValue::Null, Into::into)
    }
}

/// Represents the type of the [`value`].
///
/// [`value`]: enum.IniValue.html
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IniValueType {
    Null,
    Bool,
    I64,
    F64,
    String,
    Table,
}

impl IniValue {
    /// Returns the value type.
    pub fn get_type(&self) -> IniValueType {
        use IniValueType::*;

        match self {
            IniValue::Null => Null,
            IniValue::Bool(_) => Bool,
            IniValue::I64(_) => I64,
            IniValue::F64(_) => F64,
            IniValue::String(_) => String,
            IniValue::Table(_) => Table,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, IniValue::Null)
    }

    /// Extracts the [`bool`] value.
    /// Returns `None` if the value is not a [`bool`].
    ///
    /// [`bool`]: enum.IniValue.html#variant.Bool
    pub fn bool(&self) -> Option<bool> {
        match self {
            IniValue::Bool(val) => Some(*val),
            _ => None,
        }
    }

    /// Extracts the [`i64`] value.
    /// Returns `None` if the value is not an [`i64`] / [`f64`].
    ///
    /// [`i64`]: enum.IniValue.html#variant.I64
    /// [`f64`]: enum.IniValue.html#variant.F64
    pub fn i64(&self) -> Option<i64> {
        match self {
            IniValue::I64(val) => Some(*val),
            IniValue::F64(val) => Some(*val as i64),
            _ => None,
        }
    }

    /// Extracts the [`f64`] value.
    /// Returns `None` if the value is not an [`f64`] / [`i64`].
    ///
    /// [`i64`]: enum.IniValue.html#variant.I64
    /// [`f64`]: enum.IniValue.html#variant.F64
    pub fn f64(&self) -> Option<f64> {
        match self {
            IniValue::I64(val) => Some(*val as f64),
            IniValue::F64(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            IniValue::String(val) => Some(val.as_str()),
            _ => None,
        }
    }

    /// Extracts the [`string`] value.
    /// Returns `None` if the value is not a [`string`].
    ///
    /// [`string`]: enum.IniValue.html#variant.String
    pub fn string(self) -> Option<String> {
        match self {
            IniValue::String(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&IniTable> {
        match self {
            IniValue::Table(val) => Some(val),
            _ => None,
        }
    }

    /// Extracts the [`table`] value.
    /// Returns `None` if the value is not a [`table`].
    ///
    /// [`table`]: enum.IniValue.html#variant.Table
    pub fn table(self) -> Option<IniTable> {
        match self {
            IniValue::Table(val) => Some(val),
            _ => None,
        }
    }

    pub(crate) fn as_table_mut(&mut self) -> Option<&mut IniTable> {
        match self {
            IniValue::Table(val) => Some(val),
            _ => None,
        }
    }
}

impl Display for IniValue {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            IniValue::Null => "null".fmt(f),
            IniValue::Bool(value) => (if *value { "true" } else { "false" }).fmt(f),
            IniValue::I64(value) => value.fmt(f),
            IniValue::F64(value) => value.fmt(f),
            IniValue::String(value) => value.fmt(f),
            IniValue::Table(value) => value.fmt(f),
        }
    }
}

impl Display for IniValueType {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        use IniValueType::*;

        match self {
            Null => "Null".fmt(f),
            Bool => "Bool".fmt(f),
            I64 => "I64".fmt(f),
            F64 => "F64".fmt(f),
            String => "String".fmt(f),
            Table => "Table".fmt(f),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IniValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IniValue::Null => serializer.serialize_unit(),
            IniValue::Bool(value) => serializer.serialize_bool(*value),
            IniValue::I64(value) => serializer.serialize_i64(*value),
            IniValue::F64(value) => serializer.serialize_f64(*value),
            IniValue::String(value) => serializer.serialize_str(value),
            IniValue::Table(value) => value.serialize(serializer),
        }
    }
}

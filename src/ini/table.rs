use {
    crate::*,
    indexmap::{map::Iter as IndexMapIter, IndexMap},
    std::fmt::{Display, Formatter},
};

/// Integer index or string name of an [`IniTable`](struct.IniTable.html) entry.
///
/// Path segments which are canonical decimal integers (`"0"`, `"12"`, `"-3"`, but not `"012"` / `"+1"` / `"-0"`)
/// are stored as indices, so `a[1]` and the second `a[]` address the same entry.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum IniKey {
    Index(i64),
    Name(String),
}

impl IniKey {
    /// Converts a key path segment to a table key, normalizing canonical decimal integers to indices.
    pub fn from_segment(segment: &str) -> Self {
        match parse_canonical_index(segment) {
            Some(index) => IniKey::Index(index),
            None => IniKey::Name(segment.into()),
        }
    }

    pub fn index(&self) -> Option<i64> {
        match self {
            IniKey::Index(index) => Some(*index),
            IniKey::Name(_) => None,
        }
    }
}

fn parse_canonical_index(segment: &str) -> Option<i64> {
    let digits = segment.strip_prefix('-').unwrap_or(segment);

    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == segment.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };

    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

impl From<i64> for IniKey {
    fn from(index: i64) -> Self {
        IniKey::Index(index)
    }
}

impl<'a> From<&'a str> for IniKey {
    fn from(segment: &'a str) -> Self {
        IniKey::from_segment(segment)
    }
}

impl From<String> for IniKey {
    fn from(segment: String) -> Self {
        IniKey::from_segment(&segment)
    }
}

impl Display for IniKey {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            IniKey::Index(index) => index.fmt(f),
            IniKey::Name(name) => name.fmt(f),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum IniTableGetError {
    /// Provided key does not exist in the [`table`].
    /// [`table`]: struct.IniTable.html
    #[error("Provided key does not exist in the table.")]
    KeyDoesNotExist,
    /// Value is of incorrect [`type`].
    /// Contains the value [`type`].
    /// [`type`]: enum.IniValueType.html
    #[error("Value is of incorrect type ({0}).")]
    IncorrectValueType(IniValueType),
}

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum IniTableGetPathError {
    /// The key at the end of the path does not exist.
    /// Contains the path up to and including the missing key.
    #[error("Key at path \"{}\" does not exist in the table.", display_path(.0))]
    KeyDoesNotExist(Vec<IniKey>),
    /// A non-terminating path element is not a [`table`].
    /// [`table`]: struct.IniTable.html
    #[error("Value at path \"{}\" is not a table (it is a {value_type}).", display_path(.path))]
    ValueNotATable {
        path: Vec<IniKey>,
        value_type: IniValueType,
    },
    /// Value is of incorrect [`type`].
    /// Contains the value [`type`].
    /// [`type`]: enum.IniValueType.html
    #[error("Value is of incorrect type ({0}).")]
    IncorrectValueType(IniValueType),
}

fn display_path(path: &[IniKey]) -> String {
    let mut result = String::new();

    for (index, key) in path.iter().enumerate() {
        if index == 0 {
            result.push_str(&key.to_string());
        } else {
            result.push('[');
            result.push_str(&key.to_string());
            result.push(']');
        }
    }

    result
}

/// Insertion-ordered map of [`values`] with integer or string [`keys`].
///
/// Plays the role of both the nested section-like tables and the sequences
/// produced by bracketed `.ini` keys. A table whose keys are exactly `0 .. len`, in order,
/// is a [`list`](#method.is_list).
///
/// [`values`]: enum.IniValue.html
/// [`keys`]: enum.IniKey.html
#[derive(Clone, PartialEq, Debug, Default)]
pub struct IniTable(IndexMap<IniKey, IniValue>);

impl IniTable {
    /// Creates a new empty [`table`].
    ///
    /// [`table`]: struct.IniTable.html
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of entries in the [`table`].
    ///
    /// [`table`]: struct.IniTable.html
    pub fn len(&self) -> u32 {
        self.0.len() as _
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the [`table`] contains a [`value`] with the `key`.
    ///
    /// [`table`]: struct.IniTable.html
    /// [`value`]: enum.IniValue.html
    pub fn contains<K: Into<IniKey>>(&self, key: K) -> bool {
        self.0.contains_key(&key.into())
    }

    /// Tries to get a reference to a [`value`] in the [`table`] with the `key`.
    ///
    /// Returns an [`error`] if the [`table`] does not contain the `key`.
    ///
    /// [`value`]: enum.IniValue.html
    /// [`table`]: struct.IniTable.html
    /// [`error`]: enum.IniTableGetError.html
    pub fn get<K: Into<IniKey>>(&self, key: K) -> Result<&IniValue, IniTableGetError> {
        self.0
            .get(&key.into())
            .ok_or(IniTableGetError::KeyDoesNotExist)
    }

    /// Tries to get a reference to a [`value`] in the [`table`] at `path`.
    ///
    /// `path` is an iterator over consecutively nested table keys.
    /// All keys except the last one must correspond to a [`table`] value.
    ///
    /// Returns an [`error`] if the [`table`] does not contain the full `path`,
    /// or if any of the non-terminating `path` elements is not a [`table`].
    ///
    /// [`value`]: enum.IniValue.html
    /// [`table`]: struct.IniTable.html
    /// [`error`]: enum.IniTableGetPathError.html
    pub fn get_path<K, P>(&self, path: P) -> Result<&IniValue, IniTableGetPathError>
    where
        K: Into<IniKey>,
        P: IntoIterator<Item = K>,
    {
        let mut _path = Vec::new();
        let mut table = self;
        let mut path = path.into_iter().peekable();

        while let Some(key) = path.next() {
            let key = key.into();
            _path.push(key.clone());

            let value = table
                .0
                .get(&key)
                .ok_or_else(|| IniTableGetPathError::KeyDoesNotExist(_path.clone()))?;

            if path.peek().is_none() {
                return Ok(value);
            }

            table = match value {
                IniValue::Table(table) => table,
                value => {
                    return Err(IniTableGetPathError::ValueNotATable {
                        path: _path,
                        value_type: value.get_type(),
                    })
                }
            };
        }

        Err(IniTableGetPathError::KeyDoesNotExist(_path))
    }

    /// Returns `true` if the [`table`] contains a [`null`] value with the `key`.
    ///
    /// [`table`]: struct.IniTable.html
    /// [`null`]: enum.IniValue.html#variant.Null
    pub fn is_null<K: Into<IniKey>>(&self, key: K) -> Result<bool, IniTableGetError> {
        self.get(key).map(IniValue::is_null)
    }

    pub fn get_bool<K: Into<IniKey>>(&self, key: K) -> Result<bool, IniTableGetError> {
        let val = self.get(key)?;
        val.bool()
            .ok_or(IniTableGetError::IncorrectValueType(val.get_type()))
    }

    pub fn get_i64<K: Into<IniKey>>(&self, key: K) -> Result<i64, IniTableGetError> {
        let val = self.get(key)?;
        val.i64()
            .ok_or(IniTableGetError::IncorrectValueType(val.get_type()))
    }

    pub fn get_f64<K: Into<IniKey>>(&self, key: K) -> Result<f64, IniTableGetError> {
        let val = self.get(key)?;
        val.f64()
            .ok_or(IniTableGetError::IncorrectValueType(val.get_type()))
    }

    pub fn get_string<K: Into<IniKey>>(&self, key: K) -> Result<&str, IniTableGetError> {
        let val = self.get(key)?;
        val.as_str()
            .ok_or(IniTableGetError::IncorrectValueType(val.get_type()))
    }

    pub fn get_table<K: Into<IniKey>>(&self, key: K) -> Result<&IniTable, IniTableGetError> {
        let val = self.get(key)?;
        val.as_table()
            .ok_or(IniTableGetError::IncorrectValueType(val.get_type()))
    }

    /// Like [`get_path`](#method.get_path), but the value must be a [`string`].
    ///
    /// [`string`]: enum.IniValue.html#variant.String
    pub fn get_string_path<K, P>(&self, path: P) -> Result<&str, IniTableGetPathError>
    where
        K: Into<IniKey>,
        P: IntoIterator<Item = K>,
    {
        let val = self.get_path(path)?;
        val.as_str()
            .ok_or(IniTableGetPathError::IncorrectValueType(val.get_type()))
    }

    /// Like [`get_path`](#method.get_path), but the value must be a [`table`].
    ///
    /// [`table`]: enum.IniValue.html#variant.Table
    pub fn get_table_path<K, P>(&self, path: P) -> Result<&IniTable, IniTableGetPathError>
    where
        K: Into<IniKey>,
        P: IntoIterator<Item = K>,
    {
        let val = self.get_path(path)?;
        val.as_table()
            .ok_or(IniTableGetPathError::IncorrectValueType(val.get_type()))
    }

    /// Returns an in-order iterator over the [`table`] entries.
    ///
    /// [`table`]: struct.IniTable.html
    pub fn iter(&self) -> IndexMapIter<'_, IniKey, IniValue> {
        self.0.iter()
    }

    /// Returns an iterator over the [`table`] values, in order.
    ///
    /// [`table`]: struct.IniTable.html
    pub fn values(&self) -> impl Iterator<Item = &IniValue> {
        self.0.values()
    }

    /// Returns `true` if the keys are exactly the indices `0 .. len`, in insertion order.
    /// Empty tables are lists.
    pub fn is_list(&self) -> bool {
        self.0
            .keys()
            .enumerate()
            .all(|(position, key)| key.index() == Some(position as i64))
    }

    /// Index assigned to an empty (`[]`) key path segment in this table -
    /// the current number of entries.
    pub fn next_index(&self) -> i64 {
        self.0.len() as _
    }

    /// Inserts the `value` at `key`, returning the previous value, if any.
    /// Overwriting an existing key keeps its position.
    pub fn insert<K: Into<IniKey>, V: Into<IniValue>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<IniValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Calls `f` with the nested [`table`] at `key`, returning its result.
    /// A missing or non-table value at `key` is replaced with an empty table first.
    ///
    /// [`table`]: struct.IniTable.html
    pub(crate) fn with_table_entry<R, F>(&mut self, key: IniKey, f: F) -> R
    where
        F: FnOnce(&mut IniTable) -> R,
    {
        let entry = self
            .0
            .entry(key)
            .or_insert_with(|| IniValue::Table(IniTable::new()));

        match entry {
            IniValue::Table(table) => f(table),
            value => {
                let mut table = IniTable::new();
                let result = f(&mut table);
                *value = IniValue::Table(table);
                result
            }
        }
    }

    /// Recursively merges `other` into this [`table`].
    ///
    /// Where both tables contain a nested table at the same key, the nested tables are merged key by key.
    /// Otherwise the value from `other` replaces the existing one (last write wins).
    /// New keys are appended in `other`'s order; existing keys keep their position.
    ///
    /// [`table`]: struct.IniTable.html
    pub fn merge(&mut self, other: IniTable) {
        for (key, value) in other.0 {
            match value {
                IniValue::Table(other) => match self.0.get_mut(&key) {
                    Some(IniValue::Table(table)) => table.merge(other),
                    _ => {
                        self.0.insert(key, IniValue::Table(other));
                    }
                },
                value => {
                    self.0.insert(key, value);
                }
            }
        }
    }
}

impl<'t> IntoIterator for &'t IniTable {
    type Item = (&'t IniKey, &'t IniValue);
    type IntoIter = IndexMapIter<'t, IniKey, IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for IniTable {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let is_list = self.is_list();

        if is_list {
            "[".fmt(f)?;
        } else {
            "{".fmt(f)?;
        }

        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                ", ".fmt(f)?;
            }

            if !is_list {
                write!(f, "{}: ", key)?;
            }

            value.fmt(f)?;
        }

        if is_list {
            "]".fmt(f)
        } else {
            "}".fmt(f)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IniTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

            for value in self.values() {
                seq.serialize_element(value)?;
            }

            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;

            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }

            map.end()
        }
    }
}

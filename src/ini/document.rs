use {
    crate::*,
    indexmap::IndexMap,
    std::{
        fmt::{Display, Formatter},
        str::FromStr,
    },
};

/// Line break variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IniEol {
    /// `"\r"`
    Cr,
    /// `"\n"`
    Lf,
    /// `"\r\n"`
    CrLf,
}

impl IniEol {
    pub fn as_str(self) -> &'static str {
        match self {
            IniEol::Cr => "\r",
            IniEol::Lf => "\n",
            IniEol::CrLf => "\r\n",
        }
    }
}

impl Default for IniEol {
    fn default() -> Self {
        IniEol::Lf
    }
}

impl Display for IniEol {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Number of occurences of each line break variant in the source.
#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct IniEolCounts {
    cr: u32,
    lf: u32,
    crlf: u32,
}

impl IniEolCounts {
    pub(crate) fn add(&mut self, eol: IniEol) {
        match eol {
            IniEol::Cr => self.cr += 1,
            IniEol::Lf => self.lf += 1,
            IniEol::CrLf => self.crlf += 1,
        }
    }

    /// The most frequent line break; ties prefer `"\n"`, then `"\r\n"`, then `"\r"`.
    /// `"\n"` if there were no line breaks at all.
    pub(crate) fn most_frequent(&self) -> IniEol {
        let mut result = (IniEol::Lf, self.lf);

        for candidate in [(IniEol::CrLf, self.crlf), (IniEol::Cr, self.cr)] {
            if candidate.1 > result.1 {
                result = candidate;
            }
        }

        result.0
    }
}

/// The result of a successful [`.ini parse`](struct.IniParser.html#method.parse).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct IniDocument {
    pub(crate) data: IniTable,
    pub(crate) data_map: IndexMap<String, u32>,
    pub(crate) most_frequent_eol: IniEol,
}

impl IniDocument {
    /// Nested parsed data.
    pub fn data(&self) -> &IniTable {
        &self.data
    }

    /// Consumes the document, returning the nested parsed data.
    pub fn into_data(self) -> IniTable {
        self.data
    }

    /// Maps canonical keys (with `[]` resolved to `[n]`) to the 1-based source line which produced them,
    /// in the order they were first seen.
    pub fn data_map(&self) -> &IndexMap<String, u32> {
        &self.data_map
    }

    /// Source line of the canonical `key`, if any.
    /// For multi-line quoted values this is the line the value started on.
    pub fn line_of(&self, key: &str) -> Option<u32> {
        self.data_map.get(key).copied()
    }

    /// The line break variant occuring most often in the source.
    pub fn most_frequent_eol(&self) -> IniEol {
        self.most_frequent_eol
    }
}

impl FromStr for IniDocument {
    type Err = IniError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parse_ini(string)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IniDocument {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("IniDocument", 3)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("data_map", &self.data_map)?;
        state.serialize_field("most_frequent_eol", self.most_frequent_eol.as_str())?;
        state.end()
    }
}

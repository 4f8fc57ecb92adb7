#![allow(non_upper_case_globals)]

use bitflags::bitflags;

bitflags! {
    /// Flags which specify which unquoted `.ini` values are coerced from strings to typed values.
    /// Quoted values are never coerced.
    pub struct IniCoercion: u8 {
        /// No coercion - all values are strings ("raw" scanner mode).
        const None = 0b000;
        /// `NULL` / `null` -> [`Null`](enum.IniValue.html#variant.Null).
        const Null = 0b001;
        /// `TRUE` / `true` / `FALSE` / `false` -> [`Bool`](enum.IniValue.html#variant.Bool).
        const Bool = 0b010;
        /// Numeric strings -> [`I64`](enum.IniValue.html#variant.I64) / [`F64`](enum.IniValue.html#variant.F64).
        const Number = 0b100;
    }
}

impl Default for IniCoercion {
    fn default() -> Self {
        IniCoercion::all()
    }
}

/// Configuration options for the `.ini` parser.
#[derive(Clone, Debug, Default)]
pub(crate) struct IniOptions {
    /// Which unquoted values are coerced to typed values.
    ///
    /// Default: [`all`](struct.IniCoercion.html#method.all).
    pub(crate) coercion: IniCoercion,
    /// Name of the parsed source (e.g. file name), used only in [`errors`](struct.IniError.html).
    ///
    /// Default: `None`.
    pub(crate) source_name: Option<String>,
}

use {super::is_ini_whitespace, crate::IniQuote};

/// Typed character accumulators for the logical `.ini` line being parsed.
///
/// Every source character ends up in exactly one of the fields.
/// A logical line spans several physical lines if its quoted value contains line breaks.
#[derive(Default, Debug)]
pub(crate) struct IniLineSegment {
    /// 1-based physical line the logical line starts on.
    pub line: u32,
    /// Whitespace before the key.
    pub key_prepend: String,
    pub key: String,
    /// Whitespace between the key and the separator.
    pub key_append: String,
    /// The `=` character, if any.
    pub separator: String,
    /// Whitespace between the separator and the value.
    pub value_prepend: String,
    /// Opening quote of the value, if it is quoted.
    pub quote: Option<IniQuote>,
    /// Byte offset in `value` at which the quote was opened.
    /// Non-zero if an unquoted value switched to quoted mode.
    pub quote_start: usize,
    pub value: String,
    /// Whitespace after the value (or after the closing quote).
    pub value_append: String,
    /// The comment, including the leading `;`.
    pub comment: String,
    /// The line break which ended the logical line, if any.
    pub eol: String,
}

impl IniLineSegment {
    pub(crate) fn new(line: u32) -> Self {
        Self {
            line,
            ..Default::default()
        }
    }

    /// Moves trailing whitespace from `key` to `key_append`.
    pub(crate) fn trim_key(&mut self) {
        Self::trim_into(&mut self.key, &mut self.key_append);
    }

    /// Moves trailing whitespace from `value` to `value_append`, unless the value is quoted.
    pub(crate) fn trim_value(&mut self) {
        if self.quote.is_none() {
            Self::trim_into(&mut self.value, &mut self.value_append);
        }
    }

    fn trim_into(src: &mut String, dst: &mut String) {
        let trimmed_len = src.trim_end_matches(is_ini_whitespace).len();

        if trimmed_len < src.len() {
            dst.insert_str(0, &src[trimmed_len..]);
            src.truncate(trimmed_len);
        }
    }

    /// Switches the value to quoted mode; following characters are accumulated verbatim.
    pub(crate) fn open_quote(&mut self, quote: IniQuote) {
        self.quote = Some(quote);
        self.quote_start = self.value.len();
    }

    /// Returns `true` if the next character is escaped by a preceding backslash.
    pub(crate) fn is_escaped(&self) -> bool {
        self.value.ends_with('\\')
    }

    pub(crate) fn is_quoted(&self) -> bool {
        self.quote.is_some()
    }

    /// Reassembles the source text of the logical line.
    pub(crate) fn source_text(&self) -> String {
        let quote = self.quote.map(IniQuote::as_char);

        let mut result = String::new();

        result.push_str(&self.key_prepend);
        result.push_str(&self.key);
        result.push_str(&self.key_append);
        result.push_str(&self.separator);
        result.push_str(&self.value_prepend);
        result.push_str(&self.value[..self.quote_start]);
        result.extend(quote);
        result.push_str(&self.value[self.quote_start..]);
        result.extend(quote);
        result.push_str(&self.value_append);
        result.push_str(&self.comment);
        result.push_str(&self.eol);

        result
    }
}

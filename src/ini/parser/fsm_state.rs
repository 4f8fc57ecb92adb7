use {super::*, crate::*};

/// `.ini` parser FSM states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum IniParserFSMState {
    /// We started parsing a new logical line.
    /// Accept new lines (empty line),
    /// whitespace (-> KeyPrepend),
    /// comment delimiters (`';'`) (-> Comment),
    /// valid key chars, including single quotes (-> Key).
    StartLine,
    /// We skip whitespace before the key.
    /// Accepts the same chars as `StartLine`.
    KeyPrepend,
    /// We started parsing a key.
    /// Accept valid key chars, including whitespace and single quotes,
    /// key-value separators (`'='`) (-> ValuePrepend),
    /// comment delimiters (`';'`) (-> Comment),
    /// new lines (-> StartLine).
    /// The key is added with an empty value if the line ends before the separator.
    Key,
    /// We finished parsing a key-value separator and expect a value (or a new line).
    /// Accept whitespace,
    /// string quotes (`'"'` / `'\''`) (-> QuotedValue),
    /// comment delimiters (`';'`) (-> Comment),
    /// new lines (-> StartLine),
    /// valid value chars (-> Value).
    ValuePrepend,
    /// We started parsing an unquoted value.
    /// Accept valid value chars, including whitespace,
    /// string quotes (-> QuotedValue), unless escaped with a backslash (`'\\'`),
    /// comment delimiters (`';'`) (-> Comment),
    /// new lines (-> StartLine).
    Value,
    /// We started parsing a quoted value.
    /// Accept matching string quotes (-> ValueAppend), unless escaped with a backslash (`'\\'`),
    /// everything else (including new lines) is part of the value.
    /// Contains the opening quote.
    QuotedValue(IniQuote),
    /// We finished parsing a quoted value and expect the end of the line.
    /// Accept whitespace,
    /// comment delimiters (`';'`) (-> Comment),
    /// new lines (-> StartLine).
    ValueAppend,
    /// We encountered a comment delimiter and skip the rest of the line.
    /// Accept new lines (-> StartLine),
    /// skip everything else.
    Comment,
}

impl IniParserFSMState {
    pub(super) fn is_quoted(self) -> bool {
        matches!(self, IniParserFSMState::QuotedValue(_))
    }

    /// Processes the next `input` char (or line break) read from the physical `line`.
    /// Returns the new parser state or an error.
    pub(super) fn process(
        self,
        input: IniInput,
        line: u32,
        state: &mut IniParserPersistentState,
    ) -> Result<IniParserFSMState, IniErrorKind> {
        use {CharClass::*, IniErrorKind::*, IniParserFSMState::*};

        let class = input.class();

        Ok(match self {
            StartLine | KeyPrepend => match class {
                // Empty line.
                LineBreak => {
                    state.end_line(input, line);
                    StartLine
                }
                // Skip whitespace before the key.
                Whitespace => {
                    input.push_to(&mut state.line.key_prepend);
                    KeyPrepend
                }
                // Line comment - skip the rest of the line.
                CommentMarker => {
                    input.push_to(&mut state.line.comment);
                    Comment
                }
                // Empty keys and double-quoted keys are not allowed.
                Quote(IniQuote::Double) | Separator => {
                    return Err(UnexpectedCharacter(input.char()))
                }
                // Valid key start - start parsing the key.
                Alphanumeric | Quote(IniQuote::Single) | Other => {
                    input.push_to(&mut state.line.key);
                    Key
                }
            },
            Key => match class {
                // No separator - add the key with an empty value.
                LineBreak => {
                    state.emit();
                    state.end_line(input, line);
                    StartLine
                }
                CommentMarker => {
                    state.emit();
                    input.push_to(&mut state.line.comment);
                    Comment
                }
                // Key-value separator - finish the key, start parsing the value.
                Separator => {
                    state.line.trim_key();
                    input.push_to(&mut state.line.separator);
                    ValuePrepend
                }
                Quote(IniQuote::Double) => return Err(UnexpectedCharacter(input.char())),
                // Keep parsing the key.
                Alphanumeric | Whitespace | Quote(IniQuote::Single) | Other => {
                    input.push_to(&mut state.line.key);
                    self
                }
            },
            ValuePrepend => match class {
                // Empty value.
                LineBreak => {
                    state.emit();
                    state.end_line(input, line);
                    StartLine
                }
                CommentMarker => {
                    state.emit();
                    input.push_to(&mut state.line.comment);
                    Comment
                }
                // Skip whitespace before the value.
                Whitespace => {
                    input.push_to(&mut state.line.value_prepend);
                    self
                }
                // String quote - parse the value in quotes, expecting the matching quote.
                Quote(quote) => {
                    state.line.open_quote(quote);
                    QuotedValue(quote)
                }
                // Second separator.
                Separator => return Err(UnexpectedCharacter(input.char())),
                // Valid value start - start parsing the unquoted value.
                Alphanumeric | Other => {
                    input.push_to(&mut state.line.value);
                    Value
                }
            },
            Value => match class {
                // End of the value - add it.
                LineBreak => {
                    state.line.trim_value();
                    state.emit();
                    state.end_line(input, line);
                    StartLine
                }
                // Inline comment - add the value, skip the rest of the line.
                CommentMarker => {
                    state.line.trim_value();
                    state.emit();
                    input.push_to(&mut state.line.comment);
                    Comment
                }
                Separator => return Err(UnexpectedCharacter(input.char())),
                // String quote - the rest of the value is quoted, expecting the matching quote.
                // The unquoted part parsed so far is kept.
                Quote(quote) if !state.line.is_escaped() => {
                    state.line.open_quote(quote);
                    QuotedValue(quote)
                }
                // Keep parsing the value. Escaped quotes are literal.
                Alphanumeric | Whitespace | Quote(_) | Other => {
                    input.push_to(&mut state.line.value);
                    self
                }
            },
            QuotedValue(quote) => {
                // Matching unescaped quote - finish the value, which may be empty.
                if class == Quote(quote) && !state.line.is_escaped() {
                    ValueAppend

                // Everything else, including new lines, is part of the value.
                } else {
                    input.push_to(&mut state.line.value);
                    self
                }
            }
            ValueAppend => match class {
                LineBreak => {
                    state.emit();
                    state.end_line(input, line);
                    StartLine
                }
                CommentMarker => {
                    state.emit();
                    input.push_to(&mut state.line.comment);
                    Comment
                }
                // Skip whitespace after the closing quote.
                Whitespace => {
                    input.push_to(&mut state.line.value_append);
                    self
                }
                // Anything else after the closing quote is an error.
                Alphanumeric | Quote(_) | Separator | Other => {
                    return Err(UnexpectedCharacter(input.char()))
                }
            },
            Comment => {
                if class == LineBreak {
                    state.end_line(input, line);
                    StartLine
                } else {
                    input.push_to(&mut state.line.comment);
                    self
                }
            }
        })
    }

    /// Handles the end of the source, as if it ended with a line break.
    pub(super) fn finish(self, state: &mut IniParserPersistentState) -> Result<(), IniErrorKind> {
        use {IniErrorKind::*, IniParserFSMState::*};

        match self {
            QuotedValue(quote) => return Err(UnterminatedQuote(quote)),
            // Add the last key / value if we were parsing it right before EOF.
            Key | ValuePrepend | ValueAppend => state.emit(),
            Value => {
                state.line.trim_value();
                state.emit();
            }
            StartLine | KeyPrepend | Comment => {}
        }

        state.end_source();

        Ok(())
    }
}

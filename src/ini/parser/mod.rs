mod fsm_state;

use {
    super::util::*,
    crate::*,
    fsm_state::*,
    log::{debug, trace},
    std::{iter::Peekable, str::CharIndices},
};

/// A single `.ini` source character, or a line break (`"\r\n"` is a single line break).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum IniInput {
    Char(char),
    LineBreak(IniEol),
}

impl IniInput {
    fn class(self) -> CharClass {
        match self {
            IniInput::Char(c) => CharClass::of(c),
            IniInput::LineBreak(_) => CharClass::LineBreak,
        }
    }

    /// First (or only) character of the input.
    fn char(self) -> char {
        match self {
            IniInput::Char(c) => c,
            IniInput::LineBreak(IniEol::Lf) => '\n',
            IniInput::LineBreak(_) => '\r',
        }
    }

    fn push_to(self, string: &mut String) {
        match self {
            IniInput::Char(c) => string.push(c),
            IniInput::LineBreak(eol) => string.push_str(eol.as_str()),
        }
    }
}

/// Persistent state used to communicate information between parser FSM states.
pub(super) struct IniParserPersistentState {
    // Accumulated text of the current logical line.
    pub line: IniLineSegment,
    // Auto-increment counters for `key[]`.
    counters: IniKeyCounters,
    coercion: IniCoercion,
    document: IniDocument,
    eol_counts: IniEolCounts,
}

impl IniParserPersistentState {
    fn new(coercion: IniCoercion) -> Self {
        Self {
            line: IniLineSegment::new(1),
            counters: IniKeyCounters::new(),
            coercion,
            document: IniDocument::default(),
            eol_counts: IniEolCounts::default(),
        }
    }

    /// Adds the key / value of the current logical line to the document.
    fn emit(&mut self) {
        let key = self.counters.canonicalize(&self.line.key);
        let value = coerce_value(
            self.line.value.clone(),
            self.line.is_quoted(),
            self.coercion,
        );

        trace!("line {}: `{}` = {}", self.line.line, key, value);

        self.document.data.merge(expand(&key, value));
        self.document.data_map.insert(key, self.line.line);
    }

    /// Finishes the current logical line with the line break `input` read from the physical `line`.
    fn end_line(&mut self, input: IniInput, line: u32) {
        input.push_to(&mut self.line.eol);

        trace!("line {}: {:?}", self.line.line, self.line.source_text());

        self.line = IniLineSegment::new(line + 1);
    }

    fn end_source(&mut self) {
        if !self.line.source_text().is_empty() {
            trace!("line {}: {:?}", self.line.line, self.line.source_text());
        }

        self.document.most_frequent_eol = self.eol_counts.most_frequent();
    }
}

/// Current position in the source string.
/// Used for error reporting.
#[derive(Clone, Copy, Debug)]
struct IniParserSrcPositionState {
    line: u32,
    column: u32,
    // Byte offset of the start of the current physical line.
    line_start: usize,
    new_line: bool,
}

impl IniParserSrcPositionState {
    fn new() -> Self {
        Self {
            line: 1,
            column: 0,
            line_start: 0,
            new_line: false,
        }
    }
}

/// Parses the `.ini` source string into an [`IniDocument`](struct.IniDocument.html),
/// using the user-provided options.
///
/// The source is parsed at most once; the result (success or error) is cached
/// and returned by subsequent calls to [`parse`](#method.parse).
pub struct IniParser<'s> {
    /// Source `.ini` string.
    source: &'s str,
    /// Parsing options as provided by the user.
    options: IniOptions,
    /// Cached parse result.
    result: Option<Result<IniDocument, IniError>>,
}

impl<'s> IniParser<'s> {
    /// Creates a new [`parser`](struct.IniParser.html) for the `.ini` source `string`
    /// using default options.
    pub fn new(string: &'s str) -> Self {
        Self {
            source: string,
            options: Default::default(),
            result: None,
        }
    }

    /// Sets the name of the source (e.g. the file name), which prefixes the [`error`](struct.IniError.html) messages.
    ///
    /// Default: none.
    pub fn source_name<N: Into<String>>(mut self, source_name: N) -> Self {
        self.options.source_name = Some(source_name.into());
        self
    }

    /// Sets which unquoted values are coerced to typed values.
    /// If [`None`](struct.IniCoercion.html#associatedconstant.None), all values are parsed as strings.
    ///
    /// Default: [`all`](struct.IniCoercion.html#method.all).
    pub fn coercion(mut self, coercion: IniCoercion) -> Self {
        self.options.coercion = coercion;
        self
    }

    /// Returns `true` if the source was already parsed (successfully or not).
    pub fn is_parsed(&self) -> bool {
        self.result.is_some()
    }

    /// Parses the `.ini` source string on the first call.
    /// Subsequent calls return the cached result without parsing again.
    pub fn parse(&mut self) -> Result<&IniDocument, IniError> {
        if self.is_parsed() {
            debug!("`.ini` source already parsed, returning the cached result");
        }

        let source = self.source;
        let options = &self.options;

        self.result
            .get_or_insert_with(|| Self::parse_source(source, options))
            .as_ref()
            .map_err(|err| err.clone())
    }

    /// Consumes the parser, returning the owned parse result.
    /// Parses the source string if it was not parsed before.
    pub fn into_result(self) -> Result<IniDocument, IniError> {
        let Self {
            source,
            options,
            result,
        } = self;

        result.unwrap_or_else(|| Self::parse_source(source, &options))
    }

    fn parse_source(source: &'s str, options: &IniOptions) -> Result<IniDocument, IniError> {
        debug!(
            "parsing `.ini` source{} ({} bytes)",
            source_suffix(&options.source_name),
            source.len()
        );

        let mut reader = source.char_indices().peekable();

        let mut persistent_state = IniParserPersistentState::new(options.coercion);
        let mut src_pos_state = IniParserSrcPositionState::new();
        let mut fsm_state = IniParserFSMState::StartLine;

        // Position of the opening quote of the current quoted value, if any.
        let mut quote_pos_state = None;

        // Read the chars until EOF, process according to current state.
        while let Some(input) = Self::next(&mut reader, &mut src_pos_state) {
            let new_fsm_state = fsm_state
                .process(input, src_pos_state.line, &mut persistent_state)
                .map_err(|err| Self::error(err, source, &src_pos_state, options))?;

            if new_fsm_state.is_quoted() && !fsm_state.is_quoted() {
                quote_pos_state = Some(src_pos_state);
            }

            if let IniInput::LineBreak(eol) = input {
                persistent_state.eol_counts.add(eol);
            }

            fsm_state = new_fsm_state;
        }

        fsm_state.finish(&mut persistent_state).map_err(|err| {
            Self::error(
                err,
                source,
                quote_pos_state.as_ref().unwrap_or(&src_pos_state),
                options,
            )
        })?;

        let document = persistent_state.document;

        debug!(
            "parsed `.ini` source{}: {} key(s), {} top-level value(s)",
            source_suffix(&options.source_name),
            document.data_map.len(),
            document.data.len()
        );

        Ok(document)
    }

    /// Reads the next character (or `"\r\n"` pair) from the source string reader.
    /// Increments the line/column counters.
    fn next(
        reader: &mut Peekable<CharIndices<'s>>,
        state: &mut IniParserSrcPositionState,
    ) -> Option<IniInput> {
        let (idx, c) = reader.next()?;

        if state.new_line {
            state.line += 1;
            state.column = 0;
            state.line_start = idx;

            state.new_line = false;
        }

        state.column += 1;

        let input = match c {
            // Eat a line feed following a carriage return.
            '\r' => {
                if reader.next_if(|&(_, c)| c == '\n').is_some() {
                    IniInput::LineBreak(IniEol::CrLf)
                } else {
                    IniInput::LineBreak(IniEol::Cr)
                }
            }
            '\n' => IniInput::LineBreak(IniEol::Lf),
            c => IniInput::Char(c),
        };

        if let IniInput::LineBreak(_) = input {
            state.new_line = true;
        }

        Some(input)
    }

    /// Error helper method.
    fn error(
        error: IniErrorKind,
        source: &str,
        state: &IniParserSrcPositionState,
        options: &IniOptions,
    ) -> IniError {
        let line_text = source
            .get(state.line_start..)
            .and_then(|line| line.split(|c| c == '\r' || c == '\n').next())
            .unwrap_or_default();

        let error = IniError {
            line: state.line,
            column: state.column,
            error,
            line_text: line_text.into(),
            source_name: options.source_name.clone(),
        };

        debug!("{}", error);

        error
    }
}

/// Parses the `.ini` source `string` with default options.
pub fn parse_ini(string: &str) -> Result<IniDocument, IniError> {
    IniParser::new(string).into_result()
}

fn source_suffix(source_name: &Option<String>) -> String {
    match source_name {
        Some(source_name) => format!(" `{}`", source_name),
        None => String::new(),
    }
}

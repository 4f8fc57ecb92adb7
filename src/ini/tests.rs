#![allow(non_snake_case)]

use crate::*;

fn path<'a>(keys: &[&'a str]) -> Vec<&'a str> {
    keys.to_vec()
}

#[test]
fn KeyValue() {
    let ini = parse_ini("name = John\n").unwrap();

    assert_eq!(ini.data().len(), 1);
    assert_eq!(ini.data().get_string("name").unwrap(), "John");
    assert_eq!(ini.data_map().len(), 1);
    assert_eq!(ini.line_of("name"), Some(1));
    assert_eq!(ini.most_frequent_eol(), IniEol::Lf);
}

#[test]
fn EmptySource() {
    let ini = parse_ini("").unwrap();
    assert!(ini.data().is_empty());
    assert!(ini.data_map().is_empty());
    assert_eq!(ini.most_frequent_eol(), IniEol::Lf);

    let ini = parse_ini("\n\n  \n; only a comment\n").unwrap();
    assert!(ini.data().is_empty());
    assert!(ini.data_map().is_empty());
}

#[test]
fn AppendArrays() {
    let ini = parse_ini("a[b][] = x\na[b][] = y\n").unwrap();

    let b = ini.data().get_table_path(path(&["a", "b"])).unwrap();
    assert!(b.is_list());
    assert_eq!(b.len(), 2);
    assert_eq!(b.get_string(0).unwrap(), "x");
    assert_eq!(b.get_string(1).unwrap(), "y");

    assert_eq!(ini.line_of("a[b][0]"), Some(1));
    assert_eq!(ini.line_of("a[b][1]"), Some(2));
    assert_eq!(ini.line_of("a[b][]"), None);
}

#[test]
fn AppendArraysWithExplicitIndices() {
    // Explicit indices don't affect the `[]` counter.
    let ini = parse_ini("p[] = a\np[5] = b\np[] = c\n").unwrap();

    let p = ini.data().get_table("p").unwrap();
    assert!(!p.is_list());
    assert_eq!(
        p.iter().map(|(key, _)| key.clone()).collect::<Vec<_>>(),
        vec![IniKey::Index(0), IniKey::Index(5), IniKey::Index(1)]
    );
    assert_eq!(p.get_string(0).unwrap(), "a");
    assert_eq!(p.get_string(5).unwrap(), "b");
    assert_eq!(p.get_string(1).unwrap(), "c");

    assert_eq!(
        ini.data_map().keys().collect::<Vec<_>>(),
        vec!["p[0]", "p[5]", "p[1]"]
    );

    // Explicit index overwritten by a later append.
    let ini = parse_ini("p[1] = a\np[] = b\np[] = c\n").unwrap();
    let p = ini.data().get_table("p").unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.get_string(1).unwrap(), "c");
    assert_eq!(p.get_string(0).unwrap(), "b");
}

#[test]
fn NestedTables() {
    let ini = parse_ini("db[host] = localhost\ndb[port] = 5432\ndb[opts][ssl] = true\n").unwrap();

    let db = ini.data().get_table("db").unwrap();
    assert_eq!(db.len(), 3);
    assert_eq!(db.get_string("host").unwrap(), "localhost");
    assert_eq!(db.get_i64("port").unwrap(), 5432);
    assert!(ini
        .data()
        .get_path(path(&["db", "opts", "ssl"]))
        .unwrap()
        .bool()
        .unwrap());

    assert_eq!(ini.line_of("db[port]"), Some(2));
    assert_eq!(ini.line_of("db[opts][ssl]"), Some(3));

    assert_eq!(
        ini.data().get_path(path(&["db", "missing"])),
        Err(IniTableGetPathError::KeyDoesNotExist(vec![
            "db".into(),
            "missing".into()
        ]))
    );
    assert_eq!(
        ini.data().get_path(path(&["db", "host", "x"])),
        Err(IniTableGetPathError::ValueNotATable {
            path: vec!["db".into(), "host".into()],
            value_type: IniValueType::String,
        })
    );
}

#[test]
fn LastWriteWins() {
    let ini = parse_ini("a = 1\na = 2\n").unwrap();
    assert_eq!(ini.data().get_i64("a").unwrap(), 2);
    assert_eq!(ini.line_of("a"), Some(2));

    // A scalar is replaced by a table ...
    let ini = parse_ini("a = 1\na[b] = 2\n").unwrap();
    assert_eq!(ini.data().get_table("a").unwrap().get_i64("b").unwrap(), 2);

    // ... and vice versa.
    let ini = parse_ini("a[b] = 2\na = 1\n").unwrap();
    assert_eq!(ini.data().get_i64("a").unwrap(), 1);
    // Both keys keep their provenance.
    assert_eq!(ini.line_of("a[b]"), Some(1));
    assert_eq!(ini.line_of("a"), Some(2));
}

#[test]
fn EmptyValues() {
    // Empty value before a comment.
    let ini = parse_ini("key = ;comment\n").unwrap();
    assert_eq!(ini.data().get_string("key").unwrap(), "");

    // No separator.
    let ini = parse_ini("flag\nother;comment\nlast").unwrap();
    assert_eq!(ini.data().get_string("flag").unwrap(), "");
    assert_eq!(ini.data().get_string("other").unwrap(), "");
    assert_eq!(ini.data().get_string("last").unwrap(), "");
    assert_eq!(ini.line_of("last"), Some(3));

    // Separator at the end of the line / source.
    let ini = parse_ini("a =\nb =   ").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "");
    assert_eq!(ini.data().get_string("b").unwrap(), "");

    // Explicit empty quoted values.
    let ini = parse_ini("a = ''\nb = \"\"  ; comment\n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "");
    assert_eq!(ini.data().get_string("b").unwrap(), "");
}

#[test]
fn Whitespace() {
    let ini = parse_ini("   key \t=   value with spaces  \t ; comment\n").unwrap();
    assert_eq!(ini.data().get_string("key").unwrap(), "value with spaces");

    // Trailing key whitespace is only trimmed before the separator.
    let ini = parse_ini("flag  \n").unwrap();
    assert_eq!(ini.data().get_string("flag  ").unwrap(), "");

    // Leading whitespace of a quoted value is not part of the value, inner whitespace is.
    let ini = parse_ini("a =   '  padded  '   \n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "  padded  ");
}

#[test]
fn Keys() {
    let ini = parse_ini("my key's = v\n").unwrap();
    assert_eq!(ini.data().get_string("my key's").unwrap(), "v");

    let ini = parse_ini("`~@$%^&*()_-+,<.>/? = v\n").unwrap();
    assert_eq!(ini.data().get_string("`~@$%^&*()_-+,<.>/?").unwrap(), "v");

    let ini = parse_ini("ключ = значение\n").unwrap();
    assert_eq!(ini.data().get_string("ключ").unwrap(), "значение");
}

#[test]
fn Sections() {
    // Section headers have no special meaning - they are keys with an empty first segment.
    let ini = parse_ini("[section]\na = 1\n").unwrap();

    assert_eq!(ini.data().len(), 2);
    assert_eq!(
        ini.data().get_table(0).unwrap().get_string("section").unwrap(),
        ""
    );
    assert_eq!(ini.data().get_i64("a").unwrap(), 1);
    assert_eq!(ini.line_of("[section]"), Some(1));
}

#[test]
fn QuotedValues() {
    let ini = parse_ini("a = \"x ; 'y' = z\"\nb = 'say \"hi\"'\n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "x ; 'y' = z");
    assert_eq!(ini.data().get_string("b").unwrap(), "say \"hi\"");

    // Escaped quotes are literal, the backslash is kept.
    let ini = parse_ini("a = \"say \\\"hi\\\"\"\nb = 1\n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "say \\\"hi\\\"");
    assert_eq!(ini.data().get_i64("b").unwrap(), 1);

    let ini = parse_ini("a = 'it\\'s'\n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "it\\'s");

    let ini = parse_ini("a = it\\'s ok\n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "it\\'s ok");
}

#[test]
fn QuotesInUnquotedValues() {
    // A quote in an unquoted value quotes the rest of it.
    let ini = parse_ini("a = ab\"c d\"\nb = 12'3 ; x' ; comment\n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "abc d");
    // Not coerced.
    assert_eq!(ini.data().get_string("b").unwrap(), "123 ; x");
    assert_eq!(ini.line_of("b"), Some(2));

    // Whitespace before the quote is kept.
    let ini = parse_ini("a = x  'y'  \n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "x  y");

    // The quoted part may span lines.
    let ini = parse_ini("a = x'1\n2'\nb = 3").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "x1\n2");
    assert_eq!(ini.line_of("b"), Some(3));

    // Unterminated, reported at the quote.
    let error = parse_ini("a = it's\n").err().unwrap();
    assert_eq!(
        error,
        IniError {
            line: 1,
            column: 7,
            error: IniErrorKind::UnterminatedQuote(IniQuote::Single),
            line_text: "a = it's".into(),
            source_name: None,
        }
    );
}

#[test]
fn MultilineQuotedValues() {
    let ini = parse_ini("key = \"multi\nline\"\n").unwrap();
    assert_eq!(ini.data().len(), 1);
    assert_eq!(ini.data().get_string("key").unwrap(), "multi\nline");
    assert_eq!(ini.line_of("key"), Some(1));

    // Line breaks are preserved verbatim, lines after the value are numbered correctly.
    let ini = parse_ini("a = 'x\r\n\r\ny'\r\nb = 2\r\n").unwrap();
    assert_eq!(ini.data().get_string("a").unwrap(), "x\r\n\r\ny");
    assert_eq!(ini.line_of("a"), Some(1));
    assert_eq!(ini.line_of("b"), Some(4));
    assert_eq!(ini.most_frequent_eol(), IniEol::CrLf);
}

#[test]
fn Coercion() {
    let ini = parse_ini(
        "a = NULL\nb = true\nc = FALSE\nd = 42\ne = -1.5\nf = \"42\"\ng = 'true'\nh = text\ni = True\nj = 1e3\n",
    )
    .unwrap();

    let data = ini.data();
    assert!(data.is_null("a").unwrap());
    assert!(data.get_bool("b").unwrap());
    assert!(!data.get_bool("c").unwrap());
    assert_eq!(data.get_i64("d").unwrap(), 42);
    assert_eq!(data.get_f64("e").unwrap(), -1.5);
    assert_eq!(data.get_string("f").unwrap(), "42");
    assert_eq!(data.get_string("g").unwrap(), "true");
    assert_eq!(data.get_string("h").unwrap(), "text");
    assert_eq!(data.get_string("i").unwrap(), "True");
    assert_eq!(data.get_f64("j").unwrap(), 1000.0);

    assert_eq!(
        data.get_string("d"),
        Err(IniTableGetError::IncorrectValueType(IniValueType::I64))
    );
    assert_eq!(data.get_string("z"), Err(IniTableGetError::KeyDoesNotExist));
}

#[test]
fn RawCoercion() {
    let mut parser = IniParser::new("a = NULL\nb = true\nc = 42\n").coercion(IniCoercion::None);
    let ini = parser.parse().unwrap();

    assert_eq!(ini.data().get_string("a").unwrap(), "NULL");
    assert_eq!(ini.data().get_string("b").unwrap(), "true");
    assert_eq!(ini.data().get_string("c").unwrap(), "42");

    let ini = IniParser::new("a = NULL\nb = true\nc = 42\n")
        .coercion(IniCoercion::Bool)
        .into_result()
        .unwrap();

    assert_eq!(ini.data().get_string("a").unwrap(), "NULL");
    assert!(ini.data().get_bool("b").unwrap());
    assert_eq!(ini.data().get_string("c").unwrap(), "42");
}

#[test]
fn LineBreaks() {
    let ini = parse_ini("a = 1\r\nb = 2\r\n\r\nc = 3").unwrap();
    assert_eq!(ini.data().get_i64("a").unwrap(), 1);
    assert_eq!(ini.data().get_i64("b").unwrap(), 2);
    assert_eq!(ini.data().get_i64("c").unwrap(), 3);
    assert_eq!(ini.line_of("a"), Some(1));
    assert_eq!(ini.line_of("b"), Some(2));
    assert_eq!(ini.line_of("c"), Some(4));
    assert_eq!(ini.most_frequent_eol(), IniEol::CrLf);

    let ini = parse_ini("a\rb\r\nc\r").unwrap();
    assert_eq!(ini.data().len(), 3);
    assert_eq!(ini.line_of("c"), Some(3));
    assert_eq!(ini.most_frequent_eol(), IniEol::Cr);

    // Ties prefer `"\n"`.
    let ini = parse_ini("a\nb\r\nc").unwrap();
    assert_eq!(ini.most_frequent_eol(), IniEol::Lf);
}

#[test]
fn UnterminatedQuote() {
    let error = parse_ini("key = \"unterminated\n").err().unwrap();
    assert_eq!(
        error,
        IniError {
            line: 1,
            column: 7,
            error: IniErrorKind::UnterminatedQuote(IniQuote::Double),
            line_text: "key = \"unterminated".into(),
            source_name: None,
        }
    );

    // Reported at the opening quote.
    let error = parse_ini("a = 1\nb = 'x\ny\n").err().unwrap();
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 5);
    assert_eq!(error.error, IniErrorKind::UnterminatedQuote(IniQuote::Single));
    assert_eq!(error.line_text, "b = 'x");
}

#[test]
fn UnexpectedCharacter() {
    let error = parse_ini("= value\n").err().unwrap();
    assert_eq!(
        error,
        IniError {
            line: 1,
            column: 1,
            error: IniErrorKind::UnexpectedCharacter('='),
            line_text: "= value".into(),
            source_name: None,
        }
    );

    // Double-quoted keys.
    let error = parse_ini("a = 1\n  \"key\" = 2").err().unwrap();
    assert_eq!((error.line, error.column), (2, 3));
    assert_eq!(error.error, IniErrorKind::UnexpectedCharacter('"'));

    // Second separator.
    let error = parse_ini("a = b = c").err().unwrap();
    assert_eq!((error.line, error.column), (1, 7));
    assert_eq!(error.error, IniErrorKind::UnexpectedCharacter('='));

    // Trailing characters after a quoted value.
    let error = parse_ini("a = \"x\" y").err().unwrap();
    assert_eq!((error.line, error.column), (1, 9));
    assert_eq!(error.error, IniErrorKind::UnexpectedCharacter('y'));

    // Lines after a multi-line value.
    let error = parse_ini("a = 'x\ny'\n= 1").err().unwrap();
    assert_eq!((error.line, error.column), (3, 1));
    assert_eq!(error.line_text, "= 1");
}

#[test]
fn SourceName() {
    let error = IniParser::new("=")
        .source_name("app.ini")
        .into_result()
        .err()
        .unwrap();

    assert_eq!(error.source_name.as_deref(), Some("app.ini"));
    assert_eq!(
        error.to_string(),
        "app.ini: INI parse error. Line: 1, column: 1. Unexpected character ('='). Line text: \"=\"."
    );
}

#[test]
fn Idempotence() {
    let mut parser = IniParser::new("a[] = 1\na[] = 2\n");
    assert!(!parser.is_parsed());

    let first = parser.parse().unwrap().clone();
    assert!(parser.is_parsed());

    // The `[]` counters are not advanced by the second call.
    let second = parser.parse().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(second.line_of("a[1]"), Some(2));
    assert_eq!(second.line_of("a[2]"), None);

    assert_eq!(parser.into_result().unwrap(), first);

    let mut parser = IniParser::new("a = 'x");
    let first = parser.parse().err().unwrap();
    let second = parser.parse().err().unwrap();
    assert_eq!(first, second);
}

#[test]
fn FromStr() {
    let ini: IniDocument = "a = 1\nb[] = x".parse().unwrap();
    assert_eq!(ini.data().get_i64("a").unwrap(), 1);
    assert_eq!(
        ini.into_data().get_table("b").unwrap().get_string(0).unwrap(),
        "x"
    );

    assert!("= 1".parse::<IniDocument>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn Serialize() {
    use serde_json::json;

    let ini = parse_ini(
        "name = John\nlist[] = 1\nlist[] = 2.5\nflag = TRUE\nnothing = null\ndb[host] = 'h'\n",
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&ini).unwrap(),
        json!({
            "data": {
                "name": "John",
                "list": [1, 2.5],
                "flag": true,
                "nothing": null,
                "db": { "host": "h" }
            },
            "data_map": {
                "name": 1,
                "list[0]": 2,
                "list[1]": 3,
                "flag": 4,
                "nothing": 5,
                "db[host]": 6
            },
            "most_frequent_eol": "\n"
        })
    );
}

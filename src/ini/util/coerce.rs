use crate::*;

/// Converts a parsed `.ini` value string to an [`IniValue`](enum.IniValue.html).
/// If `quoted` is `true`, `value` is always treated as a string,
/// else it is first interpreted as a null / bool / number, as allowed by `coercion`.
pub(crate) fn coerce_value(value: String, quoted: bool, coercion: IniCoercion) -> IniValue {
    if quoted {
        return IniValue::String(value);
    }

    if coercion.contains(IniCoercion::Null) && matches!(value.as_str(), "NULL" | "null") {
        return IniValue::Null;
    }

    if coercion.contains(IniCoercion::Bool) {
        match value.as_str() {
            "TRUE" | "true" => return IniValue::Bool(true),
            "FALSE" | "false" => return IniValue::Bool(false),
            _ => {}
        }
    }

    if coercion.contains(IniCoercion::Number) {
        if let Some(number) = try_parse_number(&value) {
            return number;
        }
    }

    IniValue::String(value)
}

/// Parses a full numeric string: an optional sign, decimal digits with an optional fraction, and an optional exponent.
/// Integers which fit in an `i64` become [`I64`](enum.IniValue.html#variant.I64),
/// all other numeric strings become [`F64`](enum.IniValue.html#variant.F64).
fn try_parse_number(value: &str) -> Option<IniValue> {
    if !is_numeric(value) {
        return None;
    }

    if let Ok(int) = value.parse::<i64>() {
        Some(IniValue::I64(int))
    } else {
        value.parse::<f64>().ok().map(IniValue::F64)
    }
}

fn is_numeric(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut idx = 0;

    let digits = |idx: &mut usize| -> usize {
        let start = *idx;
        while bytes.get(*idx).map_or(false, u8::is_ascii_digit) {
            *idx += 1;
        }
        *idx - start
    };

    // Sign.
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }

    // Integer part and fraction, at least one digit overall.
    let mut mantissa_digits = digits(&mut idx);

    if bytes.get(idx) == Some(&b'.') {
        idx += 1;
        mantissa_digits += digits(&mut idx);
    }

    if mantissa_digits == 0 {
        return false;
    }

    // Exponent.
    if matches!(bytes.get(idx), Some(b'e') | Some(b'E')) {
        idx += 1;

        if matches!(bytes.get(idx), Some(b'+') | Some(b'-')) {
            idx += 1;
        }

        if digits(&mut idx) == 0 {
            return false;
        }
    }

    idx == bytes.len()
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case("NULL", IniValue::Null)]
    #[case("null", IniValue::Null)]
    #[case("TRUE", IniValue::Bool(true))]
    #[case("true", IniValue::Bool(true))]
    #[case("FALSE", IniValue::Bool(false))]
    #[case("false", IniValue::Bool(false))]
    #[case("123", IniValue::I64(123))]
    #[case("-7", IniValue::I64(-7))]
    #[case("+7", IniValue::I64(7))]
    #[case("007", IniValue::I64(7))]
    #[case("1.5", IniValue::F64(1.5))]
    #[case(".5", IniValue::F64(0.5))]
    #[case("5.", IniValue::F64(5.0))]
    #[case("1e3", IniValue::F64(1000.0))]
    #[case("-2.5E-1", IniValue::F64(-0.25))]
    #[case("99999999999999999999", IniValue::F64(99999999999999999999.0))]
    #[case("True", IniValue::String("True".into()))]
    #[case("Null", IniValue::String("Null".into()))]
    #[case("yes", IniValue::String("yes".into()))]
    #[case("", IniValue::String("".into()))]
    #[case("0x17", IniValue::String("0x17".into()))]
    #[case("1e", IniValue::String("1e".into()))]
    #[case(".", IniValue::String(".".into()))]
    #[case("-", IniValue::String("-".into()))]
    #[case("inf", IniValue::String("inf".into()))]
    #[case("NaN", IniValue::String("NaN".into()))]
    #[case("12 monkeys", IniValue::String("12 monkeys".into()))]
    fn unquoted(#[case] value: &str, #[case] expected: IniValue) {
        assert_eq!(
            coerce_value(value.into(), false, IniCoercion::default()),
            expected
        );
    }

    #[rstest]
    #[case("TRUE")]
    #[case("FALSE")]
    #[case("NULL")]
    #[case("123")]
    fn quoted(#[case] value: &str) {
        assert_eq!(
            coerce_value(value.into(), true, IniCoercion::default()),
            IniValue::String(value.into())
        );
    }

    #[test]
    fn partial_coercion() {
        assert_eq!(
            coerce_value("true".into(), false, IniCoercion::None),
            IniValue::String("true".into())
        );
        assert_eq!(
            coerce_value("12".into(), false, IniCoercion::Null | IniCoercion::Bool),
            IniValue::String("12".into())
        );
        assert_eq!(
            coerce_value("null".into(), false, IniCoercion::Number),
            IniValue::String("null".into())
        );
        assert_eq!(
            coerce_value("12".into(), false, IniCoercion::Number),
            IniValue::I64(12)
        );
    }
}

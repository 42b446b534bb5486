//! Comma-separated payload tokenizer.
//!
//! makemkvcon payload fields follow CSV conventions: fields are separated by
//! commas, string fields are wrapped in double quotes, and a literal `"`
//! inside a quoted field is written as `""`.

use super::ParseError;

/// Splits a payload into its fields, decoding quoted fields.
pub(crate) fn split_fields(payload: &str) -> Result<Vec<String>, ParseError> {
    let mut fields = Vec::new();
    let mut rest = payload;
    loop {
        let (field, remainder) = next_field(rest)?;
        fields.push(field);
        match remainder {
            Some(r) => rest = r,
            None => break,
        }
    }

    Ok(fields)
}

/// Consumes one field from the front of `s`. Returns the decoded field and
/// the remainder after the separating comma, or `None` at end of payload.
fn next_field(s: &str) -> Result<(String, Option<&str>), ParseError> {
    let Some(rest) = s.strip_prefix('"') else {
        // Unquoted field: everything up to the next comma, verbatim.
        return Ok(match s.split_once(',') {
            Some((field, remainder)) => (field.to_string(), Some(remainder)),
            None => (s.to_string(), None),
        });
    };

    let mut value = String::new();
    let mut iter = rest.char_indices();
    while let Some((i, c)) = iter.next() {
        if c != '"' {
            value.push(c);
            continue;
        }

        // A quote either escapes another quote or closes the field.
        match rest[i + 1..].chars().next() {
            Some('"') => {
                value.push('"');
                iter.next();
            }
            Some(',') => return Ok((value, Some(&rest[i + 2..]))),
            None => return Ok((value, None)),
            Some(_) => return Err(ParseError::MalformedQuote),
        }
    }

    // Closing quote never arrived.
    Err(ParseError::MalformedQuote)
}

/// Splits a payload and requires an exact field count.
pub(crate) fn expect_fields(payload: &str, expected: usize) -> Result<Vec<String>, ParseError> {
    let fields = split_fields(payload)?;
    if fields.len() != expected {
        return Err(ParseError::FieldCount {
            expected,
            found: fields.len(),
        });
    }

    Ok(fields)
}

/// Parses an unsigned integer field. Signs and surrounding whitespace are
/// rejected; makemkvcon never emits them.
pub(crate) fn parse_int(field: &str) -> Result<i64, ParseError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonInteger(field.to_string()));
    }

    field
        .parse()
        .map_err(|_| ParseError::NonInteger(field.to_string()))
}

/// Parses an unsigned integer field used as a title/stream/drive index.
pub(crate) fn parse_index(field: &str) -> Result<usize, ParseError> {
    parse_int(field).map(|n| n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unquoted() {
        assert_eq!(
            split_fields("1,2,33").unwrap(),
            vec!["1".to_string(), "2".to_string(), "33".to_string()]
        );
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(
            split_fields(r#"0,"BD Drive","A Disc""#).unwrap(),
            vec!["0".to_string(), "BD Drive".to_string(), "A Disc".to_string()]
        );
    }

    #[test]
    fn test_split_doubled_quote_escape() {
        assert_eq!(
            split_fields(r#""Foo ""bar"" (baz).""#).unwrap(),
            vec![r#"Foo "bar" (baz)."#.to_string()]
        );
    }

    #[test]
    fn test_split_empty_quoted_fields() {
        assert_eq!(
            split_fields(r#""","","""#).unwrap(),
            vec![String::new(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_split_comma_inside_quotes() {
        assert_eq!(
            split_fields(r#""a,b",c"#).unwrap(),
            vec!["a,b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert_eq!(split_fields(r#""abc"#), Err(ParseError::MalformedQuote));
    }

    #[test]
    fn test_split_garbage_after_closing_quote() {
        assert_eq!(split_fields(r#""abc"def"#), Err(ParseError::MalformedQuote));
    }

    #[test]
    fn test_parse_int_strict() {
        assert_eq!(parse_int("42").unwrap(), 42);
        assert!(parse_int("").is_err());
        assert!(parse_int("-1").is_err());
        assert!(parse_int("+1").is_err());
        assert!(parse_int(" 1").is_err());
        assert!(parse_int("abc").is_err());
    }
}

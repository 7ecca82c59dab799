//! Tests for value parsing

use super::*;

fn parse_one<T: Value>(input: &str) -> Result<T, ParseError> {
    let mut cursor = Cursor::new(input);
    T::parse(&mut cursor)
}

#[test]
fn test_type_names() {
    assert_eq!(String::type_name(), "String");
    assert_eq!(bool::type_name(), "Boolean");
    assert_eq!(char::type_name(), "Char");
    assert_eq!(u8::type_name(), "Unsigned_Char");
    assert_eq!(i16::type_name(), "Signed_Short");
    assert_eq!(u64::type_name(), "Unsigned_Long");
    assert_eq!(f64::type_name(), "Double");
    assert_eq!(<Vec<i32>>::type_name(), "Vector_Of_Signed_Int");
    assert_eq!(
        <Vec<Vec<String>>>::type_name(),
        "Vector_Of_Vector_Of_String"
    );
}

#[test]
fn test_registered_type() {
    let entry = registered_type::<Vec<f32>>();
    assert!(entry.is_supported());
    assert_eq!(entry.display_name, "Vector_Of_Float");
}

#[test]
fn test_bare_word() {
    assert_eq!(parse_one::<String>("  Zero  One").unwrap(), "Zero");
}

#[test]
fn test_non_breaking_space_stays_in_token() {
    let mut cursor = Cursor::new("a\u{a0}b c");
    assert_eq!(String::parse(&mut cursor).unwrap(), "a\u{a0}b");
    assert_eq!(cursor.remaining(), " c");
}

#[test]
fn test_bare_word_escaped_bracket() {
    assert_eq!(parse_one::<String>("Zero\\]").unwrap(), "Zero]");
}

#[test]
fn test_bare_word_stops_at_bracket() {
    let mut cursor = Cursor::new("Zero] tail");
    assert_eq!(String::parse(&mut cursor).unwrap(), "Zero");
    assert_eq!(cursor.remaining(), "] tail");
}

#[test]
fn test_quoted_whitespace() {
    assert_eq!(parse_one::<String>("\" \"").unwrap(), " ");
}

#[test]
fn test_quoted_escapes() {
    assert_eq!(parse_one::<String>("\"Zero\\\"\"").unwrap(), "Zero\"");
    assert_eq!(parse_one::<String>("\"Zero \\\" \\\\\"").unwrap(), "Zero \" \\");
    assert_eq!(parse_one::<String>("\"a\\bc\"").unwrap(), "abc");
}

#[test]
fn test_adjacent_quotes_concatenate() {
    assert_eq!(
        parse_one::<String>("\"Zero\"\"One\"\"    #    \"").unwrap(),
        "ZeroOne    #    "
    );
}

#[test]
fn test_quotes_separated_by_whitespace_do_not_concatenate() {
    let mut cursor = Cursor::new("\"Zero\" \"One\"");
    assert_eq!(String::parse(&mut cursor).unwrap(), "Zero");
    assert_eq!(String::parse(&mut cursor).unwrap(), "One");
    assert!(!cursor.has_token());
}

#[test]
fn test_empty_quoted_string() {
    assert_eq!(parse_one::<String>("\"\"").unwrap(), "");
}

#[test]
fn test_unterminated_quote() {
    let err = parse_one::<String>("\"Zero").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnterminatedQuote {
            input: "\"Zero".to_string()
        }
    );
}

#[test]
fn test_dangling_escape() {
    assert!(matches!(
        parse_one::<String>("Zero\\"),
        Err(ParseError::DanglingEscape { .. })
    ));
}

#[test]
fn test_missing_value() {
    assert_eq!(parse_one::<String>("   "), Err(ParseError::Missing));
    assert_eq!(parse_one::<i32>(""), Err(ParseError::Missing));
    assert_eq!(parse_one::<Vec<i32>>(" "), Err(ParseError::Missing));
}

#[test]
fn test_unexpected_close_bracket() {
    assert!(matches!(
        parse_one::<String>(" ] x"),
        Err(ParseError::UnexpectedCloseBracket { .. })
    ));
}

#[test]
fn test_numbers() {
    assert_eq!(parse_one::<i32>("-42").unwrap(), -42);
    assert_eq!(parse_one::<u8>("255").unwrap(), 255);
    assert_eq!(parse_one::<f64>("\"2.5\"").unwrap(), 2.5);
    assert_eq!(parse_one::<u128>("340282366920938463463374607431768211455").unwrap(), u128::MAX);
}

#[test]
fn test_invalid_number_names_type_and_text() {
    let err = parse_one::<u8>("256").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidValue {
            type_name: "Unsigned_Char".to_string(),
            text: "256".to_string(),
            input: "256".to_string(),
        }
    );
}

#[test]
fn test_bool() {
    assert!(parse_one::<bool>("true").unwrap());
    assert!(parse_one::<bool>("TRUE").unwrap());
    assert!(parse_one::<bool>("1").unwrap());
    assert!(!parse_one::<bool>("false").unwrap());
    assert!(!parse_one::<bool>("0").unwrap());
    assert!(parse_one::<bool>("yes").is_err());
}

#[test]
fn test_char() {
    assert_eq!(parse_one::<char>("a").unwrap(), 'a');
    assert_eq!(parse_one::<char>("\\\"").unwrap(), '"');
    assert_eq!(parse_one::<char>("\\\\").unwrap(), '\\');
    assert_eq!(parse_one::<char>("\" \"").unwrap(), ' ');
}

#[test]
fn test_char_requires_exactly_one() {
    assert!(matches!(
        parse_one::<char>("aa"),
        Err(ParseError::InvalidValue { .. })
    ));
    assert!(matches!(
        parse_one::<char>("\"\""),
        Err(ParseError::InvalidValue { .. })
    ));
}

#[test]
fn test_vector_of_strings() {
    assert_eq!(
        parse_one::<Vec<String>>("[  \"Zero\" \"One\" \"Two\"   ]").unwrap(),
        vec!["Zero", "One", "Two"]
    );
}

#[test]
fn test_vector_without_inner_whitespace() {
    assert_eq!(parse_one::<Vec<i32>>("[1 2 3]").unwrap(), vec![1, 2, 3]);
    assert_eq!(
        parse_one::<Vec<String>>("[Zero\\] One]").unwrap(),
        vec!["Zero]", "One"]
    );
}

#[test]
fn test_empty_vector() {
    assert_eq!(parse_one::<Vec<i32>>("[ ]").unwrap(), Vec::<i32>::new());
    assert_eq!(parse_one::<Vec<i32>>("[]").unwrap(), Vec::<i32>::new());
}

#[test]
fn test_nested_vectors() {
    assert_eq!(
        parse_one::<Vec<Vec<String>>>("[ [\" \"] [ \"Arg\" ] ]").unwrap(),
        vec![vec![" ".to_string()], vec!["Arg".to_string()]]
    );

    let deep = parse_one::<Vec<Vec<Vec<String>>>>(
        "[ \t\n [ \t [\" \"] \t ]     \t [ [\"Arg\"] ] ]",
    )
    .unwrap();
    assert_eq!(deep[0][0][0], " ");
    assert_eq!(deep[1][0][0], "Arg");
}

#[test]
fn test_vector_cursor_advances_past_bracket() {
    let mut cursor = Cursor::new("[1 2] 3");
    assert_eq!(<Vec<i32>>::parse(&mut cursor).unwrap(), vec![1, 2]);
    assert_eq!(cursor.remaining(), " 3");
}

#[test]
fn test_unterminated_vector() {
    assert!(matches!(
        parse_one::<Vec<i32>>("[1 2"),
        Err(ParseError::UnterminatedVector { .. })
    ));
    assert!(matches!(
        parse_one::<Vec<Vec<i32>>>("[[1] [2"),
        Err(ParseError::UnterminatedVector { .. })
    ));
}

#[test]
fn test_vector_requires_bracket() {
    assert_eq!(
        parse_one::<Vec<i32>>("1 2"),
        Err(ParseError::ExpectedVector {
            type_name: "Vector_Of_Signed_Int".to_string(),
            input: "1 2".to_string(),
        })
    );
    assert!(matches!(
        parse_one::<Vec<Vec<i32>>>("[1]"),
        Err(ParseError::ExpectedVector { .. })
    ));
}

#[test]
fn test_invalid_element_reports_full_input() {
    let err = parse_one::<Vec<i32>>("[1 two 3]").unwrap_err();
    assert_eq!(err.input(), Some("[1 two 3]"));
}

#[test]
fn test_render() {
    assert_eq!("plain".to_string().render(), "plain");
    assert_eq!("two words".to_string().render(), "\"two words\"");
    assert_eq!(String::new().render(), "\"\"");
    assert_eq!("say \"hi\"".to_string().render(), "\"say \\\"hi\\\"\"");
    assert_eq!(vec![1, 2, 3].render(), "[1 2 3]");
    assert_eq!(Vec::<i32>::new().render(), "[]");
    assert_eq!(true.render(), "true");
    assert_eq!(' '.render(), "\" \"");
}

#[test]
fn test_render_parses_back() {
    let original = vec!["a b".to_string(), "c\\d".to_string(), "]".to_string()];
    let rendered = original.render();
    assert_eq!(parse_one::<Vec<String>>(&rendered).unwrap(), original);
}

//! Tests for error types

use super::*;

#[test]
fn test_command_error_display() {
    let err = CommandError::new("echo", ArgumentError::missing("text"));
    assert_eq!(
        err.to_string(),
        "echo: not enough arguments were given, missing 'text'"
    );
}

#[test]
fn test_malformed_value_keeps_full_input() {
    let parse = ParseError::invalid_value("Signed_Int", "abc", "add abc 2");
    assert_eq!(parse.input(), Some("add abc 2"));

    let err = CommandError::new("add", ArgumentError::MalformedValue(parse));
    assert_eq!(
        err.to_string(),
        "add: 'abc' is not a valid Signed_Int in \"add abc 2\""
    );
}

#[test]
fn test_from_parse_maps_missing() {
    assert_eq!(
        ArgumentError::from_parse("count", ParseError::Missing),
        ArgumentError::missing("count")
    );

    let quote = ParseError::UnterminatedQuote {
        input: "\"abc".to_string(),
    };
    assert_eq!(
        ArgumentError::from_parse("text", quote.clone()),
        ArgumentError::MalformedValue(quote)
    );
}

#[test]
fn test_error_codes() {
    assert_eq!(
        ArgotError::unknown_command("nope").error_code(),
        "UNKNOWN_COMMAND"
    );
    assert_eq!(
        ArgotError::from(CommandError::new("x", ArgumentError::too_many("x y"))).error_code(),
        "TOO_MANY_ARGUMENTS"
    );
    assert_eq!(ArgotError::config("bad").error_code(), "CONFIG_ERROR");
}

#[test]
fn test_user_errors() {
    assert!(ArgotError::unknown_command("nope").is_user_error());
    assert!(ArgotError::from(CommandError::new("x", ArgumentError::missing("a"))).is_user_error());
    assert!(!ArgotError::duplicate_command("x").is_user_error());
    assert!(!ArgotError::config("bad").is_user_error());
}

#[test]
fn test_config_context() {
    let err = ArgotError::config_with_context("bad value", "reading config.toml");
    assert_eq!(err.context(), Some("reading config.toml"));
    assert_eq!(err.to_string(), "Configuration error: bad value");
}

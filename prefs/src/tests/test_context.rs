use crate::{Context, Span, Token, TokenType};

#[test]
fn token_new_spans_the_text_bytes() {
    let token = Token::new(r#""ab""#, 10);
    assert_eq!(token.span, Span::new(10, 14));
}

#[test]
fn token_quote_char_only_reports_leading_quotes() {
    assert_eq!(Token::new(r#""a"#, 0).quote_char(), Some('"'));
    assert_eq!(Token::new("'a'", 0).quote_char(), Some('\''));
    assert_eq!(Token::new("a\"", 0).quote_char(), None);
    assert_eq!(Token::new("", 0).quote_char(), None);
}

#[test]
fn token_text_before_snaps_to_char_boundary() {
    let token = Token::new("\"é\"", 0);
    // `é` is two bytes; offset 2 lands inside it.
    assert_eq!(token.text_before(2), "\"");
    assert_eq!(token.text_before(3), "\"é");
    assert_eq!(token.text_before(99), "\"é\"");
}

#[test]
fn context_builders_fill_request_fields() {
    let ctx = Context::value(Token::new("x", 4), 1)
        .with_parent("javascript")
        .with_key("linting.prefer")
        .in_array()
        .replacing_whole_token()
        .excluding(["a", "b"]);

    assert_eq!(ctx.token_type, Some(TokenType::Value));
    assert_eq!(ctx.parent_key_name, "javascript");
    assert_eq!(ctx.key_name, "linting.prefer");
    assert!(ctx.is_array_element);
    assert!(ctx.should_replace_whole_token);
    assert!(ctx.exclusion_list.contains("a") && ctx.exclusion_list.contains("b"));
}

#[test]
fn root_context_has_empty_key_names() {
    let ctx = Context::key(Token::default(), 0);
    assert_eq!(ctx.parent_key_name, "");
    assert_eq!(ctx.key_name, "");
}

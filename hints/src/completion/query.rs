use prefs::Context;

use crate::host::ContextAnalyzer;

/// Removes one leading and one trailing quote character.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text.strip_suffix(['"', '\'']).unwrap_or(text)
}

/// Extracts the typed query: token text up to the cursor, unquoted and trimmed.
///
/// Punctuation/whitespace-only text yields the empty query.
pub(crate) fn query_for_context<A: ContextAnalyzer + ?Sized>(
    ctx: &Context,
    analyzer: &A,
) -> String {
    let typed = strip_quotes(ctx.token.text_before(ctx.offset_in_token)).trim();
    if analyzer.is_disallowed_key_value_char(typed) {
        return String::new();
    }
    typed.to_string()
}

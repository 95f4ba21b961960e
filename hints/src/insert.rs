//! Turns an accepted candidate into a text edit plus a cursor position.
//!
//! Keys are quoted and, unless the whole token is being replaced, followed by `": "` and an
//! empty body for the key's type. Values are quoted when untyped or string-typed.
//! Spans/cursors are UTF-8 byte offsets; ranges are half-open `[start, end)`.

use prefs::{Context, Span, TextEdit, TokenType, ValueType};
use serde::Serialize;
use tracing::debug;

use crate::completion::{Candidate, HintsConfig};
use crate::host::ContextAnalyzer;

/// The exact edit for one accepted completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertionPlan {
    pub replace: Span,
    pub new_text: String,
    /// Cursor after the edit, in post-edit coordinates.
    pub cursor: u32,
    /// Whether the caller should immediately open a value completion session.
    pub continue_session: bool,
}

impl InsertionPlan {
    pub fn edit(&self) -> TextEdit {
        TextEdit {
            range: self.replace,
            new_text: self.new_text.clone(),
        }
    }
}

/// Result of `HintSession::apply_completion`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOutcome {
    pub continue_session: bool,
}

/// Empty-body opener appended after `": "` for a key of this type.
fn empty_body(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::Object => "{}",
        ValueType::Array => "[]",
        ValueType::String => "\"\"",
        ValueType::Boolean | ValueType::Number | ValueType::None => "",
    }
}

/// Bodies after which a value session makes sense right away.
fn continues_with_value(value_type: ValueType) -> bool {
    match value_type {
        ValueType::Array | ValueType::String => true,
        ValueType::Object | ValueType::Boolean | ValueType::Number | ValueType::None => false,
    }
}

fn text_len(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}

/// Computes the edit for accepting `candidate` at `cursor`.
///
/// Returns `None` only when the context has no token type.
pub fn plan_insertion<A: ContextAnalyzer + ?Sized>(
    analyzer: &A,
    ctx: &Context,
    candidate: &Candidate,
    cursor: u32,
    config: &HintsConfig,
) -> Option<InsertionPlan> {
    let plan = match ctx.token_type? {
        TokenType::Key => plan_key(ctx, candidate, cursor, config),
        TokenType::Value => plan_value(analyzer, ctx, candidate, cursor, config),
    };
    debug!(
        start = plan.replace.start,
        end = plan.replace.end,
        new_text = %plan.new_text,
        continue_session = plan.continue_session,
        "planned insertion"
    );
    Some(plan)
}

/// Span from the token start (as seen from the cursor) to the token end.
fn span_to_token_end(ctx: &Context, cursor: u32) -> Span {
    let start = cursor.saturating_sub(ctx.offset_in_token);
    Span::new(start, ctx.token.span.end.max(start))
}

fn plan_key(
    ctx: &Context,
    candidate: &Candidate,
    cursor: u32,
    config: &HintsConfig,
) -> InsertionPlan {
    let quote = ctx.token.quote_char().unwrap_or(config.default_quote);
    let mut new_text = format!("{quote}{}{quote}", candidate.raw_text);
    let replace = span_to_token_end(ctx, cursor);

    if ctx.should_replace_whole_token {
        return InsertionPlan {
            cursor: replace.start.saturating_add(text_len(&new_text)),
            replace,
            new_text,
            continue_session: false,
        };
    }

    let value_type = candidate.value_type.unwrap_or(ValueType::None);
    let body = empty_body(value_type);
    new_text.push_str(": ");
    new_text.push_str(body);

    // Paired bodies put the cursor between the pair.
    let end = replace.start.saturating_add(text_len(&new_text));
    let cursor = if body.is_empty() { end } else { end.saturating_sub(1) };

    InsertionPlan {
        replace,
        new_text,
        cursor,
        continue_session: continues_with_value(value_type),
    }
}

fn plan_value<A: ContextAnalyzer + ?Sized>(
    analyzer: &A,
    ctx: &Context,
    candidate: &Candidate,
    cursor: u32,
    config: &HintsConfig,
) -> InsertionPlan {
    let replace = if analyzer.is_disallowed_key_value_char(&ctx.token.text) {
        Span::point(cursor)
    } else if ctx.should_replace_whole_token {
        ctx.token.span
    } else {
        span_to_token_end(ctx, cursor)
    };

    let new_text = match candidate.value_type {
        None | Some(ValueType::String) => {
            let quote = ctx.token.quote_char().unwrap_or(config.default_quote);
            format!("{quote}{}{quote}", candidate.raw_text)
        }
        Some(
            ValueType::Number
            | ValueType::Boolean
            | ValueType::Object
            | ValueType::Array
            | ValueType::None,
        ) => candidate.raw_text.clone(),
    };

    InsertionPlan {
        cursor: replace.start.saturating_add(text_len(&new_text)),
        replace,
        new_text,
        continue_session: false,
    }
}

//! Builds the raw candidate list for a context.
//! Candidates are not ranked here (ranking happens in `ranking`). Entries of the context's
//! exclusion list are never returned, whichever branch produced them.

use prefs::{Context, SchemaEntry, SchemaRegistry, TokenType, ValueType, keys};
use tracing::trace;

use crate::completion::Candidate;
use crate::host::ValueProviders;

/// Unranked candidates for the token at the cursor.
pub(crate) fn resolve_candidates<P: ValueProviders + ?Sized>(
    ctx: &Context,
    registry: &SchemaRegistry,
    providers: &P,
) -> Vec<Candidate> {
    let mut candidates = match ctx.token_type {
        Some(TokenType::Key) => key_candidates(ctx, registry, providers),
        Some(TokenType::Value) => value_candidates(ctx, registry, providers),
        None => Vec::new(),
    };
    candidates.retain(|candidate| !ctx.exclusion_list.contains(&candidate.raw_text));
    trace!(
        parent = %ctx.parent_key_name,
        key = %ctx.key_name,
        count = candidates.len(),
        "resolved candidates"
    );
    candidates
}

fn key_candidates<P: ValueProviders + ?Sized>(
    ctx: &Context,
    registry: &SchemaRegistry,
    providers: &P,
) -> Vec<Candidate> {
    let nested = registry
        .get(&ctx.parent_key_name)
        .and_then(|entry| entry.children.as_ref());

    if let Some(children) = nested {
        children.values().map(Candidate::from_entry).collect()
    } else if ctx.parent_key_name == keys::LANGUAGE {
        providers
            .languages()
            .into_iter()
            .map(|lang| {
                let candidate = Candidate::new(lang.id).with_value_type(ValueType::Object);
                match lang.name {
                    Some(name) => candidate.with_description(name),
                    None => candidate,
                }
            })
            .collect()
    } else {
        registry.entries().map(Candidate::from_entry).collect()
    }
}

/// Nested option under the parent first, then a root option with the same name.
fn resolve_option<'a>(ctx: &Context, registry: &'a SchemaRegistry) -> Option<&'a SchemaEntry> {
    registry
        .nested(&ctx.parent_key_name, &ctx.key_name)
        .or_else(|| registry.get(&ctx.key_name))
}

fn value_candidates<P: ValueProviders + ?Sized>(
    ctx: &Context,
    registry: &SchemaRegistry,
    providers: &P,
) -> Vec<Candidate> {
    if let Some(option) = resolve_option(ctx, registry) {
        if option.value_type == ValueType::Boolean {
            return ["false", "true"]
                .into_iter()
                .map(|value| Candidate::new(value).with_value_type(ValueType::Boolean))
                .collect();
        }
        if let Some(values) = &option.allowed_values
            && accepts_allowed_values(option, ctx.is_array_element)
        {
            let value_type = allowed_value_type(option);
            return values
                .iter()
                .map(|value| Candidate {
                    raw_text: value.clone(),
                    value_type,
                    description: None,
                })
                .collect();
        }
    }

    dynamic_values(ctx, providers)
        .into_iter()
        .map(Candidate::new)
        .collect()
}

fn accepts_allowed_values(option: &SchemaEntry, is_array_element: bool) -> bool {
    match option.value_type {
        ValueType::String | ValueType::Number => true,
        ValueType::Array => {
            is_array_element && option.item_type.is_none_or(|item| item.is_scalar())
        }
        ValueType::Boolean | ValueType::Object | ValueType::None => false,
    }
}

fn allowed_value_type(option: &SchemaEntry) -> Option<ValueType> {
    match option.value_type {
        ValueType::Array => option.item_type,
        ValueType::None => None,
        other => Some(other),
    }
}

/// Values from runtime registries, keyed by well-known preference ids.
fn dynamic_values<P: ValueProviders + ?Sized>(ctx: &Context, providers: &P) -> Vec<String> {
    if ctx.is_array_element
        && ctx.key_name == keys::LINTING_PREFER
        && providers.has_language(&ctx.parent_key_name)
    {
        return providers.lint_providers_for_language(&ctx.parent_key_name);
    }
    if ctx.key_name == keys::THEME {
        return providers.themes().into_iter().map(|theme| theme.name).collect();
    }
    if ctx.parent_key_name == keys::FILE_EXTENSIONS || ctx.parent_key_name == keys::FILE_NAMES {
        return providers.languages().into_iter().map(|lang| lang.id).collect();
    }
    Vec::new()
}

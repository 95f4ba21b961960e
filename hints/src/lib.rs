//! Key/value completion for structured-configuration documents.
//!
//! Coordinates are UTF-8 byte offsets (`[start, end)`), matching `prefs`.
//!
//! A request runs synchronously: `is_completion_available` → `get_completions` → (user picks)
//! → `apply_completion`. The context resolved by the availability check is cached for the
//! completion call that follows it and is dropped on the next check or on apply.

mod completion;
mod gate;
mod host;
mod insert;
mod text_edit;

use std::path::Path;
use std::sync::Arc;

use prefs::{Context, SchemaRegistry};
use tracing::debug;

pub use completion::{
    Candidate, CompletionResult, DEFAULT_ENABLE_SETTING, HighlightRange, HintsConfig, MatchRecord,
    RankKey,
};
pub use gate::{ActivationGate, JSON_MODE, KEY_HINT_DENY_LIST, is_preferences_file};
pub use host::{
    ContextAnalyzer, EditorHandle, LanguageInfo, PreferenceStore, StaticProviders, TextBuffer,
    ThemeInfo, ValueProviders, is_disallowed_key_value_text,
};
pub use insert::{ApplyOutcome, InsertionPlan, plan_insertion};
pub use text_edit::{StringBuffer, apply_text_edits_bytes_with_cursor};

/// Typed characters that close a structure and end the session.
const CLOSING_TRIGGERS: [char; 3] = ['}', ']', ','];

/// Completion engine for one editor integration.
pub struct HintSession<A, P> {
    config: HintsConfig,
    gate: Arc<ActivationGate>,
    registry: SchemaRegistry,
    analyzer: A,
    providers: P,
    cached: Option<Context>,
}

impl<A: ContextAnalyzer, P: ValueProviders> HintSession<A, P> {
    pub fn new(
        config: HintsConfig,
        gate: Arc<ActivationGate>,
        registry: SchemaRegistry,
        analyzer: A,
        providers: P,
    ) -> Self {
        Self {
            config,
            gate,
            registry,
            analyzer,
            providers,
            cached: None,
        }
    }

    /// Shared gate, for delivering notifications from another thread.
    pub fn gate(&self) -> Arc<ActivationGate> {
        Arc::clone(&self.gate)
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Replaces the registry after the preference source changed.
    pub fn set_registry(&mut self, registry: SchemaRegistry) {
        self.registry = registry;
        self.cached = None;
    }

    /// Setting-changed notification. Only the configured enable setting is observed.
    pub fn on_setting_changed(&self, name: &str, value: bool) {
        if name == self.config.enable_setting {
            self.gate.set_hints_enabled(value);
        }
    }

    /// Active-document-changed notification.
    pub fn on_active_document_changed(&mut self, path: Option<&Path>) {
        let is_target =
            path.is_some_and(|path| is_preferences_file(path, &self.config.preference_file_names));
        self.gate.set_document_is_target(is_target);
        self.cached = None;
    }

    /// Whether completion is offered at the editor's cursor.
    ///
    /// On `true`, the resolved context is cached for [`Self::get_completions`].
    pub fn is_completion_available<E: EditorHandle + ?Sized>(&mut self, editor: &E) -> bool {
        self.cached = None;
        if !self.gate.is_open() {
            debug!("completion gate closed");
            return false;
        }
        let ctx = self
            .analyzer
            .resolve_context(editor.text(), editor.cursor(), true);
        self.cached = self.gate.admit(editor.content_mode(), ctx);
        self.cached.is_some()
    }

    /// Ranked completions for the cached context.
    ///
    /// `trigger` is the typed character, or `None` for an explicit request.
    pub fn get_completions(&self, trigger: Option<char>) -> Option<CompletionResult> {
        let ctx = self.cached.as_ref()?;
        if let Some(c) = trigger
            && CLOSING_TRIGGERS.contains(&c)
        {
            debug!(trigger = %c, "closing trigger ends completion");
            return None;
        }

        let query = completion::query_for_context(ctx, &self.analyzer);
        let candidates = completion::resolve_candidates(ctx, &self.registry, &self.providers);
        let candidates = completion::rank_candidates(&query, candidates, self.config.fuzzy);
        debug!(query = %query, count = candidates.len(), "ranked completions");
        if candidates.is_empty() {
            return None;
        }

        Some(CompletionResult {
            candidates,
            query,
            select_first_by_default: self.config.select_first,
        })
    }

    /// Inserts `selected` at the buffer's cursor.
    pub fn apply_completion<B: TextBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
        selected: &Candidate,
    ) -> ApplyOutcome {
        self.cached = None;
        let cursor = buffer.cursor();
        let Some(ctx) = self.analyzer.resolve_context(buffer.text(), cursor, false) else {
            debug!("no context at cursor; nothing inserted");
            return ApplyOutcome::default();
        };
        let Some(plan) = plan_insertion(&self.analyzer, &ctx, selected, cursor, &self.config)
        else {
            return ApplyOutcome::default();
        };

        buffer.replace_range(&plan.new_text, plan.replace.start, plan.replace.end);
        buffer.set_cursor(plan.cursor);
        ApplyOutcome {
            continue_session: plan.continue_session,
        }
    }
}

#[cfg(test)]
mod tests;

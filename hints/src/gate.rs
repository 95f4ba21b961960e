//! Decides whether completion is offered at all.
//!
//! Two process-wide flags plus a per-call structural test. The flags are atomics so
//! notifications may be delivered on a different thread than requests.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use prefs::{Context, TokenType, keys};
use tracing::debug;

use crate::host::PreferenceStore;

/// Content mode of structured-configuration documents.
pub const JSON_MODE: &str = "application/json";

/// Parent keys whose object keys are free-form, so no key hints are offered inside them.
pub const KEY_HINT_DENY_LIST: [&str; 3] = [keys::FILE_EXTENSIONS, keys::FILE_NAMES, keys::PATH];

pub(crate) fn key_hints_denied(parent_key_name: &str) -> bool {
    KEY_HINT_DENY_LIST.contains(&parent_key_name)
}

/// Whether the file name of `path` is one of `names`.
pub fn is_preferences_file(path: &Path, names: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| names.iter().any(|candidate| candidate == name))
}

#[derive(Debug)]
pub struct ActivationGate {
    hints_enabled: AtomicBool,
    document_is_target: AtomicBool,
}

impl Default for ActivationGate {
    /// Hints enabled, no target document yet.
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ActivationGate {
    pub fn new(hints_enabled: bool, document_is_target: bool) -> Self {
        Self {
            hints_enabled: AtomicBool::new(hints_enabled),
            document_is_target: AtomicBool::new(document_is_target),
        }
    }

    /// Reads the enablement setting from `store`; a missing setting counts as enabled.
    pub fn from_store<S: PreferenceStore + ?Sized>(store: &S, setting: &str) -> Self {
        Self::new(store.get_bool(setting).unwrap_or(true), false)
    }

    pub fn set_hints_enabled(&self, enabled: bool) {
        self.hints_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled.load(Ordering::Relaxed)
    }

    pub fn set_document_is_target(&self, is_target: bool) {
        self.document_is_target.store(is_target, Ordering::Relaxed);
    }

    pub fn document_is_target(&self) -> bool {
        self.document_is_target.load(Ordering::Relaxed)
    }

    /// Both flags are set.
    pub fn is_open(&self) -> bool {
        self.hints_enabled() && self.document_is_target()
    }

    /// Runs the full test and hands back the context when completion applies.
    pub fn admit(&self, content_mode: &str, ctx: Option<Context>) -> Option<Context> {
        if !self.is_open() {
            debug!(
                hints_enabled = self.hints_enabled(),
                document_is_target = self.document_is_target(),
                "completion gate closed"
            );
            return None;
        }
        if content_mode != JSON_MODE {
            debug!(content_mode, "completion skipped: not a structured-configuration mode");
            return None;
        }
        let Some(ctx) = ctx else {
            debug!("completion skipped: no context at cursor");
            return None;
        };
        match ctx.token_type {
            None => {
                debug!("completion skipped: token type undefined");
                None
            }
            Some(TokenType::Key) if key_hints_denied(&ctx.parent_key_name) => {
                debug!(parent = %ctx.parent_key_name, "key hints denied for parent");
                None
            }
            Some(TokenType::Key | TokenType::Value) => Some(ctx),
        }
    }
}

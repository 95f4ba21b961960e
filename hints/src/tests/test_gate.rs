use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use prefs::{Context, Token, keys};

use crate::{ActivationGate, DEFAULT_ENABLE_SETTING, JSON_MODE, is_preferences_file};

fn key_ctx(parent: &str) -> Context {
    Context::key(Token::new("\"", 1), 1).with_parent(parent)
}

fn value_ctx(parent: &str) -> Context {
    Context::value(Token::new("\"", 1), 1).with_parent(parent)
}

fn open_gate() -> ActivationGate {
    ActivationGate::new(true, true)
}

#[test]
fn default_gate_waits_for_a_target_document() {
    let gate = ActivationGate::default();
    assert!(gate.hints_enabled());
    assert!(!gate.document_is_target());
    assert!(!gate.is_open());
    assert_eq!(gate.admit(JSON_MODE, Some(key_ctx(""))), None);
}

#[test]
fn both_flags_are_required() {
    for (enabled, target) in [(false, true), (true, false), (false, false)] {
        let gate = ActivationGate::new(enabled, target);
        assert_eq!(gate.admit(JSON_MODE, Some(key_ctx(""))), None);
    }
    assert!(open_gate().admit(JSON_MODE, Some(key_ctx(""))).is_some());
}

#[test]
fn only_structured_configuration_mode_is_admitted() {
    let gate = open_gate();
    assert_eq!(gate.admit("text/plain", Some(key_ctx(""))), None);
    assert_eq!(gate.admit("", Some(value_ctx(""))), None);
}

#[test]
fn missing_or_untyped_context_is_rejected() {
    let gate = open_gate();
    assert_eq!(gate.admit(JSON_MODE, None), None);
    assert_eq!(gate.admit(JSON_MODE, Some(Context::default())), None);
}

#[test]
fn key_hints_are_denied_under_free_form_parents() {
    let gate = open_gate();
    for parent in [keys::FILE_EXTENSIONS, keys::FILE_NAMES, keys::PATH] {
        assert_eq!(gate.admit(JSON_MODE, Some(key_ctx(parent))), None, "{parent}");
    }
    assert!(gate.admit(JSON_MODE, Some(key_ctx(keys::LANGUAGE))).is_some());
}

#[test]
fn value_hints_are_allowed_under_free_form_parents() {
    let gate = open_gate();
    let ctx = value_ctx(keys::FILE_EXTENSIONS).with_key("md");
    assert_eq!(gate.admit(JSON_MODE, Some(ctx.clone())), Some(ctx));
}

#[test]
fn enablement_is_read_from_the_preference_store() {
    let mut store: HashMap<String, bool> = HashMap::new();
    assert!(ActivationGate::from_store(&store, DEFAULT_ENABLE_SETTING).hints_enabled());

    store.insert(DEFAULT_ENABLE_SETTING.to_string(), false);
    let gate = ActivationGate::from_store(&store, DEFAULT_ENABLE_SETTING);
    assert!(!gate.hints_enabled());
    assert!(!gate.document_is_target());
}

#[test]
fn flags_set_on_another_thread_are_observed() {
    let gate = Arc::new(ActivationGate::new(false, false));
    let remote = Arc::clone(&gate);
    thread::spawn(move || {
        remote.set_hints_enabled(true);
        remote.set_document_is_target(true);
    })
    .join()
    .expect("notifier thread panicked");
    assert!(gate.is_open());
}

#[test]
fn preferences_file_is_matched_by_file_name() {
    let names = vec![".prefs.json".to_string(), "prefs.json".to_string()];
    assert!(is_preferences_file(Path::new("/home/u/.prefs.json"), &names));
    assert!(is_preferences_file(Path::new("prefs.json"), &names));
    assert!(!is_preferences_file(Path::new("/home/u/prefs.json.bak"), &names));
    assert!(!is_preferences_file(Path::new("/home/prefs.json/notes.txt"), &names));
    assert!(!is_preferences_file(Path::new("/"), &names));
}

use prefs::{Context, SchemaRegistry};
use tracing_subscriber::EnvFilter;

use crate::{ContextAnalyzer, LanguageInfo, StaticProviders};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const DEMO_PREFS: &str = r#"{
    "linting.prefer": { "type": "array", "description": "Lint providers to run, in order." },
    "linting.enabled": { "type": "boolean", "description": "Run linters on save." },
    "themes.theme": { "type": "string", "description": "Active color theme." },
    "fonts.fontSize": { "type": "string", "values": ["12px", "13px", "14px"] },
    "spaceUnits": { "type": "number", "values": [2, 4, 8] },
    "closeBrackets": { "type": "boolean", "values": ["yes", "no"] },
    "useTabChar": { "type": "boolean" },
    "closeTags": {
        "type": "object",
        "description": "Auto-close tag settings.",
        "keys": {
            "dontCloseTags": { "type": "array", "valueType": "string", "values": ["br", "img", "hr"] },
            "whenOpening": { "type": "boolean" }
        }
    },
    "internal.secret": { "type": "string", "excludeFromHints": true }
}"#;

/// Root keys of `DEMO_PREFS` in registration order.
pub const DEMO_ROOT_KEYS: [&str; 10] = [
    "language",
    "path",
    "linting.prefer",
    "linting.enabled",
    "themes.theme",
    "fonts.fontSize",
    "spaceUnits",
    "closeBrackets",
    "useTabChar",
    "closeTags",
];

pub fn demo_registry() -> SchemaRegistry {
    init_tracing();
    SchemaRegistry::from_json_str(DEMO_PREFS).expect("demo prefs should load")
}

pub fn demo_providers() -> StaticProviders {
    StaticProviders::new()
        .language(LanguageInfo::new("javascript").with_name("JavaScript"))
        .language(LanguageInfo::new("json").with_name("JSON"))
        .language(LanguageInfo::new("markdown"))
        .lint_providers("javascript", ["ESLint", "JSHint"])
        .lint_providers("json", ["JSONLint"])
        .theme("light-theme")
        .theme("dark-theme")
}

/// Analyzer that returns canned contexts regardless of the document.
#[derive(Debug, Clone, Default)]
pub struct FixedAnalyzer {
    /// Returned when nested analysis is allowed (availability checks).
    pub nested: Option<Context>,
    /// Returned when nested analysis is disabled (insertion).
    pub flat: Option<Context>,
}

impl FixedAnalyzer {
    pub fn new(ctx: Context) -> Self {
        Self {
            nested: Some(ctx.clone()),
            flat: Some(ctx),
        }
    }
}

impl ContextAnalyzer for FixedAnalyzer {
    fn resolve_context(&self, _source: &str, _cursor: u32, allow_nested: bool) -> Option<Context> {
        if allow_nested {
            self.nested.clone()
        } else {
            self.flat.clone()
        }
    }
}

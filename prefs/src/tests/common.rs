use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const DEMO_PREFS: &str = r#"{
    "linting.prefer": { "type": "array", "description": "Lint providers to run, in order." },
    "useTabChar": { "type": "boolean", "description": "Indent with tabs." },
    "spaceUnits": { "type": "number", "values": [2, 4, 8] },
    "closeTags": {
        "type": "object",
        "keys": {
            "dontCloseTags": { "type": "array", "valueType": "string", "values": ["br", "img"] },
            "whenOpening": { "type": "boolean" }
        }
    },
    "internal.secret": { "type": "string", "excludeFromHints": true },
    "language": { "description": "Overrides keyed by language id." },
    "bogus": 42
}"#;

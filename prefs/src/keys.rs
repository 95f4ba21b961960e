//! Preference ids with special meaning for completion.

/// Reserved root: per-language overrides, keyed by language id.
pub const LANGUAGE: &str = "language";
/// Reserved root: per-path overrides, keyed by glob.
pub const PATH: &str = "path";

/// Map from file extension to language id.
pub const FILE_EXTENSIONS: &str = "language.fileExtensions";
/// Map from file name to language id.
pub const FILE_NAMES: &str = "language.fileNames";

/// Ordered lint provider ids, usually set inside a `language` override.
pub const LINTING_PREFER: &str = "linting.prefer";
/// Active color theme.
pub const THEME: &str = "themes.theme";

use indexmap::IndexMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Ability key → glyph, in declaration order.
///
/// Keys must stay unique; `tests::test_no_duplicate_keys` guards this.
const ICON_ENTRIES: &[(&str, &str)] = &[
    ("peek", "👁️"),
    ("swap", "🔄"),
    ("shield", "🛡️"),
    ("steal", "🫳"),
    ("double_draw", "🃏"),
    ("discard", "🗑️"),
    ("reverse", "↩️"),
    ("skip", "⏭️"),
    ("freeze", "❄️"),
    ("burn", "🔥"),
    ("heal", "💚"),
    ("mirror", "🪞"),
    ("vortex", "🌀"),
    ("shuffle", "🔀"),
    ("lock", "🔒"),
    ("bomb", "💣"),
    ("wildcard", "✨"),
    ("gamble", "🎲"),
    ("curse", "💀"),
    ("boost", "⚡"),
    ("echo", "📣"),
    ("void", "🕳️"),
];

static ICON_INDEX: LazyLock<IndexMap<&'static str, &'static str>> =
    LazyLock::new(|| ICON_ENTRIES.iter().copied().collect());

/// Raised only by [`require_glyph`]; plain lookups return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("No glyph registered for ability '{0}'")]
    MissingKey(String),
}

/// Look up the glyph for an ability key.
///
/// Returns `None` for unknown keys; callers render "no glyph" in that case.
pub fn glyph_for(key: &str) -> Option<&'static str> {
    ICON_INDEX.get(key).copied()
}

/// Look up a glyph, falling back to `fallback` for unknown keys.
pub fn glyph_or<'a>(key: &str, fallback: &'a str) -> &'a str {
    glyph_for(key).unwrap_or(fallback)
}

/// Like [`glyph_for`], but turns a missing key into an [`IconError`] for `?` chains.
pub fn require_glyph(key: &str) -> Result<&'static str, IconError> {
    glyph_for(key).ok_or_else(|| IconError::MissingKey(key.to_string()))
}

/// All entries in declaration order.
pub fn icon_entries() -> &'static [(&'static str, &'static str)] {
    ICON_ENTRIES
}

/// Number of distinct ability keys.
pub fn icon_count() -> usize {
    ICON_INDEX.len()
}

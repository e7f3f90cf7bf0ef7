//! Default class names and event identifiers.

// ── Membership markers ──────────────────────────────────────────

/// Icons with this class render filled while the dark scheme is active.
pub const FILL_IF_DARK: &str = "ph-fill-if-dark";

/// Icons with this class render filled while the light scheme is active.
pub const FILL_IF_LIGHT: &str = "ph-fill-if-light";

// ── Presentation markers ────────────────────────────────────────

/// Phosphor outline glyph class.
pub const GLYPH_OUTLINE: &str = "ph";

/// Phosphor filled glyph class.
pub const GLYPH_FILLED: &str = "ph-fill";

// ── Environment ─────────────────────────────────────────────────

/// Media query that matches when the user prefers a dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Event fired on the media query list when its match state flips.
pub const THEME_CHANGE_EVENT: &str = "change";

/// Event htmx dispatches after swapping new content into the page.
pub const CONTENT_SWAP_EVENT: &str = "htmx:afterSwap";

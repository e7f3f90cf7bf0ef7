//! Color-scheme preference query.
//!
//! Requires a browser environment. Without one, or when `matchMedia` is
//! unavailable, the preference reads as light.
//!
//! TRADE-OFFS
//! ==========
//! The preference is queried fresh on every call. Swap handlers may run
//! after a theme change the page never saw, so a remembered value could be
//! stale.

use crate::consts::DARK_SCHEME_QUERY;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Whether the user currently prefers a dark color scheme.
pub fn detect_dark_preference() -> bool {
    matches_media(DARK_SCHEME_QUERY)
}

/// Evaluate a media query against the current window.
#[cfg(feature = "hydrate")]
pub fn matches_media(query: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(err) => {
            log::debug!("theme-fill: matchMedia({query}) failed: {err:?}");
            false
        }
    }
}

/// Evaluate a media query against the current window.
#[cfg(not(feature = "hydrate"))]
pub fn matches_media(_query: &str) -> bool {
    false
}

//! The synchronization pass.
//!
//! A pass is a pure function of the document's membership markers and the
//! `is_dark` flag. Nothing is remembered between passes, so any number of
//! theme-change and swap reactions can run in any order.

use crate::config::FillConfig;
use crate::host::IconHost;
use crate::marker::Membership;

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

/// Bring every marked icon's glyph class in line with the color scheme.
///
/// Icons with the `fill_if_dark` class get the filled glyph when `is_dark`
/// is set and the outline glyph otherwise; `fill_if_light` icons get the
/// reverse. Unmarked elements are not touched.
pub fn synchronize<H: IconHost>(host: &mut H, config: &FillConfig, is_dark: bool) {
    for membership in Membership::ALL {
        let glyph = membership.glyph(is_dark);
        let add = config.glyph_class(glyph);
        let remove = config.glyph_class(glyph.opposite());

        let icons = host.icons_with_class(config.membership_class(membership));
        for icon in &icons {
            host.add_class(icon, add);
            host.remove_class(icon, remove);
        }
        log::debug!(
            "theme-fill: {} {membership:?} icon(s) set to {glyph:?} (dark={is_dark})",
            icons.len()
        );
    }
}

//! Membership and presentation markers, and the policy linking them.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

/// Which color scheme renders an icon filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    FillIfDark,
    FillIfLight,
}

impl Membership {
    /// Every membership kind, in synchronization order.
    ///
    /// An icon carrying both markers ends up in the `FillIfLight` state.
    pub const ALL: [Membership; 2] = [Membership::FillIfDark, Membership::FillIfLight];

    /// Whether an icon of this kind is filled under the given scheme.
    #[must_use]
    pub fn is_filled(self, is_dark: bool) -> bool {
        match self {
            Membership::FillIfDark => is_dark,
            Membership::FillIfLight => !is_dark,
        }
    }

    /// The glyph an icon of this kind should show under the given scheme.
    #[must_use]
    pub fn glyph(self, is_dark: bool) -> Glyph {
        if self.is_filled(is_dark) {
            Glyph::Filled
        } else {
            Glyph::Outline
        }
    }
}

/// The rendered glyph variant. Exactly one is present on a synchronized icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Outline,
    Filled,
}

impl Glyph {
    #[must_use]
    pub fn opposite(self) -> Glyph {
        match self {
            Glyph::Outline => Glyph::Filled,
            Glyph::Filled => Glyph::Outline,
        }
    }
}

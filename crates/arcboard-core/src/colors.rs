//! Fixed drawing palette.
//!
//! The core treats colors as opaque hex tokens; the palette only exists so
//! shells can offer the same ten swatches and look names up.

/// A named palette swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    /// Display name (e.g., "Willow").
    pub name: &'static str,
    /// Hex token stored on shapes and arrows.
    pub hex: &'static str,
}

impl PaletteColor {
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }
}

/// The drawing palette, in toolbar order.
pub const PALETTE: &[PaletteColor] = &[
    PaletteColor::new("Spruce", "#7CB342"),
    PaletteColor::new("Willow", "#4ECDC4"),
    PaletteColor::new("Alert", "#FF6B6B"),
    PaletteColor::new("Magic", "#A78BFA"),
    PaletteColor::new("Gold", "#E8B931"),
    PaletteColor::new("Pink", "#F06292"),
    PaletteColor::new("Blue", "#42A5F5"),
    PaletteColor::new("Gray", "#78909C"),
    PaletteColor::new("Orange", "#FF8A65"),
    PaletteColor::new("Green", "#AED581"),
];

/// Ambient color of a fresh session (Willow).
pub const DEFAULT_COLOR: &str = "#4ECDC4";

/// Palette access.
pub struct Palette;

impl Palette {
    /// Get all swatches.
    pub fn all() -> &'static [PaletteColor] {
        PALETTE
    }

    /// Find a swatch by hex token (case-insensitive).
    pub fn by_hex(hex: &str) -> Option<&'static PaletteColor> {
        PALETTE.iter().find(|c| c.hex.eq_ignore_ascii_case(hex))
    }

    /// Find a swatch by display name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static PaletteColor> {
        PALETTE.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Check whether a token is one of the palette colors.
    pub fn contains(hex: &str) -> bool {
        Self::by_hex(hex).is_some()
    }
}

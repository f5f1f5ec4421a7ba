//! Fixed color palette.
//!
//! Terminals have no alpha channel, so translucent tints are flattened by
//! blending over a known background color.

use ratatui::style::Color;

/// Accent cyan used for symbols and connection lines.
pub const ACCENT: Rgb = Rgb::new(56, 189, 248);

/// Opacity of every drawn symbol.
pub const SYMBOL_OPACITY: f64 = 0.15;

/// Opacity of a connection line between two coincident particles.
pub const CONNECTION_OPACITY: f64 = 0.1;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a ratatui color.
    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Apply an opacity, producing a tint.
    pub fn with_alpha(self, alpha: f64) -> Tint {
        Tint { rgb: self, alpha }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// A color with an opacity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Tint {
    /// Flatten this tint over an opaque background.
    pub fn over(self, background: Rgb) -> Rgb {
        let alpha = self.alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = f64::from(bg) + (f64::from(fg) - f64::from(bg)) * alpha;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.rgb.r, background.r),
            mix(self.rgb.g, background.g),
            mix(self.rgb.b, background.b),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let bg = Rgb::new(10, 20, 30);
        assert_eq!(ACCENT.with_alpha(0.0).over(bg), bg);
        assert_eq!(ACCENT.with_alpha(1.0).over(bg), ACCENT);
    }

    #[test]
    fn test_blend_symbol_opacity() {
        let black = Rgb::new(0, 0, 0);
        // 0.15 * (56, 189, 248) rounded
        assert_eq!(
            ACCENT.with_alpha(SYMBOL_OPACITY).over(black),
            Rgb::new(8, 28, 37)
        );
    }

    #[test]
    fn test_alpha_is_clamped() {
        let bg = Rgb::new(0, 0, 0);
        assert_eq!(ACCENT.with_alpha(3.0).over(bg), ACCENT);
        assert_eq!(ACCENT.with_alpha(-1.0).over(bg), bg);
    }
}

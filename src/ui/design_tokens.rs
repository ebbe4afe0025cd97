// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the visual constants of the floating link.

## Organization

- **Palette**: Colors, including the focus ring and shadow tints
- **Radius**: Corner rounding
- **Shadow**: Drop shadow definitions
- **Focus**: Keyboard focus ring geometry
- **Motion**: Hover/active lift transition
- **Breakpoint**: Viewport widths that switch sizing rules
- **Sizing**: Fixed-scale widths
- **Layer**: Stacking order

## Examples

```
use floating_image_link::ui::design_tokens::{palette, radius, shadow};

assert_eq!(palette::FOCUS_RING.to_string(), "rgba(0, 0, 0, 0.5)");
assert_eq!(shadow::FLOATING.to_string(), "0 8px 24px rgba(0, 0, 0, 0.15)");
assert_eq!(radius::LG, 12);
```
"#]

use std::fmt;

// ============================================================================
// Value Types
// ============================================================================

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Blends this color over an opaque `backdrop`.
    #[must_use]
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = f32::from(fg) * self.a + f32::from(bg) * (1.0 - self.a);
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgba::rgb(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }

    /// WCAG relative luminance, ignoring alpha.
    #[must_use]
    pub fn relative_luminance(self) -> f32 {
        let channel = |c: u8| -> f32 {
            let c = f32::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// WCAG contrast ratio between two opaque colors (1.0 to 21.0).
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f32 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Formats a pixel length, writing zero without a unit.
#[must_use]
pub fn px(value: i32) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Rgba;

    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Keyboard focus outline.
    pub const FOCUS_RING: Rgba = BLACK.with_alpha(0.5);

    /// Drop shadow tint under the image.
    pub const SHADOW: Rgba = BLACK.with_alpha(0.15);
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: i32 = 0;
    pub const LG: i32 = 12;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{palette, px, Rgba};
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Shadow {
        pub offset_x: i32,
        pub offset_y: i32,
        pub blur_radius: i32,
        pub color: Rgba,
    }

    impl fmt::Display for Shadow {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "{} {} {} {}",
                px(self.offset_x),
                px(self.offset_y),
                px(self.blur_radius),
                self.color
            )
        }
    }

    pub const FLOATING: Shadow = Shadow {
        offset_x: 0,
        offset_y: 8,
        blur_radius: 24,
        color: palette::SHADOW,
    };
}

// ============================================================================
// Focus Ring
// ============================================================================

pub mod focus {
    pub const OUTLINE_WIDTH: i32 = 3;
    pub const OUTLINE_OFFSET: i32 = 4;

    /// WCAG 1.4.11 non-text contrast minimum.
    pub const MIN_CONTRAST: f32 = 3.0;
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    pub const DURATION_MS: u32 = 160;
    pub const EASING: &str = "ease";

    /// Upward travel on hover, in pixels.
    pub const LIFT: i32 = 2;
}

// ============================================================================
// Breakpoints
// ============================================================================

pub mod breakpoint {
    /// Viewport width (px) from which the fixed-scale image width applies.
    pub const WIDE: u32 = 768;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Image width on wide viewports.
    pub const WIDE_IMAGE_WIDTH: &str = "min(22vw, 240px)";

    /// Cap keeping the image inside its container.
    pub const MAX_IMAGE_WIDTH: &str = "100%";
}

// ============================================================================
// Layers
// ============================================================================

pub mod layer {
    /// Stacking order of the floating link above page content.
    pub const FLOATING: i32 = 9;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(radius::LG > radius::NONE);
    assert!(focus::OUTLINE_WIDTH > 0);
    assert!(focus::OUTLINE_OFFSET >= 0);
    assert!(motion::DURATION_MS > 0);
    assert!(motion::LIFT > 0);
    assert!(breakpoint::WIDE > 0);
    assert!(palette::FOCUS_RING.a > 0.0 && palette::FOCUS_RING.a <= 1.0);
    assert!(palette::SHADOW.a > 0.0 && palette::SHADOW.a < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_renders_as_css_function() {
        assert_eq!(palette::SHADOW.to_string(), "rgba(0, 0, 0, 0.15)");
        assert_eq!(palette::WHITE.to_string(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn px_omits_unit_for_zero() {
        assert_eq!(px(0), "0");
        assert_eq!(px(-2), "-2px");
        assert_eq!(px(12), "12px");
    }

    #[test]
    fn contrast_of_black_on_white_is_maximal() {
        let ratio = contrast_ratio(palette::BLACK, palette::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
        assert!((contrast_ratio(palette::WHITE, palette::BLACK) - ratio).abs() < f32::EPSILON);
    }

    #[test]
    fn focus_ring_meets_non_text_contrast_on_white() {
        let ring = palette::FOCUS_RING.over(palette::WHITE);
        assert!(contrast_ratio(ring, palette::WHITE) >= focus::MIN_CONTRAST);
    }

    #[test]
    fn compositing_half_black_over_white_is_mid_gray() {
        let gray = palette::FOCUS_RING.over(palette::WHITE);
        assert_eq!((gray.r, gray.g, gray.b), (128, 128, 128));
        assert_eq!(gray.a, 1.0);
    }
}

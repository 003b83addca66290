//! # Theming and style flags
//!
//! Colors are not global constants. Each slider carries a `SliderTheme`,
//! given at construction through `RangeSliderArgs::theme`:
//!
//! ```rust
//! use ranger_core::Color;
//! use ranger_ui::*;
//!
//! let dark = SliderTheme {
//!     track: Color::from_hex("#333333"),
//!     range: Color::from_hex("#34AF82"),
//!     range_outline: Color::from_hex("#34AF82"),
//!     ..SliderTheme::default()
//! };
//!
//! let slider = RangeSlider::new(RangeSliderArgs::default().theme(dark));
//! assert_eq!(slider.theme().track, Color::from_hex("#333333"));
//! ```

use bitflags::bitflags;
use ranger_core::Color;

bitflags! {
    /// Style flags passed through from construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SliderStyle: u32 {
        /// Track laid out left to right. The only supported orientation.
        const HORIZONTAL = 1 << 0;
        /// Host should not draw a native border around the control.
        const NO_BORDER = 1 << 1;
    }
}

impl Default for SliderStyle {
    fn default() -> Self {
        SliderStyle::HORIZONTAL
    }
}

/// Colors for one visual state of a thumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbPalette {
    pub fill: Color,
    pub shadow: Color,
    /// Outline stroked around both glyph polygons.
    pub outline: Color,
}

impl ThumbPalette {
    /// Palette whose outline matches the fill, so glyphs read as solid.
    pub const fn solid(fill: Color, shadow: Color) -> Self {
        Self {
            fill,
            shadow,
            outline: fill,
        }
    }
}

/// Immutable color configuration for a range slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderTheme {
    /// Track background.
    pub track: Color,
    /// Track outline. Also used for the selected range while disabled.
    pub track_outline: Color,
    /// Selected range fill while enabled.
    pub range: Color,
    pub range_outline: Color,

    pub thumb_normal: ThumbPalette,
    pub thumb_hovered: ThumbPalette,
    pub thumb_disabled: ThumbPalette,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self {
            track: Color::from_rgb(231, 234, 234),
            track_outline: Color::from_rgb(14, 14, 14),
            range: Color::from_rgb(0, 120, 215),
            range_outline: Color::from_rgb(0, 120, 215),

            thumb_normal: ThumbPalette::solid(
                Color::from_rgb(0, 120, 215),
                Color::from_rgb(120, 180, 228),
            ),
            thumb_hovered: ThumbPalette::solid(
                Color::from_rgb(100, 100, 100),
                Color::from_rgb(132, 132, 132),
            ),
            thumb_disabled: ThumbPalette::solid(
                Color::from_rgb(204, 204, 204),
                Color::from_rgb(222, 222, 222),
            ),
        }
    }
}

impl SliderTheme {
    /// Palette for a thumb. Disabled wins over hover.
    pub fn thumb_palette(&self, enabled: bool, hovered: bool) -> ThumbPalette {
        if !enabled {
            self.thumb_disabled
        } else if hovered {
            self.thumb_hovered
        } else {
            self.thumb_normal
        }
    }

    /// (fill, outline) of the selected range.
    pub fn range_colors(&self, enabled: bool) -> (Color, Color) {
        if enabled {
            (self.range, self.range_outline)
        } else {
            (self.track_outline, self.track_outline)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_palette_wins_over_hover() {
        let theme = SliderTheme::default();
        assert_eq!(theme.thumb_palette(false, true), theme.thumb_disabled);
        assert_eq!(theme.thumb_palette(true, true), theme.thumb_hovered);
        assert_eq!(theme.thumb_palette(true, false), theme.thumb_normal);
    }

    #[test]
    fn disabled_range_uses_outline_color() {
        let theme = SliderTheme::default();
        assert_eq!(theme.range_colors(false), (theme.track_outline, theme.track_outline));
        assert_eq!(theme.range_colors(true), (theme.range, theme.range_outline));
    }

    #[test]
    fn default_style_is_horizontal() {
        assert!(SliderStyle::default().contains(SliderStyle::HORIZONTAL));
        assert!(!SliderStyle::default().contains(SliderStyle::NO_BORDER));
    }
}

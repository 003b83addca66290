use ranger_core::{Size, Surface, Vec2};

use crate::domain::{Domain, fraction_to_value, value_to_fraction};
use crate::style::SliderTheme;

pub const THUMB_SIZE: Size = Size {
    width: 10.0,
    height: 18.0,
};

/// Thumb body, local coordinates with the origin at the glyph's top-left.
const THUMB_POLY: [Vec2; 5] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 13.0),
    Vec2::new(5.0, 18.0),
    Vec2::new(10.0, 13.0),
    Vec2::new(10.0, 0.0),
];

/// Shadow under the body's tip.
const THUMB_SHADOW_POLY: [Vec2; 4] = [
    Vec2::new(0.0, 14.0),
    Vec2::new(4.0, 18.0),
    Vec2::new(6.0, 18.0),
    Vec2::new(10.0, 14.0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThumbKind {
    Low,
    High,
}

/// Geometry a thumb is laid out against. Built by the slider from the host's
/// current size on every call, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMetrics {
    pub size: Size,
    pub border_width: f32,
    pub domain: Domain,
}

/// One boundary of the selected range.
#[derive(Clone, Debug, PartialEq)]
pub struct Thumb {
    kind: ThumbKind,
    value: f32,
    hovered: bool,
    size: Size,
}

impl Thumb {
    pub fn new(kind: ThumbKind, value: f32) -> Self {
        Self {
            kind,
            value,
            hovered: false,
            size: THUMB_SIZE,
        }
    }

    pub fn kind(&self) -> ThumbKind {
        self.kind
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    fn half_width(&self) -> f32 {
        self.size.width / 2.0
    }

    /// Leftmost pixel the thumb's center may occupy.
    pub fn usable_min(&self, m: &TrackMetrics) -> f32 {
        m.border_width + self.half_width()
    }

    /// Rightmost pixel the thumb's center may occupy.
    pub fn usable_max(&self, m: &TrackMetrics) -> f32 {
        m.size.width - m.border_width - self.half_width()
    }

    /// Center of the thumb in widget coordinates.
    pub fn position(&self, m: &TrackMetrics) -> Vec2 {
        let fraction = m.domain.fraction_of(self.value);
        Vec2 {
            x: fraction_to_value(fraction, self.usable_min(m), self.usable_max(m)),
            y: m.size.height / 2.0 + 1.0,
        }
    }

    /// Moves the thumb's center to `point.x`, clamped into the usable span,
    /// and recomputes the value. Only the x coordinate matters.
    pub fn set_position(&mut self, point: Vec2, m: &TrackMetrics) {
        let (lo, hi) = (self.usable_min(m), self.usable_max(m));
        let x = point.x.min(hi).max(lo);
        let fraction = value_to_fraction(x, lo, hi);
        self.value = m.domain.clamp(m.domain.value_at(fraction));
    }

    /// Whether `point` lies in the thumb's horizontal hit band. The result is
    /// also stored as the hover flag.
    pub fn hit_test(&mut self, point: Vec2, m: &TrackMetrics) -> bool {
        let x = self.position(m).x;
        let half = self.half_width();
        self.hovered = point.x >= x - half && point.x <= x + half;
        self.hovered
    }

    pub fn render(
        &self,
        surface: &mut dyn Surface,
        m: &TrackMetrics,
        enabled: bool,
        theme: &SliderTheme,
    ) {
        let palette = theme.thumb_palette(enabled, self.hovered);
        let center = self.position(m);
        let origin = Vec2 {
            x: center.x - self.size.width / 2.0,
            y: center.y - self.size.height / 2.0,
        };

        surface.draw_polygon(&THUMB_SHADOW_POLY, origin, palette.shadow, palette.shadow);
        surface.draw_polygon(&THUMB_POLY, origin, palette.fill, palette.outline);
    }
}

use std::rc::Rc;

use ranger_core::input::{PointerButton, PointerEvent, PointerEventKind};
use ranger_core::{Host, Rect, Size, Surface, Vec2, Widget, WidgetId};

use crate::domain::Domain;
use crate::style::{SliderStyle, SliderTheme};
use crate::thumb::{Thumb, ThumbKind, TrackMetrics};

pub const BORDER_WIDTH: f32 = 8.0;
pub const TRACK_HEIGHT: f32 = 12.0;
pub const MIN_SIZE: Size = Size {
    width: 50.0,
    height: 26.0,
};

/// Called with `(low, high)` after a drag moved a thumb.
pub type CallbackRange = Rc<dyn Fn(f32, f32)>;

/// Construction arguments, passed through to the host where they concern it.
#[derive(Clone, Debug)]
pub struct RangeSliderArgs {
    pub id: WidgetId,
    pub origin: Vec2,
    pub size: Size,
    pub style: SliderStyle,
    pub name: String,
    pub domain: Domain,
    pub theme: SliderTheme,
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            id: 0,
            origin: Vec2::default(),
            size: MIN_SIZE,
            style: SliderStyle::default(),
            name: "rangeSlider".to_string(),
            domain: Domain::default(),
            theme: SliderTheme::default(),
        }
    }
}

impl RangeSliderArgs {
    pub fn id(mut self, id: WidgetId) -> Self {
        self.id = id;
        self
    }
    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2 { x, y };
        self
    }
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Size { width, height };
        self
    }
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }
    pub fn theme(mut self, theme: SliderTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// Horizontal slider selecting a sub-range of a `Domain` with two thumbs.
///
/// The slider owns both thumbs and the drag state. Everything that depends on
/// the widget's size is recomputed from `Host::size` on each call, so a
/// resize only needs a repaint.
pub struct RangeSlider {
    id: WidgetId,
    name: String,
    style: SliderStyle,
    origin: Vec2,
    size: Size,
    domain: Domain,
    theme: SliderTheme,
    border_width: f32,
    low: Thumb,
    high: Thumb,
    selected: Option<ThumbKind>,
    on_change: Option<CallbackRange>,
}

impl std::fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("low", &self.low.value())
            .field("high", &self.high.value())
            .field("selected", &self.selected)
            .finish()
    }
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(RangeSliderArgs::default())
    }
}

impl RangeSlider {
    pub fn new(args: RangeSliderArgs) -> Self {
        let size = args.size.max(MIN_SIZE);
        if size != args.size {
            log::warn!(
                "range slider '{}': requested size {}x{} raised to {}x{}",
                args.name,
                args.size.width,
                args.size.height,
                size.width,
                size.height
            );
        }
        let domain = args.domain;
        Self {
            id: args.id,
            name: args.name,
            style: args.style,
            origin: args.origin,
            size,
            domain,
            theme: args.theme,
            border_width: BORDER_WIDTH,
            low: Thumb::new(ThumbKind::Low, domain.min() as f32),
            high: Thumb::new(ThumbKind::High, domain.max() as f32),
            selected: None,
            on_change: None,
        }
    }

    pub fn on_change(mut self, f: impl Fn(f32, f32) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn style(&self) -> SliderStyle {
        self.style
    }
    /// Initial placement inside the parent, as requested at construction.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
    /// Initial size, already raised to `MIN_SIZE`.
    pub fn initial_size(&self) -> Size {
        self.size
    }
    pub fn theme(&self) -> &SliderTheme {
        &self.theme
    }
    pub fn border_width(&self) -> f32 {
        self.border_width
    }
    pub fn domain(&self) -> Domain {
        self.domain
    }
    pub fn min(&self) -> i32 {
        self.domain.min()
    }
    pub fn max(&self) -> i32 {
        self.domain.max()
    }
    pub fn low(&self) -> &Thumb {
        &self.low
    }
    pub fn high(&self) -> &Thumb {
        &self.high
    }
    pub fn thumb(&self, kind: ThumbKind) -> &Thumb {
        match kind {
            ThumbKind::Low => &self.low,
            ThumbKind::High => &self.high,
        }
    }
    /// `(low, high)` values.
    pub fn values(&self) -> (f32, f32) {
        (self.low.value(), self.high.value())
    }
    /// Thumb currently being dragged.
    pub fn selected(&self) -> Option<ThumbKind> {
        self.selected
    }

    /// Sets both values programmatically. `low` is clamped into the domain,
    /// `high` into `[low, max]`. A NaN keeps that thumb's current value.
    /// Does not notify `on_change`; the embedder schedules the repaint.
    pub fn set_values(&mut self, low: f32, high: f32) {
        let or_current = |v: f32, current: f32| if v.is_nan() { current } else { v };
        let low = self.domain.clamp(or_current(low, self.low.value()));
        let high = self
            .domain
            .clamp(or_current(high, self.high.value()))
            .max(low);
        self.low.set_value(low);
        self.high.set_value(high);
    }

    pub fn metrics(&self, size: Size) -> TrackMetrics {
        TrackMetrics {
            size,
            border_width: self.border_width,
            domain: self.domain,
        }
    }

    fn thumb_mut(&mut self, kind: ThumbKind) -> &mut Thumb {
        match kind {
            ThumbKind::Low => &mut self.low,
            ThumbKind::High => &mut self.high,
        }
    }

    fn pointer_down(&mut self, point: Vec2, host: &mut dyn Host) {
        if !host.is_enabled() {
            return;
        }
        let m = self.metrics(host.size());
        // Low wins when both bands overlap.
        self.selected = if self.low.hit_test(point, &m) {
            Some(ThumbKind::Low)
        } else if self.high.hit_test(point, &m) {
            Some(ThumbKind::High)
        } else {
            None
        };
        if let Some(kind) = self.selected {
            log::debug!("'{}': drag started on {kind:?} thumb", self.name);
        }
        host.capture_pointer();
        host.request_repaint();
    }

    fn pointer_move(&mut self, point: Vec2, host: &mut dyn Host) {
        if !host.is_enabled() {
            return;
        }
        let m = self.metrics(host.size());

        let Some(kind) = self.selected else {
            let low_before = self.low.is_hovered();
            let high_before = self.high.is_hovered();
            let low_now = self.low.hit_test(point, &m);
            let high_now = self.high.hit_test(point, &m);
            if low_before != low_now || high_before != high_now {
                host.request_repaint();
            }
            return;
        };

        // Centers are compared, with the dragged thumb's half width as margin.
        let half = self.thumb(kind).size().width / 2.0;
        let crosses = match kind {
            ThumbKind::Low => point.x + half > self.high.position(&m).x,
            ThumbKind::High => point.x - half < self.low.position(&m).x,
        };

        if crosses {
            log::trace!("'{}': {kind:?} thumb move to x={} rejected", self.name, point.x);
        } else {
            let before = self.thumb(kind).value();
            self.thumb_mut(kind).set_position(point, &m);

            // Float rounding must never let the thumbs swap.
            let (low, high) = self.values();
            match kind {
                ThumbKind::Low if low > high => self.low.set_value(high),
                ThumbKind::High if high < low => self.high.set_value(low),
                _ => {}
            }

            if self.thumb(kind).value() != before
                && let Some(cb) = &self.on_change
            {
                let (low, high) = self.values();
                cb(low, high);
            }
        }
        host.request_repaint();
    }

    fn pointer_up(&mut self, host: &mut dyn Host) {
        if !host.is_enabled() {
            return;
        }
        if let Some(kind) = self.selected.take() {
            log::debug!(
                "'{}': drag on {kind:?} thumb ended at {:?}",
                self.name,
                self.values()
            );
        }
        if host.has_capture() {
            host.release_pointer();
        }
    }

    fn pointer_leave(&mut self, host: &mut dyn Host) {
        if !host.is_enabled() {
            return;
        }
        self.low.set_hovered(false);
        self.high.set_hovered(false);
        host.request_repaint();
    }
}

impl Widget for RangeSlider {
    fn handle_pointer_event(&mut self, event: &PointerEvent, host: &mut dyn Host) {
        match event.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                self.pointer_down(event.position, host)
            }
            PointerEventKind::Up(PointerButton::Primary) => self.pointer_up(host),
            PointerEventKind::Move => self.pointer_move(event.position, host),
            PointerEventKind::Leave => self.pointer_leave(host),
            // Capture loss is acknowledged only. The drag ends on the next up.
            PointerEventKind::Cancel => {
                log::debug!("'{}': pointer capture lost", self.name);
            }
            PointerEventKind::Enter | PointerEventKind::Down(_) | PointerEventKind::Up(_) => {}
        }
    }

    fn handle_resize(&mut self, _size: Size, host: &mut dyn Host) {
        host.request_repaint();
    }

    fn render(&self, surface: &mut dyn Surface, host: &dyn Host) {
        surface.clear(host.background_color());

        let size = host.size();
        let (w, h) = (size.width, size.height);
        let border = self.border_width;
        let enabled = host.is_enabled();

        surface.draw_rect(
            Rect {
                x: border,
                y: (h - TRACK_HEIGHT) / 2.0,
                w: w - 2.0 * border,
                h: TRACK_HEIGHT,
            },
            self.theme.track,
            self.theme.track_outline,
        );

        let m = self.metrics(size);
        let low_x = self.low.position(&m).x;
        let high_x = self.high.position(&m).x;
        let (fill, outline) = self.theme.range_colors(enabled);
        surface.draw_rect(
            Rect {
                x: low_x,
                y: h / 2.0 - TRACK_HEIGHT / 4.0,
                w: high_x - low_x,
                h: TRACK_HEIGHT / 2.0,
            },
            fill,
            outline,
        );

        self.low.render(surface, &m, enabled, &self.theme);
        self.high.render(surface, &m, enabled, &self.theme);
    }

    fn min_size(&self) -> Size {
        MIN_SIZE
    }
}

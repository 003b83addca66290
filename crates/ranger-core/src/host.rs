use crate::{Color, Size};

/// Services a widget needs from whatever embeds it.
///
/// Queries (`size`, `is_enabled`, `background_color`) are answered from the
/// host's current state; requests (`request_repaint`, pointer capture) are
/// advisory and may be merged or ignored.
pub trait Host {
    fn size(&self) -> Size;
    fn is_enabled(&self) -> bool;
    fn background_color(&self) -> Color;

    /// Marks the widget dirty. Several requests before the next paint
    /// produce a single paint.
    fn request_repaint(&mut self);

    /// Routes subsequent pointer events to this widget even when the pointer
    /// leaves its bounds.
    fn capture_pointer(&mut self);
    fn release_pointer(&mut self);
    fn has_capture(&self) -> bool;
}

/// In-memory host without a native window behind it.
///
/// Used by tests and by `ranger-platform`'s shell. It records requests
/// instead of acting on them.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    pub size: Size,
    pub enabled: bool,
    pub background: Color,
    dirty: bool,
    repaint_requests: u64,
    captured: bool,
}

impl HeadlessHost {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            enabled: true,
            background: Color::from_rgb(240, 240, 240),
            dirty: false,
            repaint_requests: 0,
            captured: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Consumes the pending repaint, if any.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Total requests seen so far, before coalescing.
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    /// Drops capture on the host side, as when another window grabs the
    /// pointer. Returns whether capture was held.
    pub fn lose_capture(&mut self) -> bool {
        std::mem::take(&mut self.captured)
    }
}

impl Host for HeadlessHost {
    fn size(&self) -> Size {
        self.size
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn background_color(&self) -> Color {
        self.background
    }

    fn request_repaint(&mut self) {
        self.repaint_requests += 1;
        self.dirty = true;
    }

    fn capture_pointer(&mut self) {
        if !self.captured {
            log::debug!("pointer captured");
        }
        self.captured = true;
    }

    fn release_pointer(&mut self) {
        if self.captured {
            log::debug!("pointer released");
        }
        self.captured = false;
    }

    fn has_capture(&self) -> bool {
        self.captured
    }
}

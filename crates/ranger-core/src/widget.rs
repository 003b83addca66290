use crate::input::PointerEvent;
use crate::{Host, Size, Surface};

/// Capability interface a control exposes to its host.
///
/// Hosts own the native window and the event loop; they translate their
/// events into `PointerEvent`s in widget-local coordinates and forward them
/// here. Rendering only reads state.
pub trait Widget {
    fn handle_pointer_event(&mut self, event: &PointerEvent, host: &mut dyn Host);

    /// Called after the host changed the widget's size. `host.size()`
    /// already reports the new value.
    fn handle_resize(&mut self, size: Size, host: &mut dyn Host);

    fn render(&self, surface: &mut dyn Surface, host: &dyn Host);

    /// Smallest size the widget can be laid out at.
    fn min_size(&self) -> Size {
        Size::default()
    }
}

//! Headless window shell.
//!
//! `Window` plays the part of a native toolkit window hosting a single
//! widget: it turns raw cursor/button input in window coordinates into
//! widget-local `PointerEvent`s, synthesizes enter/leave, honours pointer
//! capture, and paints at most one `Scene` per batch of repaint requests.

use ranger_core::input::{PointerButton, PointerEvent, PointerEventKind};
use ranger_core::{HeadlessHost, Host, Rect, Scene, Size, Vec2, Widget};

/// Raw input as a windowing backend reports it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowEvent {
    /// Cursor moved, position in window coordinates.
    CursorMoved { position: Vec2 },
    /// Cursor left the window entirely.
    CursorLeft,
    MouseInput { pressed: bool, button: PointerButton },
    /// The widget was laid out at a new size.
    Resized(Size),
    /// Another window grabbed the pointer.
    CaptureLost,
    Enabled(bool),
}

pub struct Window<W: Widget> {
    widget: W,
    host: HeadlessHost,
    origin: Vec2,
    mouse_pos: Vec2,
    hovering: bool,
    /// A primary press reached the enabled widget and its release has not.
    primary_down: bool,
    /// The primary release arrived while disabled, so the widget ignored it.
    stale_gesture: bool,
    frames: u64,
}

impl<W: Widget> Window<W> {
    /// Places `widget` at `bounds`, raising the size to the widget's minimum.
    /// The first frame is always painted.
    pub fn new(widget: W, bounds: Rect) -> Self {
        let size = bounds.size().max(widget.min_size());
        let mut host = HeadlessHost::new(size);
        host.request_repaint();
        Self {
            widget,
            host,
            origin: bounds.origin(),
            mouse_pos: Vec2::default(),
            hovering: false,
            primary_down: false,
            stale_gesture: false,
            frames: 0,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access for programmatic changes. Call `request_repaint`
    /// afterwards if the change is visible.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.host.size())
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn has_capture(&self) -> bool {
        self.host.has_capture()
    }

    /// Number of frames painted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn request_repaint(&mut self) {
        self.host.request_repaint();
    }

    fn local(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x - self.origin.x,
            y: p.y - self.origin.y,
        }
    }

    fn dispatch(&mut self, event: PointerEventKind) {
        let pe = PointerEvent::mouse(event, self.local(self.mouse_pos));
        self.widget.handle_pointer_event(&pe, &mut self.host);
    }

    pub fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position } => {
                self.mouse_pos = position;

                // Enter/Leave
                let inside = self.bounds().contains(position);
                if inside != self.hovering {
                    self.hovering = inside;
                    self.dispatch(if inside {
                        PointerEventKind::Enter
                    } else {
                        PointerEventKind::Leave
                    });
                }

                // Move delivery (captured first)
                if self.host.has_capture() || inside {
                    self.dispatch(PointerEventKind::Move);
                }
            }
            WindowEvent::CursorLeft => {
                if self.hovering {
                    self.hovering = false;
                    self.dispatch(PointerEventKind::Leave);
                }
            }
            WindowEvent::MouseInput {
                pressed: true,
                button,
            } => {
                if self.hovering {
                    if button == PointerButton::Primary && self.host.enabled {
                        self.primary_down = true;
                    }
                    self.dispatch(PointerEventKind::Down(button));
                }
            }
            WindowEvent::MouseInput {
                pressed: false,
                button: PointerButton::Primary,
            } => {
                // The gesture ends here wherever the pointer is.
                self.dispatch(PointerEventKind::Up(PointerButton::Primary));
                if std::mem::take(&mut self.primary_down) && !self.host.enabled {
                    self.stale_gesture = true;
                }
                // Capture never outlives the primary button.
                if self.host.has_capture() {
                    log::debug!("releasing capture the widget kept after button up");
                    self.host.release_pointer();
                }
            }
            WindowEvent::MouseInput {
                pressed: false,
                button,
            } => {
                if self.host.has_capture() || self.hovering {
                    self.dispatch(PointerEventKind::Up(button));
                }
            }
            WindowEvent::Resized(size) => {
                let size = size.max(self.widget.min_size());
                self.host.size = size;
                self.widget.handle_resize(size, &mut self.host);
            }
            WindowEvent::CaptureLost => {
                if self.host.lose_capture() {
                    self.dispatch(PointerEventKind::Cancel);
                }
            }
            WindowEvent::Enabled(enabled) => {
                if self.host.enabled != enabled {
                    self.host.enabled = enabled;
                    self.host.request_repaint();
                }
                // A gesture released while disabled is finished now.
                if enabled && std::mem::take(&mut self.stale_gesture) {
                    log::debug!("ending the gesture released while disabled");
                    self.dispatch(PointerEventKind::Cancel);
                    self.dispatch(PointerEventKind::Up(PointerButton::Primary));
                }
            }
        }
    }

    /// Paints the widget if a repaint is pending.
    pub fn frame(&mut self) -> Option<Scene> {
        if !self.host.take_repaint() {
            return None;
        }
        let mut scene = Scene::new();
        self.widget.render(&mut scene, &self.host);
        self.frames += 1;
        log::trace!(
            "frame {}: {} nodes, bounds {:?}",
            self.frames,
            scene.nodes.len(),
            scene.bounds()
        );
        Some(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranger_ui::{RangeSlider, RangeSliderArgs, ThumbKind};

    fn window() -> Window<RangeSlider> {
        let slider = RangeSlider::new(RangeSliderArgs::default().size(200.0, 26.0));
        Window::new(
            slider,
            Rect {
                x: 100.0,
                y: 50.0,
                w: 200.0,
                h: 26.0,
            },
        )
    }

    fn move_to(w: &mut Window<RangeSlider>, x: f32, y: f32) {
        w.handle_event(WindowEvent::CursorMoved {
            position: Vec2::new(x, y),
        });
    }

    fn press(w: &mut Window<RangeSlider>, pressed: bool) {
        w.handle_event(WindowEvent::MouseInput {
            pressed,
            button: PointerButton::Primary,
        });
    }

    #[test]
    fn first_frame_is_painted_once() {
        let mut w = window();
        assert!(w.frame().is_some());
        assert!(w.frame().is_none());
        assert_eq!(w.frames(), 1);
    }

    #[test]
    fn minimum_size_is_enforced() {
        let slider = RangeSlider::default();
        let mut w = Window::new(
            slider,
            Rect {
                x: 0.0,
                y: 0.0,
                w: 10.0,
                h: 10.0,
            },
        );
        assert_eq!(w.bounds().size(), Size::new(50.0, 26.0));

        w.handle_event(WindowEvent::Resized(Size::new(20.0, 100.0)));
        assert_eq!(w.host().size(), Size::new(50.0, 100.0));
    }

    #[test]
    fn enter_and_leave_are_synthesized() {
        let mut w = window();
        w.frame();

        // over the low thumb, translated into local coordinates
        move_to(&mut w, 113.0, 64.0);
        assert!(w.is_hovering());
        assert!(w.widget().low().is_hovered());
        assert!(w.frame().is_some());

        move_to(&mut w, 50.0, 64.0);
        assert!(!w.is_hovering());
        assert!(!w.widget().low().is_hovered());
        assert!(w.frame().is_some());
    }

    #[test]
    fn captured_drag_continues_outside_bounds() {
        let mut w = window();
        move_to(&mut w, 287.0, 64.0);
        press(&mut w, true);
        assert!(w.has_capture());
        assert_eq!(w.widget().selected(), Some(ThumbKind::High));

        // pointer leaves the widget but the drag keeps tracking it
        move_to(&mut w, 200.0, 300.0);
        assert!(!w.is_hovering());
        assert_eq!(w.widget().high().value(), 5000.0);

        press(&mut w, false);
        assert!(!w.has_capture());
        assert_eq!(w.widget().selected(), None);

        // no capture: moves outside are not delivered
        move_to(&mut w, 150.0, 300.0);
        assert_eq!(w.widget().high().value(), 5000.0);
    }

    #[test]
    fn press_outside_is_not_delivered() {
        let mut w = window();
        move_to(&mut w, 10.0, 10.0);
        press(&mut w, true);
        assert!(!w.has_capture());
    }

    #[test]
    fn capture_loss_is_forwarded() {
        let mut w = window();
        move_to(&mut w, 113.0, 64.0);
        press(&mut w, true);
        assert!(w.has_capture());

        w.handle_event(WindowEvent::CaptureLost);
        assert!(!w.has_capture());
        // the widget only acknowledges; the drag ends with the button
        assert_eq!(w.widget().selected(), Some(ThumbKind::Low));

        press(&mut w, false);
        assert_eq!(w.widget().selected(), None);
    }

    #[test]
    fn release_outside_after_capture_loss_ends_drag() {
        let mut w = window();
        move_to(&mut w, 113.0, 64.0);
        press(&mut w, true);
        w.handle_event(WindowEvent::CaptureLost);

        move_to(&mut w, 10.0, 300.0);
        press(&mut w, false);
        assert_eq!(w.widget().selected(), None);

        // plain hover must not drag anything
        move_to(&mut w, 200.0, 64.0);
        assert_eq!(w.widget().values(), (0.0, 10000.0));
    }

    #[test]
    fn release_while_disabled_ends_drag_on_enable() {
        let mut w = window();
        move_to(&mut w, 113.0, 64.0);
        press(&mut w, true);
        assert_eq!(w.widget().selected(), Some(ThumbKind::Low));

        w.handle_event(WindowEvent::Enabled(false));
        press(&mut w, false);
        assert!(!w.has_capture());
        // the disabled widget ignored the release
        assert_eq!(w.widget().selected(), Some(ThumbKind::Low));

        w.handle_event(WindowEvent::Enabled(true));
        assert_eq!(w.widget().selected(), None);

        move_to(&mut w, 200.0, 64.0);
        assert_eq!(w.widget().values(), (0.0, 10000.0));
        assert!(!w.has_capture());
    }

    #[test]
    fn enable_without_stale_gesture_sends_nothing() {
        let mut w = window();
        w.handle_event(WindowEvent::Enabled(false));
        w.handle_event(WindowEvent::Enabled(true));
        move_to(&mut w, 113.0, 64.0);
        press(&mut w, true);
        w.handle_event(WindowEvent::Enabled(true));
        assert_eq!(w.widget().selected(), Some(ThumbKind::Low));
        assert!(w.has_capture());
    }

    #[test]
    fn disabled_window_keeps_values_but_repaints() {
        let mut w = window();
        w.frame();
        w.handle_event(WindowEvent::Enabled(false));
        assert!(w.frame().is_some());

        move_to(&mut w, 113.0, 64.0);
        press(&mut w, true);
        move_to(&mut w, 200.0, 64.0);
        press(&mut w, false);
        assert_eq!(w.widget().values(), (0.0, 10000.0));
        assert!(!w.has_capture());
        assert!(w.frame().is_none());
    }

    #[test]
    fn drag_batches_into_one_frame() {
        let mut w = window();
        w.frame();
        move_to(&mut w, 113.0, 64.0);
        press(&mut w, true);
        for x in [120.0, 130.0, 140.0, 150.0] {
            move_to(&mut w, x, 64.0);
        }
        press(&mut w, false);

        assert!(w.host().repaint_requests() > 2);
        assert!(w.frame().is_some());
        assert!(w.frame().is_none());
        assert_eq!(w.frames(), 2);
    }
}

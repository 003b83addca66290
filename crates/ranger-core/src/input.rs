use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    /// The host took pointer capture away (another window grabbed it, the
    /// gesture was cancelled, ...).
    Cancel,
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    /// Position in the receiving widget's local coordinates.
    pub position: Vec2,
}

impl PointerEvent {
    /// A mouse event for the primary pointer, the shape hosts synthesize most.
    pub fn mouse(event: PointerEventKind, position: Vec2) -> Self {
        Self { event, position }
    }
}

//! # Widgets, hosts and surfaces
//!
//! Ranger splits a control into three collaborators instead of one class
//! hierarchy:
//!
//! - `Widget` — the control itself. It consumes pointer events and resize
//!   notifications and paints itself on demand.
//! - `Host` — whatever embeds the control (a native window, a test harness).
//!   It answers geometry/enabled queries and accepts repaint and pointer
//!   capture requests.
//! - `Surface` — the drawing target handed to `Widget::render`. `Scene`
//!   implements it as a display list.
//!
//! ```rust
//! use ranger_core::*;
//!
//! let mut host = HeadlessHost::new(Size { width: 200.0, height: 26.0 });
//! host.request_repaint();
//! host.request_repaint();
//! // repaint requests coalesce
//! assert!(host.take_repaint());
//! assert!(!host.take_repaint());
//! ```
//!
//! Repaint requests are advisory. A host is free to merge any number of
//! requests into a single paint, which is what `HeadlessHost::take_repaint`
//! models.

pub mod color;
pub mod geometry;
pub mod host;
pub mod input;
pub mod prelude;
pub mod render_api;
pub mod view;
pub mod widget;

pub use color::*;
pub use geometry::*;
pub use host::*;
pub use render_api::*;
pub use view::*;
pub use widget::*;

pub use crate::color::Color;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::host::{HeadlessHost, Host};
pub use crate::input::*;
pub use crate::render_api::Surface;
pub use crate::view::{Points, Scene, SceneNode, WidgetId};
pub use crate::widget::Widget;

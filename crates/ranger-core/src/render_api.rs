use crate::view::{Points, Scene, SceneNode};
use crate::{Color, Rect, Vec2};

/// Drawing target handed to `Widget::render`.
///
/// Every shape is drawn filled and then outlined with a one pixel stroke,
/// which is how toolkit device contexts with a pen and a brush behave.
pub trait Surface {
    /// Resets the surface to a solid background.
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, rect: Rect, fill: Color, outline: Color);

    /// Draws `points` translated by `offset`.
    fn draw_polygon(&mut self, points: &[Vec2], offset: Vec2, fill: Color, outline: Color);
}

impl Surface for Scene {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.nodes.clear();
    }

    fn draw_rect(&mut self, rect: Rect, fill: Color, outline: Color) {
        self.nodes.push(SceneNode::Rect {
            rect,
            color: fill,
            radius: 0.0,
        });
        self.nodes.push(SceneNode::Border {
            rect,
            color: outline,
            width: 1.0,
            radius: 0.0,
        });
    }

    fn draw_polygon(&mut self, points: &[Vec2], offset: Vec2, fill: Color, outline: Color) {
        let placed: Points = points.iter().map(|p| p.offset(offset)).collect();
        self.nodes.push(SceneNode::Polygon {
            points: placed.clone(),
            color: fill,
        });
        self.nodes.push(SceneNode::PolygonBorder {
            points: placed,
            color: outline,
            width: 1.0,
        });
    }
}

use smallvec::SmallVec;

use crate::{Color, Rect, Vec2};

pub type WidgetId = u64;

/// Vertex list for a polygon node. Widget glyphs are a handful of points, so
/// they stay inline.
pub type Points = SmallVec<[Vec2; 8]>;

/// Renderable scene
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    /// Filled polygon, points in the scene's coordinate space.
    Polygon { points: Points, color: Color },
    /// Closed polygon outline.
    PolygonBorder {
        points: Points,
        color: Color,
        width: f32,
    },
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bounding box of every node, `None` for an empty scene.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut grow = |p: Vec2| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };
        for node in &self.nodes {
            match node {
                SceneNode::Rect { rect, .. } | SceneNode::Border { rect, .. } => {
                    grow(rect.origin());
                    grow(Vec2::new(rect.x + rect.w, rect.y + rect.h));
                }
                SceneNode::Polygon { points, .. } | SceneNode::PolygonBorder { points, .. } => {
                    points.iter().copied().for_each(&mut grow);
                }
            }
        }
        (min.x <= max.x).then(|| Rect {
            x: min.x,
            y: min.y,
            w: max.x - min.x,
            h: max.y - min.y,
        })
    }
}

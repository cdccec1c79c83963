//! Headless render tree.
//!
//! A component renders into a [`Scene`]: a flat list of primitives, each with
//! a z-index. Hosts draw [`Scene::draw_order`] back to front and route taps
//! through [`Scene::hit_test`]. Nodes with equal z-index keep insertion order.

use alloc::{string::String, vec::Vec};

use tablayout_color::Color;

use crate::layout::{Point, Rect};

/// Weight of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Normal weight (400).
    #[default]
    Normal,
    /// Medium weight (500).
    Medium,
}

/// An outline drawn along a shape's edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line width in points.
    pub width: f32,
    /// Line color.
    pub color: Color,
}

/// A filled rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Area covered by the shape.
    pub rect: Rect,
    /// Radius applied to all four corners.
    pub corner_radius: f32,
    /// Fill color.
    pub fill: Color,
    /// Optional outline.
    pub stroke: Option<Stroke>,
}

/// A single line of centered text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Box the text is centered in.
    pub rect: Rect,
    /// The text itself.
    pub content: String,
    /// Text color.
    pub color: Color,
    /// Font weight.
    pub weight: FontWeight,
    /// Font size in points.
    pub size: f32,
}

/// An invisible area that reports taps for `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    /// Tappable area.
    pub rect: Rect,
    /// Component-defined identifier of what was tapped.
    pub target: usize,
    /// Whether the host should show press feedback (ripple, highlight).
    pub indication: bool,
}

/// One drawable or tappable element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A rounded rectangle.
    Shape(Shape),
    /// A text label.
    Text(TextRun),
    /// A tap target.
    HitRegion(HitRegion),
}

/// A primitive placed on a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Stacking order; higher draws later and receives taps first.
    pub z_index: f32,
    /// What to draw.
    pub primitive: Primitive,
}

/// Output of a render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    clip: Option<Shape>,
    nodes: Vec<Node>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clip: None,
            nodes: Vec::new(),
        }
    }

    /// Clips everything to a rounded rectangle. The clip's fill is unused.
    pub fn set_clip(&mut self, rect: Rect, corner_radius: f32) {
        self.clip = Some(Shape {
            rect,
            corner_radius,
            fill: Color::TRANSPARENT,
            stroke: None,
        });
    }

    /// The clip shape, if any.
    #[must_use]
    pub const fn clip(&self) -> Option<&Shape> {
        self.clip.as_ref()
    }

    /// Appends a primitive on layer `z_index`.
    pub fn push(&mut self, z_index: f32, primitive: Primitive) {
        self.nodes.push(Node { z_index, primitive });
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Nodes sorted back to front. The sort is stable.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&Node> {
        let mut ordered: Vec<&Node> = self.nodes.iter().collect();
        ordered.sort_by(|a, b| a.z_index.total_cmp(&b.z_index));
        ordered
    }

    /// All shapes with their z-index.
    pub fn shapes(&self) -> impl Iterator<Item = (f32, &Shape)> {
        self.nodes.iter().filter_map(|node| match &node.primitive {
            Primitive::Shape(shape) => Some((node.z_index, shape)),
            _ => None,
        })
    }

    /// All text runs with their z-index.
    pub fn texts(&self) -> impl Iterator<Item = (f32, &TextRun)> {
        self.nodes.iter().filter_map(|node| match &node.primitive {
            Primitive::Text(text) => Some((node.z_index, text)),
            _ => None,
        })
    }

    /// All hit regions with their z-index.
    pub fn hit_regions(&self) -> impl Iterator<Item = (f32, &HitRegion)> {
        self.nodes.iter().filter_map(|node| match &node.primitive {
            Primitive::HitRegion(region) => Some((node.z_index, region)),
            _ => None,
        })
    }

    /// Finds the topmost hit region under `point`.
    ///
    /// Points outside the clip never hit anything. Among overlapping regions the
    /// highest z-index wins, then the one pushed last.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&HitRegion> {
        if let Some(clip) = &self.clip
            && !clip.rect.contains(point)
        {
            return None;
        }

        self.draw_order()
            .into_iter()
            .rev()
            .find_map(|node| match &node.primitive {
                Primitive::HitRegion(region) if region.rect.contains(point) => Some(region),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: f32, target: usize) -> Primitive {
        Primitive::HitRegion(HitRegion {
            rect: Rect::from_xywh(x, 0.0, 10.0, 10.0),
            target,
            indication: false,
        })
    }

    #[test]
    fn draw_order_is_stable_by_z_index() {
        let mut scene = Scene::new();
        scene.push(2.0, region(0.0, 0));
        scene.push(0.0, region(0.0, 1));
        scene.push(0.0, region(0.0, 2));
        scene.push(1.0, region(0.0, 3));

        let targets: Vec<usize> = scene
            .draw_order()
            .into_iter()
            .filter_map(|node| match &node.primitive {
                Primitive::HitRegion(region) => Some(region.target),
                _ => None,
            })
            .collect();
        assert_eq!(targets, [1, 2, 3, 0]);
    }

    #[test]
    fn hit_test_prefers_topmost_region() {
        let mut scene = Scene::new();
        scene.push(0.0, region(0.0, 0));
        scene.push(2.0, region(5.0, 1));

        assert_eq!(scene.hit_test(Point::new(2.0, 2.0)).map(|r| r.target), Some(0));
        assert_eq!(scene.hit_test(Point::new(7.0, 2.0)).map(|r| r.target), Some(1));
        assert!(scene.hit_test(Point::new(30.0, 2.0)).is_none());
    }

    #[test]
    fn hit_test_respects_clip() {
        let mut scene = Scene::new();
        scene.push(0.0, region(0.0, 0));
        scene.set_clip(Rect::from_xywh(0.0, 0.0, 5.0, 10.0), 0.0);

        assert!(scene.hit_test(Point::new(7.0, 2.0)).is_none());
        assert!(scene.hit_test(Point::new(2.0, 2.0)).is_some());
    }
}

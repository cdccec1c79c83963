//! The animated highlight under (or behind) the selected tab.

use tablayout_color::Color;
use tablayout_core::{
    Rect,
    scene::{Primitive, Scene, Shape, Stroke},
};

use crate::{
    TabIdentifier,
    animation::{EdgeAnimation, SpringSpec},
    style::IndicatorStyle,
};

/// Thickness of the bottom bar.
pub const BAR_HEIGHT: f32 = 3.0;
/// Gap between the bottom bar and the tab's sides and the row's bottom.
pub const BAR_PADDING: f32 = 4.0;
/// Outline width of the bottom bar.
pub const BAR_STROKE: f32 = 1.0;
/// Gap between the segmented block and the tab's edges.
pub const SEGMENT_PADDING: f32 = 2.0;
/// Stacking order of the indicator: above unselected cells, below the selected one.
pub const INDICATOR_Z_INDEX: f32 = 1.0;

/// Horizontal extent of a measured tab cell, in row coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabBounds {
    /// Left edge.
    pub left: f32,
    /// Right edge.
    pub right: f32,
}

impl TabBounds {
    /// Creates bounds spanning `left..right`.
    #[must_use]
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Horizontal extent of `rect`.
    #[must_use]
    pub const fn of(rect: &Rect) -> Self {
        Self::new(rect.min_x(), rect.max_x())
    }

    /// Distance between the edges.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Whether `x` falls in `left..right`.
    #[must_use]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left && x < self.right
    }
}

/// Tracks which tab is highlighted and where the highlight currently is.
///
/// The indicator keeps no selection of its own beyond the last index it was
/// shown, which it needs to tell a selection change (animate) from a
/// relayout of the same selection (follow at once).
#[derive(Debug, Clone, Default)]
pub struct TabIndicator {
    edges: Option<EdgeAnimation>,
    shown: Option<usize>,
    spring: SpringSpec,
}

impl TabIndicator {
    /// An indicator that has not been placed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `spring` for subsequent animations.
    #[must_use]
    pub const fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    /// The spring driving both edges.
    #[must_use]
    pub const fn spring(&self) -> &SpringSpec {
        &self.spring
    }

    /// Points the indicator at `selected`.
    ///
    /// # Panics
    ///
    /// Panics if `selected.index()` is not a valid position in `bounds`.
    pub fn update<T: TabIdentifier>(&mut self, bounds: &[TabBounds], selected: &T) {
        self.update_index(bounds, selected.index());
    }

    /// Points the indicator at the tab at `index`.
    ///
    /// The first placement jumps straight to the tab. A new selection animates
    /// from the current edges. The same selection with moved bounds follows
    /// them at once unless an animation is already running.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position in `bounds`.
    pub fn update_index(&mut self, bounds: &[TabBounds], index: usize) {
        let target = bounds[index];
        let previous = self.shown.replace(index);

        match &mut self.edges {
            None => {
                tracing::trace!(index, ?target, "placing tab indicator");
                self.edges = Some(EdgeAnimation::at(target));
            }
            Some(edges) if previous != Some(index) => {
                tracing::trace!(?previous, index, ?target, "retargeting tab indicator");
                edges.retarget(target);
            }
            Some(edges) if edges.target() != target => {
                if edges.is_settled() {
                    edges.snap_to(target);
                } else {
                    edges.retarget(target);
                }
            }
            Some(_) => {}
        }
    }

    /// Advances the animation by `dt` seconds. Returns `true` while moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(edges) = &mut self.edges else {
            return false;
        };
        let was_moving = !edges.is_settled();
        let moving = edges.step(dt, &self.spring);
        if was_moving && !moving {
            tracing::trace!(edges = ?edges.current(), "tab indicator settled");
        }
        moving
    }

    /// Current interpolated edges, or `None` before the first placement.
    #[must_use]
    pub fn edges(&self) -> Option<TabBounds> {
        self.edges.as_ref().map(EdgeAnimation::current)
    }

    /// Edges the indicator is heading to.
    #[must_use]
    pub fn target(&self) -> Option<TabBounds> {
        self.edges.as_ref().map(EdgeAnimation::target)
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.edges.as_ref().is_some_and(|edges| !edges.is_settled())
    }

    /// Draws the indicator at its current edges inside `content`.
    pub fn render(
        &self,
        style: IndicatorStyle,
        color: Color,
        corner_radius: f32,
        content: Rect,
        scene: &mut Scene,
    ) {
        let Some(edges) = self.edges() else {
            return;
        };
        let rect = indicator_rect(style, edges, content);
        let stroke = match style {
            IndicatorStyle::BottomBar => Some(Stroke {
                width: BAR_STROKE,
                color,
            }),
            IndicatorStyle::SegmentedFill => None,
        };
        scene.push(
            INDICATOR_Z_INDEX,
            Primitive::Shape(Shape {
                rect,
                corner_radius,
                fill: color,
                stroke,
            }),
        );
    }
}

/// Geometry of the indicator for the given edges.
///
/// `content` is the area the tab cells are laid out in; only its vertical
/// extent is used.
#[must_use]
pub fn indicator_rect(style: IndicatorStyle, edges: TabBounds, content: Rect) -> Rect {
    match style {
        IndicatorStyle::BottomBar => Rect::from_xywh(
            edges.left + BAR_PADDING,
            content.max_y() - BAR_PADDING - BAR_HEIGHT,
            (edges.width() - 2.0 * BAR_PADDING).max(0.0),
            BAR_HEIGHT,
        ),
        IndicatorStyle::SegmentedFill => {
            Rect::from_xywh(edges.left, content.y(), edges.width(), content.height())
                .inset_all(SEGMENT_PADDING)
        }
    }
}

//! The tab row: cells, indicator and selection dispatch.

use core::fmt;

use tablayout_color::Color;
use tablayout_core::{
    BoxSelectHandler, Point, ProposalSize, Rect, SelectHandler, Size,
    layout::{Layout, SubView},
    scene::{Primitive, Scene, Shape},
};

use crate::{
    TabIdentifier,
    animation::SpringSpec,
    indicator::{TabBounds, TabIndicator},
    item::TabItem,
    style::TabRowStyle,
};

/// Space between the row's background edge and its cells.
pub const ROW_PADDING: f32 = 4.0;

/// Whether `tab` is the selected one. Tabs compare by index only.
#[must_use]
pub fn is_selected<T: TabIdentifier>(tab: &T, selected: &T) -> bool {
    tab.index() == selected.index()
}

/// Lays out tab cells side by side with equal widths.
///
/// Without a width proposal every cell gets the width of the widest one.
/// The row is as tall as its tallest cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabRowLayout;

#[allow(clippy::cast_precision_loss)]
impl Layout for TabRowLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }
        let count = children.len() as f32;

        let width = proposal.width.unwrap_or_else(|| {
            let widest = children
                .iter()
                .map(|child| child.size_that_fits(ProposalSize::UNSPECIFIED).width)
                .fold(0.0, f32::max);
            widest * count
        });

        let cell_proposal = ProposalSize::new(width / count, proposal.height);
        let height = children
            .iter()
            .map(|child| child.size_that_fits(cell_proposal).height)
            .fold(0.0, f32::max);

        Size::new(width, height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return Vec::new();
        }
        let cell_width = bounds.width() / children.len() as f32;

        (0..children.len())
            .map(|i| {
                Rect::from_xywh(
                    bounds.x() + cell_width * i as f32,
                    bounds.y(),
                    cell_width,
                    bounds.height(),
                )
            })
            .collect()
    }
}

/// A row of selectable tabs with an animated indicator.
///
/// The row is fully controlled. It is handed the selected tab on every
/// [`render`](Self::render) and reports taps to its [`SelectHandler`]; the
/// host decides whether to adopt the proposal and passes the result back in
/// on the next frame. Besides the in-flight indicator animation the row
/// remembers only the cell layout of its last pass, for hit testing.
///
/// Tabs must have distinct indices matching their positions; the row does
/// not check this.
pub struct TabRow<T> {
    tabs: Vec<T>,
    on_select: BoxSelectHandler<T>,
    style: TabRowStyle,
    layout: TabRowLayout,
    indicator: TabIndicator,
    frame: Rect,
    cells: Vec<Rect>,
    bounds: Vec<TabBounds>,
}

impl<T: TabIdentifier + fmt::Debug> fmt::Debug for TabRow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRow")
            .field("tabs", &self.tabs)
            .field("style", &self.style)
            .field("indicator", &self.indicator)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl<T: TabIdentifier> TabRow<T> {
    /// Creates a row showing `tabs` in order, reporting taps to `on_select`.
    pub fn new(tabs: impl IntoIterator<Item = T>, on_select: impl SelectHandler<T>) -> Self {
        Self {
            tabs: tabs.into_iter().collect(),
            on_select: Box::new(on_select),
            style: TabRowStyle::default(),
            layout: TabRowLayout,
            indicator: TabIndicator::new(),
            frame: Rect::default(),
            cells: Vec::new(),
            bounds: Vec::new(),
        }
    }

    /// Replaces the whole style. Invalid radii are clamped to zero.
    #[must_use]
    pub fn style(mut self, style: TabRowStyle) -> Self {
        self.style = style.sanitized();
        self
    }

    /// Fill behind the row.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.style.background_color = color;
        self
    }

    /// Fill of the indicator.
    #[must_use]
    pub const fn indicator_color(mut self, color: Color) -> Self {
        self.style.indicator_color = color;
        self
    }

    /// Label colors for unselected and selected tabs.
    #[must_use]
    pub const fn text_colors(mut self, text: Color, selected_text: Color) -> Self {
        self.style.text_color = text;
        self.style.selected_text_color = selected_text;
        self
    }

    /// Corner radius of the row container.
    #[must_use]
    pub fn tab_corner_radius(mut self, radius: f32) -> Self {
        self.style.tab_corner_radius = radius;
        self.style = self.style.sanitized();
        self
    }

    /// Corner radius of the indicator.
    #[must_use]
    pub fn indicator_corner_radius(mut self, radius: f32) -> Self {
        self.style.indicator_corner_radius = radius;
        self.style = self.style.sanitized();
        self
    }

    /// Draws the indicator as a segmented-control block.
    #[must_use]
    pub const fn segmented(mut self, segmented: bool) -> Self {
        self.style.segmented = segmented;
        self
    }

    /// Spring used to move the indicator.
    #[must_use]
    pub fn spring(mut self, spring: SpringSpec) -> Self {
        self.indicator = self.indicator.with_spring(spring);
        self
    }

    /// Current style.
    #[must_use]
    pub const fn current_style(&self) -> &TabRowStyle {
        &self.style
    }

    /// The tabs, in display order.
    #[must_use]
    pub fn tabs(&self) -> &[T] {
        &self.tabs
    }

    /// Bounds measured by the last layout pass.
    #[must_use]
    pub fn bounds(&self) -> &[TabBounds] {
        &self.bounds
    }

    /// The indicator and its animation state.
    #[must_use]
    pub const fn indicator(&self) -> &TabIndicator {
        &self.indicator
    }

    fn items<'a>(&'a self, selected: Option<&T>) -> Vec<TabItem<'a, T>> {
        self.tabs
            .iter()
            .map(|tab| {
                let is_current = selected.is_some_and(|selected| is_selected(tab, selected));
                TabItem::new(tab, is_current)
                    .colors(self.style.text_color, self.style.selected_text_color)
            })
            .collect()
    }

    /// Size the row wants for `proposal`, padding included.
    #[must_use]
    pub fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        let inset = 2.0 * ROW_PADDING;
        let inner = ProposalSize::new(
            proposal.width.map(|width| (width - inset).max(0.0)),
            proposal.height.map(|height| (height - inset).max(0.0)),
        );
        let items = self.items(None);
        let children: Vec<&dyn SubView> = items.iter().map(|item| item as &dyn SubView).collect();
        let content = self.layout.size_that_fits(inner, &children);
        Size::new(content.width + inset, content.height + inset)
    }

    /// Measures the cells for a row occupying `frame` and returns their bounds.
    pub fn layout(&mut self, frame: Rect) -> &[TabBounds] {
        let content = frame.inset_all(ROW_PADDING);
        let cells = {
            let items = self.items(None);
            let children: Vec<&dyn SubView> =
                items.iter().map(|item| item as &dyn SubView).collect();
            self.layout.place(content, &children)
        };

        self.bounds = cells.iter().map(TabBounds::of).collect();
        self.cells = cells;
        self.frame = frame;
        &self.bounds
    }

    /// Lays out the row in `frame`, points the indicator at `selected` and
    /// draws everything.
    ///
    /// # Panics
    ///
    /// Panics if `selected.index()` is not the position of one of the tabs.
    pub fn render(&mut self, selected: &T, frame: Rect) -> Scene {
        self.layout(frame);
        self.indicator.update(&self.bounds, selected);

        let mut scene = Scene::new();
        scene.set_clip(frame, self.style.tab_corner_radius);
        scene.push(
            0.0,
            Primitive::Shape(Shape {
                rect: frame,
                corner_radius: self.style.tab_corner_radius,
                fill: self.style.background_color,
                stroke: None,
            }),
        );

        for (item, cell) in self.items(Some(selected)).iter().zip(&self.cells) {
            item.render(*cell, &mut scene);
        }

        self.indicator.render(
            self.style.indicator_style(),
            self.style.indicator_color,
            self.style.indicator_corner_radius,
            frame.inset_all(ROW_PADDING),
            &mut scene,
        );
        scene
    }

    /// Advances the indicator by `dt` seconds. Returns `true` while it moves,
    /// meaning the host should render another frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.indicator.tick(dt)
    }

    /// Hit-tests `point` against the last layout and reports the tapped tab.
    ///
    /// Returns whether a tab was hit. The selection passed to `render` is not
    /// consulted: tapping the selected tab reports it again.
    pub fn tap(&mut self, point: Point) -> bool {
        if !self.frame.contains(point) {
            return false;
        }
        let hit = self
            .cells
            .iter()
            .position(|cell| TabItem::<T>::tap_area(*cell).contains(point));

        match hit {
            Some(position) => {
                self.tap_index(position);
                true
            }
            None => false,
        }
    }

    /// Reports the tab at `position` as tapped.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn tap_index(&mut self, position: usize) {
        let tab = &self.tabs[position];
        TabItem::new(tab, false).click(self.on_select.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TitledTab;

    struct Fixed(Size);

    impl SubView for Fixed {
        fn size_that_fits(&self, proposal: ProposalSize) -> Size {
            Size::new(proposal.width.unwrap_or(self.0.width), self.0.height)
        }
    }

    #[test]
    fn layout_splits_width_equally() {
        let a = Fixed(Size::new(30.0, 20.0));
        let b = Fixed(Size::new(80.0, 40.0));
        let children: [&dyn SubView; 2] = [&a, &b];

        let rects = TabRowLayout.place(Rect::from_xywh(10.0, 0.0, 200.0, 40.0), &children);

        assert_eq!(
            rects,
            [
                Rect::from_xywh(10.0, 0.0, 100.0, 40.0),
                Rect::from_xywh(110.0, 0.0, 100.0, 40.0),
            ]
        );
    }

    #[test]
    fn intrinsic_width_uses_widest_cell() {
        let a = Fixed(Size::new(30.0, 20.0));
        let b = Fixed(Size::new(80.0, 40.0));
        let children: [&dyn SubView; 2] = [&a, &b];

        let size = TabRowLayout.size_that_fits(ProposalSize::UNSPECIFIED, &children);
        assert_eq!(size, Size::new(160.0, 40.0));

        let proposed = TabRowLayout.size_that_fits(ProposalSize::new(300.0, None), &children);
        assert_eq!(proposed, Size::new(300.0, 40.0));
    }

    #[test]
    fn empty_layout_is_zero_sized() {
        assert_eq!(
            TabRowLayout.size_that_fits(ProposalSize::UNSPECIFIED, &[]),
            Size::zero()
        );
        assert!(TabRowLayout.place(Rect::default(), &[]).is_empty());
    }

    #[test]
    fn row_size_adds_padding() {
        let row = TabRow::new([TitledTab::new(0, "A")], |_: TitledTab| {});
        let size = row.size_that_fits(ProposalSize::new(208.0, None));

        assert_eq!(size.width, 208.0);
        assert_eq!(size.height, 44.0 + 2.0 * ROW_PADDING);
    }

    #[test]
    fn selection_is_index_equality() {
        let a = TitledTab::new(1, "One");
        let b = TitledTab::new(1, "Uno");
        let c = TitledTab::new(2, "One");

        assert!(is_selected(&a, &b));
        assert!(!is_selected(&a, &c));
    }
}

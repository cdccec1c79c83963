//! A tab row built from plain titles, selected by position.

use tablayout_core::{
    Point, ProposalSize, Rect, SelectHandler, Size, handler::MapHandler, impl_debug, scene::Scene,
};

use crate::{
    TabIdentifier, TitledTab, animation::SpringSpec, indicator::TabBounds, row::TabRow,
    style::TabRowStyle,
};

/// Turns titles into tabs numbered by position.
#[must_use]
pub fn titled_tabs<S: AsRef<str>>(titles: &[S]) -> Vec<TitledTab> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| TitledTab::new(index, title.as_ref()))
        .collect()
}

/// A [`TabRow`] over a list of titles.
///
/// The selection is a position in the list and taps are reported as
/// positions too.
///
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use tablayout_core::Rect;
/// use tablayout_tabs::TitledTabRow;
///
/// let tapped = Rc::new(Cell::new(None));
/// let sink = tapped.clone();
/// let mut row = TitledTabRow::new(["A", "B", "C"], move |index: usize| sink.set(Some(index)));
///
/// row.render(1, Rect::from_xywh(0.0, 0.0, 300.0, 52.0));
/// row.tap_index(2);
/// assert_eq!(tapped.get(), Some(2));
/// ```
pub struct TitledTabRow {
    row: TabRow<TitledTab>,
}

impl_debug!(TitledTabRow);

impl TitledTabRow {
    /// Creates a row with one tab per title, reporting taps as positions.
    pub fn new<S: AsRef<str>>(
        titles: impl IntoIterator<Item = S>,
        on_select: impl SelectHandler<usize>,
    ) -> Self {
        let titles: Vec<S> = titles.into_iter().collect();
        let handler = MapHandler::new(on_select, |tab: TitledTab| tab.index());
        Self {
            row: TabRow::new(titled_tabs(&titles), handler),
        }
    }

    /// Replaces the whole style.
    #[must_use]
    pub fn style(mut self, style: TabRowStyle) -> Self {
        self.row = self.row.style(style);
        self
    }

    /// Draws the indicator as a segmented-control block.
    #[must_use]
    pub fn segmented(mut self, segmented: bool) -> Self {
        self.row = self.row.segmented(segmented);
        self
    }

    /// Spring used to move the indicator.
    #[must_use]
    pub fn spring(mut self, spring: SpringSpec) -> Self {
        self.row = self.row.spring(spring);
        self
    }

    /// The wrapped row.
    #[must_use]
    pub const fn row(&self) -> &TabRow<TitledTab> {
        &self.row
    }

    /// The generated tabs.
    #[must_use]
    pub fn tabs(&self) -> &[TitledTab] {
        self.row.tabs()
    }

    /// Bounds measured by the last layout pass.
    #[must_use]
    pub fn bounds(&self) -> &[TabBounds] {
        self.row.bounds()
    }

    /// Size the row wants for `proposal`.
    #[must_use]
    pub fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.row.size_that_fits(proposal)
    }

    /// Renders with the tab at `selected` highlighted.
    ///
    /// # Panics
    ///
    /// Panics if `selected` is not a position in the title list.
    pub fn render(&mut self, selected: usize, frame: Rect) -> Scene {
        let selected = self.row.tabs()[selected].clone();
        self.row.render(&selected, frame)
    }

    /// Advances the indicator. Returns `true` while it moves.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.row.tick(dt)
    }

    /// Hit-tests `point` and reports the tapped position.
    pub fn tap(&mut self, point: Point) -> bool {
        self.row.tap(point)
    }

    /// Reports `position` as tapped.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn tap_index(&mut self, position: usize) {
        self.row.tap_index(position);
    }
}

//! A single tab cell.

use tablayout_color::Color;
use tablayout_core::{
    ProposalSize, Rect, SelectHandler, Size,
    layout::SubView,
    scene::{FontWeight, HitRegion, Primitive, Scene, TextRun},
};

use crate::{TabIdentifier, style::TabLayoutColors};

/// Label size in points.
pub const FONT_SIZE: f32 = 14.0;
/// Height of one line of label text.
pub const LINE_HEIGHT: f32 = 20.0;
/// Average glyph advance relative to the font size, for intrinsic sizing.
const GLYPH_WIDTH_RATIO: f32 = 0.55;
/// Space around the tap target, `(vertical, horizontal)`.
pub const OUTER_PADDING: (f32, f32) = (4.0, 8.0);
/// Space between the tap target's edge and the label, `(vertical, horizontal)`.
pub const INNER_PADDING: (f32, f32) = (8.0, 12.0);
/// Stacking order of the selected cell, above the indicator.
pub const SELECTED_Z_INDEX: f32 = 2.0;
/// Stacking order of unselected cells.
pub const UNSELECTED_Z_INDEX: f32 = 0.0;

/// One clickable label in a tab row.
///
/// The cell is drawn from a borrowed tab and renders its label in the selected
/// or unselected colors. Tapping does not change anything by itself; it only
/// hands the tab to the row's handler.
#[derive(Debug, Clone, Copy)]
pub struct TabItem<'a, T> {
    tab: &'a T,
    selected: bool,
    text_color: Color,
    selected_text_color: Color,
}

impl<'a, T: TabIdentifier> TabItem<'a, T> {
    /// A cell for `tab` with the default colors.
    #[must_use]
    pub const fn new(tab: &'a T, selected: bool) -> Self {
        Self {
            tab,
            selected,
            text_color: TabLayoutColors::TAB_TEXT,
            selected_text_color: TabLayoutColors::SELECTED_TAB_TEXT,
        }
    }

    /// Sets the label colors for the unselected and selected state.
    #[must_use]
    pub const fn colors(mut self, text: Color, selected_text: Color) -> Self {
        self.text_color = text;
        self.selected_text_color = selected_text;
        self
    }

    /// The tab this cell shows.
    #[must_use]
    pub const fn tab(&self) -> &'a T {
        self.tab
    }

    /// Whether this cell is the selected one.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Label color for the current state.
    #[must_use]
    pub const fn text_color(&self) -> Color {
        if self.selected {
            self.selected_text_color
        } else {
            self.text_color
        }
    }

    /// Label weight for the current state.
    #[must_use]
    pub const fn weight(&self) -> FontWeight {
        if self.selected {
            FontWeight::Medium
        } else {
            FontWeight::Normal
        }
    }

    /// Stacking order; the selected cell is kept above the indicator.
    #[must_use]
    pub const fn z_index(&self) -> f32 {
        if self.selected {
            SELECTED_Z_INDEX
        } else {
            UNSELECTED_Z_INDEX
        }
    }

    /// Tappable area for a cell laid out in `frame`.
    #[must_use]
    pub fn tap_area(frame: Rect) -> Rect {
        let (vertical, horizontal) = OUTER_PADDING;
        frame.inset(vertical, vertical, horizontal, horizontal)
    }

    /// Pushes the label and the tap target into `scene`.
    pub fn render(&self, frame: Rect, scene: &mut Scene) {
        let tap_area = Self::tap_area(frame);
        let (vertical, horizontal) = INNER_PADDING;
        let label_box = tap_area.inset(vertical, vertical, horizontal, horizontal);
        let z_index = self.z_index();

        scene.push(
            z_index,
            Primitive::Text(TextRun {
                rect: label_box,
                content: self.tab.label().to_owned(),
                color: self.text_color(),
                weight: self.weight(),
                size: FONT_SIZE,
            }),
        );
        scene.push(
            z_index,
            Primitive::HitRegion(HitRegion {
                rect: tap_area,
                target: self.tab.index(),
                indication: false,
            }),
        );
    }

    /// Reports a tap on this cell to `handler`, synchronously and exactly once.
    pub fn click<H: SelectHandler<T> + ?Sized>(&self, handler: &mut H) {
        tracing::debug!(
            index = self.tab.index(),
            label = self.tab.label(),
            "tab tapped"
        );
        handler.handle(self.tab.clone());
    }
}

#[allow(clippy::cast_precision_loss)]
impl<T: TabIdentifier> SubView for TabItem<'_, T> {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        let (outer_v, outer_h) = OUTER_PADDING;
        let (inner_v, inner_h) = INNER_PADDING;
        let glyphs = self.tab.label().chars().count() as f32;
        let intrinsic_width = glyphs * FONT_SIZE * GLYPH_WIDTH_RATIO + 2.0 * (outer_h + inner_h);
        let height = LINE_HEIGHT + 2.0 * (outer_v + inner_v);

        Size::new(proposal.width.unwrap_or(intrinsic_width), height)
    }
}

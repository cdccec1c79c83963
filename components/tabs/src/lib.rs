//! A themeable tab row with an animated selection indicator.
//!
//! The row is a *controlled* component: the host owns the selected tab,
//! passes it into every [`TabRow::render`], and learns about taps through a
//! [`SelectHandler`](tablayout_core::SelectHandler). The row never changes
//! the selection on its own.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use tablayout_core::Rect;
//! use tablayout_tabs::{TabRow, tab_enum};
//!
//! tab_enum! {
//!     /// Screens of the demo app.
//!     pub enum Screen { Home, Profile, Settings }
//! }
//!
//! let selected = Rc::new(Cell::new(Screen::Home));
//! let sink = selected.clone();
//! let mut row = TabRow::new(Screen::ALL.iter().copied(), move |tab: Screen| sink.set(tab));
//!
//! let frame = Rect::from_xywh(0.0, 0.0, 308.0, 52.0);
//! let _scene = row.render(&selected.get(), frame);
//! row.tap_index(2);
//! assert_eq!(selected.get(), Screen::Settings);
//! ```
//!
//! Each frame the host calls [`TabRow::tick`] with the elapsed time; the
//! indicator springs from its current edges toward the selected tab.

pub mod animation;
pub mod identifier;
pub mod indicator;
pub mod item;
pub mod row;
pub mod style;
pub mod titles;


#[doc(inline)]
pub use animation::{EdgeAnimation, Spring, SpringSpec, step_edges};
#[doc(inline)]
pub use identifier::{TabIdentifier, TitledTab};
#[doc(inline)]
pub use indicator::{TabBounds, TabIndicator};
#[doc(inline)]
pub use item::TabItem;
#[doc(inline)]
pub use row::{TabRow, TabRowLayout, is_selected};
#[doc(inline)]
pub use style::{IndicatorStyle, StyleError, TabLayoutColors, TabRowStyle};
#[doc(inline)]
pub use titles::{TitledTabRow, titled_tabs};

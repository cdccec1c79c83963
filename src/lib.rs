#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod debug;
/// Errors raised while loading configuration.
pub mod error;

#[cfg(test)]
mod tests;

pub mod prelude {
    //! The types most hosts need, in one import.
    //!
    //! ```rust
    //! use tablayout::prelude::*;
    //!
    //! let row = TitledTabRow::new(["Day", "Week"], |_: usize| {})
    //!     .style(TabRowStyle::default());
    //! assert_eq!(row.tabs().len(), 2);
    //! ```
    pub use crate::tabs::{
        IndicatorStyle, SpringSpec, TabBounds, TabIdentifier, TabLayoutColors, TabRow,
        TabRowStyle, TitledTab, TitledTabRow, tab_enum, titled_tabs,
    };
    pub use tablayout_core::{Color, Point, ProposalSize, Rect, SelectHandler, Size, scene::Scene};
}

#[doc(inline)]
pub use error::{Error, Result};
pub use tablayout_color as color;
#[doc(inline)]
pub use tablayout_core::{handler, layout, scene};
pub use tablayout_tabs as tabs;

#[doc(inline)]
pub use tablayout_core::Color;
#[doc(inline)]
pub use tablayout_tabs::{TabRow, TabRowStyle, TitledTabRow};

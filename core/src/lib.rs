#![no_std]
//! Core building blocks shared by the tablayout components.
//!
//! The host UI framework owns measurement, the frame clock, drawing and
//! input. This crate describes the seams between it and the components:
//!
//! - [`layout`]: geometry plus the two-phase [`Layout`](layout::Layout)
//!   contract used to measure and place cells,
//! - [`handler`]: callbacks through which components propose changes,
//! - [`scene`]: the headless render tree a component emits each frame.

extern crate alloc;

#[macro_use]
mod macros;
pub mod handler;
pub mod layout;
pub mod scene;

#[doc(inline)]
pub use handler::{BoxSelectHandler, SelectHandler};
#[doc(inline)]
pub use layout::{Point, ProposalSize, Rect, Size};
#[doc(inline)]
pub use scene::Scene;
pub use tablayout_color::Color;

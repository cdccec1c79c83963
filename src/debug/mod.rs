//! Diagnostics for hosts: tracing installation and panic reporting.

pub mod logging;

pub use logging::{install_panic_hook, install_tracing, log_level, set_log_level};

use tablayout_color::HexColorError;
use tablayout_tabs::StyleError;

/// Errors raised while loading tab row configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration was not valid JSON for a style.
    #[error("invalid style configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The configuration file could not be read.
    #[error("failed to read style configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The style parsed but carries values a row cannot draw.
    #[error(transparent)]
    Style(#[from] StyleError),
    /// A color string was malformed.
    #[error("invalid color: {0}")]
    Color(#[from] HexColorError),
}

/// Result alias for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

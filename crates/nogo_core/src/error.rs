//! Error types shared across the core crate.

use thiserror::Error;

/// Validation failures raised while translating between protocol text and
/// internal colors/coordinates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid color symbol: {0:?}")]
    InvalidColorSymbol(String),

    #[error("invalid color value: {0}")]
    InvalidColorValue(u8),

    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    /// `pass` is emitted by the formatter but is not a coordinate.
    #[error("reserved word is not a coordinate: {0:?}")]
    ReservedWord(String),

    #[error("coordinate ({row}, {col}) out of range for board size {size}")]
    CoordinateOutOfRange { row: usize, col: usize, size: usize },
}

/// Failures raised by the board when a move or size is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {0} not supported (1..=25)")]
    InvalidSize(usize),

    #[error("occupied")]
    Occupied,

    #[error("capture")]
    Capture,

    #[error("suicide")]
    Suicide,

    #[error("off board")]
    OffBoard,

    #[error("invalid diagram character {0:?}")]
    InvalidDiagram(char),
}

/// Failures loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

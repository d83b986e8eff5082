//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`, so floor validation reads the same everywhere.

use thiserror::Error;

/// Errors raised by `lift-core` validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiftError {
    #[error("floor {floor} is outside the served range {lowest}..={highest}")]
    FloorOutOfRange {
        floor:   i32,
        lowest:  i32,
        highest: i32,
    },

    #[error("no floors registered")]
    EmptyFloorRange,

    #[error("floors must be contiguous: {below} is followed by {above}")]
    NonContiguousFloors { below: i32, above: i32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type LiftResult<T> = Result<T, LiftError>;

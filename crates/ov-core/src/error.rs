//! Workspace error type.
//!
//! Every failure in this workspace is local to a single construction or a
//! single query, so one flat enum covers all of them.  Configuration errors
//! are raised while a projector is being calibrated; `InvalidInput` only by
//! the checked query path.

use thiserror::Error;

use crate::{Axis, GeoPoint};

/// The error type shared by all `ov-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OverlayError {
    /// Both reference points project to the same coordinate on `axis`, so
    /// the interpolation denominator is zero.
    #[error("configuration error: reference points share {plane} {axis} = {value}")]
    DegenerateSpan {
        plane: &'static str,
        axis:  Axis,
        value: f64,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: non-finite coordinate {0}")]
    InvalidInput(GeoPoint),
}

impl OverlayError {
    /// `true` for every variant raised while building a projector.
    pub fn is_configuration(&self) -> bool {
        matches!(self, OverlayError::DegenerateSpan { .. } | OverlayError::Config(_))
    }
}

/// Shorthand result type for all `ov-*` crates.
pub type OverlayResult<T> = Result<T, OverlayError>;

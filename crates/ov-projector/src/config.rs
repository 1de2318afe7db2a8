//! Serializable projector configuration.
//!
//! Loading is left to the application (file, CLI, embedded literal); this
//! type only fixes the shape:
//!
//! ```json
//! {
//!   "p0": { "screen": { "x": 23.69, "y": -0.5 }, "geo": { "lat": -22.814895, "lng": -47.072892 } },
//!   "p1": { "screen": { "x": 276.0, "y": 178.9 }, "geo": { "lat": -22.816419, "lng": -47.070563 } },
//!   "earth_radius": 6.371
//! }
//! ```
//!
//! `earthRadius` is accepted as an alias for `earth_radius`.

use ov_core::OverlayResult;
use serde::{Deserialize, Serialize};

use crate::{Projector, ReferencePoint};

/// Options needed to calibrate a [`Projector`].  There are no others.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Top-left (minimum) reference point.
    pub p0: ReferencePoint,
    /// Bottom-right (maximum) reference point.
    pub p1: ReferencePoint,
    /// Radius of the reference sphere, in the global plane's unit.
    #[serde(alias = "earthRadius")]
    pub earth_radius: f64,
}

impl ProjectorConfig {
    /// Calibrate a projector from this configuration.
    pub fn build(&self) -> OverlayResult<Projector> {
        Projector::from_config(self)
    }
}

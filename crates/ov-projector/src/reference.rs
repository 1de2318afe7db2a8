//! Calibration anchors.

use ov_core::{GeoPoint, GlobalPoint, ScreenPoint};
use serde::{Deserialize, Serialize};

/// A known (screen, geographic) pair used to calibrate a [`Projector`].
///
/// The global coordinate is derived by the projector that owns the point and
/// is read back through [`Projector::reference_globals`].  It is never
/// serialized because it depends on the *other* reference point's latitude
/// too.
///
/// [`Projector`]: crate::Projector
/// [`Projector::reference_globals`]: crate::Projector::reference_globals
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub screen: ScreenPoint,
    pub geo:    GeoPoint,
    #[serde(skip)]
    pub(crate) global: GlobalPoint,
}

impl ReferencePoint {
    pub fn new(screen: ScreenPoint, geo: GeoPoint) -> Self {
        Self {
            screen,
            geo,
            global: GlobalPoint::default(),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.screen.is_finite() && self.geo.is_finite()
    }
}

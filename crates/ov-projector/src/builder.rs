//! Fluent builder for constructing a [`Projector`].

use ov_core::{GeoPoint, OverlayError, OverlayResult, ScreenPoint};

use crate::{Projector, ReferencePoint};

/// Fluent builder for [`Projector`].
///
/// # Required inputs
///
/// | Method                        | Anchor                          |
/// |-------------------------------|---------------------------------|
/// | `new(earth_radius)`           | radius of the reference sphere  |
/// | `.top_left(screen, geo)`      | `p0`, the minimum corner        |
/// | `.bottom_right(screen, geo)`  | `p1`, the maximum corner        |
///
/// There are no optional inputs.  The radius unit is the caller's choice;
/// it cancels out of screen results but fixes the scale of
/// [`Projector::geo_to_global`].
///
/// # Example
///
/// ```rust,ignore
/// let projector = ProjectorBuilder::new(EARTH_RADIUS_KM)
///     .top_left(ScreenPoint::new(0.0, 0.0), GeoPoint::new(51.5080, -0.1290))
///     .bottom_right(ScreenPoint::new(800.0, 600.0), GeoPoint::new(51.5040, -0.1220))
///     .build()?;
/// ```
#[derive(Clone, Debug)]
pub struct ProjectorBuilder {
    earth_radius: f64,
    p0:           Option<ReferencePoint>,
    p1:           Option<ReferencePoint>,
}

impl ProjectorBuilder {
    pub fn new(earth_radius: f64) -> Self {
        Self {
            earth_radius,
            p0: None,
            p1: None,
        }
    }

    /// Supply the top-left (minimum) reference point.
    pub fn top_left(mut self, screen: ScreenPoint, geo: GeoPoint) -> Self {
        self.p0 = Some(ReferencePoint::new(screen, geo));
        self
    }

    /// Supply the bottom-right (maximum) reference point.
    pub fn bottom_right(mut self, screen: ScreenPoint, geo: GeoPoint) -> Self {
        self.p1 = Some(ReferencePoint::new(screen, geo));
        self
    }

    /// Validate inputs and calibrate the projector.
    pub fn build(self) -> OverlayResult<Projector> {
        let p0 = self
            .p0
            .ok_or_else(|| OverlayError::Config("missing top-left reference point (p0)".into()))?;
        let p1 = self
            .p1
            .ok_or_else(|| OverlayError::Config("missing bottom-right reference point (p1)".into()))?;
        Projector::new(p0, p1, self.earth_radius)
    }
}

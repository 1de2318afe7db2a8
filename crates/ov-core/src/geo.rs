//! Geographic coordinate type.
//!
//! `GeoPoint` uses `f64` latitude/longitude in signed decimal degrees.  The
//! overlay use case maps a few hundred metres of terrain onto a screen, so
//! the extra precision over `f32` is what keeps the reference points mapping
//! back onto themselves to ~1e-9 screen units.

/// Mean Earth radius in kilometres.
///
/// Callers choose the radius unit explicitly when building a projector; this
/// is only the conventional value.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` when neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Linear interpolation towards `other`.  `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate along the same line.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

//! The calibrated geographic → screen projector.
//!
//! # Design
//!
//! All calibration work happens once in [`Projector::new`]: the longitude
//! scale factor and both reference points' global coordinates are cached, and
//! every axis span that later appears as a denominator is checked to be
//! finite and non-zero.  After that the projector is an immutable `Copy` value and every
//! query is a handful of multiplies with no failure path.
//!
//! Longitude is scaled by the cosine of the *mean latitude of the two
//! reference points*, not of the queried point.  That single factor is only
//! accurate while the calibrated area is small (a campus, a district), which
//! is the only use this projector is meant for.

use ov_core::{Axis, GeoPoint, GlobalPoint, OverlayError, OverlayResult, ScreenPoint};

use crate::{ProjectorConfig, ReferencePoint};

/// Maps geographic coordinates onto a screen calibrated by two anchors.
///
/// `p0` is conventionally the top-left (minimum) anchor and `p1` the
/// bottom-right (maximum) one, but either orientation works: the map simply
/// follows the sign of each screen span.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projector {
    p0:           ReferencePoint,
    p1:           ReferencePoint,
    earth_radius: f64,
    /// `earth_radius * cos(mean reference latitude)`, the stage-A x factor.
    lng_scale:    f64,
}

impl Projector {
    /// Calibrate a projector from two reference points.
    ///
    /// # Errors
    ///
    /// A configuration error when `earth_radius` is not a positive finite
    /// number, when any reference coordinate is non-finite, or when the two
    /// reference points coincide (or overflow) on either global or screen axis.
    pub fn new(p0: ReferencePoint, p1: ReferencePoint, earth_radius: f64) -> OverlayResult<Self> {
        match Self::calibrate(p0, p1, earth_radius) {
            Ok(projector) => {
                tracing::debug!(
                    p0_global = %projector.p0.global,
                    p1_global = %projector.p1.global,
                    lng_scale = projector.lng_scale,
                    "projector calibrated"
                );
                Ok(projector)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected projector calibration");
                Err(e)
            }
        }
    }

    /// Build from a deserialized [`ProjectorConfig`].
    pub fn from_config(config: &ProjectorConfig) -> OverlayResult<Self> {
        Self::new(config.p0, config.p1, config.earth_radius)
    }

    fn calibrate(
        mut p0: ReferencePoint,
        mut p1: ReferencePoint,
        earth_radius: f64,
    ) -> OverlayResult<Self> {
        if !(earth_radius.is_finite() && earth_radius > 0.0) {
            return Err(OverlayError::Config(format!(
                "earth radius must be positive and finite, got {earth_radius}"
            )));
        }
        for (name, p) in [("p0", &p0), ("p1", &p1)] {
            if !p.is_finite() {
                return Err(OverlayError::Config(format!(
                    "reference point {name} has a non-finite coordinate: screen {}, geo {}",
                    p.screen, p.geo
                )));
            }
        }

        // The mean latitude goes into `cos` unconverted.  The factor cancels
        // out of every screen result; only `geo_to_global` sees it.
        let mean_lat = (p0.geo.lat + p1.geo.lat) * 0.5;
        let lng_scale = earth_radius * mean_lat.cos();
        if !(lng_scale.is_finite() && lng_scale != 0.0) {
            return Err(OverlayError::Config(format!(
                "longitude scale {lng_scale} is unusable for mean latitude {mean_lat}"
            )));
        }

        p0.global = stage_a(p0.geo, earth_radius, lng_scale);
        p1.global = stage_a(p1.geo, earth_radius, lng_scale);

        // Every denominator used by the forward and inverse maps must be a
        // non-zero finite number.
        for axis in [Axis::X, Axis::Y] {
            let spans = [
                ("global", p0.global.get(axis), p1.global.get(axis)),
                ("screen", p0.screen.get(axis), p1.screen.get(axis)),
            ];
            for (plane, a, b) in spans {
                let span = b - a;
                if span == 0.0 {
                    return Err(OverlayError::DegenerateSpan { plane, axis, value: a });
                }
                if !span.is_finite() {
                    return Err(OverlayError::Config(format!(
                        "{plane} {axis} span from {a} to {b} is not finite"
                    )));
                }
            }
        }

        Ok(Self { p0, p1, earth_radius, lng_scale })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn p0(&self) -> &ReferencePoint {
        &self.p0
    }

    #[inline]
    pub fn p1(&self) -> &ReferencePoint {
        &self.p1
    }

    /// Cached global coordinates of `(p0, p1)`.
    #[inline]
    pub fn reference_globals(&self) -> (GlobalPoint, GlobalPoint) {
        (self.p0.global, self.p1.global)
    }

    #[inline]
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// The configuration this projector was built from.
    pub fn to_config(&self) -> ProjectorConfig {
        ProjectorConfig {
            p0:           ReferencePoint::new(self.p0.screen, self.p0.geo),
            p1:           ReferencePoint::new(self.p1.screen, self.p1.geo),
            earth_radius: self.earth_radius,
        }
    }

    // ── Stage A ───────────────────────────────────────────────────────────

    /// Project a geographic coordinate onto the global plane.
    #[inline]
    pub fn geo_to_global(&self, geo: GeoPoint) -> GlobalPoint {
        stage_a(geo, self.earth_radius, self.lng_scale)
    }

    // ── Stage B ───────────────────────────────────────────────────────────

    /// Position of `geo` relative to the reference rectangle, per axis.
    ///
    /// `0.0` is on `p0`, `1.0` on `p1`; values outside `[0, 1]` lie beyond
    /// the calibrated area.
    pub fn fractions(&self, geo: GeoPoint) -> (f64, f64) {
        let g = self.geo_to_global(geo);
        let (g0, g1) = (self.p0.global, self.p1.global);
        (
            (g.x - g0.x) / (g1.x - g0.x),
            (g.y - g0.y) / (g1.y - g0.y),
        )
    }

    /// Convert a geographic coordinate to a screen coordinate.
    ///
    /// Non-finite input propagates to non-finite output; use
    /// [`try_geo_to_screen`](Self::try_geo_to_screen) to reject it instead.
    pub fn geo_to_screen(&self, geo: GeoPoint) -> ScreenPoint {
        let (fx, fy) = self.fractions(geo);
        let (s0, s1) = (self.p0.screen, self.p1.screen);
        ScreenPoint {
            x: s0.x + (s1.x - s0.x) * fx,
            y: s0.y + (s1.y - s0.y) * fy,
        }
    }

    /// [`geo_to_screen`](Self::geo_to_screen) with a non-finite input check.
    pub fn try_geo_to_screen(&self, geo: GeoPoint) -> OverlayResult<ScreenPoint> {
        if !geo.is_finite() {
            return Err(OverlayError::InvalidInput(geo));
        }
        Ok(self.geo_to_screen(geo))
    }

    /// Project every point of `geos`, preserving order.
    pub fn project_all<I>(&self, geos: I) -> Vec<ScreenPoint>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        geos.into_iter().map(|g| self.geo_to_screen(g)).collect()
    }

    /// `true` when `geo` falls inside (or on the edge of) the rectangle
    /// spanned by the two reference points.
    pub fn contains(&self, geo: GeoPoint) -> bool {
        let (fx, fy) = self.fractions(geo);
        (0.0..=1.0).contains(&fx) && (0.0..=1.0).contains(&fy)
    }

    // ── Inverse ───────────────────────────────────────────────────────────

    /// Inverse of [`geo_to_screen`](Self::geo_to_screen): the geographic
    /// coordinate that lands on `screen`.
    pub fn screen_to_geo(&self, screen: ScreenPoint) -> GeoPoint {
        let (s0, s1) = (self.p0.screen, self.p1.screen);
        let (g0, g1) = (self.p0.global, self.p1.global);
        let fx = (screen.x - s0.x) / (s1.x - s0.x);
        let fy = (screen.y - s0.y) / (s1.y - s0.y);
        let gx = g0.x + (g1.x - g0.x) * fx;
        let gy = g0.y + (g1.y - g0.y) * fy;
        GeoPoint {
            lat: gy / self.earth_radius,
            lng: gx / self.lng_scale,
        }
    }

    // ── Self-test ─────────────────────────────────────────────────────────

    /// Largest per-axis error when projecting the reference points back onto
    /// their own screen positions.  Zero up to rounding for any projector
    /// that `new` accepted; useful as a sanity check after loading a config.
    pub fn calibration_residual(&self) -> f64 {
        [self.p0, self.p1]
            .iter()
            .map(|r| self.geo_to_screen(r.geo).max_abs_diff(r.screen))
            .fold(0.0, f64::max)
    }
}

#[inline]
fn stage_a(geo: GeoPoint, earth_radius: f64, lng_scale: f64) -> GlobalPoint {
    GlobalPoint {
        x: lng_scale * geo.lng,
        y: earth_radius * geo.lat,
    }
}

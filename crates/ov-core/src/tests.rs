//! Unit tests for ov-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn finite_check() {
        assert!(GeoPoint::new(-22.8, -47.07).is_finite());
        assert!(!GeoPoint::new(f64::NAN, -47.07).is_finite());
        assert!(!GeoPoint::new(-22.8, f64::INFINITY).is_finite());
    }

    #[test]
    fn lerp_midpoint_and_extrapolation() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 16.0);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(11.0, 18.0));
        // t outside [0, 1] keeps going along the same line
        assert_eq!(a.lerp(b, 2.0), GeoPoint::new(14.0, 12.0));
        assert_eq!(a.lerp(b, 0.0), a);
    }

    #[test]
    fn display() {
        let p = GeoPoint::new(-22.815319, -47.071718);
        assert_eq!(p.to_string(), "(-22.815319, -47.071718)");
    }
}

#[cfg(test)]
mod planar {
    use crate::{Axis, GlobalPoint, ScreenPoint};

    #[test]
    fn screen_lerp() {
        let a = ScreenPoint::new(0.0, 10.0);
        let b = ScreenPoint::new(100.0, 20.0);
        assert_eq!(a.lerp(b, 0.25), ScreenPoint::new(25.0, 12.5));
        assert_eq!(a.lerp(b, -1.0), ScreenPoint::new(-100.0, 0.0));
    }

    #[test]
    fn max_abs_diff_is_chebyshev() {
        let a = ScreenPoint::new(1.0, 1.0);
        let b = ScreenPoint::new(1.5, -2.0);
        assert_eq!(a.max_abs_diff(b), 3.0);
        assert_eq!(a.max_abs_diff(a), 0.0);
    }

    #[test]
    fn axis_accessors() {
        let s = ScreenPoint::new(3.0, 4.0);
        let g = GlobalPoint::new(-1.0, 2.0);
        assert_eq!(s.get(Axis::X), 3.0);
        assert_eq!(s.get(Axis::Y), 4.0);
        assert_eq!(g.get(Axis::X), -1.0);
        assert_eq!(g.get(Axis::Y), 2.0);
    }

    #[test]
    fn display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(ScreenPoint::new(150.87417, 49.41181).to_string(), "[150.8742, 49.4118]");
    }
}

#[cfg(test)]
mod error {
    use crate::{Axis, GeoPoint, OverlayError};

    #[test]
    fn configuration_classification() {
        let degenerate = OverlayError::DegenerateSpan { plane: "global", axis: Axis::X, value: 1.0 };
        assert!(degenerate.is_configuration());
        assert!(OverlayError::Config("radius".into()).is_configuration());
        assert!(!OverlayError::InvalidInput(GeoPoint::new(f64::NAN, 0.0)).is_configuration());
    }

    #[test]
    fn messages_name_the_axis() {
        let e = OverlayError::DegenerateSpan { plane: "global", axis: Axis::Y, value: -145.5 };
        assert_eq!(
            e.to_string(),
            "configuration error: reference points share global y = -145.5"
        );
    }
}

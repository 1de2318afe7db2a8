//! Planar coordinate types.
//!
//! Two planes take part in every projection:
//!
//!   geo ──(equirectangular scale)──▶ global ──(two-point affine)──▶ screen
//!
//! `GlobalPoint` is the intermediate plane, in whatever linear unit the earth
//! radius was given in.  `ScreenPoint` is in the host's display unit (em,
//! px, …); this crate never interprets it.

use std::fmt;

// ── Axis ─────────────────────────────────────────────────────────────────────

/// A planar axis label, used in error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
        };
        f.write_str(s)
    }
}

// ── ScreenPoint ──────────────────────────────────────────────────────────────

/// A position on the target display surface.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unclamped linear interpolation towards `other`.
    #[inline]
    pub fn lerp(self, other: ScreenPoint, t: f64) -> ScreenPoint {
        ScreenPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Largest per-axis absolute difference (Chebyshev distance).
    #[inline]
    pub fn max_abs_diff(self, other: ScreenPoint) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    #[inline]
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.x, self.y)
    }
}

// ── GlobalPoint ──────────────────────────────────────────────────────────────

/// A position on the intermediate equirectangular plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalPoint {
    pub x: f64,
    pub y: f64,
}

impl GlobalPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl fmt::Display for GlobalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.6}, {:.6}>", self.x, self.y)
    }
}

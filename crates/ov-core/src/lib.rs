//! `ov-core` — foundational types for the `geo_overlay` workspace.
//!
//! This crate is a dependency of every other `ov-*` crate.  It has no `ov-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, `EARTH_RADIUS_KM`                             |
//! | [`planar`]  | `ScreenPoint`, `GlobalPoint`, `Axis`                      |
//! | [`error`]   | `OverlayError`, `OverlayResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `ov-projector`.                                |

pub mod error;
pub mod geo;
pub mod planar;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{OverlayError, OverlayResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint};
pub use planar::{Axis, GlobalPoint, ScreenPoint};

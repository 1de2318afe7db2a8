//! `ov-projector` — places geographic markers on a pre-calibrated screen.
//!
//! # Two-stage pipeline
//!
//! ```text
//! geo (lat, lng)
//!   ① Stage A — equirectangular scale into the global plane:
//!                 x = R · lng · cos(mean reference latitude)
//!                 y = R · lat
//!   ② Stage B — per-axis affine map between the two reference points:
//!                 frac = (g - p0.global) / (p1.global - p0.global)
//!                 s    = p0.screen + (p1.screen - p0.screen) · frac
//! screen (x, y)
//! ```
//!
//! Fractions are never clamped: points outside the calibrated rectangle
//! extrapolate to screen positions outside it.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`reference`] | `ReferencePoint`                                        |
//! | [`projector`] | `Projector`                                             |
//! | [`builder`]   | `ProjectorBuilder`                                      |
//! | [`config`]    | `ProjectorConfig` (serde)                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ov_core::{GeoPoint, ScreenPoint};
//! use ov_projector::ProjectorBuilder;
//!
//! let projector = ProjectorBuilder::new(6.371)
//!     .top_left(ScreenPoint::new(23.69, -0.5), GeoPoint::new(-22.814895, -47.072892))
//!     .bottom_right(ScreenPoint::new(276.0, 178.9), GeoPoint::new(-22.816419, -47.070563))
//!     .build()?;
//! let pos = projector.geo_to_screen(GeoPoint::new(-22.815319, -47.071718));
//! ```

pub mod builder;
pub mod config;
pub mod projector;
pub mod reference;


pub use builder::ProjectorBuilder;
pub use config::ProjectorConfig;
pub use projector::Projector;
pub use reference::ReferencePoint;

//! campinas — place a marker on a static campus map overlay.
//!
//! The overlay is calibrated by its top-left and bottom-right corners, whose
//! screen positions (in em) and coordinates were read off the map image.
//!
//! ```text
//! campinas                              # built-in calibration + sample marker
//! campinas -22.8160,-47.0712 ...        # project the given lat,lng pairs
//! campinas --config overlay.json ...    # calibration from a ProjectorConfig file
//! ```
//!
//! Set `RUST_LOG=debug` to see the calibration being computed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use ov_core::{GeoPoint, ScreenPoint};
use ov_projector::{Projector, ProjectorConfig, ReferencePoint};

// ── Built-in calibration ──────────────────────────────────────────────────────

/// Earth radius in units of 1000 km; cancels out of the screen result.
const EARTH_RADIUS: f64 = 6.371;

/// Marker shown when no points are given on the command line.
const SAMPLE_MARKER: GeoPoint = GeoPoint { lat: -22.815319, lng: -47.071718 };

fn builtin_config() -> ProjectorConfig {
    ProjectorConfig {
        // top-left corner of the map image
        p0: ReferencePoint::new(
            ScreenPoint::new(23.69, -0.5),
            GeoPoint::new(-22.814895, -47.072892),
        ),
        // bottom-right corner
        p1: ReferencePoint::new(
            ScreenPoint::new(276.0, 178.9),
            GeoPoint::new(-22.816419, -47.070563),
        ),
        earth_radius: EARTH_RADIUS,
    }
}

// ── Argument handling ─────────────────────────────────────────────────────────

struct Args {
    config_path: Option<String>,
    points:      Vec<GeoPoint>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut config_path = None;
    let mut points = Vec::new();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        if arg == "--config" {
            let path = it.next().context("--config needs a path")?;
            config_path = Some(path);
        } else {
            points.push(parse_point(&arg)?);
        }
    }
    Ok(Args { config_path, points })
}

/// Parse `"lat,lng"` in decimal degrees.
fn parse_point(s: &str) -> Result<GeoPoint> {
    let Some((lat, lng)) = s.split_once(',') else {
        bail!("expected lat,lng but got {s:?}");
    };
    let lat: f64 = lat.trim().parse().with_context(|| format!("bad latitude in {s:?}"))?;
    let lng: f64 = lng.trim().parse().with_context(|| format!("bad longitude in {s:?}"))?;
    Ok(GeoPoint::new(lat, lng))
}

fn load_config(path: &Path) -> Result<ProjectorConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config_path {
        Some(path) => load_config(Path::new(path))?,
        None => builtin_config(),
    };
    let projector = Projector::from_config(&config)?;
    tracing::info!(
        p0 = %projector.p0().geo,
        p1 = %projector.p1().geo,
        residual = projector.calibration_residual(),
        "overlay calibrated"
    );

    if args.points.is_empty() {
        let pos = projector.try_geo_to_screen(SAMPLE_MARKER)?;
        println!("posx {}", pos.x);
        println!("posy {}", pos.y);
        return Ok(());
    }

    for geo in args.points {
        let pos = projector.try_geo_to_screen(geo)?;
        if !projector.contains(geo) {
            tracing::warn!(%geo, "point lies outside the calibrated overlay");
        }
        println!("{geo} -> {pos}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_calibration_places_sample_marker() {
        let projector = Projector::from_config(&builtin_config()).unwrap();
        let pos = projector.geo_to_screen(SAMPLE_MARKER);
        assert!((pos.x - 150.8742).abs() < 1e-4, "got {pos}");
        assert!((pos.y - 49.4118).abs() < 1e-4, "got {pos}");
    }

    #[test]
    fn parses_points_and_config_flag() {
        let args = parse_args(
            ["-22.8160,-47.0712", "--config", "overlay.json", " -22.8 , -47.07 "]
                .map(String::from),
        )
        .unwrap();
        assert_eq!(args.config_path.as_deref(), Some("overlay.json"));
        assert_eq!(args.points.len(), 2);
        assert_eq!(args.points[0], GeoPoint::new(-22.8160, -47.0712));
        assert_eq!(args.points[1], GeoPoint::new(-22.8, -47.07));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_point("-22.8").is_err());
        assert!(parse_point("north,-47.07").is_err());
        assert!(parse_args(["--config".to_string()]).is_err());
    }

    #[test]
    fn loads_config_file() {
        let json = serde_json::to_string(&builtin_config()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_config(file.path()).unwrap();
        let projector = Projector::from_config(&loaded).unwrap();
        assert!(projector.calibration_residual() < 1e-9);
    }

    #[test]
    fn missing_config_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("absent.json"), "got {err}");
    }
}

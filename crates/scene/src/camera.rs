use serde::{Deserialize, Serialize};

/// Camera position in WGS84.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
    /// Height above the ellipsoid in meters.
    pub z_m: f64,
}

impl GeoPosition {
    pub fn new(lon_deg: f64, lat_deg: f64, z_m: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            z_m,
        }
    }
}

/// A viewpoint snapshot: position plus orientation.
///
/// Poses are plain values. A pose captured from a live camera is an
/// independent copy; later camera movement never alters it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: GeoPosition,
    /// Compass heading in degrees, 0 = north, clockwise.
    #[serde(default)]
    pub heading_deg: f64,
    /// Tilt from nadir in degrees, 0 = looking straight down.
    #[serde(default)]
    pub tilt_deg: f64,
}

impl CameraPose {
    pub fn new(position: GeoPosition, heading_deg: f64, tilt_deg: f64) -> Self {
        Self {
            position,
            heading_deg,
            tilt_deg,
        }
    }

    /// Overhead pose looking straight down at a point.
    pub fn overhead(lon_deg: f64, lat_deg: f64, z_m: f64) -> Self {
        Self::new(GeoPosition::new(lon_deg, lat_deg, z_m), 0.0, 0.0)
    }
}

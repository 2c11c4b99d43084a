use serde::{Deserialize, Serialize};

/// Geographic extent in WGS84 degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoExtent {
    pub xmin_deg: f64,
    pub ymin_deg: f64,
    pub xmax_deg: f64,
    pub ymax_deg: f64,
}

impl GeoExtent {
    pub fn new(xmin_deg: f64, ymin_deg: f64, xmax_deg: f64, ymax_deg: f64) -> Self {
        Self {
            xmin_deg,
            ymin_deg,
            xmax_deg,
            ymax_deg,
        }
    }

    pub fn contains(&self, lon_deg: f64, lat_deg: f64) -> bool {
        lon_deg >= self.xmin_deg
            && lon_deg <= self.xmax_deg
            && lat_deg >= self.ymin_deg
            && lat_deg <= self.ymax_deg
    }

    /// Center point as (lon, lat) in degrees.
    pub fn center(&self) -> (f64, f64) {
        (
            0.5 * (self.xmin_deg + self.xmax_deg),
            0.5 * (self.ymin_deg + self.ymax_deg),
        )
    }

    pub fn width_deg(&self) -> f64 {
        self.xmax_deg - self.xmin_deg
    }

    pub fn height_deg(&self) -> f64 {
        self.ymax_deg - self.ymin_deg
    }
}

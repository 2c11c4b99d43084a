use scene::CameraPose;
use serde::{Deserialize, Serialize};

/// Current export format version.
pub const TOUR_PATH_VERSION: u32 = 1;

/// A recorded camera path in exportable form.
///
/// Paths are small JSON documents; the recorder itself never persists
/// anything, export is an explicit user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPath {
    #[serde(default = "default_version")]
    pub version: u32,
    pub waypoints: Vec<CameraPose>,
}

fn default_version() -> u32 {
    TOUR_PATH_VERSION
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourPathError {
    Malformed(String),
    UnsupportedVersion(u32),
}

impl std::fmt::Display for TourPathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourPathError::Malformed(msg) => write!(f, "malformed tour path: {msg}"),
            TourPathError::UnsupportedVersion(v) => {
                write!(f, "unsupported tour path version {v}")
            }
        }
    }
}

impl std::error::Error for TourPathError {}

impl TourPath {
    pub fn new(waypoints: Vec<CameraPose>) -> Self {
        Self {
            version: TOUR_PATH_VERSION,
            waypoints,
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn into_waypoints(self) -> Vec<CameraPose> {
        self.waypoints
    }

    pub fn to_json(&self) -> String {
        // Serialization of plain numeric fields cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self, TourPathError> {
        let path: TourPath =
            serde_json::from_str(json).map_err(|e| TourPathError::Malformed(e.to_string()))?;
        if path.version > TOUR_PATH_VERSION {
            return Err(TourPathError::UnsupportedVersion(path.version));
        }
        Ok(path)
    }
}

use foundation::GeoExtent;
use serde::{Deserialize, Serialize};

use crate::basemap::BasemapId;
use crate::camera::CameraPose;

/// How the scene treats the globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewingMode {
    /// Planar scene clipped to an extent.
    Local,
    /// Whole-globe scene.
    Global,
}

/// Scene environment settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub background: [u8; 3],
    pub stars_enabled: bool,
    pub atmosphere_enabled: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            background: [25, 25, 25],
            stars_enabled: false,
            atmosphere_enabled: false,
        }
    }
}

/// Static scene setup handed to the host shell at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub viewing_mode: ViewingMode,
    pub clipping_extent: GeoExtent,
    pub initial_camera: CameraPose,
    pub environment: Environment,
    pub basemap: BasemapId,
}

impl SceneConfig {
    /// The Hukou workstation service area: a local scene over the
    /// Hsinchu/Taoyuan irrigation district.
    pub fn hukou_service_area() -> Self {
        Self {
            viewing_mode: ViewingMode::Local,
            clipping_extent: GeoExtent::new(120.95, 24.8725, 121.117, 24.9825),
            initial_camera: CameraPose::new(
                crate::camera::GeoPosition::new(121.05, 24.9, 3500.0),
                0.0,
                65.0,
            ),
            environment: Environment::default(),
            basemap: BasemapId::Gray,
        }
    }
}

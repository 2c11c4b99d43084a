use serde::{Deserialize, Serialize};

/// Basemaps offered in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasemapId {
    Osm,
    Satellite,
    Gray,
}

impl BasemapId {
    pub const GALLERY: [BasemapId; 3] = [BasemapId::Osm, BasemapId::Satellite, BasemapId::Gray];

    pub fn as_str(&self) -> &'static str {
        match self {
            BasemapId::Osm => "osm",
            BasemapId::Satellite => "satellite",
            BasemapId::Gray => "gray",
        }
    }
}

/// Basemap gallery selection plus base-layer opacity.
///
/// Opacity is a property of the viewer, not of a particular basemap, so it
/// is reapplied whenever the basemap changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasemapState {
    pub current: BasemapId,
    pub opacity: f64,
}

impl BasemapState {
    pub fn new(current: BasemapId) -> Self {
        Self {
            current,
            opacity: 1.0,
        }
    }

    pub fn set_basemap(&mut self, id: BasemapId) {
        self.current = id;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

impl Default for BasemapState {
    fn default() -> Self {
        Self::new(BasemapId::Gray)
    }
}

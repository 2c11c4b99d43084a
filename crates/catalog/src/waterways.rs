//! The fixed layer catalog for the Hukou workstation service area.
//!
//! Everything here is declarative: titles, feature-service URLs, default
//! visibilities and symbol data, assembled in the order the scene expects.

use foundation::Rgba;

use crate::layer::{ElevationLayerDef, FeatureLayerDef, GroupLayerDef, LayerNode, VisibilityMode};
use crate::symbol::{LinePattern, MarkerShape, Outline, PopupTemplate, Symbol};

/// Root of the hosted feature services backing the catalog.
pub const SERVICE_ROOT: &str = "https://gisportal.triwra.org.tw/server/rest/services/Hosted";

/// World elevation image service used for the ground.
pub const ELEVATION_URL: &str =
    "https://elevation3d.arcgis.com/arcgis/rest/services/WorldElevation3D/Terrain3D/ImageServer";

fn service_url(path: &str) -> String {
    format!("{SERVICE_ROOT}/{path}")
}

/// The elevation ground layer at a given exaggeration factor.
pub fn ground_layer(exaggeration: f64) -> ElevationLayerDef {
    ElevationLayerDef {
        url: ELEVATION_URL.to_string(),
        exaggeration,
    }
}

fn line_layer(
    title: &str,
    path: &str,
    visible: bool,
    color: Rgba,
    width: f32,
    pattern: LinePattern,
) -> FeatureLayerDef {
    FeatureLayerDef {
        title: title.to_string(),
        url: service_url(path),
        visible,
        symbol: Symbol::line(color, width, pattern),
        popup: PopupTemplate::name_and_oid(),
    }
}

fn fill_layer(title: &str, path: &str, visible: bool, color: Rgba, outline: Outline) -> FeatureLayerDef {
    FeatureLayerDef {
        title: title.to_string(),
        url: service_url(path),
        visible,
        symbol: Symbol::fill(color, outline),
        popup: PopupTemplate::name_and_area(),
    }
}

/// The workstation's supply line.
pub fn hukou_workstation() -> FeatureLayerDef {
    line_layer(
        "Hukou workstation",
        "hukou_workstation/FeatureServer",
        true,
        Rgba::from_u8(255, 0, 0, 0.9),
        4.0,
        LinePattern::Solid,
    )
}

/// Land-use parcels, three classifications under one switch.
pub fn landuse_group() -> GroupLayerDef {
    GroupLayerDef {
        title: "Land use".to_string(),
        visible: false,
        visibility_mode: VisibilityMode::Independent,
        layers: vec![
            LayerNode::Feature(fill_layer(
                "Ownership type",
                "landuse/FeatureServer/6",
                true,
                Rgba::from_u8(255, 200, 0, 0.3),
                Outline::new(Rgba::from_u8(255, 200, 0, 0.9), 2.0),
            )),
            LayerNode::Feature(fill_layer(
                "Water-use parcels",
                "landuse/FeatureServer/7",
                true,
                Rgba::from_u8(0, 120, 255, 0.3),
                Outline::new(Rgba::from_u8(0, 120, 255, 0.9), 2.0),
            )),
            LayerNode::Feature(fill_layer(
                "Irrigation groups",
                "landuse/FeatureServer/8",
                true,
                Rgba::from_u8(0, 200, 100, 0.3),
                Outline::new(Rgba::from_u8(0, 200, 100, 0.9), 2.0),
            )),
        ],
    }
}

/// Retention ponds with surveyed elevations.
pub fn ponds() -> FeatureLayerDef {
    fill_layer(
        "Ponds (surveyed elevation)",
        "ponds/FeatureServer",
        false,
        Rgba::from_u8(180, 180, 180, 0.28),
        Outline::new(Rgba::from_u8(120, 120, 120, 0.9), 2.0),
    )
}

/// Canal network by hierarchy level.
pub fn canal_group() -> GroupLayerDef {
    GroupLayerDef {
        title: "Canals".to_string(),
        visible: false,
        visibility_mode: VisibilityMode::Independent,
        layers: vec![
            LayerNode::Feature(line_layer(
                "Main canals",
                "canal/FeatureServer/4",
                true,
                Rgba::from_u8(0, 180, 255, 0.85),
                3.0,
                LinePattern::Solid,
            )),
            LayerNode::Feature(line_layer(
                "Branch canals",
                "canal/FeatureServer/11",
                true,
                Rgba::from_u8(0, 140, 100, 0.85),
                2.4,
                LinePattern::Solid,
            )),
            LayerNode::Feature(line_layer(
                "Sub-branch canals",
                "canal/FeatureServer/20",
                true,
                Rgba::from_u8(130, 80, 220, 0.85),
                2.0,
                LinePattern::Solid,
            )),
            LayerNode::Feature(line_layer(
                "Intakes",
                "canal/FeatureServer/21",
                true,
                Rgba::from_u8(230, 80, 80, 0.85),
                2.0,
                LinePattern::Dash,
            )),
            LayerNode::Feature(line_layer(
                "Drainage channels",
                "canal/FeatureServer/22",
                true,
                Rgba::from_u8(0, 0, 0, 0.85),
                1.6,
                LinePattern::Dot,
            )),
        ],
    }
}

/// Rivers, tributaries and district drains.
pub fn river_group() -> GroupLayerDef {
    GroupLayerDef {
        title: "Rivers".to_string(),
        visible: false,
        visibility_mode: VisibilityMode::Independent,
        layers: vec![
            LayerNode::Feature(line_layer(
                "River channels",
                "river/FeatureServer/13",
                true,
                Rgba::from_u8(0, 120, 200, 1.0),
                2.0,
                LinePattern::Solid,
            )),
            LayerNode::Feature(line_layer(
                "Tributaries",
                "river/FeatureServer/14",
                true,
                Rgba::from_u8(50, 150, 80, 1.0),
                1.5,
                LinePattern::Dot,
            )),
            LayerNode::Feature(line_layer(
                "District drains",
                "river/FeatureServer/15",
                true,
                Rgba::from_u8(150, 80, 0, 1.0),
                1.0,
                LinePattern::Dash,
            )),
        ],
    }
}

/// Weirs currently in service.
pub fn active_weir_group() -> GroupLayerDef {
    GroupLayerDef {
        title: "Active river weirs".to_string(),
        visible: false,
        visibility_mode: VisibilityMode::Independent,
        layers: vec![
            LayerNode::Feature(FeatureLayerDef {
                title: "Weirs with water rights".to_string(),
                url: service_url("active_river_weirs/FeatureServer/1"),
                visible: true,
                symbol: Symbol::marker(
                    MarkerShape::Circle,
                    9.0,
                    Rgba::from_u8(50, 200, 255, 0.85),
                    Outline::new(Rgba::from_u8(0, 100, 200, 1.0), 2.0),
                ),
                popup: PopupTemplate::name_and_oid(),
            }),
            LayerNode::Feature(FeatureLayerDef {
                title: "Weirs in use".to_string(),
                url: service_url("active_river_weirs/FeatureServer/2"),
                visible: true,
                symbol: Symbol::marker(
                    MarkerShape::Cross,
                    11.0,
                    Rgba::from_u8(255, 200, 50, 0.85),
                    Outline::new(Rgba::from_u8(120, 80, 0, 1.0), 2.0),
                ),
                popup: PopupTemplate::name_and_oid(),
            }),
        ],
    }
}

/// 10 m interval contour lines.
pub fn contours() -> FeatureLayerDef {
    line_layer(
        "Contours (10 m)",
        "contours_10m/FeatureServer",
        false,
        Rgba::from_u8(120, 120, 200, 1.0),
        1.0,
        LinePattern::Dash,
    )
}

/// A restoration site: marker layer plus the irrigation-group polygon it
/// serves, toggled together.
pub fn weir_set(title: &str, point_layer: u32, polygon_layer: u32) -> GroupLayerDef {
    let point = FeatureLayerDef {
        title: format!("{title} (site)"),
        url: service_url(&format!("river_weir_restoration/FeatureServer/{point_layer}")),
        visible: true,
        symbol: Symbol::marker(
            MarkerShape::Diamond,
            14.0,
            Rgba::from_u8(180, 0, 255, 0.8),
            Outline::new(Rgba::from_u8(80, 0, 200, 0.9), 2.0),
        ),
        popup: PopupTemplate::name_and_oid(),
    };
    let polygon = FeatureLayerDef {
        title: format!("{title} (irrigation group)"),
        url: service_url(&format!(
            "river_weir_restoration/FeatureServer/{polygon_layer}"
        )),
        visible: true,
        symbol: Symbol::fill(
            Rgba::from_u8(255, 240, 150, 0.22),
            Outline::new(Rgba::from_u8(255, 200, 0, 0.9), 2.0),
        ),
        popup: PopupTemplate::name_and_area(),
    };
    GroupLayerDef {
        title: title.to_string(),
        visible: true,
        visibility_mode: VisibilityMode::Inherited,
        layers: vec![LayerNode::Feature(polygon), LayerNode::Feature(point)],
    }
}

/// Weir restoration sites: (name, point sublayer, polygon sublayer).
const WEIR_RESTORATION_SITES: [(&str, u32, u32); 12] = [
    ("Yuanshan Creek No. 1", 42, 58),
    ("Dashenkeng Creek No. 2", 41, 57),
    ("Dashenkeng Creek No. 3", 40, 56),
    ("Dashenkeng Creek No. 4", 39, 55),
    ("Deya Creek No. 9", 38, 54),
    ("Lao Creek No. 2", 37, 53),
    ("Lao Creek No. 3", 36, 52),
    ("Deya Creek No. 8", 35, 51),
    ("Deya Creek No. 7", 34, 50),
    ("Beishi Creek No. 10", 33, 49),
    ("Beishi Creek No. 9", 32, 48),
    ("Niudou Creek No. 8", 31, 47),
];

/// All restoration sites under one master switch, hidden by default.
pub fn weir_restoration_group() -> GroupLayerDef {
    GroupLayerDef {
        title: "River weir restoration".to_string(),
        visible: false,
        visibility_mode: VisibilityMode::Independent,
        layers: WEIR_RESTORATION_SITES
            .iter()
            .map(|(title, point, polygon)| LayerNode::Group(weir_set(title, *point, *polygon)))
            .collect(),
    }
}

/// The full catalog in scene stacking order (buildings and ground are
/// handled separately, see `buildings` and the scene config).
pub fn map_layers() -> Vec<LayerNode> {
    vec![
        LayerNode::Feature(hukou_workstation()),
        LayerNode::Feature(contours()),
        LayerNode::Group(landuse_group()),
        LayerNode::Group(canal_group()),
        LayerNode::Group(river_group()),
        LayerNode::Feature(ponds()),
        LayerNode::Group(active_weir_group()),
        LayerNode::Group(weir_restoration_group()),
    ]
}

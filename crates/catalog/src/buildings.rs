//! 3D building mass layers streamed from the national i3s service.
//!
//! These load after the scene is up; each layer is probed individually so a
//! missing county service never blocks the rest of the viewer.

use foundation::Rgba;

use crate::layer::SceneLayerDef;
use crate::symbol::Symbol;

/// Translucent white masses with thin dark edges, shared by every
/// building layer.
pub fn building_mesh_symbol() -> Symbol {
    Symbol::Mesh {
        color: Rgba::from_u8(255, 255, 255, 0.1),
        edge_color: Rgba::from_u8(50, 50, 50, 0.5),
        edge_size: 1.0,
    }
}

/// Building layers to attempt loading, in order.
pub fn building_layers() -> Vec<SceneLayerDef> {
    let symbol = building_mesh_symbol();
    vec![
        SceneLayerDef {
            title: "Hsinchu buildings".to_string(),
            url: "https://i3s.nlsc.gov.tw/building/i3s/SceneServer/layers/9".to_string(),
            symbol,
        },
        SceneLayerDef {
            title: "Taoyuan buildings".to_string(),
            url: "https://i3s.nlsc.gov.tw/building/i3s/SceneServer/layers/7".to_string(),
            symbol,
        },
    ]
}

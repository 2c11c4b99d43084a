use foundation::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePattern {
    Solid,
    Dash,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Circle,
    Diamond,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Rgba,
    pub width: f32,
}

impl Outline {
    pub fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Symbol *data* for a layer. Rendering belongs to the SDK; the catalog
/// only declares what each layer should look like.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Symbol {
    Line {
        color: Rgba,
        width: f32,
        pattern: LinePattern,
    },
    Fill {
        color: Rgba,
        outline: Outline,
    },
    Marker {
        shape: MarkerShape,
        size: f32,
        color: Rgba,
        outline: Outline,
    },
    /// 3D building meshes: translucent fill with solid edges.
    Mesh {
        color: Rgba,
        edge_color: Rgba,
        edge_size: f32,
    },
}

impl Symbol {
    pub fn line(color: Rgba, width: f32, pattern: LinePattern) -> Self {
        Symbol::Line {
            color,
            width,
            pattern,
        }
    }

    pub fn fill(color: Rgba, outline: Outline) -> Self {
        Symbol::Fill { color, outline }
    }

    pub fn marker(shape: MarkerShape, size: f32, color: Rgba, outline: Outline) -> Self {
        Symbol::Marker {
            shape,
            size,
            color,
            outline,
        }
    }
}

/// Popup shown when a feature is clicked. `{field}` placeholders are
/// substituted by the SDK from feature attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupTemplate {
    pub title: String,
    pub content: String,
}

impl PopupTemplate {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The standard popup for line/point features: name plus object id.
    pub fn name_and_oid() -> Self {
        Self::new("{name}", "OID: {OBJECTID}")
    }

    /// The standard popup for polygon features: name plus area.
    pub fn name_and_area() -> Self {
        Self::new("{name}", "Area: {Shape_Area}")
    }
}

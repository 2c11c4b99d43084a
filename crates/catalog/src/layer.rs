use serde::{Deserialize, Serialize};

use crate::symbol::{PopupTemplate, Symbol};

/// How a group layer propagates visibility to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityMode {
    /// Children toggle freely under the group switch.
    Independent,
    /// Children always follow the group switch.
    Inherited,
}

/// One feature-service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureLayerDef {
    pub title: String,
    pub url: String,
    pub visible: bool,
    pub symbol: Symbol,
    pub popup: PopupTemplate,
}

/// A titled group of layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLayerDef {
    pub title: String,
    pub visible: bool,
    pub visibility_mode: VisibilityMode,
    pub layers: Vec<LayerNode>,
}

/// A streamed 3D mesh layer (i3s scene service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayerDef {
    pub title: String,
    pub url: String,
    pub symbol: Symbol,
}

/// An elevation (terrain) image service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationLayerDef {
    pub url: String,
    pub exaggeration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayerNode {
    Feature(FeatureLayerDef),
    Group(GroupLayerDef),
}

impl LayerNode {
    pub fn title(&self) -> &str {
        match self {
            LayerNode::Feature(f) => &f.title,
            LayerNode::Group(g) => &g.title,
        }
    }

    /// Number of feature layers in this subtree.
    pub fn feature_count(&self) -> usize {
        match self {
            LayerNode::Feature(_) => 1,
            LayerNode::Group(g) => g.layers.iter().map(LayerNode::feature_count).sum(),
        }
    }
}

impl GroupLayerDef {
    pub fn feature_count(&self) -> usize {
        self.layers.iter().map(LayerNode::feature_count).sum()
    }

    /// Depth-first search by title over the subtree.
    pub fn find(&self, title: &str) -> Option<&LayerNode> {
        for node in &self.layers {
            if node.title() == title {
                return Some(node);
            }
            if let LayerNode::Group(g) = node
                && let Some(found) = g.find(title)
            {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{FeatureLayerDef, GroupLayerDef, LayerNode, VisibilityMode};
    use crate::symbol::{LinePattern, PopupTemplate, Symbol};
    use foundation::Rgba;
    use pretty_assertions::assert_eq;

    fn line_layer(title: &str) -> LayerNode {
        LayerNode::Feature(FeatureLayerDef {
            title: title.to_string(),
            url: format!("https://example.test/{title}/FeatureServer/0"),
            visible: true,
            symbol: Symbol::line(Rgba::default(), 1.0, LinePattern::Solid),
            popup: PopupTemplate::name_and_oid(),
        })
    }

    #[test]
    fn feature_count_descends_into_groups() {
        let group = GroupLayerDef {
            title: "outer".to_string(),
            visible: true,
            visibility_mode: VisibilityMode::Independent,
            layers: vec![
                line_layer("a"),
                LayerNode::Group(GroupLayerDef {
                    title: "inner".to_string(),
                    visible: false,
                    visibility_mode: VisibilityMode::Inherited,
                    layers: vec![line_layer("b"), line_layer("c")],
                }),
            ],
        };
        assert_eq!(group.feature_count(), 3);
        assert_eq!(group.find("c").map(LayerNode::title), Some("c"));
        assert_eq!(group.find("missing"), None);
    }
}

use std::collections::HashMap;

use tracing::debug;

use crate::tracking::SpatialFrame;

use super::backend::{PlacementId, SceneBackend};
use super::template::PrefabTemplate;

/// One instantiated representation held by [`LocalScene`].
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub template: String,
    pub asset: String,
    pub scale: f32,
    pub frame: SpatialFrame,
    pub visible: bool,
}

/// In-memory scene backend.
///
/// Stands in for an engine scene graph in tests and the demo binary: nodes
/// are plain records keyed by their placement handle.
pub struct LocalScene {
    nodes: HashMap<PlacementId, SceneNode>,
}

impl LocalScene {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    pub fn node(&self, id: PlacementId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Visibility of a node; false for unknown handles.
    pub fn is_visible(&self, id: PlacementId) -> bool {
        self.nodes.get(&id).map_or(false, |node| node.visible)
    }

    pub fn contains(&self, id: PlacementId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlacementId, &SceneNode)> {
        self.nodes.iter()
    }
}

impl Default for LocalScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBackend for LocalScene {
    fn instantiate(&mut self, template: &PrefabTemplate, frame: &SpatialFrame) -> PlacementId {
        let id = PlacementId::new();
        self.nodes.insert(
            id,
            SceneNode {
                template: template.name.clone(),
                asset: template.asset.clone(),
                scale: template.scale,
                frame: *frame,
                visible: true,
            },
        );
        debug!("instantiated '{}' as node {}", template.name, id);
        id
    }

    fn set_visible(&mut self, id: PlacementId, visible: bool) {
        match self.nodes.get_mut(&id) {
            Some(node) => node.visible = visible,
            None => debug!("set_visible for unknown node {}", id),
        }
    }

    fn destroy(&mut self, id: PlacementId) {
        if self.nodes.remove(&id).is_some() {
            debug!("destroyed node {}", id);
        } else {
            debug!("destroy for unknown node {}", id);
        }
    }
}

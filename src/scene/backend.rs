use std::fmt;

use uuid::Uuid;

use crate::tracking::SpatialFrame;

use super::template::PrefabTemplate;

/// Owned handle to one placed representation.
///
/// The backend mints the id at instantiate time and the caller holds it for
/// the placement's lifetime; the backend owns whatever the handle renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementId(Uuid);

impl PlacementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlacementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scene-placement capability injected into the registrar.
///
/// All three operations are synchronous and infallible; passing an unknown
/// handle to `set_visible` or `destroy` is a silent no-op, mirroring the
/// registrar's own miss policy.
pub trait SceneBackend {
    /// Instantiate a representation attached to the given spatial frame and
    /// return the owned handle for it. New placements start visible.
    fn instantiate(&mut self, template: &PrefabTemplate, frame: &SpatialFrame) -> PlacementId;

    /// Show or hide a placement.
    fn set_visible(&mut self, id: PlacementId, visible: bool);

    /// Tear a placement down and release everything it rendered as.
    fn destroy(&mut self, id: PlacementId);
}

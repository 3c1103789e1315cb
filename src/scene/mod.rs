pub mod backend;
pub mod local;
pub mod template;

// Re-export commonly used types
pub use backend::{PlacementId, SceneBackend};
pub use local::{LocalScene, SceneNode};
pub use template::{PrefabTemplate, TemplateLibrary};

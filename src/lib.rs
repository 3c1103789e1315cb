// ar-placer: image-anchor placement for AR tracking sources
// Spawn, toggle and despawn scene representations for tracked reference images.

pub mod config;
pub mod placer;
pub mod scene;
pub mod tracking;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigResult, PlacerSettings};
pub use placer::TrackedImagePlacer;
pub use scene::{LocalScene, PlacementId, PrefabTemplate, SceneBackend, SceneNode, TemplateLibrary};
pub use tracking::{
    ImageTrackingSource, SimulatedTracking, SpatialFrame, SubscriptionId, TrackedImage,
    TrackedImagesChanged, TrackingState, TrackingSubscription,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

pub mod events;
pub mod source;

// Re-export all event and subscription types for easier access
pub use events::{SpatialFrame, TrackedImage, TrackedImagesChanged, TrackingState};
pub use source::{ImageTrackingSource, SimulatedTracking, SubscriptionId, TrackingSubscription};

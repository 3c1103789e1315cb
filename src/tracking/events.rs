use glam::{Affine3A, Vec3};
use std::time::SystemTime;
use uuid::Uuid;

/// Events delivered by an image-tracking source to the application.
/// These are clean, engine-agnostic data structures.

/// Tracking quality reported for an anchor.
///
/// Sources distinguish three levels, but consumers collapse them to a
/// boolean: only `Tracking` counts as actively tracked. `Limited` means the
/// source still knows about the image but cannot resolve its pose reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// The image is not being tracked at all.
    None,
    /// The image is known but its pose is unreliable.
    Limited,
    /// The image is actively tracked with a valid pose.
    Tracking,
}

impl TrackingState {
    /// True only for `Tracking`; `Limited` counts as not tracked.
    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingState::Tracking)
    }
}

impl Default for TrackingState {
    fn default() -> Self {
        Self::None
    }
}

/// Handle to the spatial frame of reference an anchor is reported in.
///
/// The tracking source owns the frame and keeps its id stable for the
/// lifetime of the anchor; consumers pass the handle through to whatever
/// attaches content to it and never mutate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialFrame {
    pub id: Uuid,
    pub pose: Affine3A,
}

impl SpatialFrame {
    /// Create a frame with a fresh id at the given pose.
    pub fn new(pose: Affine3A) -> Self {
        Self {
            id: Uuid::new_v4(),
            pose,
        }
    }

    /// Create a frame with a fresh id at a plain translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(Affine3A::from_translation(translation))
    }

    /// Create a frame with a fresh id at the origin.
    pub fn origin() -> Self {
        Self::new(Affine3A::IDENTITY)
    }
}

/// One tracked real-world image instance as reported by the source.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedImage {
    /// Identifying name of the reference image.
    pub name: String,
    /// Tracking quality at the time of the report.
    pub state: TrackingState,
    /// Spatial frame the anchor is attached to.
    pub frame: SpatialFrame,
}

impl TrackedImage {
    pub fn new(name: impl Into<String>, state: TrackingState, frame: SpatialFrame) -> Self {
        Self {
            name: name.into(),
            state,
            frame,
        }
    }
}

/// Batch notification of tracked-image changes.
///
/// The three sets are disjoint; anchors within a set are unordered.
#[derive(Debug, Clone)]
pub struct TrackedImagesChanged {
    /// Images detected since the previous notification.
    pub added: Vec<TrackedImage>,
    /// Images whose tracking state or pose was refreshed.
    pub updated: Vec<TrackedImage>,
    /// Images the source no longer tracks.
    pub removed: Vec<TrackedImage>,
    pub timestamp: SystemTime,
}

impl TrackedImagesChanged {
    /// Create a notification carrying all three sets.
    pub fn new(
        added: Vec<TrackedImage>,
        updated: Vec<TrackedImage>,
        removed: Vec<TrackedImage>,
    ) -> Self {
        Self {
            added,
            updated,
            removed,
            timestamp: SystemTime::now(),
        }
    }

    /// Create a notification containing only added images.
    pub fn added(images: Vec<TrackedImage>) -> Self {
        Self::new(images, Vec::new(), Vec::new())
    }

    /// Create a notification containing only updated images.
    pub fn updated(images: Vec<TrackedImage>) -> Self {
        Self::new(Vec::new(), images, Vec::new())
    }

    /// Create a notification containing only removed images.
    pub fn removed(images: Vec<TrackedImage>) -> Self {
        Self::new(Vec::new(), Vec::new(), images)
    }

    /// Total number of anchor records across all three sets.
    pub fn record_count(&self) -> usize {
        self.added.len() + self.updated.len() + self.removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_state_collapse() {
        assert!(TrackingState::Tracking.is_tracking());
        assert!(!TrackingState::Limited.is_tracking());
        assert!(!TrackingState::None.is_tracking());
        assert_eq!(TrackingState::default(), TrackingState::None);
    }

    #[test]
    fn test_spatial_frame_ids_are_unique() {
        let a = SpatialFrame::origin();
        let b = SpatialFrame::origin();
        assert_ne!(a.id, b.id);
        assert_eq!(a.pose, b.pose);
    }

    #[test]
    fn test_single_phase_constructors() {
        let image = TrackedImage::new("Poster", TrackingState::Tracking, SpatialFrame::origin());

        let event = TrackedImagesChanged::added(vec![image.clone()]);
        assert_eq!(event.added.len(), 1);
        assert!(event.updated.is_empty());
        assert!(event.removed.is_empty());
        assert_eq!(event.record_count(), 1);

        let event = TrackedImagesChanged::removed(vec![image]);
        assert!(event.added.is_empty());
        assert_eq!(event.removed.len(), 1);
        assert!(!event.is_empty());
    }
}

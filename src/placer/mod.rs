//! Image-anchor registrar: spawns, toggles and despawns scene placements in
//! response to tracked-image notifications.
//!
//! The placer keeps a one-to-one registry from image name to the placement
//! handle it owns. Entries are created on "added", mirrored on "updated" and
//! released on "removed"; every miss along the way (unknown template, no
//! registry entry) is normal control flow, not an error.

use std::collections::HashMap;

use tracing::{debug, info, trace};

use crate::scene::{PlacementId, SceneBackend, TemplateLibrary};
use crate::tracking::{
    ImageTrackingSource, TrackedImage, TrackedImagesChanged, TrackingSubscription,
};

/// Maintains the association between tracked images and placed
/// representations.
///
/// Single-threaded by design: notifications are processed to completion one
/// at a time, either through [`TrackedImagePlacer::handle`] directly or by
/// draining an active subscription with
/// [`TrackedImagePlacer::process_pending`].
pub struct TrackedImagePlacer {
    /// Immutable name-to-template mapping, built once at configuration time.
    templates: TemplateLibrary,
    /// Active placements by image name. At most one entry per name.
    placements: HashMap<String, PlacementId>,
    /// Open notification stream while the placer is active.
    subscription: Option<TrackingSubscription>,
}

impl TrackedImagePlacer {
    pub fn new(templates: TemplateLibrary) -> Self {
        Self {
            templates,
            placements: HashMap::new(),
            subscription: None,
        }
    }

    /// Subscribe to a tracking source and start accepting notifications.
    ///
    /// Activating an already active placer is a no-op; the existing
    /// subscription stays in place.
    pub fn activate(&mut self, source: &mut dyn ImageTrackingSource) {
        if self.subscription.is_some() {
            debug!("placer already active, ignoring activate");
            return;
        }
        let subscription = source.subscribe();
        info!("placer activated on subscription {}", subscription.id());
        self.subscription = Some(subscription);
    }

    /// Unsubscribe and stop accepting notifications.
    ///
    /// Placements survive deactivation; they are only released by a
    /// "removed" notification while active, or by [`TrackedImagePlacer::clear`].
    pub fn deactivate(&mut self, source: &mut dyn ImageTrackingSource) {
        if let Some(subscription) = self.subscription.take() {
            source.unsubscribe(subscription.id());
            info!(
                "placer deactivated, {} placement(s) remain in the scene",
                self.placements.len()
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Drain and handle every queued notification, in arrival order.
    ///
    /// Returns the number of notifications processed; inactive placers
    /// process nothing and return 0.
    pub fn process_pending(&mut self, scene: &mut dyn SceneBackend) -> usize {
        let events = match &self.subscription {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };
        for event in &events {
            self.handle(scene, event);
        }
        events.len()
    }

    /// Process one notification: added, then updated, then removed.
    ///
    /// Within each phase the batch is unordered; processing is idempotent
    /// per image name.
    pub fn handle(&mut self, scene: &mut dyn SceneBackend, event: &TrackedImagesChanged) {
        self.spawn_added(scene, &event.added);
        self.mirror_updated(scene, &event.updated);
        self.despawn_removed(scene, &event.removed);
    }

    fn spawn_added(&mut self, scene: &mut dyn SceneBackend, images: &[TrackedImage]) {
        for image in images {
            let template = match self.templates.resolve(&image.name) {
                Some(template) => template,
                None => {
                    debug!("no template configured for tracked image '{}'", image.name);
                    continue;
                }
            };
            if self.placements.contains_key(&image.name) {
                // Duplicate "added" for a live placement; first one wins.
                debug!("placement for '{}' already exists, skipping", image.name);
                continue;
            }
            let id = scene.instantiate(template, &image.frame);
            debug!("spawned '{}' as placement {}", image.name, id);
            self.placements.insert(image.name.clone(), id);
        }
    }

    fn mirror_updated(&mut self, scene: &mut dyn SceneBackend, images: &[TrackedImage]) {
        for image in images {
            match self.placements.get(&image.name) {
                Some(&id) => {
                    let visible = image.state.is_tracking();
                    scene.set_visible(id, visible);
                    debug!(
                        "placement '{}' now {} ({:?})",
                        image.name,
                        if visible { "visible" } else { "hidden" },
                        image.state
                    );
                }
                // Updates for images that never matched a template are expected.
                None => trace!("update for unplaced image '{}'", image.name),
            }
        }
    }

    fn despawn_removed(&mut self, scene: &mut dyn SceneBackend, images: &[TrackedImage]) {
        for image in images {
            match self.placements.remove(&image.name) {
                Some(id) => {
                    scene.destroy(id);
                    debug!("despawned '{}' (placement {})", image.name, id);
                }
                None => trace!("removal for unplaced image '{}'", image.name),
            }
        }
    }

    /// Destroy every owned placement and empty the registry.
    pub fn clear(&mut self, scene: &mut dyn SceneBackend) {
        let count = self.placements.len();
        for (name, id) in self.placements.drain() {
            scene.destroy(id);
            debug!("cleared '{}' (placement {})", name, id);
        }
        if count > 0 {
            info!("cleared {} placement(s)", count);
        }
    }

    /// Number of images currently placed.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    pub fn is_placed(&self, name: &str) -> bool {
        self.placements.contains_key(name)
    }

    /// Handle owned for a placed image, if any.
    pub fn placement(&self, name: &str) -> Option<PlacementId> {
        self.placements.get(name).copied()
    }

    pub fn placed_names(&self) -> impl Iterator<Item = &str> {
        self.placements.keys().map(String::as_str)
    }

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }
}

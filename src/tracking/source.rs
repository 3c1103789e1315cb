//! Tracking-source seam: subscription plumbing plus a scripted simulator
//! used by the demo binary and the integration tests.

use std::collections::HashMap;
use std::fmt;

use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::Affine3A;
use tracing::{debug, info};
use uuid::Uuid;

use super::events::{SpatialFrame, TrackedImage, TrackedImagesChanged, TrackingState};

/// Identifies one open subscription to a tracking source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live notification stream handed out by [`ImageTrackingSource::subscribe`].
///
/// The subscriber owns the receiving end; dropping it plus calling
/// `unsubscribe` with the id fully severs the stream.
pub struct TrackingSubscription {
    id: SubscriptionId,
    receiver: Receiver<TrackedImagesChanged>,
}

impl TrackingSubscription {
    pub fn new(id: SubscriptionId, receiver: Receiver<TrackedImagesChanged>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take every notification queued so far, in arrival order, without
    /// blocking.
    pub fn drain(&self) -> Vec<TrackedImagesChanged> {
        self.receiver.try_iter().collect()
    }
}

/// External image-tracking service, reduced to its subscription surface.
///
/// Implementations deliver [`TrackedImagesChanged`] batches on their own
/// schedule; subscribers decide when to drain and process them.
pub trait ImageTrackingSource {
    /// Open a notification stream. The caller owns the returned subscription.
    fn subscribe(&mut self) -> TrackingSubscription;

    /// Close a previously opened stream. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// In-process tracking source driven by explicit `report_*` calls.
///
/// Keeps a stable [`SpatialFrame`] per simulated image name so that added,
/// updated and removed reports for the same image reference the same anchor
/// frame, the way a real tracking service would.
pub struct SimulatedTracking {
    subscribers: HashMap<SubscriptionId, Sender<TrackedImagesChanged>>,
    frames: HashMap<String, SpatialFrame>,
}

impl SimulatedTracking {
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
            frames: HashMap::new(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Fan a notification out to every live subscriber.
    ///
    /// Subscribers whose receiving end was dropped are pruned here.
    pub fn publish(&mut self, event: TrackedImagesChanged) {
        self.subscribers.retain(|id, sender| {
            if sender.send(event.clone()).is_ok() {
                true
            } else {
                debug!("pruning disconnected subscriber {}", id);
                false
            }
        });
        debug!(
            "published {} record(s) to {} subscriber(s)",
            event.record_count(),
            self.subscribers.len()
        );
    }

    /// Report a newly detected image at the given pose.
    ///
    /// Re-reporting a name that is still tracked reuses its existing frame,
    /// which models a duplicate "added" notification from the service.
    pub fn report_added(&mut self, name: &str, pose: Affine3A) {
        let frame = *self
            .frames
            .entry(name.to_string())
            .or_insert_with(|| SpatialFrame::new(pose));
        let image = TrackedImage::new(name, TrackingState::Tracking, frame);
        self.publish(TrackedImagesChanged::added(vec![image]));
    }

    /// Report a tracking-state change for an image.
    pub fn report_updated(&mut self, name: &str, state: TrackingState) {
        let frame = *self
            .frames
            .entry(name.to_string())
            .or_insert_with(SpatialFrame::origin);
        let image = TrackedImage::new(name, state, frame);
        self.publish(TrackedImagesChanged::updated(vec![image]));
    }

    /// Report that the source no longer tracks an image.
    ///
    /// The simulated anchor frame is retired; a later `report_added` for the
    /// same name gets a fresh frame.
    pub fn report_removed(&mut self, name: &str) {
        let frame = self
            .frames
            .remove(name)
            .unwrap_or_else(SpatialFrame::origin);
        let image = TrackedImage::new(name, TrackingState::None, frame);
        self.publish(TrackedImagesChanged::removed(vec![image]));
    }
}

impl Default for SimulatedTracking {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageTrackingSource for SimulatedTracking {
    fn subscribe(&mut self) -> TrackingSubscription {
        let (sender, receiver) = unbounded();
        let id = SubscriptionId::new();
        self.subscribers.insert(id, sender);
        info!("tracking subscription {} opened", id);
        TrackingSubscription::new(id, receiver)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if self.subscribers.remove(&id).is_some() {
            info!("tracking subscription {} closed", id);
        } else {
            debug!("unsubscribe for unknown subscription {}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fanout_to_all_subscribers() {
        let mut source = SimulatedTracking::new();
        let first = source.subscribe();
        let second = source.subscribe();
        assert_eq!(source.subscriber_count(), 2);

        source.report_added("Poster", Affine3A::IDENTITY);

        assert_eq!(first.drain().len(), 1);
        assert_eq!(second.drain().len(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut source = SimulatedTracking::new();
        let sub = source.subscribe();
        source.unsubscribe(sub.id());
        assert_eq!(source.subscriber_count(), 0);

        source.report_added("Poster", Affine3A::IDENTITY);
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_frame_is_stable_across_reports() {
        let mut source = SimulatedTracking::new();
        let sub = source.subscribe();

        source.report_added("Poster", Affine3A::IDENTITY);
        source.report_updated("Poster", TrackingState::Limited);

        let events = sub.drain();
        assert_eq!(events.len(), 2);
        let added_frame = events[0].added[0].frame;
        let updated_frame = events[1].updated[0].frame;
        assert_eq!(added_frame.id, updated_frame.id);
    }

    #[test]
    fn test_removed_retires_frame() {
        let mut source = SimulatedTracking::new();
        let sub = source.subscribe();

        source.report_added("Poster", Affine3A::IDENTITY);
        source.report_removed("Poster");
        source.report_added("Poster", Affine3A::IDENTITY);

        let events = sub.drain();
        assert_eq!(events.len(), 3);
        let first_frame = events[0].added[0].frame;
        let second_frame = events[2].added[0].frame;
        assert_ne!(first_frame.id, second_frame.id);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut source = SimulatedTracking::new();
        let sub = source.subscribe();
        drop(sub);

        source.report_added("Poster", Affine3A::IDENTITY);
        assert_eq!(source.subscriber_count(), 0);
    }
}

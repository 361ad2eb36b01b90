//! Notification queue between the host and the review controllers.
//!
//! Hosts publish [`Event`]s; the controller drains them in order and hands
//! each one to the subscribers registered for its [`Topic`]. Viewport events
//! coalesce while queued, so only the most recent view is delivered.

use std::collections::VecDeque;

use crate::geometry::Viewport;

/// Pointer input that caused a map move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerGesture {
    MouseMove,
    TouchMove,
    Wheel,
}

/// Why the map redrew.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawCause {
    /// Data or style change with no user movement.
    Generic,
    /// Pan or zoom driven by pointer input.
    Gesture(PointerGesture),
}

impl RedrawCause {
    /// Drag-style pans that move features out from under the pointer.
    pub fn is_pan(self) -> bool {
        matches!(
            self,
            RedrawCause::Gesture(PointerGesture::MouseMove | PointerGesture::TouchMove)
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The surface finished drawing.
    Redrawn { drawn: bool, cause: RedrawCause },
    /// The map moved or zoomed.
    ViewportChanged(Viewport),
    /// Imagery sources were added, removed or changed.
    CatalogChanged,
    /// A task area was loaded; grid options need a rectangular one.
    TaskExtentSet { rectangular: bool },
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Redrawn { .. } => Topic::Redrawn,
            Event::ViewportChanged(_) => Topic::ViewportChanged,
            Event::CatalogChanged => Topic::CatalogChanged,
            Event::TaskExtentSet { .. } => Topic::TaskExtentSet,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Redrawn,
    ViewportChanged,
    CatalogChanged,
    TaskExtentSet,
}

/// Components that can listen on the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subscriber {
    SelectionMode,
    BackgroundPane,
    LayerPanel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Debug)]
struct Subscription {
    id: SubscriptionId,
    topic: Topic,
    subscriber: Subscriber,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: VecDeque<Event>,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest; delivery follows registration order.
    pub fn subscribe(&mut self, topic: Topic, subscriber: Subscriber) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.push(Subscription {
            id,
            topic,
            subscriber,
        });
        id
    }

    /// Returns false when the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        before != self.subscriptions.len()
    }

    pub fn subscribers(&self, topic: Topic) -> Vec<Subscriber> {
        self.subscriptions
            .iter()
            .filter(|sub| sub.topic == topic)
            .map(|sub| sub.subscriber)
            .collect()
    }

    pub fn subscription_count(&self, subscriber: Subscriber) -> usize {
        self.subscriptions
            .iter()
            .filter(|sub| sub.subscriber == subscriber)
            .count()
    }

    pub fn publish(&mut self, event: Event) {
        if let Event::ViewportChanged(_) = event
            && let Some(queued) = self
                .queue
                .iter_mut()
                .find(|queued| matches!(queued, Event::ViewportChanged(_)))
        {
            *queued = event;
            return;
        }
        self.queue.push_back(event);
    }

    pub fn next_event(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

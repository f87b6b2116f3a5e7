//! CurveStore: one shared timing-curve value, many observers.
//!
//! Every edit constructs a new immutable `TimingCurve` and publishes it to
//! all subscribers; observers holding an earlier snapshot keep it unchanged.
//! Single-threaded, synchronous; callbacks run inline on the editing thread.

use log::debug;

use curvelab_core::{Preset, TimingCurve, Vec2};

use crate::handle::Handle;

/// Opaque subscription token returned by `subscribe`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriberId(u32);

type Subscriber = Box<dyn FnMut(&TimingCurve)>;

/// Owner of the current curve snapshot and its observer registry.
pub struct CurveStore {
    current: TimingCurve,
    selected: Handle,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u32,
}

impl CurveStore {
    pub fn new(initial: TimingCurve) -> Self {
        Self {
            current: initial,
            selected: Handle::None,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current snapshot. Copy semantics; the returned value never changes
    /// under the caller.
    pub fn current(&self) -> TimingCurve {
        self.current
    }

    /// Register an observer. The callback is invoked immediately with the
    /// current snapshot so late subscribers start in sync, then once per
    /// published value.
    pub fn subscribe(&mut self, mut f: impl FnMut(&TimingCurve) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        f(&self.current);
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove an observer. Returns false when the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replace the snapshot and notify every subscriber.
    pub fn set(&mut self, curve: TimingCurve) {
        debug!("publish timing curve {curve}");
        self.current = curve;
        for (_, f) in self.subscribers.iter_mut() {
            f(&self.current);
        }
    }

    /// Publish a new curve with the first control point replaced.
    pub fn set_point_a(&mut self, a: Vec2) {
        self.set(self.current.with_point_a(a));
    }

    /// Publish a new curve with the second control point replaced.
    pub fn set_point_b(&mut self, b: Vec2) {
        self.set(self.current.with_point_b(b));
    }

    /// Publish a named preset's curve.
    pub fn set_preset(&mut self, preset: Preset) {
        self.set(TimingCurve::from_preset(preset));
    }

    /// Change which handle drag events are routed to.
    pub fn select(&mut self, handle: Handle) {
        self.selected = handle;
    }

    pub fn selected_handle(&self) -> Handle {
        self.selected
    }

    /// Route a drag position (unit curve domain) to the selected handle.
    /// No-op when nothing is selected.
    pub fn drag_to(&mut self, position: Vec2) {
        match self.selected {
            Handle::None => {}
            Handle::PointA => self.set_point_a(position),
            Handle::PointB => self.set_point_b(position),
        }
    }
}

impl Default for CurveStore {
    fn default() -> Self {
        Self::new(TimingCurve::default())
    }
}

impl std::fmt::Debug for CurveStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveStore")
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

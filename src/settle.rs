//! Settle animation: linear move from the anchor to a resolved destination.
//!
//! Each object has at most one animation in flight. Starting a new one
//! supersedes the previous one, and a superseded animation never writes
//! another position.

use crate::zone::ZoneId;
use glam::Vec3;
use tracing::debug;

/// Cancellation handle for a started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleHandle(pub u64);

/// What the animation is heading for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Destination {
    Zone(ZoneId),
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleStep {
    /// Interpolated position for this frame
    Moving(Vec3),
    /// Exact destination; the animation is over
    Arrived { position: Vec3, destination: Destination },
}

#[derive(Debug, Clone)]
pub struct SettleAnimation {
    pub handle: SettleHandle,
    pub from: Vec3,
    pub to: Vec3,
    pub destination: Destination,
    elapsed: f32,
    duration: f32,
}

impl SettleAnimation {
    fn advance(&mut self, dt: f32) -> SettleStep {
        self.elapsed += dt;
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return SettleStep::Arrived {
                position: self.to,
                destination: self.destination,
            };
        }
        SettleStep::Moving(self.from.lerp(self.to, self.elapsed / self.duration))
    }
}

/// Owns the single in-flight animation of one object.
#[derive(Debug, Default)]
pub struct Settler {
    active: Option<SettleAnimation>,
    next_handle: u64,
}

impl Settler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving `from -> to`, superseding whatever was running.
    pub fn start(&mut self, from: Vec3, to: Vec3, destination: Destination, duration: f32) -> SettleHandle {
        if let Some(previous) = self.active.take() {
            debug!(superseded = previous.handle.0, "Superseding settle animation");
        }
        self.next_handle += 1;
        let handle = SettleHandle(self.next_handle);
        self.active = Some(SettleAnimation {
            handle,
            from,
            to,
            destination,
            elapsed: 0.0,
            duration: duration.max(0.0),
        });
        handle
    }

    /// Cancel the animation if `handle` is still the active one.
    pub fn cancel(&mut self, handle: SettleHandle) -> bool {
        if self.active.as_ref().is_some_and(|a| a.handle == handle) {
            self.active = None;
            return true;
        }
        false
    }

    pub fn cancel_active(&mut self) -> Option<SettleHandle> {
        self.active.take().map(|a| a.handle)
    }

    pub fn active(&self) -> Option<&SettleAnimation> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Advance by one frame. Clears the slot on arrival.
    pub fn advance(&mut self, dt: f32) -> Option<SettleStep> {
        let step = self.active.as_mut()?.advance(dt);
        if matches!(step, SettleStep::Arrived { .. }) {
            self.active = None;
        }
        Some(step)
    }
}

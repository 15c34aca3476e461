//! Tap / double-tap disambiguation.
//!
//! A press opens a window of `tap_window` seconds. A second press inside the
//! window is a double tap and closes it at once; if the window runs out first
//! a single tap is reported. At most one window is open at a time. Time only
//! moves through [`TapDetector::advance`], driven by the host's frame tick.

/// Slack for accumulated frame deltas landing a hair short of the window.
const WINDOW_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapEvent {
    Tap,
    DoubleTap,
}

#[derive(Debug, Clone)]
pub struct TapDetector {
    window: f32,
    /// Seconds elapsed since the press that opened the window
    pending: Option<f32>,
}

impl TapDetector {
    pub fn new(window: f32) -> Self {
        Self {
            window: window.max(0.0),
            pending: None,
        }
    }

    /// Register a press. Returns `DoubleTap` when it lands inside an open window.
    pub fn press(&mut self) -> Option<TapEvent> {
        if self.pending.take().is_some() {
            return Some(TapEvent::DoubleTap);
        }
        self.pending = Some(0.0);
        None
    }

    /// Close the window without reporting anything. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance the open window by `dt` seconds; reports `Tap` when it expires.
    pub fn advance(&mut self, dt: f32) -> Option<TapEvent> {
        let elapsed = self.pending.as_mut()?;
        *elapsed += dt;
        if *elapsed + WINDOW_EPSILON >= self.window {
            self.pending = None;
            return Some(TapEvent::Tap);
        }
        None
    }
}

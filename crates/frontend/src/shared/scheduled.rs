//! Cancellable one-shot callbacks on top of `setTimeout`.

use gloo_timers::callback::Timeout;

/// Holds at most one pending callback.
///
/// Scheduling a new callback cancels the pending one, so only the most
/// recently scheduled callback ever runs. Dropping the holder cancels too.
#[derive(Default)]
pub struct ScheduledCallback {
    pending: Option<Timeout>,
}

impl ScheduledCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&mut self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping a `Timeout` clears it.
        self.pending = Some(Timeout::new(millis, callback));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

use std::time::Duration;

/// Runs deferred UI side effects after a delay, on the UI thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

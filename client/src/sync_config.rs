use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by the sync context
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Delay between a component becoming selected and scrolling it into
    /// view, leaving the host's split-bar animation time to settle.
    pub scroll_delay: Duration,
    /// Upper bound on route messages awaiting their echo from the host.
    /// The oldest tag is forgotten when the bound is reached.
    pub max_pending_origins: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            scroll_delay: Duration::from_millis(500),
            max_pending_origins: 64,
        }
    }
}

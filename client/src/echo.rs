use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
};

use log::warn;

use dcs_shared::{ClientContext, OriginTag};

/// Origin tags of route messages sent to the host and not yet echoed back.
pub struct OriginTracker {
    next: Cell<u64>,
    pending: RefCell<VecDeque<OriginTag>>,
    capacity: usize,
    evicted: Cell<u64>,
}

impl OriginTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            next: Cell::new(1),
            pending: RefCell::new(VecDeque::new()),
            capacity: capacity.max(1),
            evicted: Cell::new(0),
        }
    }

    pub fn issue(&self) -> OriginTag {
        let tag = OriginTag::new(self.next.get());
        self.next.set(self.next.get().wrapping_add(1));

        let mut pending = self.pending.borrow_mut();
        if pending.len() >= self.capacity {
            if let Some(dropped) = pending.pop_front() {
                self.evicted.set(self.evicted.get() + 1);
                warn!(
                    "OriginTracker: {} routes awaiting echo, dropped {dropped:?}",
                    self.capacity
                );
            }
        }
        pending.push_back(tag);
        tag
    }

    /// Whether `context` marks a push as the echo of one of our own
    /// messages. A carried tag is consumed; a marker without a tag is
    /// trusted as is.
    pub fn acknowledge(&self, context: &ClientContext) -> bool {
        if !context.self_originated {
            return false;
        }
        let Some(tag) = context.origin else {
            return true;
        };
        let mut pending = self.pending.borrow_mut();
        match pending.iter().position(|pending_tag| *pending_tag == tag) {
            Some(index) => {
                pending.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Tags forgotten because too many were outstanding.
    pub fn evicted(&self) -> u64 {
        self.evicted.get()
    }
}

/// Set only while the reconciler itself is calling the router, so that a
/// router notifying listeners synchronously does not have its own write
/// reported back to the host.
#[derive(Default)]
pub struct EchoGuard {
    engaged: Cell<bool>,
}

impl EchoGuard {
    pub fn is_engaged(&self) -> bool {
        self.engaged.get()
    }

    pub fn engage(&self) -> EchoGuardScope<'_> {
        self.engaged.set(true);
        EchoGuardScope { guard: self }
    }
}

/// Releases the [`EchoGuard`] when dropped, unwinding included.
pub struct EchoGuardScope<'a> {
    guard: &'a EchoGuard,
}

impl Drop for EchoGuardScope<'_> {
    fn drop(&mut self) {
        self.guard.engaged.set(false);
    }
}

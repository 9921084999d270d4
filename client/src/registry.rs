use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use log::debug;

/// Something that recomputes its annotations when the host pushes a route.
pub trait RouteSubscriber {
    fn route_pushed(self: Rc<Self>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationKey(u64);

/// Mounted components interested in host pushes, in registration order.
///
/// Holds weak references only: a subscriber that went away without
/// deregistering is skipped and pruned on the next notification.
#[derive(Default)]
pub struct ComponentRegistry {
    next_key: Cell<u64>,
    entries: RefCell<Vec<(RegistrationKey, Weak<dyn RouteSubscriber>)>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, subscriber: Weak<dyn RouteSubscriber>) -> RegistrationKey {
        let key = RegistrationKey(self.next_key.get());
        self.next_key.set(self.next_key.get() + 1);
        self.entries.borrow_mut().push((key, subscriber));
        key
    }

    pub fn remove(&self, key: RegistrationKey) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_key, _)| *entry_key != key);
        entries.len() != before
    }

    pub fn contains(&self, key: RegistrationKey) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(entry_key, _)| *entry_key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Delivers a push to every live subscriber, in registration order.
    /// Subscribers may add or remove registrations while being notified;
    /// those changes apply from the next notification on.
    pub fn notify(&self) {
        let live: Vec<Rc<dyn RouteSubscriber>> = {
            let mut entries = self.entries.borrow_mut();
            entries.retain(|(_, subscriber)| subscriber.strong_count() > 0);
            entries
                .iter()
                .filter_map(|(_, subscriber)| subscriber.upgrade())
                .collect()
        };
        debug!("ComponentRegistry::notify({} subscribers)", live.len());
        for subscriber in live {
            subscriber.route_pushed();
        }
    }
}

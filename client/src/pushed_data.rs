use std::{cell::RefCell, rc::Rc};

use dcs_shared::{CountTable, Route};

/// Latest route and counts received from the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushedData {
    pub route: Route,
    pub descr: Option<String>,
    pub counts: CountTable,
}

/// Single slot holding the latest [`PushedData`]. Only the reconciler writes
/// it; components read it at the moment they compute their annotations.
#[derive(Default)]
pub struct PushedSlot {
    data: RefCell<Option<Rc<PushedData>>>,
}

impl PushedSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<Rc<PushedData>> {
        self.data.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_none()
    }

    pub(crate) fn store(&self, data: PushedData) -> Rc<PushedData> {
        let data = Rc::new(data);
        *self.data.borrow_mut() = Some(Rc::clone(&data));
        data
    }

    /// Whether `data` is still the latest push.
    pub fn holds(&self, data: &Rc<PushedData>) -> bool {
        self.data
            .borrow()
            .as_ref()
            .is_some_and(|latest| Rc::ptr_eq(latest, data))
    }

    pub(crate) fn clear(&self) {
        self.data.borrow_mut().take();
    }
}

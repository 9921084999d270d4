use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use dcs_client::{InternalRouter, ListenerId, Location, LocationListener};
use dcs_shared::ValidationError;

type SharedListener = Rc<dyn Fn(&Location) -> Result<(), ValidationError>>;

/// In-memory router.
///
/// By default listeners run synchronously inside `replace`, like a
/// history-backed router. A deferred router queues those notifications until
/// [`TestRouter::flush`], like routers that notify on the next tick.
pub struct TestRouter {
    location: RefCell<Location>,
    listeners: RefCell<Vec<(ListenerId, SharedListener)>>,
    next_listener: Cell<u64>,
    deferred: bool,
    queued: RefCell<Vec<Location>>,
    replaced: RefCell<Vec<String>>,
    failures: RefCell<Vec<ValidationError>>,
}

impl TestRouter {
    pub fn new(url: &str) -> Rc<Self> {
        Rc::new(Self::with_mode(url, false))
    }

    pub fn deferred(url: &str) -> Rc<Self> {
        Rc::new(Self::with_mode(url, true))
    }

    fn with_mode(url: &str, deferred: bool) -> Self {
        Self {
            location: RefCell::new(Location::parse(url)),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            deferred,
            queued: RefCell::new(Vec::new()),
            replaced: RefCell::new(Vec::new()),
            failures: RefCell::new(Vec::new()),
        }
    }

    /// Navigation started by the app itself, e.g. a link click. Returns the
    /// first listener error, as the navigation would fail with it.
    pub fn navigate(&self, url: &str) -> Result<(), ValidationError> {
        let location = Location::parse(url);
        *self.location.borrow_mut() = location.clone();
        self.notify(&location)
    }

    /// Delivers the notifications queued by a deferred router.
    pub fn flush(&self) {
        let queued: Vec<Location> = self.queued.borrow_mut().drain(..).collect();
        for location in queued {
            self.notify_recording_failures(&location);
        }
    }

    /// Every url passed to `replace`, in order.
    pub fn replaced(&self) -> Vec<String> {
        self.replaced.borrow().clone()
    }

    /// Listener errors raised during `replace` or `flush`.
    pub fn failures(&self) -> Vec<ValidationError> {
        self.failures.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self, location: &Location) -> Result<(), ValidationError> {
        let listeners: Vec<SharedListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let mut first_error = None;
        for listener in listeners {
            if let Err(err) = listener(location) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn notify_recording_failures(&self, location: &Location) {
        if let Err(err) = self.notify(location) {
            self.failures.borrow_mut().push(err);
        }
    }
}

impl InternalRouter for TestRouter {
    fn location(&self) -> Location {
        self.location.borrow().clone()
    }

    fn listen(&self, listener: LocationListener) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    fn unlisten(&self, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn replace(&self, url: &str) {
        let location = Location::parse(url);
        *self.location.borrow_mut() = location.clone();
        self.replaced.borrow_mut().push(url.to_owned());
        if self.deferred {
            self.queued.borrow_mut().push(location);
        } else {
            self.notify_recording_failures(&location);
        }
    }
}

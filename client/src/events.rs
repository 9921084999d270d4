use std::{cell::RefCell, mem};

use log::error;

use crate::error::SyncError;

/// Failures of background sync work, waiting to be read by the app.
///
/// Spawned tasks have no caller to return an error to, so they land here.
#[derive(Default)]
pub struct SyncEvents {
    errors: RefCell<Vec<SyncError>>,
}

impl SyncEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn take_errors(&self) -> Vec<SyncError> {
        mem::take(&mut *self.errors.borrow_mut())
    }

    pub(crate) fn push_error(&self, err: SyncError) {
        error!("{err}");
        self.errors.borrow_mut().push(err);
    }
}

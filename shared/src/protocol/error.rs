use thiserror::Error;

use crate::types::PageName;

/// The host pushed a page that the page-name resolver cannot map to a
/// pathname.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot find pathname for page \"{page_name}\"")]
pub struct NotFoundError {
    pub page_name: PageName,
}

impl NotFoundError {
    pub fn new(page_name: PageName) -> Self {
        Self { page_name }
    }
}

mod error;
mod layout;
mod query;
mod wire;

pub use error::{
    ValidationError, INTERACT_MODE_PARAM, LAYOUT_PARAM, PATHNAME_PARAM, TRIGGER_ID_PARAM,
};
pub use layout::Layout;
pub use query::RouteQuery;

use serde::{Deserialize, Serialize};

use crate::types::{InteractMode, PageName, TriggerId};

/// Navigation state shared across the iframe boundary.
///
/// One variant per [`Layout`], each carrying exactly the fields that layout
/// allows. On the wire a route is the flat `{ layout, pageName, .. }` object
/// and is validated when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "wire::RouteFields", into = "wire::RouteFields")]
pub enum Route {
    FullClient {
        page_name: PageName,
    },
    FullHost {
        pathname: String,
    },
    SplitInteractive {
        page_name: PageName,
        interact_mode: InteractMode,
        trigger_id: Option<TriggerId>,
    },
    SplitReadOnly {
        page_name: PageName,
    },
}

impl Route {
    pub fn layout(&self) -> Layout {
        match self {
            Route::FullClient { .. } => Layout::FullClient,
            Route::FullHost { .. } => Layout::FullHost,
            Route::SplitInteractive { .. } => Layout::SplitInteractive,
            Route::SplitReadOnly { .. } => Layout::SplitReadOnly,
        }
    }

    pub fn page_name(&self) -> Option<&PageName> {
        match self {
            Route::FullClient { page_name }
            | Route::SplitInteractive { page_name, .. }
            | Route::SplitReadOnly { page_name } => Some(page_name),
            Route::FullHost { .. } => None,
        }
    }

    pub fn interact_mode(&self) -> Option<&InteractMode> {
        match self {
            Route::SplitInteractive { interact_mode, .. } => Some(interact_mode),
            _ => None,
        }
    }

    pub fn trigger_id(&self) -> Option<&TriggerId> {
        match self {
            Route::SplitInteractive { trigger_id, .. } => trigger_id.as_ref(),
            _ => None,
        }
    }

    /// Pathname on the host side, only known for [`Layout::FullHost`].
    pub fn host_pathname(&self) -> Option<&str> {
        match self {
            Route::FullHost { pathname } => Some(pathname),
            _ => None,
        }
    }

    /// Query string carrying the non-default fields of this route, in the
    /// fixed order layout, interact mode, trigger id, pathname. Empty for a
    /// plain [`Layout::FullClient`] route, `?`-prefixed otherwise.
    pub fn to_query(&self) -> String {
        RouteQuery::from(self).to_query_string()
    }
}

/// Checks a layout against the optional fields present alongside it.
pub(crate) fn check_fields(
    layout: Layout,
    has_interact_mode: bool,
    has_trigger_id: bool,
    has_pathname: bool,
) -> Result<(), ValidationError> {
    if has_interact_mode != layout.is_interactive() {
        return Err(ValidationError::InteractModeMismatch { layout });
    }
    if has_trigger_id && !layout.is_interactive() {
        return Err(ValidationError::TriggerWithoutInteraction { layout });
    }
    if has_pathname != (layout == Layout::FullHost) {
        return Err(ValidationError::PathnameMismatch { layout });
    }
    Ok(())
}

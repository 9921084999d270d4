use thiserror::Error;

use super::layout::Layout;

pub const LAYOUT_PARAM: &str = "dcs-layout";
pub const INTERACT_MODE_PARAM: &str = "dcs-interact-mode";
pub const TRIGGER_ID_PARAM: &str = "dcs-trigger-id";
pub const PATHNAME_PARAM: &str = "dcs-pathname";

/// Errors raised when route fields form an illegal combination
///
/// Raised for malformed navigation URLs as well as for malformed routes
/// received from the host. Never corrected silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Layout code is not an integer in the known range
    #[error("invalid query param dcs-layout: {value:?} is not a known layout code")]
    InvalidLayout {
        value: String,
    },

    /// Interaction mode given for a non-interactive layout, or missing for an interactive one
    #[error("invalid query param dcs-layout or dcs-interact-mode (layout {layout})")]
    InteractModeMismatch {
        layout: Layout,
    },

    /// Trigger id given for a layout that does not support interaction
    #[error("invalid query param dcs-layout or dcs-trigger-id (layout {layout})")]
    TriggerWithoutInteraction {
        layout: Layout,
    },

    /// Pathname given for a layout other than FullHost, or missing for FullHost
    #[error("invalid query param dcs-layout or dcs-pathname (layout {layout})")]
    PathnameMismatch {
        layout: Layout,
    },

    /// Route received without the pageName its layout requires
    #[error("route with layout {layout} requires a pageName")]
    MissingPageName {
        layout: Layout,
    },
}

impl ValidationError {
    /// The pair of parameters whose combination was rejected.
    pub fn param_pair(&self) -> (&'static str, &'static str) {
        match self {
            ValidationError::InvalidLayout { .. } => (LAYOUT_PARAM, LAYOUT_PARAM),
            ValidationError::InteractModeMismatch { .. } => (LAYOUT_PARAM, INTERACT_MODE_PARAM),
            ValidationError::TriggerWithoutInteraction { .. } => (LAYOUT_PARAM, TRIGGER_ID_PARAM),
            ValidationError::PathnameMismatch { .. } => (LAYOUT_PARAM, PATHNAME_PARAM),
            ValidationError::MissingPageName { .. } => (LAYOUT_PARAM, "pageName"),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{check_fields, Layout, Route, ValidationError};
use crate::types::{InteractMode, PageName, TriggerId};

/// Flat shape of a route as exchanged with the host.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFields {
    layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_name: Option<PageName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interact_mode: Option<InteractMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trigger_id: Option<TriggerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pathname: Option<String>,
}

impl TryFrom<RouteFields> for Route {
    type Error = ValidationError;

    fn try_from(fields: RouteFields) -> Result<Self, Self::Error> {
        let RouteFields {
            layout,
            page_name,
            interact_mode,
            trigger_id,
            pathname,
        } = fields;
        let interact_mode = interact_mode.filter(|mode| !mode.is_empty());
        let trigger_id = trigger_id.filter(|trigger| !trigger.is_empty());
        let pathname = pathname.filter(|pathname| !pathname.is_empty());

        check_fields(
            layout,
            interact_mode.is_some(),
            trigger_id.is_some(),
            pathname.is_some(),
        )?;

        if let (Layout::FullHost, Some(pathname)) = (layout, pathname) {
            return Ok(Route::FullHost { pathname });
        }
        let page_name = page_name.ok_or(ValidationError::MissingPageName { layout })?;

        Ok(match (layout, interact_mode) {
            (Layout::SplitInteractive, Some(interact_mode)) => Route::SplitInteractive {
                page_name,
                interact_mode,
                trigger_id,
            },
            (Layout::SplitReadOnly, _) => Route::SplitReadOnly { page_name },
            _ => Route::FullClient { page_name },
        })
    }
}

impl From<Route> for RouteFields {
    fn from(route: Route) -> Self {
        let layout = route.layout();
        let mut fields = RouteFields {
            layout,
            page_name: None,
            interact_mode: None,
            trigger_id: None,
            pathname: None,
        };
        match route {
            Route::FullClient { page_name } | Route::SplitReadOnly { page_name } => {
                fields.page_name = Some(page_name);
            }
            Route::FullHost { pathname } => {
                fields.pathname = Some(pathname);
            }
            Route::SplitInteractive {
                page_name,
                interact_mode,
                trigger_id,
            } => {
                fields.page_name = Some(page_name);
                fields.interact_mode = Some(interact_mode);
                fields.trigger_id = trigger_id;
            }
        }
        fields
    }
}

use log::debug;
use url::form_urlencoded;

use super::{
    check_fields,
    error::{ValidationError, INTERACT_MODE_PARAM, LAYOUT_PARAM, PATHNAME_PARAM, TRIGGER_ID_PARAM},
    Layout, Route,
};
use crate::types::{InteractMode, PageName, TriggerId};

/// Route fields as carried by the embedded app's own URL.
///
/// The query string never names the page; it is recovered from the pathname
/// through the page-name resolver and attached with [`RouteQuery::into_route`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteQuery {
    FullClient,
    FullHost {
        pathname: String,
    },
    SplitInteractive {
        interact_mode: InteractMode,
        trigger_id: Option<TriggerId>,
    },
    SplitReadOnly,
}

#[derive(Default)]
struct RawParams {
    layout: Option<String>,
    interact_mode: Option<String>,
    trigger_id: Option<String>,
    pathname: Option<String>,
}

impl RawParams {
    fn collect(search: &str) -> Self {
        let mut raw = RawParams::default();
        let query = search.strip_prefix('?').unwrap_or(search);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                LAYOUT_PARAM => &mut raw.layout,
                INTERACT_MODE_PARAM => &mut raw.interact_mode,
                TRIGGER_ID_PARAM => &mut raw.trigger_id,
                PATHNAME_PARAM => &mut raw.pathname,
                key @ ("dcs-redirect" | "dcs-show-right") => {
                    debug!("ignoring query param {key}: not part of this protocol revision");
                    continue;
                }
                _ => continue,
            };
            // first occurrence wins, like URLSearchParams::get
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        // empty values count as absent
        for slot in [
            &mut raw.layout,
            &mut raw.interact_mode,
            &mut raw.trigger_id,
            &mut raw.pathname,
        ] {
            if slot.as_deref() == Some("") {
                *slot = None;
            }
        }
        raw
    }
}

impl RouteQuery {
    /// Parses and validates the `dcs-*` parameters of a location's search
    /// string. Unrelated parameters are ignored.
    pub fn parse(search: &str) -> Result<Self, ValidationError> {
        let raw = RawParams::collect(search);

        let layout = match raw.layout.as_deref() {
            Some(value) => Layout::parse(value)?,
            None => Layout::default(),
        };
        check_fields(
            layout,
            raw.interact_mode.is_some(),
            raw.trigger_id.is_some(),
            raw.pathname.is_some(),
        )?;

        Ok(match layout {
            Layout::FullClient => RouteQuery::FullClient,
            Layout::FullHost => RouteQuery::FullHost {
                pathname: raw.pathname.unwrap_or_default(),
            },
            Layout::SplitInteractive => RouteQuery::SplitInteractive {
                interact_mode: InteractMode::new(raw.interact_mode.unwrap_or_default()),
                trigger_id: raw.trigger_id.map(TriggerId::new),
            },
            Layout::SplitReadOnly => RouteQuery::SplitReadOnly,
        })
    }

    pub fn layout(&self) -> Layout {
        match self {
            RouteQuery::FullClient => Layout::FullClient,
            RouteQuery::FullHost { .. } => Layout::FullHost,
            RouteQuery::SplitInteractive { .. } => Layout::SplitInteractive,
            RouteQuery::SplitReadOnly => Layout::SplitReadOnly,
        }
    }

    pub fn trigger_id(&self) -> Option<&TriggerId> {
        match self {
            RouteQuery::SplitInteractive { trigger_id, .. } => trigger_id.as_ref(),
            _ => None,
        }
    }

    /// Route for a query that already carries everything it needs, i.e. a
    /// [`Layout::FullHost`] query.
    pub fn host_route(&self) -> Option<Route> {
        match self {
            RouteQuery::FullHost { pathname } => Some(Route::FullHost {
                pathname: pathname.clone(),
            }),
            _ => None,
        }
    }

    /// Attaches the resolved page to the query. A [`Layout::FullHost`] query
    /// keeps its own pathname and ignores `page_name`.
    pub fn into_route(self, page_name: PageName) -> Route {
        match self {
            RouteQuery::FullClient => Route::FullClient { page_name },
            RouteQuery::FullHost { pathname } => Route::FullHost { pathname },
            RouteQuery::SplitInteractive {
                interact_mode,
                trigger_id,
            } => Route::SplitInteractive {
                page_name,
                interact_mode,
                trigger_id,
            },
            RouteQuery::SplitReadOnly => Route::SplitReadOnly { page_name },
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let layout = self.layout();
        if layout != Layout::default() {
            serializer.append_pair(LAYOUT_PARAM, &layout.code().to_string());
        }
        match self {
            RouteQuery::SplitInteractive {
                interact_mode,
                trigger_id,
            } => {
                serializer.append_pair(INTERACT_MODE_PARAM, interact_mode.as_str());
                if let Some(trigger_id) = trigger_id {
                    serializer.append_pair(TRIGGER_ID_PARAM, trigger_id.as_str());
                }
            }
            RouteQuery::FullHost { pathname } => {
                serializer.append_pair(PATHNAME_PARAM, pathname);
            }
            RouteQuery::FullClient | RouteQuery::SplitReadOnly => {}
        }

        let query = serializer.finish();
        if query.is_empty() {
            query
        } else {
            format!("?{query}")
        }
    }
}

impl From<&Route> for RouteQuery {
    fn from(route: &Route) -> Self {
        match route {
            Route::FullClient { .. } => RouteQuery::FullClient,
            Route::FullHost { pathname } => RouteQuery::FullHost {
                pathname: pathname.clone(),
            },
            Route::SplitInteractive {
                interact_mode,
                trigger_id,
                ..
            } => RouteQuery::SplitInteractive {
                interact_mode: interact_mode.clone(),
                trigger_id: trigger_id.clone(),
            },
            Route::SplitReadOnly { .. } => RouteQuery::SplitReadOnly,
        }
    }
}

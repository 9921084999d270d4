//! Messages exchanged with the host over its channel.
//!
//! All payloads are plain serde structures in the host's camelCase JSON
//! shape; the transport itself belongs to the channel implementation.

mod error;

pub use error::NotFoundError;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{counts::CountTable, route::Route};

/// How the host should apply a route sent by the embedded app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationMode {
    Push,
    Replace,
}

/// Tag identifying one outbound route message, echoed back by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginTag(u64);

impl OriginTag {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OriginTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque context the host hands back untouched with the next push.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContext {
    #[serde(default)]
    pub self_originated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginTag>,
}

impl ClientContext {
    pub fn self_originated(origin: OriginTag) -> Self {
        Self {
            self_originated: true,
            origin: Some(origin),
        }
    }
}

/// `postSetDiscourseRoute` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoute {
    pub route: Route,
    pub mode: NavigationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_context: Option<ClientContext>,
}

/// One entry of a `postSetRedirects` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub src: Route,
    pub dest: Route,
}

/// `postSetRouteProps` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteProps {
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }
}

/// Messages the embedded app sends to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    SetRoute(SetRoute),
    SetRedirects(Vec<Redirect>),
    SetRouteProps(RouteProps),
}

/// `onDiscourseRoutePushed` payload: the authoritative route, a label for
/// it, and the complete count table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePushed {
    pub route: Route,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    #[serde(default)]
    pub counts: CountTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_context: Option<ClientContext>,
}

impl RoutePushed {
    pub fn new(route: Route, counts: CountTable) -> Self {
        Self {
            route,
            descr: None,
            counts,
            client_context: None,
        }
    }

    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    pub fn with_client_context(mut self, client_context: ClientContext) -> Self {
        self.client_context = Some(client_context);
        self
    }
}

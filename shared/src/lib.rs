//! # dcs Shared
//! Route model, query-string codec and host protocol messages shared by the
//! dcs route-sync crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod counts;
mod protocol;
mod route;
mod types;

pub use counts::{CountRecord, CountTable};
pub use protocol::{
    ClientContext, ClientMessage, NavigationMode, NotFoundError, OriginTag, Redirect,
    RoutePushed, RouteProps, SetRoute,
};
pub use route::{
    Layout, Route, RouteQuery, ValidationError, INTERACT_MODE_PARAM, LAYOUT_PARAM,
    PATHNAME_PARAM, TRIGGER_ID_PARAM,
};
pub use types::{InteractMode, PageName, TriggerId};

use dcs_shared::{Redirect, RoutePushed, RouteProps, SetRoute};

use crate::backends;

/// Receives every route the host pushes.
pub type RoutePushedHandler = Box<dyn Fn(RoutePushed)>;

/// Request/event channel to the host page.
///
/// Outbound calls are fire-and-forget; the host answers, if at all, with a
/// later push.
pub trait HostChannel {
    /// Whether a host is on the other side at all. Everything else on this
    /// trait is only used when this returns true.
    fn in_iframe(&self) -> bool {
        backends::is_embedded()
    }

    fn post_set_route(&self, message: SetRoute);

    fn post_set_redirects(&self, redirects: Vec<Redirect>);

    fn post_set_route_props(&self, props: RouteProps);

    fn on_route_pushed(&self, handler: RoutePushedHandler);
}

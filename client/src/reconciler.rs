//! # Route reconciler
//!
//! Two routers own a piece of the same navigation state: the host page's URL
//! and the embedded app's internal router. The reconciler listens to both
//! and forwards each change to the other side, without ever feeding a change
//! back to where it came from.
//!
//! | Direction | Entry point | Ends with |
//! |-----------|-------------|-----------|
//! | app → host | [`RouteReconciler::handle_location_changed`] | `SetRoute` message carrying a fresh origin tag |
//! | host → app | [`RouteReconciler::handle_route_pushed`] | `router.replace(..)` under the echo guard |
//!
//! The host is the routing authority: the initial location is never sent,
//! the reconciler waits for the host's first push instead.
//!
//! Echoes are recognised two ways. Messages to the host carry an origin tag
//! that the host hands back with the resulting push; a push bearing one of
//! our outstanding tags is already reflected in the internal router. Routers
//! that notify listeners synchronously from inside `replace` are covered by
//! the [`EchoGuard`], which is engaged for exactly the duration of that call.

use std::{cell::Cell, rc::Rc};

use log::{debug, info, warn};

use dcs_shared::{
    ClientContext, NavigationMode, NotFoundError, Redirect, Route, RouteProps, RoutePushed,
    RouteQuery, SetRoute, ValidationError,
};

use crate::{
    echo::{EchoGuard, OriginTracker},
    error::{ConfigurationError, SyncError},
    pushed_data::PushedData,
    resolver::PageNameResolver,
    router::{InternalRouter, ListenerId, Location},
    runtime::SyncRuntime,
};

pub struct RouteReconciler {
    runtime: Rc<SyncRuntime>,
    router: Rc<dyn InternalRouter>,
    resolver: Rc<dyn PageNameResolver>,
    origins: OriginTracker,
    echo_guard: EchoGuard,
    listener: Cell<Option<ListenerId>>,
    disposed: Cell<bool>,
}

impl RouteReconciler {
    /// Creates the reconciler and hooks it to the router and, when running
    /// embedded, to the host's route pushes.
    pub(crate) fn start(
        runtime: Rc<SyncRuntime>,
        router: Rc<dyn InternalRouter>,
        resolver: Rc<dyn PageNameResolver>,
    ) -> Rc<Self> {
        let max_pending_origins = runtime.config.max_pending_origins;
        let reconciler = Rc::new(Self {
            runtime,
            router,
            resolver,
            origins: OriginTracker::new(max_pending_origins),
            echo_guard: EchoGuard::default(),
            listener: Cell::new(None),
            disposed: Cell::new(false),
        });

        let weak = Rc::downgrade(&reconciler);
        let listener_id = reconciler.router.listen(Box::new(move |location| {
            match weak.upgrade() {
                Some(reconciler) => reconciler.handle_location_changed(location),
                None => Ok(()),
            }
        }));
        reconciler.listener.set(Some(listener_id));

        if reconciler.is_embedded() {
            let weak = Rc::downgrade(&reconciler);
            reconciler
                .runtime
                .channel
                .on_route_pushed(Box::new(move |pushed| {
                    if let Some(reconciler) = weak.upgrade() {
                        reconciler.accept_route_pushed(pushed);
                    }
                }));
        } else {
            info!("RouteReconciler: not running in an iframe, host pushes are disabled");
        }

        reconciler
    }

    pub fn is_embedded(&self) -> bool {
        self.runtime.channel.in_iframe()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Whether the reconciler is writing to the internal router right now.
    pub fn is_echo_suppressed(&self) -> bool {
        self.echo_guard.is_engaged()
    }

    pub fn latest_pushed(&self) -> Option<Rc<PushedData>> {
        self.runtime.pushed.latest()
    }

    pub(crate) fn runtime(&self) -> &Rc<SyncRuntime> {
        &self.runtime
    }

    pub(crate) fn router(&self) -> &Rc<dyn InternalRouter> {
        &self.router
    }

    pub(crate) fn resolver(&self) -> &Rc<dyn PageNameResolver> {
        &self.resolver
    }

    // Internal navigation

    /// Listener for the internal router.
    ///
    /// Validation runs first and unconditionally, so a malformed URL fails the
    /// navigation even when the reconciler caused it. The rest, page-name
    /// resolution and the message to the host, runs as a spawned task.
    pub fn handle_location_changed(
        self: &Rc<Self>,
        location: &Location,
    ) -> Result<(), ValidationError> {
        let query = RouteQuery::parse(&location.search)?;

        if self.echo_guard.is_engaged() {
            debug!("RouteReconciler: ignoring own replace to {location}");
            return Ok(());
        }
        if self.disposed.get() {
            return Ok(());
        }

        // the app left the page the host data was about
        self.runtime.pushed.clear();

        let reconciler = Rc::clone(self);
        let pathname = location.pathname.clone();
        self.runtime.spawn("internal route publication", async move {
            reconciler.publish_internal_route(pathname, query).await;
        });
        Ok(())
    }

    async fn publish_internal_route(&self, pathname: String, query: RouteQuery) {
        let route = match query.host_route() {
            Some(route) => route,
            None => {
                let page_name = self.resolver.page_name(&pathname).await;
                query.into_route(page_name)
            }
        };

        if self.disposed.get() {
            return;
        }
        if !self.is_embedded() {
            debug!("RouteReconciler: standalone, not sending {route:?}");
            return;
        }

        let origin = self.origins.issue();
        debug!("RouteReconciler: sending route {route:?} ({origin})");
        self.runtime.channel.post_set_route(SetRoute {
            route,
            mode: NavigationMode::Replace,
            client_context: Some(ClientContext::self_originated(origin)),
        });
    }

    // Host pushes

    fn accept_route_pushed(self: Rc<Self>, pushed: RoutePushed) {
        if self.disposed.get() {
            debug!("RouteReconciler: disposed, dropping host push");
            return;
        }
        let reconciler = Rc::clone(&self);
        self.runtime.spawn("host route push", async move {
            if let Err(err) = reconciler.handle_route_pushed(pushed).await {
                reconciler.runtime.events.push_error(err);
            }
        });
    }

    /// Applies a route pushed by the host.
    ///
    /// The pushed data is stored and every registered component notified
    /// before anything else, echoes included. Then, unless the push echoes
    /// our own message or the layout keeps the app hidden, the internal router
    /// is moved to the pushed page with a history replace. A push replaced by
    /// a newer one while its page was being resolved leaves the router alone.
    pub async fn handle_route_pushed(&self, pushed: RoutePushed) -> Result<(), SyncError> {
        if self.disposed.get() {
            return Err(ConfigurationError::Disposed.into());
        }

        let RoutePushed {
            route,
            descr,
            counts,
            client_context,
        } = pushed;
        let stored = self.runtime.pushed.store(PushedData {
            route: route.clone(),
            descr,
            counts,
        });
        self.runtime.registry.notify();

        if let Some(client_context) = &client_context {
            if self.origins.acknowledge(client_context) {
                debug!("RouteReconciler: host echoed our route {route:?}");
                return Ok(());
            }
        }

        let Some(page_name) = route.page_name() else {
            debug!("RouteReconciler: host owns the pathname, router left untouched");
            return Ok(());
        };

        let pathname = self.resolver.pathname(page_name).await;
        if !self.runtime.pushed.holds(&stored) {
            debug!("RouteReconciler: {route:?} superseded while resolving its page");
            return Ok(());
        }
        let Some(pathname) = pathname else {
            let err = NotFoundError::new(page_name.clone());
            warn!("RouteReconciler: {err}");
            self.runtime
                .channel
                .post_set_route_props(RouteProps::error(err.to_string()));
            return Err(err.into());
        };

        self.replace_internal_route(&pathname, &route);
        Ok(())
    }

    fn replace_internal_route(&self, pathname: &str, route: &Route) {
        let search = route.to_query();

        // the router notifies its listeners even for a replace to the same URL
        if self.router.location().matches(pathname, &search) {
            debug!("RouteReconciler: router already at {pathname}{search}");
            return;
        }

        let url = format!("{pathname}{search}");
        debug!("RouteReconciler: replacing internal route with {url}");
        let _scope = self.echo_guard.engage();
        self.router.replace(&url);
    }

    // Lifecycle

    pub(crate) fn set_redirects(&self, redirects: Vec<Redirect>) {
        if self.is_embedded() {
            self.runtime.channel.post_set_redirects(redirects);
        } else {
            debug!("RouteReconciler: standalone, dropping {} redirects", redirects.len());
        }
    }

    pub(crate) fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        if let Some(listener_id) = self.listener.take() {
            self.router.unlisten(listener_id);
        }
    }
}

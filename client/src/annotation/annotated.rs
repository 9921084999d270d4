use std::{
    cell::{Cell, RefCell},
    marker::PhantomData,
    rc::{Rc, Weak},
};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::debug;

use dcs_shared::{PageName, Route, RouteQuery, TriggerId};

use super::component::{default_scroll_into_view, Annotations, Component, DcsProps};
use crate::{
    reconciler::RouteReconciler,
    registry::{RegistrationKey, RouteSubscriber},
    router::Location,
};

/// Builds [`Annotated`] instances of one component type, all bound to the
/// same fixed page or all following the host's current page.
pub struct Annotator<C: Component> {
    reconciler: Rc<RouteReconciler>,
    fixed_pathname: Option<String>,
    phantom_c: PhantomData<fn() -> C>,
}

impl<C: Component> Annotator<C> {
    pub(crate) fn new(reconciler: Rc<RouteReconciler>, fixed_pathname: Option<String>) -> Self {
        Self {
            reconciler,
            fixed_pathname,
            phantom_c: PhantomData,
        }
    }

    pub fn fixed_pathname(&self) -> Option<&str> {
        self.fixed_pathname.as_deref()
    }

    /// Wraps one component instance. Page-name resolution for a fixed
    /// pathname starts right away; nothing is rendered before `mount`.
    pub fn create(&self, component: C, props: C::Props) -> Annotated<C> {
        let runtime = self.reconciler.runtime();
        let identity = match &self.fixed_pathname {
            Some(pathname) => {
                let resolver = Rc::clone(self.reconciler.resolver());
                let pathname = pathname.clone();
                let resolution = async move { resolver.page_name(&pathname).await }
                    .boxed_local()
                    .shared();
                let eager = resolution.clone();
                runtime.spawn("page identity resolution", async move {
                    eager.await;
                });
                PageIdentity::Fixed(resolution)
            }
            None => PageIdentity::FromRoute,
        };

        let dcs_selected =
            initial_selection(&self.reconciler.router().location(), props.trigger_id());

        Annotated {
            instance: Rc::new(Instance {
                reconciler: Rc::clone(&self.reconciler),
                identity,
                state: RefCell::new(InstanceState {
                    component,
                    props,
                    annotations: Annotations {
                        dcs_count: None,
                        dcs_selected,
                    },
                }),
                lifecycle: Cell::new(Lifecycle::Created),
                registration: Cell::new(None),
            }),
        }
    }
}

fn initial_selection(location: &Location, trigger_id: Option<&TriggerId>) -> bool {
    let Some(trigger_id) = trigger_id.filter(|trigger_id| !trigger_id.is_empty()) else {
        return false;
    };
    RouteQuery::parse(&location.search)
        .ok()
        .is_some_and(|query| query.trigger_id() == Some(trigger_id))
}

enum PageIdentity {
    Fixed(Shared<LocalBoxFuture<'static, PageName>>),
    FromRoute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

struct InstanceState<C: Component> {
    component: C,
    props: C::Props,
    annotations: Annotations,
}

struct Instance<C: Component> {
    reconciler: Rc<RouteReconciler>,
    identity: PageIdentity,
    state: RefCell<InstanceState<C>>,
    lifecycle: Cell<Lifecycle>,
    registration: Cell<Option<RegistrationKey>>,
}

/// A component augmented with `dcs_count` and `dcs_selected`.
///
/// Registers for host pushes while mounted. Dropping it unmounts it.
pub struct Annotated<C: Component> {
    instance: Rc<Instance<C>>,
}

impl<C: Component> Annotated<C> {
    /// Renders once, then follows host pushes. Updates right away when the
    /// host already pushed a route. Mounting twice, or after unmounting,
    /// does nothing.
    pub fn mount(&self) {
        let instance = &self.instance;
        if instance.lifecycle.get() != Lifecycle::Created {
            return;
        }
        instance.lifecycle.set(Lifecycle::Mounted);
        instance.render_current();

        let runtime = instance.reconciler.runtime();
        let weak = Rc::downgrade(instance);
        let subscriber: Weak<dyn RouteSubscriber> = weak;
        instance.registration.set(Some(runtime.registry.add(subscriber)));

        if !runtime.pushed.is_empty() {
            Rc::clone(instance).route_pushed();
        }
    }

    pub fn unmount(&self) {
        let instance = &self.instance;
        instance.lifecycle.set(Lifecycle::Unmounted);
        if let Some(key) = instance.registration.take() {
            instance.reconciler.runtime().registry.remove(key);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_mounted()
    }

    pub fn annotations(&self) -> Annotations {
        self.instance.state.borrow().annotations
    }

    pub fn dcs_count(&self) -> Option<u32> {
        self.annotations().dcs_count
    }

    pub fn dcs_selected(&self) -> bool {
        self.annotations().dcs_selected
    }

    pub fn with_component<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.instance.state.borrow().component)
    }

    pub fn with_props<R>(&self, f: impl FnOnce(&C::Props) -> R) -> R {
        f(&self.instance.state.borrow().props)
    }
}

impl<C: Component> Drop for Annotated<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<C: Component> Instance<C> {
    fn is_mounted(&self) -> bool {
        self.lifecycle.get() == Lifecycle::Mounted
    }

    fn trigger_id(&self) -> Option<TriggerId> {
        self.state
            .borrow()
            .props
            .trigger_id()
            .filter(|trigger_id| !trigger_id.is_empty())
            .cloned()
    }

    fn render_current(&self) {
        let mut state = self.state.borrow_mut();
        let InstanceState {
            component,
            props,
            annotations,
        } = &mut *state;
        component.render(props, *annotations);
    }

    /// Recomputes the annotations against the latest pushed data.
    ///
    /// The page identity may take a while to resolve; everything after that
    /// point reads the shared slot again, so a push that arrived meanwhile
    /// wins over the one that triggered this refresh.
    async fn refresh(self: Rc<Self>) {
        if !self.is_mounted() {
            return;
        }

        let needs_count = self.state.borrow().annotations.dcs_count.is_none();
        let fixed_page_name = match (&self.identity, needs_count) {
            (PageIdentity::Fixed(resolution), true) => Some(resolution.clone().await),
            _ => None,
        };

        if !self.is_mounted() {
            debug!("Annotated: unmounted while resolving its page, update dropped");
            return;
        }
        let Some(pushed) = self.reconciler.latest_pushed() else {
            return;
        };

        let trigger_id = self.trigger_id();
        let dcs_selected = trigger_id.is_some() && pushed.route.trigger_id() == trigger_id.as_ref();

        let previous = self.state.borrow().annotations;
        // count is resolved once and kept for the lifetime of the instance
        let dcs_count = previous.dcs_count.or_else(|| {
            let page_name = fixed_page_name.as_ref().or(pushed.route.page_name())?;
            Some(pushed.counts.count_for(page_name, trigger_id.as_ref()))
        });

        self.apply(
            previous,
            Annotations {
                dcs_count,
                dcs_selected,
            },
            &pushed.route,
        );
    }

    fn apply(self: &Rc<Self>, previous: Annotations, next: Annotations, route: &Route) {
        if next != previous {
            self.state.borrow_mut().annotations = next;
            self.render_current();
        }

        // scroll again even when already selected, the layout may have moved it;
        // with no trigger selected at all, go back to the one selected before
        if next.dcs_selected || (previous.dcs_selected && route.trigger_id().is_none()) {
            self.schedule_scroll(route.clone());
        }
    }

    fn schedule_scroll(self: &Rc<Self>, route: Route) {
        let runtime = self.reconciler.runtime();
        let instance = Rc::downgrade(self);
        runtime.scheduler.schedule(
            runtime.config.scroll_delay,
            Box::new(move || {
                if let Some(instance) = instance.upgrade() {
                    instance.scroll_into_view(&route);
                }
            }),
        );
    }

    fn scroll_into_view(&self, route: &Route) {
        if !self.is_mounted() {
            return;
        }
        let state = self.state.borrow();
        let Some(surface) = state.component.surface() else {
            debug!("Annotated: nothing rendered yet, skipping scroll");
            return;
        };
        match state.props.scroll_into_view() {
            Some(strategy) => strategy(surface, route),
            None => default_scroll_into_view(surface, route),
        }
    }
}

impl<C: Component> RouteSubscriber for Instance<C> {
    fn route_pushed(self: Rc<Self>) {
        let runtime = Rc::clone(self.reconciler.runtime());
        runtime.spawn("annotation refresh", self.refresh());
    }
}

use std::{
    cell::{Cell, OnceCell},
    rc::Rc,
};

use futures::task::LocalSpawn;
use log::{debug, info};

use dcs_shared::Redirect;

use crate::{
    annotation::{Annotator, Component},
    channel::HostChannel,
    error::{ConfigurationError, SyncError},
    pushed_data::PushedData,
    reconciler::RouteReconciler,
    resolver::PageNameResolver,
    router::InternalRouter,
    runtime::SyncRuntime,
    scheduler::Scheduler,
    sync_config::SyncConfig,
};

/// Owns everything one embedded app needs to stay in sync with its host:
/// the reconciler, the registry of annotated components and the latest
/// pushed data.
///
/// Router sync starts once per context, with [`SyncContext::run_router_sync`].
/// Components can only be wrapped after that.
pub struct SyncContext {
    runtime: Rc<SyncRuntime>,
    reconciler: OnceCell<Rc<RouteReconciler>>,
    disposed: Cell<bool>,
}

impl SyncContext {
    pub fn new(
        config: SyncConfig,
        channel: Rc<dyn HostChannel>,
        spawner: Rc<dyn LocalSpawn>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            runtime: Rc::new(SyncRuntime::new(config, channel, spawner, scheduler)),
            reconciler: OnceCell::new(),
            disposed: Cell::new(false),
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.runtime.config
    }

    /// Connects the app's router to the host. The current location is not
    /// sent; the host pushes the initial route.
    pub fn run_router_sync(
        &self,
        router: Rc<dyn InternalRouter>,
        resolver: Rc<dyn PageNameResolver>,
    ) -> Result<Rc<RouteReconciler>, ConfigurationError> {
        if self.disposed.get() {
            return Err(ConfigurationError::Disposed);
        }
        if self.reconciler.get().is_some() {
            return Err(ConfigurationError::AlreadyInitialized);
        }

        let reconciler = RouteReconciler::start(Rc::clone(&self.runtime), router, resolver);
        self.reconciler
            .set(Rc::clone(&reconciler))
            .map_err(|_| ConfigurationError::AlreadyInitialized)?;
        info!("SyncContext: router sync started");
        Ok(reconciler)
    }

    pub fn reconciler(&self) -> Option<&Rc<RouteReconciler>> {
        self.reconciler.get()
    }

    /// Annotator for a component type. With `fixed_pathname`, every
    /// instance counts for that page; without it, for whatever page the
    /// host pushed.
    pub fn wrap<C: Component>(
        &self,
        fixed_pathname: Option<&str>,
    ) -> Result<Annotator<C>, ConfigurationError> {
        if self.disposed.get() {
            return Err(ConfigurationError::Disposed);
        }
        let reconciler = self
            .reconciler
            .get()
            .ok_or(ConfigurationError::NotInitialized)?;
        Ok(Annotator::new(
            Rc::clone(reconciler),
            fixed_pathname.map(str::to_owned),
        ))
    }

    /// Hands url redirects to the host. Dropped when not embedded.
    pub fn set_redirects(&self, redirects: Vec<Redirect>) -> Result<(), ConfigurationError> {
        if self.disposed.get() {
            return Err(ConfigurationError::Disposed);
        }
        let reconciler = self
            .reconciler
            .get()
            .ok_or(ConfigurationError::NotInitialized)?;
        reconciler.set_redirects(redirects);
        Ok(())
    }

    pub fn pushed_data(&self) -> Option<Rc<PushedData>> {
        self.runtime.pushed.latest()
    }

    pub fn registered_components(&self) -> usize {
        self.runtime.registry.len()
    }

    /// Errors raised by background sync work since the last call.
    pub fn take_errors(&self) -> Vec<SyncError> {
        self.runtime.events.take_errors()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        if let Some(reconciler) = self.reconciler.get() {
            reconciler.dispose();
        }
        self.runtime.registry.clear();
        self.runtime.pushed.clear();
        debug!("SyncContext: disposed");
    }
}

impl Drop for SyncContext {
    fn drop(&mut self) {
        self.dispose();
    }
}

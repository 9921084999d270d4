use std::{future::Future, rc::Rc};

use futures::task::{LocalSpawn, LocalSpawnExt};
use log::warn;

use crate::{
    channel::HostChannel, error::SyncError, events::SyncEvents, pushed_data::PushedSlot,
    registry::ComponentRegistry, scheduler::Scheduler, sync_config::SyncConfig,
};

/// State and services shared by the reconciler and every annotated
/// component of one sync context.
pub(crate) struct SyncRuntime {
    pub config: SyncConfig,
    pub channel: Rc<dyn HostChannel>,
    pub spawner: Rc<dyn LocalSpawn>,
    pub scheduler: Rc<dyn Scheduler>,
    pub pushed: PushedSlot,
    pub registry: ComponentRegistry,
    pub events: SyncEvents,
}

impl SyncRuntime {
    pub fn new(
        config: SyncConfig,
        channel: Rc<dyn HostChannel>,
        spawner: Rc<dyn LocalSpawn>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            config,
            channel,
            spawner,
            scheduler,
            pushed: PushedSlot::new(),
            registry: ComponentRegistry::new(),
            events: SyncEvents::new(),
        }
    }

    pub fn spawn(&self, task: &'static str, future: impl Future<Output = ()> + 'static) {
        if let Err(err) = self.spawner.spawn_local(future) {
            warn!("failed to spawn {task}: {err:?}");
            self.events.push_error(SyncError::ExecutorShutdown { task });
        }
    }
}

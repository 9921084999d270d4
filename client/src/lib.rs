//! # dcs Client
//! Keeps an embedded single-page app's router in sync with the host page
//! it is framed in, and annotates components with the host's counts and
//! selection.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub use dcs_shared as shared;

mod annotation;
mod backends;
mod channel;
mod context;
mod echo;
mod error;
mod events;
mod pushed_data;
mod reconciler;
mod registry;
mod resolver;
mod router;
mod runtime;
mod scheduler;
mod sync_config;

pub use annotation::{
    default_scroll_into_view, Annotated, Annotations, Annotator, Component, DcsProps,
    ScrollBehavior, ScrollStrategy, Surface, SurfaceRect,
};
pub use backends::is_embedded;
pub use channel::{HostChannel, RoutePushedHandler};
pub use context::SyncContext;
pub use echo::{EchoGuard, EchoGuardScope, OriginTracker};
pub use error::{ConfigurationError, SyncError};
pub use events::SyncEvents;
pub use pushed_data::{PushedData, PushedSlot};
pub use reconciler::RouteReconciler;
pub use registry::{ComponentRegistry, RegistrationKey, RouteSubscriber};
pub use resolver::{PageNameResolver, PageTable};
pub use router::{InternalRouter, ListenerId, Location, LocationListener};
pub use scheduler::Scheduler;
pub use sync_config::SyncConfig;

//! Workspace runtime orchestration.
//!
//! This crate contains the top-level state tracker for running workspaces:
//! the authoritative status cache, the live-runtime registry, the
//! single-workspace and bulk crash-recovery protocols, and abnormal-stop
//! event handling. It is consumed by API services and background workers;
//! everything that touches the cluster goes through the
//! `RuntimeInfrastructure` collaborator boundary.

pub mod cache;
pub mod dao;
pub mod environment;
pub mod events;
pub mod infrastructure;
pub mod lock;
pub mod runtimes;

pub use cache::WorkspaceStatusCache;
pub use dao::{DevfileConverter, WorkspaceDao};
pub use environment::{
    InternalEnvironment, InternalEnvironmentFactory, NO_ENVIRONMENT_RECIPE_TYPE,
};
pub use events::{
    event_channel, RuntimeAbnormalStoppedEvent, RuntimeAbnormalStoppingEvent, RuntimeEvent,
};
pub use infrastructure::{InternalRuntime, RuntimeContext, RuntimeInfrastructure};
pub use lock::WorkspaceLocks;
pub use runtimes::WorkspaceRuntimes;

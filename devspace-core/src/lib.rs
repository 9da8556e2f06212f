//! Shared model types for the devspace workspace engine.
//!
//! This crate holds the value objects that identify and place a workspace
//! runtime, the workspace status enum, the thin model/DTO structs consumed
//! by the orchestrator, and the error taxonomy shared by every other crate
//! in the workspace.

pub mod attributes;
pub mod error;
pub mod identity;
pub mod model;
pub mod status;

pub use attributes::{
    ERROR_MESSAGE_ATTRIBUTE, INFRASTRUCTURE_NAMESPACE_ATTRIBUTE, STOPPED_ABNORMALLY_ATTRIBUTE,
    STOPPED_ATTRIBUTE,
};
pub use error::{Result, WorkspaceError};
pub use identity::{RuntimeIdentity, RuntimeTarget, Subject};
pub use model::{
    Command, Devfile, Environment, Machine, MachineStatus, Recipe, Runtime, ServerConfig,
    Warning, Workspace, WorkspaceConfig,
};
pub use status::WorkspaceStatus;

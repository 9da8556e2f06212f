//! Namespace provisioning policy for workspace runtimes.
//!
//! This crate decides which infrastructure namespace (or OpenShift project)
//! a workspace's containers live in and makes sure it exists with its
//! auxiliary objects (service account, role binding). The policy engine is
//! one struct, `NamespaceFactory`, parameterized by the `NamespaceBackend`
//! capability trait; the Kubernetes and OpenShift flavors differ only in
//! how raw cluster objects are mapped to `NamespaceMeta`.

pub mod backend;
pub mod factory;
pub mod kubernetes;
pub mod meta;
pub mod openshift;
pub mod template;

pub use backend::{NamespaceBackend, RawNamespace};
pub use factory::{
    NamespaceFactory, NamespaceFactoryConfig, WorkspaceNamespace, WorkspaceServiceAccount,
};
pub use meta::{NamespaceMeta, DEFAULT_ATTRIBUTE, PHASE_ATTRIBUTE};

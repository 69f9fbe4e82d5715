//! Renders the driver pod specification for a Spark job running on
//! Kubernetes.
//!
//! Given an immutable job configuration snapshot and a resolved identity,
//! [`build_driver_pod`] deterministically derives the complete driver pod
//! (container, ports, environment, resource requests and limits, metadata,
//! pull secrets, restart policy) together with the configuration properties
//! that must be merged back into the job configuration so that in-cluster
//! execution agrees with the pod that was actually created.
//!
//! Submitting the pod to a cluster is the client library's job; nothing in
//! this crate performs I/O.

pub mod builder;
pub mod config;
pub mod constants;
pub mod memory;
pub mod naming;
pub mod properties;
pub mod quantity;

pub use builder::{build_driver_pod, DriverPod, Error};
pub use config::{DriverJobConfig, EnvEntry, ImagePullPolicy, MainAppResource, ResolvedIdentity};

//! Typed job configuration consumed by the pod builder.
//!
//! The configuration is an immutable snapshot owned by the caller. The
//! builder only reads from it; every build invocation constructs fresh
//! output, so concurrent builds over independent snapshots need no
//! coordination.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum ImagePullPolicy {
    Always,
    IfNotPresent,
    Never,
}

/// The primary application artifact, tagged with its runtime kind.
///
/// JVM artifacts name their entry point via [`DriverJobConfig::main_class`];
/// interpreted artifacts carry the script path and are started through a
/// fixed runner class instead.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MainAppResource {
    /// Optional artifact path. `None` means the artifact is baked into the
    /// container image.
    Jvm(Option<String>),
    Python(String),
    R(String),
}

impl MainAppResource {
    pub fn is_jvm(&self) -> bool {
        matches!(self, MainAppResource::Jvm(_))
    }
}

impl Default for MainAppResource {
    fn default() -> Self {
        MainAppResource::Jvm(None)
    }
}

/// A single driver environment entry. Kept as a list rather than a map so
/// that insertion order survives into the container specification.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverJobConfig {
    pub main_app_resource: MainAppResource,

    /// Entry point for JVM artifacts. Ignored for interpreted artifacts,
    /// which are rerouted through their runner class.
    pub main_class: Option<String>,

    /// Arguments passed through to the application.
    pub args: Vec<String>,

    pub image: Option<String>,

    pub image_pull_policy: Option<ImagePullPolicy>,

    /// Comma-separated secret names, rendered into pull-secret references
    /// in the given order.
    pub image_pull_secrets: Option<String>,

    pub cores: Option<u32>,

    pub core_limit: Option<u32>,

    pub memory_mib: Option<u64>,

    /// Overrides the runtime-kind-dependent overhead factor. Must lie in
    /// (0, 1).
    pub memory_overhead_factor: Option<f64>,

    pub labels: BTreeMap<String, String>,

    pub annotations: BTreeMap<String, String>,

    pub env: Vec<EnvEntry>,

    pub jars: Vec<String>,

    pub files: Vec<String>,
}

/// Identity under which the driver pod and its follow-on resources are
/// named.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIdentity {
    pub app_id: String,

    /// Prefix shared by the driver pod and the executor pods spawned later.
    pub resource_name_prefix: String,

    /// Explicit driver pod name. Taken verbatim when set, otherwise the
    /// name is derived from the resource name prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,
}

//! Assembles the driver pod specification and its companion configuration
//! delta from a job configuration snapshot.
//!
//! Building is pure: no I/O, no mutation of the input, and the same input
//! always yields the same output. A failed build surfaces a typed error and
//! produces neither a pod nor a delta.

use std::collections::{BTreeMap, BTreeSet};

use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, EnvVarSource, LocalObjectReference, ObjectFieldSelector,
    Pod, PodSpec, ResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use snafu::{ensure, OptionExt, ResultExt, Snafu};

use crate::config::{DriverJobConfig, MainAppResource, ResolvedIdentity};
use crate::constants::{
    BLOCK_MANAGER_PORT, BLOCK_MANAGER_PORT_NAME, CONTAINER_NAME_DRIVER,
    DEFAULT_DRIVER_CORES, DEFAULT_DRIVER_MEMORY_MIB, DRIVER_BIND_ADDRESS_FIELD_PATH, DRIVER_PORT,
    DRIVER_PORT_NAME, ENV_DRIVER_BIND_ADDRESS, PYTHON_RUNNER_MAIN_CLASS, R_RUNNER_MAIN_CLASS,
    SPARK_INTERNAL_RESOURCE, UI_PORT, UI_PORT_NAME,
};
use crate::memory::{self, MemorySpec};
use crate::{naming, properties, quantity};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("job configuration defines no container image"))]
    MissingImage,

    #[snafu(display("JVM applications must define a main class"))]
    MissingMainClass,

    #[snafu(display("duplicate driver environment variable [{name}]"))]
    DuplicateEnvVar { name: String },

    #[snafu(display("failed to compute driver memory"))]
    DriverMemory { source: memory::Error },

    #[snafu(display("failed to render driver cpu quantity"))]
    CpuQuantity { source: quantity::Error },

    #[snafu(display("failed to render driver memory quantity"))]
    MemoryQuantity { source: quantity::Error },
}

/// A fully rendered driver pod plus the configuration pairs the caller must
/// merge back into its job configuration before continuing driver startup.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverPod {
    pub pod: Pod,
    pub properties: BTreeMap<String, String>,
}

pub fn build_driver_pod(
    config: &DriverJobConfig,
    identity: &ResolvedIdentity,
) -> Result<DriverPod, Error> {
    let image = config.image.clone().context(MissingImageSnafu)?;
    let pod_name = naming::driver_pod_name(identity);

    let memory = MemorySpec::with_overhead(
        config.memory_mib.unwrap_or(DEFAULT_DRIVER_MEMORY_MIB),
        &config.main_app_resource,
        config.memory_overhead_factor,
    )
    .context(DriverMemorySnafu)?;

    let container = Container {
        name: CONTAINER_NAME_DRIVER.to_string(),
        image: Some(image),
        image_pull_policy: config.image_pull_policy.as_ref().map(ToString::to_string),
        args: Some(driver_args(config)?),
        env: Some(driver_env(config)?),
        ports: Some(driver_ports()),
        resources: Some(driver_resources(config, &memory)?),
        ..Container::default()
    };

    let pod = Pod {
        metadata: ObjectMeta {
            name: Some(pod_name.clone()),
            labels: Some(naming::driver_labels(&config.labels, &identity.app_id)),
            annotations: Some(naming::driver_annotations(&config.annotations)),
            ..ObjectMeta::default()
        },
        spec: Some(PodSpec {
            containers: vec![container],
            restart_policy: Some("Never".to_string()),
            image_pull_secrets: image_pull_secrets(config),
            ..PodSpec::default()
        }),
        ..Pod::default()
    };

    let properties =
        properties::additional_driver_properties(config, identity, &pod_name, memory.overhead_factor);

    Ok(DriverPod { pod, properties })
}

fn driver_resources(
    config: &DriverJobConfig,
    memory: &MemorySpec,
) -> Result<ResourceRequirements, Error> {
    let cores = config.cores.unwrap_or(DEFAULT_DRIVER_CORES);
    let core_limit = config.core_limit.unwrap_or(cores);

    let requests = BTreeMap::from([
        (
            "cpu".to_string(),
            quantity::cpu_cores(cores).context(CpuQuantitySnafu)?,
        ),
        (
            "memory".to_string(),
            quantity::memory_mi(memory.request_mib).context(MemoryQuantitySnafu)?,
        ),
    ]);
    let limits = BTreeMap::from([
        (
            "cpu".to_string(),
            quantity::cpu_cores(core_limit).context(CpuQuantitySnafu)?,
        ),
        (
            "memory".to_string(),
            quantity::memory_mi(memory.limit_mib).context(MemoryQuantitySnafu)?,
        ),
    ]);

    Ok(ResourceRequirements {
        requests: Some(requests),
        limits: Some(limits),
        ..ResourceRequirements::default()
    })
}

/// The container entrypoint arguments. Interpreted artifacts are rerouted
/// through their fixed runner class and the script moves into the argument
/// list; JVM artifacts keep their configured main class.
fn driver_args(config: &DriverJobConfig) -> Result<Vec<String>, Error> {
    let (main_class, primary_resource) = match &config.main_app_resource {
        MainAppResource::Jvm(artifact) => (
            config.main_class.clone().context(MissingMainClassSnafu)?,
            artifact
                .clone()
                .unwrap_or_else(|| SPARK_INTERNAL_RESOURCE.to_string()),
        ),
        MainAppResource::Python(script) => (PYTHON_RUNNER_MAIN_CLASS.to_string(), script.clone()),
        MainAppResource::R(script) => (R_RUNNER_MAIN_CLASS.to_string(), script.clone()),
    };

    let mut args = vec![
        "driver".to_string(),
        "--class".to_string(),
        main_class,
        primary_resource,
    ];
    args.extend(config.args.iter().cloned());
    Ok(args)
}

fn driver_env(config: &DriverJobConfig) -> Result<Vec<EnvVar>, Error> {
    // The bind address entry is appended below, so its name counts as taken.
    let mut seen: BTreeSet<&str> = BTreeSet::from([ENV_DRIVER_BIND_ADDRESS]);

    let mut env = Vec::with_capacity(config.env.len() + 1);
    for entry in &config.env {
        ensure!(
            seen.insert(&entry.name),
            DuplicateEnvVarSnafu { name: entry.name.clone() }
        );
        env.push(EnvVar {
            name: entry.name.clone(),
            value: Some(entry.value.clone()),
            value_from: None,
        });
    }

    // The pod's own address does not exist until the scheduler has placed
    // it, so this entry must go out as a field reference, not a literal.
    env.push(EnvVar {
        name: ENV_DRIVER_BIND_ADDRESS.to_string(),
        value: None,
        value_from: Some(EnvVarSource {
            field_ref: Some(ObjectFieldSelector {
                api_version: None,
                field_path: DRIVER_BIND_ADDRESS_FIELD_PATH.to_string(),
            }),
            ..EnvVarSource::default()
        }),
    });

    Ok(env)
}

fn driver_ports() -> Vec<ContainerPort> {
    [
        (DRIVER_PORT_NAME, DRIVER_PORT),
        (BLOCK_MANAGER_PORT_NAME, BLOCK_MANAGER_PORT),
        (UI_PORT_NAME, UI_PORT),
    ]
    .into_iter()
    .map(|(name, port)| ContainerPort {
        name: Some(name.to_string()),
        container_port: port,
        protocol: Some("TCP".to_string()),
        ..ContainerPort::default()
    })
    .collect()
}

fn image_pull_secrets(config: &DriverJobConfig) -> Option<Vec<LocalObjectReference>> {
    config.image_pull_secrets.as_ref().map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| LocalObjectReference {
                name: Some(name.to_string()),
            })
            .collect()
    })
}

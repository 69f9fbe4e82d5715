//! Configuration deltas propagated back to the caller.
//!
//! In-cluster execution must agree with the pod that was actually rendered:
//! the resolved pod name, the identity passthroughs, and the dependency
//! lists rewritten for in-container paths all go back into the job
//! configuration as plain key/value pairs.

use std::collections::BTreeMap;

use crate::config::{DriverJobConfig, ResolvedIdentity};
use crate::constants::{
    LOCAL_SCHEME_PREFIX, PROPERTY_APP_ID, PROPERTY_DRIVER_POD_NAME,
    PROPERTY_EXECUTOR_POD_NAME_PREFIX, PROPERTY_FILES, PROPERTY_JARS,
    PROPERTY_MEMORY_OVERHEAD_FACTOR, PROPERTY_SUBMIT_IN_DRIVER,
};

pub fn additional_driver_properties(
    config: &DriverJobConfig,
    identity: &ResolvedIdentity,
    pod_name: &str,
    overhead_factor: f64,
) -> BTreeMap<String, String> {
    let mut props = BTreeMap::from([
        (PROPERTY_DRIVER_POD_NAME.to_string(), pod_name.to_string()),
        (PROPERTY_APP_ID.to_string(), identity.app_id.clone()),
        (
            PROPERTY_EXECUTOR_POD_NAME_PREFIX.to_string(),
            identity.resource_name_prefix.clone(),
        ),
        (PROPERTY_SUBMIT_IN_DRIVER.to_string(), "true".to_string()),
        (
            PROPERTY_MEMORY_OVERHEAD_FACTOR.to_string(),
            overhead_factor.to_string(),
        ),
    ]);

    if !config.jars.is_empty() {
        props.insert(PROPERTY_JARS.to_string(), rewrite_file_list(&config.jars));
    }
    if !config.files.is_empty() {
        props.insert(PROPERTY_FILES.to_string(), rewrite_file_list(&config.files));
    }

    props
}

/// Joins a dependency list back into a single comma-separated value.
/// `local://` entries point at files already inside the container image, so
/// only their bare path is kept; every other entry passes through
/// unchanged.
pub fn rewrite_file_list(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| entry.strip_prefix(LOCAL_SCHEME_PREFIX).unwrap_or(entry))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        &["local:///opt/spark/jar1.jar", "hdfs:///opt/spark/jar2.jar"],
        "/opt/spark/jar1.jar,hdfs:///opt/spark/jar2.jar"
    )]
    #[case(&["s3a://bucket/data.csv"], "s3a://bucket/data.csv")]
    #[case(&["local:///a.jar", "local:///b.jar"], "/a.jar,/b.jar")]
    fn test_rewrite_file_list(#[case] entries: &[&str], #[case] expected: &str) {
        let entries: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        assert_eq!(expected, rewrite_file_list(&entries));
    }

    #[test]
    fn test_properties_without_dependency_lists() {
        let config = DriverJobConfig::default();
        let identity = ResolvedIdentity {
            app_id: "spark-app-1234".to_string(),
            resource_name_prefix: "spark-pi-0815".to_string(),
            pod_name: None,
        };

        let props = additional_driver_properties(&config, &identity, "spark-pi-0815-driver", 0.1);

        assert_eq!("spark-pi-0815-driver", props[PROPERTY_DRIVER_POD_NAME]);
        assert_eq!("spark-app-1234", props[PROPERTY_APP_ID]);
        assert_eq!("spark-pi-0815", props[PROPERTY_EXECUTOR_POD_NAME_PREFIX]);
        assert_eq!("true", props[PROPERTY_SUBMIT_IN_DRIVER]);
        assert_eq!("0.1", props[PROPERTY_MEMORY_OVERHEAD_FACTOR]);
        assert!(!props.contains_key(PROPERTY_JARS));
        assert!(!props.contains_key(PROPERTY_FILES));
    }
}

//! Deterministic names and metadata maps for the driver pod.

use std::collections::BTreeMap;

use crate::config::ResolvedIdentity;
use crate::constants::{DNS_NAME_MAX_LENGTH, LABEL_SPARK_APP_ID, LABEL_SPARK_ROLE, ROLE_DRIVER};

/// Resolves the driver pod name: an explicit override is taken verbatim,
/// otherwise the name derives from the resource name prefix and is cut down
/// to a legal DNS label.
pub fn driver_pod_name(identity: &ResolvedIdentity) -> String {
    match &identity.pod_name {
        Some(name) => name.clone(),
        None => {
            let derived = format!("{}-driver", identity.resource_name_prefix).to_lowercase();
            truncate_to_dns_name(derived)
        }
    }
}

fn truncate_to_dns_name(mut name: String) -> String {
    while name.len() > DNS_NAME_MAX_LENGTH {
        name.pop();
    }
    // Names may not end in a non-alphanumeric character after the cut.
    while name.ends_with(['-', '.']) {
        name.pop();
    }
    name
}

/// Copies the user labels and lays the reserved identity labels over them.
/// A user value under a reserved key loses; the collision is logged, not
/// fatal.
pub fn driver_labels(
    user: &BTreeMap<String, String>,
    app_id: &str,
) -> BTreeMap<String, String> {
    let mut labels = user.clone();
    for (key, value) in [
        (LABEL_SPARK_APP_ID, app_id.to_string()),
        (LABEL_SPARK_ROLE, ROLE_DRIVER.to_string()),
    ] {
        if let Some(previous) = labels.insert(key.to_string(), value) {
            tracing::warn!(
                label = key,
                dropped = previous.as_str(),
                "user-supplied label overridden by reserved value"
            );
        }
    }
    labels
}

/// Annotations carry no reserved keys; the user map passes through as is.
pub fn driver_annotations(user: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    user.clone()
}

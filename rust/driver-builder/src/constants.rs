pub const APP_NAME: &str = "spark-k8s";

pub const CONTAINER_NAME_DRIVER: &str = "spark-kubernetes-driver";

pub const DRIVER_PORT_NAME: &str = "driver-rpc-port";
pub const DRIVER_PORT: i32 = 7078;
pub const BLOCK_MANAGER_PORT_NAME: &str = "blockmanager";
pub const BLOCK_MANAGER_PORT: i32 = 7079;
pub const UI_PORT_NAME: &str = "spark-ui";
pub const UI_PORT: i32 = 4040;

pub const MIN_MEMORY_OVERHEAD_MIB: u64 = 384;
pub const JVM_OVERHEAD_FACTOR: f64 = 0.1;
pub const NON_JVM_OVERHEAD_FACTOR: f64 = 0.4;

pub const DEFAULT_DRIVER_CORES: u32 = 1;
pub const DEFAULT_DRIVER_MEMORY_MIB: u64 = 1024;

pub const PYTHON_RUNNER_MAIN_CLASS: &str = "org.apache.spark.deploy.PythonRunner";
pub const R_RUNNER_MAIN_CLASS: &str = "org.apache.spark.deploy.RRunner";
/// Placeholder resource for JVM applications whose artifact ships inside the image.
pub const SPARK_INTERNAL_RESOURCE: &str = "spark-internal";

pub const ENV_DRIVER_BIND_ADDRESS: &str = "SPARK_DRIVER_BIND_ADDRESS";
/// Resolved by the kubelet once the pod has been scheduled.
pub const DRIVER_BIND_ADDRESS_FIELD_PATH: &str = "status.podIP";

pub const LABEL_SPARK_APP_ID: &str = "spark-app-selector";
pub const LABEL_SPARK_ROLE: &str = "spark-role";
pub const ROLE_DRIVER: &str = "driver";

pub const LOCAL_SCHEME_PREFIX: &str = "local://";

/// Kubernetes object names used in DNS labels may not exceed this length.
pub const DNS_NAME_MAX_LENGTH: usize = 63;

pub const PROPERTY_DRIVER_POD_NAME: &str = "spark.kubernetes.driver.pod.name";
pub const PROPERTY_APP_ID: &str = "spark.app.id";
pub const PROPERTY_EXECUTOR_POD_NAME_PREFIX: &str = "spark.kubernetes.executor.podNamePrefix";
pub const PROPERTY_SUBMIT_IN_DRIVER: &str = "spark.kubernetes.submitInDriver";
pub const PROPERTY_MEMORY_OVERHEAD_FACTOR: &str = "spark.kubernetes.memoryOverheadFactor";
pub const PROPERTY_JARS: &str = "spark.jars";
pub const PROPERTY_FILES: &str = "spark.files";

//! Memory overhead for driver pods.
//!
//! The driver container needs non-heap headroom on top of the requested
//! heap memory. JVM jobs get a factor of 0.1, interpreted (Python/R) jobs
//! 0.4, and either can be overridden explicitly. The overhead never falls
//! below [`MIN_MEMORY_OVERHEAD_MIB`].

use snafu::{ensure, Snafu};

use crate::config::MainAppResource;
use crate::constants::{JVM_OVERHEAD_FACTOR, MIN_MEMORY_OVERHEAD_MIB, NON_JVM_OVERHEAD_FACTOR};

#[derive(Debug, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display("driver memory must be greater than zero"))]
    ZeroDriverMemory,

    #[snafu(display("memory overhead factor [{factor}] must lie in (0, 1)"))]
    OverheadFactorOutOfRange { factor: f64 },
}

/// Effective driver memory after the overhead has been applied.
///
/// Request and limit are identical; the driver gets no burst headroom. The
/// chosen factor is carried along because it is propagated back into the
/// job configuration so executor-side logic applies the identical factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemorySpec {
    pub request_mib: u64,
    pub limit_mib: u64,
    pub overhead_factor: f64,
}

impl MemorySpec {
    pub fn with_overhead(
        requested_mib: u64,
        main_app_resource: &MainAppResource,
        factor_override: Option<f64>,
    ) -> Result<MemorySpec, Error> {
        ensure!(requested_mib > 0, ZeroDriverMemorySnafu);

        if let Some(factor) = factor_override {
            ensure!(
                factor > 0.0 && factor < 1.0,
                OverheadFactorOutOfRangeSnafu { factor }
            );
        }
        let factor = factor_override.unwrap_or(if main_app_resource.is_jvm() {
            JVM_OVERHEAD_FACTOR
        } else {
            NON_JVM_OVERHEAD_FACTOR
        });

        let overhead = ((requested_mib as f64 * factor).round() as u64).max(MIN_MEMORY_OVERHEAD_MIB);
        let total = requested_mib + overhead;
        tracing::debug!(requested_mib, factor, overhead, total, "applied driver memory overhead");

        Ok(MemorySpec {
            request_mib: total,
            limit_mib: total,
            overhead_factor: factor,
        })
    }
}

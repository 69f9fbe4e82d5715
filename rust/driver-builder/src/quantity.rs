//! Rendering and parsing of the resource quantities this crate emits.
//!
//! Memory is always rendered in whole mebibytes (`Mi`), CPU as a bare core
//! count. All arithmetic stays in integers.

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use snafu::{OptionExt, Snafu};

#[derive(Debug, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display("memory quantity must be greater than zero"))]
    ZeroMemory,

    #[snafu(display("cpu quantity must be greater than zero"))]
    ZeroCpu,

    #[snafu(display("cannot parse memory quantity [{quantity}]"))]
    UnparsableMemory { quantity: String },
}

pub fn memory_mi(mib: u64) -> Result<Quantity, Error> {
    if mib == 0 {
        return ZeroMemorySnafu.fail();
    }
    Ok(Quantity(format!("{mib}Mi")))
}

pub fn cpu_cores(cores: u32) -> Result<Quantity, Error> {
    if cores == 0 {
        return ZeroCpuSnafu.fail();
    }
    Ok(Quantity(cores.to_string()))
}

/// Scales a memory quantity down to whole mebibytes, flooring.
///
/// Accepts the binary suffixes `Ki`/`Mi`/`Gi`, their JVM-style lowercase
/// forms `k`/`m`/`g`, and bare byte counts.
pub fn parse_memory_mib(quantity: &Quantity) -> Result<u64, Error> {
    let raw = quantity.0.trim();
    let unit_start = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(unit_start);
    let value = digits
        .parse::<u64>()
        .ok()
        .context(UnparsableMemorySnafu { quantity: raw })?;

    let mib = match unit {
        "" => value / (1024 * 1024),
        "Ki" | "k" => value / 1024,
        "Mi" | "m" => value,
        "Gi" | "g" => value * 1024,
        _ => return UnparsableMemorySnafu { quantity: raw }.fail(),
    };
    Ok(mib)
}

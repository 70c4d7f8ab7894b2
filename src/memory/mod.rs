//! Memory accounting over GPU resource metadata.
//!
//! Pure computation: nothing here touches resource contents or issues GPU
//! work, so reports can be computed from any thread without coordination.

pub mod report;
pub mod usage;

pub use report::{compute_report, MemoryUsageEntry, MemoryUsageReport};
pub use usage::{
    mip_chain_size, mip_chain_size_3d, resource_size_bytes, texture_size_bytes, UsageConfig,
};

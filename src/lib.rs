//! GPU resource inspection core on wgpu: memory accounting over live buffer
//! and texture metadata, plus typed, paged introspection of structured buffer
//! contents via synchronous readback.
//!
//! Two cooperating pieces:
//! - [`memory`] computes labeled, sorted memory usage reports from resource
//!   descriptors ([`resource::ResourceDesc`]), without touching GPU state.
//! - [`inspect`] downloads one buffer at a time into a [`BufferSnapshot`] and
//!   serves paged, per-field decoded views of its records.
//!
//! Resources stay owned by the host application; this crate only reads size
//! metadata and, on demand, copies buffer contents to host memory.

pub mod error;
pub mod gpu;
pub mod inspect;
pub mod memory;
pub mod registry;
pub mod resource;
pub mod structured;

pub use error::{InspectError, InspectResult};
pub use inspect::{
    BufferInspector, BufferSnapshot, DecodedField, DecodedValue, FieldKind, PageView,
    RecordLayout, ScalarKind,
};
pub use memory::{compute_report, MemoryUsageEntry, MemoryUsageReport, UsageConfig};
pub use registry::{global_registry, DebugObject, DebugRegistry};
pub use resource::{BufferDesc, ResourceDesc, TextureDesc, TextureKind};
pub use structured::StructuredBuffer;

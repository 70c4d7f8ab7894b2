//! Buffer introspection: download, snapshot, paging, and record decoding.

pub mod inspector;
pub mod layout;
pub mod readback;
pub mod snapshot;

pub use inspector::{BufferInspector, PageView, DEFAULT_PAGE_SIZE};
pub use layout::{FieldKind, RecordField, RecordLayout, ScalarKind};
pub use readback::read_buffer_to_host;
pub use snapshot::{BufferSnapshot, DecodedField, DecodedValue};

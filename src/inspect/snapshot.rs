//! Host-side buffer snapshots and record decoding.
//!
//! A snapshot owns a verbatim byte copy of one buffer at one point in time.
//! It goes stale the moment the GPU mutates the source buffer; staleness is
//! never re-validated here, the caller reloads to refresh.

use crate::error::{InspectError, InspectResult};
use crate::inspect::layout::{FieldKind, RecordLayout, ScalarKind};
use std::fmt;

/// A decoded field value, tagged with its semantic kind for display.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
    IVec2(glam::IVec2),
    IVec3(glam::IVec3),
    IVec4(glam::IVec4),
    UVec2(glam::UVec2),
    UVec3(glam::UVec3),
    UVec4(glam::UVec4),
    Vec2(glam::Vec2),
    Vec3(glam::Vec3),
    Vec4(glam::Vec4),
    DVec2(glam::DVec2),
    DVec3(glam::DVec3),
    DVec4(glam::DVec4),
    /// Hex fallback for opaque bytes.
    Opaque(String),
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::I32(v) => write!(f, "{}", v),
            DecodedValue::U32(v) => write!(f, "{}", v),
            DecodedValue::F32(v) => write!(f, "{}", v),
            DecodedValue::F64(v) => write!(f, "{}", v),
            DecodedValue::IVec2(v) => write!(f, "{}", v),
            DecodedValue::IVec3(v) => write!(f, "{}", v),
            DecodedValue::IVec4(v) => write!(f, "{}", v),
            DecodedValue::UVec2(v) => write!(f, "{}", v),
            DecodedValue::UVec3(v) => write!(f, "{}", v),
            DecodedValue::UVec4(v) => write!(f, "{}", v),
            DecodedValue::Vec2(v) => write!(f, "{}", v),
            DecodedValue::Vec3(v) => write!(f, "{}", v),
            DecodedValue::Vec4(v) => write!(f, "{}", v),
            DecodedValue::DVec2(v) => write!(f, "{}", v),
            DecodedValue::DVec3(v) => write!(f, "{}", v),
            DecodedValue::DVec4(v) => write!(f, "{}", v),
            DecodedValue::Opaque(s) => f.write_str(s),
        }
    }
}

/// One decoded sub-field of a record. The name is empty for anonymous
/// scalar layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedField {
    pub name: String,
    pub value: DecodedValue,
}

/// Host-side copy of a buffer's records, exclusively owned by the inspector
/// instance that loaded it.
#[derive(Debug)]
pub struct BufferSnapshot {
    data: Vec<u8>,
    layout: RecordLayout,
    element_count: usize,
}

impl BufferSnapshot {
    /// Wrap already-downloaded bytes. Fails with
    /// [`InspectError::LayoutMismatch`] when the layout's element size does
    /// not evenly divide the byte length.
    pub fn from_bytes(data: Vec<u8>, layout: RecordLayout) -> InspectResult<Self> {
        let record_size = layout.byte_size();
        if record_size == 0 || data.len() as u64 % record_size != 0 {
            return Err(InspectError::LayoutMismatch {
                buffer_size: data.len() as u64,
                record_size,
            });
        }
        let element_count = (data.len() as u64 / record_size) as usize;
        Ok(Self {
            data,
            layout,
            element_count,
        })
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    /// Raw bytes of one record. Panics on an out-of-range index; callers
    /// index within `element_count`.
    pub fn record_bytes(&self, index: usize) -> &[u8] {
        let size = self.layout.byte_size() as usize;
        &self.data[index * size..(index + 1) * size]
    }

    /// Decode one record into its named sub-fields, in declared order.
    pub fn decode_record(&self, index: usize) -> Vec<DecodedField> {
        let bytes = self.record_bytes(index);
        let mut offset = 0usize;
        self.layout
            .fields()
            .iter()
            .map(|field| {
                let size = field.kind.byte_size();
                let value = decode_value(&bytes[offset..offset + size], field.kind);
                offset += size;
                DecodedField {
                    name: field.name.clone(),
                    value,
                }
            })
            .collect()
    }
}

fn decode_value(bytes: &[u8], kind: FieldKind) -> DecodedValue {
    use DecodedValue as V;
    use ScalarKind::*;
    match kind {
        FieldKind::Scalar(I32) => V::I32(bytemuck::pod_read_unaligned(bytes)),
        FieldKind::Scalar(U32) => V::U32(bytemuck::pod_read_unaligned(bytes)),
        FieldKind::Scalar(F32) => V::F32(bytemuck::pod_read_unaligned(bytes)),
        FieldKind::Scalar(F64) => V::F64(bytemuck::pod_read_unaligned(bytes)),
        FieldKind::Vec2(I32) => V::IVec2(glam::IVec2::from_array(read_array(bytes))),
        FieldKind::Vec3(I32) => V::IVec3(glam::IVec3::from_array(read_array(bytes))),
        FieldKind::Vec4(I32) => V::IVec4(glam::IVec4::from_array(read_array(bytes))),
        FieldKind::Vec2(U32) => V::UVec2(glam::UVec2::from_array(read_array(bytes))),
        FieldKind::Vec3(U32) => V::UVec3(glam::UVec3::from_array(read_array(bytes))),
        FieldKind::Vec4(U32) => V::UVec4(glam::UVec4::from_array(read_array(bytes))),
        FieldKind::Vec2(F32) => V::Vec2(glam::Vec2::from_array(read_array(bytes))),
        FieldKind::Vec3(F32) => V::Vec3(glam::Vec3::from_array(read_array(bytes))),
        FieldKind::Vec4(F32) => V::Vec4(glam::Vec4::from_array(read_array(bytes))),
        FieldKind::Vec2(F64) => V::DVec2(glam::DVec2::from_array(read_array(bytes))),
        FieldKind::Vec3(F64) => V::DVec3(glam::DVec3::from_array(read_array(bytes))),
        FieldKind::Vec4(F64) => V::DVec4(glam::DVec4::from_array(read_array(bytes))),
        FieldKind::Opaque(_) => V::Opaque(hex_string(bytes)),
    }
}

fn read_array<T: bytemuck::Pod, const N: usize>(bytes: &[u8]) -> [T; N] {
    let size = std::mem::size_of::<T>();
    std::array::from_fn(|i| bytemuck::pod_read_unaligned(&bytes[i * size..(i + 1) * size]))
}

fn hex_string(bytes: &[u8]) -> String {
    use fmt::Write;
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for b in bytes {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f32_bytes(values: &[f32]) -> Vec<u8> {
        bytemuck::cast_slice(values).to_vec()
    }

    #[test]
    fn from_bytes_rejects_uneven_layouts() {
        let layout = RecordLayout::new().field("position", FieldKind::Vec3(ScalarKind::F32));
        let err = BufferSnapshot::from_bytes(vec![0u8; 20], layout).unwrap_err();
        assert!(matches!(
            err,
            InspectError::LayoutMismatch {
                buffer_size: 20,
                record_size: 12
            }
        ));
    }

    #[test]
    fn from_bytes_rejects_empty_layouts() {
        let err = BufferSnapshot::from_bytes(vec![0u8; 16], RecordLayout::new()).unwrap_err();
        assert!(matches!(err, InspectError::LayoutMismatch { .. }));
    }

    #[test]
    fn decode_three_float_fields_in_declared_order() {
        let layout = RecordLayout::new()
            .field("x", FieldKind::Scalar(ScalarKind::F32))
            .field("y", FieldKind::Scalar(ScalarKind::F32))
            .field("z", FieldKind::Scalar(ScalarKind::F32));
        let snapshot =
            BufferSnapshot::from_bytes(f32_bytes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), layout)
                .unwrap();

        assert_eq!(snapshot.element_count(), 2);
        let fields = snapshot.decode_record(1);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name, "x");
        assert_eq!(fields[1].name, "y");
        assert_eq!(fields[2].name, "z");
        assert_eq!(fields[0].value, DecodedValue::F32(4.0));
        assert_eq!(fields[1].value, DecodedValue::F32(5.0));
        assert_eq!(fields[2].value, DecodedValue::F32(6.0));
    }

    #[test]
    fn decode_vector_and_mixed_fields() {
        let layout = RecordLayout::new()
            .field("position", FieldKind::Vec3(ScalarKind::F32))
            .field("id", FieldKind::Scalar(ScalarKind::U32));
        let mut bytes = f32_bytes(&[0.5, -1.5, 2.0]);
        bytes.extend_from_slice(&7u32.to_ne_bytes());
        let snapshot = BufferSnapshot::from_bytes(bytes, layout).unwrap();

        let fields = snapshot.decode_record(0);
        assert_eq!(
            fields[0].value,
            DecodedValue::Vec3(glam::Vec3::new(0.5, -1.5, 2.0))
        );
        assert_eq!(fields[1].value, DecodedValue::U32(7));
    }

    #[test]
    fn anonymous_scalar_decodes_to_one_unnamed_field() {
        let snapshot = BufferSnapshot::from_bytes(
            f32_bytes(&[42.0]),
            RecordLayout::scalar(ScalarKind::F32),
        )
        .unwrap();
        let fields = snapshot.decode_record(0);
        assert_eq!(fields.len(), 1);
        assert!(fields[0].name.is_empty());
        assert_eq!(fields[0].value, DecodedValue::F32(42.0));
    }

    #[test]
    fn opaque_fields_fall_back_to_hex() {
        let layout = RecordLayout::new().field("blob", FieldKind::Opaque(4));
        let snapshot =
            BufferSnapshot::from_bytes(vec![0xde, 0xad, 0xbe, 0xef], layout).unwrap();
        let fields = snapshot.decode_record(0);
        assert_eq!(fields[0].value, DecodedValue::Opaque("0xdeadbeef".into()));
        assert_eq!(fields[0].value.to_string(), "0xdeadbeef");
    }
}

//! Declared record layouts for buffer decoding.
//!
//! Layouts are schema-first: the caller states the element type up front as a
//! fixed enumeration of field kinds, instead of the inspector probing types
//! at run time.

/// Numeric base type of a decoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    I32,
    U32,
    F32,
    F64,
}

impl ScalarKind {
    pub fn byte_size(self) -> usize {
        match self {
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 => 4,
            ScalarKind::F64 => 8,
        }
    }
}

/// Semantic kind of one record sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Vec2(ScalarKind),
    Vec3(ScalarKind),
    Vec4(ScalarKind),
    /// `n` undecoded bytes, displayed as a hex fallback.
    Opaque(usize),
}

impl FieldKind {
    pub fn byte_size(self) -> usize {
        match self {
            FieldKind::Scalar(s) => s.byte_size(),
            FieldKind::Vec2(s) => 2 * s.byte_size(),
            FieldKind::Vec3(s) => 3 * s.byte_size(),
            FieldKind::Vec4(s) => 4 * s.byte_size(),
            FieldKind::Opaque(n) => n,
        }
    }
}

/// One named sub-field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub name: String,
    pub kind: FieldKind,
}

/// Fixed-size element layout: an ordered sequence of named sub-fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    fields: Vec<RecordField>,
}

impl RecordLayout {
    /// Start an empty layout; chain [`RecordLayout::field`] calls to fill it.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// A primitive element type, treated as a single anonymous scalar field.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self {
            fields: vec![RecordField {
                name: String::new(),
                kind: FieldKind::Scalar(kind),
            }],
        }
    }

    pub fn field(mut self, name: &str, kind: FieldKind) -> Self {
        self.fields.push(RecordField {
            name: name.to_string(),
            kind,
        });
        self
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    /// Declared element size: the sum of all field sizes.
    pub fn byte_size(&self) -> u64 {
        self.fields.iter().map(|f| f.kind.byte_size() as u64).sum()
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self::new()
    }
}

//! Resource descriptors for memory accounting.
//!
//! The accountant never touches resource contents, only size metadata, so the
//! boundary to the host renderer is a small tagged union built once per
//! resource instead of repeated runtime type checks.

/// Shape of a texture resource as it affects memory accounting.
///
/// wgpu does not record whether a 2D array texture is bound as a cubemap, so
/// cube-shaped kinds must be declared by the caller (see
/// [`TextureDesc::with_kind`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    D2,
    D2Array,
    Cube,
    CubeArray,
    D3,
}

/// Size metadata for a fixed-stride GPU buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDesc {
    /// Bytes per element. Must be > 0.
    pub stride: u32,
    /// Number of elements.
    pub element_count: u32,
}

/// Size metadata for a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDesc {
    pub width: u32,
    pub height: u32,
    /// Depth for 3D textures, layer count for arrays (cube count for
    /// cube arrays), 1 otherwise.
    pub depth_or_array_layers: u32,
    pub mip_count: u32,
    pub sample_count: u32,
    pub format: wgpu::TextureFormat,
    pub kind: TextureKind,
}

impl TextureDesc {
    /// Override the inferred kind, e.g. to mark an array texture as a cubemap.
    pub fn with_kind(mut self, kind: TextureKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A labeled-resource handle as fed into the memory accountant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceDesc {
    Buffer(BufferDesc),
    Texture(TextureDesc),
}

impl ResourceDesc {
    /// Describe a fixed-stride buffer directly.
    pub fn buffer(stride: u32, element_count: u32) -> Self {
        debug_assert!(stride > 0, "buffer stride must be > 0");
        ResourceDesc::Buffer(BufferDesc {
            stride,
            element_count,
        })
    }

    /// Describe a live buffer. wgpu buffers do not carry a stride, so the
    /// caller declares it; the element count is derived from the buffer size.
    pub fn from_buffer(buffer: &wgpu::Buffer, stride: u32) -> Self {
        debug_assert!(stride > 0, "buffer stride must be > 0");
        ResourceDesc::Buffer(BufferDesc {
            stride,
            element_count: (buffer.size() / stride as u64) as u32,
        })
    }

    /// Describe a live texture. Layered 2D textures are reported as
    /// [`TextureKind::D2Array`]; use [`TextureDesc::with_kind`] for cubemaps.
    pub fn from_texture(texture: &wgpu::Texture) -> Self {
        let layers = texture.depth_or_array_layers();
        let kind = match texture.dimension() {
            wgpu::TextureDimension::D3 => TextureKind::D3,
            _ if layers > 1 => TextureKind::D2Array,
            _ => TextureKind::D2,
        };
        ResourceDesc::Texture(TextureDesc {
            width: texture.width(),
            height: texture.height(),
            depth_or_array_layers: layers,
            mip_count: texture.mip_level_count(),
            sample_count: texture.sample_count(),
            format: texture.format(),
            kind,
        })
    }
}

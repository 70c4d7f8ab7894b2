//! Per-resource byte footprint computation.
//!
//! Buffer sizes are exact (`stride * element_count`); texture sizes sum the
//! full mip chain with format-accurate bytes per block. For compressed
//! formats this is the real block-aligned footprint, not an uncompressed
//! approximation.

use crate::resource::{ResourceDesc, TextureDesc, TextureKind};
use wgpu::TextureFormat;

/// Policy knobs for memory accounting.
#[derive(Debug, Clone)]
pub struct UsageConfig {
    /// Count one extra sample per multisampled texture for the resolve
    /// target allocated alongside the MSAA surface. Whether that surface
    /// always exists is host-specific, so it is a policy rather than a rule.
    pub count_resolve_target: bool,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            count_resolve_target: true,
        }
    }
}

/// Compute the byte footprint of one resource. All arithmetic is 64-bit.
pub fn resource_size_bytes(desc: &ResourceDesc, config: &UsageConfig) -> u64 {
    match desc {
        ResourceDesc::Buffer(b) => b.stride as u64 * b.element_count as u64,
        ResourceDesc::Texture(t) => texture_size_bytes(t, config),
    }
}

/// Compute the byte footprint of a texture, mip chain included.
pub fn texture_size_bytes(desc: &TextureDesc, config: &UsageConfig) -> u64 {
    let chain = match desc.kind {
        TextureKind::D3 => mip_chain_size_3d(
            desc.width,
            desc.height,
            desc.depth_or_array_layers,
            desc.format,
            desc.mip_count,
        ),
        _ => mip_chain_size(desc.width, desc.height, desc.format, desc.mip_count),
    };

    let faces: u64 = match desc.kind {
        TextureKind::Cube | TextureKind::CubeArray => 6,
        _ => 1,
    };
    // For 3D textures depth is already folded into the chain itself.
    let layers: u64 = match desc.kind {
        TextureKind::D2Array | TextureKind::CubeArray => desc.depth_or_array_layers.max(1) as u64,
        _ => 1,
    };
    let samples: u64 = if desc.sample_count > 1 {
        if config.count_resolve_target {
            desc.sample_count as u64 + 1
        } else {
            desc.sample_count as u64
        }
    } else {
        1
    };

    chain * faces * layers * samples
}

/// Sum the byte size of mip levels `0..mip_count` of a 2D-shaped texture,
/// halving width and height per level (floor, minimum 1).
pub fn mip_chain_size(width: u32, height: u32, format: TextureFormat, mip_count: u32) -> u64 {
    let (block_w, block_h, bytes_per_block) = format_block_info(format);
    let mut total = 0u64;
    let mut w = width;
    let mut h = height;
    for _ in 0..mip_count {
        total += level_size(w, h, block_w, block_h, bytes_per_block);
        w = (w / 2).max(1);
        h = (h / 2).max(1);
    }
    total
}

/// 3D variant: depth is halved alongside width and height at every level.
pub fn mip_chain_size_3d(
    width: u32,
    height: u32,
    depth: u32,
    format: TextureFormat,
    mip_count: u32,
) -> u64 {
    let (block_w, block_h, bytes_per_block) = format_block_info(format);
    let mut total = 0u64;
    let mut w = width;
    let mut h = height;
    let mut d = depth;
    for _ in 0..mip_count {
        total += level_size(w, h, block_w, block_h, bytes_per_block) * d as u64;
        w = (w / 2).max(1);
        h = (h / 2).max(1);
        d = (d / 2).max(1);
    }
    total
}

fn level_size(width: u32, height: u32, block_w: u32, block_h: u32, bytes_per_block: u64) -> u64 {
    let blocks_x = ((width + block_w - 1) / block_w) as u64;
    let blocks_y = ((height + block_h - 1) / block_h) as u64;
    blocks_x * blocks_y * bytes_per_block
}

/// Block dimensions and bytes per block for a texture format. Uncompressed
/// formats are 1x1 blocks with their bytes-per-pixel.
fn format_block_info(format: TextureFormat) -> (u32, u32, u64) {
    match format {
        // 8-bit formats
        TextureFormat::R8Unorm
        | TextureFormat::R8Snorm
        | TextureFormat::R8Uint
        | TextureFormat::R8Sint => (1, 1, 1),

        // 16-bit formats
        TextureFormat::Rg8Unorm
        | TextureFormat::Rg8Snorm
        | TextureFormat::Rg8Uint
        | TextureFormat::Rg8Sint => (1, 1, 2),
        TextureFormat::R16Uint | TextureFormat::R16Sint | TextureFormat::R16Float => (1, 1, 2),
        TextureFormat::Depth16Unorm => (1, 1, 2),

        // 32-bit formats
        TextureFormat::Rgba8Unorm
        | TextureFormat::Rgba8UnormSrgb
        | TextureFormat::Rgba8Snorm
        | TextureFormat::Rgba8Uint
        | TextureFormat::Rgba8Sint => (1, 1, 4),
        TextureFormat::Bgra8Unorm | TextureFormat::Bgra8UnormSrgb => (1, 1, 4),
        TextureFormat::Rgb10a2Unorm | TextureFormat::Rgb10a2Uint => (1, 1, 4),
        TextureFormat::Rg11b10Float => (1, 1, 4),
        TextureFormat::Rg16Uint | TextureFormat::Rg16Sint | TextureFormat::Rg16Float => (1, 1, 4),
        TextureFormat::R32Uint | TextureFormat::R32Sint | TextureFormat::R32Float => (1, 1, 4),
        TextureFormat::Depth32Float => (1, 1, 4),
        TextureFormat::Depth24Plus => (1, 1, 4), // Usually 32-bit internally
        TextureFormat::Depth24PlusStencil8 => (1, 1, 4),

        // 64-bit formats
        TextureFormat::Rgba16Uint | TextureFormat::Rgba16Sint | TextureFormat::Rgba16Float => {
            (1, 1, 8)
        }
        TextureFormat::Rg32Uint | TextureFormat::Rg32Sint | TextureFormat::Rg32Float => (1, 1, 8),
        TextureFormat::Depth32FloatStencil8 => (1, 1, 8),

        // 128-bit formats
        TextureFormat::Rgba32Uint | TextureFormat::Rgba32Sint | TextureFormat::Rgba32Float => {
            (1, 1, 16)
        }

        // BC compression, 4x4 blocks
        TextureFormat::Bc1RgbaUnorm | TextureFormat::Bc1RgbaUnormSrgb => (4, 4, 8),
        TextureFormat::Bc2RgbaUnorm | TextureFormat::Bc2RgbaUnormSrgb => (4, 4, 16),
        TextureFormat::Bc3RgbaUnorm | TextureFormat::Bc3RgbaUnormSrgb => (4, 4, 16),
        TextureFormat::Bc4RUnorm | TextureFormat::Bc4RSnorm => (4, 4, 8),
        TextureFormat::Bc5RgUnorm | TextureFormat::Bc5RgSnorm => (4, 4, 16),
        TextureFormat::Bc6hRgbUfloat | TextureFormat::Bc6hRgbFloat => (4, 4, 16),
        TextureFormat::Bc7RgbaUnorm | TextureFormat::Bc7RgbaUnormSrgb => (4, 4, 16),

        // ETC2/EAC compression, 4x4 blocks
        TextureFormat::Etc2Rgb8Unorm | TextureFormat::Etc2Rgb8UnormSrgb => (4, 4, 8),
        TextureFormat::Etc2Rgb8A1Unorm | TextureFormat::Etc2Rgb8A1UnormSrgb => (4, 4, 8),
        TextureFormat::Etc2Rgba8Unorm | TextureFormat::Etc2Rgba8UnormSrgb => (4, 4, 16),
        TextureFormat::EacR11Unorm | TextureFormat::EacR11Snorm => (4, 4, 8),
        TextureFormat::EacRg11Unorm | TextureFormat::EacRg11Snorm => (4, 4, 16),

        // ASTC block size is carried on the format itself
        TextureFormat::Astc { block, .. } => {
            let (w, h) = astc_block_dimensions(block);
            (w, h, 16)
        }

        // Conservative estimate for formats not explicitly handled, to avoid
        // underestimating usage
        _ => (1, 1, 4),
    }
}

fn astc_block_dimensions(block: wgpu::AstcBlock) -> (u32, u32) {
    use wgpu::AstcBlock::*;
    match block {
        B4x4 => (4, 4),
        B5x4 => (5, 4),
        B5x5 => (5, 5),
        B6x5 => (6, 5),
        B6x6 => (6, 6),
        B8x5 => (8, 5),
        B8x6 => (8, 6),
        B8x8 => (8, 8),
        B10x5 => (10, 5),
        B10x6 => (10, 6),
        B10x8 => (10, 8),
        B10x10 => (10, 10),
        B12x10 => (12, 10),
        B12x12 => (12, 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceDesc;

    fn tex(width: u32, height: u32, mips: u32, kind: TextureKind) -> TextureDesc {
        TextureDesc {
            width,
            height,
            depth_or_array_layers: 1,
            mip_count: mips,
            sample_count: 1,
            format: TextureFormat::Rgba8Unorm,
            kind,
        }
    }

    #[test]
    fn buffer_size_is_stride_times_count() {
        let config = UsageConfig::default();
        let desc = ResourceDesc::buffer(16, 1000);
        assert_eq!(resource_size_bytes(&desc, &config), 16_000);

        // 64-bit arithmetic: stays exact past 2^31 bytes
        let huge = ResourceDesc::buffer(256, 100_000_000);
        assert_eq!(resource_size_bytes(&huge, &config), 25_600_000_000);
    }

    #[test]
    fn single_mip_2d_texture() {
        let config = UsageConfig::default();
        let desc = tex(256, 256, 1, TextureKind::D2);
        assert_eq!(texture_size_bytes(&desc, &config), 256 * 256 * 4);
    }

    #[test]
    fn cube_texture_is_six_times_2d() {
        let config = UsageConfig::default();
        let flat = texture_size_bytes(&tex(256, 256, 4, TextureKind::D2), &config);
        let cube = texture_size_bytes(&tex(256, 256, 4, TextureKind::Cube), &config);
        assert_eq!(cube, flat * 6);
    }

    #[test]
    fn mip_chain_halves_each_level() {
        // 4x4, 3 mips: 16 + 4 + 1 texels
        assert_eq!(
            mip_chain_size(4, 4, TextureFormat::Rgba8Unorm, 3),
            (16 + 4 + 1) * 4
        );
        // Non-square: 4x2 -> 2x1 -> 1x1
        assert_eq!(
            mip_chain_size(4, 2, TextureFormat::Rgba8Unorm, 3),
            (8 + 2 + 1) * 4
        );
    }

    #[test]
    fn mip_chain_3d_halves_depth() {
        // 4x4x4 -> 2x2x2 -> 1x1x1
        assert_eq!(
            mip_chain_size_3d(4, 4, 4, TextureFormat::R8Unorm, 3),
            64 + 8 + 1
        );
    }

    #[test]
    fn volume_depth_is_not_multiplied_again() {
        let config = UsageConfig::default();
        let desc = TextureDesc {
            depth_or_array_layers: 8,
            ..tex(16, 16, 1, TextureKind::D3)
        };
        assert_eq!(texture_size_bytes(&desc, &config), 16 * 16 * 8 * 4);
    }

    #[test]
    fn array_layers_multiply_the_chain() {
        let config = UsageConfig::default();
        let desc = TextureDesc {
            depth_or_array_layers: 5,
            ..tex(64, 64, 1, TextureKind::D2Array)
        };
        assert_eq!(texture_size_bytes(&desc, &config), 64 * 64 * 4 * 5);

        let cubes = TextureDesc {
            depth_or_array_layers: 3,
            ..tex(64, 64, 1, TextureKind::CubeArray)
        };
        assert_eq!(texture_size_bytes(&cubes, &config), 64 * 64 * 4 * 6 * 3);
    }

    #[test]
    fn msaa_resolve_policy() {
        let desc = TextureDesc {
            sample_count: 4,
            ..tex(128, 128, 1, TextureKind::D2)
        };
        let base = 128 * 128 * 4u64;

        let with_resolve = UsageConfig {
            count_resolve_target: true,
        };
        assert_eq!(texture_size_bytes(&desc, &with_resolve), base * 5);

        let without = UsageConfig {
            count_resolve_target: false,
        };
        assert_eq!(texture_size_bytes(&desc, &without), base * 4);
    }

    #[test]
    fn compressed_formats_use_block_footprint() {
        // 16x16 BC1: 4x4 blocks of 8 bytes
        assert_eq!(
            mip_chain_size(16, 16, TextureFormat::Bc1RgbaUnorm, 1),
            4 * 4 * 8
        );
        // Non-aligned 17x17 rounds up to 5x5 blocks
        assert_eq!(
            mip_chain_size(17, 17, TextureFormat::Bc1RgbaUnorm, 1),
            5 * 5 * 8
        );
        // Block rounding applies per mip level: 8x8 BC7 with 2 mips
        assert_eq!(
            mip_chain_size(8, 8, TextureFormat::Bc7RgbaUnorm, 2),
            (2 * 2 + 1) * 16
        );
    }
}

//! Demo: allocate a few GPU resources, print their memory report, then page
//! through a structured buffer's decoded contents.

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use gpu_inspect::{
    global_registry, BufferInspector, DebugObject, FieldKind, RecordLayout, ResourceDesc,
    ScalarKind, StructuredBuffer, UsageConfig,
};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Particle {
    position: [f32; 3],
    age: f32,
}

fn main() -> Result<()> {
    env_logger::init();

    let ctx = gpu_inspect::gpu::try_ctx().context("no compatible GPU adapter")?;
    let device = &ctx.device;
    let queue = &ctx.queue;

    let particles: Vec<Particle> = (0..250)
        .map(|i| Particle {
            position: [i as f32, i as f32 * 2.0, 0.0],
            age: i as f32 * 0.1,
        })
        .collect();
    let particle_buffer = StructuredBuffer::with_data(device, "particles", &particles);
    let velocity_buffer = StructuredBuffer::<[f32; 4]>::new(device, "velocities", 250);

    let shadow_map = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("shadow-map"),
        size: wgpu::Extent3d {
            width: 1024,
            height: 1024,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    global_registry().track(
        DebugObject::new("particle-system")
            .resource("particles", particle_buffer.desc())
            .resource("velocities", velocity_buffer.desc())
            .resource("shadow_map", ResourceDesc::from_texture(&shadow_map)),
    );

    let config = UsageConfig::default();
    let report = global_registry()
        .report("particle-system", &config)
        .expect("object was just tracked");
    println!("GPU memory usage:\n{}", report);

    let layout = RecordLayout::new()
        .field("position", FieldKind::Vec3(ScalarKind::F32))
        .field("age", FieldKind::Scalar(ScalarKind::F32));
    let mut inspector = BufferInspector::new();
    inspector.load(device, queue, particle_buffer.buffer(), layout)?;

    let page = inspector.current_page()?;
    println!(
        "page {}/{} ({} records):",
        page.page_index + 1,
        inspector.max_page()? + 1,
        page.len()
    );
    for (index, fields) in page.records().take(5) {
        let rendered: Vec<String> = fields
            .iter()
            .map(|f| format!("{}: {}", f.name, f.value))
            .collect();
        println!("  [{}] {}", index, rendered.join(", "));
    }

    Ok(())
}

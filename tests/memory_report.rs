// tests/memory_report.rs
// Descriptor construction from live resources and registry-driven reports

use gpu_inspect::{
    global_registry, gpu, DebugObject, ResourceDesc, StructuredBuffer, TextureKind, UsageConfig,
};

#[test]
fn descriptors_from_live_resources() {
    let Some(ctx) = gpu::try_ctx() else {
        eprintln!("skipping: no GPU adapter available");
        return;
    };

    let buffer = StructuredBuffer::<[f32; 4]>::new(&ctx.device, "velocities", 1000);
    assert_eq!(buffer.desc(), ResourceDesc::buffer(16, 1000));
    assert_eq!(
        ResourceDesc::from_buffer(buffer.buffer(), 16),
        ResourceDesc::buffer(16, 1000)
    );

    let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("albedo"),
        size: wgpu::Extent3d {
            width: 256,
            height: 256,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let ResourceDesc::Texture(desc) = ResourceDesc::from_texture(&texture) else {
        panic!("expected a texture descriptor");
    };
    assert_eq!(desc.width, 256);
    assert_eq!(desc.mip_count, 1);
    assert_eq!(desc.format, wgpu::TextureFormat::Rgba8Unorm);
    assert_eq!(desc.kind, TextureKind::D2);
}

#[test]
fn registry_report_end_to_end() {
    let Some(ctx) = gpu::try_ctx() else {
        eprintln!("skipping: no GPU adapter available");
        return;
    };

    let positions = StructuredBuffer::<[f32; 4]>::new(&ctx.device, "positions", 1000);
    let indices = StructuredBuffer::<u32>::new(&ctx.device, "indices", 500);

    global_registry().track(
        DebugObject::new("mesh")
            .resource("positions", positions.desc())
            .resource("indices", indices.desc()),
    );

    let config = UsageConfig::default();
    let report = global_registry()
        .report("mesh", &config)
        .expect("object was just tracked");
    assert_eq!(report.total_bytes(), 16 * 1000 + 4 * 500);

    let rows = report.rows();
    assert_eq!(rows[0], ("Total".into(), "0.02 MB (100.00 %)".into()));
    assert_eq!(rows[1], ("positions".into(), "0.02 MB (88.89 %)".into()));
    assert_eq!(rows[2], ("indices".into(), "0.00 MB (11.11 %)".into()));

    global_registry().untrack("mesh");
    assert!(global_registry().report("mesh", &config).is_none());
}

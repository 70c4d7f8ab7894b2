use once_cell::sync::OnceCell;

pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub adapter: wgpu::Adapter,
}

static CTX: OnceCell<Option<GpuContext>> = OnceCell::new();

/// Lazily acquire the shared device/queue. Returns `None` when no compatible
/// adapter exists (e.g. headless CI), so callers can skip GPU work.
pub fn try_ctx() -> Option<&'static GpuContext> {
    CTX.get_or_init(init_context).as_ref()
}

fn init_context() -> Option<GpuContext> {
    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: None,
        force_fallback_adapter: false,
    }))?;

    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            label: Some("gpu-inspect-device"),
        },
        None,
    ))
    .ok()?;

    log::info!("acquired adapter: {}", adapter.get_info().name);
    Some(GpuContext {
        device,
        queue,
        adapter,
    })
}

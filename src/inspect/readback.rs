// src/inspect/readback.rs
// Synchronous whole-buffer download into host memory through a staging buffer
// RELEVANT FILES: src/inspect/inspector.rs, src/inspect/snapshot.rs, src/gpu.rs

use crate::error::{InspectError, InspectResult};
use futures_intrusive::channel::shared::oneshot_channel;

/// Copy the full contents of `buffer` into host memory, blocking until the
/// copy completes. The buffer must carry `COPY_SRC` usage.
pub fn read_buffer_to_host(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
) -> InspectResult<Vec<u8>> {
    let size = buffer.size();
    if size == 0 {
        return Ok(Vec::new());
    }
    if size % wgpu::COPY_BUFFER_ALIGNMENT != 0 {
        return Err(InspectError::readback(format!(
            "buffer size {} is not {}-byte aligned for copy",
            size,
            wgpu::COPY_BUFFER_ALIGNMENT
        )));
    }

    let staging = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("gpu-inspect-readback-staging"),
        size,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("gpu-inspect-readback-encoder"),
    });
    encoder.copy_buffer_to_buffer(buffer, 0, &staging, 0, size);
    queue.submit(std::iter::once(encoder.finish()));
    device.poll(wgpu::Maintain::Wait);

    let slice = staging.slice(..);
    let (sender, receiver) = oneshot_channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = sender.send(result);
    });
    device.poll(wgpu::Maintain::Wait);

    pollster::block_on(receiver.receive())
        .ok_or_else(|| InspectError::readback("map_async callback channel dropped"))?
        .map_err(|e| InspectError::readback(format!("MapAsync failed: {:?}", e)))?;

    let data = slice.get_mapped_range();
    let out = data.to_vec();
    drop(data);
    staging.unmap();

    log::debug!("read back {} bytes", out.len());
    Ok(out)
}

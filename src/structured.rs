//! Typed wrapper over a fixed-stride storage buffer.
//!
//! Keeps the element type next to the buffer so inspection descriptors fall
//! out for free. Created with `COPY_SRC` so snapshots can always be taken.

use crate::resource::ResourceDesc;
use bytemuck::Pod;
use std::marker::PhantomData;
use wgpu::util::DeviceExt;

const USAGE: wgpu::BufferUsages = wgpu::BufferUsages::STORAGE
    .union(wgpu::BufferUsages::COPY_DST)
    .union(wgpu::BufferUsages::COPY_SRC);

/// A GPU storage buffer holding `count` records of `T`.
#[derive(Debug)]
pub struct StructuredBuffer<T: Pod> {
    buffer: wgpu::Buffer,
    count: u32,
    _marker: PhantomData<T>,
}

impl<T: Pod> StructuredBuffer<T> {
    /// Allocate `count` zeroed records.
    pub fn new(device: &wgpu::Device, label: &str, count: u32) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: count as u64 * std::mem::size_of::<T>() as u64,
            usage: USAGE,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            count,
            _marker: PhantomData,
        }
    }

    /// Allocate and upload `data`.
    pub fn with_data(device: &wgpu::Device, label: &str, data: &[T]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: USAGE,
        });
        Self {
            buffer,
            count: data.len() as u32,
            _marker: PhantomData,
        }
    }

    /// Allocate `count` records all set to `value`.
    pub fn filled(device: &wgpu::Device, label: &str, count: u32, value: T) -> Self {
        Self::with_data(device, label, &vec![value; count as usize])
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn stride(&self) -> u32 {
        std::mem::size_of::<T>() as u32
    }

    pub fn byte_size(&self) -> u64 {
        self.buffer.size()
    }

    /// Overwrite the buffer contents starting at element 0.
    pub fn write(&self, queue: &wgpu::Queue, data: &[T]) {
        debug_assert!(data.len() as u32 <= self.count);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Descriptor for memory accounting.
    pub fn desc(&self) -> ResourceDesc {
        ResourceDesc::buffer(self.stride(), self.count)
    }
}

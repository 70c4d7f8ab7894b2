//! Paged buffer inspection over a resident snapshot.
//!
//! One inspector holds at most one snapshot. Loads are synchronous and
//! blocking; a new load replaces the previous snapshot wholesale and resets
//! paging. Page lookups are pure index math over the resident copy.

use crate::error::{InspectError, InspectResult};
use crate::inspect::layout::RecordLayout;
use crate::inspect::readback::read_buffer_to_host;
use crate::inspect::snapshot::{BufferSnapshot, DecodedField};

/// Records shown per page unless overridden.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// A read-only window into a snapshot's records.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    snapshot: &'a BufferSnapshot,
    /// Clamped page index this view covers.
    pub page_index: usize,
    /// Absolute index of the first record in the window.
    pub start: usize,
    /// Absolute index one past the last record in the window.
    pub end: usize,
}

impl<'a> PageView<'a> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Decoded records in the window, with their absolute indices.
    pub fn records(&self) -> impl Iterator<Item = (usize, Vec<DecodedField>)> + 'a {
        let snapshot = self.snapshot;
        (self.start..self.end).map(move |i| (i, snapshot.decode_record(i)))
    }
}

/// Snapshot-and-page state for browsing one buffer at a time.
#[derive(Debug)]
pub struct BufferInspector {
    page_size: usize,
    page: usize,
    snapshot: Option<BufferSnapshot>,
}

impl BufferInspector {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be > 0");
        Self {
            page_size,
            page: 0,
            snapshot: None,
        }
    }

    /// Download `buffer` and make it the resident snapshot, resetting the
    /// active page to 0. Validates the layout against the buffer size before
    /// issuing the download; on any failure the previous snapshot is left
    /// untouched.
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        buffer: &wgpu::Buffer,
        layout: RecordLayout,
    ) -> InspectResult<&BufferSnapshot> {
        let record_size = layout.byte_size();
        if record_size == 0 || buffer.size() % record_size != 0 {
            return Err(InspectError::LayoutMismatch {
                buffer_size: buffer.size(),
                record_size,
            });
        }

        let bytes = read_buffer_to_host(device, queue, buffer)?;
        let snapshot = BufferSnapshot::from_bytes(bytes, layout)?;
        log::info!(
            "loaded snapshot: {} records of {} bytes",
            snapshot.element_count(),
            record_size
        );
        Ok(self.load_snapshot(snapshot))
    }

    /// Adopt an already-built snapshot, replacing any previous one and
    /// resetting the active page to 0.
    pub fn load_snapshot(&mut self, snapshot: BufferSnapshot) -> &BufferSnapshot {
        self.page = 0;
        self.snapshot.insert(snapshot)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&BufferSnapshot> {
        self.snapshot.as_ref()
    }

    /// Drop the resident snapshot, returning to the idle state.
    pub fn close(&mut self) {
        self.snapshot = None;
        self.page = 0;
    }

    /// Index of the last valid page (0 when the snapshot is empty).
    pub fn max_page(&self) -> InspectResult<usize> {
        let snapshot = self.snapshot.as_ref().ok_or(InspectError::NotLoaded)?;
        Ok(max_page_index(snapshot.element_count(), self.page_size))
    }

    /// Window for `page_index`, clamped into `[0, max_page]`. Pure index
    /// computation; never re-downloads.
    pub fn page(&self, page_index: usize) -> InspectResult<PageView<'_>> {
        let snapshot = self.snapshot.as_ref().ok_or(InspectError::NotLoaded)?;
        let count = snapshot.element_count();
        let page = page_index.min(max_page_index(count, self.page_size));
        let start = page * self.page_size;
        let end = (start + self.page_size).min(count);
        Ok(PageView {
            snapshot,
            page_index: page,
            start,
            end,
        })
    }

    /// Window for the active page.
    pub fn current_page(&self) -> InspectResult<PageView<'_>> {
        self.page(self.page)
    }

    /// Advance the active page (clamped) and return its window.
    pub fn next_page(&mut self) -> InspectResult<PageView<'_>> {
        self.page = (self.page + 1).min(self.max_page()?);
        self.current_page()
    }

    /// Step the active page back (clamped at 0) and return its window.
    pub fn prev_page(&mut self) -> InspectResult<PageView<'_>> {
        self.page = self.page.saturating_sub(1);
        self.current_page()
    }
}

impl Default for BufferInspector {
    fn default() -> Self {
        Self::new()
    }
}

fn max_page_index(element_count: usize, page_size: usize) -> usize {
    if element_count == 0 {
        0
    } else {
        (element_count - 1) / page_size
    }
}

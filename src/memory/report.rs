//! Labeled memory usage reports.
//!
//! A report is computed fresh from a snapshot of resource descriptors and is
//! never mutated afterwards; it holds no reference to the resources it
//! describes.

use super::usage::{resource_size_bytes, UsageConfig};
use crate::resource::ResourceDesc;
use std::fmt;

/// Byte footprint attributed to one labeled resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUsageEntry {
    pub label: String,
    pub byte_size: u64,
}

/// Aggregate memory report: entries sorted descending by size, plus a total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUsageReport {
    total_bytes: u64,
    entries: Vec<MemoryUsageEntry>,
}

/// Compute a report over labeled resource descriptors.
///
/// Absent handles are skipped silently; duplicate labels are kept as separate
/// entries. Ties in size preserve input order, so the output is deterministic.
pub fn compute_report<I>(handles: I, config: &UsageConfig) -> MemoryUsageReport
where
    I: IntoIterator<Item = (String, Option<ResourceDesc>)>,
{
    let mut entries: Vec<MemoryUsageEntry> = handles
        .into_iter()
        .filter_map(|(label, desc)| {
            let desc = desc?;
            Some(MemoryUsageEntry {
                label,
                byte_size: resource_size_bytes(&desc, config),
            })
        })
        .collect();

    // sort_by is stable: equal sizes keep input order
    entries.sort_by(|a, b| b.byte_size.cmp(&a.byte_size));
    let total_bytes = entries.iter().map(|e| e.byte_size).sum();

    log::debug!(
        "memory report: {} entries, {} bytes total",
        entries.len(),
        total_bytes
    );

    MemoryUsageReport {
        total_bytes,
        entries,
    }
}

impl MemoryUsageReport {
    /// Exact sum of all entry sizes in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Entries in descending size order. The synthetic Total row is not
    /// included here; see [`MemoryUsageReport::rows`].
    pub fn entries(&self) -> &[MemoryUsageEntry] {
        &self.entries
    }

    /// Percentage share of the entry at `index`. Defined as 0.0 when the
    /// total is zero.
    pub fn percentage(&self, index: usize) -> f64 {
        if self.total_bytes == 0 {
            0.0
        } else {
            self.entries[index].byte_size as f64 / self.total_bytes as f64 * 100.0
        }
    }

    /// Formatted rows, prefixed by the Total row (always 100.00 %). Byte
    /// counts render as decimal megabytes with two decimals.
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows = Vec::with_capacity(self.entries.len() + 1);
        rows.push(("Total".to_string(), format_usage(self.total_bytes, 100.0)));
        for (i, entry) in self.entries.iter().enumerate() {
            rows.push((
                entry.label.clone(),
                format_usage(entry.byte_size, self.percentage(i)),
            ));
        }
        rows
    }
}

impl fmt::Display for MemoryUsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, usage) in self.rows() {
            writeln!(f, "{:<48} {:>24}", label, usage)?;
        }
        Ok(())
    }
}

fn format_usage(byte_size: u64, percentage: f64) -> String {
    format!(
        "{:.2} MB ({:.2} %)",
        byte_size as f64 / 1_000_000.0,
        percentage
    )
}

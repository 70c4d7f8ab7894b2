//! Process-wide registry of named debug objects.
//!
//! Discovery is explicit: callers register the labeled resources they want
//! inspected instead of the library scanning anything. The registry only
//! holds size metadata, never the resources themselves.

use crate::memory::{compute_report, MemoryUsageReport, UsageConfig};
use crate::resource::ResourceDesc;
use std::sync::Mutex;

/// A named collection of labeled resources registered for inspection.
#[derive(Debug, Clone)]
pub struct DebugObject {
    name: String,
    resources: Vec<(String, ResourceDesc)>,
}

impl DebugObject {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            resources: Vec::new(),
        }
    }

    /// Attach one labeled resource, chainable.
    pub fn resource(mut self, label: &str, desc: ResourceDesc) -> Self {
        self.resources.push((label.to_string(), desc));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resources(&self) -> &[(String, ResourceDesc)] {
        &self.resources
    }

    /// Memory report over this object's resources.
    pub fn report(&self, config: &UsageConfig) -> MemoryUsageReport {
        compute_report(
            self.resources
                .iter()
                .map(|(label, desc)| (label.clone(), Some(*desc))),
            config,
        )
    }
}

/// Tracked-object list. Use [`global_registry`] for the shared instance or
/// construct a private one for tests.
#[derive(Debug, Default)]
pub struct DebugRegistry {
    objects: Mutex<Vec<DebugObject>>,
}

impl DebugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, object: DebugObject) {
        log::debug!("tracking debug object '{}'", object.name());
        self.objects.lock().unwrap().push(object);
    }

    /// Remove every object registered under `name`.
    pub fn untrack(&self, name: &str) {
        self.objects.lock().unwrap().retain(|o| o.name() != name);
    }

    pub fn tracked(&self) -> Vec<DebugObject> {
        self.objects.lock().unwrap().clone()
    }

    /// Report for one tracked object, or `None` if nothing is registered
    /// under `name`.
    pub fn report(&self, name: &str, config: &UsageConfig) -> Option<MemoryUsageReport> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.name() == name)
            .map(|o| o.report(config))
    }
}

static GLOBAL_REGISTRY: std::sync::OnceLock<DebugRegistry> = std::sync::OnceLock::new();

/// Shared registry instance.
pub fn global_registry() -> &'static DebugRegistry {
    GLOBAL_REGISTRY.get_or_init(DebugRegistry::new)
}

//! The in-memory appliance registry.
//!
//! The registry is the process's single source of truth: an insertion
//! ordered collection that grows for the life of the session and is never
//! reordered, deduplicated, or persisted. Display positions are 1-based and
//! assigned at display time, so a record never stores its own index.

use crate::model::Appliance;

#[derive(Debug, Default)]
pub struct Registry {
    appliances: Vec<Appliance>,
}

/// An appliance paired with its 1-based position in the registry.
#[derive(Debug, Clone)]
pub struct IndexedAppliance {
    pub index: usize,
    pub appliance: Appliance,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Duplicate names are permitted.
    pub fn add(&mut self, appliance: Appliance) {
        self.appliances.push(appliance);
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appliance> {
        self.appliances.iter()
    }

    /// All records in insertion order, each paired with its display index.
    pub fn indexed(&self) -> Vec<IndexedAppliance> {
        self.appliances
            .iter()
            .enumerate()
            .map(|(i, appliance)| IndexedAppliance {
                index: i + 1,
                appliance: appliance.clone(),
            })
            .collect()
    }
}

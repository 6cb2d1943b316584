//! # API Facade
//!
//! A thin facade over the command layer, and the single entry point any UI
//! uses. It owns the registry for the life of the process, dispatches each
//! operation to its command, and returns structured [`CmdResult`] values.
//! No I/O and no presentation concerns live here.

use crate::commands;
use crate::model::Appliance;
use crate::registry::Registry;

pub struct ApplianceApi {
    registry: Registry,
}

impl Default for ApplianceApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplianceApi {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Registers an appliance from already-validated field values.
    pub fn register_appliance(
        &mut self,
        name: String,
        power_w: f64,
        hours_per_day: f64,
    ) -> commands::CmdResult {
        commands::register::run(
            &mut self.registry,
            Appliance::new(name, power_w, hours_per_day),
        )
    }

    pub fn view_appliances(&self) -> commands::CmdResult {
        commands::list::run(&self.registry)
    }

    pub fn search_appliances(&self, term: &str) -> commands::CmdResult {
        commands::search::run(&self.registry, term)
    }

    pub fn has_appliances(&self) -> bool {
        !self.registry.is_empty()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_register_then_view() {
        let mut api = ApplianceApi::new();
        assert!(!api.has_appliances());

        api.register_appliance("Heater".into(), 1500.0, 3.0);
        assert!(api.has_appliances());

        let result = api.view_appliances();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].appliance.name, "Heater");
    }

    #[test]
    fn dispatches_search() {
        let mut api = ApplianceApi::new();
        api.register_appliance("Refrigerator".into(), 150.0, 24.0);

        let result = api.search_appliances("frig");
        assert_eq!(result.listed.len(), 1);
    }
}

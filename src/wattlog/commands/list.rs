use crate::commands::{CmdMessage, CmdResult};
use crate::registry::Registry;

/// Lists every registered appliance in insertion order.
pub fn run(registry: &Registry) -> CmdResult {
    if registry.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No appliances registered yet."));
        return result;
    }

    CmdResult::default().with_listed(registry.indexed())
}

use crate::commands::{CmdMessage, CmdResult};
use crate::model::Appliance;
use crate::registry::Registry;

/// Appends a validated appliance to the registry.
///
/// Cannot fail: the record arrives already validated and the registry
/// accepts anything, duplicates included.
pub fn run(registry: &mut Registry, appliance: Appliance) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved: {} ({}W, {}h/day)",
        appliance.name, appliance.power_w, appliance.hours_per_day
    )));
    registry.add(appliance);
    result
}

use crate::commands::{CmdMessage, CmdResult};
use crate::registry::{IndexedAppliance, Registry};

/// Case-insensitive substring search over appliance names.
///
/// Both the stored name and the term are folded to lowercase; a record
/// matches when its folded name contains the folded term anywhere. Matches
/// keep registry order. When nothing matches, the message echoes the term
/// exactly as the user typed it.
pub fn run(registry: &Registry, term: &str) -> CmdResult {
    let term_folded = term.to_lowercase();

    let matches: Vec<IndexedAppliance> = registry
        .indexed()
        .into_iter()
        .filter(|entry| entry.appliance.name.to_lowercase().contains(&term_folded))
        .collect();

    if matches.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("No appliance matched: {}", term)));
        return result;
    }

    CmdResult::default().with_listed(matches)
}

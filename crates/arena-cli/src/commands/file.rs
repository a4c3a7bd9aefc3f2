use std::path::Path;

use arena_core::BattleInput;
use tracing::debug;

pub fn run(path: &Path, format: &str) -> Result<(), String> {
    debug!(path = %path.display(), "reading battle file");
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let input: BattleInput = serde_json::from_str(&text)
        .map_err(|e| format!("invalid battle file {}: {e}", path.display()))?;
    super::evaluate(&input, format)
}

use anyhow::{Context, Result};
use scrollcal::data::persistence::get_data_dir;
use scrollcal::data::{CalendarConfig, EventData, Persistable, SavedState};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes default config.yaml and events.json into `dir` and forgets any
/// saved view state.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    CalendarConfig::default().save_to(dir)?;
    EventData::default().save_to(dir)?;
    let state = dir.join(SavedState::filename());
    if state.exists() {
        fs::remove_file(&state)
            .with_context(|| format!("failed to remove {}", state.display()))?;
    }
    info!(dir = %dir.display(), "data files initialized");
    Ok(())
}

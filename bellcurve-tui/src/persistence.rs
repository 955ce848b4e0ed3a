//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use bellcurve_core::{DistributionParams, SeedPlan};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub params: DistributionParams,
    pub master_seed: u64,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            params: DistributionParams::default(),
            master_seed: SeedPlan::default().master_seed(),
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is missing
/// or corrupt, or if the stored params have an unusable range.
pub fn load(path: &Path) -> PersistedState {
    let state = match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    };
    if state.params.has_valid_range() {
        state
    } else {
        PersistedState::default()
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &crate::app::AppState) -> PersistedState {
    PersistedState {
        params: app.params,
        master_seed: app.seed_plan.master_seed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("bellcurve_persist_test");
        let path = dir.join("state.json");

        let mut state = PersistedState::default();
        state.params.mean = 42.5;
        state.master_seed = 777;

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.params.mean, 42.5);
        assert_eq!(loaded.master_seed, 777);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.params, DistributionParams::default());
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("bellcurve_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.params, DistributionParams::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn inverted_range_in_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("bellcurve_persist_range");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        let mut bad = PersistedState::default();
        bad.params.min = 90.0;
        bad.params.max = 10.0;
        std::fs::write(&path, serde_json::to_string(&bad).unwrap()).unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.params, DistributionParams::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}

use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".goalboard.toml";
const XDG_CONFIG_FILE: &str = "config.toml";

/// Load config file content from CWD first, then the config directory,
/// then the home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    read_first(&config_file_candidates())
}

/// Config file locations in lookup order
fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];

    match crate::config_dir() {
        Ok(dir) => candidates.push(dir.join(XDG_CONFIG_FILE)),
        Err(e) => log::debug!("Skipping config directory lookup: {}", e),
    }

    if let Some(home_config) = get_home_config_path() {
        candidates.push(home_config);
    }

    candidates
}

fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

/// Returns ~/.goalboard.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a default
/// configuration file. Existing files are left alone.
pub fn handle(path: &Path, is_test: bool) -> AppResult<()> {
    info("Initializing rClassCal…");

    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
        return Ok(());
    }

    Config::init_all(path, is_test)
}

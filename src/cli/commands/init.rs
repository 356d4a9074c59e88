use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::new(CommandSummary::Init(InitSummary { created: false })).with_issues(1));
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(CommandResult::new(CommandSummary::Init(InitSummary { created: true })))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::cli::{commands::init::*, exit_status::ExitStatus};
    use crate::config::Config;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempdir().unwrap();
        let result = init_in(dir.path()).unwrap();
        assert_eq!(result.exit_status(), ExitStatus::Success);

        let content = fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let config: Config = serde_json::from_str(&content).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let result = init_in(dir.path()).unwrap();
        assert_eq!(result.exit_status(), ExitStatus::Failure);
        assert_eq!(fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(), "{}");
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Init { path, force } = cmd else {
        return Err(AppError::Other("unexpected command".to_string()));
    };

    let target = Path::new(path);
    if target.exists() && !force {
        return Err(AppError::Config(format!(
            "'{}' already exists; use --force to overwrite",
            target.display()
        )));
    }

    let template = Config::template();
    let json = serde_json::to_string_pretty(&template)
        .map_err(|e| AppError::Config(format!("failed to serialize template: {e}")))?;
    fs::write(target, json + "\n")?;

    success(format!("Configuration template written to {}", target.display()));
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Config {
        config,
        print_config,
        check,
    } = cmd
    else {
        return Err(AppError::Other("unexpected command".to_string()));
    };

    let cfg = Config::load(Path::new(config))?;

    if *print_config {
        let json = serde_json::to_string_pretty(&cfg)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
        println!("{json}");
    }

    if *check {
        let problems = cfg.check();
        if problems.is_empty() {
            success("Configuration OK");
        } else {
            for problem in &problems {
                warning(problem);
            }
            return Err(AppError::Config(format!(
                "{} problem(s) found in '{}'",
                problems.len(),
                config
            )));
        }
    }

    if !*print_config && !*check {
        success(format!("Configuration loaded from '{config}'"));
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `rclasscal init` first",
                    path.display()
                )));
            }
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.unwrap_or(default_editor.as_str());

    match Command::new(editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor}'"));
            return Ok(());
        }
        _ if editor == default_editor => {
            return Err(AppError::Config(format!("editor '{editor}' failed")));
        }
        _ => warning(format!(
            "Editor '{editor}' not available, falling back to '{default_editor}'"
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited using fallback '{default_editor}'"
            ));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration using '{default_editor}'"
        ))),
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::fs;
use std::process::Command as ProcessCommand;

/// View or edit the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{}", content);
            } else {
                warning(format!(
                    "No configuration file found at {} (run `visitlog init`).",
                    path.display()
                ));
            }
            return Ok(());
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "no configuration file at {} (run `visitlog init`)",
                    path.display()
                )));
            }

            let editor_cmd = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .or_else(|| std::env::var("VISUAL").ok())
                .unwrap_or_else(|| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let status = ProcessCommand::new(&editor_cmd).arg(&path).status()?;
            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{}' exited with an error",
                    editor_cmd
                )));
            }
            return Ok(());
        }

        warning("Nothing to do: specify --print or --edit.");
    }

    Ok(())
}

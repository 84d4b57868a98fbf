use crate::errors::{AppError, AppResult};
use std::fs;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &str) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path, e)))?;
        println!("{}", content);
        Ok(())
    }

    pub fn edit(path: &str, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }
        Ok(())
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy().to_string();

        if *print_config {
            if path.exists() {
                println!("📄 {}:\n", path.display());
                ConfigLogic::print(&path_str)?;
            } else {
                info("No configuration file yet, showing defaults.\n");
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(format!("cannot serialize config: {}", e)))?;
                println!("{}", yaml);
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path_str, editor)?;
            // the edited file must still parse
            Config::load_from(&path)?;
            success(format!("Configuration saved: {}", path.display()));
        }
    }

    Ok(())
}

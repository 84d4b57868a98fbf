use crate::cli::commands::open_engine;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::Calendar;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, force } = &cli.command {
        let engine = open_engine(cfg)?;
        let date = parse_date(engine.calendar(), engine.today(), date)?;
        let week_start = Calendar::week_start_for(date);

        if !*force
            && !ask_confirmation(&format!(
                "Delete the timecard of {} @ {} for the week of {}? This action is irreversible.",
                cli.employee, cli.company, week_start
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let key = engine.delete_week(&cli.employee, &cli.company, date)?;
        success(format!("Deleted timecard {}", key));
    }

    Ok(())
}

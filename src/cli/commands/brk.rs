use crate::cli::commands::open_engine;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::local_hm;
use crate::utils::time::parse_optional_instant;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Break { start, end: _, at } = &cli.command {
        let engine = open_engine(cfg)?;
        let cal = engine.calendar();
        let at = parse_optional_instant(cal, engine.today(), at.as_ref())?;

        if *start {
            let r = engine.start_break(&cli.employee, &cli.company, at)?;
            success(format!(
                "Break started at {} ({} completed today)",
                local_hm(cal, Some(r.at)),
                r.break_count
            ));
        } else {
            let r = engine.end_break(&cli.employee, &cli.company, at)?;
            success(format!(
                "Break ended at {} ({} completed today)",
                local_hm(cal, Some(r.at)),
                r.break_count
            ));
        }
    }

    Ok(())
}

use crate::cli::commands::open_engine;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_week;
use crate::utils::date::parse_date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = &cli.command
    {
        let engine = open_engine(cfg)?;

        let tc = match date {
            Some(d) => {
                let date = parse_date(engine.calendar(), engine.today(), d)?;
                engine.find_week_containing(&cli.employee, &cli.company, date)?
            }
            None => engine.get_current_week(&cli.employee, &cli.company)?,
        };

        export_week(engine.calendar(), &tc, *format, file, *force)?;
    }
    Ok(())
}

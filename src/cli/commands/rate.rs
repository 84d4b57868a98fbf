use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::SqliteRates;
use crate::errors::AppResult;
use crate::rates::RateProvider;
use crate::ui::messages::{info, success};
use crate::utils::format_money;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { set } = &cli.command {
        let rates = SqliteRates::open(&cfg.database, cfg.default_hourly_rate)?;

        if let Some(rate) = set {
            rates.set_rate(&cli.employee, &cli.company, *rate)?;
            success(format!(
                "Hourly rate of {} @ {} set to {}",
                cli.employee,
                cli.company,
                format_money(*rate)
            ));
        } else {
            let rate = rates.hourly_rate(&cli.employee, &cli.company)?;
            info(format!(
                "Hourly rate of {} @ {}: {}",
                cli.employee,
                cli.company,
                format_money(rate)
            ));
        }
    }

    Ok(())
}

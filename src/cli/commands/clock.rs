use crate::cli::commands::open_engine;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{field, success};
use crate::utils::formatting::local_hm;
use crate::utils::time::parse_optional_instant;
use crate::utils::{format_money, hours2readable};

/// Handle `in` and `out`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let engine = open_engine(cfg)?;
    let cal = engine.calendar();

    match &cli.command {
        Commands::In { at } => {
            let at = parse_optional_instant(cal, engine.today(), at.as_ref())?;
            let receipt = engine.clock_in(&cli.employee, &cli.company, at)?;

            success(format!(
                "Clocked in on {} at {}",
                receipt.date,
                local_hm(cal, Some(receipt.clock_in_time))
            ));
        }
        Commands::Out { at } => {
            let at = parse_optional_instant(cal, engine.today(), at.as_ref())?;
            let receipt = engine.clock_out(&cli.employee, &cli.company, at)?;

            success(format!(
                "Clocked out on {} at {}",
                receipt.date,
                local_hm(cal, Some(receipt.clock_out_time))
            ));
            field("Worked", hours2readable(receipt.hours_worked));
            field("Pay (day)", format_money(receipt.pay_for_day));
            field("Pay (week)", format_money(receipt.week_total_pay));
        }
        _ => {}
    }

    Ok(())
}

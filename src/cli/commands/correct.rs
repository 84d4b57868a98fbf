use crate::cli::commands::open_engine;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::DayCorrection;
use crate::errors::AppResult;
use crate::ui::messages::{field, success};
use crate::utils::date::parse_date;
use crate::utils::formatting::local_hm;
use crate::utils::time::parse_optional_instant;
use crate::utils::{format_money, hours2readable};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Correct {
        date,
        clock_in,
        clock_out,
        clear,
    } = &cli.command
    {
        let engine = open_engine(cfg)?;
        let cal = engine.calendar();
        let date = parse_date(cal, engine.today(), date)?;

        let correction = if *clear {
            DayCorrection::clear()
        } else {
            DayCorrection::times(
                parse_optional_instant(cal, date, clock_in.as_ref())?,
                parse_optional_instant(cal, date, clock_out.as_ref())?,
            )
        };

        let r = engine.correct_day(&cli.employee, &cli.company, date, &correction)?;

        if *clear {
            success(format!("{} cleared", date));
        } else {
            success(format!("{} corrected", date));
        }
        field("Clock in", local_hm(cal, r.day.clock_in));
        field("Clock out", local_hm(cal, r.day.clock_out));
        field("Worked", hours2readable(r.day.hours_worked));
        field("Pay (day)", format_money(r.pay_for_day));
        field("Pay (week)", format_money(r.week_total_pay));
    }

    Ok(())
}

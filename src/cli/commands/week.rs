use crate::cli::commands::{open_engine, print_timecard};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::{format_money, hours2readable};

/// Handle `week` and `weeks`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let engine = open_engine(cfg)?;

    match &cli.command {
        Commands::Week { date: None } => {
            let tc = engine.get_current_week(&cli.employee, &cli.company)?;
            print_timecard(&engine, &tc);
        }
        Commands::Week { date: Some(d) } => {
            let date = parse_date(engine.calendar(), engine.today(), d)?;
            let tc = engine.find_week_containing(&cli.employee, &cli.company, date)?;
            print_timecard(&engine, &tc);
        }
        Commands::Weeks => {
            let weeks = engine.list_weeks(&cli.employee, &cli.company)?;
            if weeks.is_empty() {
                info(format!(
                    "No timecards for {} @ {}.",
                    cli.employee, cli.company
                ));
                return Ok(());
            }

            println!("📅 Timecards for {} @ {}:\n", cli.employee, cli.company);
            for tc in &weeks {
                let hours: f64 = tc.days.iter().map(|d| d.hours_worked).sum();
                println!(
                    "  {}  {}  {:>10}",
                    tc.week_start,
                    hours2readable(hours),
                    format_money(tc.total_pay)
                );
            }
        }
        _ => {}
    }

    Ok(())
}

use crate::cli::commands::open_engine;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{field, header};
use crate::utils::formatting::local_hm;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let engine = open_engine(cfg)?;
    let cal = engine.calendar();
    let status = engine.day_status(&cli.employee, &cli.company)?;

    header(format!("{} @ {} | {}", cli.employee, cli.company, status.date));
    field("State", status.state);
    field("Clock in", local_hm(cal, status.clock_in));
    field("Clock out", local_hm(cal, status.clock_out));
    field(
        "Breaks",
        format!(
            "{} completed{}",
            status.break_count,
            if status.on_break { ", one running" } else { "" }
        ),
    );
    field("Break time", format!("{} min", status.break_minutes));
    Ok(())
}

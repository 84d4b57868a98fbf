use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_TARGET_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour per audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Cyan,
        "break_start" | "break_end" => Colour::Yellow,
        "correct" => Colour::RGB(255, 153, 51),
        "reconcile" => Colour::Purple,
        "delete" => Colour::Red,
        "rate" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Audit log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);

        let cells: Vec<String> = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                let color = color_for_operation(op);
                if target.is_empty() {
                    color.paint(op.as_str()).to_string()
                } else {
                    let rest = truncate(target, MAX_TARGET_WIDTH.saturating_sub(op.len() + 3));
                    format!("{} ({})", color.paint(op.as_str()), rest)
                }
            })
            .collect();

        let op_w = cells
            .iter()
            .map(|c| strip_ansi(c).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_TARGET_WIDTH);

        println!("📜 Audit log:\n");

        for ((id, date, _, _, message), cell) in entries.iter().zip(cells.iter()) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(cell).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                cell,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

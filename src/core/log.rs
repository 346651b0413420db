use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "checkout" => Colour::Cyan,
        "edit" => Colour::Yellow,
        "del" | "user_del" => Colour::Red,
        "user_add" | "user_passwd" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, _cfg: &Config) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok((id, date, operation, op_target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.len())
            .max()
            .unwrap_or(10)
            .min(60);

        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation_raw, op_target, message) in entries {
            let color = color_for_operation(&operation_raw);

            // Truncate to 60 visible chars, then recolor only the op word
            let truncated = if op_target.len() > 60 {
                let mut s = op_target.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            let recolored = if let Some((op_word, rest)) = truncated.split_once(' ') {
                format!("{} {}", color.paint(op_word), rest)
            } else {
                color.paint(truncated.as_str()).to_string()
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                recolored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

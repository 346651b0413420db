use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let visitors: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM visitors", [], |row| row.get(0))?;
    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;

    println!(
        "{}• Visitor records:{} {}{}{}",
        CYAN, RESET, GREEN, visitors, RESET
    );
    println!("{}• User accounts:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);

    //
    // 3) VISIT DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT date(time_in) FROM visitors ORDER BY time_in ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT date(time_in) FROM visitors ORDER BY time_in DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Visit date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

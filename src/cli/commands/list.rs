use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_visitors;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::visitor::Visitor;
use crate::utils::date;
use crate::utils::formatting::{grid_date, grid_time, grid_time_opt};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// List visitor records with the grid's search and date-range filters.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        from,
        to,
        active,
    } = cmd
    {
        let _session = Session::load(&cfg.database)?;

        let from = parse_filter_date(from)?;
        let to = parse_filter_date(to)?;

        let mut pool = DbPool::new(&cfg.database)?;

        // Full grid load; predicates run against the result set.
        let visitors = load_all_visitors(&mut pool)?;
        let today = date::today();

        let filtered: Vec<&Visitor> = visitors
            .iter()
            .filter(|v| matches_filters(v, search, from, to, *active, today))
            .collect();

        print_grid(&filtered);
    }

    Ok(())
}

fn parse_filter_date(input: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

fn matches_filters(
    v: &Visitor,
    search: &Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    active_only: bool,
    today: NaiveDate,
) -> bool {
    if let Some(needle) = search {
        if !v.name.to_lowercase().contains(&needle.to_lowercase()) {
            return false;
        }
    }

    let d = v.time_in.date();
    if let Some(start) = from {
        if d < start {
            return false;
        }
    }
    if let Some(end) = to {
        if d > end {
            return false;
        }
    }

    if active_only && !v.is_active(today) {
        return false;
    }

    true
}

fn print_grid(visitors: &[&Visitor]) {
    if visitors.is_empty() {
        println!("No visitor records found.");
        println!("0 Total Records");
        return;
    }

    let rows = visitors
        .iter()
        .map(|v| {
            vec![
                v.id.to_string(),
                grid_date(&v.time_in),
                v.name.clone(),
                v.gender.to_db_str().to_string(),
                v.client_type.to_db_str().to_string(),
                v.office.clone(),
                v.purpose.clone(),
                grid_time(&v.time_in),
                grid_time_opt(&v.time_out),
            ]
        })
        .collect();

    let table = Table::auto(
        &[
            "ID",
            "Date",
            "Name",
            "Gender",
            "Client Type",
            "Office/Institution",
            "Purpose",
            "Time In",
            "Time Out",
        ],
        rows,
    );

    print!("{}", table.render());
    println!("{} Total Records", visitors.len());
}

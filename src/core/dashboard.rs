//! Dashboard statistics: stat tiles with trend text, active-now count,
//! today's recent activity, and the last-7-day chart.

use crate::config::Config;
use crate::core::trend::{trend_label, trend_percent};
use crate::db::pool::DbPool;
use crate::db::queries::{count_active, count_between, recent_today};
use crate::errors::AppResult;
use crate::models::visitor::Visitor;
use crate::ui::messages::header;
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, RESET, color_for_trend};
use crate::utils::date::{is_weekend, start_of_month, start_of_prev_month, start_of_week};
use chrono::{Duration, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct DailyStat {
    pub date: NaiveDate,
    pub day_name: String,
    pub count: i64,
    pub is_weekend: bool,
}

#[derive(Debug)]
pub struct DashboardData {
    pub today: i64,
    pub yesterday: i64,
    pub week: i64,
    pub last_week: i64,
    pub month: i64,
    pub last_month: i64,
    pub active_now: i64,
    pub recent: Vec<Visitor>,
    pub weekly: Vec<DailyStat>,
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// One pass of aggregate queries; every window is half-open
    /// `[start, end)` on time-in.
    pub fn load(pool: &mut DbPool, now: NaiveDateTime, cfg: &Config) -> AppResult<DashboardData> {
        let conn = &pool.conn;
        let today = now.date();
        let midnight = |d: NaiveDate| d.and_hms_opt(0, 0, 0).unwrap();

        // Today vs yesterday
        let today_count = count_between(conn, midnight(today), midnight(today + Duration::days(1)))?;
        let yesterday = count_between(conn, midnight(today - Duration::days(1)), midnight(today))?;

        // This week (Monday start) vs last week
        let week_start = start_of_week(today);
        let last_week_start = week_start - Duration::days(7);
        let week = count_between(conn, midnight(week_start), now)?;
        let last_week = count_between(conn, midnight(last_week_start), midnight(week_start))?;

        // This month vs last month
        let month_start = start_of_month(today);
        let last_month_start = start_of_prev_month(today);
        let month = count_between(conn, midnight(month_start), now)?;
        let last_month = count_between(conn, midnight(last_month_start), midnight(month_start))?;

        let active_now = count_active(conn, today)?;
        let recent = recent_today(conn, today, cfg.dashboard_recent_limit)?;

        // Last 7 days, oldest first
        let mut weekly = Vec::with_capacity(7);
        for i in (0..7).rev() {
            let date = today - Duration::days(i);
            let count = count_between(conn, midnight(date), midnight(date + Duration::days(1)))?;
            weekly.push(DailyStat {
                date,
                day_name: date.format("%a").to_string(),
                count,
                is_weekend: is_weekend(date),
            });
        }

        Ok(DashboardData {
            today: today_count,
            yesterday,
            week,
            last_week,
            month,
            last_month,
            active_now,
            recent,
            weekly,
        })
    }

    pub fn render(data: &DashboardData, cfg: &Config) {
        header("Dashboard");

        print_stat("Today's Visitors", data.today, data.yesterday, "from yesterday");
        print_stat("This Week", data.week, data.last_week, "from last week");
        print_stat("This Month", data.month, data.last_month, "from last month");
        println!(
            "{}Active Now:{}       {}{}{}",
            CYAN, RESET, GREEN, data.active_now, RESET
        );

        println!("\n{}Recent Activity{}", CYAN, RESET);
        if data.recent.is_empty() {
            println!("  {}No check-ins today yet{}", GREY, RESET);
        } else {
            for v in &data.recent {
                println!(
                    "  {} | {} • {}",
                    v.name,
                    v.client_type.to_db_str(),
                    v.time_in.format("%I:%M %p")
                );
            }
        }

        println!("\n{}Last 7 Days{}", CYAN, RESET);
        for line in render_weekly_chart(&data.weekly, cfg.chart_width) {
            println!("  {}", line);
        }
        println!();
    }
}

fn print_stat(label: &str, current: i64, previous: i64, suffix: &str) {
    let color = color_for_trend(trend_percent(current, previous));
    println!(
        "{}{:<17}{} {} {}({}){}",
        CYAN,
        format!("{}:", label),
        RESET,
        current,
        color,
        trend_label(current, previous, suffix),
        RESET
    );
}

/// Redistribute daily counts into bar lengths. The longest bar spans
/// `width` cells; a zero day still shows a single cell so the row reads.
pub fn render_weekly_chart(weekly: &[DailyStat], width: usize) -> Vec<String> {
    let max = weekly.iter().map(|d| d.count).max().unwrap_or(0).max(1);

    weekly
        .iter()
        .map(|day| {
            let cells = ((day.count as f64 / max as f64) * width as f64).round() as usize;
            let cells = cells.max(1);
            let color = if day.is_weekend { GREEN } else { BLUE };
            format!(
                "{} {}{}{} {}",
                day.day_name,
                color,
                "█".repeat(cells),
                RESET,
                day.count
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(d: u32, count: i64) -> DailyStat {
        let date = NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        DailyStat {
            date,
            day_name: date.format("%a").to_string(),
            count,
            is_weekend: is_weekend(date),
        }
    }

    #[test]
    fn bars_scale_to_the_busiest_day() {
        // 2024-01-08..14, Mon..Sun
        let weekly: Vec<DailyStat> =
            [(8, 10), (9, 20), (10, 40), (11, 0), (12, 5), (13, 1), (14, 2)]
                .iter()
                .map(|&(d, c)| stat(d, c))
                .collect();

        let lines = render_weekly_chart(&weekly, 40);
        assert_eq!(lines.len(), 7);

        // Busiest day fills the full width, half as busy is half as long.
        assert!(lines[2].contains(&"█".repeat(40)));
        assert!(lines[1].contains(&"█".repeat(20)));
        assert!(!lines[1].contains(&"█".repeat(21)));
    }

    #[test]
    fn zero_count_day_still_renders_one_cell() {
        let weekly: Vec<DailyStat> = (8..15).map(|d| stat(d, 0)).collect();
        for line in render_weekly_chart(&weekly, 40) {
            assert!(line.contains('█'));
            assert!(!line.contains("██"));
        }
    }
}

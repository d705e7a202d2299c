use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{
    attribute_overtime, order_monthly, order_weekly, summarize_monthly, summarize_weekly,
};
use crate::errors::AppResult;
use crate::models::summary::{SortOrder, WeeklySummary};
use crate::store;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{format_hours, format_money, round2};
use crate::utils::table::{Column, Table};

const CHART_WIDTH: usize = 40;

/// Weekly or monthly summaries over the full entry log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        monthly,
        order,
        chart,
    } = cmd
    {
        let mut store = store::open(cfg)?;
        let entries = store.load_entries()?;

        if entries.is_empty() {
            info("No entries yet. Add some time entries to see summaries!");
            return Ok(());
        }

        // Tables read newest-first; charts read chronologically.
        let effective_order = (*order).unwrap_or(if *chart {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        });

        if *monthly {
            let mut rows = summarize_monthly(&entries);
            order_monthly(&mut rows, effective_order);

            header("Monthly summary");
            let mut table = Table::new(vec![
                Column::left("Month"),
                Column::right("Total hours"),
                Column::right("Total earnings"),
            ]);
            for row in &rows {
                table.add_row(vec![
                    row.month.clone(),
                    format_hours(row.total_hours),
                    format_money(row.total_earnings, &cfg.currency),
                ]);
            }
            print!("{}", table.render());
            print_totals(
                rows.iter().map(|r| (r.total_hours, r.total_earnings)),
                &cfg.currency,
            );
            return Ok(());
        }

        let settings = store.load_settings()?;
        let history = store.load_target_history()?;

        let mut rows = attribute_overtime(
            summarize_weekly(&entries),
            &history,
            settings.estimated_weekly_hours,
        );
        order_weekly(&mut rows, effective_order);

        if *chart {
            header("Weekly worked hours");
            print_weekly_chart(&rows);
            return Ok(());
        }

        header("Weekly summary");
        let mut table = Table::new(vec![
            Column::left("Week"),
            Column::right("Total hours"),
            Column::right("Total earnings"),
            Column::right("Target"),
            Column::right("Overtime"),
        ]);
        for row in &rows {
            table.add_row(vec![
                row.week_id(),
                format_hours(row.total_hours),
                format_money(row.total_earnings, &cfg.currency),
                format_hours(row.estimated_hours),
                format_hours(row.overtime),
            ]);
        }
        print!("{}", table.render());
        print_totals(
            rows.iter().map(|r| (r.total_hours, r.total_earnings)),
            &cfg.currency,
        );
    }

    Ok(())
}

fn print_totals(rows: impl Iterator<Item = (f64, f64)>, currency: &str) {
    let (hours, earnings) = rows.fold((0.0, 0.0), |acc, (h, e)| (acc.0 + h, acc.1 + e));
    println!(
        "\nΣ Total: {} h | {}",
        format_hours(round2(hours)),
        format_money(round2(earnings), currency)
    );
}

/// One bar per week, scaled to the widest week or target. The `|` tick marks
/// where the week's target sits on the same scale.
fn print_weekly_chart(rows: &[WeeklySummary]) {
    let scale_max = rows
        .iter()
        .map(|r| r.total_hours.max(r.estimated_hours))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    for row in rows {
        let bar_len = ((row.total_hours / scale_max) * CHART_WIDTH as f64).round() as usize;
        let target_pos =
            ((row.estimated_hours / scale_max) * CHART_WIDTH as f64).round() as usize;

        let mut bar: Vec<char> = vec![' '; CHART_WIDTH + 1];
        for slot in bar.iter_mut().take(bar_len) {
            *slot = '█';
        }
        if target_pos <= CHART_WIDTH {
            bar[target_pos] = '|';
        }

        let bar: String = bar.into_iter().collect();
        let overtime_note = if row.overtime > 0.0 {
            format!("  (+{} overtime)", format_hours(row.overtime))
        } else {
            String::new()
        };

        println!(
            "{}  {} {}{}",
            row.week_id(),
            bar,
            format_hours(row.total_hours),
            overtime_note
        );
    }
}

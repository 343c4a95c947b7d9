//! Run summary formatting.

use crate::metrics::SeedingRun;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::path::Path;

/// Format the run as a per-worker table followed by totals and failures.
pub fn format_summary(run: &SeedingRun) -> String {
    let mut output = String::new();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Worker", "Assigned", "Inserted", "Duration", "Rows/sec", "Status",
    ]);

    for outcome in &run.outcomes {
        let rows_per_sec = outcome
            .rows_per_second()
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string());

        let status_cell = if outcome.success() {
            Cell::new("OK").fg(Color::Green)
        } else {
            Cell::new("FAILED").fg(Color::Red)
        };

        table.add_row(vec![
            Cell::new(format!("worker-{}", outcome.worker_id)),
            Cell::new(format_number(outcome.record_count)),
            Cell::new(format_number(outcome.records_inserted())),
            Cell::new(format_duration(outcome.duration_secs())),
            Cell::new(rows_per_sec),
            status_cell,
        ]);
    }

    // Add totals row
    table.add_row(vec![
        Cell::new("TOTAL").fg(Color::Cyan),
        Cell::new(format_number(run.total_records)),
        Cell::new(format_number(run.total_inserted())),
        Cell::new(format!("{}*", format_duration(run.elapsed_ms as f64 / 1000.0))),
        Cell::new(format!("{:.1}", run.rows_per_second())),
        Cell::new(format!("{}/{}", run.succeeded_workers(), run.outcomes.len())),
    ]);

    output.push_str(&table.to_string());
    output.push_str("\n* Wall clock (parallel)\n");
    output.push_str(&format!(
        "Total time taken for the entire seeding process: {} ms\n",
        run.elapsed_ms
    ));

    if run.failed_workers() > 0 {
        output.push_str(&format!(
            "\nFailed Workers ({} records not persisted):\n",
            format_number(run.lost_records())
        ));
        for outcome in run.failures() {
            output.push_str(&format!(
                "  worker-{}: {}\n",
                outcome.worker_id,
                outcome.error().unwrap_or("unknown error")
            ));
        }
    }

    output
}

/// Write the run as pretty-printed JSON.
pub fn write_json_report(run: &SeedingRun, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(run)?;
    std::fs::write(path, json)
}

/// Format duration in human-readable format.
fn format_duration(secs: f64) -> String {
    // Anything that would print as "60.0s" rolls over into minutes
    if secs < 59.95 {
        return format!("{secs:.1}s");
    }
    let total = secs.round() as u64;
    if total < 3600 {
        format!("{}m {:02}s", total / 60, total % 60)
    } else {
        format!("{}h {:02}m", total / 3600, (total % 3600) / 60)
    }
}

/// Format number with thousands separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

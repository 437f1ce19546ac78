use crate::console::Line;
use crate::report::{FetchStatus, Report};
use utility::model::FunctionRecord;

/// render_report formats a report. Failed endpoint or cron lookups only show up
/// when `show_fetch_errors` is set.
pub fn render_report(report: &Report, show_fetch_errors: bool) -> Vec<Line> {
    let mut lines = vec![
        Line::heading("Service Information"),
        Line::label("service:", report.service.as_str()),
    ];

    if report.functions.is_empty() {
        lines.push(Line::heading("None"));
    } else {
        lines.push(Line::heading("functions:"));
        for func in &report.functions {
            lines.extend(render_function(func));
        }
    }

    if show_fetch_errors {
        let failures: Vec<Line> = [
            ("endpoint patterns", &report.endpoints),
            ("cron events", &report.crons),
        ]
        .iter()
        .filter_map(|(what, status)| match status {
            FetchStatus::Failed(reason) => {
                Some(Line::plain(format!("  {} unavailable: {}", what, reason)))
            }
            FetchStatus::Fetched => None,
        })
        .collect();
        if !failures.is_empty() {
            lines.push(Line::heading("warnings:"));
            lines.extend(failures);
        }
    }
    lines
}

pub fn render_function(func: &FunctionRecord) -> Vec<Line> {
    let mut lines = vec![
        Line::plain(format!("  {}", func.name)),
        Line::plain(format!("    id: {}", func.id)),
        Line::plain(format!("    stage: {}", func.stage)),
        Line::plain(format!("    runtime: {}", func.runtime)),
        Line::plain(format!("    memory: {}", func.limits.memory)),
        Line::plain(format!("    timeout: {}", func.limits.timeout)),
        Line::plain(format!("    version: {}", func.latest_version)),
        Line::plain(format!("    url: {}", func.url)),
        Line::plain(format!("    created_at: {}", func.created_at)),
    ];

    if let Some(cron) = &func.cron {
        lines.push(Line::plain("    cron:"));
        lines.push(Line::plain(format!("      active: {}", cron.is_enabled)));
        lines.push(Line::plain(format!("      value: {}", cron.cron_expression)));
    }

    if let Some(endpoint) = &func.endpoint {
        lines.push(Line::plain("    endpoint:"));
        lines.push(Line::plain(format!("      path: {}", endpoint.pattern)));
        lines.push(Line::plain(format!("      method: {}", endpoint.method)));
    }
    lines
}

/// render_identity the summary shown by `logs`
pub fn render_identity(func: &FunctionRecord) -> Vec<Line> {
    vec![
        Line::label("Name:", func.name.as_str()),
        Line::label("Function ID:", func.id.as_str()),
        Line::label("Current Version:", func.latest_version),
    ]
}

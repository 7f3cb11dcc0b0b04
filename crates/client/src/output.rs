//! Rendering of tick reports.
use std::io::Write;

use rotation_core::ActionRef;
use runtime::{Session, TickReport};

use crate::config::OutputFormat;

pub fn write(
    out: &mut impl Write,
    format: OutputFormat,
    session: &Session,
    reports: &[TickReport],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, session, reports),
        OutputFormat::Json => write_json(out, session, reports),
    }
}

fn write_text(out: &mut impl Write, session: &Session, reports: &[TickReport]) -> anyhow::Result<()> {
    let scenario = session.scenario();
    writeln!(out, "Scenario: {}", scenario.name)?;
    if !scenario.description.is_empty() {
        writeln!(out, "          {}", scenario.description)?;
    }
    writeln!(out, "Profile:  {}", session.config().profile)?;

    let actions: Vec<String> = session.active_actions().iter().map(ToString::to_string).collect();
    writeln!(out, "Actions:  {}", actions.join(", "))?;
    writeln!(out)?;

    writeln!(out, "{:>4}  {:<28}  {:<28}  status", "tick", "main", "weave")?;
    for report in reports {
        let status = if report.diagnostics.gating_active {
            format!("GATED - {}", report.diagnostics.summary)
        } else {
            report.diagnostics.summary.clone()
        };
        writeln!(
            out,
            "{:>4}  {:<28}  {:<28}  {}",
            report.tick,
            cell(report.main),
            cell(report.weave),
            status
        )?;
    }

    Ok(())
}

fn write_json(out: &mut impl Write, session: &Session, reports: &[TickReport]) -> anyhow::Result<()> {
    let document = serde_json::json!({
        "scenario": session.scenario().name,
        "config": serde_json::to_value(session.config())?,
        "ticks": serde_json::to_value(reports)?,
    });
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

fn cell(action: Option<ActionRef>) -> String {
    action.map_or_else(|| "-".to_owned(), |action| action.to_string())
}

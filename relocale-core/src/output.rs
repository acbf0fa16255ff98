//! Rendering for packaging logs and machine consumers.

use std::io::Write;

use anyhow::Result;

use crate::apply::RemovalOutcome;
use crate::locale::LocaleId;
use crate::plan::RemovalPlan;

/// Write the three-line plan summary the packaging logs show.
pub fn write_plan_summary(plan: &RemovalPlan, mut w: impl Write) -> Result<()> {
    writeln!(w, "RELEASE LOCALES: {}", join(&plan.release))?;
    writeln!(w, "APP LOCALES: {}", join(&plan.app))?;

    if plan.is_noop() {
        writeln!(w, "REMOVE: -Nothing-")?;
    } else {
        writeln!(w, "REMOVE: {}", join(&plan.remove))?;
    }

    Ok(())
}

/// Write one `* Removing: <path>` line per applied removal.
pub fn write_removal_lines(outcomes: &[RemovalOutcome], mut w: impl Write) -> Result<()> {
    for outcome in outcomes {
        writeln!(w, "* Removing: {}", outcome.path.display())?;
    }
    Ok(())
}

/// Write a plan as prettified JSON.
pub fn write_json_pretty(plan: &RemovalPlan, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write applied removals as newline-delimited JSON (NDJSON).
pub fn write_ndjson(outcomes: &[RemovalOutcome], mut w: impl Write) -> Result<()> {
    for outcome in outcomes {
        let line = serde_json::to_string(outcome)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

fn join(ids: &[LocaleId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

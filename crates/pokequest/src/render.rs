//! Plain-text rendering of a quest report

use std::fmt::{self, Write};

use pq_core::QuestReport;

/// Render the summary, gender track and details as terminal text
pub fn render_report(report: &QuestReport, count: usize) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = write_report(&mut out, report, count);
    out
}

fn write_report(out: &mut impl Write, report: &QuestReport, count: usize) -> fmt::Result {
    writeln!(out, "Pokémon Quest Suggestions")?;
    writeln!(out, "Showing {count} Pokémon per quest")?;

    if !report.summary.is_empty() {
        writeln!(out)?;
        writeln!(out, "Suggested Pokémon: {}", report.summary.join(", "))?;
    }

    for gender in &report.gender {
        writeln!(out)?;
        writeln!(out, "{} Pokémon", gender.gender.label())?;
        writeln!(out, "  {}", gender.quest_text)?;
        writeln!(out, "  • {}", gender.pokemon)?;
    }

    if !report.details.is_empty() {
        writeln!(out)?;
        writeln!(out, "Quest Details")?;
        for detail in report.visible_details() {
            writeln!(out, "Quest: {}", detail.quest_text)?;
            for line in &detail.suggestions {
                writeln!(out, "  • {line}")?;
            }
        }
        if let Some(note) = report.truncation_note() {
            writeln!(out, "{note}")?;
        }
    }

    Ok(())
}

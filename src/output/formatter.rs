//! Output formatters for evaluation reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::scoring::EvaluationReport;
use colored::{ColoredString, Colorize};

/// Render a report in the requested format
pub fn render(report: &EvaluationReport, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(render_console(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_console(report: &EvaluationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "📊 Evaluation Report".bold()));
    out.push_str(&format!(
        "Final score: {} / 100\n",
        paint_score(report.final_score)
    ));

    out.push_str(&format!(
        "\n{} {} / 100\n",
        "🎯 Skill match:".bold(),
        paint_score(report.components.skill_match_score)
    ));
    push_items(&mut out, "Matched", &report.skills.matched);
    push_items(&mut out, "Missing", &report.skills.missing);

    out.push_str(&format!(
        "\n{} {} / 100\n",
        "💼 Experience match:".bold(),
        paint_score(report.components.experience_match_score)
    ));
    push_items(&mut out, "Matched", &report.experience.matched);
    push_items(&mut out, "Missing", &report.experience.missing);

    out.push_str(&format!(
        "\nGenerated at: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out
}

fn push_items(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        out.push_str(&format!("  {}: none\n", label));
        return;
    }
    out.push_str(&format!("  {}:\n", label));
    for item in items {
        out.push_str(&format!("    • {}\n", item));
    }
}

fn paint_score(score: f32) -> ColoredString {
    let text = format!("{:.2}", score);
    if score >= 75.0 {
        text.green()
    } else if score >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}

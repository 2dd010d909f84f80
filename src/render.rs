//! Terminal rendering for the `analyze` and `models` subcommands

use colored::*;
use coach_core::{FeedbackResult, ModelRegistry};

/// Feedback as a colored, sectioned block
pub fn render_feedback(feedback: &FeedbackResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "✅ Strengths".green().bold()));
    push_points(&mut out, &feedback.pros);

    out.push_str(&format!("\n{}\n", "⚠️  Needs work".yellow().bold()));
    push_points(&mut out, &feedback.cons);

    out.push_str(&format!("\n{}\n", "✨ Improved prompt".cyan().bold()));
    if feedback.improved_prompt.is_empty() {
        out.push_str(&format!("  {}\n", "(none)".dimmed()));
    } else {
        for line in feedback.improved_prompt.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}

fn push_points(out: &mut String, points: &[String]) {
    if points.is_empty() {
        out.push_str(&format!("  {}\n", "(none)".dimmed()));
    }
    for point in points {
        out.push_str(&format!("  {} {}\n", "•".bold(), point));
    }
}

/// The model catalog, default marked
pub fn render_models(registry: &ModelRegistry) -> String {
    let mut out = String::new();
    for model in registry.list_models() {
        let marker = if model.id == registry.default_model_id() {
            " (default)".green().to_string()
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{}{}\n  {} - {}\n",
            model.id.bold(),
            marker,
            model.name,
            model.description.dimmed()
        ));
    }
    out
}

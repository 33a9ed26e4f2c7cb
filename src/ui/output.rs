use colored::*;
use terminal_size::{terminal_size, Width};

const FALLBACK_WIDTH: usize = 80;
const MAX_RESULT_LINES: usize = 20;

fn rule_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_WIDTH)
        .min(FALLBACK_WIDTH * 2)
}

pub fn display_tool_call(name: &str, arguments: &str) {
    println!("{}", format!("Calling tool: {} {}", name, arguments).cyan());
}

/// Display a tool result between two rules, truncated to a screenful.
pub fn display_tool_result(name: &str, result: &str) {
    let width = rule_width();
    let title = format!("── TOOL: {} ", name);
    let pad = width.saturating_sub(title.chars().count());
    println!("{}{}", title.dimmed(), "─".repeat(pad).dimmed());

    let lines: Vec<&str> = result.lines().collect();
    for line in lines.iter().take(MAX_RESULT_LINES) {
        println!("{}", line);
    }
    if lines.len() > MAX_RESULT_LINES {
        println!(
            "{}",
            format!("... {} more lines", lines.len() - MAX_RESULT_LINES).dimmed()
        );
    }

    println!("{}", "─".repeat(width).dimmed());
}

pub fn display_content(content: &str) {
    println!("{}", content.trim_end());
}

/// Report file contents: a timestamped header followed by the model's text.
pub fn format_report(
    content: &str,
    model: &str,
    images: &[String],
    generated_at: chrono::DateTime<chrono::Local>,
) -> String {
    format!(
        "# Invoice anomaly report\n\n- Generated: {}\n- Model: {}\n- Invoices: {}\n\n{}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S %z"),
        model,
        images.join(", "),
        content.trim_end()
    )
}

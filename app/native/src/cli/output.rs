//! CLI output formatting utilities.

use std::fmt::Write;

use colored::Colorize;
use serde_json::Value;

const INDENT: &str = "  ";

/// Prints JSON with syntax highlighting.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta.
pub fn print_highlighted_json(value: &Value) { println!("{}", highlight_json(value)); }

/// Renders `value` as indented JSON with ANSI colors.
#[must_use]
pub fn highlight_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(b) => out.push_str(&b.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().yellow().to_string()),
        Value::String(s) => out.push_str(&quote(s).green().to_string()),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push_str(&"[".bold().to_string());
            for (i, item) in items.iter().enumerate() {
                separator(out, i, depth + 1);
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push_str(&"]".bold().to_string());
        }
        Value::Object(map) => {
            out.push_str(&"{".bold().to_string());
            for (i, (key, item)) in map.iter().enumerate() {
                separator(out, i, depth + 1);
                let _ = write!(out, "{}: ", quote(key).cyan());
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push_str(&"}".bold().to_string());
        }
    }
}

fn separator(out: &mut String, index: usize, depth: usize) {
    if index > 0 {
        out.push(',');
    }
    newline(out, depth);
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

fn quote(s: &str) -> String { Value::String(s.to_string()).to_string() }

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return "…".to_string();
    }
    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{kept}…")
}

/// Formats a boolean as a colored check mark or cross.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, commands, keys, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info
//!
//! Diagnostics (errors, warnings, hints) go to stderr so that `export` and
//! `decrypt` can be piped straight into a file.

use colored::Colorize;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ initialized web`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ not initialized`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ skipped API_KEY`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: envhub init <name>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  role  owner`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", label.dimmed(), value.to_string().bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    if colors_enabled() {
        c.green().to_string()
    } else {
        c.to_string()
    }
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        k.cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a count in bold.
pub fn count(n: usize) -> String {
    if colors_enabled() {
        n.to_string().bold().to_string()
    } else {
        n.to_string()
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no variables stored`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Print raw data to stdout, uncolored.
pub fn data(msg: &str) {
    println!("{}", msg);
}

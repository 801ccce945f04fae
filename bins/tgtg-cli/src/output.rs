//! Result printing

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::Value;

/// Print a JSON response to stdout
pub fn print_json(value: &Value, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print the status code of a rating request
pub fn print_status(status: u16) {
    let note = match status {
        200 => "rated",
        403 => "order not redeemed yet",
        _ => "unexpected status",
    };

    if (200..300).contains(&status) {
        println!("{} {}", status, note.green());
    } else {
        println!("{} {}", status, note.yellow());
    }
}

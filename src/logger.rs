/// Tag-based console logging for swap building
/// Colored tag + timestamp + event code + message, flushed per line

use std::io::{self, Write};

use chrono::Utc;
use colored::*;

/// Log categories, one per subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    Swap,
    Address,
    Rpc,
}

impl LogTag {
    fn label(&self) -> ColoredString {
        match self {
            LogTag::Swap => "SWAP".yellow().bold(),
            LogTag::Address => "ADDRESS".cyan().bold(),
            LogTag::Rpc => "RPC".bright_green().bold(),
        }
    }
}

/// Log a tagged event
///
/// `event` is a short machine-greppable code (e.g. "UNSUPPORTED_CHAIN"),
/// `message` carries the human-readable detail.
pub fn log(tag: LogTag, event: &str, message: &str) {
    let timestamp = Utc::now().format("%H:%M:%S%.3f");
    println!(
        "{} {} {} {}",
        tag.label(),
        format!("[{}]", timestamp).dimmed(),
        event.bold(),
        message
    );
    let _ = io::stdout().flush();
}

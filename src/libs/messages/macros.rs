//! Macros for user-facing output.
//!
//! Command results always go to the terminal: stdout for everything except
//! errors, which go to stderr. Diagnostics are a separate channel and use
//! `tracing` directly, so a `RUST_LOG` filter never hides a command's output.
//!
//! ```text
//! msg_print!(m)   -> "m"
//! msg_success!(m) -> "✅ m"
//! msg_info!(m)    -> "ℹ️ m"
//! msg_warning!(m) -> "⚠️ m"
//! msg_error!(m)   -> "❌ m" on stderr
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sheettask::libs::messages::macros::{line, Tone};
//! use sheettask::libs::messages::Message;
//! use sheettask::msg_success;
//!
//! msg_success!(Message::TaskDeleted);
//! assert_eq!(line(Tone::Success, &Message::TaskDeleted), "✅ Task deleted");
//! ```

use std::fmt::Display;
use std::sync::OnceLock;

/// Environment variable that switches on debug-level diagnostics.
pub const DEBUG_ENV: &str = "SHEETTASK_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether `SHEETTASK_DEBUG` asked for debug diagnostics. Read once per process.
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var_os(DEBUG_ENV).is_some())
}

/// Kind of terminal line, deciding its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    pub fn prefix(&self) -> &'static str {
        match self {
            Tone::Plain => "",
            Tone::Success => "✅ ",
            Tone::Info => "ℹ️ ",
            Tone::Warning => "⚠️ ",
            Tone::Error => "❌ ",
        }
    }
}

/// Renders one terminal line.
pub fn line(tone: Tone, msg: &dyn Display) -> String {
    format!("{}{}", tone.prefix(), msg)
}

/// Prints a message without prefix. Pass `true` to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $crate::libs::messages::macros::line($crate::libs::messages::macros::Tone::Plain, &$msg))
    };
    ($msg:expr, true) => {
        println!("\n{}\n", $crate::libs::messages::macros::line($crate::libs::messages::macros::Tone::Plain, &$msg))
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        println!("{}", $crate::libs::messages::macros::line($crate::libs::messages::macros::Tone::Success, &$msg))
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        println!("{}", $crate::libs::messages::macros::line($crate::libs::messages::macros::Tone::Info, &$msg))
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        println!("{}", $crate::libs::messages::macros::line($crate::libs::messages::macros::Tone::Warning, &$msg))
    };
}

/// Prints an error to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        eprintln!("{}", $crate::libs::messages::macros::line($crate::libs::messages::macros::Tone::Error, &$msg))
    };
}

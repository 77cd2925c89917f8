//! Structured JSON logger
//!
//! Events go to stdout (errors to stderr) and, when a log file has been
//! installed with [`Logger::init_file`], to that file as well. Fields are
//! emitted in deterministic order (event, severity, then keys sorted
//! alphabetically) so runs can be diffed.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Debug = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues (a skipped file, a skipped document)
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();

/// Synchronous structured logger
pub struct Logger;

impl Logger {
    /// Install a log file; subsequent events are appended there in
    /// addition to stdout/stderr. The file is truncated, one run one log.
    ///
    /// Returns an error if the file cannot be created. Calling this twice
    /// keeps the first file.
    pub fn init_file(path: &Path) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let _ = LOG_FILE.set(Mutex::new(file));
        Ok(())
    }

    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);

        if severity >= Severity::Error {
            let _ = io::stderr().write_all(line.as_bytes());
        } else {
            let _ = io::stdout().write_all(line.as_bytes());
        }

        if let Some(file) = LOG_FILE.get() {
            if let Ok(mut file) = file.lock() {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
            }
        }
    }

    /// Render one event as a single JSON line
    ///
    /// Built by hand so key ordering stays deterministic: event first,
    /// severity second, remaining fields sorted alphabetically.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(128);

        out.push_str("{\"event\":\"");
        Self::escape_into(&mut out, event);
        out.push_str("\",\"severity\":\"");
        out.push_str(severity.as_str());
        out.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted {
            out.push_str(",\"");
            Self::escape_into(&mut out, key);
            out.push_str("\":\"");
            Self::escape_into(&mut out, value);
            out.push('"');
        }

        out.push_str("}\n");
        out
    }

    fn escape_into(out: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => out.push(c),
            }
        }
    }

    /// Log at DEBUG level
    pub fn debug(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Debug, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_render_is_valid_json() {
        let line = Logger::render(Severity::Info, "EXPORT_STARTED", &[("archive", "12")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "EXPORT_STARTED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["archive"], "12");
    }

    #[test]
    fn test_render_deterministic_field_order() {
        let a = Logger::render(Severity::Info, "E", &[("zulu", "1"), ("alpha", "2")]);
        let b = Logger::render(Severity::Info, "E", &[("alpha", "2"), ("zulu", "1")]);
        assert_eq!(a, b);
        assert!(a.find("alpha").unwrap() < a.find("zulu").unwrap());
    }

    #[test]
    fn test_render_event_comes_first() {
        let line = Logger::render(Severity::Warn, "A_EVENT", &[("aaa", "x")]);
        assert!(line.find("\"event\"").unwrap() < line.find("\"aaa\"").unwrap());
    }

    #[test]
    fn test_render_escapes_special_chars() {
        let line = Logger::render(Severity::Info, "E", &[("msg", "a \"quoted\"\nline")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["msg"], "a \"quoted\"\nline");
    }

    #[test]
    fn test_render_single_line() {
        let line = Logger::render(Severity::Info, "E", &[("a", "1"), ("b", "2")]);
        assert_eq!(line.chars().filter(|c| *c == '\n').count(), 1);
        assert!(line.ends_with('\n'));
    }
}

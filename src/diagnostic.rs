//! Structured diagnostics
//!
//! Every operation returns the messages it produced instead of printing them.
//! Each entry is also mirrored to `tracing` as a debug event; surfacing them to
//! a user is the caller's job.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Binding name or file path the message is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.key {
            Some(key) => write!(f, "[{}] {}: {}", self.severity, key, self.message),
            None => write!(f, "[{}] {}", self.severity, self.message),
        }
    }
}

/// Ordered list of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, key: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(severity = severity.as_str(), key = key.unwrap_or("-"), "{}", message);
        self.entries.push(Diagnostic {
            severity,
            message,
            key: key.map(str::to_string),
        });
    }

    pub fn info(&mut self, key: &str, message: impl Into<String>) {
        self.push(Severity::Info, Some(key), message);
    }

    pub fn success(&mut self, key: &str, message: impl Into<String>) {
        self.push(Severity::Success, Some(key), message);
    }

    pub fn warning(&mut self, key: &str, message: impl Into<String>) {
        self.push(Severity::Warning, Some(key), message);
    }

    pub fn error(&mut self, key: &str, message: impl Into<String>) {
        self.push(Severity::Error, Some(key), message);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    /// Entries worth showing to a user: everything except progress info
    pub fn reportable(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity != Severity::Info)
    }

    /// Entries about a given key
    pub fn for_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.entries.iter().filter(move |d| d.key.as_deref() == Some(key))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

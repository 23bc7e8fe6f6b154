use crate::diagnostic::{Diagnostic, Diagnostics, Severity};
use crate::output::is_quiet;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::ROCKET, text.style(theme().header.clone()));
}

pub fn status(icon: &str, label: &str, value: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}: {}", icon, label.style(theme().dim.clone()), value);
}

pub fn success(label: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn section(title: &str) {
    if is_quiet() {
        return;
    }
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

pub fn summary_row(label: &str, value: &str) {
    if is_quiet() {
        return;
    }
    println!("  {} {}", label.style(theme().dim.clone()), value);
}

/// Print one diagnostic with its severity icon. Info lines honour quiet mode.
pub fn diagnostic(d: &Diagnostic) {
    let icon = match d.severity {
        Severity::Info => Icons::INFO,
        Severity::Success => Icons::CHECK,
        Severity::Warning => Icons::WARN,
        Severity::Error => Icons::CROSS,
    };
    let key = d.key.as_deref().map(|k| format!("{} ", dim(k))).unwrap_or_default();
    let line = format!("{} {}{}", icon, key, d.message.style(theme().for_severity(d.severity)));

    match d.severity {
        Severity::Warning | Severity::Error => eprintln!("{}", line),
        _ if is_quiet() => {}
        _ => println!("{}", line),
    }
}

/// Print every reportable diagnostic: successes, warnings and errors
pub fn diagnostics(list: &Diagnostics) {
    for d in list.reportable() {
        diagnostic(d);
    }
}

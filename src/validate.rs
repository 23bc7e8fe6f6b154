//! Entry-point validation
//!
//! A combined test script must define every required entry point. A shared base
//! fragment is checked leniently because the per-test file is expected to supply
//! whatever it is missing.

use crate::binding::BindingMap;
use crate::diagnostic::Diagnostics;

/// Entry points required when none are configured
pub const DEFAULT_ENTRY_POINTS: &[&str] = &["main"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Final combined output: a missing entry point is an error
    Strict,
    /// Base fragment library: a missing entry point is a warning
    Lenient,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub passed: bool,
    pub diagnostics: Diagnostics,
    /// Required names that were not defined
    pub missing: Vec<String>,
}

/// Check `functions` for every name in `required`
pub fn validate<S: AsRef<str>>(functions: &BindingMap, required: &[S], mode: ValidationMode) -> ValidationReport {
    let mut report = ValidationReport {
        passed: true,
        ..Default::default()
    };

    for name in required {
        let name = name.as_ref();
        if functions.contains(name) {
            report.diagnostics.success(name, format!("Entry point `{}` found", name));
            continue;
        }

        report.missing.push(name.to_string());
        match mode {
            ValidationMode::Strict => {
                report.diagnostics.error(name, format!("Entry point `{}` not found", name));
                report.passed = false;
            }
            ValidationMode::Lenient => {
                report.diagnostics.warning(name, format!("Entry point `{}` not found in base fragment", name));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Binding, DeclarationForm};
    use crate::diagnostic::Severity;

    fn functions(names: &[&str]) -> BindingMap {
        let mut map = BindingMap::new();
        for name in names {
            map.insert(Binding::function(*name, DeclarationForm::Statement, format!("function {}() {{}}", name)));
        }
        map
    }

    #[test]
    fn test_strict_pass() {
        let report = validate(&functions(&["main", "helper"]), DEFAULT_ENTRY_POINTS, ValidationMode::Strict);
        assert!(report.passed);
        assert_eq!(report.diagnostics.count(Severity::Success), 1);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_strict_missing_fails() {
        let required = ["main", "tearDown", "testEnded"];
        let report = validate(&functions(&["main"]), &required, ValidationMode::Strict);

        assert!(!report.passed);
        assert_eq!(report.missing, vec!["tearDown", "testEnded"]);
        assert_eq!(report.diagnostics.count(Severity::Error), 2);
    }

    #[test]
    fn test_lenient_warns_but_passes() {
        let report = validate(&BindingMap::new(), DEFAULT_ENTRY_POINTS, ValidationMode::Lenient);

        assert!(report.passed);
        assert_eq!(report.missing, vec!["main"]);
        assert_eq!(report.diagnostics.count(Severity::Warning), 1);
        assert!(!report.diagnostics.has_errors());
    }

    #[test]
    fn test_empty_program_fails_strict() {
        let report = validate(&BindingMap::new(), DEFAULT_ENTRY_POINTS, ValidationMode::Strict);
        assert!(!report.passed);
    }
}

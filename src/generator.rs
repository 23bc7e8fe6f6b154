//! Script generation pipeline
//!
//! Merge → validate → emit, once per output target. A script is only written
//! when strict validation passes.

use crate::config::GeneratorConfig;
use crate::diagnostic::Diagnostics;
use crate::emit::write_program;
use crate::merge::{MergeEngine, MergedProgram};
use crate::parser::{SourceParser, TreeSitterParser};
use crate::validate::{validate, ValidationMode, ValidationReport};
use crate::Result;
use std::path::{Path, PathBuf};

/// Result of one generation request
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Whether the output file was written
    pub written: bool,
    /// The file written, if any
    pub output_path: Option<PathBuf>,
    pub program: MergedProgram,
    /// Merge diagnostics followed by validation diagnostics
    pub diagnostics: Diagnostics,
    /// Lenient check of the base fragments, when there were any
    pub base: Option<ValidationReport>,
}

/// Builds `main.js` test scripts from ordered fragment lists
pub struct Generator<P: SourceParser = TreeSitterParser> {
    engine: MergeEngine<P>,
    required: Vec<String>,
}

impl Generator<TreeSitterParser> {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self::with_engine(MergeEngine::new(), config)
    }
}

impl<P: SourceParser> Generator<P> {
    pub fn with_engine(engine: MergeEngine<P>, config: &GeneratorConfig) -> Self {
        Self {
            engine,
            required: config.required_entry_points.clone(),
        }
    }

    pub fn required_entry_points(&self) -> &[String] {
        &self.required
    }

    /// Merge `files`, validate strictly and write the script to `output`
    pub fn generate_main_js<T: AsRef<Path>>(&self, files: &[T], output: &Path) -> Result<GenerateOutcome> {
        let merged = self.engine.combine_files(files)?;
        let report = validate(&merged.program.functions, self.required.as_slice(), ValidationMode::Strict);

        let mut diagnostics = merged.diagnostics;
        diagnostics.extend(report.diagnostics);

        if !report.passed {
            tracing::error!("Validation failed, output file not written");
            return Ok(GenerateOutcome {
                written: false,
                output_path: None,
                program: merged.program,
                diagnostics,
                base: None,
            });
        }

        let path = write_program(&merged.program, output)?;
        Ok(GenerateOutcome {
            written: true,
            output_path: Some(path),
            program: merged.program,
            diagnostics,
            base: None,
        })
    }

    /// Check `base` leniently, then merge it ahead of `files` and generate.
    ///
    /// Later files override base variables; base functions come first.
    pub fn generate_with_base<B: AsRef<Path>, T: AsRef<Path>>(
        &self,
        base: &[B],
        files: &[T],
        output: &Path,
    ) -> Result<GenerateOutcome> {
        let base_report = if base.is_empty() {
            None
        } else {
            Some(self.validate_base(base)?)
        };

        let inputs: Vec<&Path> = base
            .iter()
            .map(|p| AsRef::<Path>::as_ref(p))
            .chain(files.iter().map(|p| AsRef::<Path>::as_ref(p)))
            .collect();
        let mut outcome = self.generate_main_js(inputs.as_slice(), output)?;
        outcome.base = base_report;
        Ok(outcome)
    }

    /// Merge and validate without writing anything
    pub fn check<T: AsRef<Path>>(&self, files: &[T], mode: ValidationMode) -> Result<(MergedProgram, ValidationReport)> {
        let merged = self.engine.combine_files(files)?;
        let mut report = validate(&merged.program.functions, self.required.as_slice(), mode);

        let mut diagnostics = merged.diagnostics;
        diagnostics.extend(report.diagnostics);
        report.diagnostics = diagnostics;

        Ok((merged.program, report))
    }

    /// Validate a shared base fragment library; missing entry points only warn
    pub fn validate_base<T: AsRef<Path>>(&self, files: &[T]) -> Result<ValidationReport> {
        let (_, report) = self.check(files, ValidationMode::Lenient)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    #[test]
    fn test_validation_failure_skips_write() {
        let dir = tempfile::tempdir().unwrap();
        let helpers = dir.path().join("helpers.js");
        std::fs::write(&helpers, "function helper() {}").unwrap();
        let output = dir.path().join("out").join("main.js");

        let outcome = Generator::new(&GeneratorConfig::default())
            .generate_main_js(&[&helpers], &output)
            .unwrap();

        assert!(!outcome.written);
        assert!(outcome.output_path.is_none());
        assert!(!output.exists());
        assert!(outcome.diagnostics.for_key("main").any(|d| d.severity == Severity::Error));
    }

    #[test]
    fn test_base_validation_is_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("hbbtv.js");
        std::fs::write(&base, "var testapi;\nfunction reportStep(id, ok) {}").unwrap();

        let report = Generator::new(&GeneratorConfig::default()).validate_base(&[&base]).unwrap();

        assert!(report.passed);
        assert_eq!(report.missing, vec!["main"]);
    }

    #[test]
    fn test_configured_entry_points() {
        let config = GeneratorConfig {
            required_entry_points: vec!["main".into(), "tearDown".into()],
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.js");
        std::fs::write(&file, "function main() {}").unwrap();

        let generator = Generator::new(&config);
        let (_, report) = generator.check(&[&file], ValidationMode::Strict).unwrap();

        assert_eq!(generator.required_entry_points(), &["main".to_string(), "tearDown".to_string()]);
        assert!(!report.passed);
        assert_eq!(report.missing, vec!["tearDown"]);
    }
}

//! Merge engine
//!
//! Folds the bindings of each input file, in the order given, into one program.
//! Variables and functions follow different rules:
//!
//! | incoming | existing variable | existing function (same form) | existing function (other form) |
//! |----------|-------------------|-------------------------------|--------------------------------|
//! | variable | override          | reject                        | reject                         |
//! | function | reject            | keep first                    | reject                         |
//!
//! A rejected binding is reported and dropped; the existing one is untouched.

use crate::binding::{Binding, BindingMap};
use crate::diagnostic::Diagnostics;
use crate::extract::{extract_bindings, FileBindings};
use crate::parser::{SourceParser, TreeSitterParser};
use crate::{Error, Result};
use std::path::Path;

/// Accumulated bindings for one output script.
///
/// No name is ever a key of both maps.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergedProgram {
    pub variables: BindingMap,
    pub functions: BindingMap,
}

impl MergedProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's bindings into the program
    pub fn absorb(&mut self, bindings: FileBindings, diagnostics: &mut Diagnostics) {
        for incoming in bindings.variables {
            self.absorb_variable(incoming, diagnostics);
        }
        for incoming in bindings.functions {
            self.absorb_function(incoming, diagnostics);
        }
    }

    fn absorb_variable(&mut self, incoming: Binding, diagnostics: &mut Diagnostics) {
        if let Some(existing) = self.functions.get(&incoming.name) {
            diagnostics.error(
                &incoming.name,
                format!(
                    "variable definition `{}` rejected, the name is already a function defined as `{}`",
                    incoming.source_text, existing.source_text
                ),
            );
            return;
        }

        let name = incoming.name.clone();
        let new_text = incoming.source_text.clone();
        if let Some(previous) = self.variables.insert(incoming) {
            diagnostics.warning(
                &name,
                format!("variable definition `{}` overridden by `{}`", previous.source_text, new_text),
            );
        }
    }

    fn absorb_function(&mut self, incoming: Binding, diagnostics: &mut Diagnostics) {
        if let Some(existing) = self.variables.get(&incoming.name) {
            diagnostics.error(
                &incoming.name,
                format!(
                    "function definition `{}` rejected, the name is already a variable defined as `{}`",
                    incoming.source_text, existing.source_text
                ),
            );
            return;
        }

        match self.functions.get(&incoming.name) {
            Some(existing) if existing.kind != incoming.kind => {
                diagnostics.error(
                    &incoming.name,
                    format!(
                        "function already defined as {} but redefined as {}; keeping `{}`, dropping `{}`",
                        existing.kind, incoming.kind, existing.source_text, incoming.source_text
                    ),
                );
            }
            Some(_) => {
                tracing::debug!("function {} redefined with the same form, keeping the first", incoming.name);
            }
            None => {
                self.functions.insert(incoming);
            }
        }
    }
}

/// A merged program and everything reported while building it
#[derive(Debug, Default, Clone)]
pub struct MergeOutcome {
    pub program: MergedProgram,
    pub diagnostics: Diagnostics,
}

/// Combines JavaScript files into a `MergedProgram`
pub struct MergeEngine<P: SourceParser = TreeSitterParser> {
    parser: P,
}

impl MergeEngine<TreeSitterParser> {
    pub fn new() -> Self {
        Self::with_parser(TreeSitterParser::new())
    }
}

impl Default for MergeEngine<TreeSitterParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SourceParser> MergeEngine<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Merge files in the given order.
    ///
    /// A missing file is reported and skipped. Any other read failure, or a
    /// file that fails to parse, aborts the merge.
    pub fn combine_files<T: AsRef<Path>>(&self, paths: &[T]) -> Result<MergeOutcome> {
        let mut outcome = MergeOutcome::default();

        for path in paths {
            let path = path.as_ref();
            let label = path.display().to_string();
            outcome.diagnostics.info(&label, "Processing file");

            let source = match std::fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    outcome.diagnostics.error(&label, format!("Could not load file: {}", e));
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            self.fold_source(&label, &source, &mut outcome)?;
        }

        Ok(outcome)
    }

    /// Merge in-memory `(label, source)` pairs in the given order
    pub fn combine_sources(&self, sources: &[(&str, &str)]) -> Result<MergeOutcome> {
        let mut outcome = MergeOutcome::default();
        for (label, source) in sources {
            outcome.diagnostics.info(label, "Processing source");
            self.fold_source(label, source, &mut outcome)?;
        }
        Ok(outcome)
    }

    fn fold_source(&self, label: &str, source: &str, outcome: &mut MergeOutcome) -> Result<()> {
        let bindings = extract_bindings(&self.parser, source).map_err(|e| match e {
            Error::Parse(message) => Error::Parse(format!("{}: {}", label, message)),
            other => other,
        })?;
        tracing::debug!(
            "{}: {} variables, {} functions",
            label,
            bindings.variables.len(),
            bindings.functions.len()
        );
        outcome.program.absorb(bindings, &mut outcome.diagnostics);
        Ok(())
    }
}

//! Script emission
//!
//! Layout of a written script: every variable statement followed by a blank line,
//! one extra newline when there was at least one variable, then every function
//! followed by a blank line. Both groups keep insertion order.

use crate::merge::MergedProgram;
use crate::Result;
use std::path::{Path, PathBuf};

/// File name used when the output location is a directory
pub const DEFAULT_FILE_NAME: &str = "main.js";

/// Render a merged program as script text
pub fn render(program: &MergedProgram) -> String {
    let mut out = String::new();

    for variable in &program.variables {
        out.push_str(&variable.source_text);
        out.push_str("\n\n");
    }

    if !program.variables.is_empty() {
        out.push('\n');
    }

    for function in &program.functions {
        out.push_str(&function.source_text);
        out.push_str("\n\n");
    }

    out
}

/// Resolve the file to write for an output location.
///
/// An existing directory, or a path spelled with a trailing separator, gets
/// `main.js` appended.
pub fn resolve_output_path(output: &Path) -> PathBuf {
    let spelled_as_dir = output
        .as_os_str()
        .to_str()
        .is_some_and(|s| s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR));

    if output.is_dir() || spelled_as_dir {
        output.join(DEFAULT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

/// Create the parent directory of `path` if it does not exist
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write `program` to `output`, returning the file actually written
pub fn write_program(program: &MergedProgram, output: &Path) -> Result<PathBuf> {
    let path = resolve_output_path(output);
    ensure_parent_dir(&path)?;

    tracing::info!("writing {} variables and {} functions to {}",
        program.variables.len(), program.functions.len(), path.display());
    std::fs::write(&path, render(program))?;
    tracing::info!("finished writing file: {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Binding, DeclarationForm};

    fn program() -> MergedProgram {
        let mut program = MergedProgram::new();
        program.variables.insert(Binding::variable("a", "var a = 1;"));
        program.variables.insert(Binding::variable("b", "let b;"));
        program.functions.insert(Binding::function("main", DeclarationForm::Statement, "function main() {}"));
        program
    }

    #[test]
    fn test_render_layout() {
        assert_eq!(render(&program()), "var a = 1;\n\nlet b;\n\n\nfunction main() {}\n\n");
    }

    #[test]
    fn test_render_without_variables() {
        let mut program = MergedProgram::new();
        program.functions.insert(Binding::function("main", DeclarationForm::Statement, "function main() {}"));
        assert_eq!(render(&program), "function main() {}\n\n");
        assert_eq!(render(&MergedProgram::new()), "");
    }

    #[test]
    fn test_resolve_output_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_output_path(dir.path()), dir.path().join(DEFAULT_FILE_NAME));

        let file = dir.path().join("test.js");
        assert_eq!(resolve_output_path(&file), file);

        let spelled = PathBuf::from(format!("{}/", dir.path().join("new").display()));
        assert_eq!(resolve_output_path(&spelled), dir.path().join("new").join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("hbbtv").join("main.js");

        let written = write_program(&program(), &target).unwrap();

        assert_eq!(written, target);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), render(&program()));
    }
}

//! Binding extraction
//!
//! Classifies the top-level statements of a single file into variable and
//! function bindings. Two declarator rules are kept as they have always behaved:
//!
//! - a plain multi-declarator statement (`var a = 1, b = 2;`) yields a single
//!   variable keyed by its *last* declarator;
//! - a statement with a function-valued declarator yields one function keyed by
//!   the *first* such declarator, and later declarators are not looked at.
//!
//! In both cases the binding's text is the whole statement.

use crate::binding::{Binding, BindingMap, DeclarationForm};
use crate::parser::{InitializerKind, SourceParser, SourceStatement, StatementKind};
use crate::{Error, Result};

/// Variable and function bindings of one file.
///
/// The same name may appear in both maps; that is resolved during merge.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileBindings {
    pub variables: BindingMap,
    pub functions: BindingMap,
}

impl FileBindings {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.functions.is_empty()
    }
}

/// Extract all top-level bindings of `source`
pub fn extract_bindings<P: SourceParser + ?Sized>(parser: &P, source: &str) -> Result<FileBindings> {
    let mut bindings = FileBindings::default();

    for statement in parser.parse(source)? {
        let text = statement_text(&statement, source)?;
        match &statement.kind {
            StatementKind::FunctionDeclaration { name } => {
                tracing::debug!("function declaration: {}", name);
                bindings.functions.insert(Binding::function(name.as_str(), DeclarationForm::Statement, text));
            }
            StatementKind::VariableDeclaration { declarators } => {
                let function_valued = declarators.iter().find(|d| d.init.is_function());
                if let Some(declarator) = function_valued {
                    let form = match declarator.init {
                        InitializerKind::ArrowFunction => DeclarationForm::ArrowFunction,
                        _ => DeclarationForm::FunctionExpression,
                    };
                    tracing::debug!("function {} declared as {}", declarator.name, form);
                    bindings.functions.insert(Binding::function(declarator.name.as_str(), form, text));
                } else if let Some(last) = declarators.last() {
                    tracing::debug!("variable declaration: {}", last.name);
                    bindings.variables.insert(Binding::variable(last.name.as_str(), text));
                }
            }
            StatementKind::Other => {}
        }
    }

    Ok(bindings)
}

fn statement_text<'a>(statement: &SourceStatement, source: &'a str) -> Result<&'a str> {
    source.get(statement.range.clone()).ok_or_else(|| {
        Error::Parse(format!(
            "statement range {}..{} is outside the source text",
            statement.range.start, statement.range.end
        ))
    })
}

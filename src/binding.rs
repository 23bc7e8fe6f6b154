//! Binding types
//!
//! A binding is a named top-level declaration pulled out of one JavaScript file:
//! - `Variable`: a plain `var`/`let`/`const` statement
//! - `Function`: a function declaration, or a declaration whose initializer is a
//!   function or arrow expression

use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// How a function binding was declared.
///
/// Only compared when two files define the same function; never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationForm {
    /// `function name() {}`
    Statement,
    /// `var name = function () {}`
    FunctionExpression,
    /// `var name = () => {}`
    ArrowFunction,
}

impl DeclarationForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationForm::Statement => "statement",
            DeclarationForm::FunctionExpression => "function-expression",
            DeclarationForm::ArrowFunction => "arrow-function",
        }
    }
}

impl std::fmt::Display for DeclarationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Variable or function, with the function's declaration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "form")]
pub enum BindingKind {
    Variable,
    Function(DeclarationForm),
}

impl BindingKind {
    pub fn is_function(&self) -> bool {
        matches!(self, BindingKind::Function(_))
    }

    /// Declaration form of a function binding, `None` for variables
    pub fn form(&self) -> Option<DeclarationForm> {
        match self {
            BindingKind::Variable => None,
            BindingKind::Function(form) => Some(*form),
        }
    }
}

impl std::fmt::Display for BindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingKind::Variable => write!(f, "variable"),
            BindingKind::Function(form) => write!(f, "function ({})", form),
        }
    }
}

/// A named top-level symbol and the exact source text that declares it
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Binding {
    /// Identifier the binding is keyed by
    pub name: String,
    #[serde(flatten)]
    pub kind: BindingKind,
    /// Verbatim slice of the declaring statement
    pub source_text: String,
}

impl Binding {
    pub fn variable(name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BindingKind::Variable,
            source_text: source_text.into(),
        }
    }

    pub fn function(name: impl Into<String>, form: DeclarationForm, source_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BindingKind::Function(form),
            source_text: source_text.into(),
        }
    }
}

/// Name → binding map that remembers insertion order.
///
/// Replacing an existing name keeps the name's original position, so the
/// emitted declaration order only depends on when a name was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingMap {
    entries: Vec<Binding>,
    index: HashMap<String, usize>,
}

impl BindingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Insert or replace by name, returning the replaced binding
    pub fn insert(&mut self, binding: Binding) -> Option<Binding> {
        match self.index.get(&binding.name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i], binding)),
            None => {
                self.index.insert(binding.name.clone(), self.entries.len());
                self.entries.push(binding);
                None
            }
        }
    }

    /// Bindings in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|b| b.name.as_str())
    }
}

impl<'a> IntoIterator for &'a BindingMap {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for BindingMap {
    type Item = Binding;
    type IntoIter = std::vec::IntoIter<Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for BindingMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

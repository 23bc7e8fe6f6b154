//! # Fixturegen - Conformance Test Fixture Generator
//!
//! Builds the executable test script of a conformance fixture from an ordered
//! list of JavaScript fragments.
//!
//! Fixturegen provides:
//! - Tree-sitter based extraction of top-level variable and function bindings
//! - An order-sensitive merge with override and conflict rules
//! - Entry-point validation for base fragments and combined scripts
//! - Deterministic emission of the combined `main.js`

pub mod parser;
pub mod binding;
pub mod diagnostic;
pub mod extract;
pub mod merge;
pub mod validate;
pub mod emit;
pub mod generator;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use binding::{Binding, BindingKind, BindingMap, DeclarationForm};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use extract::{extract_bindings, FileBindings};
pub use merge::{MergeEngine, MergeOutcome, MergedProgram};
pub use parser::{SourceParser, TreeSitterParser};
pub use validate::{validate, ValidationMode, ValidationReport};
pub use generator::{GenerateOutcome, Generator};
pub use config::GeneratorConfig;

/// Result type alias for Fixturegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Fixturegen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Parser error: {0}")]
    Parser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

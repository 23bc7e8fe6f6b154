use crate::binding::BindingMap;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct BindingRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub struct TableBuilder {
    rows: Vec<BindingRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, name: &str, kind: &str, source: &str) {
        self.rows.push(BindingRow {
            name: name.to_string(),
            kind: kind.to_string(),
            source: first_line(source),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Table of bindings, one row per binding, variables first
pub fn binding_table(variables: &BindingMap, functions: &BindingMap) -> String {
    let mut builder = TableBuilder::new();
    for binding in variables.iter().chain(functions.iter()) {
        builder.add_row(&binding.name, &binding.kind.to_string(), &binding.source_text);
    }
    builder.build()
}

fn first_line(source: &str) -> String {
    let mut lines = source.lines();
    let first = lines.next().unwrap_or("").trim_end();
    if lines.next().is_some() {
        format!("{} …", first)
    } else {
        first.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Binding, DeclarationForm};

    #[test]
    fn test_binding_table() {
        let mut variables = BindingMap::new();
        variables.insert(Binding::variable("testapi", "var testapi;"));
        let mut functions = BindingMap::new();
        functions.insert(Binding::function("main", DeclarationForm::Statement, "function main() {\n  run();\n}"));

        let table = binding_table(&variables, &functions);

        assert!(table.contains("testapi"));
        assert!(table.contains("function (statement)"));
        assert!(table.contains("function main() { …"));
        assert!(!table.contains("run();"));
    }

    #[test]
    fn test_empty_table() {
        assert!(binding_table(&BindingMap::new(), &BindingMap::new()).is_empty());
    }
}

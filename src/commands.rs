use fixturegen::config::{load_config, write_config};
use fixturegen::ui::{self, Icons};
use fixturegen::{extract_bindings, Generator, GeneratorConfig, TreeSitterParser, ValidationMode};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

pub fn load(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let config = load_config(Some(path))?.unwrap_or_default();
    tracing::debug!("required entry points: {:?}", config.required_entry_points);
    Ok(config)
}

pub fn run_merge(
    config: &GeneratorConfig,
    files: &[PathBuf],
    output: Option<PathBuf>,
    base: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let Some(output) = config.output_path(output) else {
        anyhow::bail!("no output location (pass --output or set `output` in the config)");
    };
    let base = config.base_paths(base);

    ui::header("Generating test script");
    for path in base.iter().chain(files) {
        ui::status(Icons::FILE, "input", &path.display().to_string());
    }

    let outcome = Generator::new(config).generate_with_base(base.as_slice(), files, &output)?;

    if let Some(report) = &outcome.base {
        ui::section("Base fragments");
        for name in &report.missing {
            ui::status(Icons::WARN, "expected from test files", name);
        }
    }

    ui::section("Combined script");
    ui::diagnostics(&outcome.diagnostics);

    match outcome.output_path {
        Some(path) if outcome.written => {
            ui::summary_row("Variables:", &outcome.program.variables.len().to_string());
            ui::summary_row("Functions:", &outcome.program.functions.len().to_string());
            ui::success(&format!("Wrote {}", path.display()));
            Ok(())
        }
        _ => anyhow::bail!("Validation failed, output file not written"),
    }
}

pub fn run_check(config: &GeneratorConfig, files: &[PathBuf], strict: bool, json: bool) -> anyhow::Result<()> {
    let mode = if strict { ValidationMode::Strict } else { ValidationMode::Lenient };
    let (program, report) = Generator::new(config).check(files, mode)?;

    if json {
        let data = serde_json::json!({
            "passed": report.passed,
            "missing": report.missing,
            "variables": program.variables,
            "functions": program.functions,
            "diagnostics": report.diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        ui::diagnostics(&report.diagnostics);
        ui::summary_row("Variables:", &program.variables.len().to_string());
        ui::summary_row("Functions:", &program.functions.len().to_string());
    }

    if !report.passed {
        anyhow::bail!("Validation failed");
    }
    Ok(())
}

pub fn run_inspect(file: &Path, json: bool) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(file)?;
    let bindings = extract_bindings(&TreeSitterParser::new(), &source)?;

    if json {
        let data = serde_json::json!({
            "file": file.display().to_string(),
            "variables": bindings.variables,
            "functions": bindings.functions,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{} {}", Icons::MAG, file.display().to_string().style(ui::theme().header.clone()));
    if bindings.is_empty() {
        println!("∅ No top-level bindings found.");
    } else {
        println!("{}", ui::binding_table(&bindings.variables, &bindings.functions));
    }
    Ok(())
}

pub fn run_init(path: &Path, force: bool) -> anyhow::Result<()> {
    write_config(path, &GeneratorConfig::default(), force)?;
    ui::success(&format!("Wrote {}", path.display()));
    Ok(())
}

pub fn run_version() -> anyhow::Result<()> {
    println!(
        "{} {} {}",
        Icons::PACKAGE,
        "fixturegen".bold().style(ui::theme().info.clone()),
        env!("CARGO_PKG_VERSION").bold()
    );
    Ok(())
}

use fixturegen::{Generator, GeneratorConfig, Severity};
use std::path::{Path, PathBuf};

const MAIN_JS: &str = r#"function main() {
    reportStep(1, "PASS", "Automatic step completed");
    endTest("PASS", "Test completed with success");
}
"#;

const HBBTV_JS: &str = r#"var testapi = new HbbTVTestAPI();

function reportStep(stepId, result, message) {
    testapi.reportStepResult(stepId, result, message);
}

const endTest = (result, message) => {
    testapi.endTest(result, message);
};
"#;

fn write(dir: &Path, name: &str, source: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, source).unwrap();
    path
}

#[test]
fn test_main_and_platform_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let main = write(dir.path(), "main.js", MAIN_JS);
    let hbbtv = write(dir.path(), "hbbtv.js", HBBTV_JS);
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();

    let outcome = Generator::new(&GeneratorConfig::default())
        .generate_main_js(&[&main, &hbbtv], &out)
        .unwrap();

    assert!(outcome.written);
    let written = out.join("main.js");
    assert_eq!(outcome.output_path.as_deref(), Some(written.as_path()));

    let expected = format!(
        "{}\n\n\n{}\n\n{}\n\n{}\n\n",
        "var testapi = new HbbTVTestAPI();",
        MAIN_JS.trim_end(),
        "function reportStep(stepId, result, message) {\n    testapi.reportStepResult(stepId, result, message);\n}",
        "const endTest = (result, message) => {\n    testapi.endTest(result, message);\n};",
    );
    assert_eq!(std::fs::read_to_string(&written).unwrap(), expected);
    assert!(outcome.diagnostics.for_key("main").any(|d| d.severity == Severity::Success));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let main = write(dir.path(), "main.js", MAIN_JS);
    let hbbtv = write(dir.path(), "hbbtv.js", HBBTV_JS);
    let generator = Generator::new(&GeneratorConfig::default());

    let first = dir.path().join("first.js");
    let second = dir.path().join("second.js");
    generator.generate_main_js(&[&hbbtv, &main], &first).unwrap();
    generator.generate_main_js(&[&hbbtv, &main], &second).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_per_test_file_overrides_base_variable() {
    let dir = tempfile::tempdir().unwrap();
    let base = write(dir.path(), "base.js", "var timeout = 1000;\nvar retries = 3;\n");
    let test = write(dir.path(), "test.js", "var timeout = 5000;\nfunction main() {}\n");
    let output = dir.path().join("nested").join("TEST_001").join("main.js");

    let outcome = Generator::new(&GeneratorConfig::default())
        .generate_main_js(&[&base, &test], &output)
        .unwrap();

    assert!(outcome.written);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "var timeout = 5000;\n\nvar retries = 3;\n\n\nfunction main() {}\n\n"
    );
}

#[test]
fn test_missing_input_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    let main = write(dir.path(), "main.js", MAIN_JS);
    let missing = dir.path().join("w3c.js");
    let output = dir.path().join("main.out.js");

    let outcome = Generator::new(&GeneratorConfig::default())
        .generate_main_js(&[&main, &missing], &output)
        .unwrap();

    assert!(outcome.written);
    assert!(outcome.diagnostics.has_errors());
    assert!(output.exists());
}

#[test]
fn test_zero_files_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("main.js");

    let outcome = Generator::new(&GeneratorConfig::default())
        .generate_main_js::<&Path>(&[], &output)
        .unwrap();

    assert!(!outcome.written);
    assert!(outcome.program.variables.is_empty());
    assert!(outcome.program.functions.is_empty());
    assert!(!output.exists());
}

#[test]
fn test_malformed_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let main = write(dir.path(), "main.js", MAIN_JS);
    let broken = write(dir.path(), "broken.js", "function reportStep( {\n");
    let output = dir.path().join("main.out.js");

    let result = Generator::new(&GeneratorConfig::default()).generate_main_js(&[&main, &broken], &output);

    assert!(matches!(result, Err(fixturegen::Error::Parse(_))));
    assert!(!output.exists());
}

#[test]
fn test_base_fragment_ahead_of_test_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = write(dir.path(), "hbbtv.js", "var timeout = 1000;\nfunction reportStep(id, ok) {}\n");
    let test = write(dir.path(), "main.js", "var timeout = 5000;\nfunction main() {}\n");
    let out = dir.path().join("out").join("TEST_001").join("main.js");

    let outcome = Generator::new(&GeneratorConfig::default())
        .generate_with_base(&[&base], &[&test], &out)
        .unwrap();

    let base_report = outcome.base.as_ref().unwrap();
    assert!(base_report.passed);
    assert_eq!(base_report.missing, vec!["main"]);
    assert!(!base_report.diagnostics.has_errors());
    assert!(base_report.diagnostics.for_key("main").any(|d| d.severity == Severity::Warning));

    assert!(outcome.written);
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "var timeout = 5000;\n\n\nfunction reportStep(id, ok) {}\n\nfunction main() {}\n\n"
    );
}

#[test]
fn test_no_base_fragments() {
    let dir = tempfile::tempdir().unwrap();
    let test = write(dir.path(), "main.js", MAIN_JS);
    let out = dir.path().join("main.out.js");

    let outcome = Generator::new(&GeneratorConfig::default())
        .generate_with_base::<&Path, _>(&[], &[&test], &out)
        .unwrap();

    assert!(outcome.base.is_none());
    assert!(outcome.written);
}

#[test]
fn test_base_and_test_file_both_missing_main() {
    let dir = tempfile::tempdir().unwrap();
    let base = write(dir.path(), "hbbtv.js", HBBTV_JS);
    let test = write(dir.path(), "helpers.js", "function helper() {}\n");
    let out = dir.path().join("main.out.js");

    let outcome = Generator::new(&GeneratorConfig::default())
        .generate_with_base(&[&base], &[&test], &out)
        .unwrap();

    assert!(outcome.base.as_ref().unwrap().passed);
    assert!(!outcome.written);
    assert!(!out.exists());
}

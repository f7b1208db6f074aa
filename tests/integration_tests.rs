//! Integration tests for end-to-end compilation.
//!
//! These tests drive the complete pipeline from source text through
//! tokenization, parsing, type checking, folding and CSS generation, both
//! through the library API and through the `icss` binary.

use std::{fs, io::Write, process::Command};

use icss::{
    check, compile,
    errors::errors::{CompileError, SemanticError},
    render_diagnostics,
};
use tempfile::{tempdir, NamedTempFile};

const STYLESHEET: &str = "
// Global settings
LinkColor := #ff0000;
ParWidth := 500px;
AdjustColor := TRUE;
UseLinkColor := FALSE;

p {
    background-color: #ffffff;
    width: ParWidth;
    if [AdjustColor] {
        color: #124532;
        if [UseLinkColor] {
            background-color: LinkColor;
        }
    }
}

a {
    color: LinkColor;
}

#menu {
    width: ParWidth + 2 * 10px;
}

.menu {
    Padding := 10%;
    height: 100% - Padding * 2;
}
";

#[test]
fn test_compile_stylesheet() {
    let css = compile(STYLESHEET, "level.icss").unwrap();

    let expected = "\
p {
  background-color: #ffffff;
  width: 500px;
  color: #124532;
}

a {
  color: #ff0000;
}

#menu {
  width: 520px;
}

.menu {
  height: 80%;
}
";
    assert_eq!(css, expected);
}

#[test]
fn test_check_reports_all_errors() {
    let source = "
        Flag := TRUE;
        a { color: 5px; width: Missing; }
        p { Local := TRUE; if [Local] { height: 10px + 5%; } }
    ";
    let (_, diagnostics) = check(source, "broken.icss").unwrap();

    let names: Vec<&str> = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.error.get_error_name())
        .collect();
    assert_eq!(
        names,
        vec![
            "InvalidColorValue",
            "UndefinedVariable",
            "InvalidConditionType",
            "InvalidOperands",
        ]
    );
}

#[test]
fn test_compile_stops_on_semantic_errors() {
    let result = compile("a { color: 5px; }", "bad.icss");

    match result {
        Err(CompileError::Semantic(diagnostics)) => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(
                diagnostics[0].error,
                SemanticError::InvalidColorValue {
                    property: "color".to_string()
                }
            );
        }
        other => panic!("expected semantic errors, found {:?}", other),
    }
}

#[test]
fn test_compile_reports_syntax_errors() {
    let result = compile("a { width 10px; }", "syntax.icss");

    assert!(matches!(result, Err(CompileError::Syntax(_))));
}

#[test]
fn test_render_diagnostics() {
    let source = "a {\n  width: Missing;\n}\n";
    let (_, diagnostics) = check(source, "render.icss").unwrap();

    let rendered = render_diagnostics(&diagnostics, source);
    assert!(rendered.starts_with("Error: UndefinedVariable ("));
    assert!(rendered.contains("-> render.icss"));
    assert!(rendered.contains("2 | width: Missing;"));
}

#[test]
fn test_binary_compiles_to_output_file() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "Size := 4px; a {{ width: Size * 3; }}").unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("out.css");

    let status = Command::new(env!("CARGO_BIN_EXE_icss"))
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "a {\n  width: 12px;\n}\n");
}

#[test]
fn test_binary_check_fails_on_errors() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "a {{ color: 10px; }}").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_icss"))
        .arg("--check")
        .arg(input.path())
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("InvalidColorValue"));
}

#[test]
fn test_binary_missing_file() {
    let dir = tempdir().unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_icss"))
        .arg(dir.path().join("missing.icss"))
        .status()
        .unwrap();

    assert!(!status.success());
}

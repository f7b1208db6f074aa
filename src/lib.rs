#![allow(clippy::module_inception)]

use std::{rc::Rc, time::Instant};

use log::{debug, info, warn};

use crate::{
    ast::statements::Stylesheet,
    errors::errors::{CompileError, Diagnostic, Error, ErrorTip},
    evaluator::evaluator::evaluate,
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Tokenizes and parses `source` into a stylesheet.
pub fn parse_source(source: &str, file_name: &str) -> Result<Stylesheet, Error> {
    let start = Instant::now();
    let tokens = tokenize(source.to_string(), Some(String::from(file_name)))?;
    info!("Tokenized {} in {:?}", file_name, start.elapsed());

    let parse_start = Instant::now();
    let (_, stylesheet) = parse(tokens, Rc::new(String::from(file_name)));
    let stylesheet = stylesheet?;
    info!("Parsed {} in {:?}", file_name, parse_start.elapsed());

    Ok(stylesheet)
}

/// Parses and type checks `source`, returning the parsed stylesheet together
/// with every diagnostic the checker attached to it.
pub fn check(source: &str, file_name: &str) -> Result<(Stylesheet, Vec<Diagnostic>), Error> {
    let mut stylesheet = parse_source(source, file_name)?;

    let type_check_start = Instant::now();
    let diagnostics = type_check(&mut stylesheet);
    info!("Type checked {} in {:?}", file_name, type_check_start.elapsed());

    if !diagnostics.is_empty() {
        warn!("{} reported {} semantic error(s)", file_name, diagnostics.len());
    }

    Ok((stylesheet, diagnostics))
}

/// Runs the whole pipeline: parse, type check, fold and generate CSS.
///
/// Folding only runs when the checker attached no errors; otherwise every
/// diagnostic is returned in traversal order.
pub fn compile(source: &str, file_name: &str) -> Result<String, CompileError> {
    let start = Instant::now();
    let (mut stylesheet, diagnostics) = check(source, file_name).map_err(CompileError::Syntax)?;

    if !diagnostics.is_empty() {
        return Err(CompileError::Semantic(diagnostics));
    }

    let evaluate_start = Instant::now();
    evaluate(&mut stylesheet).map_err(CompileError::Evaluation)?;
    info!("Evaluated expressions in {:?}", evaluate_start.elapsed());

    let css = generate(&stylesheet).map_err(CompileError::Evaluation)?;
    debug!("Generated {} bytes of css", css.len());
    info!("Total time for {}: {:?}", file_name, start.elapsed());

    Ok(css)
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the one-based line number, the line text and the offset of
/// `position` within that line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last_line = Some((line_number, line, start));
        start = end;
        line_number += 1;
    }

    // End of input belongs to the last line
    match last_line {
        Some((number, line, line_start)) if pos == content.len() => {
            Some((number, line.to_string(), pos - line_start))
        }
        _ => None,
    }
}

/// Formats an error against the source it came from.
///
/// ```text
/// Error: UndefinedVariable (Variable `Width` is not assigned in this rule or globally)
/// -> style.icss
///    |
///  4 | width: Width;
///    | -------^
/// ```
pub fn render_error(name: &str, tip: &ErrorTip, position: &Position, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = tip {
        out.push_str(&format!("Error: {}\n", name));
    } else {
        out.push_str(&format!("Error: {} ({})\n", name, tip));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Formats every semantic diagnostic against `source`, in order.
pub fn render_diagnostics(diagnostics: &[Diagnostic], source: &str) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| {
            render_error(
                diagnostic.error.get_error_name(),
                &diagnostic.error.get_tip(),
                &diagnostic.span.start,
                source,
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{errors::errors::ErrorTip, Position};

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\na {\n  width: 10px;\n}\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 20).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "  width: 10px;\n");
        assert_eq!(line_pos, 2);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("a {}", 40).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let content = "a {\n  width: 10px;\n";

        let (line_number, line, line_pos) =
            super::get_line_at_position(content, content.len() as u32).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "  width: 10px;\n");
        assert_eq!(line_pos, 15);
    }

    #[test]
    fn test_render_error_at_end_of_input() {
        let source = "a {\n  width: 10px;";
        let error = super::parse_source(source, "eof.icss").err().unwrap();
        assert_eq!(error.get_position().0 as usize, source.len());

        let rendered =
            super::render_error(error.get_error_name(), &error.get_tip(), error.get_position(), source);
        assert!(rendered.contains("2 | width: 10px;"));
        assert!(rendered.contains("^"));
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "a {\n  color: 5px;\n}\n";
        let rendered = super::render_error(
            "InvalidColorValue",
            &ErrorTip::None,
            &Position(6, Rc::new(String::from("style.icss"))),
            source,
        );

        assert!(rendered.starts_with("Error: InvalidColorValue\n-> style.icss\n"));
        assert!(rendered.contains("2 | color: 5px;"));
        assert!(rendered.contains("| ^"));
    }
}

//! Error rendering using ariadne
//!
//! Parse errors point at the offending character in the program text.
//! Evaluation errors have no location and render as a short plain report.

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use debruijn::{Interpreter, Options, render_error};
///
/// let interpreter = Interpreter::new(Options::default());
/// if let Err(e) = interpreter.run("+ 1 x") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, logs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// One-line form of an error: `error: <message>`.
pub fn format_error(error: &Error) -> String {
    format!("error: {}", error)
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diag = error.to_diagnostic();
    match error {
        Error::Parse(e) => render_with_source(&e.input, &diag, writer, use_color),
        Error::Eval(_) => render_plain(&diag, writer),
    }
}

fn render_with_source(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(span) = &diag.span else {
        return render_plain(diag, writer);
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // Spans are byte offsets; non-ASCII input would be misplaced otherwise
    let config = ariadne::Config::default()
        .with_color(use_color)
        .with_index_type(IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.0.clone()))
        .with_message(&diag.message)
        .with_code(&diag.code)
        .with_config(config)
        .with_label(
            Label::new((SOURCE_ID, span.0.clone()))
                .with_message(&diag.message)
                .with_color(colors.next()),
        );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

fn render_plain(diag: &Diagnostic, writer: &mut dyn Write) -> std::io::Result<()> {
    writeln!(writer, "Error[{}]: {}", diag.code, diag.message)?;
    if let Some(help) = &diag.help {
        writeln!(writer, "Help: {}", help)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Interpreter, Options};

    fn run_err(source: &str) -> Error {
        Interpreter::new(Options::default())
            .run(source)
            .expect_err("program should fail")
    }

    #[test]
    fn test_render_parse_error() {
        let output = render_error_to_string_no_color(&run_err("+ 1 x"));

        assert!(output.contains("Error"));
        assert!(output.contains("P002"));
        // Should show the source
        assert!(output.contains("+ 1 x"));
        assert!(output.contains("unexpected character 'x'"));
    }

    #[test]
    fn test_render_parse_error_non_ascii() {
        let output = render_error_to_string_no_color(&run_err("@ λ 1"));
        assert!(output.contains("@ λ 1"));
        assert!(output.contains("'λ'"));
    }

    #[test]
    fn test_render_eval_error() {
        let output = render_error_to_string_no_color(&run_err("@ 3 4"));
        assert_eq!(
            output,
            "Error[E002]: type mismatch in application: expected a closure, found a number\n"
        );
    }

    #[test]
    fn test_render_eval_error_with_help() {
        let interpreter = Interpreter::new(Options {
            evaluator: crate::EvaluatorOptions { max_depth: 50 },
            ..Options::default()
        });
        let err = interpreter.run("@ \\ @ $0 $0 \\ @ $0 $0").unwrap_err();
        let output = render_error_to_string_no_color(&err);
        assert!(output.starts_with("Error[E003]: evaluation depth exceeds maximum of 50\n"));
        assert!(output.contains("Help: "));
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let output = render_error_to_string_no_color(&run_err("+ 1"));

        assert!(!output.is_empty());
        // Should be multi-line (ariadne adds formatting)
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_render_to_writer() {
        let mut buf = Vec::new();
        render_error_to(&run_err("$0"), &mut buf).unwrap();
        assert!(String::from_utf8_lossy(&buf).contains("E001"));
    }

    #[test]
    fn test_format_error() {
        assert_eq!(
            format_error(&run_err("$3")),
            "error: unbound variable $3: 0 binding(s) in scope"
        );
        assert_eq!(
            format_error(&run_err("")),
            "error: unexpected end of input, expected a term at offset 0"
        );
    }
}

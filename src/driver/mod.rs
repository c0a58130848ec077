//! Wires the lexer, parser, normalizer, and CSE machine into the CLI
//! contract (spec §6): lex, parse, optionally normalize and evaluate, and
//! report the first error from whichever stage produced it.
//!
//! Kept free of `ariadne` and of any knowledge of stdout/stderr: this
//! module is the pure pipeline core, usable from the `myrpal` binary and
//! directly from integration tests alike, mirroring the teacher's
//! separation between `driver` (pipeline orchestration) and
//! `diagnostics` (rendering).

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::ast::print_tree;
use crate::cse::{self, EvaluationError};
use crate::lexer::{LexError, Lexer};
use crate::normalizer::{self, NormalizationError};
use crate::parser::{ParseError, Parser};
use crate::token::Span;

/// Which of the CLI's output modes (spec §6) to run the pipeline under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No flag: evaluate and let the program's own `Print` calls produce
    /// the output; the implicit top-level result is not separately
    /// echoed.
    Evaluate,
    /// `-ast`: print the parsed AST in dot-indented form, without
    /// normalizing or evaluating.
    Ast,
    /// `-sast`: normalize and print the standardized tree in
    /// dot-indented form, without evaluating.
    Sast,
    /// `-pretty`: evaluate with `Print` rendering tuples sorted and flat
    /// rather than in raw form.
    Pretty,
}

/// The first error encountered by any pipeline stage.
#[derive(Debug)]
pub enum PipelineError {
    Lex(LexError),
    Parse(ParseError),
    Normalize(NormalizationError),
    Evaluate(EvaluationError),
}

impl PipelineError {
    /// The stage name used in the CLI's stderr diagnostic (spec §7).
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Lex(_) => "lexer",
            PipelineError::Parse(_) => "parser",
            PipelineError::Normalize(_) => "normalizer",
            PipelineError::Evaluate(_) => "evaluator",
        }
    }

    /// The source span of the error, when the stage tracked one. The CSE
    /// machine never carries one (the ST has no source spans, spec §7);
    /// a normalization error only has one when it was raised over a node
    /// the parser directly produced.
    pub fn span(&self) -> Option<Span> {
        match self {
            PipelineError::Lex(e) => Some(e.span),
            PipelineError::Parse(e) => Some(e.span),
            PipelineError::Normalize(e) => e.span,
            PipelineError::Evaluate(_) => None,
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Lex(e) => write!(f, "{e}"),
            PipelineError::Parse(e) => write!(f, "{e}"),
            PipelineError::Normalize(e) => write!(f, "{e}"),
            PipelineError::Evaluate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<LexError> for PipelineError {
    fn from(e: LexError) -> Self {
        PipelineError::Lex(e)
    }
}

impl From<ParseError> for PipelineError {
    fn from(e: ParseError) -> Self {
        PipelineError::Parse(e)
    }
}

impl From<NormalizationError> for PipelineError {
    fn from(e: NormalizationError) -> Self {
        PipelineError::Normalize(e)
    }
}

impl From<EvaluationError> for PipelineError {
    fn from(e: EvaluationError) -> Self {
        PipelineError::Evaluate(e)
    }
}

/// Runs the full pipeline over in-memory `source` under `mode`, writing
/// any successful output to `out`. This is the file-system-free core
/// both the CLI and the integration tests call.
///
/// # Errors
///
/// Returns the first [`PipelineError`] raised by the lexer, parser,
/// normalizer, or CSE machine.
pub fn run_to_string(source: &str, mode: Mode, out: &mut dyn Write) -> Result<(), PipelineError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;
    let mut parser = Parser::new(tokens);
    let ast = parser.parse()?;

    if mode == Mode::Ast {
        write_all(out, &print_tree(&ast));
        return Ok(());
    }

    let st = normalizer::normalize(ast)?;

    if mode == Mode::Sast {
        write_all(out, &print_tree(&st));
        return Ok(());
    }

    cse::evaluate(&st, out, mode == Mode::Pretty)?;
    Ok(())
}

fn write_all(out: &mut dyn Write, text: &str) {
    out.write_all(text.as_bytes())
        .expect("writing to the output sink should not fail");
}

/// A [`PipelineError`] together with the file name and source text it
/// occurred in, so a diagnostic renderer can show the offending line.
pub struct PipelineErrorWithContext {
    pub filename: String,
    pub source: String,
    pub error: PipelineError,
}

/// Any failure [`run`] can report: either the source file could not be
/// read, or the pipeline itself failed partway through.
pub enum RunError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Pipeline(Box<PipelineErrorWithContext>),
}

/// Reads `path`, runs the pipeline under `mode`, and writes output to
/// `out`.
///
/// # Errors
///
/// Returns [`RunError::Io`] if `path` cannot be read, or
/// [`RunError::Pipeline`] on the first stage failure.
pub fn run(path: &Path, mode: Mode, out: &mut dyn Write) -> Result<(), RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.display().to_string(),
        source,
    })?;

    run_to_string(&source, mode, out).map_err(|error| {
        RunError::Pipeline(Box::new(PipelineErrorWithContext {
            filename: path.display().to_string(),
            source,
            error,
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(source: &str) -> String {
        let mut out = Vec::new();
        run_to_string(source, Mode::Evaluate, &mut out).expect("pipeline should succeed");
        String::from_utf8(out).expect("Print only ever writes UTF-8")
    }

    #[test]
    fn evaluate_mode_runs_print_side_effects_only() {
        assert_eq!(evaluate("Print (1 + 2)"), "3");
    }

    #[test]
    fn ast_mode_prints_the_dot_indented_ast_without_evaluating() {
        let mut out = Vec::new();
        run_to_string("let x = 1 in x", Mode::Ast, &mut out).expect("pipeline should succeed");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "let\n.=\n..<ID:x>\n..<INT:1>\n.<ID:x>\n"
        );
    }

    #[test]
    fn sast_mode_prints_the_normalized_tree() {
        let mut out = Vec::new();
        run_to_string("let x = 1 in x", Mode::Sast, &mut out).expect("pipeline should succeed");
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.starts_with("gamma\n.lambda\n"), "got: {rendered}");
    }

    #[test]
    fn pretty_mode_makes_print_sort_uniform_tuples() {
        let mut out = Vec::new();
        run_to_string("Print (3, 1, 2)", Mode::Pretty, &mut out).expect("pipeline should succeed");
        assert_eq!(String::from_utf8(out).unwrap(), "1, 2, 3");
    }

    #[test]
    fn lex_error_surfaces_as_pipeline_error_with_stage_lexer() {
        let mut out = Vec::new();
        let err = run_to_string("let x = `", Mode::Evaluate, &mut out).unwrap_err();
        assert_eq!(err.stage(), "lexer");
    }

    #[test]
    fn parse_error_surfaces_as_pipeline_error_with_stage_parser() {
        let mut out = Vec::new();
        let err = run_to_string("let x = 1 x", Mode::Evaluate, &mut out).unwrap_err();
        assert_eq!(err.stage(), "parser");
    }

    #[test]
    fn evaluation_error_surfaces_with_stage_evaluator_and_no_span() {
        let mut out = Vec::new();
        let err = run_to_string("1 / 0", Mode::Evaluate, &mut out).unwrap_err();
        assert_eq!(err.stage(), "evaluator");
        assert!(err.span().is_none());
    }

    #[test]
    fn io_error_is_reported_distinctly_from_a_pipeline_error() {
        let mut out = Vec::new();
        let result = run(
            Path::new("/nonexistent/path/does/not/exist.rpal"),
            Mode::Evaluate,
            &mut out,
        );
        assert!(matches!(result, Err(RunError::Io { .. })));
    }
}

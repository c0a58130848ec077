//! Renders a [`driver::RunError`] to stderr: a rich `ariadne` report when
//! the failing stage carried a source span, a plain line otherwise (the
//! CSE machine never does, since the standardized tree carries no source
//! spans).

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use myrpal::driver::{PipelineErrorWithContext, RunError};
use myrpal::token::Span;

fn print_span_report(filename: &str, source: &str, span: Span, message: &str) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span.start..span.end))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span.start..span.end))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn report_pipeline_error(ctx: &PipelineErrorWithContext) {
    let PipelineErrorWithContext {
        filename,
        source,
        error,
    } = ctx;
    let message = format!("{}: {error}", error.stage());

    match error.span() {
        Some(span) => {
            if let Err(report_err) = print_span_report(filename, source, span, &message) {
                eprintln!("{filename}:{}: {message}", span.line);
                eprintln!("(failed to render detailed report: {report_err})");
            }
        }
        None => eprintln!("{filename}: {message}"),
    }
}

/// Writes a one-shot diagnostic for `error` to stderr, matching the CLI's
/// "single-line diagnostic naming the stage and, when available, the
/// line" contract.
pub fn report(error: &RunError) {
    match error {
        RunError::Io { path, source } => {
            eprintln!("{path}: {source}");
        }
        RunError::Pipeline(ctx) => report_pipeline_error(ctx),
    }
}

//! End-to-end pipeline tests, driven through `driver::run_to_string`
//! rather than the `myrpal` binary, exercising the scenarios named by the
//! language specification.

use std::io::Write as _;

use myrpal::driver::{self, Mode};

fn evaluate(source: &str) -> String {
    let mut out = Vec::new();
    driver::run_to_string(source, Mode::Evaluate, &mut out).expect("pipeline should succeed");
    String::from_utf8(out).expect("Print only ever writes UTF-8")
}

fn evaluate_pretty(source: &str) -> String {
    let mut out = Vec::new();
    driver::run_to_string(source, Mode::Pretty, &mut out).expect("pipeline should succeed");
    String::from_utf8(out).expect("Print only ever writes UTF-8")
}

fn ast(source: &str) -> String {
    let mut out = Vec::new();
    driver::run_to_string(source, Mode::Ast, &mut out).expect("pipeline should succeed");
    String::from_utf8(out).expect("print_tree only ever writes UTF-8")
}

#[test]
fn scenario_1_let_addition_prints_eight() {
    assert_eq!(evaluate("Print (let x = 5 in x + 3)"), "8");
}

#[test]
fn scenario_2_recursive_factorial_of_five_is_120() {
    let source = "Print (let rec f n = n eq 0 -> 1 | n * f (n-1) in f 5)";
    assert_eq!(evaluate(source), "120");
}

#[test]
fn scenario_5_tuple_augmentation_produces_a_four_tuple() {
    assert_eq!(evaluate("Print ((1,2,3) aug 4)"), "(1, 2, 3, 4)");
}

#[test]
fn scenario_6_ast_mode_prints_the_exact_dot_indented_tree() {
    let expected = "let\n.=\n..<ID:x>\n..<INT:1>\n.<ID:x>\n";
    assert_eq!(ast("let x = 1 in x"), expected);
}

#[test]
fn fibonacci_via_rec_matches_the_closed_form() {
    let source =
        "Print (let rec fib n = n eq 0 -> 0 | n eq 1 -> 1 | fib (n-1) + fib (n-2) in fib 10)";
    assert_eq!(evaluate(source), "55");
}

#[test]
fn aug_nil_yields_a_one_tuple_and_order_tracks_its_growth() {
    assert_eq!(evaluate("Print (Order (nil aug 1 aug 2))"), "2");
}

#[test]
fn stem_and_stern_concatenate_back_to_the_original_string() {
    assert_eq!(evaluate("Print (Conc (Stem 'rpal') (Stern 'rpal'))"), "rpal");
}

#[test]
fn pretty_mode_sorts_uniform_integer_tuples_but_not_mixed_ones() {
    assert_eq!(evaluate_pretty("Print (3, 1, 2)"), "1, 2, 3");
    assert_eq!(evaluate_pretty("Print (2, 'a', 1)"), "2, a, 1");
}

#[test]
fn where_clause_desugars_the_same_as_an_equivalent_let() {
    assert_eq!(evaluate("Print (x + 1 where x = 41)"), "42");
}

#[test]
fn tuple_indexing_is_one_based_and_out_of_range_is_an_evaluation_error() {
    assert_eq!(evaluate("Print ((10, 20, 30) 2)"), "20");

    let mut out = Vec::new();
    let err = driver::run_to_string("(1, 2) 5", Mode::Evaluate, &mut out).unwrap_err();
    assert_eq!(err.stage(), "evaluator");
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn lexical_error_is_tagged_with_the_lexer_stage_and_a_span() {
    let mut out = Vec::new();
    let err = driver::run_to_string("let x = `", Mode::Evaluate, &mut out).unwrap_err();
    assert_eq!(err.stage(), "lexer");
    assert!(err.span().is_some());
}

#[test]
fn parse_error_is_tagged_with_the_parser_stage_and_a_span() {
    let mut out = Vec::new();
    let err = driver::run_to_string("let x = 1 x", Mode::Evaluate, &mut out).unwrap_err();
    assert_eq!(err.stage(), "parser");
    assert!(err.span().is_some());
}

#[test]
fn rec_and_and_bindings_normalize_and_evaluate_without_error() {
    // `rec`/`and` always receive an `=`-shaped child from the grammar, so
    // the normalizer's shape checks on those nodes are unreachable from
    // valid source; this exercises the rewrite path instead.
    assert_eq!(evaluate("Print (let rec f = f in 1)"), "1");
}

#[test]
fn sast_mode_prints_the_normalized_tree_without_evaluating() {
    let rendered = {
        let mut out = Vec::new();
        driver::run_to_string("let x = 1 in x", Mode::Sast, &mut out)
            .expect("pipeline should succeed");
        String::from_utf8(out).unwrap()
    };
    assert!(rendered.starts_with("gamma\n.lambda\n"));
    assert!(rendered.contains("<ID:x>"));
}

#[test]
fn run_reads_a_source_file_from_disk_and_evaluates_it() {
    let mut file = tempfile::NamedTempFile::new().expect("should create a temp file");
    write!(file, "Print (let x = 5 in x + 3)").expect("should write to the temp file");

    let mut out = Vec::new();
    driver::run(file.path(), Mode::Evaluate, &mut out).expect("pipeline should succeed");
    assert_eq!(String::from_utf8(out).unwrap(), "8");
}

#[test]
fn run_reports_an_io_error_for_a_missing_file() {
    let mut out = Vec::new();
    let err = driver::run(
        std::path::Path::new("/nonexistent/does/not/exist.rpal"),
        Mode::Evaluate,
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, driver::RunError::Io { .. }));
}

#[test]
fn evaluate_mode_does_not_echo_the_implicit_top_level_value() {
    // `1 + 1` has no `Print` call, so evaluate mode produces no output
    // even though the program does have a value.
    assert_eq!(evaluate("1 + 1"), "");
}

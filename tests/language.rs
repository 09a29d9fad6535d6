use std::fs;

use treelox::{
    error::Diagnostic,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{TokenKind, scan},
        parser::{core::MAX_NESTING, parse},
    },
    run, run_to_string,
};
use walkdir::WalkDir;

#[test]
fn script_files_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let (output, diagnostics) = run_to_string(&source).unwrap();
        assert!(diagnostics.is_empty(),
                "Script {path:?} produced diagnostics: {diagnostics:?}");
        assert_eq!(output, expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_output(src: &str, expected: &str) {
    let (output, diagnostics) = run_to_string(src).unwrap();
    assert!(diagnostics.is_empty(), "Script failed: {diagnostics:?}");
    assert_eq!(output, expected);
}

fn diagnostics_of(src: &str) -> (String, Vec<String>) {
    let (output, diagnostics) = run_to_string(src).unwrap();
    (output, diagnostics.iter().map(ToString::to_string).collect())
}

#[test]
fn scanning_a_simple_sum() {
    let (tokens, errors) = scan("1 + 2");
    assert!(errors.is_empty());

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]);
    assert!(tokens.iter().all(|t| t.line == 1));
}

#[test]
fn variables_and_arithmetic() {
    assert_output("var x = 3; x = x + 1; print x;", "4\n");
    assert_output("print 1 + 2 * 3;", "7\n");
    assert_output("print (1 + 2) * 3;", "9\n");
    assert_output("print 10 / 4;", "2.5\n");
    assert_output("print -(3 - 5);", "2\n");
}

#[test]
fn exponent_precedence() {
    assert_output("print 2 + 3 ** 2;", "11\n");
    assert_output("print 2 ** 3 ** 2;", "64\n");
}

#[test]
fn block_scoping_and_shadowing() {
    assert_output("var a = 1; { var a = 2; print a; } print a;", "2\n1\n");
    assert_output("var a = 1; { a = 2; } print a;", "2\n");
    assert_output("{ var inner = 1; } var inner = 2; print inner;", "2\n");
}

#[test]
fn while_loop_counts() {
    assert_output("var i = 0; while (i < 3) { print i; i = i + 1; }", "0\n1\n2\n");
    assert_output("while (false) print 1;", "");
}

#[test]
fn assignment_is_an_expression() {
    assert_output("var x; print (x = 5);", "5\n");
    assert_output("var a; var b; a = b = 2; print a; print b;", "2\n2\n");
}

#[test]
fn values_print_in_their_canonical_form() {
    assert_output("print nil; print true; print false;", "nil\ntrue\nfalse\n");
    assert_output("print \"hello\" + \" \" + \"world\";", "hello world\n");
    assert_output("var unset; print unset;", "nil\n");
}

#[test]
fn truthiness_and_equality() {
    assert_output("print !nil; print !0; print !\"\"; print !1;", "true\ntrue\ntrue\nfalse\n");
    assert_output("print 1 == 1; print \"a\" != \"a\"; print nil == false;",
                  "true\nfalse\nfalse\n");
}

#[test]
fn executing_the_same_program_twice_is_idempotent() {
    let (tokens, _) = scan("var a = 1; { var a = a + 1; print a; } print a;");
    let (statements, errors) = parse(&tokens);
    assert!(errors.is_empty());

    let mut first = Interpreter::new(Vec::new());
    first.interpret(&statements).unwrap();
    let mut second = Interpreter::new(Vec::new());
    second.interpret(&statements).unwrap();

    assert_eq!(first.output(), b"2\n1\n");
    assert_eq!(first.output(), second.output());
}

#[test]
fn globals_persist_across_runs() {
    let mut interpreter = Interpreter::new(Vec::new());
    run("var count = 1;", &mut interpreter).unwrap();
    run("count = count + 1;", &mut interpreter).unwrap();
    run("print count;", &mut interpreter).unwrap();

    assert_eq!(interpreter.output(), b"2\n");
    assert_eq!(interpreter.environment().depth(), 1);
}

#[test]
fn syntax_errors_prevent_execution() {
    let (output, diagnostics) = diagnostics_of("print 1;\nprint 2");
    assert_eq!(output, "");
    assert_eq!(diagnostics,
               ["error on line 2 at \"\": Expected ';' after value."]);
}

#[test]
fn scan_errors_prevent_execution() {
    let (output, diagnostics) = run_to_string("print 1; @").unwrap();
    assert_eq!(output, "");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(diagnostics[0], Diagnostic::Scan(_)));
    assert!(diagnostics[0].is_static());
}

#[test]
fn unterminated_string_is_reported() {
    let (output, diagnostics) = run_to_string("print \"open;\n").unwrap();
    assert_eq!(output, "");
    assert!(diagnostics.iter().any(|d| matches!(d, Diagnostic::Scan(_))));
}

#[test]
fn parser_recovers_from_stray_tokens() {
    let (_, diagnostics) = diagnostics_of(") print 1;");
    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics[0],
               "error on line 1 at \")\": Expected expression.");
}

#[test]
fn invalid_assignment_target_is_a_parse_error() {
    let (output, diagnostics) = diagnostics_of("var a = 1; 1 = a;");
    assert_eq!(output, "");
    assert_eq!(diagnostics,
               ["error on line 1 at \"=\": Invalid assignment target."]);
}

#[test]
fn runtime_problems_yield_nil_and_continue() {
    let (output, diagnostics) = diagnostics_of("print missing;\nprint -\"text\";\nprint 1 + true;\nprint 3;");
    assert_eq!(output, "nil\nnil\nnil\n3\n");
    assert_eq!(diagnostics,
               ["error on line 1 at \"missing\": Undefined variable 'missing'.",
                "error on line 2 at \"-\": Operand must be a number.",
                "error on line 3 at \"+\": Operands must be two numbers or two strings."]);
}

#[test]
fn assigning_an_undeclared_variable_defines_nothing() {
    let (output, diagnostics) = diagnostics_of("ghost = 1; print ghost;");
    assert_eq!(output, "nil\n");
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0],
               "error on line 1 at \"ghost\": Cannot assign to undefined variable 'ghost'.");
}

#[test]
fn comparisons_require_numbers() {
    assert_output("print 3 >= 3; print 2 >= 3; print 4 > 3;", "true\nfalse\ntrue\n");

    let (output, diagnostics) = diagnostics_of("print \"a\" < \"b\";\nprint 2 ** nil;");
    assert_eq!(output, "nil\nnil\n");
    assert_eq!(diagnostics,
               ["error on line 1 at \"<\": Operands must be numbers.",
                "error on line 2 at \"**\": Operands must be numbers."]);
}

#[test]
fn runaway_nesting_is_reported_without_crashing() {
    let sources = [format!("print {}1{};", "(".repeat(3000), ")".repeat(3000)),
                   format!("print {}1;", "-".repeat(3000)),
                   format!("{}print 1;{}", "{".repeat(3000), "}".repeat(3000)),
                   format!("var a; {}1;", "a = ".repeat(3000)),
                   format!("while (false) {}print 1;", "while (false) ".repeat(3000))];

    for source in &sources {
        let (output, diagnostics) = diagnostics_of(source);
        assert_eq!(output, "");
        assert_eq!(diagnostics.len(), 1, "diagnostics: {diagnostics:?}");
        assert!(diagnostics[0].ends_with("Too much nesting."),
                "unexpected diagnostic {}",
                diagnostics[0]);
    }
}

#[test]
fn moderate_nesting_still_runs() {
    let depth = MAX_NESTING / 2;
    assert_output(&format!("print {}1{};", "(".repeat(depth), ")".repeat(depth)),
                  "1\n");
    assert_output(&format!("{}print 2;{}", "{".repeat(depth), "}".repeat(depth)),
                  "2\n");
}

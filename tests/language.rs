use std::fs;

use pyrustlang::{
    interpreter::{
        evaluator::core::{Flow, Interpreter},
        value::Value,
    },
    parse_source, run_source,
};
use walkdir::WalkDir;

/// Runs a program, capturing its stdout.
///
/// Returns the run result (error stringified) together with whatever output
/// the program produced before finishing or failing.
fn run_capture(source: &str) -> (Result<(), String>, String) {
    let mut out = Vec::new();
    let result = run_source(source, &mut out).map_err(|e| e.to_string());
    (result, String::from_utf8(out).expect("program output is UTF-8"))
}

fn assert_success(source: &str) {
    if let (Err(e), _) = run_capture(source) {
        panic!("Script failed: {e}");
    }
}

fn assert_output(source: &str, expected: &str) {
    let (result, output) = run_capture(source);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    assert_eq!(output, expected, "wrong output for:\n{source}");
}

fn assert_failure(source: &str) {
    if run_capture(source).0.is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

fn assert_error_contains(source: &str, fragment: &str) {
    match run_capture(source).0 {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{source}"),
        Err(e) => {
            assert!(e.contains(fragment),
                    "error {e:?} does not mention {fragment:?}")
        },
    }
}

#[test]
fn hello_world() {
    assert_output(r#"print("Hello, World!")"#, "Hello, World!\n");
}

#[test]
fn literals_print_canonically() {
    assert_output("print(42)", "42\n");
    assert_output("print(3.5)", "3.5\n");
    assert_output("print(100.0)", "100.0\n");
    assert_output("print(true)", "true\n");
    assert_output("print(false)", "false\n");
    assert_output(r#"print("hi")"#, "hi\n");
    assert_output("print('single')", "single\n");
}

#[test]
fn string_escapes() {
    assert_output(r#"print("a\tb")"#, "a\tb\n");
    assert_output(r#"print("line1\nline2")"#, "line1\nline2\n");
    assert_output(r#"print("quote: \"x\"")"#, "quote: \"x\"\n");
    assert_output(r"print('it\'s')", "it's\n");
}

#[test]
fn comments_are_skipped() {
    assert_output("# leading comment\nprint(1) # trailing comment", "1\n");
}

#[test]
fn arithmetic_basics() {
    assert_output("print(1 + 2 * 3)", "7\n");
    assert_output("print((1 + 2) * 3)", "9\n");
    assert_output("print(8 - 5)", "3\n");
    assert_output("print(1 + 2.5)", "3.5\n");
    assert_output(r#"print("foo" + "bar")"#, "foobar\n");
}

#[test]
fn division_always_produces_float() {
    assert_output("print(10 / 2)", "5.0\n");
    assert_output("print(7 / 2)", "3.5\n");
    assert_output("print(1 / 3)", "0.3333333333333333\n");
    assert_output("print(1.0 / 2)", "0.5\n");
}

#[test]
fn division_by_zero_is_error() {
    let (result, output) = run_capture("let a: i32 = 1; print(a / 0)");
    assert!(result.unwrap_err().contains("Division by zero"));
    assert_eq!(output, "", "no output may precede the error");

    assert_failure("print(1.0 / 0.0)");
    assert_failure("print(1 / 0.0)");
}

#[test]
fn unary_minus_desugars_to_subtraction() {
    assert_output("print(-10)", "-10\n");
    assert_output("print(-2.5)", "-2.5\n");
    assert_output("print(2 * -3)", "-6\n");
    assert_output("print(-(1 + 2))", "-3\n");
    assert_output("print(--5)", "5\n");
}

#[test]
fn comparisons_and_equality() {
    assert_output("print(2 < 3)", "true\n");
    assert_output("print(3 <= 3)", "true\n");
    assert_output("print(2 > 3)", "false\n");
    assert_output("print(2 >= 3)", "false\n");
    assert_output("print(1 == 1.0)", "true\n");
    assert_output("print(2 != 3)", "true\n");
    assert_output("print(true == false)", "false\n");
    assert_output(r#"print("a" == "a")"#, "true\n");
}

#[test]
fn equality_is_checked_within_a_category() {
    assert_error_contains(r#"print(1 == "1")"#, "Type mismatch");
    assert_failure("print(true == 1)");
    assert_failure(r#"print("a" < "b")"#);
    assert_failure("print(true < false)");
}

#[test]
fn operands_of_bool_do_not_add() {
    assert_error_contains("print(true + true)", "Type mismatch");
    assert_failure(r#"print("a" - "b")"#);
    assert_failure(r#"print("a" * 2)"#);
}

#[test]
fn conditions_must_be_bool() {
    assert_error_contains("if 1 { print(1) }", "Condition must be bool");
    assert_failure("while 1 { print(1) }");
    assert_failure(r#"if "yes" { print(1) }"#);
}

#[test]
fn if_else_branches() {
    assert_output("if 1 < 2 { print(1) } else { print(2) }", "1\n");
    assert_output("if 1 > 2 { print(1) } else { print(2) }", "2\n");
    assert_output("if 1 > 2 { print(1) }", "");

    // The else may sit on the next line.
    assert_output("if false { print(1) }\nelse { print(2) }", "2\n");
}

#[test]
fn while_loop_accumulates() {
    assert_output("let mut total = 0\nlet mut i = 1\nwhile i <= 5 { total = total + i; i = i + 1 }\nprint(total)",
                  "15\n");
}

#[test]
fn immutability_law() {
    let (result, output) = run_capture("let x = 1\nx = 2\nprint(x)");
    assert!(result.unwrap_err()
                  .contains("Cannot reassign immutable variable 'x'"));
    assert_eq!(output, "", "no output may follow the failed assignment");
}

#[test]
fn mutable_bindings_reassign() {
    assert_output("let mut x = 1\nx = 2\nprint(x)", "2\n");
    // Annotations bind at declaration only; reassignment is not re-checked.
    assert_output("let mut x: i32 = 1\nx = 2.5\nprint(x)", "2.5\n");
}

#[test]
fn assignment_to_unbound_name_is_error() {
    assert_error_contains("ghost = 1", "'ghost' is not defined");
}

#[test]
fn shadowing_law() {
    assert_output("let x = 1; { let x = 2; print(x) }; print(x)", "2\n1\n");
    // Shadowing works regardless of the outer binding's mutability.
    assert_output("let mut x = 1; { let x = 2; print(x) }; print(x)", "2\n1\n");
}

#[test]
fn block_scope_is_released() {
    let (result, output) = run_capture("{ let y = 1; print(y) }\nprint(y)");
    assert!(result.unwrap_err().contains("'y' is not defined"));
    assert_eq!(output, "1\n");
}

#[test]
fn declared_type_must_match_exactly() {
    assert_error_contains(r#"let x: i32 = "hi""#, "Type mismatch");
    // No widening at annotation sites either.
    assert_failure("let x: f64 = 1");
    assert_failure("let x: i32 = 1.0");
    assert_failure("let b: bool = 1");

    assert_output("let x: i32 = 5\nprint(x)", "5\n");
    assert_output("let x: f64 = 1.0\nprint(x)", "1.0\n");
    assert_output("let b: bool = true\nprint(b)", "true\n");
    assert_output("let s: str = 'hi'\nprint(s)", "hi\n");
}

#[test]
fn fibonacci_program() {
    let source = r"
fn fib(n: i32) -> i32 {
    if n <= 1 { return n }
    let mut a: i32 = 0
    let mut b: i32 = 1
    let mut i: i32 = 2
    while i <= n {
        let mut t = a + b
        a = b
        b = t
        i = i + 1
    }
    return b
}
let mut c: i32 = 0
while c < 10 { print(fib(c)); c = c + 1 }
";
    assert_output(source, "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n");
}

#[test]
fn recursive_functions() {
    let source = r"
fn fib(n: i32) -> i32 {
    if n <= 1 { return n }
    return fib(n - 1) + fib(n - 2)
}
print(fib(10))
";
    assert_output(source, "55\n");
}

#[test]
fn closure_reads_declaration_scope() {
    // The function sees the value at call time, through the captured scope.
    assert_output("let mut n = 1; fn f() { print(n) }; n = 42; f()", "42\n");

    // Free names resolve where the function was declared, not where it is
    // called from.
    let source = r#"
let greeting = "outer"
fn show() { print(greeting) }
fn caller() {
    let greeting = "inner"
    show()
}
caller()
"#;
    assert_output(source, "outer\n");
}

#[test]
fn closure_writes_through_captured_scope() {
    let source = r"
let mut count = 0
fn bump() { count = count + 1 }
bump()
bump()
bump()
print(count)
";
    assert_output(source, "3\n");
}

#[test]
fn captured_frame_outlives_its_call() {
    let source = r"
fn make_teller() {
    let secret = 7
    fn tell() { print(secret) }
    return tell
}
let tell = make_teller()
tell()
";
    assert_output(source, "7\n");
}

#[test]
fn return_unwinds_to_the_nearest_call() {
    let source = r"
fn find(limit: i32) -> i32 {
    let mut i = 0
    while true {
        if i >= limit { return i }
        i = i + 1
    }
}
fn outer() -> i32 {
    let x = find(3)
    return x + 1
}
print(outer())
";
    assert_output(source, "4\n");
}

#[test]
fn bare_return_yields_unit() {
    assert_output("fn f() { return }\nf()\nprint(1)", "1\n");
    assert_output("fn f() { return\nprint(99) }\nf()\nprint(1)", "1\n");
}

#[test]
fn declared_return_type_is_enforced() {
    assert_error_contains("fn f() -> i32 { }\nf()", "completed without returning");
    assert_error_contains("fn f() -> i32 { return 1.5 }\nf()", "Type mismatch");
    assert_output("fn f() -> i32 { return 1 }\nprint(f())", "1\n");
}

#[test]
fn parameters_are_immutable_but_shadowable() {
    assert_error_contains("fn f(n: i32) { n = 2 }\nf(1)",
                          "Cannot reassign immutable variable 'n'");
    assert_output("fn f(n: i32) -> i32 { let n = n + 1\nreturn n }\nprint(f(1))",
                  "2\n");
}

#[test]
fn parameter_types_are_checked() {
    let define = "fn add(a: i32, b: i32) -> i32 { return a + b }\n";
    assert_output(&format!("{define}print(add(2, 5))"), "7\n");
    assert_error_contains(&format!("{define}add(1, 2.0)"), "Type mismatch");
    assert_error_contains(&format!("{define}add(1)"), "expects 2 arguments, got 1");
    assert_error_contains(&format!("{define}add(1, 2, 3)"), "expects 2 arguments, got 3");
}

#[test]
fn calls_resolve_through_the_environment() {
    assert_error_contains("missing()", "'missing' is not defined");
    assert_error_contains("let x = 1\nx(2)", "'x' is not a function");
}

#[test]
fn both_operands_always_evaluate_left_to_right() {
    let source = r"
fn left() -> i32 {
    print(1)
    return 10
}
fn right() -> i32 {
    print(2)
    return 20
}
print(left() + right())
";
    assert_output(source, "1\n2\n30\n");
}

#[test]
fn functions_and_unit_are_unprintable() {
    assert_error_contains("fn f() { }\nprint(f)", "Cannot print a value of type fn");
    assert_error_contains("fn f() { }\nprint(f())", "Cannot print a value of type unit");
}

#[test]
fn integer_overflow_is_reported() {
    assert_error_contains("print(9223372036854775807 + 1)", "Integer overflow");
    assert_error_contains("print(-9223372036854775807 - 2)", "Integer overflow");
    // Widening past 2^53 into a float is also refused.
    assert_error_contains("print(9007199254740993 / 1)", "Integer overflow");
}

#[test]
fn oversized_integer_literal_is_a_lex_error() {
    assert_error_contains("let x = 9223372036854775808", "Integer literal is too large");
}

#[test]
fn runaway_recursion_is_reported() {
    assert_error_contains("fn spin(n: i32) -> i32 { return spin(n) }\nspin(1)",
                          "Maximum recursion depth exceeded");
}

#[test]
fn lex_errors_carry_positions() {
    assert_error_contains("let x = 1 @ 2", "Line 1");
    assert_error_contains("let x = 1 @ 2", "Unexpected character: @");
    assert_error_contains("\nprint(`)", "Line 2");
    assert_error_contains(r#"print("abc"#, "Unterminated string literal");
}

#[test]
fn parse_errors_name_the_expectation() {
    assert_error_contains("let x", "Expected '='");
    assert_error_contains("let x = ", "an expression");
    assert_error_contains("print 1", "Expected '('");
    assert_error_contains("fn f(x) { }", "Expected ':'");
    assert_error_contains("fn f(x: y) { }", "a type annotation");
    assert_error_contains("if true { print(1)", "Expected '}'");
    assert_error_contains("fn f( { }", "an identifier");
}

#[test]
fn expression_statement_value_reaches_the_repl() {
    let statements = parse_source("1 + 2").unwrap();
    let mut out = Vec::new();
    let mut interpreter = Interpreter::new(&mut out);

    let flow = interpreter.run_statement(&statements[0]).unwrap();
    assert_eq!(flow, Flow::Normal(Value::Int(3)));
}

#[test]
fn repl_state_persists_across_statements() {
    let program = parse_source("let mut x = 1\nx = x + 1\nx").unwrap();
    let mut out = Vec::new();
    let mut interpreter = Interpreter::new(&mut out);

    for statement in &program[..2] {
        interpreter.run_statement(statement).unwrap();
    }
    let flow = interpreter.run_statement(&program[2]).unwrap();
    assert_eq!(flow, Flow::Normal(Value::Int(2)));
}

#[test]
fn failed_statement_installs_no_bindings() {
    let program = parse_source("let broken = missing\nbroken").unwrap();
    let mut out = Vec::new();
    let mut interpreter = Interpreter::new(&mut out);

    assert!(interpreter.run_statement(&program[0]).is_err());
    // The declaration never took effect.
    assert!(interpreter.run_statement(&program[1]).is_err());
}

#[test]
fn semicolons_and_newlines_are_interchangeable() {
    assert_output("let x = 1; print(x)", "1\n");
    assert_output("let x = 1\nprint(x)", "1\n");
    assert_output("print(1);;; print(2)", "1\n2\n");
}

#[test]
fn demo_programs_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "prl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = run_source(&source, &mut out) {
            panic!("Demo program {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn demo_fibonacci_output() {
    let source = fs::read_to_string("demos/fibonacci.prl").expect("missing file");
    let (result, output) = run_capture(&source);
    assert!(result.is_ok());
    assert_eq!(output, "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n");
}

#[test]
fn top_level_return_ends_the_run() {
    assert_output("print(1)\nreturn\nprint(2)", "1\n");
    assert_success("return 5");
}

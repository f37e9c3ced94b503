use std::fs;

use simplelang::{
    Outcome,
    error::{Error, RuntimeErrorKind},
    interpreter::value::Value,
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```simplelang") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) -> Outcome {
    match run(src) {
        Ok(outcome) => outcome,
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_output(src: &str, expected: &[&str]) {
    let outcome = assert_success(src);
    assert_eq!(outcome.output, expected, "unexpected output for script:\n{src}");
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(outcome) => panic!("Script succeeded but was expected to fail: {outcome:?}"),
        Err(e) => e,
    }
}

fn assert_runtime_failure(src: &str, kind: RuntimeErrorKind) {
    match assert_failure(src) {
        Error::Runtime(e) => assert_eq!(e.kind(), kind, "wrong error kind: {e}"),
        other => panic!("Expected a runtime error, got: {other}"),
    }
}

#[test]
fn end_to_end_if_else() {
    assert_output(r#"
number x = 5
number y = 3
if x > y {
  print "bigger"
} else {
  print "smaller"
}
"#,
                  &["bigger"]);
}

#[test]
fn else_branch_runs_when_condition_fails() {
    assert_output("number x = 1\nif x > 2 {\n  print \"big\"\n} else {\n  print \"small\"\n}",
                  &["small"]);
    assert_output("if 1 > 2 {\n  print \"never\"\n}\nprint \"after\"", &["after"]);
}

#[test]
fn arithmetic_is_left_associative() {
    assert_output("print 10 - 3 - 2", &["5"]);
    assert_output("print 100 / 10 / 5", &["2"]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("print 2 + 3 * 4", &["14"]);
    assert_output("print 2 * 3 + 4", &["10"]);
    assert_output("print (2 + 3) * 4", &["20"]);
    assert_output("print 20 - 12 / 4", &["17"]);
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("print 7 / 2", &["3"]);
    assert_output("print (0 - 7) / 2", &["-3"]);
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_failure("print 5 / 0", RuntimeErrorKind::Arithmetic);
    assert_runtime_failure("number zero = 0\nprint 1 / zero", RuntimeErrorKind::Arithmetic);
}

#[test]
fn overflow_is_error() {
    assert_runtime_failure("print 9223372036854775807 + 1", RuntimeErrorKind::Arithmetic);
    assert_runtime_failure("print 0 - 9223372036854775807 - 2", RuntimeErrorKind::Arithmetic);
}

#[test]
fn string_concatenation() {
    assert_output(r#"print "a" + "b""#, &["ab"]);
    assert_output("text a = \"Simple\"\ntext b = \"Lang\"\nprint a + b", &["SimpleLang"]);
}

#[test]
fn text_only_supports_addition() {
    assert_runtime_failure(r#"print "a" - "b""#, RuntimeErrorKind::Type);
    assert_runtime_failure(r#"print "a" * "b""#, RuntimeErrorKind::Type);
    assert_runtime_failure(r#"print "a" / "b""#, RuntimeErrorKind::Type);
}

#[test]
fn mixed_operands_are_type_errors() {
    assert_runtime_failure(r#"print "a" + 1"#, RuntimeErrorKind::Type);
    assert_runtime_failure(r#"print 1 + "a""#, RuntimeErrorKind::Type);
    assert_runtime_failure("if 1 == \"1\" {\n}", RuntimeErrorKind::Type);
}

#[test]
fn declared_type_is_enforced() {
    assert_runtime_failure(r#"number x = "hello""#, RuntimeErrorKind::Type);
    assert_runtime_failure("text s = 5", RuntimeErrorKind::Type);
    assert_success("number x = 1 + 2\ntext s = \"a\" + \"b\"");
}

#[test]
fn text_comparisons_allow_only_equality() {
    assert_output("if \"a\" == \"a\" {\n  print \"same\"\n}", &["same"]);
    assert_output("if \"a\" != \"b\" {\n  print \"different\"\n}", &["different"]);
    assert_runtime_failure("if \"a\" < \"b\" {\n}", RuntimeErrorKind::Type);
    assert_runtime_failure("if \"a\" >= \"b\" {\n}", RuntimeErrorKind::Type);
}

#[test]
fn all_comparison_operators_on_numbers() {
    let cases = [("1 == 1", true),
                 ("1 != 1", false),
                 ("1 < 2", true),
                 ("2 < 1", false),
                 ("2 <= 2", true),
                 ("3 > 2", true),
                 ("2 > 2", false),
                 ("2 >= 3", false)];

    for (condition, holds) in cases {
        let src = format!("if {condition} {{\n  print \"yes\"\n}} else {{\n  print \"no\"\n}}");
        assert_output(&src, &[if holds { "yes" } else { "no" }]);
    }
}

#[test]
fn block_declarations_are_discarded() {
    assert_runtime_failure("if 1 < 2 {\n  number inner = 1\n}\nprint inner",
                           RuntimeErrorKind::UndefinedVariable);
    assert_runtime_failure("if 1 > 2 {\n} else {\n  text inner = \"x\"\n}\nprint inner",
                           RuntimeErrorKind::UndefinedVariable);
}

#[test]
fn inner_declaration_shadows_without_mutating() {
    let outcome = assert_success("number x = 1\nif x == 1 {\n  number x = 2\n  print x\n}\nprint x");
    assert_eq!(outcome.output, ["2", "1"]);
    assert_eq!(outcome.environment.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn inner_blocks_read_outer_variables() {
    assert_output("number x = 4\nif x > 1 {\n  if x > 2 {\n    print x * 2\n  }\n}", &["8"]);
}

#[test]
fn redeclaration_in_same_scope_is_error() {
    assert_runtime_failure("number x = 1\nnumber x = 2", RuntimeErrorKind::DuplicateDeclaration);
    assert_runtime_failure("number x = 1\ntext x = \"a\"", RuntimeErrorKind::DuplicateDeclaration);
    assert_runtime_failure("if 1 == 1 {\n  number y = 1\n  number y = 2\n}",
                           RuntimeErrorKind::DuplicateDeclaration);
}

#[test]
fn unknown_variable_is_error() {
    assert_runtime_failure("print foo", RuntimeErrorKind::UndefinedVariable);
    assert_runtime_failure("number x = x", RuntimeErrorKind::UndefinedVariable);
}

#[test]
fn string_escapes() {
    assert_output(r#"print "say \"hi\"""#, &[r#"say "hi""#]);
    assert_output(r#"print "back\\slash""#, &[r"back\slash"]);
    assert_output(r#"print "keep\n""#, &[r"keep\n"]);
}

#[test]
fn escaped_line_break_is_kept() {
    assert_output("print \"a\\\nb\"", &["a\\\nb"]);
}

#[test]
fn final_environment_holds_top_level_bindings() {
    let outcome = assert_success("number a = 2\ntext b = \"two\"\nif a == 2 {\n  number c = 3\n}");
    let bindings: Vec<(&str, &Value)> = outcome.environment.bindings().collect();

    assert_eq!(bindings,
               vec![("a", &Value::Integer(2)), ("b", &Value::Text("two".into()))]);
    assert_eq!(outcome.environment.depth(), 1);
}

#[test]
fn errors_abort_the_run() {
    match assert_failure("print 1\nprint 1 / 0\nprint 3") {
        Error::Runtime(e) => {
            assert_eq!(e.kind(), RuntimeErrorKind::Arithmetic);
            assert_eq!(e.position().line, 2);
        },
        other => panic!("Expected a runtime error, got: {other}"),
    }
}

#[test]
fn syntax_errors_are_reported_before_running() {
    assert!(matches!(assert_failure("print 1\nprint (2"), Error::Parse(_)));
    assert!(matches!(assert_failure("print 1\nprint 2 $"), Error::Lex(_)));
}

#[test]
fn empty_programs_succeed() {
    assert_output("", &[]);
    assert_output("\n\n// only a comment\n\n", &[]);
}

#[test]
fn windows_line_endings() {
    assert_output("number x = 1\r\nif x == 1 {\r\n  print x\r\n}\r\n", &["1"]);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.sl").expect("missing file");
    assert_output(&script,
                  &["area:", "60", "large (m2)", "precedence holds", "8"]);
}

use simplelang::{
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::Context, value::Value},
    parse, tokenize,
    util::position::Position,
};

#[test]
fn lookup_walks_outward() {
    let mut env = Environment::new();
    let here = Position::start();

    env.declare("outer", Value::Integer(1), here).unwrap();
    env.push_scope();
    env.push_scope();

    assert_eq!(env.depth(), 3);
    assert_eq!(env.lookup("outer", here), Ok(&Value::Integer(1)));
}

#[test]
fn undefined_lookup_reports_name_and_position() {
    let env = Environment::new();

    assert_eq!(env.lookup("ghost", Position::new(4, 2)),
               Err(RuntimeError::UndefinedVariable { name:     "ghost".into(),
                                                     position: Position::new(4, 2), }));
}

#[test]
fn duplicate_is_per_scope() {
    let mut env = Environment::new();
    let here = Position::start();

    env.declare("x", Value::Integer(1), here).unwrap();
    env.push_scope();
    env.declare("x", Value::from("inner"), here).unwrap();

    assert_eq!(env.declare("x", Value::Integer(3), Position::new(9, 1)),
               Err(RuntimeError::DuplicateDeclaration { name:     "x".into(),
                                                        position: Position::new(9, 1), }));
}

#[test]
fn root_scope_survives_extra_pops() {
    let mut env = Environment::new();
    env.declare("kept", Value::Integer(1), Position::start())
       .unwrap();

    env.pop_scope();
    env.pop_scope();

    assert_eq!(env.depth(), 1);
    assert_eq!(env.get("kept"), Some(&Value::Integer(1)));
}

#[test]
fn failing_block_still_pops_its_scope() {
    let tokens = tokenize("number x = 1\nif x == 1 {\n  number y = 2\n  print y / 0\n}").unwrap();
    let program = parse(&tokens).unwrap();
    let mut context = Context::new();

    assert!(context.eval_program(&program).is_err());
    assert_eq!(context.environment.depth(), 1);
    assert_eq!(context.environment.get("y"), None);
    assert_eq!(context.environment.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn output_collected_before_failure() {
    let tokens = tokenize("print 1\nprint \"two\"\nprint missing\nprint 4").unwrap();
    let program = parse(&tokens).unwrap();
    let mut context = Context::new();

    assert!(context.eval_program(&program).is_err());
    assert_eq!(context.output(), ["1", "two"]);
}

#[test]
fn declarations_after_extra_pops_land_in_root() {
    let mut env = Environment::new();
    let here = Position::start();

    env.pop_scope();
    env.declare("x", Value::Integer(1), here).unwrap();

    assert_eq!(env.depth(), 1);
    assert_eq!(env.bindings().collect::<Vec<_>>(), vec![("x", &Value::Integer(1))]);
    assert!(env.declare("x", Value::Integer(2), here).is_err());
}

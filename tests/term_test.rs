use monkey::lang::ErrorCode;
use monkey::mach::Val;
use monkey::term::evaluate;
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn test_evaluate() {
    let interrupted = AtomicBool::new(false);
    assert_eq!(evaluate("1 + 2", &interrupted), Ok(Some(Val::Integer(3))));
    assert_eq!(evaluate("5; 6", &interrupted), Ok(Some(Val::Integer(6))));
    assert_eq!(evaluate(";", &interrupted), Ok(None));
}

#[test]
fn test_evaluate_errors_are_independent() {
    let interrupted = AtomicBool::new(false);
    let e = evaluate("1 * 2", &interrupted).unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnknownOperator);
    let e = evaluate("1 +", &interrupted).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(evaluate("40 + 2", &interrupted), Ok(Some(Val::Integer(42))));
}

#[test]
fn test_evaluate_long_program_in_slices() {
    let interrupted = AtomicBool::new(false);
    let source = vec!["1"; 3000].join(" + ");
    assert_eq!(evaluate(&source, &interrupted), Ok(Some(Val::Integer(3000))));
}

#[test]
fn test_evaluate_interrupted() {
    let interrupted = AtomicBool::new(true);
    let source = vec!["1"; 3000].join(" + ");
    let e = evaluate(&source, &interrupted).unwrap_err();
    assert_eq!(e.code(), ErrorCode::Interrupted);
    assert!(!interrupted.load(Ordering::SeqCst));
    assert_eq!(evaluate("1 + 1", &interrupted), Ok(Some(Val::Integer(2))));
}

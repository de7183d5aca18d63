mod common;
use common::*;
use monkey::lang::ErrorCode;
use monkey::mach::{Bytecode, Event, Instructions, Opcode, Runtime, State, Val, STACK_SIZE};

fn hand_built(parts: &[Vec<u8>], constants: Vec<Val>) -> Runtime {
    Runtime::new(Bytecode::new(Instructions::from(parts.concat()), constants)).unwrap()
}

#[test]
fn test_integer_arithmetic() {
    let r = exec("1 + 2");
    assert_eq!(r.sp(), 1);
    assert_eq!(r.stack_top(), Some(&Val::Integer(3)));
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_single_literal() {
    let r = exec("1");
    assert_eq!(r.sp(), 1);
    assert_eq!(r.stack_top(), Some(&Val::Integer(1)));
}

#[test]
fn test_nested_sums() {
    assert_eq!(exec("1 + 2 + 3 + 4").stack_top(), Some(&Val::Integer(10)));
    assert_eq!(exec("(5 + 5) + (1 + 1)").stack_top(), Some(&Val::Integer(12)));
}

#[test]
fn test_statement_values_stay_on_stack() {
    let r = exec("1; 2 + 3");
    assert_eq!(r.sp(), 2);
    assert_eq!(r.stack().get(0), Some(&Val::Integer(1)));
    assert_eq!(r.stack_top(), Some(&Val::Integer(5)));
}

#[test]
fn test_empty_program() {
    let r = exec("");
    assert_eq!(r.sp(), 0);
    assert_eq!(r.stack_top(), None);
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_type_error() {
    let mut r = hand_built(
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Add, &[]),
        ],
        vec![Val::Integer(1), Val::Boolean(true)],
    );
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::TypeError);
    assert_eq!(r.state(), State::Errored);
}

#[test]
fn test_integer_overflow() {
    let mut r = hand_built(
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Add, &[]),
        ],
        vec![Val::Integer(i64::max_value())],
    );
    assert_eq!(r.run().unwrap_err().code(), ErrorCode::Overflow);
}

#[test]
fn test_constant_index_out_of_range() {
    let mut r = hand_built(&[make(Opcode::Constant, &[3])], vec![Val::Integer(1)]);
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::ConstantIndexOutOfRange);
    assert_eq!(e.to_string(), "CONSTANT INDEX OUT OF RANGE; INDEX 3 OF 1");
    assert_eq!(r.sp(), 0);
    assert_eq!(r.ip(), 0);
}

#[test]
fn test_undefined_opcode_aborts() {
    let mut r = hand_built(
        &[make(Opcode::Constant, &[0]), vec![200], make(Opcode::Constant, &[0])],
        vec![Val::Integer(1)],
    );
    assert_eq!(r.run().unwrap_err().code(), ErrorCode::UndefinedOpcode);
    assert_eq!(r.sp(), 1);
    assert_eq!(r.ip(), 3);
}

#[test]
fn test_truncated_operand() {
    let mut r = hand_built(&[vec![Opcode::Constant as u8, 0]], vec![Val::Integer(1)]);
    assert_eq!(r.run().unwrap_err().code(), ErrorCode::MalformedBytecode);
}

#[test]
fn test_add_on_empty_stack() {
    let mut r = hand_built(&[make(Opcode::Add, &[])], vec![]);
    assert_eq!(r.run().unwrap_err().code(), ErrorCode::StackUnderflow);
}

#[test]
fn test_stack_overflow() {
    let parts: Vec<Vec<u8>> = (0..3).map(|_| make(Opcode::Constant, &[0])).collect();
    let bytecode = Bytecode::new(Instructions::from(parts.concat()), vec![Val::Integer(1)]);
    let mut r = Runtime::with_stack_size(bytecode, 2).unwrap();
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackOverflow);
    assert_eq!(r.sp(), 2);
}

#[test]
fn test_stack_size_too_large() {
    let bytecode = Bytecode::new(Instructions::new(), vec![]);
    let e = Runtime::with_stack_size(bytecode, usize::max_value())
        .err()
        .unwrap();
    assert_eq!(e.code(), ErrorCode::StackOverflow);
}

#[test]
fn test_default_stack_size() {
    let parts: Vec<Vec<u8>> = (0..STACK_SIZE)
        .map(|_| make(Opcode::Constant, &[0]))
        .collect();
    let bytecode = Bytecode::new(Instructions::from(parts.concat()), vec![Val::Integer(1)]);
    let mut r = Runtime::new(bytecode.clone()).unwrap();
    r.run().unwrap();
    assert_eq!(r.sp(), STACK_SIZE);
    assert_eq!(r.push(Val::Integer(2)).unwrap_err().code(), ErrorCode::StackOverflow);
    assert_eq!(r.sp(), STACK_SIZE);
}

#[test]
fn test_errors_are_sticky() {
    let mut r = hand_built(&[make(Opcode::Add, &[])], vec![]);
    let first = r.run().unwrap_err();
    assert_eq!(r.run().unwrap_err(), first);
    assert_eq!(r.execute(10).unwrap_err(), first);
}

#[test]
fn test_execute_in_slices() {
    let bytecode = compile("1 + 2 + 3").unwrap();
    let mut r = Runtime::new(bytecode).unwrap();
    assert_eq!(r.state(), State::Ready);
    assert_eq!(r.execute(2), Ok(Event::Running));
    assert_eq!(r.state(), State::Running);
    assert_eq!(r.sp(), 2);
    assert_eq!(r.execute(3), Ok(Event::Halted));
    assert_eq!(r.state(), State::Halted);
    assert_eq!(r.stack_top(), Some(&Val::Integer(6)));
    assert_eq!(r.execute(3), Ok(Event::Halted));
    assert_eq!(r.sp(), 1);
}

#[test]
fn test_push_pop() {
    let mut r = hand_built(&[], vec![]);
    assert_eq!(r.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
    r.push(Val::Integer(4)).unwrap();
    r.push(Val::Boolean(false)).unwrap();
    assert_eq!(r.stack_top(), Some(&Val::Boolean(false)));
    assert_eq!(r.pop(), Ok(Val::Boolean(false)));
    assert_eq!(r.pop(), Ok(Val::Integer(4)));
    assert_eq!(r.sp(), 0);
    assert_eq!(r.stack_top(), None);
}

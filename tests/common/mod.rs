#![allow(dead_code)]
use monkey::lang::{self, Error};
use monkey::mach::{self, opcode, Bytecode, Opcode, Runtime};

pub fn compile(s: &str) -> Result<Bytecode, Error> {
    mach::compile(&lang::parse_str(s)?)
}

pub fn exec(s: &str) -> Runtime {
    let bytecode = compile(s).unwrap();
    let mut runtime = Runtime::new(bytecode).unwrap();
    runtime.run().unwrap();
    runtime
}

pub fn make(op: Opcode, operands: &[usize]) -> Vec<u8> {
    opcode::make(op, operands).unwrap()
}

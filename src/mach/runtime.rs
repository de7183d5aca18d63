use super::opcode::{read_u16, Opcode};
use super::{Address, Bytecode, Operation, Stack, Val, STACK_SIZE};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use tracing::{debug, instrument, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine
///
/// Executes one `Bytecode` against a fixed-capacity operand stack.
/// A runtime is single use: once halted, further execution reports
/// the same outcome again instead of starting over.

pub struct Runtime {
    bytecode: Bytecode,
    stack: Stack<Val>,
    ip: Address,
    state: State,
    error: Option<Error>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Ready,
    Running,
    Halted,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out before the end of the stream.
    Running,
    Halted,
}

impl Runtime {
    pub fn new(bytecode: Bytecode) -> Result<Runtime> {
        Runtime::with_stack_size(bytecode, STACK_SIZE)
    }

    /// Fails with `StackOverflow` when the stack cannot be allocated.
    pub fn with_stack_size(bytecode: Bytecode, stack_size: usize) -> Result<Runtime> {
        Ok(Runtime {
            bytecode,
            stack: Stack::new(stack_size, "OPERAND STACK FULL")?,
            ip: 0,
            state: State::Ready,
            error: None,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    pub fn sp(&self) -> usize {
        self.stack.sp()
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    /// The value a program leaves behind, without disturbing it.
    pub fn stack_top(&self) -> Option<&Val> {
        self.stack.last()
    }

    pub fn push(&mut self, val: Val) -> Result<()> {
        self.stack.push(val)
    }

    pub fn pop(&mut self) -> Result<Val> {
        self.stack.pop()
    }

    /// Run to the end of the instruction stream.
    #[instrument(skip_all, name = "run")]
    pub fn run(&mut self) -> Result<()> {
        loop {
            if let Event::Halted = self.execute(usize::max_value())? {
                return Ok(());
            }
        }
    }

    /// Run at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Result<Event> {
        match self.state {
            State::Halted => return Ok(Event::Halted),
            State::Errored => {
                return Err(match &self.error {
                    Some(error) => error.clone(),
                    None => error!(InternalError; "ERRORED WITHOUT ERROR"),
                })
            }
            State::Ready | State::Running => self.state = State::Running,
        }
        match self.execute_loop(cycles) {
            Ok(Event::Halted) => {
                self.state = State::Halted;
                debug!(ip = self.ip, sp = self.stack.sp(), "halted");
                Ok(Event::Halted)
            }
            Ok(Event::Running) => Ok(Event::Running),
            Err(error) => {
                debug!(ip = self.ip, %error, "execution error");
                self.state = State::Errored;
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    fn execute_loop(&mut self, cycles: usize) -> Result<Event> {
        let ins = self.bytecode.instructions().as_bytes();
        let constants = self.bytecode.constants();
        for _ in 0..cycles {
            let op = match ins.get(self.ip) {
                Some(op) => Opcode::try_from(*op)?,
                None => return Ok(Event::Halted),
            };
            trace!(ip = self.ip, %op, sp = self.stack.sp());
            match op {
                Opcode::Constant => {
                    let index = read_u16(&ins[self.ip + 1..])? as usize;
                    match constants.get(index) {
                        Some(val) => self.stack.push(val.clone())?,
                        None => {
                            return Err(error!(ConstantIndexOutOfRange; &format!(
                                "INDEX {} OF {}",
                                index,
                                constants.len()
                            )))
                        }
                    }
                    self.ip += 2;
                }
                Opcode::Add => {
                    let (lhs, rhs) = self.stack.pop_2()?;
                    self.stack.push(Operation::sum(lhs, rhs)?)?;
                }
            }
            self.ip += 1;
        }
        if self.ip >= ins.len() {
            Ok(Event::Halted)
        } else {
            Ok(Event::Running)
        }
    }
}

/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for Monkey.

The pipeline is `Program` → [`compile`] → [`Bytecode`] → [`Runtime::run`],
after which [`Runtime::stack_top`] holds the result.

*/

pub type Address = usize;

/// Operand stack capacity of a default `Runtime`.
pub const STACK_SIZE: usize = 2048;
/// One more than the largest index a 2-byte operand can hold.
pub const MAX_CONSTANTS: usize = 1 << 16;

mod bytecode;
mod compile;
mod instructions;
mod operation;
mod runtime;
mod stack;
mod val;

pub mod opcode;

pub use bytecode::Bytecode;
pub use compile::compile;
pub use compile::Compiler;
pub use instructions::Instructions;
pub use opcode::Definition;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;

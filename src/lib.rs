//! # Monkey bytecode machine
//!
//! A compiler from Monkey expressions to a compact bytecode, and a stack
//! virtual machine that runs it.
//!
//! ```
//! use monkey::{lang, mach};
//!
//! let program = lang::parse_str("1 + 2").unwrap();
//! let bytecode = mach::compile(&program).unwrap();
//! let mut runtime = mach::Runtime::new(bytecode).unwrap();
//! runtime.run().unwrap();
//! assert_eq!(runtime.stack_top(), Some(&mach::Val::Integer(3)));
//! ```
//!
//! Run the `monkey` binary for an interactive prompt. Set `RUST_LOG=trace`
//! to watch every emitted and executed instruction.

pub mod lang;
pub mod mach;
pub mod term;

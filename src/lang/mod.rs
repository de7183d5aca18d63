/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Monkey
expressions, the error type shared by the whole crate, and the
syntax tree consumed by the compiler.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;

pub mod ast;
pub mod token;

/// Lex and parse one unit of source text.
pub fn parse_str(s: &str) -> Result<ast::Program, Error> {
    parse(&lex(s))
}

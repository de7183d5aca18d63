use super::opcode::{self, Opcode};
use super::{Bytecode, Instructions, Val, MAX_CONSTANTS};
use crate::error;
use crate::lang::ast::{self, AcceptVisitor, Expression, Program, Statement};
use crate::lang::token::Operator;
use crate::lang::Error;
use tracing::{debug, instrument, trace};

type Result<T> = std::result::Result<T, Error>;

/// Compile a whole program in one pass.
pub fn compile(program: &Program) -> Result<Bytecode> {
    let mut compiler = Compiler::new();
    compiler.compile(program)?;
    Ok(compiler.bytecode())
}

/// ## Code generator
///
/// Walks the syntax tree once, appending instructions and interning
/// literals into the constant pool. Consumed by [`Compiler::bytecode`],
/// so a fresh compiler is needed for every compilation.

#[derive(Debug, Default)]
pub struct Compiler {
    instructions: Instructions,
    constants: Vec<Val>,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler::default()
    }

    /// On error nothing emitted by this call is kept.
    #[instrument(skip_all, name = "compile")]
    pub fn compile(&mut self, program: &Program) -> Result<()> {
        let ins_watermark = self.instructions.len();
        let const_watermark = self.constants.len();
        match program.accept(self) {
            Ok(()) => {
                debug!(
                    statements = program.statements.len(),
                    bytes = self.instructions.len(),
                    constants = self.constants.len(),
                    "compiled"
                );
                Ok(())
            }
            Err(error) => {
                self.instructions.truncate(ins_watermark);
                self.constants.truncate(const_watermark);
                Err(error)
            }
        }
    }

    /// Encode one instruction and append it.
    /// Returns the offset where the instruction begins.
    pub fn emit(&mut self, op: Opcode, operands: &[usize]) -> Result<usize> {
        let ins = opcode::make(op, operands)?;
        let pos = self.instructions.append(&ins);
        trace!(pos, %op, ?operands, "emit");
        Ok(pos)
    }

    pub fn add_constant(&mut self, val: Val) -> Result<usize> {
        if self.constants.len() >= MAX_CONSTANTS {
            return Err(error!(ConstantIndexOutOfRange; "CONSTANT POOL FULL"));
        }
        self.constants.push(val);
        Ok(self.constants.len() - 1)
    }

    pub fn instructions(&self) -> &Instructions {
        &self.instructions
    }

    pub fn constants(&self) -> &[Val] {
        &self.constants
    }

    pub fn bytecode(self) -> Bytecode {
        Bytecode::new(self.instructions, self.constants)
    }
}

impl ast::Visitor for Compiler {
    fn visit_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            // The value stays on the stack.
            Statement::Expression(..) => Ok(()),
        }
    }

    fn visit_expression(&mut self, expression: &Expression) -> Result<()> {
        match expression {
            Expression::Integer(_, n) => {
                let index = self.add_constant(Val::Integer(*n))?;
                self.emit(Opcode::Constant, &[index])?;
            }
            Expression::Infix(col, op, ..) => {
                let opcode = match op {
                    Operator::Plus => Opcode::Add,
                    _ => return Err(error!(UnknownOperator, ..col; &op.to_string())),
                };
                self.emit(opcode, &[])?;
            }
        }
        Ok(())
    }
}

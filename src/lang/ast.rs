use super::token::Operator;
use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq)]
pub enum Statement {
    Expression(Column, Expression),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(Column, i64),
    Infix(Column, Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn column(&self) -> Column {
        match self {
            Expression::Integer(col, _) | Expression::Infix(col, ..) => col.clone(),
        }
    }
}

/// Post-order walk: children are visited before their parent, and the
/// left operand of an infix expression before the right.
pub trait Visitor {
    fn visit_program(&mut self, _: &Program) -> Result<()> {
        Ok(())
    }
    fn visit_statement(&mut self, _: &Statement) -> Result<()> {
        Ok(())
    }
    fn visit_expression(&mut self, _: &Expression) -> Result<()> {
        Ok(())
    }
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<()>;
}

impl AcceptVisitor for Program {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<()> {
        for statement in &self.statements {
            statement.accept(visitor)?;
        }
        visitor.visit_program(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<()> {
        use Statement::*;
        match self {
            Expression(_, expr) => expr.accept(visitor)?,
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<()> {
        use Expression::*;
        match self {
            Integer(..) => {}
            Infix(_, _, expr1, expr2) => {
                expr1.accept(visitor)?;
                expr2.accept(visitor)?;
            }
        }
        visitor.visit_expression(self)
    }
}

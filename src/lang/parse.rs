use super::{ast::*, token::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token]) -> Result<Program> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Program> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
        };
        let mut program = Program::default();
        loop {
            match parse.peek() {
                None => return Ok(program),
                Some(Token::Semicolon) => {
                    parse.next();
                    continue;
                }
                Some(_) => {}
            }
            program.statements.push(parse.statement()?);
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        match self.next() {
            Some(t) if *t == token => Ok(()),
            _ => Err(error!(SyntaxError, ..&self.column(); &format!("EXPECTED {}", token))),
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        let expr = self.expression()?;
        match self.peek() {
            None => {}
            Some(Token::Semicolon) => {
                self.next();
            }
            Some(_) => {
                return Err(error!(SyntaxError, ..&self.column(); "EXPECTED END OF STATEMENT"))
            }
        }
        Ok(Statement::Expression(expr.column(), expr))
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Integer(s)) => {
                    let column = this.column();
                    match s.parse::<i64>() {
                        Ok(n) => Expression::Integer(column, n),
                        Err(_) => return Err(error!(Overflow, ..&column; "INTEGER LITERAL")),
                    }
                }
                _ => return Err(error!(SyntaxError, ..&this.column(); "EXPECTED EXPRESSION")),
            };
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => *op,
                    _ => break,
                };
                let op_precedence = op.precedence();
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let rhs = parse(this, op_precedence + 1)?;
                let column = lhs.column().start..rhs.column().end;
                lhs = Expression::Infix(column, op, Box::new(lhs), Box::new(rhs));
            }
            Ok(lhs)
        }
        parse(self, 0)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Integer(String),
    Operator(Operator),
    LParen,
    RParen,
    Semicolon,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        match s {
            "(" => Some(Token::LParen),
            ")" => Some(Token::RParen),
            ";" => Some(Token::Semicolon),
            _ => Operator::from_string(s).map(Token::Operator),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Integer(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Semicolon => write!(f, ";"),
        }
    }
}

/// Infix operators the parser understands. Only `Plus` has a code
/// generation rule; the rest reach the compiler and are rejected there.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Less,
    Greater,
    Equal,
    NotEqual,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "+" => Some(Plus),
            "-" => Some(Minus),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "<" => Some(Less),
            ">" => Some(Greater),
            "==" => Some(Equal),
            "!=" => Some(NotEqual),
            _ => None,
        }
    }

    pub fn precedence(self) -> usize {
        use Operator::*;
        match self {
            Equal | NotEqual => 1,
            Less | Greater => 2,
            Plus | Minus => 3,
            Multiply | Divide => 4,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("!=");
        assert_eq!(t, Some(Token::Operator(Operator::NotEqual)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_from_string_punctuation() {
        assert_eq!(Token::from_string("("), Some(Token::LParen));
        assert_eq!(Token::from_string(")"), Some(Token::RParen));
        assert_eq!(Token::from_string(";"), Some(Token::Semicolon));
        assert_eq!(Token::from_string("+"), Some(Token::Operator(Operator::Plus)));
        assert_eq!(Token::from_string("=="), Some(Token::Operator(Operator::Equal)));
    }
}

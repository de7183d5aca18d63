use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    MonkeyLexer::lex(s)
}

fn is_monkey_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_monkey_digit(c: char) -> bool {
    c.is_ascii_digit()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_monkey_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            match self.chars().next() {
                Some(ch) => s.push(ch),
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            };
            if let Some(pk) = self.chars().peek() {
                if is_monkey_digit(*pk) {
                    continue;
                }
            }
            break;
        }
        Some(Token::Integer(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            if let Some(ch) = self.chars().next() {
                s.push(ch);
                if let Some(t) = Token::from_string(&s) {
                    return Some(t);
                }
                if let Some(pk) = self.chars().peek() {
                    if is_monkey_digit(*pk) || is_monkey_whitespace(*pk) {
                        break;
                    }
                    if pk.is_alphabetic() {
                        break;
                    }
                    continue;
                }
                break;
            }
        }
        Some(Token::Unknown(s))
    }
}

struct MonkeyLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for MonkeyLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for MonkeyLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if is_monkey_whitespace(*pk) {
            return self.whitespace();
        }
        if is_monkey_digit(*pk) {
            return self.number();
        }
        self.minutia()
    }
}

impl<'a> MonkeyLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut tokens = MonkeyLexer {
            chars: s.chars().peekable(),
        }
        .collect();
        MonkeyLexer::trim_end(&mut tokens);
        tokens
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
    }
}

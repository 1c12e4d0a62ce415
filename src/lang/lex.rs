use super::{token::*, Error, ErrorKind};
use tracing::trace;

/// Tokenize one line of source text.
///
/// The scanner accumulates a word buffer and flushes it whenever a
/// delimiter is hit; operators, separators, and quoted strings are emitted
/// directly. An unclosed string literal fails the whole line.
#[tracing::instrument(level = "trace", skip_all)]
pub fn lex(line: &str) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(line).run()?;
    trace!(count = tokens.len(), "lexed line");
    Ok(tokens)
}

fn is_line_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_separator_char(c: char) -> bool {
    c == '(' || c == ')' || c == ','
}

fn is_operator_char(c: char) -> bool {
    Operator::from_char(c).is_some()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    buffer: String,
    tokens: Vec<Token>,
    remark: bool,
}

impl<'a> Lexer<'a> {
    fn new(line: &'a str) -> Lexer<'a> {
        Lexer {
            chars: line.chars().peekable(),
            buffer: String::new(),
            tokens: Vec::new(),
            remark: false,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, Error> {
        while let Some(ch) = self.chars.next() {
            if self.remark {
                self.comment(ch);
                return Ok(self.tokens);
            }
            if is_line_whitespace(ch) {
                self.flush();
            } else if is_operator_char(ch) {
                self.flush();
                if self.remark {
                    self.comment(ch);
                    return Ok(self.tokens);
                }
                self.operator(ch);
            } else if is_separator_char(ch) {
                self.flush();
                if self.remark {
                    self.comment(ch);
                    return Ok(self.tokens);
                }
                self.tokens.push(match ch {
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    _ => Token::Comma,
                });
            } else if ch == '"' {
                self.flush();
                if self.remark {
                    self.comment(ch);
                    return Ok(self.tokens);
                }
                self.string()?;
            } else {
                self.buffer.push(ch);
            }
        }
        self.flush();
        Ok(self.tokens)
    }

    /// Everything from `first` to the end of the line is the remark text,
    /// including any delimiter that would otherwise start a new token.
    fn comment(&mut self, first: char) {
        let mut text = String::from(first);
        text.extend(self.chars.by_ref());
        self.tokens.push(Token::Comment(text));
    }

    /// One character of lookahead joins `>=` `<=` `<>` into a single token.
    fn operator(&mut self, first: char) {
        if let Some(&next) = self.chars.peek() {
            let mut pair = String::from(first);
            pair.push(next);
            if let Some(op) = Operator::from_str(&pair) {
                self.chars.next();
                self.tokens.push(Token::Operator(op));
                return;
            }
        }
        if let Some(op) = Operator::from_char(first) {
            self.tokens.push(Token::Operator(op));
        }
    }

    /// Copy up to the matching unescaped quote, quotes included.
    fn string(&mut self) -> Result<(), Error> {
        let mut s = String::from('"');
        let mut escaped = false;
        loop {
            match self.chars.next() {
                Some(ch) => {
                    s.push(ch);
                    if ch == '"' && !escaped {
                        break;
                    }
                    escaped = ch == '\\' && !escaped;
                }
                None => return Err(Error::new(ErrorKind::UnterminatedStringLiteral)),
            }
        }
        self.tokens.push(Token::Literal(Literal::String(s)));
        Ok(())
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let token = Token::classify(&self.buffer);
        self.buffer.clear();
        if let Token::Word(Word::Rem) = token {
            self.remark = true;
        }
        self.tokens.push(token);
    }
}

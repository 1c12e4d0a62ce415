use serde::Serialize;

/// A classified lexical unit. `Display` reproduces the source text.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Token {
    Word(Word),
    Operator(Operator),
    Literal(Literal),
    Ident(String),
    LParen,
    RParen,
    Comma,
    Dot,
    Comment(String),
}

/// The closed set of token classes reported by the tokenizer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Separator,
    Operator,
    Literal,
    Comment,
}

impl Token {
    /// Classify a buffered word. Priority: operator, keyword, separator,
    /// then number or quoted string, else identifier.
    pub fn classify(s: &str) -> Token {
        if let Some(op) = Operator::from_str(s) {
            return Token::Operator(op);
        }
        if let Some(word) = Word::from_str(s) {
            return Token::Word(word);
        }
        match s {
            "(" => return Token::LParen,
            ")" => return Token::RParen,
            "," => return Token::Comma,
            "." => return Token::Dot,
            _ => {}
        }
        if is_number(s) {
            if s.contains('.') {
                return Token::Literal(Literal::Decimal(s.to_string()));
            }
            return Token::Literal(Literal::Integer(s.to_string()));
        }
        if is_quoted(s) {
            return Token::Literal(Literal::String(s.to_string()));
        }
        Token::Ident(s.to_string())
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Word(_) => TokenKind::Keyword,
            Token::Operator(_) => TokenKind::Operator,
            Token::Literal(_) => TokenKind::Literal,
            Token::Ident(_) => TokenKind::Identifier,
            Token::LParen | Token::RParen | Token::Comma | Token::Dot => TokenKind::Separator,
            Token::Comment(_) => TokenKind::Comment,
        }
    }
}

/// `[0-9]+` or `[0-9]*.[0-9]+`
fn is_number(s: &str) -> bool {
    match s.split_once('.') {
        None => !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()),
        Some((int_part, frac_part)) => {
            !frac_part.is_empty()
                && int_part.chars().all(|c| c.is_ascii_digit())
                && frac_part.chars().all(|c| c.is_ascii_digit())
        }
    }
}

fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Word(w) => write!(f, "{}", w),
            Operator(op) => write!(f, "{}", op),
            Literal(l) => write!(f, "{}", l),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Dot => write!(f, "."),
            Comment(s) => write!(f, "{}", s),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Identifier => write!(f, "identifier"),
            Keyword => write!(f, "keyword"),
            Separator => write!(f, "separator"),
            Operator => write!(f, "operator"),
            Literal => write!(f, "literal"),
            Comment => write!(f, "comment"),
        }
    }
}

/// Numeric and string literals keep their exact source text; a string
/// literal retains its surrounding quotes.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum Literal {
    Integer(String),
    Decimal(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            Decimal(s) => write!(f, "{}", s),
            String(s) => write!(f, "{}", s),
        }
    }
}

/// Reserved words, matched case-sensitively.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Word {
    End,
    Let,
    Fn,
    Sin,
    Cos,
    Tan,
    Atn,
    Exp,
    Abs,
    Log,
    Sqr,
    Int,
    Rnd,
    Read,
    Data,
    Print,
    Goto,
    Go,
    To,
    If,
    Then,
    For,
    Step,
    Next,
    Dim,
    Def,
    Gosub,
    Return,
    Rem,
    E,
}

impl Word {
    pub fn from_str(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "END" => Some(End),
            "LET" => Some(Let),
            "FN" => Some(Fn),
            "SIN" => Some(Sin),
            "COS" => Some(Cos),
            "TAN" => Some(Tan),
            "ATN" => Some(Atn),
            "EXP" => Some(Exp),
            "ABS" => Some(Abs),
            "LOG" => Some(Log),
            "SQR" => Some(Sqr),
            "INT" => Some(Int),
            "RND" => Some(Rnd),
            "READ" => Some(Read),
            "DATA" => Some(Data),
            "PRINT" => Some(Print),
            "GOTO" => Some(Goto),
            "GO" => Some(Go),
            "TO" => Some(To),
            "IF" => Some(If),
            "THEN" => Some(Then),
            "FOR" => Some(For),
            "STEP" => Some(Step),
            "NEXT" => Some(Next),
            "DIM" => Some(Dim),
            "DEF" => Some(Def),
            "GOSUB" => Some(Gosub),
            "RETURN" => Some(Return),
            "REM" => Some(Rem),
            "E" => Some(E),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            End => write!(f, "END"),
            Let => write!(f, "LET"),
            Fn => write!(f, "FN"),
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            Tan => write!(f, "TAN"),
            Atn => write!(f, "ATN"),
            Exp => write!(f, "EXP"),
            Abs => write!(f, "ABS"),
            Log => write!(f, "LOG"),
            Sqr => write!(f, "SQR"),
            Int => write!(f, "INT"),
            Rnd => write!(f, "RND"),
            Read => write!(f, "READ"),
            Data => write!(f, "DATA"),
            Print => write!(f, "PRINT"),
            Goto => write!(f, "GOTO"),
            Go => write!(f, "GO"),
            To => write!(f, "TO"),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            For => write!(f, "FOR"),
            Step => write!(f, "STEP"),
            Next => write!(f, "NEXT"),
            Dim => write!(f, "DIM"),
            Def => write!(f, "DEF"),
            Gosub => write!(f, "GOSUB"),
            Return => write!(f, "RETURN"),
            Rem => write!(f, "REM"),
            E => write!(f, "E"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    GreaterEqual,
    Greater,
    NotEqual,
    Less,
    LessEqual,
    Equal,
}

impl Operator {
    pub fn from_str(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "+" => Some(Plus),
            "-" => Some(Minus),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            ">=" => Some(GreaterEqual),
            ">" => Some(Greater),
            "<>" => Some(NotEqual),
            "<" => Some(Less),
            "<=" => Some(LessEqual),
            "=" => Some(Equal),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Operator> {
        use Operator::*;
        match c {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '>' => Some(Greater),
            '<' => Some(Less),
            '=' => Some(Equal),
            _ => None,
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
            GreaterEqual => write!(f, ">="),
            Greater => write!(f, ">"),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Equal => write!(f, "="),
        }
    }
}

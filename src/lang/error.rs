use super::LineNumber;
use serde::Serialize;

/// Everything that can go wrong while tokenizing or parsing.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, thiserror::Error)]
pub enum ErrorKind {
    #[error("UNTERMINATED STRING LITERAL")]
    UnterminatedStringLiteral,
    #[error("INVALID LINE NUMBER")]
    InvalidLineNumber,
    #[error("MUST ASSIGN TO IDENTIFIER")]
    ExpectedIdentifier,
    #[error("EXPECTED OPERAND")]
    ExpectedOperand,
    #[error("ASSIGNMENT MUST HAVE EQUALS SIGN")]
    ExpectedEqualsSign,
    #[error("PARENTHESIS MISMATCH")]
    ParenthesisMismatch,
    #[error("UNEXPECTED END OF INPUT")]
    UnexpectedEndOfInput,
    #[error("UNEXPECTED TOKEN")]
    UnexpectedToken,
}

/// An `ErrorKind` tagged with the line it was raised on. The line number is
/// the BASIC line number when one had been read, otherwise the 1-based
/// position of the offending line in the input text.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Error {
    kind: ErrorKind,
    line_number: LineNumber,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            line_number: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn in_line_number(self, line_number: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            kind: self.kind,
            line_number,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.line_number {
            Some(line_number) => write!(f, "{} IN {}", self.kind, line_number),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}

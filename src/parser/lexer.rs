//! Lexer (tokenizer) for expression source text
//!
//! Converts the raw input string into a flat [`Token`] stream consumed by the
//! parser. Tokens carry byte spans into the original input rather than copies
//! of the matched text, so the input string must outlive any use of the spans.

use super::ast::Span;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`Span`] so that parse errors can report an exact
/// byte offset without a separate token→position table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Decimal integer literal with its parsed value.
    Num(i64, Span),

    // Arithmetic
    Plus(Span),  // +
    Minus(Span), // -
    Star(Span),  // *
    Slash(Span), // /

    // Comparison
    EqEq(Span),  // ==
    NotEq(Span), // !=
    Lt(Span),    // <
    Le(Span),    // <=
    Gt(Span),    // >
    Ge(Span),    // >=

    // Punctuation
    LParen(Span), // (
    RParen(Span), // )

    // End of input
    Eof(Span),
}

impl Token {
    /// Returns the source span where this token appears.
    pub fn span(&self) -> Span {
        match self {
            Token::Num(_, span)
            | Token::Plus(span)
            | Token::Minus(span)
            | Token::Star(span)
            | Token::Slash(span)
            | Token::EqEq(span)
            | Token::NotEq(span)
            | Token::Lt(span)
            | Token::Le(span)
            | Token::Gt(span)
            | Token::Ge(span)
            | Token::LParen(span)
            | Token::RParen(span)
            | Token::Eof(span) => *span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(n, _) => write!(f, "number {}", n),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::NotEq(_) => write!(f, "'!='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Le(_) => write!(f, "'<='"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Ge(_) => write!(f, "'>='"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at offset {}: {}",
            self.span.start, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for expression source text
///
/// Scans the input once, left to right, with no backtracking. The input is
/// borrowed, never mutated or copied.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(Span::new(self.position, 0)));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let b = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            span: Span::new(start, 0),
        })?;

        match b {
            // Numeric literals
            b'0'..=b'9' => self.number_literal(start),

            // Operators and punctuation; two-character operators are matched
            // before their one-character prefixes
            b'+' => Ok(Token::Plus(Span::new(start, 1))),
            b'-' => Ok(Token::Minus(Span::new(start, 1))),
            b'*' => Ok(Token::Star(Span::new(start, 1))),
            b'/' => Ok(Token::Slash(Span::new(start, 1))),
            b'(' => Ok(Token::LParen(Span::new(start, 1))),
            b')' => Ok(Token::RParen(Span::new(start, 1))),
            b'<' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Ok(Token::Le(Span::new(start, 2)))
                } else {
                    Ok(Token::Lt(Span::new(start, 1)))
                }
            }
            b'>' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Ok(Token::Ge(Span::new(start, 2)))
                } else {
                    Ok(Token::Gt(Span::new(start, 1)))
                }
            }
            // '=' and '!' are only valid as the start of '==' / '!='
            b'=' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Ok(Token::EqEq(Span::new(start, 2)))
                } else {
                    Err(LexError {
                        message: "Unexpected character: '='".to_string(),
                        span: Span::new(start, 1),
                    })
                }
            }
            b'!' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Ok(Token::NotEq(Span::new(start, 2)))
                } else {
                    Err(LexError {
                        message: "Unexpected character: '!'".to_string(),
                        span: Span::new(start, 1),
                    })
                }
            }

            other => {
                let shown = if other.is_ascii_graphic() {
                    format!("'{}'", other as char)
                } else {
                    format!("byte 0x{:02x}", other)
                };
                Err(LexError {
                    message: format!("Unexpected character: {}", shown),
                    span: Span::new(start, 1),
                })
            }
        }
    }

    /// Parse a numeric literal (decimal integers only)
    fn number_literal(&mut self, start: usize) -> Result<Token, LexError> {
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[start..self.position];
        let value = text.parse::<i64>().map_err(|_| LexError {
            message: format!("Integer literal too large: {}", text),
            span: Span::new(start, text.len()),
        })?;

        Ok(Token::Num(value, Span::new(start, text.len())))
    }

    /// Skip whitespace between tokens
    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at the current byte without consuming
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Advance to the next byte
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.position += 1;
        Some(b)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("1+2*3");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Num(1, _)));
        assert!(matches!(tokens[1], Token::Plus(_)));
        assert!(matches!(tokens[2], Token::Num(2, _)));
        assert!(matches!(tokens[3], Token::Star(_)));
        assert!(matches!(tokens[4], Token::Num(3, _)));
        assert!(matches!(tokens[5], Token::Eof(_)));
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_two_char_operators_are_greedy() {
        let mut lexer = Lexer::new("1<=2");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[1], Token::Le(_)));
        assert_eq!(tokens.len(), 4);

        let mut lexer = Lexer::new("== != <= >= < >");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::EqEq(_)));
        assert!(matches!(tokens[1], Token::NotEq(_)));
        assert!(matches!(tokens[2], Token::Le(_)));
        assert!(matches!(tokens[3], Token::Ge(_)));
        assert!(matches!(tokens[4], Token::Lt(_)));
        assert!(matches!(tokens[5], Token::Gt(_)));
    }

    #[test]
    fn test_number_spans_cover_the_whole_literal() {
        let mut lexer = Lexer::new("10+200");
        let tokens = lexer.tokenize().unwrap();

        match tokens[0] {
            Token::Num(10, span) => assert_eq!(span, Span::new(0, 2)),
            ref other => panic!("Expected number 10, got {:?}", other),
        }
        match tokens[2] {
            Token::Num(200, span) => assert_eq!(span, Span::new(3, 3)),
            ref other => panic!("Expected number 200, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let mut lexer = Lexer::new("  1 \t+\n 2  ");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Num(1, _)));
        assert!(matches!(tokens[1], Token::Plus(_)));
        assert!(matches!(tokens[2], Token::Num(2, _)));
        assert!(matches!(tokens[3], Token::Eof(_)));
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        let mut lexer = Lexer::new("");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0], Token::Eof(span) if span == Span::new(0, 0)));
    }

    #[test]
    fn test_unexpected_character_offset() {
        let mut lexer = Lexer::new("1+@2");
        let err = lexer.tokenize().unwrap_err();

        assert_eq!(err.span.start, 2);
    }

    #[test]
    fn test_lone_equals_is_rejected() {
        let mut lexer = Lexer::new("1=2");
        let err = lexer.tokenize().unwrap_err();

        assert_eq!(err.span.start, 1);
    }

    #[test]
    fn test_lone_bang_is_rejected() {
        let mut lexer = Lexer::new("!1");
        let err = lexer.tokenize().unwrap_err();

        assert_eq!(err.span.start, 0);
    }

    #[test]
    fn test_oversized_literal_is_rejected() {
        let mut lexer = Lexer::new("99999999999999999999");
        assert!(lexer.tokenize().is_err());
    }
}

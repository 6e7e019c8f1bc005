//! Recursive descent JSON parser.
//!
//! Consumes the token stream produced by the [`Lexer`] and builds the
//! [`Value`] tree. The parser owns the structural rules: bracket matching,
//! separators, the trailing-comma and trailing-content rejections, and the
//! nesting ceiling that protects the native call stack.

use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token};
use crate::limits::Limits;
use crate::value::Value;

/// JSON parser with strict validation.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    current_start: usize,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> Result<Self> {
        let mut lexer = Lexer::new(input)?;
        let current = lexer.next_token()?;
        let current_start = lexer.token_start();
        Ok(Self {
            lexer,
            current,
            current_start,
            limits,
            depth: 0,
        })
    }

    /// Parse the input as a single document.
    ///
    /// Anything other than whitespace after the top-level value is an
    /// error.
    pub fn parse(&mut self) -> Result<Value> {
        let value = self.parse_value()?;

        if self.current != Token::Eof {
            return Err(Error::TrailingCharacters(self.current_start));
        }

        Ok(value)
    }

    /// Advance to the next token.
    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        self.current_start = self.lexer.token_start();
        Ok(())
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> Result<Value> {
        match &mut self.current {
            Token::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            Token::True => {
                self.advance()?;
                Ok(Value::Bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(Value::Bool(false))
            }
            Token::Number(n) => {
                let n = *n;
                self.advance()?;
                Ok(Value::Number(n))
            }
            Token::String(s) => {
                let s = std::mem::take(s);
                self.advance()?;
                Ok(Value::String(s))
            }
            Token::LeftBracket => self.parse_array(),
            Token::LeftBrace => self.parse_object(),
            Token::Eof => Err(Error::UnexpectedEnd),
            _ => Err(Error::UnexpectedCharacter(self.current_start)),
        }
    }

    /// Fail when the nesting of arrays and objects reaches the ceiling.
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth >= self.limits.max_depth {
            return Err(Error::DepthLimitExceeded(self.limits.max_depth));
        }
        Ok(())
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;

        // Consume opening bracket
        self.advance()?;

        let mut items = Vec::new();

        if self.current == Token::RightBracket {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBracket {
                        return Err(Error::TrailingComma(self.current_start));
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(Error::UnexpectedCharacter(self.current_start)),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;

        // Consume opening brace
        self.advance()?;

        let mut pairs: Vec<(String, Value)> = Vec::new();

        if self.current == Token::RightBrace {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Object(pairs));
        }

        loop {
            let key = match &mut self.current {
                Token::String(s) => std::mem::take(s),
                _ => return Err(Error::UnexpectedCharacter(self.current_start)),
            };
            self.advance()?;

            if self.current != Token::Colon {
                return Err(Error::UnexpectedCharacter(self.current_start));
            }
            self.advance()?;

            let value = self.parse_value()?;
            // Duplicate keys are retained; lookup returns the first match.
            pairs.push((key, value));

            match &self.current {
                Token::Comma => {
                    self.advance()?;
                    if self.current == Token::RightBrace {
                        return Err(Error::TrailingComma(self.current_start));
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(Error::UnexpectedCharacter(self.current_start)),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(pairs))
    }
}

/// Parse a JSON document with the default nesting ceiling.
pub fn parse(input: &[u8]) -> Result<Value> {
    parse_with_limits(input, Limits::new())
}

/// Parse a JSON document with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> Result<Value> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse()
}

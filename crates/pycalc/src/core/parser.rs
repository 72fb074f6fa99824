//! Expression tokenizer and parser
//!
//! Only the keypad alphabet is accepted: digits, `.`, `+ - * /` and
//! parentheses. `**` and `//` are what pressing `*` or `/` twice produces.

use num_bigint::BigInt;

use crate::core::number::MAX_INT_DIGITS;
use crate::core::{CalcError, CalcResult, Number, Operation};

/// Deepest nesting of parentheses, unary signs and exponents accepted
pub const MAX_DEPTH: usize = 200;

/// Most binary operators accepted in one expression
pub const MAX_OPERATORS: usize = 1000;

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(Number),
    /// Operator (binary, or unary `+`/`-`)
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(Number),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates an integer literal node
    #[must_use]
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::Number(Number::int(value))
    }

    /// Creates a float literal node
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' => {
                self.advance();
                Token::Operator(Operation::Add)
            }
            '-' => {
                self.advance();
                Token::Operator(Operation::Subtract)
            }
            '*' => {
                self.advance();
                if self.eat('*') {
                    Token::Operator(Operation::Power)
                } else {
                    Token::Operator(Operation::Multiply)
                }
            }
            '/' => {
                self.advance();
                if self.eat('/') {
                    Token::Operator(Operation::FloorDivide)
                } else {
                    Token::Operator(Operation::Divide)
                }
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => return Err(CalcError::InvalidCharacter(ch)),
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.pos - start
    }

    /// Reads `DIGITS ['.' [DIGITS]] [EXP]` or `'.' DIGITS [EXP]`.
    ///
    /// The exponent form only exists so that rendered results like
    /// `1e+16` can be evaluated again.
    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut is_float = false;

        let int_digits = self.skip_digits();
        let mut frac_digits = 0;
        if self.eat('.') {
            is_float = true;
            frac_digits = self.skip_digits();
        }
        if int_digits == 0 && frac_digits == 0 {
            return Err(CalcError::parse(format!(
                "Invalid number: '{}'",
                &self.input[start..self.pos]
            )));
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            is_float = true;
            self.advance();
            if !self.eat('+') {
                self.eat('-');
            }
            if self.skip_digits() == 0 {
                return Err(CalcError::parse(format!(
                    "Invalid number: '{}'",
                    &self.input[start..self.pos]
                )));
            }
        }

        let literal = &self.input[start..self.pos];
        let number = if is_float {
            literal
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|_| CalcError::parse(format!("Invalid number: '{literal}'")))?
        } else {
            if literal.starts_with('0') && literal.bytes().any(|b| b != b'0') {
                return Err(CalcError::parse(format!(
                    "Leading zeros in integer literal: '{literal}'"
                )));
            }
            if literal.len() > MAX_INT_DIGITS {
                return Err(CalcError::Overflow);
            }
            literal
                .parse::<BigInt>()
                .map(Number::Integer)
                .map_err(|_| CalcError::parse(format!("Invalid number: '{literal}'")))?
        };

        Ok(Token::Number(number))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/' | '//') unary)*
/// unary      ::= ('+' | '-') unary | power
/// power      ::= primary ('**' unary)?     // Right associative
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// Nesting is capped at [`MAX_DEPTH`] and binary operators at
/// [`MAX_OPERATORS`], which bounds the height of the tree.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    operators: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            operators: 0,
        }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        if input.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::parse(format!(
                "Unexpected token {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> CalcResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::parse("Expression nested too deeply"));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn combine(&mut self, left: AstNode, op: Operation, right: AstNode) -> CalcResult<AstNode> {
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(CalcError::parse("Expression has too many operators"));
        }
        Ok(AstNode::binary(left, op, right))
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Operator(Operation::Add) => Operation::Add,
                Token::Operator(Operation::Subtract) => Operation::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = self.combine(left, op, right)?;
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Operator(Operation::Multiply) => Operation::Multiply,
                Token::Operator(Operation::Divide) => Operation::Divide,
                Token::Operator(Operation::FloorDivide) => Operation::FloorDivide,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = self.combine(left, op, right)?;
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        let sign = match self.current() {
            Some(Token::Operator(Operation::Subtract)) => Operation::Subtract,
            Some(Token::Operator(Operation::Add)) => Operation::Add,
            _ => return self.parse_power(),
        };
        self.advance();

        self.descend()?;
        let inner = self.parse_unary();
        self.ascend();

        // Unary plus is the identity
        match sign {
            Operation::Subtract => inner.map(AstNode::negate),
            _ => inner,
        }
    }

    fn parse_power(&mut self) -> CalcResult<AstNode> {
        let base = self.parse_primary()?;

        if matches!(self.current(), Some(Token::Operator(Operation::Power))) {
            self.advance();
            // The exponent may carry its own sign: 2**-1
            self.descend()?;
            let exponent = self.parse_unary();
            self.ascend();
            return self.combine(base, Operation::Power, exponent?);
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .cloned()
            .ok_or_else(|| CalcError::parse("Unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::Number(n)),
            Token::LeftParen => {
                self.descend()?;
                let expr = self.parse_expression();
                self.ascend();
                let expr = expr?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::parse(format!("Expected ')' but found {t:?}"))),
                    None => Err(CalcError::parse("Unclosed parenthesis")),
                }
            }
            _ => Err(CalcError::parse(format!("Unexpected token: {token:?}"))),
        }
    }
}

//! # Type Expressions
//!
//! Emitted member types are written as short type expressions, the same way
//! they appear in the output:
//!
//! ```text
//! type   := '[' expr ']' type | ident
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := integer | ident | '(' expr ')'
//! ```
//!
//! An identifier in type position names a builtin, an alias, or a
//! structure. An identifier in an array length names a constant of the same
//! module, which keeps lengths like `[(SNDRV_MASK_MAX + 31) / 32]__u32`
//! symbolic in the output while their value is still checked against the
//! native member size.
//!
//! Expressions are rendered with a single space around binary operators and
//! parentheses preserved, which is the canonical Go formatting of such
//! lengths.

use core::fmt;

use crate::error::Error;

/// Binary arithmetic operators of array lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

/// Array length expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Int(u64),
    Const(String),
    Paren(Box<Expr>),
    Binary(Box<Expr>, Op, Box<Expr>),
}

/// Reasons an array length cannot be evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    Unknown(String),
    Overflow,
    DivideByZero,
}

impl Expr {
    /// Evaluate the expression, resolving constants via `lookup`.
    pub fn eval<F>(&self, lookup: &F) -> Result<i128, Fault>
    where
        F: Fn(&str) -> Option<i128>,
    {
        match self {
            Expr::Int(v) => Ok(*v as i128),
            Expr::Const(name) => lookup(name).ok_or_else(|| Fault::Unknown(name.clone())),
            Expr::Paren(v) => v.eval(lookup),
            Expr::Binary(l, op, r) => {
                let l = l.eval(lookup)?;
                let r = r.eval(lookup)?;
                match op {
                    Op::Add => l.checked_add(r).ok_or(Fault::Overflow),
                    Op::Sub => l.checked_sub(r).ok_or(Fault::Overflow),
                    Op::Mul => l.checked_mul(r).ok_or(Fault::Overflow),
                    Op::Div if r == 0 => Err(Fault::DivideByZero),
                    // C semantics: integer division truncates toward zero.
                    Op::Div => l.checked_div(r).ok_or(Fault::Overflow),
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(v) => write!(fmt, "{}", v),
            Expr::Const(v) => fmt.write_str(v),
            Expr::Paren(v) => write!(fmt, "({})", v),
            Expr::Binary(l, op, r) => write!(fmt, "{} {} {}", l, op.symbol(), r),
        }
    }
}

/// Emitted type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ty {
    Name(String),
    Array(Expr, Box<Ty>),
}

impl Ty {
    /// Parse a type expression.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut p = Parser {
            input: input,
            pos: 0,
        };
        let ty = p.ty()?;
        p.skip_ws();
        if p.pos < input.len() {
            return Err(p.fail("trailing input"));
        }
        Ok(ty)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Name(v) => fmt.write_str(v),
            Ty::Array(len, elem) => write!(fmt, "[{}]{}", len, elem),
        }
    }
}

struct Parser<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Parser<'input> {
    fn fail(&self, reason: &'static str) -> Error {
        Error::Syntax {
            input: self.input.to_owned(),
            position: self.pos,
            reason: reason,
        }
    }

    fn skip_ws(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn span(&mut self, accept: impl Fn(u8) -> bool) -> &'input str {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && accept(bytes[self.pos]) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn ident(&mut self) -> Result<&'input str, Error> {
        match self.peek() {
            Some(c) if c == b'_' || c.is_ascii_alphabetic() => {
                Ok(self.span(|c| c == b'_' || c.is_ascii_alphanumeric()))
            }
            _ => Err(self.fail("expected identifier")),
        }
    }

    fn ty(&mut self) -> Result<Ty, Error> {
        if self.eat(b'[') {
            let len = self.expr()?;
            if !self.eat(b']') {
                return Err(self.fail("expected `]`"));
            }
            let elem = self.ty()?;
            Ok(Ty::Array(len, Box::new(elem)))
        } else {
            Ok(Ty::Name(self.ident()?.to_owned()))
        }
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        let mut l = self.term()?;
        loop {
            let op = if self.eat(b'+') {
                Op::Add
            } else if self.eat(b'-') {
                Op::Sub
            } else {
                return Ok(l);
            };
            let r = self.term()?;
            l = Expr::Binary(Box::new(l), op, Box::new(r));
        }
    }

    fn term(&mut self) -> Result<Expr, Error> {
        let mut l = self.factor()?;
        loop {
            let op = if self.eat(b'*') {
                Op::Mul
            } else if self.eat(b'/') {
                Op::Div
            } else {
                return Ok(l);
            };
            let r = self.factor()?;
            l = Expr::Binary(Box::new(l), op, Box::new(r));
        }
    }

    fn factor(&mut self) -> Result<Expr, Error> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let v = self.expr()?;
                if !self.eat(b')') {
                    return Err(self.fail("expected `)`"));
                }
                Ok(Expr::Paren(Box::new(v)))
            }
            Some(c) if c.is_ascii_digit() => self.integer(),
            Some(_) => Ok(Expr::Const(self.ident()?.to_owned())),
            None => Err(self.fail("unexpected end of input")),
        }
    }

    fn integer(&mut self) -> Result<Expr, Error> {
        let start = self.pos;
        let hex = self.input[self.pos..].starts_with("0x") || self.input[self.pos..].starts_with("0X");
        let v = if hex {
            self.pos += 2;
            let digits = self.span(|c| c.is_ascii_hexdigit());
            u64::from_str_radix(digits, 16)
        } else {
            self.span(|c| c.is_ascii_digit()).parse::<u64>()
        };
        match v {
            Ok(v) => Ok(Expr::Int(v)),
            Err(_) => {
                self.pos = start;
                Err(self.fail("invalid integer literal"))
            }
        }
    }
}

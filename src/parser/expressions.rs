/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  The entire Fluentix expression grammar.
 *
 * Parsing order follows strict precedence, low to high binding power:
 *
 *   comparison → additive → multiplicative → exponent → unary → call → primary
 *
 * Every binary level folds left, except exponentiation, which folds
 * right-to-left.
 *
 * Website:  https://fluentix.dev
 * Docs:     https://docs.fluentix.dev
 *
 * License:
 * This file is part of the Fluentix programming language project.
 * Fluentix is distributed under the terms of the MIT license.
 *
 * ==========================================================================
 */

use crate::ast::{BinaryOp, CompareOp, Expr, Sign};
use crate::errors::{FluError, FluResult};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::helpers::{decode_escapes, split_on_semicolons};
use crate::parser::parser::Parser;

impl Parser {
    /// expression → comparison
    pub fn expression(&mut self) -> FluResult<Expr> {
        self.comparison()
    }

    /// comparison → additive ( ( "=" | "<>" | ">" | ">=" | "<" | "<=" ) additive )*
    fn comparison(&mut self) -> FluResult<Expr> {
        let mut left = self.additive()?;

        while let Some(op) = compare_op(self.at().kind) {
            self.eat();
            let right = self.additive()?;

            left = Expr::Comparison {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// additive → multiplicative ( ( "+" | "-" ) multiplicative )*
    fn additive(&mut self) -> FluResult<Expr> {
        let mut left = self.multiplicative()?;

        loop {
            let op = match self.at().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                _ => break,
            };

            self.eat();
            let right = self.multiplicative()?;

            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// multiplicative → exponent ( ( "*" | "/" ) exponent )*
    fn multiplicative(&mut self) -> FluResult<Expr> {
        let mut left = self.exponent()?;

        loop {
            let op = match self.at().kind {
                TokenKind::Multiply => BinaryOp::Multiply,
                TokenKind::Divide => BinaryOp::Divide,
                _ => break,
            };

            self.eat();
            let right = self.exponent()?;

            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// exponent → unary ( "^" unary )*
    ///
    /// Collects the `^`-separated operand list, then folds it right-to-left
    /// so `a ^ b ^ c` parses as `a ^ (b ^ c)`.
    fn exponent(&mut self) -> FluResult<Expr> {
        let mut folded = self.unary()?;

        if self.at().kind != TokenKind::Power {
            return Ok(folded);
        }

        let mut rest = Vec::new();
        while self.at().kind == TokenKind::Power {
            self.eat();
            rest.push(self.unary()?);
        }

        if let Some(mut acc) = rest.pop() {
            while let Some(base) = rest.pop() {
                acc = Expr::Binary {
                    left: Box::new(base),
                    op: BinaryOp::Power,
                    right: Box::new(acc),
                };
            }

            folded = Expr::Binary {
                left: Box::new(folded),
                op: BinaryOp::Power,
                right: Box::new(acc),
            };
        }

        Ok(folded)
    }

    /// unary → ( "+" | "-" )* call
    ///
    /// Consumes the whole run of sign tokens; any `-` in the run pins the
    /// sign to negative, and repeats do not cancel it back to positive.
    /// The operand is wrapped only when at least one sign was consumed.
    fn unary(&mut self) -> FluResult<Expr> {
        if !matches!(self.at().kind, TokenKind::Plus | TokenKind::Minus) {
            return self.call();
        }

        let mut sign = Sign::Positive;
        while matches!(self.at().kind, TokenKind::Plus | TokenKind::Minus) {
            if self.eat().kind == TokenKind::Minus {
                sign = Sign::Negative;
            }
        }

        let operand = self.call()?;

        Ok(Expr::Unary {
            sign,
            operand: Box::new(operand),
        })
    }

    /// call → primary ( ":" argument-span )?
    ///
    /// After the `:`, the argument span runs to the line terminator, with
    /// an early stop at an unmatched `)`/`]` at depth zero — that closer
    /// belongs to an enclosing parenthesis or array. The span is then split
    /// on depth-zero `;` into argument spans, each parsed as an independent
    /// expression by a throwaway instance.
    fn call(&mut self) -> FluResult<Expr> {
        let callee = self.primary()?;

        if self.at().kind != TokenKind::Colon {
            return Ok(callee);
        }

        self.eat(); // ':'

        let span = self.capture_call_span()?;
        let pieces = split_on_semicolons(&span, false)?;

        let mut arguments = Vec::new();
        for piece in pieces {
            arguments.push(self.parse_expression_slice(piece)?);
        }

        Ok(Expr::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    /// Collects the raw argument span of a call, tracking bracket depth.
    ///
    /// A closer of the wrong kind for the innermost opener is a structural
    /// error; a closer with nothing open ends the span without being
    /// consumed.
    fn capture_call_span(&mut self) -> FluResult<Vec<Token>> {
        let mut inside = Vec::new();
        let mut stack: Vec<TokenKind> = Vec::new();

        while !self.at_end() {
            match self.at().kind {
                TokenKind::OpenParen | TokenKind::OpenBracket => {
                    stack.push(self.at().kind);
                }
                TokenKind::CloseParen => {
                    if stack.is_empty() {
                        break;
                    }
                    if stack.last() != Some(&TokenKind::OpenParen) {
                        return Err(FluError::syntax("Unexpected ')'", 42));
                    }
                    stack.pop();
                }
                TokenKind::CloseBracket => {
                    if stack.is_empty() {
                        break;
                    }
                    if stack.last() != Some(&TokenKind::OpenBracket) {
                        return Err(FluError::syntax("Unexpected ']'", 69));
                    }
                    stack.pop();
                }
                _ => {}
            }

            inside.push(self.eat());
        }

        Ok(inside)
    }

    /// primary → identifier | literal | "(" expression ")" | array
    fn primary(&mut self) -> FluResult<Expr> {
        match self.at().kind {
            TokenKind::Identifier => Ok(Expr::Identifier(self.eat().lexeme)),

            TokenKind::Number => {
                let token = self.eat();
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    FluError::syntax(
                        format!("Unexpected token found: '{}'", token.lexeme),
                        11,
                    )
                })?;

                Ok(Expr::Number(value))
            }

            TokenKind::True => {
                self.eat();
                Ok(Expr::Bool(true))
            }

            TokenKind::False => {
                self.eat();
                Ok(Expr::Bool(false))
            }

            TokenKind::Null => {
                self.eat();
                Ok(Expr::Null)
            }

            TokenKind::String => {
                let raw = self.eat().lexeme;
                Ok(Expr::Str(decode_escapes(&raw)))
            }

            TokenKind::OpenParen => {
                self.eat(); // '('
                let expression = self.expression()?;

                self.expect(
                    &[TokenKind::CloseParen],
                    FluError::syntax("Expected ')'", 99),
                )?;

                Ok(expression)
            }

            TokenKind::OpenBracket => self.array_literal(),

            _ => Err(FluError::syntax(
                format!("Unexpected token found: '{}'", self.at().lexeme),
                11,
            )),
        }
    }

    /// array → "[" depth-tracked span "]"
    ///
    /// The span runs to the matching closer, then splits on depth-zero `;`
    /// exactly like call arguments; line terminators inside the span are
    /// dropped, so array literals may span lines. Empty pieces contribute
    /// no elements.
    fn array_literal(&mut self) -> FluResult<Expr> {
        self.eat(); // '['

        let mut inside = Vec::new();
        let mut stack: Vec<TokenKind> = Vec::new();

        while (self.at().kind != TokenKind::CloseBracket || !stack.is_empty())
            && self.at().kind != TokenKind::Eof
        {
            let token = self.eat();

            match token.kind {
                TokenKind::OpenParen | TokenKind::OpenBracket => {
                    stack.push(token.kind);
                }
                TokenKind::CloseParen => {
                    if !stack.contains(&TokenKind::OpenParen) {
                        return Err(FluError::syntax("Unexpected ')'", 89));
                    }
                    if stack.last() != Some(&TokenKind::OpenParen) {
                        return Err(FluError::syntax("Unexpected ')'", 6));
                    }
                    stack.pop();
                }
                TokenKind::CloseBracket => {
                    if !stack.contains(&TokenKind::OpenBracket) {
                        return Err(FluError::syntax("Unexpected ']'", 8));
                    }
                    if stack.last() != Some(&TokenKind::OpenBracket) {
                        return Err(FluError::syntax("Unexpected ']'", 23));
                    }
                    stack.pop();
                }
                _ => {}
            }

            inside.push(token);
        }

        if self.at().kind == TokenKind::Eof {
            return Err(FluError::syntax("Unexpected ']'", 25));
        }

        self.eat(); // ']'

        let pieces = split_on_semicolons(&inside, true)?;

        let mut elements = Vec::new();
        for piece in pieces {
            elements.push(self.parse_expression_slice(piece)?);
        }

        Ok(Expr::Array(elements))
    }
}

/// Maps a comparison-operator token kind to its AST operator.
fn compare_op(kind: TokenKind) -> Option<CompareOp> {
    let op = match kind {
        TokenKind::Equals => CompareOp::Equals,
        TokenKind::NotEquals => CompareOp::NotEquals,
        TokenKind::GreaterThan => CompareOp::GreaterThan,
        TokenKind::GreaterThanOrEquals => CompareOp::GreaterThanOrEquals,
        TokenKind::SmallerThan => CompareOp::SmallerThan,
        TokenKind::SmallerThanOrEquals => CompareOp::SmallerThanOrEquals,
        _ => return None,
    };

    Some(op)
}

/*
 * ==========================================================================
 * FLUENTIX - Programming made simple.
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Statement-level grammar for the Fluentix parser: keyword
 *           dispatch, declarations, conditionals, loops, module and
 *           array statements.
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

use crate::ast::{Expr, Stmt};
use crate::errors::{FluError, FluResult};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// Parses a single statement.
    ///
    /// This is the main dispatcher: it routes on the leading token's kind
    /// and consumes exactly the tokens belonging to that statement,
    /// including the trailing line terminator where the grammar requires
    /// one.
    ///
    /// Keywords gated behind the extended dialect deliberately fall through
    /// to the expression fallback when disabled, so a disabled keyword is
    /// reported with the same "unexpected token" error as any other
    /// malformed input.
    pub fn statement(&mut self) -> FluResult<Stmt> {
        match self.at().kind {
            TokenKind::Variable => self.variable_declaration(),
            TokenKind::Let => self.let_declaration(),
            TokenKind::Constant => self.constant_declaration(),

            TokenKind::Create if self.dialect.has_extended_syntax() => {
                self.create_statement()
            }

            TokenKind::If | TokenKind::Unless => self.conditional_statement(),
            TokenKind::Get => self.get_statement(),
            TokenKind::Define => self.function_declaration(),
            TokenKind::Return => self.return_statement(),
            TokenKind::Until => self.until_statement(),
            TokenKind::Repeat => self.repeat_statement(),
            TokenKind::Stop => self.stop_statement(),

            TokenKind::Break if self.dialect.has_extended_syntax() => {
                self.stop_statement()
            }

            TokenKind::Forever if self.dialect.has_extended_syntax() => {
                self.forever_statement()
            }

            TokenKind::Include => self.include_statement(),
            TokenKind::Exclude => self.exclude_statement(),

            _ => self.expression_statement(),
        }
    }

    /// `variable <identifier> is <expression>`
    fn variable_declaration(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'variable'
        self.finish_variable_declaration()
    }

    /// Shared tail of `variable x is expr`, entered after the keyword.
    ///
    /// Also the target of the `create: variable` / `create: changeable`
    /// redirections.
    fn finish_variable_declaration(&mut self) -> FluResult<Stmt> {
        let name = self
            .expect(
                &[TokenKind::Identifier],
                FluError::syntax("Expected identifier", 65),
            )?
            .lexeme;

        self.expect(&[TokenKind::Is], FluError::syntax("Expected 'is'", 15))?;

        let value = self.expression()?;
        self.require_line_end(61)?;

        Ok(Stmt::Assignment {
            name,
            value,
            constant: false,
        })
    }

    /// `let <identifier> be <expression>`
    fn let_declaration(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'let'

        let name = self
            .expect(
                &[TokenKind::Identifier],
                FluError::syntax("Expected identifier", 57),
            )?
            .lexeme;

        self.expect(&[TokenKind::Be], FluError::syntax("Expected 'be'", 34))?;

        let value = self.expression()?;
        self.require_line_end(98)?;

        Ok(Stmt::Assignment {
            name,
            value,
            constant: false,
        })
    }

    /// `constant <identifier> is <expression>`
    fn constant_declaration(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'constant'
        self.finish_constant_declaration()
    }

    /// Shared tail of `constant x is expr`, entered after the keyword.
    fn finish_constant_declaration(&mut self) -> FluResult<Stmt> {
        let name = self
            .expect(
                &[TokenKind::Identifier],
                FluError::syntax("Expected identifier", 19),
            )?
            .lexeme;

        self.expect(&[TokenKind::Is], FluError::syntax("Expected 'is'", 68))?;

        let value = self.expression()?;
        self.require_line_end(37)?;

        Ok(Stmt::Assignment {
            name,
            value,
            constant: true,
        })
    }

    /// `create: <variable|constant|changeable|unchangeable|function> ...`
    ///
    /// Surface-syntax alias of the direct declaration forms, available only
    /// under the extended dialect. The matched follower keyword routes
    /// straight to the corresponding declaration tail (`changeable` ≡
    /// `variable`, `unchangeable` ≡ `constant`); no token is pushed back.
    fn create_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'create'

        self.expect(&[TokenKind::Colon], FluError::syntax("Expected ':'", 80))?;

        let target = self.expect(
            &[
                TokenKind::Variable,
                TokenKind::Constant,
                TokenKind::Changeable,
                TokenKind::Unchangeable,
                TokenKind::Function,
            ],
            FluError::syntax(
                "Expected 'variable', 'constant', 'changeable' or 'unchangeable'",
                97,
            ),
        )?;

        match target.kind {
            TokenKind::Variable | TokenKind::Changeable => {
                self.finish_variable_declaration()
            }
            TokenKind::Constant | TokenKind::Unchangeable => {
                self.finish_constant_declaration()
            }
            TokenKind::Function => self.finish_function_declaration(),
            _ => unreachable!("expect() only admits the listed kinds"),
        }
    }

    /// `<target> is now <expression>` — entered from the expression
    /// fallback once the already-parsed left-hand side is followed by the
    /// rebind keyword.
    fn update_statement(&mut self, target: Expr) -> FluResult<Stmt> {
        self.eat(); // 'is'

        self.expect(&[TokenKind::Now], FluError::syntax("Expected 'now'", 92))?;

        let value = self.expression()?;
        self.require_line_end(67)?;

        Ok(Stmt::Update { target, value })
    }

    /// `get: module <identifier>`
    fn get_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'get'

        self.expect(&[TokenKind::Colon], FluError::syntax("Expected ':'", 99))?;
        self.expect(
            &[TokenKind::Module],
            FluError::syntax("Expected 'module'", 99),
        )?;

        let module = self
            .expect(
                &[TokenKind::Identifier],
                FluError::syntax("Expected module name", 99),
            )?
            .lexeme;

        self.require_line_end(99)?;

        Ok(Stmt::GetModule { module })
    }

    /// `if <condition>` / `unless <condition>` with an indented body.
    ///
    /// The condition span is every remaining token of the header line,
    /// parsed by a throwaway instance. After the body, an immediately
    /// following `unless` recurses into this handler and attaches the
    /// result as the "otherwise" branch; an `else` attaches its own block
    /// wrapped in a synthetic always-true conditional, normalizing both
    /// forms into a single binary-branch node shape.
    fn conditional_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'if' or 'unless'

        let condition_tokens = self.capture_line();
        let condition = self.parse_expression_slice(condition_tokens)?;

        let body = self.parse_block()?;

        match self.at().kind {
            TokenKind::Unless => {
                let otherwise = self.conditional_statement()?;

                Ok(Stmt::Conditional {
                    condition,
                    body,
                    otherwise: Some(Box::new(otherwise)),
                })
            }

            TokenKind::Else => {
                self.eat(); // 'else'
                let else_body = self.parse_block()?;

                let fallback = Stmt::Conditional {
                    condition: Expr::Bool(true),
                    body: else_body,
                    otherwise: None,
                };

                Ok(Stmt::Conditional {
                    condition,
                    body,
                    otherwise: Some(Box::new(fallback)),
                })
            }

            // The dedent token stays unconsumed for the enclosing scope.
            _ => Ok(Stmt::Conditional {
                condition,
                body,
                otherwise: None,
            }),
        }
    }

    /// `define <identifier> with: a; b; c` followed by an indented body.
    fn function_declaration(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'define'
        self.finish_function_declaration()
    }

    /// Shared tail of a function declaration, entered after the keyword.
    ///
    /// Also the target of the `create: function` redirection. Parameters
    /// are a `;`-separated identifier list running to the end of the
    /// header line; the list may be empty.
    fn finish_function_declaration(&mut self) -> FluResult<Stmt> {
        let name = self
            .expect(
                &[TokenKind::Identifier],
                FluError::syntax("Expected identifier", 99),
            )?
            .lexeme;

        self.expect(&[TokenKind::With], FluError::syntax("Expected 'with'", 99))?;
        self.expect(&[TokenKind::Colon], FluError::syntax("Expected ':'", 99))?;

        let mut params = Vec::new();

        while !self.at_end() {
            let param = self
                .expect(
                    &[TokenKind::Identifier],
                    FluError::syntax("Expected 'identifier'", 99),
                )?
                .lexeme;

            params.push(param);

            if self.at_end() {
                break;
            }

            self.expect(&[TokenKind::Semi], FluError::syntax("Expected ';'", 99))?;
        }

        let body = self.parse_block()?;

        Ok(Stmt::FunctionDeclaration { name, params, body })
    }

    /// `return` with an optional expression over the rest of the line.
    fn return_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'return'

        if self.at_end() {
            return Ok(Stmt::Return(Expr::Null));
        }

        let value = self.expression()?;
        Ok(Stmt::Return(value))
    }

    /// `until <condition>` with an indented body.
    fn until_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'until'
        self.finish_until_statement()
    }

    /// Shared tail of the until-loop; also the target of `repeat: until`.
    fn finish_until_statement(&mut self) -> FluResult<Stmt> {
        let condition_tokens = self.capture_line();
        let condition = self.parse_expression_slice(condition_tokens)?;

        let body = self.parse_block()?;

        Ok(Stmt::Until { condition, body })
    }

    /// `repeat: until <condition>` — alias of the until-loop.
    fn repeat_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'repeat'

        self.expect(&[TokenKind::Colon], FluError::syntax("Expected ':'", 99))?;
        self.expect(
            &[TokenKind::Until],
            FluError::syntax("Expected 'until'", 99),
        )?;

        self.finish_until_statement()
    }

    /// `stop` / `break` — no payload, line terminator required.
    fn stop_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'stop' or 'break'
        self.require_line_end(99)?;

        Ok(Stmt::Stop)
    }

    /// `forever` with an indented body (extended dialect only).
    fn forever_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'forever'
        self.require_line_end(99)?;

        let body = self.parse_block()?;

        Ok(Stmt::Forever { body })
    }

    /// `include <element> to <array>`
    fn include_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'include'

        let element = self.expression()?;

        self.expect(&[TokenKind::To], FluError::syntax("Expected 'to'", 99))?;

        let array = self.expression()?;

        Ok(Stmt::Include { array, element })
    }

    /// `exclude element at <index> from <array>`
    fn exclude_statement(&mut self) -> FluResult<Stmt> {
        self.eat(); // 'exclude'

        self.expect(
            &[TokenKind::Element],
            FluError::syntax("Expected 'element'", 99),
        )?;
        self.expect(&[TokenKind::At], FluError::syntax("Expected 'at'", 99))?;

        let index = self.expression()?;

        self.expect(&[TokenKind::From], FluError::syntax("Expected 'from'", 99))?;

        let array = self.expression()?;

        Ok(Stmt::Exclude { array, index })
    }

    /// Fallback: a bare expression, or an update statement when the
    /// expression is followed by the rebind keyword.
    fn expression_statement(&mut self) -> FluResult<Stmt> {
        let expr = self.expression()?;

        if self.at().kind == TokenKind::Is {
            return self.update_statement(expr);
        }

        Ok(Stmt::Expression(expr))
    }
}

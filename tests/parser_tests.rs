// Integration tests for the Fluentix parser

use fluentix::ast::{BinaryOp, CompareOp, Expr, Sign, Stmt};
use fluentix::dialect::Dialect;
use fluentix::parse_source;

fn parse_flu(src: &str) -> fluentix::ast::Program {
    parse_source(src, Dialect::Flu).unwrap()
}

fn parse_fl(src: &str) -> fluentix::ast::Program {
    parse_source(src, Dialect::Fl).unwrap()
}

// declarations

#[test]
fn test_variable_declaration() {
    let program = parse_flu("variable x is 1\n");
    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        Stmt::Assignment {
            name,
            value,
            constant,
        } => {
            assert_eq!(name, "x");
            assert_eq!(value, &Expr::Number(1.0));
            assert!(!constant);
        }
        other => panic!("expected Assignment, got {:?}", other),
    }
}

#[test]
fn test_let_declaration() {
    let program = parse_flu("let greeting be \"hello\"");
    match &program.body[0] {
        Stmt::Assignment {
            name,
            value,
            constant,
        } => {
            assert_eq!(name, "greeting");
            assert_eq!(value, &Expr::Str("hello".to_string()));
            assert!(!constant);
        }
        other => panic!("expected Assignment, got {:?}", other),
    }
}

#[test]
fn test_constant_declaration_sets_immutability() {
    let program = parse_flu("constant pi is 3.14\n");
    match &program.body[0] {
        Stmt::Assignment { name, constant, .. } => {
            assert_eq!(name, "pi");
            assert!(constant);
        }
        other => panic!("expected Assignment, got {:?}", other),
    }
}

#[test]
fn test_declaration_consumes_through_terminator() {
    let program = parse_flu("variable x is 1\nvariable y is 2\n");
    assert_eq!(program.body.len(), 2);
    match (&program.body[0], &program.body[1]) {
        (Stmt::Assignment { name: a, .. }, Stmt::Assignment { name: b, .. }) => {
            assert_eq!(a, "x");
            assert_eq!(b, "y");
        }
        other => panic!("expected two Assignments, got {:?}", other),
    }
}

#[test]
fn test_declaration_rejects_trailing_tokens() {
    let error = parse_source("variable x is 1 2\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 61);
    assert!(error.reason.contains("got '2'"));
}

// create: redirection (extended dialect)

#[test]
fn test_create_variable_redirection() {
    let program = parse_fl("create: variable x is 1\n");
    match &program.body[0] {
        Stmt::Assignment { name, constant, .. } => {
            assert_eq!(name, "x");
            assert!(!constant);
        }
        other => panic!("expected Assignment, got {:?}", other),
    }
}

#[test]
fn test_create_unchangeable_is_constant() {
    let program = parse_fl("create: unchangeable pi is 3.14\n");
    match &program.body[0] {
        Stmt::Assignment { constant, .. } => assert!(constant),
        other => panic!("expected Assignment, got {:?}", other),
    }
}

#[test]
fn test_create_function_redirection() {
    let program = parse_fl("create: function id with: x\n\treturn x\n");
    match &program.body[0] {
        Stmt::FunctionDeclaration { name, params, .. } => {
            assert_eq!(name, "id");
            assert_eq!(params, &["x".to_string()]);
        }
        other => panic!("expected FunctionDeclaration, got {:?}", other),
    }
}

#[test]
fn test_create_requires_declaration_keyword() {
    let error = parse_source("create: x is 1\n", Dialect::Fl).unwrap_err();
    assert_eq!(error.code, 97);
}

// dialect gating

#[test]
fn test_create_disabled_outside_extended_dialect() {
    let error = parse_source("create: variable x is 1\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 11);
    assert!(error.reason.contains("'create'"));
}

#[test]
fn test_forever_disabled_outside_extended_dialect() {
    let error = parse_source("forever\n\tstop\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 11);
    assert!(error.reason.contains("'forever'"));
}

#[test]
fn test_forever_enabled_in_extended_dialect() {
    let program = parse_fl("forever\n\tstop\n");
    match &program.body[0] {
        Stmt::Forever { body } => {
            assert_eq!(body.body.len(), 1);
            assert_eq!(body.body[0], Stmt::Stop);
        }
        other => panic!("expected Forever, got {:?}", other),
    }
}

#[test]
fn test_break_is_stop_in_extended_dialect() {
    let program = parse_fl("break\n");
    assert_eq!(program.body[0], Stmt::Stop);

    let error = parse_source("break\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 11);
}

// update statements

#[test]
fn test_update_statement() {
    let program = parse_flu("x is now 2\n");
    match &program.body[0] {
        Stmt::Update { target, value } => {
            assert_eq!(target, &Expr::Identifier("x".to_string()));
            assert_eq!(value, &Expr::Number(2.0));
        }
        other => panic!("expected Update, got {:?}", other),
    }
}

#[test]
fn test_update_requires_now() {
    let error = parse_source("x is 2\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 92);
    assert!(error.reason.contains("got '2'"));
}

// module import

#[test]
fn test_get_module() {
    let program = parse_flu("get: module math\n");
    match &program.body[0] {
        Stmt::GetModule { module } => assert_eq!(module, "math"),
        other => panic!("expected GetModule, got {:?}", other),
    }
}

// operator precedence and associativity

#[test]
fn test_exponentiation_is_right_associative() {
    let program = parse_flu("2 ^ 3 ^ 2\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Binary { left, op, right }) => {
            assert_eq!(*op, BinaryOp::Power);
            assert_eq!(**left, Expr::Number(2.0));
            match &**right {
                Expr::Binary { left, op, right } => {
                    assert_eq!(*op, BinaryOp::Power);
                    assert_eq!(**left, Expr::Number(3.0));
                    assert_eq!(**right, Expr::Number(2.0));
                }
                other => panic!("expected nested Power, got {:?}", other),
            }
        }
        other => panic!("expected Power expression, got {:?}", other),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let program = parse_flu("1 + 2 * 3\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Binary { left, op, right }) => {
            assert_eq!(*op, BinaryOp::Add);
            assert_eq!(**left, Expr::Number(1.0));
            match &**right {
                Expr::Binary { op, .. } => assert_eq!(*op, BinaryOp::Multiply),
                other => panic!("expected Multiply, got {:?}", other),
            }
        }
        other => panic!("expected Add expression, got {:?}", other),
    }
}

#[test]
fn test_parentheses_override_precedence() {
    let program = parse_flu("(1 + 2) * 3\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Binary { left, op, right }) => {
            assert_eq!(*op, BinaryOp::Multiply);
            assert_eq!(**right, Expr::Number(3.0));
            match &**left {
                Expr::Binary { op, .. } => assert_eq!(*op, BinaryOp::Add),
                other => panic!("expected Add, got {:?}", other),
            }
        }
        other => panic!("expected Multiply expression, got {:?}", other),
    }
}

#[test]
fn test_additive_folds_left() {
    let program = parse_flu("1 - 2 - 3\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Binary { left, op, right }) => {
            assert_eq!(*op, BinaryOp::Subtract);
            assert_eq!(**right, Expr::Number(3.0));
            match &**left {
                Expr::Binary { op, .. } => assert_eq!(*op, BinaryOp::Subtract),
                other => panic!("expected Subtract, got {:?}", other),
            }
        }
        other => panic!("expected Subtract expression, got {:?}", other),
    }
}

#[test]
fn test_comparison_expression() {
    let program = parse_flu("x <> 1 + 2\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Comparison { left, op, right }) => {
            assert_eq!(*op, CompareOp::NotEquals);
            assert_eq!(**left, Expr::Identifier("x".to_string()));
            match &**right {
                Expr::Binary { op, .. } => assert_eq!(*op, BinaryOp::Add),
                other => panic!("expected Add, got {:?}", other),
            }
        }
        other => panic!("expected Comparison, got {:?}", other),
    }
}

// unary sign runs

#[test]
fn test_unary_minus() {
    let program = parse_flu("-5\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Unary { sign, operand }) => {
            assert_eq!(*sign, Sign::Negative);
            assert_eq!(**operand, Expr::Number(5.0));
        }
        other => panic!("expected Unary, got {:?}", other),
    }
}

#[test]
fn test_unary_plus_still_wraps() {
    let program = parse_flu("+5\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Unary { sign, .. }) => {
            assert_eq!(*sign, Sign::Positive);
        }
        other => panic!("expected Unary, got {:?}", other),
    }
}

#[test]
fn test_double_minus_does_not_cancel() {
    // Documented source behavior: any '-' in a sign run pins the sign to
    // negative, even counts included.
    let program = parse_flu("--5\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Unary { sign, .. }) => {
            assert_eq!(*sign, Sign::Negative);
        }
        other => panic!("expected Unary, got {:?}", other),
    }
}

// calls

#[test]
fn test_call_with_arguments() {
    let program = parse_flu("print: 1; 2; 3\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Call { callee, arguments }) => {
            assert_eq!(**callee, Expr::Identifier("print".to_string()));
            assert_eq!(arguments.len(), 3);
            assert_eq!(arguments[0], Expr::Number(1.0));
            assert_eq!(arguments[2], Expr::Number(3.0));
        }
        other => panic!("expected Call, got {:?}", other),
    }
}

#[test]
fn test_call_with_no_arguments() {
    let program = parse_flu("print:\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Call { arguments, .. }) => {
            assert!(arguments.is_empty());
        }
        other => panic!("expected Call, got {:?}", other),
    }
}

#[test]
fn test_call_argument_split_respects_bracket_nesting() {
    let program = parse_flu("f: [a; b]; c\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Call { arguments, .. }) => {
            assert_eq!(arguments.len(), 2);
            match &arguments[0] {
                Expr::Array(elements) => assert_eq!(elements.len(), 2),
                other => panic!("expected Array argument, got {:?}", other),
            }
            assert_eq!(arguments[1], Expr::Identifier("c".to_string()));
        }
        other => panic!("expected Call, got {:?}", other),
    }
}

#[test]
fn test_call_argument_split_respects_paren_nesting() {
    // The ';' inside the parentheses belongs to the nested call, not the
    // outer argument list.
    let program = parse_flu("f: (g: a; b); c\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Call { callee, arguments }) => {
            assert_eq!(**callee, Expr::Identifier("f".to_string()));
            assert_eq!(arguments.len(), 2);
            match &arguments[0] {
                Expr::Call { callee, arguments } => {
                    assert_eq!(**callee, Expr::Identifier("g".to_string()));
                    assert_eq!(arguments.len(), 2);
                }
                other => panic!("expected nested Call, got {:?}", other),
            }
            assert_eq!(arguments[1], Expr::Identifier("c".to_string()));
        }
        other => panic!("expected Call, got {:?}", other),
    }
}

#[test]
fn test_call_stops_at_enclosing_close_paren() {
    let program = parse_flu("(f: 1) + 2\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Binary { left, op, .. }) => {
            assert_eq!(*op, BinaryOp::Add);
            match &**left {
                Expr::Call { arguments, .. } => assert_eq!(arguments.len(), 1),
                other => panic!("expected Call, got {:?}", other),
            }
        }
        other => panic!("expected Add, got {:?}", other),
    }
}

// array literals

#[test]
fn test_array_literal_elements_in_order() {
    let program = parse_flu("[1; 2; 3]\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Array(elements)) => {
            assert_eq!(
                elements,
                &vec![Expr::Number(1.0), Expr::Number(2.0), Expr::Number(3.0)]
            );
        }
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn test_empty_array_literal() {
    let program = parse_flu("[]\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Array(elements)) => assert!(elements.is_empty()),
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn test_array_trailing_separator_ignored() {
    let program = parse_flu("[1; 2;]\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Array(elements)) => assert_eq!(elements.len(), 2),
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn test_nested_array_literal() {
    let program = parse_flu("[[1; 2]; 3]\n");
    match &program.body[0] {
        Stmt::Expression(Expr::Array(elements)) => {
            assert_eq!(elements.len(), 2);
            match &elements[0] {
                Expr::Array(inner) => assert_eq!(inner.len(), 2),
                other => panic!("expected nested Array, got {:?}", other),
            }
        }
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn test_unclosed_array_is_an_error() {
    let error = parse_source("[1; 2\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 25);
}

// string literals

#[test]
fn test_string_escape_decoding() {
    let program = parse_flu("variable s is \"a\\nb\\tc\"\n");
    match &program.body[0] {
        Stmt::Assignment { value, .. } => {
            assert_eq!(value, &Expr::Str("a\nb\tc".to_string()));
        }
        other => panic!("expected Assignment, got {:?}", other),
    }
}

// conditionals and block capture

#[test]
fn test_conditional_with_indented_body() {
    let src = "if x = 1\n\tvariable y is 2\n\tvariable z is 3\nvariable w is 4\n";
    let program = parse_flu(src);
    assert_eq!(program.body.len(), 2);
    match &program.body[0] {
        Stmt::Conditional {
            condition,
            body,
            otherwise,
        } => {
            match condition {
                Expr::Comparison { op, .. } => assert_eq!(*op, CompareOp::Equals),
                other => panic!("expected Comparison condition, got {:?}", other),
            }
            assert_eq!(body.body.len(), 2);
            assert!(otherwise.is_none());
        }
        other => panic!("expected Conditional, got {:?}", other),
    }
    match &program.body[1] {
        Stmt::Assignment { name, .. } => assert_eq!(name, "w"),
        other => panic!("expected Assignment after dedent, got {:?}", other),
    }
}

#[test]
fn test_block_capture_strips_one_marker_per_line() {
    let src = "until x > 3\n\tif x = 1\n\t\tx is now 2\n\tx is now 3\n";
    let program = parse_flu(src);
    match &program.body[0] {
        Stmt::Until { body, .. } => {
            assert_eq!(body.body.len(), 2);
            match &body.body[0] {
                Stmt::Conditional { body: inner, .. } => {
                    assert_eq!(inner.body.len(), 1);
                    assert!(matches!(inner.body[0], Stmt::Update { .. }));
                }
                other => panic!("expected nested Conditional, got {:?}", other),
            }
            assert!(matches!(body.body[1], Stmt::Update { .. }));
        }
        other => panic!("expected Until, got {:?}", other),
    }
}

#[test]
fn test_unless_chains_as_otherwise_branch() {
    let src = "if x = 1\n\treturn 1\nunless x = 2\n\treturn 2\n";
    let program = parse_flu(src);
    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        Stmt::Conditional { otherwise, .. } => match otherwise.as_deref() {
            Some(Stmt::Conditional {
                condition,
                otherwise,
                ..
            }) => {
                assert!(matches!(condition, Expr::Comparison { .. }));
                assert!(otherwise.is_none());
            }
            other => panic!("expected chained Conditional, got {:?}", other),
        },
        other => panic!("expected Conditional, got {:?}", other),
    }
}

#[test]
fn test_else_normalizes_to_true_conditional() {
    let src = "if x = 1\n\treturn 1\nelse\n\treturn 2\n";
    let program = parse_flu(src);
    match &program.body[0] {
        Stmt::Conditional { otherwise, .. } => match otherwise.as_deref() {
            Some(Stmt::Conditional {
                condition,
                body,
                otherwise,
            }) => {
                assert_eq!(condition, &Expr::Bool(true));
                assert_eq!(body.body.len(), 1);
                assert!(otherwise.is_none());
            }
            other => panic!("expected synthetic Conditional, got {:?}", other),
        },
        other => panic!("expected Conditional, got {:?}", other),
    }
}

#[test]
fn test_if_unless_else_chain() {
    let src = "if x = 1\n\treturn 1\nunless x = 2\n\treturn 2\nelse\n\treturn 3\n";
    let program = parse_flu(src);
    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        Stmt::Conditional { otherwise, .. } => match otherwise.as_deref() {
            Some(Stmt::Conditional { otherwise, .. }) => match otherwise.as_deref() {
                Some(Stmt::Conditional { condition, .. }) => {
                    assert_eq!(condition, &Expr::Bool(true));
                }
                other => panic!("expected else branch, got {:?}", other),
            },
            other => panic!("expected unless branch, got {:?}", other),
        },
        other => panic!("expected Conditional, got {:?}", other),
    }
}

#[test]
fn test_blank_lines_inside_block() {
    let src = "if x = 1\n\tvariable y is 2\n\n\tvariable z is 3\n";
    let program = parse_flu(src);
    match &program.body[0] {
        Stmt::Conditional { body, .. } => assert_eq!(body.body.len(), 2),
        other => panic!("expected Conditional, got {:?}", other),
    }
}

#[test]
fn test_unless_accepted_at_statement_start() {
    let program = parse_flu("unless x = 1\n\treturn 1\n");
    assert!(matches!(program.body[0], Stmt::Conditional { .. }));
}

// functions and returns

#[test]
fn test_function_declaration() {
    let src = "define add with: a; b\n\treturn a + b\n";
    let program = parse_flu(src);
    match &program.body[0] {
        Stmt::FunctionDeclaration { name, params, body } => {
            assert_eq!(name, "add");
            assert_eq!(params, &["a".to_string(), "b".to_string()]);
            assert_eq!(body.body.len(), 1);
            match &body.body[0] {
                Stmt::Return(Expr::Binary { op, .. }) => {
                    assert_eq!(*op, BinaryOp::Add);
                }
                other => panic!("expected Return, got {:?}", other),
            }
        }
        other => panic!("expected FunctionDeclaration, got {:?}", other),
    }
}

#[test]
fn test_function_with_no_parameters() {
    let program = parse_flu("define f with:\n\treturn 1\n");
    match &program.body[0] {
        Stmt::FunctionDeclaration { params, .. } => assert!(params.is_empty()),
        other => panic!("expected FunctionDeclaration, got {:?}", other),
    }
}

#[test]
fn test_function_rejects_malformed_separator() {
    let error = parse_source("define f with: a b\n\treturn 1\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 99);
    assert!(error.reason.contains("';'"));
}

#[test]
fn test_bare_return_yields_null() {
    let program = parse_flu("define f with:\n\treturn\n");
    match &program.body[0] {
        Stmt::FunctionDeclaration { body, .. } => {
            assert_eq!(body.body[0], Stmt::Return(Expr::Null));
        }
        other => panic!("expected FunctionDeclaration, got {:?}", other),
    }
}

// loops

#[test]
fn test_until_loop() {
    let program = parse_flu("until x > 3\n\tx is now x + 1\n");
    match &program.body[0] {
        Stmt::Until { condition, body } => {
            match condition {
                Expr::Comparison { op, .. } => {
                    assert_eq!(*op, CompareOp::GreaterThan);
                }
                other => panic!("expected Comparison, got {:?}", other),
            }
            assert_eq!(body.body.len(), 1);
        }
        other => panic!("expected Until, got {:?}", other),
    }
}

#[test]
fn test_repeat_until_alias() {
    let program = parse_flu("repeat: until x = 5\n\tx is now x + 1\n");
    assert!(matches!(program.body[0], Stmt::Until { .. }));
}

#[test]
fn test_repeat_requires_until() {
    let error = parse_source("repeat: while x\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 99);
}

#[test]
fn test_stop_statement() {
    let program = parse_flu("until x = 1\n\tstop\n");
    match &program.body[0] {
        Stmt::Until { body, .. } => assert_eq!(body.body[0], Stmt::Stop),
        other => panic!("expected Until, got {:?}", other),
    }
}

#[test]
fn test_stop_rejects_payload() {
    let error = parse_source("stop 1\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 99);
    assert!(error.reason.contains("got '1'"));
}

// include / exclude

#[test]
fn test_include_statement() {
    let program = parse_flu("include 5 to numbers\n");
    match &program.body[0] {
        Stmt::Include { array, element } => {
            assert_eq!(array, &Expr::Identifier("numbers".to_string()));
            assert_eq!(element, &Expr::Number(5.0));
        }
        other => panic!("expected Include, got {:?}", other),
    }
}

#[test]
fn test_exclude_statement() {
    let program = parse_flu("exclude element at 0 from numbers\n");
    match &program.body[0] {
        Stmt::Exclude { array, index } => {
            assert_eq!(array, &Expr::Identifier("numbers".to_string()));
            assert_eq!(index, &Expr::Number(0.0));
        }
        other => panic!("expected Exclude, got {:?}", other),
    }
}

// error propagation

#[test]
fn test_line_end_failure_keeps_caller_error() {
    // The stream ends right where the binder keyword was expected; the
    // caller-supplied error must surface unchanged, with no "got" suffix.
    let error = parse_source("variable x", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 15);
    assert_eq!(error.reason, "Expected 'is'");
}

#[test]
fn test_expectation_failure_quotes_lexeme() {
    let error = parse_source("variable x be 1\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 15);
    assert_eq!(error.reason, "Expected 'is', got 'be'");
}

#[test]
fn test_error_inside_block_propagates_unchanged() {
    let error =
        parse_source("if x = 1\n\tvariable is 2\n", Dialect::Flu).unwrap_err();
    assert_eq!(error.code, 65);
    assert_eq!(error.reason, "Expected identifier, got 'is'");
}

#[test]
fn test_error_display_and_docs_url() {
    let error = parse_source("stop 1\n", Dialect::Flu).unwrap_err();
    assert_eq!(
        error.to_string(),
        "SyntaxError#99: Expected newline or nothing, got '1'"
    );
    assert_eq!(
        error.docs_url(),
        "https://docs.fluentix.dev/error/SyntaxError99"
    );
}

// program assembly

#[test]
fn test_empty_source_is_empty_program() {
    let program = parse_flu("");
    assert!(program.body.is_empty());
}

#[test]
fn test_blank_lines_are_skipped() {
    let program = parse_flu("\n\nvariable x is 1\n\n\n");
    assert_eq!(program.body.len(), 1);
}

#[test]
fn test_equivalent_sources_produce_equal_trees() {
    // Whitespace and comment placement do not change the tree.
    let a = parse_flu("variable x is 1 + 2\nprint: x\n");
    let b = parse_flu("# header\nvariable x is 1+2\n\nprint: x");
    assert_eq!(a, b);
}

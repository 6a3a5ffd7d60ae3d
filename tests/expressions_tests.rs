mod common;

use common::*;
use javaparse::ast::*;
use pretty_assertions::assert_eq;

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_expr("1 + 2 * 3"),
        bin(
            BinaryOperator::Add,
            lit("1"),
            bin(BinaryOperator::Multiply, lit("2"), lit("3"))
        )
    );
}

#[test]
fn same_precedence_associates_left() {
    assert_eq!(
        parse_expr("1 + 2 + 3"),
        bin(
            BinaryOperator::Add,
            bin(BinaryOperator::Add, lit("1"), lit("2")),
            lit("3")
        )
    );
    assert_eq!(
        parse_expr("8 / 4 / 2"),
        bin(
            BinaryOperator::Divide,
            bin(BinaryOperator::Divide, lit("8"), lit("4")),
            lit("2")
        )
    );
}

#[test]
fn every_binary_operator_parses() {
    let table = [
        ("||", BinaryOperator::ConditionalOr),
        ("&&", BinaryOperator::ConditionalAnd),
        ("|", BinaryOperator::Or),
        ("^", BinaryOperator::Xor),
        ("&", BinaryOperator::And),
        ("==", BinaryOperator::Equal),
        ("!=", BinaryOperator::NotEqual),
        ("<", BinaryOperator::Less),
        ("<=", BinaryOperator::LessEqual),
        (">", BinaryOperator::Greater),
        (">=", BinaryOperator::GreaterEqual),
        ("<<", BinaryOperator::LeftShift),
        (">>", BinaryOperator::RightShift),
        (">>>", BinaryOperator::UnsignedRightShift),
        ("+", BinaryOperator::Add),
        ("-", BinaryOperator::Subtract),
        ("*", BinaryOperator::Multiply),
        ("/", BinaryOperator::Divide),
        ("%", BinaryOperator::Remainder),
    ];
    for (symbol, operator) in table {
        let source = format!("a {symbol} b");
        assert_eq!(
            parse_expr(&source),
            bin(operator, name("a"), name("b")),
            "operator {symbol}"
        );
    }
}

#[test]
fn conditional_nests_in_the_true_branch() {
    assert_eq!(
        parse_expr("a ? b ? c : d : e"),
        Expression::Conditional(Conditional {
            predicate: Box::new(name("a")),
            if_true: Box::new(Expression::Conditional(Conditional {
                predicate: Box::new(name("b")),
                if_true: Box::new(name("c")),
                if_false: Box::new(name("d")),
            })),
            if_false: Box::new(name("e")),
        })
    );
}

#[test]
fn conditional_is_right_associative() {
    assert_eq!(
        parse_expr("a ? b : c ? d : e"),
        Expression::Conditional(Conditional {
            predicate: Box::new(name("a")),
            if_true: Box::new(name("b")),
            if_false: Box::new(Expression::Conditional(Conditional {
                predicate: Box::new(name("c")),
                if_true: Box::new(name("d")),
                if_false: Box::new(name("e")),
            })),
        })
    );
}

#[test]
fn prefix_and_postfix_increment_are_distinct() {
    assert_eq!(
        parse_expr("++a"),
        Expression::Unary(UnaryExpression {
            operator: UnaryOperator::PreIncrement,
            expression: Box::new(name("a")),
        })
    );
    assert_eq!(
        parse_expr("a++"),
        Expression::Unary(UnaryExpression {
            operator: UnaryOperator::PostIncrement,
            expression: Box::new(name("a")),
        })
    );
}

#[test]
fn parentheses_are_preserved_as_nodes() {
    assert_eq!(
        parse_expr("(1 + 2) * 3"),
        bin(
            BinaryOperator::Multiply,
            Expression::Bracketed(Box::new(bin(BinaryOperator::Add, lit("1"), lit("2")))),
            lit("3")
        )
    );
}

#[test]
fn primitive_cast_accepts_signed_operand() {
    assert_eq!(
        parse_expr("(int) - b"),
        Expression::Cast(Cast {
            target_type: Type::primitive(PrimitiveType::Int),
            expression: Box::new(Expression::Unary(UnaryExpression {
                operator: UnaryOperator::Minus,
                expression: Box::new(name("b")),
            })),
        })
    );
}

#[test]
fn parenthesized_name_before_minus_is_subtraction() {
    assert_eq!(
        parse_expr("(a) - b"),
        bin(
            BinaryOperator::Subtract,
            Expression::Bracketed(Box::new(name("a"))),
            name("b")
        )
    );
}

#[test]
fn reference_cast() {
    assert_eq!(
        parse_expr("(Foo) bar"),
        Expression::Cast(Cast {
            target_type: Type::named("Foo"),
            expression: Box::new(name("bar")),
        })
    );
    assert!(matches!(
        parse_expr("(List<String>) x"),
        Expression::Cast(_)
    ));
}

#[test]
fn assignment_is_right_associative() {
    let expr = parse_expr("x = y = 1");
    let outer = match expr {
        Expression::Assignment(assignment) => assignment,
        other => panic!("expected assignment, got {other:?}"),
    };
    assert_eq!(outer.operator, AssignmentOperator::Assign);
    assert_eq!(*outer.target, name("x"));
    assert!(matches!(*outer.value, Expression::Assignment(_)));
}

#[test]
fn compound_assignment_operators() {
    let table = [
        ("+=", AssignmentOperator::Add),
        ("-=", AssignmentOperator::Subtract),
        ("*=", AssignmentOperator::Multiply),
        ("/=", AssignmentOperator::Divide),
        ("%=", AssignmentOperator::Remainder),
        ("&=", AssignmentOperator::And),
        ("|=", AssignmentOperator::Or),
        ("^=", AssignmentOperator::Xor),
        ("<<=", AssignmentOperator::LeftShift),
        (">>=", AssignmentOperator::RightShift),
        (">>>=", AssignmentOperator::UnsignedRightShift),
    ];
    for (symbol, operator) in table {
        let source = format!("x {symbol} 1");
        match parse_expr(&source) {
            Expression::Assignment(assignment) => {
                assert_eq!(assignment.operator, operator, "operator {symbol}")
            }
            other => panic!("expected assignment for {symbol}, got {other:?}"),
        }
    }
}

#[test]
fn instance_of() {
    let expr = parse_expr("a instanceof java.util.List");
    match expr {
        Expression::InstanceOf(instance_of) => {
            assert_eq!(*instance_of.expression, name("a"));
            assert_eq!(instance_of.target_type, Type::named("java.util.List"));
        }
        other => panic!("expected instanceof, got {other:?}"),
    }
}

#[test]
fn dotted_expression_stays_a_name_until_called() {
    assert_eq!(parse_expr("a.b.c"), name("a.b.c"));

    let call = parse_expr("a.b.c(x)");
    match call {
        Expression::MethodInvocation(invocation) => {
            assert_eq!(invocation.name, "c");
            assert_eq!(invocation.target.as_deref(), Some(&name("a.b")));
            assert_eq!(invocation.arguments, vec![name("x")]);
        }
        other => panic!("expected method invocation, got {other:?}"),
    }
}

#[test]
fn unqualified_call_has_no_target() {
    match parse_expr("foo(1, 2)") {
        Expression::MethodInvocation(invocation) => {
            assert_eq!(invocation.name, "foo");
            assert!(invocation.target.is_none());
            assert_eq!(invocation.arguments.len(), 2);
        }
        other => panic!("expected method invocation, got {other:?}"),
    }
}

#[test]
fn member_access_on_call_result_is_field_access() {
    match parse_expr("foo().bar") {
        Expression::FieldAccess(access) => {
            assert_eq!(access.name, "bar");
            assert!(matches!(*access.target, Expression::MethodInvocation(_)));
        }
        other => panic!("expected field access, got {other:?}"),
    }
}

#[test]
fn explicit_method_type_arguments() {
    match parse_expr("x.<String>foo()") {
        Expression::MethodInvocation(invocation) => {
            assert_eq!(invocation.name, "foo");
            assert_eq!(invocation.type_arguments.len(), 1);
        }
        other => panic!("expected method invocation, got {other:?}"),
    }
}

#[test]
fn array_access_and_creation() {
    assert!(matches!(parse_expr("a[i]"), Expression::ArrayAccess(_)));

    match parse_expr("new int[3][]") {
        Expression::ArrayCreation(creation) => {
            assert_eq!(creation.element_type, Type::primitive(PrimitiveType::Int));
            assert_eq!(creation.dimensions.len(), 2);
            assert!(creation.dimensions[0].is_some());
            assert!(creation.dimensions[1].is_none());
            assert!(creation.initializer.is_none());
        }
        other => panic!("expected array creation, got {other:?}"),
    }

    match parse_expr("new int[] {1, 2}") {
        Expression::ArrayCreation(creation) => {
            let initializer = creation.initializer.expect("initializer");
            assert_eq!(initializer.elements.len(), 2);
        }
        other => panic!("expected array creation, got {other:?}"),
    }
}

#[test]
fn diamond_instance_creation() {
    match parse_expr("new java.util.ArrayList<>()") {
        Expression::InstanceCreation(creation) => {
            assert_eq!(creation.instance_type.type_arguments, TypeArguments::Diamond);
            assert!(creation.body.is_none());
        }
        other => panic!("expected instance creation, got {other:?}"),
    }
}

#[test]
fn anonymous_class_creation() {
    let expr = parse_expr("new Runnable() { public void run() {} }");
    match expr {
        Expression::InstanceCreation(creation) => {
            let body = creation.body.expect("anonymous body");
            assert_eq!(body.len(), 1);
            assert!(matches!(body[0], ClassBodyDeclaration::Method(_)));
        }
        other => panic!("expected instance creation, got {other:?}"),
    }
}

#[test]
fn qualified_instance_creation() {
    match parse_expr("outer.new Inner()") {
        Expression::InstanceCreation(creation) => {
            assert_eq!(creation.enclosed_in.as_deref(), Some(&name("outer")));
            assert_eq!(creation.instance_type, Type::named("Inner"));
        }
        other => panic!("expected instance creation, got {other:?}"),
    }
}

#[test]
fn class_literals() {
    assert_eq!(
        parse_expr("String.class"),
        Expression::ClassLiteral(ClassLiteral { literal_type: Type::named("String") })
    );
    assert_eq!(
        parse_expr("int[].class"),
        Expression::ClassLiteral(ClassLiteral {
            literal_type: Type::primitive(PrimitiveType::Int).with_dimensions(1),
        })
    );
    assert_eq!(
        parse_expr("void.class"),
        Expression::ClassLiteral(ClassLiteral {
            literal_type: Type::primitive(PrimitiveType::Void),
        })
    );
}

#[test]
fn literal_text_is_kept_verbatim() {
    assert_eq!(parse_expr("0x1F"), lit("0x1F"));
    assert_eq!(parse_expr("1_000_000L"), lit("1_000_000L"));
    assert_eq!(parse_expr("1.5e10f"), lit("1.5e10f"));
    assert_eq!(parse_expr("0x1.8p1"), lit("0x1.8p1"));
    assert_eq!(parse_expr("'\\n'"), lit("'\\n'"));
    assert_eq!(parse_expr("\"a\\tb\""), lit("\"a\\tb\""));
    assert_eq!(parse_expr("true"), lit("true"));
    assert_eq!(parse_expr("null"), lit("null"));
}

#[test]
fn shift_in_expression_context_is_not_generics() {
    assert_eq!(
        parse_expr("a >> b >>> c"),
        bin(
            BinaryOperator::UnsignedRightShift,
            bin(BinaryOperator::RightShift, name("a"), name("b")),
            name("c")
        )
    );
}

#[test]
fn trailing_garbage_is_rejected() {
    assert!(javaparse::parse_expression("1 + 2 3").is_err());
    assert!(javaparse::parse_expression("").is_err());
}

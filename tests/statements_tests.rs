mod common;

use common::*;
use javaparse::ast::*;
use pretty_assertions::assert_eq;

#[test]
fn dangling_else_binds_to_inner_if() {
    let stmt = parse_stmt("if (a) if (b) f(); else g();");
    let outer = match stmt {
        Statement::IfThenElse(stmt) => stmt,
        other => panic!("expected if, got {other:?}"),
    };
    assert!(outer.if_false.is_none());
    let inner = match *outer.if_true {
        Statement::IfThenElse(stmt) => stmt,
        other => panic!("expected nested if, got {other:?}"),
    };
    assert!(inner.if_false.is_some());
}

#[test]
fn while_and_do_while() {
    assert!(matches!(parse_stmt("while (a) {}"), Statement::While(_)));

    let stmt = parse_stmt("do f(); while (a);");
    match stmt {
        Statement::DoWhile(stmt) => {
            assert_eq!(*stmt.predicate, name("a"));
            assert!(matches!(*stmt.body, Statement::Expression(_)));
        }
        other => panic!("expected do-while, got {other:?}"),
    }
}

#[test]
fn classic_for_loop() {
    let stmt = parse_stmt("for (int i = 0; i < n; i++) f(i);");
    let stmt = match stmt {
        Statement::For(stmt) => stmt,
        other => panic!("expected for, got {other:?}"),
    };
    match stmt.init {
        Some(ForInit::Declaration(decl)) => {
            assert_eq!(decl.variable_type, Type::primitive(PrimitiveType::Int));
            assert_eq!(decl.declarators.len(), 1);
        }
        other => panic!("expected declaration init, got {other:?}"),
    }
    assert!(stmt.predicate.is_some());
    assert_eq!(stmt.update.len(), 1);
}

#[test]
fn empty_for_header() {
    let stmt = parse_stmt("for (;;) ;");
    match stmt {
        Statement::For(stmt) => {
            assert!(stmt.init.is_none());
            assert!(stmt.predicate.is_none());
            assert!(stmt.update.is_empty());
            assert!(matches!(*stmt.body, Statement::Empty));
        }
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn for_each_loop() {
    let stmt = parse_stmt("for (final String s : list) {}");
    match stmt {
        Statement::ForEach(stmt) => {
            assert_eq!(stmt.modifiers, vec![Modifier::Basic(BasicModifier::Final)]);
            assert_eq!(stmt.variable_type, Type::named("String"));
            assert_eq!(stmt.variable.name, "s");
            assert_eq!(*stmt.iterable, name("list"));
        }
        other => panic!("expected for-each, got {other:?}"),
    }
}

#[test]
fn switch_labels_group_with_their_statements() {
    let stmt = parse_stmt(
        r#"
        switch (x) {
            case 1:
            case 2:
                f();
                break;
            default:
                g();
        }
        "#,
    );
    let switch = match stmt {
        Statement::Switch(stmt) => stmt,
        other => panic!("expected switch, got {other:?}"),
    };
    assert_eq!(switch.cases.len(), 2);
    assert_eq!(
        switch.cases[0].labels,
        vec![SwitchLabel::Case(lit("1")), SwitchLabel::Case(lit("2"))]
    );
    assert_eq!(switch.cases[0].body.len(), 2);
    assert_eq!(switch.cases[1].labels, vec![SwitchLabel::Default]);
    assert_eq!(switch.cases[1].body.len(), 1);
}

#[test]
fn try_catch_finally() {
    let stmt = parse_stmt("try { f(); } catch (Exception e) { g(); } finally { h(); }");
    match stmt {
        Statement::Try(stmt) => {
            assert!(stmt.resources.is_empty());
            assert_eq!(stmt.catches.len(), 1);
            assert_eq!(stmt.catches[0].variable.name, "e");
            assert!(stmt.finally.is_some());
        }
        other => panic!("expected try, got {other:?}"),
    }
}

#[test]
fn try_with_resources_needs_no_catch() {
    let stmt = parse_stmt("try (InputStream in = open()) { read(in); }");
    match stmt {
        Statement::Try(stmt) => {
            assert_eq!(stmt.resources.len(), 1);
            assert_eq!(stmt.resources[0].variable.name, "in");
            assert!(stmt.catches.is_empty());
            assert!(stmt.finally.is_none());
        }
        other => panic!("expected try, got {other:?}"),
    }
}

#[test]
fn bare_try_is_rejected() {
    assert!(javaparse::parse_statement("try { f(); }").is_err());
}

#[test]
fn multi_catch() {
    let stmt = parse_stmt("try { f(); } catch (final A | B e) {}");
    match stmt {
        Statement::Try(stmt) => {
            assert_eq!(stmt.catches[0].types, vec![Type::named("A"), Type::named("B")]);
            assert_eq!(
                stmt.catches[0].modifiers,
                vec![Modifier::Basic(BasicModifier::Final)]
            );
        }
        other => panic!("expected try, got {other:?}"),
    }
}

#[test]
fn labeled_break_and_continue() {
    let stmt = parse_stmt("outer: while (true) break outer;");
    let labeled = match stmt {
        Statement::Labeled(stmt) => stmt,
        other => panic!("expected labeled statement, got {other:?}"),
    };
    assert_eq!(labeled.label, "outer");
    match *labeled.statement {
        Statement::While(while_stmt) => match *while_stmt.body {
            Statement::Break(break_stmt) => {
                assert_eq!(break_stmt.label.as_deref(), Some("outer"))
            }
            other => panic!("expected break, got {other:?}"),
        },
        other => panic!("expected while, got {other:?}"),
    }

    match parse_stmt("continue inner;") {
        Statement::Continue(stmt) => assert_eq!(stmt.label.as_deref(), Some("inner")),
        other => panic!("expected continue, got {other:?}"),
    }
}

#[test]
fn local_variable_declarators() {
    let stmt = parse_stmt("int a, b[] = {1}, c = 2;");
    let decl = match stmt {
        Statement::LocalVariable(decl) => decl,
        other => panic!("expected declaration, got {other:?}"),
    };
    assert_eq!(decl.declarators.len(), 3);
    assert!(decl.declarators[0].initializer.is_none());
    assert_eq!(decl.declarators[1].variable.dimensions, 1);
    assert!(matches!(
        decl.declarators[1].initializer,
        Some(VariableInitializer::Array(_))
    ));
    assert!(matches!(
        decl.declarators[2].initializer,
        Some(VariableInitializer::Expression(_))
    ));
}

#[test]
fn generic_declaration_is_not_comparison() {
    let stmt = parse_stmt("Map<String, List<Integer>> m = null;");
    match stmt {
        Statement::LocalVariable(decl) => match &decl.variable_type.type_arguments {
            TypeArguments::List(arguments) => assert_eq!(arguments.len(), 2),
            other => panic!("expected argument list, got {other:?}"),
        },
        other => panic!("expected declaration, got {other:?}"),
    }

    // same tokens in expression position stay relational
    let stmt = parse_stmt("a < b;");
    assert!(matches!(stmt, Statement::Expression(_)));
}

#[test]
fn nested_generic_closed_by_shift_token() {
    let stmt = parse_stmt("List<List<List<String>>> deep;");
    match stmt {
        Statement::LocalVariable(decl) => {
            assert!(matches!(decl.variable_type.type_arguments, TypeArguments::List(_)))
        }
        other => panic!("expected declaration, got {other:?}"),
    }
}

#[test]
fn local_class_declaration() {
    let stmt = parse_stmt("final class Local {}");
    match stmt {
        Statement::Type(decl) => assert!(matches!(*decl, TypeDeclaration::Class(_))),
        other => panic!("expected type declaration, got {other:?}"),
    }
}

#[test]
fn explicit_constructor_invocation() {
    match parse_stmt("super(1, 2);") {
        Statement::ConstructorInvocation(stmt) => {
            assert_eq!(stmt.kind, ConstructorKind::Super);
            assert_eq!(stmt.arguments.len(), 2);
        }
        other => panic!("expected constructor invocation, got {other:?}"),
    }
    match parse_stmt("this();") {
        Statement::ConstructorInvocation(stmt) => {
            assert_eq!(stmt.kind, ConstructorKind::This);
            assert!(stmt.arguments.is_empty());
        }
        other => panic!("expected constructor invocation, got {other:?}"),
    }
}

#[test]
fn throw_return_assert_synchronized() {
    assert!(matches!(parse_stmt("throw new E();"), Statement::Throw(_)));

    match parse_stmt("return;") {
        Statement::Return(stmt) => assert!(stmt.result.is_none()),
        other => panic!("expected return, got {other:?}"),
    }
    match parse_stmt("return x;") {
        Statement::Return(stmt) => assert!(stmt.result.is_some()),
        other => panic!("expected return, got {other:?}"),
    }

    match parse_stmt("assert x > 0 : \"message\";") {
        Statement::Assert(stmt) => assert!(stmt.message.is_some()),
        other => panic!("expected assert, got {other:?}"),
    }

    match parse_stmt("synchronized (lock) { f(); }") {
        Statement::Synchronized(stmt) => assert_eq!(*stmt.monitor, name("lock")),
        other => panic!("expected synchronized, got {other:?}"),
    }
}

#[test]
fn empty_statement_and_block() {
    assert!(matches!(parse_stmt(";"), Statement::Empty));
    match parse_stmt("{ f(); g(); }") {
        Statement::Block(block) => assert_eq!(block.statements.len(), 2),
        other => panic!("expected block, got {other:?}"),
    }
}

#[test]
fn syntax_error_reports_location() {
    let err = javaparse::parse_statement("if (a { f(); }").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("1:"), "location missing in: {message}");
}

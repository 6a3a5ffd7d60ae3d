mod common;

use common::*;
use javaparse::ast::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_source_is_an_empty_unit() {
    let unit = parse_unit("");
    assert!(unit.package_declaration.is_none());
    assert!(unit.import_declarations.is_empty());
    assert!(unit.type_declarations.is_empty());
}

#[test]
fn package_and_import_shapes() {
    let unit = parse_unit(
        r#"
        package com.example.app;
        import java.util.List;
        import static java.lang.Math.max;
        import java.util.*;
        import static java.util.Collections.*;
        "#,
    );
    let package = unit.package_declaration.expect("package");
    assert_eq!(package.name, Name::new("com.example.app"));

    let flags: Vec<(bool, bool)> = unit
        .import_declarations
        .iter()
        .map(|import| (import.is_static, import.on_demand))
        .collect();
    assert_eq!(
        flags,
        vec![(false, false), (true, false), (false, true), (true, true)]
    );
    assert_eq!(unit.import_declarations[3].name, Name::new("java.util.Collections"));
}

#[test]
fn annotated_package() {
    let unit = parse_unit("@Deprecated package a.b;");
    let package = unit.package_declaration.expect("package");
    assert_eq!(package.modifiers.len(), 1);
}

#[test]
fn class_header() {
    let unit = parse_unit(
        "public abstract class Box<T extends Comparable<T> & Cloneable> extends Base implements A, B {}",
    );
    let class = first_class(&unit);
    assert_eq!(class.name, "Box");
    assert_eq!(
        class.modifiers,
        vec![
            Modifier::Basic(BasicModifier::Public),
            Modifier::Basic(BasicModifier::Abstract)
        ]
    );
    assert_eq!(class.type_parameters.len(), 1);
    assert_eq!(class.type_parameters[0].bounds.len(), 2);
    assert_eq!(class.extends, Some(Type::named("Base")));
    assert_eq!(class.implements, vec![Type::named("A"), Type::named("B")]);
    assert!(class.body.is_empty());
}

#[test]
fn constructor_vs_method() {
    let unit = parse_unit("class Foo { Foo() {} Foo bar() { return this; } }");
    let class = first_class(&unit);
    assert_eq!(class.body.len(), 2);
    assert!(matches!(class.body[0], ClassBodyDeclaration::Constructor(_)));
    match &class.body[1] {
        ClassBodyDeclaration::Method(method) => {
            assert_eq!(method.name, "bar");
            assert_eq!(method.return_type, Some(Type::named("Foo")));
        }
        other => panic!("expected method, got {other:?}"),
    }
}

#[test]
fn void_method_has_no_return_type() {
    let unit = parse_unit("class A { void run() {} }");
    let method = first_method(first_class(&unit));
    assert!(method.return_type.is_none());
}

#[test]
fn method_with_throws_and_varargs() {
    let unit = parse_unit("class A { int sum(int first, int... rest) throws E1, E2 { return 0; } }");
    let method = first_method(first_class(&unit));
    assert_eq!(method.parameters.len(), 2);
    assert!(!method.parameters[0].vararg);
    assert!(method.parameters[1].vararg);
    assert_eq!(method.throws, vec![Type::named("E1"), Type::named("E2")]);
}

#[test]
fn vararg_must_be_last() {
    assert!(javaparse::parse_compilation_unit("class A { void f(int... a, int b) {} }").is_err());
}

#[test]
fn generic_method() {
    let unit = parse_unit("class A { static <T> T id(T value) { return value; } }");
    let method = first_method(first_class(&unit));
    assert_eq!(method.type_parameters.len(), 1);
    assert_eq!(method.type_parameters[0].name, "T");
}

#[test]
fn abstract_method_has_no_body() {
    let unit = parse_unit("abstract class A { abstract void f(); }");
    let method = first_method(first_class(&unit));
    assert!(method.body.is_none());
}

#[test]
fn field_declarators_and_dimensions() {
    let unit = parse_unit("class A { private static final int[] DATA = {1, 2}, more[] = null, last = 3; }");
    let class = first_class(&unit);
    let field = match &class.body[0] {
        ClassBodyDeclaration::Field(field) => field,
        other => panic!("expected field, got {other:?}"),
    };
    assert_eq!(field.modifiers.len(), 3);
    assert_eq!(field.field_type.dimensions, 1);
    assert_eq!(field.declarators.len(), 3);
    assert_eq!(field.declarators[1].variable.dimensions, 1);
}

#[test]
fn initializer_blocks() {
    let unit = parse_unit("class A { static { setup(); } { touch(); } }");
    let class = first_class(&unit);
    match (&class.body[0], &class.body[1]) {
        (
            ClassBodyDeclaration::Initializer(first),
            ClassBodyDeclaration::Initializer(second),
        ) => {
            assert!(first.is_static);
            assert!(!second.is_static);
        }
        other => panic!("expected two initializers, got {other:?}"),
    }
}

#[test]
fn interface_members() {
    let unit = parse_unit(
        r#"
        public interface Shape extends Drawable {
            int SIDES = 4;
            double area();
        }
        "#,
    );
    let interface = unit
        .type_declarations
        .iter()
        .find_map(|decl| match decl {
            TypeDeclaration::Interface(interface) => Some(interface),
            _ => None,
        })
        .expect("interface");
    assert_eq!(interface.extends, vec![Type::named("Drawable")]);
    assert_eq!(interface.body.len(), 2);
    assert!(matches!(interface.body[0], ClassBodyDeclaration::Field(_)));
    match &interface.body[1] {
        ClassBodyDeclaration::Method(method) => assert!(method.body.is_none()),
        other => panic!("expected method, got {other:?}"),
    }
}

#[test]
fn enum_constants_and_members() {
    let unit = parse_unit(
        r#"
        enum Planet implements Weighed {
            MERCURY(3.3e23),
            EARTH(5.9e24) {
                public String nickname() { return "home"; }
            };

            private final double mass;
            Planet(double mass) { this.mass = mass; }
        }
        "#,
    );
    let planet = unit
        .type_declarations
        .iter()
        .find_map(|decl| match decl {
            TypeDeclaration::Enum(decl) => Some(decl),
            _ => None,
        })
        .expect("enum");
    assert_eq!(planet.constants.len(), 2);
    assert_eq!(planet.constants[0].name, "MERCURY");
    assert_eq!(planet.constants[0].arguments.len(), 1);
    assert!(planet.constants[0].body.is_none());
    assert!(planet.constants[1].body.is_some());
    assert_eq!(planet.body.len(), 2);
}

#[test]
fn enum_member_before_constants_is_rejected() {
    assert!(javaparse::parse_compilation_unit("enum E { void f() {} ; A }").is_err());
    assert!(javaparse::parse_compilation_unit("enum E { A; B }").is_err());
}

#[test]
fn annotation_type_declaration() {
    let unit = parse_unit(
        r#"
        public @interface Timeout {
            int millis() default 1000;
            String unit();
        }
        "#,
    );
    let annotation = unit
        .type_declarations
        .iter()
        .find_map(|decl| match decl {
            TypeDeclaration::Annotation(decl) => Some(decl),
            _ => None,
        })
        .expect("annotation type");
    assert_eq!(annotation.name, "Timeout");
    assert_eq!(annotation.body.len(), 2);
    match &annotation.body[0] {
        AnnotationBodyDeclaration::Method(method) => {
            assert!(method.default_value.is_some());
        }
        other => panic!("expected annotation method, got {other:?}"),
    }
    match &annotation.body[1] {
        AnnotationBodyDeclaration::Method(method) => assert!(method.default_value.is_none()),
        other => panic!("expected annotation method, got {other:?}"),
    }
}

#[test]
fn annotation_argument_shapes_are_exclusive() {
    let unit = parse_unit(
        r#"
        @Marker
        @Single("x")
        @Normal(a = 1, b = {2, 3})
        @Empty()
        class A {}
        "#,
    );
    let class = first_class(&unit);
    let values: Vec<&AnnotationValue> = class
        .modifiers
        .iter()
        .map(|modifier| match modifier {
            Modifier::Annotation(annotation) => &annotation.value,
            other => panic!("expected annotation, got {other:?}"),
        })
        .collect();
    assert!(matches!(values[0], AnnotationValue::Marker));
    assert!(matches!(values[1], AnnotationValue::SingleMember(_)));
    match values[2] {
        AnnotationValue::Normal(members) => {
            assert_eq!(members.len(), 2);
            assert!(matches!(members[1].value, ElementValue::Array(_)));
        }
        other => panic!("expected normal annotation, got {other:?}"),
    }
    assert!(matches!(values[3], AnnotationValue::Normal(members) if members.is_empty()));
}

#[test]
fn nested_types() {
    let unit = parse_unit("class Outer { static class Inner { interface Deepest {} } }");
    let outer = first_class(&unit);
    match &outer.body[0] {
        ClassBodyDeclaration::Type(nested) => match nested.as_ref() {
            TypeDeclaration::Class(inner) => {
                assert_eq!(inner.name, "Inner");
                assert!(matches!(inner.body[0], ClassBodyDeclaration::Type(_)));
            }
            other => panic!("expected class, got {other:?}"),
        },
        other => panic!("expected nested type, got {other:?}"),
    }
}

#[test]
fn equality_ignores_formatting() {
    let compact = parse_unit("class A{int x=1;void f(){x++;}}");
    let spread = parse_unit(
        r#"
        class A {
            int x = 1;

            void f() {
                x++;
            }
        }
        "#,
    );
    assert_eq!(compact, spread);
}

#[test]
fn unknown_characters_become_diagnostics_not_errors() {
    let mut parser = javaparse::parser::Parser::new("class A { int x = 1; } #");
    assert_eq!(parser.diagnostics().len(), 1);
    assert_eq!(parser.diagnostics()[0].character, '#');
    assert!(parser.parse_compilation_unit().is_ok());
}

#[test]
fn parse_file_reads_from_disk() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "package p; class FromDisk {{ }}").expect("write");
    let unit = javaparse::parse_file(file.path()).expect("parse_file");
    assert_eq!(first_class(&unit).name, "FromDisk");
}

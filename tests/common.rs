#![allow(dead_code)]

use javaparse::ast::*;

pub fn parse_unit(source: &str) -> CompilationUnit {
    javaparse::parse_compilation_unit(source).expect("source should parse")
}

pub fn parse_stmt(source: &str) -> Statement {
    javaparse::parse_statement(source).expect("statement should parse")
}

pub fn parse_expr(source: &str) -> Expression {
    javaparse::parse_expression(source).expect("expression should parse")
}

pub fn first_class(unit: &CompilationUnit) -> &ClassDeclaration {
    unit.type_declarations
        .iter()
        .find_map(|decl| match decl {
            TypeDeclaration::Class(class) => Some(class),
            _ => None,
        })
        .expect("compilation unit should contain a class")
}

pub fn first_method<'a>(class: &'a ClassDeclaration) -> &'a MethodDeclaration {
    class
        .body
        .iter()
        .find_map(|member| match member {
            ClassBodyDeclaration::Method(method) => Some(method),
            _ => None,
        })
        .expect("class should contain a method")
}

pub fn lit(value: &str) -> Expression {
    Expression::Literal(Literal::new(value))
}

pub fn name(value: &str) -> Expression {
    Expression::Name(Name::new(value))
}

pub fn bin(operator: BinaryOperator, lhs: Expression, rhs: Expression) -> Expression {
    Expression::Binary(BinaryExpression {
        operator,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

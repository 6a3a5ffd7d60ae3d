mod common;

use common::*;
use javaparse::ast::*;
use pretty_assertions::assert_eq;

fn roundtrip_unit(source: &str) {
    let first = parse_unit(source);
    let printed = serialize(&first);
    let second = javaparse::parse_compilation_unit(&printed)
        .unwrap_or_else(|err| panic!("serialized output failed to parse: {err}\n{printed}"));
    assert_eq!(first, second, "round trip changed the tree for:\n{printed}");
}

fn roundtrip_statement(source: &str) {
    let first = parse_stmt(source);
    let printed = serialize_statement(&first);
    let second = javaparse::parse_statement(&printed)
        .unwrap_or_else(|err| panic!("serialized output failed to parse: {err}\n{printed}"));
    assert_eq!(first, second, "round trip changed the tree for:\n{printed}");
}

fn roundtrip_expression(source: &str) {
    let first = parse_expr(source);
    let printed = serialize_expression(&first);
    let second = javaparse::parse_expression(&printed)
        .unwrap_or_else(|err| panic!("serialized output failed to parse: {err}\n{printed}"));
    assert_eq!(first, second, "round trip changed the tree for:\n{printed}");
}

#[test]
fn roundtrip_full_compilation_unit() {
    roundtrip_unit(
        r#"
        @Generated("tool")
        package com.example.shapes;

        import java.util.List;
        import static java.lang.Math.*;

        public abstract class Shape<T extends Number> extends Figure implements Drawable, Cloneable {
            protected static final int[] EDGES = {3, 4, 5};
            private T scale;

            static {
                register("shape");
            }

            {
                touch();
            }

            protected Shape(T scale) {
                super();
                this.scale = scale;
            }

            public abstract double area() throws ArithmeticException;

            public <R> R convert(Converter<? super T, ? extends R> converter, R... fallbacks) {
                return converter == null ? fallbacks[0] : converter.apply(scale);
            }

            static class Corner {
                int x, y;
            }
        }
        "#,
    );
}

#[test]
fn roundtrip_control_flow() {
    roundtrip_unit(
        r#"
        class Flow {
            int run(int n) {
                int total = 0;
                outer:
                for (int i = 0, j = n; i < j; i++, j--) {
                    if (i % 2 == 0) {
                        continue outer;
                    } else if (i == 7)
                        break;
                    while (total < 100) {
                        total += i;
                    }
                    do {
                        total--;
                    } while (total > 50);
                }
                for (int value : new int[]{1, 2, 3}) {
                    switch (value) {
                        case 1:
                        case 2:
                            total += value;
                            break;
                        default:
                            total = 0;
                    }
                }
                synchronized (this) {
                    assert total >= 0 : "negative";
                }
                return total;
            }
        }
        "#,
    );
}

#[test]
fn roundtrip_try_forms() {
    roundtrip_unit(
        r#"
        class Resources {
            void copy(String from, String to) throws Exception {
                try (Reader in = open(from); Writer out = create(to)) {
                    transfer(in, out);
                } catch (final IOException | RuntimeException e) {
                    throw new Exception(e);
                } finally {
                    log("done");
                }
                try {
                    risky();
                } catch (Throwable t) {
                }
            }
        }
        "#,
    );
}

#[test]
fn roundtrip_enum_and_interface() {
    roundtrip_unit(
        r#"
        enum Planet implements Weighed {
            MERCURY(3.3e23),
            EARTH(5.9e24) {
                public String nickname() {
                    return "home";
                }
            };

            private final double mass;

            Planet(double mass) {
                this.mass = mass;
            }
        }

        interface Weighed {
            double mass();
        }

        @interface Timeout {
            int millis() default 1000;
        }
        "#,
    );
}

#[test]
fn roundtrip_generics_and_creation() {
    roundtrip_unit(
        r#"
        class Factory {
            Map<String, List<? extends Number>> index = new HashMap<>();

            Runnable build(final Outer outer) {
                Outer.Inner inner = outer.new Inner();
                int[][] grid = new int[3][];
                int[] row = new int[]{1, 2, 3};
                Class<?> type = String[].class;
                return new Runnable() {
                    public void run() {
                        outer.<String>accept(inner.toString());
                    }
                };
            }
        }
        "#,
    );
}

#[test]
fn roundtrip_statement_fragments() {
    for source in [
        "int a = 1, b[] = {2, 3}, c;",
        "x = (int) - y;",
        "x = (a) - y;",
        "if (a < b) f(); else g();",
        "for (;;) break;",
        "throw new IllegalStateException();",
        "class Local { void f() {} }",
        ";",
    ] {
        roundtrip_statement(source);
    }
}

#[test]
fn roundtrip_expression_fragments() {
    for source in [
        "a + b * c - d",
        "(a + b) * c",
        "a = b = c += 1",
        "flag ? x : y ? z : w",
        "-x++ + ~y",
        "a instanceof List && !done",
        "list.get(i).field.length",
        "a.b.c(x).d(y)",
        "matrix[i][j]",
        "new StringBuilder(16).append(\"x\").toString()",
        "(List<String>) raw",
        "void.class",
        "- -a",
        "+ +a",
        "- --a",
        "+ ++a",
        "-(-a)",
    ] {
        roundtrip_expression(source);
    }
}

#[test]
fn stacked_sign_operators_do_not_fuse() {
    // Minus(Minus(a)) must not print as `--a`, which would re-lex as a
    // single decrement token.
    let expr = parse_expr("- -a");
    assert_eq!(
        expr,
        Expression::Unary(UnaryExpression {
            operator: UnaryOperator::Minus,
            expression: Box::new(Expression::Unary(UnaryExpression {
                operator: UnaryOperator::Minus,
                expression: Box::new(name("a")),
            })),
        })
    );
    assert_eq!(serialize_expression(&expr), "- -a");
    assert_eq!(serialize_expression(&parse_expr("- --a")), "- --a");
    // Leading `--` lexes back as one token either way, so no space is needed.
    assert_eq!(serialize_expression(&parse_expr("-- -a")), "---a");

    roundtrip_unit("class A { int f() { return - -x; } }");
}

#[test]
fn literals_survive_verbatim() {
    let source = r#"class L { long mask = 0x1F; int sep = 1_000_000; float f = 1.5e10f; char c = '\n'; String s = "a\tb"; }"#;
    let unit = parse_unit(source);
    let printed = serialize(&unit);
    for lexeme in ["0x1F", "1_000_000", "1.5e10f", r"'\n'", r#""a\tb""#] {
        assert!(printed.contains(lexeme), "missing {lexeme} in:\n{printed}");
    }
    assert_eq!(unit, parse_unit(&printed));
}

#[test]
fn serialized_output_shape() {
    let unit = parse_unit("package p;class A{void f(){if(x)g();}}");
    let printed = serialize(&unit);
    assert_eq!(
        printed,
        "package p;\nclass A {\n  void f() {\n    if (x)\n      g();\n  }\n}\n"
    );
}

#[test]
fn deep_expression_chain_does_not_overflow() {
    let mut expression = lit("0");
    for _ in 0..10_000 {
        expression = bin(BinaryOperator::Add, expression, lit("1"));
    }
    let printed = serialize_expression(&expression);
    let reparsed = javaparse::parse_expression(&printed).expect("deep chain should reparse");
    assert_eq!(expression, reparsed);
}

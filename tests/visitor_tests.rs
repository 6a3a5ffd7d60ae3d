mod common;

use common::*;
use javaparse::ast::*;
use pretty_assertions::assert_eq;

const SOURCE: &str = r#"
class Outer {
    void first() {
        helper(1 + 2);
    }

    class Inner {
        void second() {}
    }

    void third() {
        new Runnable() {
            public void run() {}
        };
    }
}
"#;

#[derive(Default)]
struct MethodCollector {
    names: Vec<String>,
}

impl Visitor for MethodCollector {
    fn visit_method_declaration(&mut self, node: &MethodDeclaration) -> bool {
        self.names.push(node.name.clone());
        true
    }
}

#[test]
fn collects_methods_across_nesting_levels() {
    let unit = parse_unit(SOURCE);
    let mut collector = MethodCollector::default();
    unit.accept(&mut collector);
    assert_eq!(collector.names, vec!["first", "second", "third", "run"]);
}

struct SkipNestedClasses {
    names: Vec<String>,
    depth: usize,
}

impl Visitor for SkipNestedClasses {
    fn visit_class_declaration(&mut self, _node: &ClassDeclaration) -> bool {
        self.depth += 1;
        self.depth == 1
    }

    fn leave_class_declaration(&mut self, _node: &ClassDeclaration) {
        self.depth -= 1;
    }

    fn visit_method_declaration(&mut self, node: &MethodDeclaration) -> bool {
        self.names.push(node.name.clone());
        true
    }
}

#[test]
fn returning_false_prunes_the_subtree() {
    let unit = parse_unit(SOURCE);
    let mut visitor = SkipNestedClasses { names: vec![], depth: 0 };
    unit.accept(&mut visitor);
    // Inner is pruned, so second never shows up. Pruning also skips the
    // matching leave, so Inner's increment is never undone.
    assert_eq!(visitor.names, vec!["first", "third", "run"]);
    assert_eq!(visitor.depth, 1);
}

#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

impl Visitor for EventLog {
    fn visit_class_declaration(&mut self, node: &ClassDeclaration) -> bool {
        self.events.push(format!("enter class {}", node.name));
        true
    }

    fn leave_class_declaration(&mut self, node: &ClassDeclaration) {
        self.events.push(format!("leave class {}", node.name));
    }

    fn visit_method_declaration(&mut self, node: &MethodDeclaration) -> bool {
        self.events.push(format!("enter method {}", node.name));
        true
    }

    fn leave_method_declaration(&mut self, node: &MethodDeclaration) {
        self.events.push(format!("leave method {}", node.name));
    }
}

#[test]
fn leave_runs_after_all_children() {
    let unit = parse_unit("class A { void f() {} class B { void g() {} } }");
    let mut log = EventLog::default();
    unit.accept(&mut log);
    assert_eq!(
        log.events,
        vec![
            "enter class A",
            "enter method f",
            "leave method f",
            "enter class B",
            "enter method g",
            "leave method g",
            "leave class B",
            "leave class A",
        ]
    );
}

#[derive(Default)]
struct NameCounter {
    count: usize,
}

impl Visitor for NameCounter {
    fn visit_name(&mut self, _node: &Name) -> bool {
        self.count += 1;
        true
    }
}

#[test]
fn expressions_are_walked_too() {
    let expression = parse_expr("a + b * c(d)");
    let mut counter = NameCounter::default();
    expression.accept(&mut counter);
    assert_eq!(counter.count, 3);
}

#[derive(Default)]
struct BracketSpotter {
    saw_bracketed_sum: bool,
}

impl Visitor for BracketSpotter {
    fn visit_bracketed(&mut self, node: &Expression) -> bool {
        if let Expression::Bracketed(inner) = node {
            self.saw_bracketed_sum = matches!(
                inner.as_ref(),
                Expression::Binary(binary) if binary.operator == BinaryOperator::Add
            );
        }
        true
    }
}

#[test]
fn bracketed_expressions_report_their_contents() {
    let expression = parse_expr("(a + b) * c");
    let mut spotter = BracketSpotter::default();
    expression.accept(&mut spotter);
    assert!(spotter.saw_bracketed_sum);
}

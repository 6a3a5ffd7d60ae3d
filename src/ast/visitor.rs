//! Read-only visitor over the AST.
//!
//! Every node kind has a `visit_*` / `leave_*` pair. `visit_*` runs before
//! the node's children and its return value gates descent: `false` prunes
//! the subtree (and skips the matching `leave_*`). `leave_*` runs after all
//! children. Both default to no-ops that keep walking, so implementations
//! override only the hooks they care about.

use crate::ast::nodes::*;

macro_rules! visit_leave {
    ($visit:ident, $leave:ident, $node:ty) => {
        fn $visit(&mut self, _node: &$node) -> bool {
            true
        }
        fn $leave(&mut self, _node: &$node) {}
    };
}

pub trait Visitor {
    visit_leave!(visit_compilation_unit, leave_compilation_unit, CompilationUnit);
    visit_leave!(visit_package_declaration, leave_package_declaration, PackageDeclaration);
    visit_leave!(visit_import_declaration, leave_import_declaration, ImportDeclaration);
    visit_leave!(visit_class_declaration, leave_class_declaration, ClassDeclaration);
    visit_leave!(visit_interface_declaration, leave_interface_declaration, InterfaceDeclaration);
    visit_leave!(visit_enum_declaration, leave_enum_declaration, EnumDeclaration);
    visit_leave!(visit_enum_constant, leave_enum_constant, EnumConstant);
    visit_leave!(visit_annotation_declaration, leave_annotation_declaration, AnnotationDeclaration);
    visit_leave!(
        visit_annotation_method_declaration,
        leave_annotation_method_declaration,
        AnnotationMethodDeclaration
    );
    visit_leave!(visit_annotation, leave_annotation, Annotation);
    visit_leave!(visit_field_declaration, leave_field_declaration, FieldDeclaration);
    visit_leave!(visit_method_declaration, leave_method_declaration, MethodDeclaration);
    visit_leave!(
        visit_constructor_declaration,
        leave_constructor_declaration,
        ConstructorDeclaration
    );
    visit_leave!(visit_class_initializer, leave_class_initializer, ClassInitializer);
    visit_leave!(visit_formal_parameter, leave_formal_parameter, FormalParameter);
    visit_leave!(visit_variable, leave_variable, Variable);
    visit_leave!(visit_variable_declarator, leave_variable_declarator, VariableDeclarator);
    visit_leave!(visit_array_initializer, leave_array_initializer, ArrayInitializer);
    visit_leave!(visit_type, leave_type, Type);
    visit_leave!(visit_type_parameter, leave_type_parameter, TypeParameter);
    visit_leave!(visit_wildcard, leave_wildcard, Wildcard);

    visit_leave!(visit_block, leave_block, Block);
    visit_leave!(
        visit_local_variable_declaration,
        leave_local_variable_declaration,
        LocalVariableDeclaration
    );
    visit_leave!(visit_if_then_else, leave_if_then_else, IfThenElse);
    visit_leave!(visit_while, leave_while, While);
    visit_leave!(visit_do_while, leave_do_while, DoWhile);
    visit_leave!(visit_for, leave_for, For);
    visit_leave!(visit_for_each, leave_for_each, ForEach);
    visit_leave!(visit_switch, leave_switch, Switch);
    visit_leave!(visit_switch_case, leave_switch_case, SwitchCase);
    visit_leave!(visit_try, leave_try, Try);
    visit_leave!(visit_resource, leave_resource, Resource);
    visit_leave!(visit_catch, leave_catch, Catch);
    visit_leave!(visit_throw, leave_throw, Throw);
    visit_leave!(visit_return, leave_return, Return);
    visit_leave!(visit_break, leave_break, Break);
    visit_leave!(visit_continue, leave_continue, Continue);
    visit_leave!(visit_assert, leave_assert, Assert);
    visit_leave!(visit_synchronized, leave_synchronized, Synchronized);
    visit_leave!(
        visit_constructor_invocation,
        leave_constructor_invocation,
        ConstructorInvocation
    );
    visit_leave!(visit_labeled, leave_labeled, Labeled);

    visit_leave!(visit_literal, leave_literal, Literal);
    visit_leave!(visit_name, leave_name, Name);
    visit_leave!(visit_binary_expression, leave_binary_expression, BinaryExpression);
    visit_leave!(visit_unary_expression, leave_unary_expression, UnaryExpression);
    visit_leave!(visit_instance_of, leave_instance_of, InstanceOf);
    visit_leave!(visit_assignment, leave_assignment, Assignment);
    visit_leave!(visit_conditional, leave_conditional, Conditional);
    visit_leave!(visit_cast, leave_cast, Cast);
    visit_leave!(visit_method_invocation, leave_method_invocation, MethodInvocation);
    visit_leave!(visit_field_access, leave_field_access, FieldAccess);
    visit_leave!(visit_array_access, leave_array_access, ArrayAccess);
    visit_leave!(visit_array_creation, leave_array_creation, ArrayCreation);
    visit_leave!(visit_instance_creation, leave_instance_creation, InstanceCreation);
    visit_leave!(visit_class_literal, leave_class_literal, ClassLiteral);
    visit_leave!(visit_bracketed, leave_bracketed, Expression);
}

/// Nodes that can drive a [`Visitor`] over themselves and their children.
pub trait Accept {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

fn accept_all<T: Accept, V: Visitor>(items: &[T], visitor: &mut V) {
    for item in items {
        item.accept(visitor);
    }
}

impl Accept for CompilationUnit {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_compilation_unit(self) {
            if let Some(package) = &self.package_declaration {
                package.accept(visitor);
            }
            accept_all(&self.import_declarations, visitor);
            accept_all(&self.type_declarations, visitor);
            visitor.leave_compilation_unit(self);
        }
    }
}

impl Accept for PackageDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_package_declaration(self) {
            accept_all(&self.modifiers, visitor);
            self.name.accept(visitor);
            visitor.leave_package_declaration(self);
        }
    }
}

impl Accept for ImportDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_import_declaration(self) {
            self.name.accept(visitor);
            visitor.leave_import_declaration(self);
        }
    }
}

impl Accept for TypeDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            TypeDeclaration::Class(decl) => decl.accept(visitor),
            TypeDeclaration::Interface(decl) => decl.accept(visitor),
            TypeDeclaration::Enum(decl) => decl.accept(visitor),
            TypeDeclaration::Annotation(decl) => decl.accept(visitor),
            TypeDeclaration::Empty => {}
        }
    }
}

impl Accept for ClassDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_class_declaration(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.type_parameters, visitor);
            if let Some(extends) = &self.extends {
                extends.accept(visitor);
            }
            accept_all(&self.implements, visitor);
            accept_all(&self.body, visitor);
            visitor.leave_class_declaration(self);
        }
    }
}

impl Accept for InterfaceDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_interface_declaration(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.type_parameters, visitor);
            accept_all(&self.extends, visitor);
            accept_all(&self.body, visitor);
            visitor.leave_interface_declaration(self);
        }
    }
}

impl Accept for EnumDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_enum_declaration(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.implements, visitor);
            accept_all(&self.constants, visitor);
            accept_all(&self.body, visitor);
            visitor.leave_enum_declaration(self);
        }
    }
}

impl Accept for EnumConstant {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_enum_constant(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.arguments, visitor);
            if let Some(body) = &self.body {
                accept_all(body, visitor);
            }
            visitor.leave_enum_constant(self);
        }
    }
}

impl Accept for AnnotationDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_annotation_declaration(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.body, visitor);
            visitor.leave_annotation_declaration(self);
        }
    }
}

impl Accept for AnnotationBodyDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            AnnotationBodyDeclaration::Method(decl) => decl.accept(visitor),
            AnnotationBodyDeclaration::Field(decl) => decl.accept(visitor),
            AnnotationBodyDeclaration::Type(decl) => decl.accept(visitor),
            AnnotationBodyDeclaration::Empty => {}
        }
    }
}

impl Accept for AnnotationMethodDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_annotation_method_declaration(self) {
            accept_all(&self.modifiers, visitor);
            self.return_type.accept(visitor);
            if let Some(default) = &self.default_value {
                default.accept(visitor);
            }
            visitor.leave_annotation_method_declaration(self);
        }
    }
}

impl Accept for ClassBodyDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            ClassBodyDeclaration::Field(decl) => decl.accept(visitor),
            ClassBodyDeclaration::Method(decl) => decl.accept(visitor),
            ClassBodyDeclaration::Constructor(decl) => decl.accept(visitor),
            ClassBodyDeclaration::Initializer(decl) => decl.accept(visitor),
            ClassBodyDeclaration::Type(decl) => decl.accept(visitor),
            ClassBodyDeclaration::Empty => {}
        }
    }
}

impl Accept for FieldDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_field_declaration(self) {
            accept_all(&self.modifiers, visitor);
            self.field_type.accept(visitor);
            accept_all(&self.declarators, visitor);
            visitor.leave_field_declaration(self);
        }
    }
}

impl Accept for MethodDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_method_declaration(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.type_parameters, visitor);
            if let Some(return_type) = &self.return_type {
                return_type.accept(visitor);
            }
            accept_all(&self.parameters, visitor);
            accept_all(&self.throws, visitor);
            if let Some(body) = &self.body {
                body.accept(visitor);
            }
            visitor.leave_method_declaration(self);
        }
    }
}

impl Accept for ConstructorDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_constructor_declaration(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.type_parameters, visitor);
            accept_all(&self.parameters, visitor);
            accept_all(&self.throws, visitor);
            self.body.accept(visitor);
            visitor.leave_constructor_declaration(self);
        }
    }
}

impl Accept for ClassInitializer {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_class_initializer(self) {
            self.block.accept(visitor);
            visitor.leave_class_initializer(self);
        }
    }
}

impl Accept for FormalParameter {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_formal_parameter(self) {
            accept_all(&self.modifiers, visitor);
            self.parameter_type.accept(visitor);
            self.variable.accept(visitor);
            visitor.leave_formal_parameter(self);
        }
    }
}

impl Accept for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_variable(self) {
            visitor.leave_variable(self);
        }
    }
}

impl Accept for VariableDeclarator {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_variable_declarator(self) {
            self.variable.accept(visitor);
            if let Some(initializer) = &self.initializer {
                initializer.accept(visitor);
            }
            visitor.leave_variable_declarator(self);
        }
    }
}

impl Accept for VariableInitializer {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            VariableInitializer::Expression(expr) => expr.accept(visitor),
            VariableInitializer::Array(init) => init.accept(visitor),
        }
    }
}

impl Accept for ArrayInitializer {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_array_initializer(self) {
            accept_all(&self.elements, visitor);
            visitor.leave_array_initializer(self);
        }
    }
}

impl Accept for Modifier {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Modifier::Basic(_) => {}
            Modifier::Annotation(annotation) => annotation.accept(visitor),
        }
    }
}

impl Accept for Annotation {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_annotation(self) {
            self.name.accept(visitor);
            match &self.value {
                AnnotationValue::Marker => {}
                AnnotationValue::SingleMember(value) => value.accept(visitor),
                AnnotationValue::Normal(members) => {
                    for member in members {
                        member.value.accept(visitor);
                    }
                }
            }
            visitor.leave_annotation(self);
        }
    }
}

impl Accept for ElementValue {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            ElementValue::Expression(expr) => expr.accept(visitor),
            ElementValue::Annotation(annotation) => annotation.accept(visitor),
            ElementValue::Array(values) => accept_all(values, visitor),
        }
    }
}

impl Accept for Type {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_type(self) {
            if let Some(enclosing) = &self.enclosed_in {
                enclosing.accept(visitor);
            }
            if let TypeName::Reference(name) = &self.name {
                name.accept(visitor);
            }
            if let TypeArguments::List(arguments) = &self.type_arguments {
                accept_all(arguments, visitor);
            }
            visitor.leave_type(self);
        }
    }
}

impl Accept for TypeArgument {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            TypeArgument::Type(ty) => ty.accept(visitor),
            TypeArgument::Wildcard(wildcard) => wildcard.accept(visitor),
        }
    }
}

impl Accept for Wildcard {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_wildcard(self) {
            if let Some(bound) = &self.bound {
                bound.bound_type.accept(visitor);
            }
            visitor.leave_wildcard(self);
        }
    }
}

impl Accept for TypeParameter {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_type_parameter(self) {
            accept_all(&self.bounds, visitor);
            visitor.leave_type_parameter(self);
        }
    }
}

impl Accept for Block {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_block(self) {
            accept_all(&self.statements, visitor);
            visitor.leave_block(self);
        }
    }
}

impl Accept for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Statement::Block(block) => block.accept(visitor),
            Statement::Empty => {}
            Statement::Expression(expr) => expr.accept(visitor),
            Statement::LocalVariable(decl) => decl.accept(visitor),
            Statement::Type(decl) => decl.accept(visitor),
            Statement::IfThenElse(stmt) => stmt.accept(visitor),
            Statement::While(stmt) => stmt.accept(visitor),
            Statement::DoWhile(stmt) => stmt.accept(visitor),
            Statement::For(stmt) => stmt.accept(visitor),
            Statement::ForEach(stmt) => stmt.accept(visitor),
            Statement::Switch(stmt) => stmt.accept(visitor),
            Statement::Try(stmt) => stmt.accept(visitor),
            Statement::Throw(stmt) => stmt.accept(visitor),
            Statement::Return(stmt) => stmt.accept(visitor),
            Statement::Break(stmt) => stmt.accept(visitor),
            Statement::Continue(stmt) => stmt.accept(visitor),
            Statement::Assert(stmt) => stmt.accept(visitor),
            Statement::Synchronized(stmt) => stmt.accept(visitor),
            Statement::ConstructorInvocation(stmt) => stmt.accept(visitor),
            Statement::Labeled(stmt) => stmt.accept(visitor),
        }
    }
}

impl Accept for LocalVariableDeclaration {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_local_variable_declaration(self) {
            accept_all(&self.modifiers, visitor);
            self.variable_type.accept(visitor);
            accept_all(&self.declarators, visitor);
            visitor.leave_local_variable_declaration(self);
        }
    }
}

impl Accept for IfThenElse {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_if_then_else(self) {
            self.predicate.accept(visitor);
            self.if_true.accept(visitor);
            if let Some(if_false) = &self.if_false {
                if_false.accept(visitor);
            }
            visitor.leave_if_then_else(self);
        }
    }
}

impl Accept for While {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_while(self) {
            self.predicate.accept(visitor);
            self.body.accept(visitor);
            visitor.leave_while(self);
        }
    }
}

impl Accept for DoWhile {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_do_while(self) {
            self.body.accept(visitor);
            self.predicate.accept(visitor);
            visitor.leave_do_while(self);
        }
    }
}

impl Accept for For {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_for(self) {
            match &self.init {
                Some(ForInit::Declaration(decl)) => decl.accept(visitor),
                Some(ForInit::Expressions(exprs)) => accept_all(exprs, visitor),
                None => {}
            }
            if let Some(predicate) = &self.predicate {
                predicate.accept(visitor);
            }
            accept_all(&self.update, visitor);
            self.body.accept(visitor);
            visitor.leave_for(self);
        }
    }
}

impl Accept for ForEach {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_for_each(self) {
            accept_all(&self.modifiers, visitor);
            self.variable_type.accept(visitor);
            self.variable.accept(visitor);
            self.iterable.accept(visitor);
            self.body.accept(visitor);
            visitor.leave_for_each(self);
        }
    }
}

impl Accept for Switch {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_switch(self) {
            self.expression.accept(visitor);
            accept_all(&self.cases, visitor);
            visitor.leave_switch(self);
        }
    }
}

impl Accept for SwitchCase {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_switch_case(self) {
            for label in &self.labels {
                if let SwitchLabel::Case(expr) = label {
                    expr.accept(visitor);
                }
            }
            accept_all(&self.body, visitor);
            visitor.leave_switch_case(self);
        }
    }
}

impl Accept for Try {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_try(self) {
            accept_all(&self.resources, visitor);
            self.block.accept(visitor);
            accept_all(&self.catches, visitor);
            if let Some(finally) = &self.finally {
                finally.accept(visitor);
            }
            visitor.leave_try(self);
        }
    }
}

impl Accept for Resource {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_resource(self) {
            accept_all(&self.modifiers, visitor);
            self.resource_type.accept(visitor);
            self.variable.accept(visitor);
            self.initializer.accept(visitor);
            visitor.leave_resource(self);
        }
    }
}

impl Accept for Catch {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_catch(self) {
            accept_all(&self.modifiers, visitor);
            accept_all(&self.types, visitor);
            self.variable.accept(visitor);
            self.block.accept(visitor);
            visitor.leave_catch(self);
        }
    }
}

impl Accept for Throw {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_throw(self) {
            self.exception.accept(visitor);
            visitor.leave_throw(self);
        }
    }
}

impl Accept for Return {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_return(self) {
            if let Some(result) = &self.result {
                result.accept(visitor);
            }
            visitor.leave_return(self);
        }
    }
}

impl Accept for Break {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_break(self) {
            visitor.leave_break(self);
        }
    }
}

impl Accept for Continue {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_continue(self) {
            visitor.leave_continue(self);
        }
    }
}

impl Accept for Assert {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_assert(self) {
            self.predicate.accept(visitor);
            if let Some(message) = &self.message {
                message.accept(visitor);
            }
            visitor.leave_assert(self);
        }
    }
}

impl Accept for Synchronized {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_synchronized(self) {
            self.monitor.accept(visitor);
            self.body.accept(visitor);
            visitor.leave_synchronized(self);
        }
    }
}

impl Accept for ConstructorInvocation {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_constructor_invocation(self) {
            accept_all(&self.type_arguments, visitor);
            accept_all(&self.arguments, visitor);
            visitor.leave_constructor_invocation(self);
        }
    }
}

impl Accept for Labeled {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_labeled(self) {
            self.statement.accept(visitor);
            visitor.leave_labeled(self);
        }
    }
}

impl Accept for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Expression::Literal(expr) => expr.accept(visitor),
            Expression::Name(expr) => expr.accept(visitor),
            Expression::Binary(expr) => expr.accept(visitor),
            Expression::Unary(expr) => expr.accept(visitor),
            Expression::InstanceOf(expr) => expr.accept(visitor),
            Expression::Assignment(expr) => expr.accept(visitor),
            Expression::Conditional(expr) => expr.accept(visitor),
            Expression::Cast(expr) => expr.accept(visitor),
            Expression::MethodInvocation(expr) => expr.accept(visitor),
            Expression::FieldAccess(expr) => expr.accept(visitor),
            Expression::ArrayAccess(expr) => expr.accept(visitor),
            Expression::ArrayCreation(expr) => expr.accept(visitor),
            Expression::InstanceCreation(expr) => expr.accept(visitor),
            Expression::ClassLiteral(expr) => expr.accept(visitor),
            Expression::Bracketed(inner) => {
                if visitor.visit_bracketed(self) {
                    inner.accept(visitor);
                    visitor.leave_bracketed(self);
                }
            }
        }
    }
}

impl Accept for Literal {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_literal(self) {
            visitor.leave_literal(self);
        }
    }
}

impl Accept for Name {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_name(self) {
            visitor.leave_name(self);
        }
    }
}

impl Accept for BinaryExpression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_binary_expression(self) {
            self.lhs.accept(visitor);
            self.rhs.accept(visitor);
            visitor.leave_binary_expression(self);
        }
    }
}

impl Accept for UnaryExpression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_unary_expression(self) {
            self.expression.accept(visitor);
            visitor.leave_unary_expression(self);
        }
    }
}

impl Accept for InstanceOf {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_instance_of(self) {
            self.expression.accept(visitor);
            self.target_type.accept(visitor);
            visitor.leave_instance_of(self);
        }
    }
}

impl Accept for Assignment {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_assignment(self) {
            self.target.accept(visitor);
            self.value.accept(visitor);
            visitor.leave_assignment(self);
        }
    }
}

impl Accept for Conditional {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_conditional(self) {
            self.predicate.accept(visitor);
            self.if_true.accept(visitor);
            self.if_false.accept(visitor);
            visitor.leave_conditional(self);
        }
    }
}

impl Accept for Cast {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_cast(self) {
            self.target_type.accept(visitor);
            self.expression.accept(visitor);
            visitor.leave_cast(self);
        }
    }
}

impl Accept for MethodInvocation {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_method_invocation(self) {
            if let Some(target) = &self.target {
                target.accept(visitor);
            }
            accept_all(&self.type_arguments, visitor);
            accept_all(&self.arguments, visitor);
            visitor.leave_method_invocation(self);
        }
    }
}

impl Accept for FieldAccess {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_field_access(self) {
            self.target.accept(visitor);
            visitor.leave_field_access(self);
        }
    }
}

impl Accept for ArrayAccess {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_array_access(self) {
            self.target.accept(visitor);
            self.index.accept(visitor);
            visitor.leave_array_access(self);
        }
    }
}

impl Accept for ArrayCreation {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_array_creation(self) {
            self.element_type.accept(visitor);
            for dimension in self.dimensions.iter().flatten() {
                dimension.accept(visitor);
            }
            if let Some(initializer) = &self.initializer {
                initializer.accept(visitor);
            }
            visitor.leave_array_creation(self);
        }
    }
}

impl Accept for InstanceCreation {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_instance_creation(self) {
            if let Some(enclosing) = &self.enclosed_in {
                enclosing.accept(visitor);
            }
            self.instance_type.accept(visitor);
            accept_all(&self.type_arguments, visitor);
            accept_all(&self.arguments, visitor);
            if let Some(body) = &self.body {
                accept_all(body, visitor);
            }
            visitor.leave_instance_creation(self);
        }
    }
}

impl Accept for ClassLiteral {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if visitor.visit_class_literal(self) {
            self.literal_type.accept(visitor);
            visitor.leave_class_literal(self);
        }
    }
}

//! Serialization of the AST back to Java source.
//!
//! The output is canonically formatted (two-space indent, one statement per
//! line) rather than a reproduction of the original layout, but it is always
//! valid Java that re-parses to a structurally equal tree. Literal lexemes
//! are emitted verbatim, so literal spellings survive the round trip.

use crate::ast::nodes::*;

const INDENT: &str = "  ";

/// Serializes a compilation unit to Java source text.
pub fn serialize(unit: &CompilationUnit) -> String {
    let mut serializer = Serializer::new();
    serializer.write_compilation_unit(unit);
    serializer.finish()
}

/// Serializes a single statement, for fragment round trips.
pub fn serialize_statement(statement: &Statement) -> String {
    let mut serializer = Serializer::new();
    serializer.write_statement(statement);
    serializer.finish()
}

/// Serializes a single expression on one line.
pub fn serialize_expression(expression: &Expression) -> String {
    let mut serializer = Serializer::new();
    serializer.write_expression(expression);
    serializer.finish()
}

/// Work item for the non-recursive expression writer.
///
/// Expressions nest arbitrarily deep (a parsed `1+1+...+1` chain is one
/// left-leaning spine), so the writer drives an explicit work stack instead
/// of recursing per node.
enum Task<'a> {
    Expr(&'a Expression),
    VarInit(&'a VariableInitializer),
    Text(&'static str),
    Owned(String),
    AnonymousBody(&'a [ClassBodyDeclaration]),
}

struct Serializer {
    out: String,
    indent: usize,
}

impl Serializer {
    fn new() -> Self {
        Self { out: String::new(), indent: 0 }
    }

    fn finish(self) -> String {
        self.out
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    // -- compilation unit level ---------------------------------------------

    fn write_compilation_unit(&mut self, unit: &CompilationUnit) {
        if let Some(package) = &unit.package_declaration {
            for modifier in &package.modifiers {
                self.write_modifier(modifier);
                self.out.push('\n');
            }
            self.out.push_str("package ");
            self.out.push_str(&package.name.value);
            self.out.push_str(";\n");
        }
        for import in &unit.import_declarations {
            self.out.push_str("import ");
            if import.is_static {
                self.out.push_str("static ");
            }
            self.out.push_str(&import.name.value);
            if import.on_demand {
                self.out.push_str(".*");
            }
            self.out.push_str(";\n");
        }
        for declaration in &unit.type_declarations {
            self.write_type_declaration(declaration);
        }
    }

    fn write_type_declaration(&mut self, declaration: &TypeDeclaration) {
        match declaration {
            TypeDeclaration::Class(decl) => self.write_class_declaration(decl),
            TypeDeclaration::Interface(decl) => self.write_interface_declaration(decl),
            TypeDeclaration::Enum(decl) => self.write_enum_declaration(decl),
            TypeDeclaration::Annotation(decl) => self.write_annotation_declaration(decl),
            TypeDeclaration::Empty => {
                self.write_indent();
                self.out.push_str(";\n");
            }
        }
    }

    fn write_class_declaration(&mut self, decl: &ClassDeclaration) {
        self.write_indent();
        self.write_modifiers(&decl.modifiers);
        self.out.push_str("class ");
        self.out.push_str(&decl.name);
        self.write_type_parameters(&decl.type_parameters);
        if let Some(extends) = &decl.extends {
            self.out.push_str(" extends ");
            let text = self.type_to_string(extends);
            self.out.push_str(&text);
        }
        self.write_type_list(" implements ", &decl.implements);
        self.out.push_str(" {\n");
        self.indent += 1;
        for member in &decl.body {
            self.write_class_body_declaration(member);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }

    fn write_interface_declaration(&mut self, decl: &InterfaceDeclaration) {
        self.write_indent();
        self.write_modifiers(&decl.modifiers);
        self.out.push_str("interface ");
        self.out.push_str(&decl.name);
        self.write_type_parameters(&decl.type_parameters);
        self.write_type_list(" extends ", &decl.extends);
        self.out.push_str(" {\n");
        self.indent += 1;
        for member in &decl.body {
            self.write_class_body_declaration(member);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }

    fn write_enum_declaration(&mut self, decl: &EnumDeclaration) {
        self.write_indent();
        self.write_modifiers(&decl.modifiers);
        self.out.push_str("enum ");
        self.out.push_str(&decl.name);
        self.write_type_list(" implements ", &decl.implements);
        self.out.push_str(" {\n");
        self.indent += 1;
        for (i, constant) in decl.constants.iter().enumerate() {
            self.write_enum_constant(constant);
            if i + 1 < decl.constants.len() {
                self.out.push(',');
            }
            self.out.push('\n');
        }
        if !decl.body.is_empty() {
            self.write_indent();
            self.out.push_str(";\n");
            for member in &decl.body {
                self.write_class_body_declaration(member);
            }
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }

    fn write_enum_constant(&mut self, constant: &EnumConstant) {
        self.write_indent();
        self.write_modifiers(&constant.modifiers);
        self.out.push_str(&constant.name);
        if !constant.arguments.is_empty() {
            self.out.push('(');
            self.write_expression_list(&constant.arguments);
            self.out.push(')');
        }
        if let Some(body) = &constant.body {
            self.write_anonymous_body(body);
        }
    }

    fn write_annotation_declaration(&mut self, decl: &AnnotationDeclaration) {
        self.write_indent();
        self.write_modifiers(&decl.modifiers);
        self.out.push_str("@interface ");
        self.out.push_str(&decl.name);
        self.out.push_str(" {\n");
        self.indent += 1;
        for member in &decl.body {
            match member {
                AnnotationBodyDeclaration::Method(method) => {
                    self.write_annotation_method(method);
                }
                AnnotationBodyDeclaration::Field(field) => self.write_field_declaration(field),
                AnnotationBodyDeclaration::Type(nested) => self.write_type_declaration(nested),
                AnnotationBodyDeclaration::Empty => {
                    self.write_indent();
                    self.out.push_str(";\n");
                }
            }
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }

    fn write_annotation_method(&mut self, method: &AnnotationMethodDeclaration) {
        self.write_indent();
        self.write_modifiers(&method.modifiers);
        let return_type = self.type_to_string(&method.return_type);
        self.out.push_str(&return_type);
        self.out.push(' ');
        self.out.push_str(&method.name);
        self.out.push_str("()");
        for _ in 0..method.extended_dimensions {
            self.out.push_str("[]");
        }
        if let Some(default) = &method.default_value {
            self.out.push_str(" default ");
            self.write_element_value(default);
        }
        self.out.push_str(";\n");
    }

    // -- class members ------------------------------------------------------

    fn write_class_body_declaration(&mut self, member: &ClassBodyDeclaration) {
        match member {
            ClassBodyDeclaration::Field(field) => self.write_field_declaration(field),
            ClassBodyDeclaration::Method(method) => self.write_method_declaration(method),
            ClassBodyDeclaration::Constructor(ctor) => self.write_constructor_declaration(ctor),
            ClassBodyDeclaration::Initializer(init) => self.write_class_initializer(init),
            ClassBodyDeclaration::Type(nested) => self.write_type_declaration(nested),
            ClassBodyDeclaration::Empty => {
                self.write_indent();
                self.out.push_str(";\n");
            }
        }
    }

    fn write_field_declaration(&mut self, field: &FieldDeclaration) {
        self.write_indent();
        self.write_modifiers(&field.modifiers);
        let field_type = self.type_to_string(&field.field_type);
        self.out.push_str(&field_type);
        self.out.push(' ');
        self.write_declarators(&field.declarators);
        self.out.push_str(";\n");
    }

    fn write_declarators(&mut self, declarators: &[VariableDeclarator]) {
        for (i, declarator) in declarators.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_variable(&declarator.variable);
            if let Some(initializer) = &declarator.initializer {
                self.out.push_str(" = ");
                self.write_variable_initializer(initializer);
            }
        }
    }

    fn write_variable(&mut self, variable: &Variable) {
        self.out.push_str(&variable.name);
        for _ in 0..variable.dimensions {
            self.out.push_str("[]");
        }
    }

    fn write_variable_initializer(&mut self, initializer: &VariableInitializer) {
        let mut stack = vec![];
        push_variable_initializer(&mut stack, initializer);
        self.drain_expression_stack(stack);
    }

    fn write_method_declaration(&mut self, method: &MethodDeclaration) {
        self.write_indent();
        self.write_modifiers(&method.modifiers);
        self.write_type_parameter_prefix(&method.type_parameters);
        match &method.return_type {
            Some(return_type) => {
                let text = self.type_to_string(return_type);
                self.out.push_str(&text);
            }
            None => self.out.push_str("void"),
        }
        self.out.push(' ');
        self.out.push_str(&method.name);
        self.write_parameters(&method.parameters);
        for _ in 0..method.extended_dimensions {
            self.out.push_str("[]");
        }
        self.write_type_list(" throws ", &method.throws);
        match &method.body {
            Some(body) => {
                self.write_attached_block(body);
                self.out.push('\n');
            }
            None => self.out.push_str(";\n"),
        }
    }

    fn write_constructor_declaration(&mut self, ctor: &ConstructorDeclaration) {
        self.write_indent();
        self.write_modifiers(&ctor.modifiers);
        self.write_type_parameter_prefix(&ctor.type_parameters);
        self.out.push_str(&ctor.name);
        self.write_parameters(&ctor.parameters);
        self.write_type_list(" throws ", &ctor.throws);
        self.write_attached_block(&ctor.body);
        self.out.push('\n');
    }

    fn write_class_initializer(&mut self, init: &ClassInitializer) {
        self.write_indent();
        if init.is_static {
            self.out.push_str("static");
            self.write_attached_block(&init.block);
        } else {
            self.out.push_str("{\n");
            self.indent += 1;
            for statement in &init.block.statements {
                self.write_statement(statement);
            }
            self.indent -= 1;
            self.write_indent();
            self.out.push('}');
        }
        self.out.push('\n');
    }

    fn write_parameters(&mut self, parameters: &[FormalParameter]) {
        self.out.push('(');
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_modifiers(&parameter.modifiers);
            let parameter_type = self.type_to_string(&parameter.parameter_type);
            self.out.push_str(&parameter_type);
            if parameter.vararg {
                self.out.push_str("...");
            }
            self.out.push(' ');
            self.write_variable(&parameter.variable);
        }
        self.out.push(')');
    }

    // -- modifiers and annotations ------------------------------------------

    fn write_modifiers(&mut self, modifiers: &[Modifier]) {
        for modifier in modifiers {
            self.write_modifier(modifier);
            self.out.push(' ');
        }
    }

    fn write_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Basic(basic) => self.out.push_str(basic.as_str()),
            Modifier::Annotation(annotation) => self.write_annotation(annotation),
        }
    }

    fn write_annotation(&mut self, annotation: &Annotation) {
        self.out.push('@');
        self.out.push_str(&annotation.name.value);
        match &annotation.value {
            AnnotationValue::Marker => {}
            AnnotationValue::SingleMember(value) => {
                self.out.push('(');
                self.write_element_value(value);
                self.out.push(')');
            }
            AnnotationValue::Normal(members) => {
                self.out.push('(');
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(&member.name);
                    self.out.push_str(" = ");
                    self.write_element_value(&member.value);
                }
                self.out.push(')');
            }
        }
    }

    fn write_element_value(&mut self, value: &ElementValue) {
        match value {
            ElementValue::Expression(expr) => self.write_expression(expr),
            ElementValue::Annotation(annotation) => self.write_annotation(annotation),
            ElementValue::Array(values) => {
                self.out.push('{');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_element_value(value);
                }
                self.out.push('}');
            }
        }
    }

    // -- types --------------------------------------------------------------

    fn type_to_string(&self, ty: &Type) -> String {
        let mut text = String::new();
        if let Some(enclosing) = &ty.enclosed_in {
            text.push_str(&self.type_to_string(enclosing));
            text.push('.');
        }
        match &ty.name {
            TypeName::Primitive(primitive) => text.push_str(primitive.as_str()),
            TypeName::Reference(name) => text.push_str(&name.value),
        }
        match &ty.type_arguments {
            TypeArguments::None => {}
            TypeArguments::Diamond => text.push_str("<>"),
            TypeArguments::List(arguments) => {
                text.push('<');
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        text.push_str(", ");
                    }
                    text.push_str(&self.type_argument_to_string(argument));
                }
                text.push('>');
            }
        }
        for _ in 0..ty.dimensions {
            text.push_str("[]");
        }
        text
    }

    fn type_argument_to_string(&self, argument: &TypeArgument) -> String {
        match argument {
            TypeArgument::Type(ty) => self.type_to_string(ty),
            TypeArgument::Wildcard(wildcard) => match &wildcard.bound {
                None => "?".to_string(),
                Some(bound) => {
                    let keyword = match bound.kind {
                        BoundKind::Extends => "extends",
                        BoundKind::Super => "super",
                    };
                    format!("? {} {}", keyword, self.type_to_string(&bound.bound_type))
                }
            },
        }
    }

    fn write_type_list(&mut self, prefix: &str, types: &[Type]) {
        if types.is_empty() {
            return;
        }
        self.out.push_str(prefix);
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            let text = self.type_to_string(ty);
            self.out.push_str(&text);
        }
    }

    fn write_type_parameters(&mut self, parameters: &[TypeParameter]) {
        if parameters.is_empty() {
            return;
        }
        self.out.push('<');
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(&parameter.name);
            if !parameter.bounds.is_empty() {
                self.out.push_str(" extends ");
                for (j, bound) in parameter.bounds.iter().enumerate() {
                    if j > 0 {
                        self.out.push_str(" & ");
                    }
                    let text = self.type_to_string(bound);
                    self.out.push_str(&text);
                }
            }
        }
        self.out.push('>');
    }

    fn write_type_parameter_prefix(&mut self, parameters: &[TypeParameter]) {
        if !parameters.is_empty() {
            self.write_type_parameters(parameters);
            self.out.push(' ');
        }
    }

    fn write_type_argument_prefix(&mut self, arguments: &[TypeArgument]) {
        if arguments.is_empty() {
            return;
        }
        self.out.push('<');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            let text = self.type_argument_to_string(argument);
            self.out.push_str(&text);
        }
        self.out.push('>');
    }

    // -- statements ---------------------------------------------------------

    fn write_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => {
                self.write_indent();
                self.out.push_str("{\n");
                self.indent += 1;
                for inner in &block.statements {
                    self.write_statement(inner);
                }
                self.indent -= 1;
                self.write_indent();
                self.out.push_str("}\n");
            }
            Statement::Empty => {
                self.write_indent();
                self.out.push_str(";\n");
            }
            Statement::Expression(expr) => {
                self.write_indent();
                self.write_expression(expr);
                self.out.push_str(";\n");
            }
            Statement::LocalVariable(decl) => {
                self.write_indent();
                self.write_local_variable(decl);
                self.out.push_str(";\n");
            }
            Statement::Type(decl) => self.write_type_declaration(decl),
            Statement::IfThenElse(stmt) => self.write_if(stmt),
            Statement::While(stmt) => {
                self.write_indent();
                self.out.push_str("while (");
                self.write_expression(&stmt.predicate);
                self.out.push(')');
                if self.write_substatement(&stmt.body) {
                    self.out.push('\n');
                }
            }
            Statement::DoWhile(stmt) => {
                self.write_indent();
                self.out.push_str("do");
                if self.write_substatement(&stmt.body) {
                    self.out.push(' ');
                } else {
                    self.write_indent();
                }
                self.out.push_str("while (");
                self.write_expression(&stmt.predicate);
                self.out.push_str(");\n");
            }
            Statement::For(stmt) => self.write_for(stmt),
            Statement::ForEach(stmt) => {
                self.write_indent();
                self.out.push_str("for (");
                self.write_modifiers(&stmt.modifiers);
                let variable_type = self.type_to_string(&stmt.variable_type);
                self.out.push_str(&variable_type);
                self.out.push(' ');
                self.write_variable(&stmt.variable);
                self.out.push_str(" : ");
                self.write_expression(&stmt.iterable);
                self.out.push(')');
                if self.write_substatement(&stmt.body) {
                    self.out.push('\n');
                }
            }
            Statement::Switch(stmt) => self.write_switch(stmt),
            Statement::Try(stmt) => self.write_try(stmt),
            Statement::Throw(stmt) => {
                self.write_indent();
                self.out.push_str("throw ");
                self.write_expression(&stmt.exception);
                self.out.push_str(";\n");
            }
            Statement::Return(stmt) => {
                self.write_indent();
                self.out.push_str("return");
                if let Some(result) = &stmt.result {
                    self.out.push(' ');
                    self.write_expression(result);
                }
                self.out.push_str(";\n");
            }
            Statement::Break(stmt) => {
                self.write_indent();
                self.out.push_str("break");
                if let Some(label) = &stmt.label {
                    self.out.push(' ');
                    self.out.push_str(label);
                }
                self.out.push_str(";\n");
            }
            Statement::Continue(stmt) => {
                self.write_indent();
                self.out.push_str("continue");
                if let Some(label) = &stmt.label {
                    self.out.push(' ');
                    self.out.push_str(label);
                }
                self.out.push_str(";\n");
            }
            Statement::Assert(stmt) => {
                self.write_indent();
                self.out.push_str("assert ");
                self.write_expression(&stmt.predicate);
                if let Some(message) = &stmt.message {
                    self.out.push_str(" : ");
                    self.write_expression(message);
                }
                self.out.push_str(";\n");
            }
            Statement::Synchronized(stmt) => {
                self.write_indent();
                self.out.push_str("synchronized (");
                self.write_expression(&stmt.monitor);
                self.out.push(')');
                self.write_attached_block(&stmt.body);
                self.out.push('\n');
            }
            Statement::ConstructorInvocation(stmt) => {
                self.write_indent();
                self.write_type_argument_prefix(&stmt.type_arguments);
                match stmt.kind {
                    ConstructorKind::This => self.out.push_str("this("),
                    ConstructorKind::Super => self.out.push_str("super("),
                }
                self.write_expression_list(&stmt.arguments);
                self.out.push_str(");\n");
            }
            Statement::Labeled(stmt) => {
                self.write_indent();
                self.out.push_str(&stmt.label);
                self.out.push(':');
                if self.write_substatement(&stmt.statement) {
                    self.out.push('\n');
                }
            }
        }
    }

    fn write_if(&mut self, stmt: &IfThenElse) {
        self.write_indent();
        self.out.push_str("if (");
        self.write_expression(&stmt.predicate);
        self.out.push(')');
        let inline = self.write_substatement(&stmt.if_true);
        match &stmt.if_false {
            None => {
                if inline {
                    self.out.push('\n');
                }
            }
            Some(if_false) => {
                if inline {
                    self.out.push_str(" else");
                } else {
                    self.write_indent();
                    self.out.push_str("else");
                }
                if self.write_substatement(if_false) {
                    self.out.push('\n');
                }
            }
        }
    }

    fn write_for(&mut self, stmt: &For) {
        self.write_indent();
        self.out.push_str("for (");
        match &stmt.init {
            None => {}
            Some(ForInit::Declaration(decl)) => self.write_local_variable(decl),
            Some(ForInit::Expressions(exprs)) => self.write_expression_list(exprs),
        }
        self.out.push(';');
        if let Some(predicate) = &stmt.predicate {
            self.out.push(' ');
            self.write_expression(predicate);
        }
        self.out.push(';');
        if !stmt.update.is_empty() {
            self.out.push(' ');
            self.write_expression_list(&stmt.update);
        }
        self.out.push(')');
        if self.write_substatement(&stmt.body) {
            self.out.push('\n');
        }
    }

    fn write_switch(&mut self, stmt: &Switch) {
        self.write_indent();
        self.out.push_str("switch (");
        self.write_expression(&stmt.expression);
        self.out.push_str(") {\n");
        self.indent += 1;
        for case in &stmt.cases {
            for label in &case.labels {
                self.write_indent();
                match label {
                    SwitchLabel::Case(expr) => {
                        self.out.push_str("case ");
                        self.write_expression(expr);
                        self.out.push_str(":\n");
                    }
                    SwitchLabel::Default => self.out.push_str("default:\n"),
                }
            }
            self.indent += 1;
            for inner in &case.body {
                self.write_statement(inner);
            }
            self.indent -= 1;
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }

    fn write_try(&mut self, stmt: &Try) {
        self.write_indent();
        self.out.push_str("try");
        if !stmt.resources.is_empty() {
            self.out.push_str(" (");
            for (i, resource) in stmt.resources.iter().enumerate() {
                if i > 0 {
                    self.out.push_str("; ");
                }
                self.write_modifiers(&resource.modifiers);
                let resource_type = self.type_to_string(&resource.resource_type);
                self.out.push_str(&resource_type);
                self.out.push(' ');
                self.write_variable(&resource.variable);
                self.out.push_str(" = ");
                self.write_expression(&resource.initializer);
            }
            self.out.push(')');
        }
        self.write_attached_block(&stmt.block);
        for catch in &stmt.catches {
            self.out.push_str(" catch (");
            self.write_modifiers(&catch.modifiers);
            for (i, ty) in catch.types.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(" | ");
                }
                let text = self.type_to_string(ty);
                self.out.push_str(&text);
            }
            self.out.push(' ');
            self.write_variable(&catch.variable);
            self.out.push(')');
            self.write_attached_block(&catch.block);
        }
        if let Some(finally) = &stmt.finally {
            self.out.push_str(" finally");
            self.write_attached_block(finally);
        }
        self.out.push('\n');
    }

    fn write_local_variable(&mut self, decl: &LocalVariableDeclaration) {
        self.write_modifiers(&decl.modifiers);
        let variable_type = self.type_to_string(&decl.variable_type);
        self.out.push_str(&variable_type);
        self.out.push(' ');
        self.write_declarators(&decl.declarators);
    }

    /// Writes a block opened by a space on the current line; leaves the
    /// closing brace unterminated so callers can append (`else`, `catch`).
    fn write_attached_block(&mut self, block: &Block) {
        self.out.push_str(" {\n");
        self.indent += 1;
        for statement in &block.statements {
            self.write_statement(statement);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    /// Writes the body of a control statement. Returns `true` when the body
    /// was a block written inline (caller finishes the line), `false` when a
    /// lone statement was written on its own, already-terminated line.
    fn write_substatement(&mut self, statement: &Statement) -> bool {
        match statement {
            Statement::Block(block) => {
                self.write_attached_block(block);
                true
            }
            _ => {
                self.out.push('\n');
                self.indent += 1;
                self.write_statement(statement);
                self.indent -= 1;
                false
            }
        }
    }

    // -- expressions --------------------------------------------------------

    fn write_expression_list(&mut self, expressions: &[Expression]) {
        for (i, expression) in expressions.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_expression(expression);
        }
    }

    fn write_expression(&mut self, root: &Expression) {
        let stack = vec![Task::Expr(root)];
        self.drain_expression_stack(stack);
    }

    fn drain_expression_stack<'a>(&mut self, mut stack: Vec<Task<'a>>) {
        while let Some(task) = stack.pop() {
            match task {
                Task::Text(text) => self.out.push_str(text),
                Task::Owned(text) => self.out.push_str(&text),
                Task::AnonymousBody(body) => self.write_anonymous_body(body),
                Task::VarInit(initializer) => push_variable_initializer(&mut stack, initializer),
                Task::Expr(expression) => self.push_expression_tasks(&mut stack, expression),
            }
        }
    }

    /// Pushes the pieces of one expression in reverse emission order.
    fn push_expression_tasks<'a>(&mut self, stack: &mut Vec<Task<'a>>, expr: &'a Expression) {
        match expr {
            Expression::Literal(literal) => stack.push(Task::Owned(literal.value.clone())),
            Expression::Name(name) => stack.push(Task::Owned(name.value.clone())),
            Expression::Binary(binary) => {
                stack.push(Task::Expr(&binary.rhs));
                stack.push(Task::Owned(format!(" {} ", binary.operator.symbol())));
                stack.push(Task::Expr(&binary.lhs));
            }
            Expression::Unary(unary) => {
                if unary.operator.is_postfix() {
                    stack.push(Task::Text(unary.operator.symbol()));
                    stack.push(Task::Expr(&unary.expression));
                } else {
                    stack.push(Task::Expr(&unary.expression));
                    if glues_to_operand(unary.operator, &unary.expression) {
                        stack.push(Task::Text(" "));
                    }
                    stack.push(Task::Text(unary.operator.symbol()));
                }
            }
            Expression::InstanceOf(instance_of) => {
                let text = format!(" instanceof {}", self.type_to_string(&instance_of.target_type));
                stack.push(Task::Owned(text));
                stack.push(Task::Expr(&instance_of.expression));
            }
            Expression::Assignment(assignment) => {
                stack.push(Task::Expr(&assignment.value));
                stack.push(Task::Owned(format!(" {} ", assignment.operator.symbol())));
                stack.push(Task::Expr(&assignment.target));
            }
            Expression::Conditional(conditional) => {
                stack.push(Task::Expr(&conditional.if_false));
                stack.push(Task::Text(" : "));
                stack.push(Task::Expr(&conditional.if_true));
                stack.push(Task::Text(" ? "));
                stack.push(Task::Expr(&conditional.predicate));
            }
            Expression::Cast(cast) => {
                stack.push(Task::Expr(&cast.expression));
                stack.push(Task::Owned(format!("({}) ", self.type_to_string(&cast.target_type))));
            }
            Expression::MethodInvocation(invocation) => {
                stack.push(Task::Text(")"));
                push_argument_tasks(stack, &invocation.arguments);
                stack.push(Task::Text("("));
                stack.push(Task::Owned(invocation.name.clone()));
                if !invocation.type_arguments.is_empty() {
                    stack.push(Task::Owned(self.type_argument_list_to_string(
                        &invocation.type_arguments,
                    )));
                }
                if let Some(target) = &invocation.target {
                    stack.push(Task::Text("."));
                    stack.push(Task::Expr(target));
                }
            }
            Expression::FieldAccess(access) => {
                stack.push(Task::Owned(access.name.clone()));
                stack.push(Task::Text("."));
                stack.push(Task::Expr(&access.target));
            }
            Expression::ArrayAccess(access) => {
                stack.push(Task::Text("]"));
                stack.push(Task::Expr(&access.index));
                stack.push(Task::Text("["));
                stack.push(Task::Expr(&access.target));
            }
            Expression::ArrayCreation(creation) => {
                if let Some(initializer) = &creation.initializer {
                    stack.push(Task::Text("}"));
                    let mut first = true;
                    for element in initializer.elements.iter().rev() {
                        if !first {
                            stack.push(Task::Text(", "));
                        }
                        // reversed, so separators go after each element
                        stack.push(Task::VarInit(element));
                        first = false;
                    }
                    stack.push(Task::Text("{"));
                    stack.push(Task::Text(" "));
                }
                for dimension in creation.dimensions.iter().rev() {
                    stack.push(Task::Text("]"));
                    if let Some(size) = dimension {
                        stack.push(Task::Expr(size));
                    }
                    stack.push(Task::Text("["));
                }
                stack.push(Task::Owned(self.type_to_string(&creation.element_type)));
                stack.push(Task::Text("new "));
            }
            Expression::InstanceCreation(creation) => {
                if let Some(body) = &creation.body {
                    stack.push(Task::AnonymousBody(body));
                }
                stack.push(Task::Text(")"));
                push_argument_tasks(stack, &creation.arguments);
                stack.push(Task::Text("("));
                stack.push(Task::Owned(self.type_to_string(&creation.instance_type)));
                if !creation.type_arguments.is_empty() {
                    let mut text = self.type_argument_list_to_string(&creation.type_arguments);
                    text.push(' ');
                    stack.push(Task::Owned(text));
                }
                stack.push(Task::Text("new "));
                if let Some(enclosing) = &creation.enclosed_in {
                    stack.push(Task::Text("."));
                    stack.push(Task::Expr(enclosing));
                }
            }
            Expression::ClassLiteral(literal) => {
                let mut text = self.type_to_string(&literal.literal_type);
                text.push_str(".class");
                stack.push(Task::Owned(text));
            }
            Expression::Bracketed(inner) => {
                stack.push(Task::Text(")"));
                stack.push(Task::Expr(inner));
                stack.push(Task::Text("("));
            }
        }
    }

    fn type_argument_list_to_string(&self, arguments: &[TypeArgument]) -> String {
        let mut text = String::from("<");
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            text.push_str(&self.type_argument_to_string(argument));
        }
        text.push('>');
        text
    }

    /// Anonymous class body written mid-expression at the current indent.
    fn write_anonymous_body(&mut self, body: &[ClassBodyDeclaration]) {
        self.out.push_str(" {\n");
        self.indent += 1;
        for member in body {
            self.write_class_body_declaration(member);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }
}

fn push_argument_tasks<'a>(stack: &mut Vec<Task<'a>>, arguments: &'a [Expression]) {
    let mut first = true;
    for argument in arguments.iter().rev() {
        if !first {
            stack.push(Task::Text(", "));
        }
        stack.push(Task::Expr(argument));
        first = false;
    }
}

fn push_variable_initializer<'a>(stack: &mut Vec<Task<'a>>, initializer: &'a VariableInitializer) {
    match initializer {
        VariableInitializer::Expression(expr) => stack.push(Task::Expr(expr)),
        VariableInitializer::Array(array) => {
            stack.push(Task::Text("}"));
            let mut first = true;
            for element in array.elements.iter().rev() {
                if !first {
                    stack.push(Task::Text(", "));
                }
                stack.push(Task::VarInit(element));
                first = false;
            }
            stack.push(Task::Text("{"));
        }
    }
}

/// True when writing `operator` directly against `operand` would fuse two
/// sign tokens into one, e.g. `-` before `-a` re-lexing as `--a`. A single
/// space keeps the tokens apart.
fn glues_to_operand(operator: UnaryOperator, operand: &Expression) -> bool {
    if !matches!(operator, UnaryOperator::Plus | UnaryOperator::Minus) {
        return false;
    }
    match operand {
        Expression::Unary(inner) if !inner.operator.is_postfix() => {
            inner.operator.symbol().starts_with(operator.symbol())
        }
        _ => false,
    }
}

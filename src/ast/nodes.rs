//! Typed AST for Java source.
//!
//! Every node derives `PartialEq`/`Eq`, and no node stores positions or
//! tokens, so equality compares program structure only: two parses of
//! differently formatted but identical programs produce equal trees.

use std::fmt;

// ---------------------------------------------------------------------------
// Compilation unit level
// ---------------------------------------------------------------------------

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilationUnit {
    pub package_declaration: Option<PackageDeclaration>,
    pub import_declarations: Vec<ImportDeclaration>,
    pub type_declarations: Vec<TypeDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDeclaration {
    pub name: Name,
    /// Annotations preceding the `package` keyword
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub name: Name,
    pub is_static: bool,
    /// `true` for `import a.b.*;` style imports
    pub on_demand: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDeclaration {
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Enum(EnumDeclaration),
    Annotation(AnnotationDeclaration),
    /// A stray `;` at type-declaration level
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Option<Type>,
    pub implements: Vec<Type>,
    pub body: Vec<ClassBodyDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Vec<Type>,
    pub body: Vec<ClassBodyDeclaration>,
}

/// Enum declarations keep constants and ordinary members apart; the parser
/// rejects members that appear before the constant list is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub implements: Vec<Type>,
    pub constants: Vec<EnumConstant>,
    pub body: Vec<ClassBodyDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub arguments: Vec<Expression>,
    pub body: Option<Vec<ClassBodyDeclaration>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub body: Vec<AnnotationBodyDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationBodyDeclaration {
    Method(AnnotationMethodDeclaration),
    Field(FieldDeclaration),
    Type(Box<TypeDeclaration>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMethodDeclaration {
    pub name: String,
    pub return_type: Type,
    pub modifiers: Vec<Modifier>,
    pub extended_dimensions: usize,
    pub default_value: Option<ElementValue>,
}

// ---------------------------------------------------------------------------
// Class members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassBodyDeclaration {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Initializer(ClassInitializer),
    Type(Box<TypeDeclaration>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub modifiers: Vec<Modifier>,
    pub field_type: Type,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub type_parameters: Vec<TypeParameter>,
    /// `None` for `void` methods
    pub return_type: Option<Type>,
    pub parameters: Vec<FormalParameter>,
    /// Array dimensions written after the parameter list (`int m()[]`)
    pub extended_dimensions: usize,
    pub throws: Vec<Type>,
    /// `None` for abstract and interface methods
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<FormalParameter>,
    pub throws: Vec<Type>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInitializer {
    pub is_static: bool,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalParameter {
    pub modifiers: Vec<Modifier>,
    pub parameter_type: Type,
    pub variable: Variable,
    pub vararg: bool,
}

/// A declared variable name with any trailing array dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub dimensions: usize,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), dimensions: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarator {
    pub variable: Variable,
    pub initializer: Option<VariableInitializer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableInitializer {
    Expression(Expression),
    Array(ArrayInitializer),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayInitializer {
    pub elements: Vec<VariableInitializer>,
}

// ---------------------------------------------------------------------------
// Modifiers and annotations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Basic(BasicModifier),
    Annotation(Annotation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicModifier {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
}

impl BasicModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicModifier::Public => "public",
            BasicModifier::Protected => "protected",
            BasicModifier::Private => "private",
            BasicModifier::Static => "static",
            BasicModifier::Abstract => "abstract",
            BasicModifier::Final => "final",
            BasicModifier::Native => "native",
            BasicModifier::Synchronized => "synchronized",
            BasicModifier::Transient => "transient",
            BasicModifier::Volatile => "volatile",
            BasicModifier::Strictfp => "strictfp",
        }
    }
}

impl fmt::Display for BasicModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An annotation use such as `@Foo`, `@Foo(1)` or `@Foo(a = 1, b = 2)`.
///
/// The three argument shapes are mutually exclusive, so they are one enum
/// rather than two optional fields that could both be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: Name,
    pub value: AnnotationValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    /// `@Foo`
    Marker,
    /// `@Foo(expr)`
    SingleMember(ElementValue),
    /// `@Foo(a = 1, b = 2)`, possibly with zero members (`@Foo()`)
    Normal(Vec<AnnotationMember>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMember {
    pub name: String,
    pub value: ElementValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementValue {
    Expression(Expression),
    Annotation(Box<Annotation>),
    Array(Vec<ElementValue>),
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub name: TypeName,
    pub type_arguments: TypeArguments,
    /// Owner type for nested generics such as `Map<K, V>.Entry`
    pub enclosed_in: Option<Box<Type>>,
    pub dimensions: usize,
}

impl Type {
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Self {
            name: TypeName::Primitive(primitive),
            type_arguments: TypeArguments::None,
            enclosed_in: None,
            dimensions: 0,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: TypeName::Reference(Name::new(name)),
            type_arguments: TypeArguments::None,
            enclosed_in: None,
            dimensions: 0,
        }
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Primitive(PrimitiveType),
    Reference(Name),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type argument position: absent, the diamond `<>`, or an explicit list.
///
/// `List` with zero elements never occurs; the diamond is its own variant so
/// `Map<>` and raw `Map` cannot be confused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeArguments {
    #[default]
    None,
    Diamond,
    List(Vec<TypeArgument>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArgument {
    Type(Type),
    Wildcard(Wildcard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    pub bound: Option<WildcardBound>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardBound {
    pub kind: BoundKind,
    pub bound_type: Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Extends,
    Super,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    pub bounds: Vec<Type>,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Block(Block),
    Empty,
    Expression(Box<Expression>),
    LocalVariable(LocalVariableDeclaration),
    Type(Box<TypeDeclaration>),
    IfThenElse(IfThenElse),
    While(While),
    DoWhile(DoWhile),
    For(For),
    ForEach(ForEach),
    Switch(Switch),
    Try(Try),
    Throw(Throw),
    Return(Return),
    Break(Break),
    Continue(Continue),
    Assert(Assert),
    Synchronized(Synchronized),
    ConstructorInvocation(ConstructorInvocation),
    Labeled(Labeled),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariableDeclaration {
    pub modifiers: Vec<Modifier>,
    pub variable_type: Type,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfThenElse {
    pub predicate: Box<Expression>,
    pub if_true: Box<Statement>,
    pub if_false: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct While {
    pub predicate: Box<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoWhile {
    pub body: Box<Statement>,
    pub predicate: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct For {
    pub init: Option<ForInit>,
    pub predicate: Option<Box<Expression>>,
    pub update: Vec<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForInit {
    Declaration(LocalVariableDeclaration),
    Expressions(Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForEach {
    pub modifiers: Vec<Modifier>,
    pub variable_type: Type,
    pub variable: Variable,
    pub iterable: Box<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub expression: Box<Expression>,
    pub cases: Vec<SwitchCase>,
}

/// One group of labels and the statements that follow them.
///
/// `case 1: case 2: f();` is a single case with two labels, matching how
/// fall-through control flow actually groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCase {
    pub labels: Vec<SwitchLabel>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchLabel {
    Case(Expression),
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Try {
    pub resources: Vec<Resource>,
    pub block: Block,
    pub catches: Vec<Catch>,
    pub finally: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub modifiers: Vec<Modifier>,
    pub resource_type: Type,
    pub variable: Variable,
    pub initializer: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catch {
    pub modifiers: Vec<Modifier>,
    /// More than one entry for multi-catch (`catch (A | B e)`)
    pub types: Vec<Type>,
    pub variable: Variable,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throw {
    pub exception: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    pub result: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Break {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continue {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assert {
    pub predicate: Box<Expression>,
    pub message: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synchronized {
    pub monitor: Box<Expression>,
    pub body: Block,
}

/// Explicit constructor invocation (`this(...)` or `super(...)`) as the
/// first statement of a constructor body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInvocation {
    pub kind: ConstructorKind,
    pub type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    This,
    Super,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeled {
    pub label: String,
    pub statement: Box<Statement>,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    Name(Name),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    InstanceOf(InstanceOf),
    Assignment(Assignment),
    Conditional(Conditional),
    Cast(Cast),
    MethodInvocation(MethodInvocation),
    FieldAccess(FieldAccess),
    ArrayAccess(ArrayAccess),
    ArrayCreation(ArrayCreation),
    InstanceCreation(InstanceCreation),
    ClassLiteral(ClassLiteral),
    /// A parenthesised expression; kept as its own node so serialization
    /// never has to re-derive where parentheses are required
    Bracketed(Box<Expression>),
}

/// A literal keeps exactly the text that appeared in the source, so `0x1F`,
/// `1_000`, `"a\nb"` and `'A'` all survive a round trip byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// A possibly-qualified name such as `a`, `a.b.c`, or `Outer.this`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    /// `true` when the name has no dots.
    pub fn is_simple(&self) -> bool {
        !self.value.contains('.')
    }

    /// Appends a trailing segment, `a.b` + `c` giving `a.b.c`.
    pub fn append(&mut self, segment: &str) {
        self.value.push('.');
        self.value.push_str(segment);
    }

    /// Splits off the final segment, `a.b.c` giving (`a.b`, `c`).
    /// Returns `None` for a simple name.
    pub fn split_last(&self) -> Option<(Name, &str)> {
        let idx = self.value.rfind('.')?;
        Some((Name::new(&self.value[..idx]), &self.value[idx + 1..]))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    ConditionalOr,
    ConditionalAnd,
    Or,
    Xor,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::ConditionalOr => "||",
            BinaryOperator::ConditionalAnd => "&&",
            BinaryOperator::Or => "|",
            BinaryOperator::Xor => "^",
            BinaryOperator::And => "&",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::PreIncrement | UnaryOperator::PostIncrement => "++",
            UnaryOperator::PreDecrement | UnaryOperator::PostDecrement => "--",
        }
    }

    pub fn is_postfix(&self) -> bool {
        matches!(
            self,
            UnaryOperator::PostIncrement | UnaryOperator::PostDecrement
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceOf {
    pub expression: Box<Expression>,
    pub target_type: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub operator: AssignmentOperator,
    pub target: Box<Expression>,
    pub value: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    And,
    Or,
    Xor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
}

impl AssignmentOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Subtract => "-=",
            AssignmentOperator::Multiply => "*=",
            AssignmentOperator::Divide => "/=",
            AssignmentOperator::Remainder => "%=",
            AssignmentOperator::And => "&=",
            AssignmentOperator::Or => "|=",
            AssignmentOperator::Xor => "^=",
            AssignmentOperator::LeftShift => "<<=",
            AssignmentOperator::RightShift => ">>=",
            AssignmentOperator::UnsignedRightShift => ">>>=",
        }
    }
}

/// The ternary `a ? b : c`; right-associative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    pub predicate: Box<Expression>,
    pub if_true: Box<Expression>,
    pub if_false: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    pub target_type: Type,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInvocation {
    /// Always a simple identifier; qualification lives in `target`
    pub name: String,
    pub target: Option<Box<Expression>>,
    pub type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccess {
    pub name: String,
    pub target: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayAccess {
    pub target: Box<Expression>,
    pub index: Box<Expression>,
}

/// `new T[2][]` or `new T[][] { ... }`.
///
/// `dimensions` holds one entry per bracket pair; sized dimensions carry
/// their length expression, the rest are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayCreation {
    pub element_type: Type,
    pub dimensions: Vec<Option<Expression>>,
    pub initializer: Option<ArrayInitializer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceCreation {
    pub instance_type: Type,
    pub type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
    /// Present for anonymous class creation
    pub body: Option<Vec<ClassBodyDeclaration>>,
    /// Qualifier of a qualified allocation, `outer.new Inner()`
    pub enclosed_in: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLiteral {
    pub literal_type: Type,
}

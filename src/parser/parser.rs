//! Recursive descent parser producing the typed AST.
//!
//! The grammar has three classic ambiguities, all resolved by bounded
//! lookahead over the token buffer rather than backtracking:
//!
//! * generics vs. shift: in type position a compound `>>` / `>>>` token is
//!   split in place, consuming one `>` and leaving the remainder for the
//!   enclosing type argument list;
//! * cast vs. parenthesised expression: a non-consuming scan after `(`
//!   decides before anything is committed. A primitive cast may be followed
//!   by any unary expression, a reference cast only by a unary expression
//!   that does not start with `+`, `-`, `++` or `--`, which is what makes
//!   `(a) - b` a subtraction and `(int) - b` a cast;
//! * declaration vs. expression statement: a scan for modifiers, a type
//!   shape and an identifier followed by `=`, `;`, `,` or `[` picks the
//!   declaration production.
//!
//! Parsing is all-or-nothing: the first syntax error aborts and is returned.

use crate::ast::nodes::*;
use crate::parser::error::{Diagnostic, ParseError};
use crate::parser::lexer::{Lexer, LexicalToken, Token};
use crate::parser::span::Location;

type Result<T> = std::result::Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<LexicalToken>,
    current: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let (tokens, diagnostics) = Lexer::new(source).tokenize();
        Self { tokens, current: 0, diagnostics }
    }

    /// Lexical problems encountered while tokenizing the input.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Parses a whole source file.
    pub fn parse_compilation_unit(&mut self) -> Result<CompilationUnit> {
        let unit = self.parse_unit()?;
        self.expect_eof()?;
        Ok(unit)
    }

    /// Parses a single statement (including local declarations).
    pub fn parse_statement(&mut self) -> Result<Statement> {
        let statement = self.parse_block_statement()?;
        self.expect_eof()?;
        Ok(statement)
    }

    /// Parses a single expression.
    pub fn parse_expression(&mut self) -> Result<Expression> {
        let expression = self.parse_expr()?;
        self.expect_eof()?;
        Ok(expression)
    }

    // -- token plumbing -----------------------------------------------------

    fn peek(&self) -> &LexicalToken {
        &self.tokens[self.current]
    }

    fn kind(&self) -> &Token {
        &self.tokens[self.current].token
    }

    fn token_at(&self, index: usize) -> &Token {
        let clamped = index.min(self.tokens.len() - 1);
        &self.tokens[clamped].token
    }

    fn is_at_end(&self) -> bool {
        matches!(self.kind(), Token::Eof)
    }

    fn location(&self) -> Location {
        self.peek().location
    }

    fn advance(&mut self) -> &LexicalToken {
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[self.current - 1]
    }

    fn check(&self, token: &Token) -> bool {
        self.kind() == token
    }

    fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, token: Token, expected: &str) -> Result<&LexicalToken> {
        if self.check(&token) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn consume_identifier(&mut self, expected: &str) -> Result<String> {
        if self.check(&Token::Identifier) {
            Ok(self.advance().lexeme.clone())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        if self.is_at_end() {
            ParseError::UnexpectedEndOfInput {
                expected: expected.to_string(),
                location: self.location(),
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: self.peek().lexeme.clone(),
                location: self.location(),
            }
        }
    }

    fn invalid(&self, message: impl Into<String>) -> ParseError {
        ParseError::InvalidSyntax {
            message: message.into(),
            location: self.location(),
        }
    }

    fn expect_eof(&self) -> Result<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    /// Consumes one closing `>` of a type argument or type parameter list.
    ///
    /// The lexer greedily produces `>>` and `>>>`; when a nested list closes
    /// inside a compound token, the token is rewritten in place to the
    /// remainder so the outer list sees its own `>`.
    fn consume_type_list_gt(&mut self) -> Result<()> {
        match self.kind() {
            Token::Greater => {
                self.advance();
                Ok(())
            }
            Token::RightShift => {
                self.split_compound_gt(Token::Greater, ">");
                Ok(())
            }
            Token::UnsignedRightShift => {
                self.split_compound_gt(Token::RightShift, ">>");
                Ok(())
            }
            _ => Err(self.unexpected("'>'")),
        }
    }

    fn split_compound_gt(&mut self, remainder: Token, lexeme: &str) {
        let old = self.tokens[self.current].location;
        let location = Location::new(old.line, old.column + 1, old.offset + 1);
        self.tokens[self.current] = LexicalToken::new(remainder, lexeme.to_string(), location);
    }

    // -- compilation unit ---------------------------------------------------

    fn parse_unit(&mut self) -> Result<CompilationUnit> {
        let mut unit = CompilationUnit::default();
        let mut pending: Vec<Modifier> = Vec::new();

        // Annotations here belong to the package declaration if one follows,
        // otherwise to the first type declaration.
        while self.check(&Token::At) && !matches!(self.token_at(self.current + 1), Token::Interface)
        {
            pending.push(Modifier::Annotation(self.parse_annotation()?));
        }
        if self.match_token(&Token::Package) {
            let name = self.parse_qualified_name("package name")?;
            self.consume(Token::Semicolon, "';' after package declaration")?;
            unit.package_declaration = Some(PackageDeclaration {
                name,
                modifiers: std::mem::take(&mut pending),
            });
        }

        if pending.is_empty() {
            while self.match_token(&Token::Import) {
                unit.import_declarations.push(self.parse_import()?);
            }
        }

        while !self.is_at_end() {
            if self.match_token(&Token::Semicolon) {
                unit.type_declarations.push(TypeDeclaration::Empty);
                continue;
            }
            let mut modifiers = std::mem::take(&mut pending);
            modifiers.extend(self.parse_modifiers()?);
            unit.type_declarations.push(self.parse_type_declaration(modifiers)?);
        }
        if !pending.is_empty() {
            return Err(self.unexpected("type declaration"));
        }
        Ok(unit)
    }

    fn parse_import(&mut self) -> Result<ImportDeclaration> {
        let is_static = self.match_token(&Token::Static);
        let mut name = Name::new(self.consume_identifier("imported name")?);
        let mut on_demand = false;
        while self.match_token(&Token::Dot) {
            if self.match_token(&Token::Star) {
                on_demand = true;
                break;
            }
            name.append(&self.consume_identifier("identifier in import")?);
        }
        self.consume(Token::Semicolon, "';' after import declaration")?;
        Ok(ImportDeclaration { name, is_static, on_demand })
    }

    fn parse_modifiers(&mut self) -> Result<Vec<Modifier>> {
        let mut modifiers = Vec::new();
        loop {
            if let Some(basic) = basic_modifier_of(self.kind()) {
                self.advance();
                modifiers.push(Modifier::Basic(basic));
            } else if self.check(&Token::At)
                && !matches!(self.token_at(self.current + 1), Token::Interface)
            {
                modifiers.push(Modifier::Annotation(self.parse_annotation()?));
            } else {
                return Ok(modifiers);
            }
        }
    }

    fn parse_type_declaration(&mut self, modifiers: Vec<Modifier>) -> Result<TypeDeclaration> {
        match self.kind() {
            Token::Class => Ok(TypeDeclaration::Class(self.parse_class_declaration(modifiers)?)),
            Token::Interface => Ok(TypeDeclaration::Interface(
                self.parse_interface_declaration(modifiers)?,
            )),
            Token::Enum => Ok(TypeDeclaration::Enum(self.parse_enum_declaration(modifiers)?)),
            Token::At => Ok(TypeDeclaration::Annotation(
                self.parse_annotation_declaration(modifiers)?,
            )),
            _ => Err(self.unexpected("type declaration")),
        }
    }

    // -- class-like declarations --------------------------------------------

    fn parse_class_declaration(&mut self, modifiers: Vec<Modifier>) -> Result<ClassDeclaration> {
        self.consume(Token::Class, "'class'")?;
        let name = self.consume_identifier("class name")?;
        let type_parameters = if self.check(&Token::Less) {
            self.parse_type_parameters()?
        } else {
            Vec::new()
        };
        let extends = if self.match_token(&Token::Extends) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let implements = if self.match_token(&Token::Implements) {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
        let body = self.parse_class_body()?;
        Ok(ClassDeclaration {
            name,
            modifiers,
            type_parameters,
            extends,
            implements,
            body,
        })
    }

    fn parse_interface_declaration(
        &mut self,
        modifiers: Vec<Modifier>,
    ) -> Result<InterfaceDeclaration> {
        self.consume(Token::Interface, "'interface'")?;
        let name = self.consume_identifier("interface name")?;
        let type_parameters = if self.check(&Token::Less) {
            self.parse_type_parameters()?
        } else {
            Vec::new()
        };
        let extends = if self.match_token(&Token::Extends) {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
        let body = self.parse_class_body()?;
        Ok(InterfaceDeclaration { name, modifiers, type_parameters, extends, body })
    }

    fn parse_enum_declaration(&mut self, modifiers: Vec<Modifier>) -> Result<EnumDeclaration> {
        self.consume(Token::Enum, "'enum'")?;
        let name = self.consume_identifier("enum name")?;
        let implements = if self.match_token(&Token::Implements) {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
        self.consume(Token::LeftBrace, "'{' after enum header")?;

        // Constants come first; members only after the ';' that closes the
        // constant list. A member in constant position is a parse error.
        let mut constants = Vec::new();
        while !self.check(&Token::RightBrace) && !self.check(&Token::Semicolon) {
            constants.push(self.parse_enum_constant()?);
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        let mut body = Vec::new();
        if self.match_token(&Token::Semicolon) {
            while !self.check(&Token::RightBrace) && !self.is_at_end() {
                body.push(self.parse_class_member()?);
            }
        }
        self.consume(Token::RightBrace, "'}' after enum body")?;
        Ok(EnumDeclaration { name, modifiers, implements, constants, body })
    }

    fn parse_enum_constant(&mut self) -> Result<EnumConstant> {
        let mut modifiers = Vec::new();
        while self.check(&Token::At) && !matches!(self.token_at(self.current + 1), Token::Interface)
        {
            modifiers.push(Modifier::Annotation(self.parse_annotation()?));
        }
        let name = self.consume_identifier("enum constant name")?;
        let arguments = if self.check(&Token::LeftParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        let body = if self.check(&Token::LeftBrace) {
            Some(self.parse_class_body()?)
        } else {
            None
        };
        Ok(EnumConstant { name, modifiers, arguments, body })
    }

    fn parse_annotation_declaration(
        &mut self,
        modifiers: Vec<Modifier>,
    ) -> Result<AnnotationDeclaration> {
        self.consume(Token::At, "'@'")?;
        self.consume(Token::Interface, "'interface'")?;
        let name = self.consume_identifier("annotation type name")?;
        self.consume(Token::LeftBrace, "'{' after annotation type name")?;
        let mut body = Vec::new();
        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            body.push(self.parse_annotation_member()?);
        }
        self.consume(Token::RightBrace, "'}' after annotation type body")?;
        Ok(AnnotationDeclaration { name, modifiers, body })
    }

    fn parse_annotation_member(&mut self) -> Result<AnnotationBodyDeclaration> {
        if self.match_token(&Token::Semicolon) {
            return Ok(AnnotationBodyDeclaration::Empty);
        }
        let modifiers = self.parse_modifiers()?;
        match self.kind() {
            Token::Class | Token::Interface | Token::Enum | Token::At => Ok(
                AnnotationBodyDeclaration::Type(Box::new(self.parse_type_declaration(modifiers)?)),
            ),
            _ => {
                let member_type = self.parse_type()?;
                let name = self.consume_identifier("member name")?;
                if self.match_token(&Token::LeftParen) {
                    self.consume(Token::RightParen, "')' after annotation member name")?;
                    let extended_dimensions = self.parse_bracket_pairs();
                    let default_value = if self.match_token(&Token::Default) {
                        Some(self.parse_element_value()?)
                    } else {
                        None
                    };
                    self.consume(Token::Semicolon, "';' after annotation member")?;
                    Ok(AnnotationBodyDeclaration::Method(AnnotationMethodDeclaration {
                        name,
                        return_type: member_type,
                        modifiers,
                        extended_dimensions,
                        default_value,
                    }))
                } else {
                    let field = self.parse_field_rest(modifiers, member_type, name)?;
                    Ok(AnnotationBodyDeclaration::Field(field))
                }
            }
        }
    }

    // -- class members ------------------------------------------------------

    fn parse_class_body(&mut self) -> Result<Vec<ClassBodyDeclaration>> {
        self.consume(Token::LeftBrace, "'{'")?;
        let mut members = Vec::new();
        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            members.push(self.parse_class_member()?);
        }
        self.consume(Token::RightBrace, "'}'")?;
        Ok(members)
    }

    fn parse_class_member(&mut self) -> Result<ClassBodyDeclaration> {
        if self.match_token(&Token::Semicolon) {
            return Ok(ClassBodyDeclaration::Empty);
        }
        let modifiers = self.parse_modifiers()?;

        match self.kind() {
            Token::LeftBrace => {
                let is_static = match modifiers.as_slice() {
                    [] => false,
                    [Modifier::Basic(BasicModifier::Static)] => true,
                    _ => return Err(self.invalid("unexpected modifiers on initializer block")),
                };
                let block = self.parse_block()?;
                Ok(ClassBodyDeclaration::Initializer(ClassInitializer { is_static, block }))
            }
            Token::Class | Token::Interface | Token::Enum | Token::At => Ok(
                ClassBodyDeclaration::Type(Box::new(self.parse_type_declaration(modifiers)?)),
            ),
            _ => {
                let type_parameters = if self.check(&Token::Less) {
                    self.parse_type_parameters()?
                } else {
                    Vec::new()
                };
                // Constructor: identifier directly followed by '('.
                if self.check(&Token::Identifier)
                    && matches!(self.token_at(self.current + 1), Token::LeftParen)
                {
                    let name = self.consume_identifier("constructor name")?;
                    return self.parse_constructor_rest(modifiers, type_parameters, name);
                }
                if self.match_token(&Token::Void) {
                    let name = self.consume_identifier("method name")?;
                    return self.parse_method_rest(modifiers, type_parameters, None, name);
                }
                let member_type = self.parse_type()?;
                let name = self.consume_identifier("member name")?;
                if self.check(&Token::LeftParen) {
                    self.parse_method_rest(modifiers, type_parameters, Some(member_type), name)
                } else if type_parameters.is_empty() {
                    let field = self.parse_field_rest(modifiers, member_type, name)?;
                    Ok(ClassBodyDeclaration::Field(field))
                } else {
                    Err(self.invalid("type parameters are only valid on methods and constructors"))
                }
            }
        }
    }

    fn parse_method_rest(
        &mut self,
        modifiers: Vec<Modifier>,
        type_parameters: Vec<TypeParameter>,
        return_type: Option<Type>,
        name: String,
    ) -> Result<ClassBodyDeclaration> {
        let parameters = self.parse_parameters()?;
        let extended_dimensions = self.parse_bracket_pairs();
        let throws = if self.match_token(&Token::Throws) {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
        let body = if self.match_token(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_block()?)
        };
        Ok(ClassBodyDeclaration::Method(MethodDeclaration {
            name,
            modifiers,
            type_parameters,
            return_type,
            parameters,
            extended_dimensions,
            throws,
            body,
        }))
    }

    fn parse_constructor_rest(
        &mut self,
        modifiers: Vec<Modifier>,
        type_parameters: Vec<TypeParameter>,
        name: String,
    ) -> Result<ClassBodyDeclaration> {
        let parameters = self.parse_parameters()?;
        let throws = if self.match_token(&Token::Throws) {
            self.parse_type_list()?
        } else {
            Vec::new()
        };
        let body = self.parse_block()?;
        Ok(ClassBodyDeclaration::Constructor(ConstructorDeclaration {
            name,
            modifiers,
            type_parameters,
            parameters,
            throws,
            body,
        }))
    }

    fn parse_field_rest(
        &mut self,
        modifiers: Vec<Modifier>,
        field_type: Type,
        first_name: String,
    ) -> Result<FieldDeclaration> {
        let mut declarators = vec![self.parse_declarator_with_name(first_name)?];
        while self.match_token(&Token::Comma) {
            declarators.push(self.parse_variable_declarator()?);
        }
        self.consume(Token::Semicolon, "';' after field declaration")?;
        Ok(FieldDeclaration { modifiers, field_type, declarators })
    }

    fn parse_variable_declarator(&mut self) -> Result<VariableDeclarator> {
        let name = self.consume_identifier("variable name")?;
        self.parse_declarator_with_name(name)
    }

    fn parse_declarator_with_name(&mut self, name: String) -> Result<VariableDeclarator> {
        let dimensions = self.parse_bracket_pairs();
        let initializer = if self.match_token(&Token::Assign) {
            Some(self.parse_variable_initializer()?)
        } else {
            None
        };
        Ok(VariableDeclarator {
            variable: Variable { name, dimensions },
            initializer,
        })
    }

    fn parse_variable_initializer(&mut self) -> Result<VariableInitializer> {
        if self.check(&Token::LeftBrace) {
            Ok(VariableInitializer::Array(self.parse_array_initializer()?))
        } else {
            Ok(VariableInitializer::Expression(self.parse_expr()?))
        }
    }

    fn parse_array_initializer(&mut self) -> Result<ArrayInitializer> {
        self.consume(Token::LeftBrace, "'{'")?;
        let mut elements = Vec::new();
        while !self.check(&Token::RightBrace) {
            elements.push(self.parse_variable_initializer()?);
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        self.consume(Token::RightBrace, "'}' after array initializer")?;
        Ok(ArrayInitializer { elements })
    }

    fn parse_parameters(&mut self) -> Result<Vec<FormalParameter>> {
        self.consume(Token::LeftParen, "'('")?;
        let mut parameters = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                let modifiers = self.parse_modifiers()?;
                let parameter_type = self.parse_type()?;
                let vararg = self.match_token(&Token::Ellipsis);
                let name = self.consume_identifier("parameter name")?;
                let dimensions = self.parse_bracket_pairs();
                parameters.push(FormalParameter {
                    modifiers,
                    parameter_type,
                    variable: Variable { name, dimensions },
                    vararg,
                });
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.consume(Token::RightParen, "')' after parameters")?;
        if parameters.len() > 1 && parameters[..parameters.len() - 1].iter().any(|p| p.vararg) {
            return Err(self.invalid("vararg parameter must be the last parameter"));
        }
        Ok(parameters)
    }

    // -- annotations --------------------------------------------------------

    fn parse_annotation(&mut self) -> Result<Annotation> {
        self.consume(Token::At, "'@'")?;
        let name = self.parse_qualified_name("annotation name")?;
        if !self.match_token(&Token::LeftParen) {
            return Ok(Annotation { name, value: AnnotationValue::Marker });
        }
        if self.match_token(&Token::RightParen) {
            return Ok(Annotation { name, value: AnnotationValue::Normal(Vec::new()) });
        }
        if self.check(&Token::Identifier)
            && matches!(self.token_at(self.current + 1), Token::Assign)
        {
            let mut members = Vec::new();
            loop {
                let member_name = self.consume_identifier("annotation member name")?;
                self.consume(Token::Assign, "'='")?;
                let value = self.parse_element_value()?;
                members.push(AnnotationMember { name: member_name, value });
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
            self.consume(Token::RightParen, "')' after annotation members")?;
            Ok(Annotation { name, value: AnnotationValue::Normal(members) })
        } else {
            let value = self.parse_element_value()?;
            self.consume(Token::RightParen, "')' after annotation value")?;
            Ok(Annotation { name, value: AnnotationValue::SingleMember(value) })
        }
    }

    fn parse_element_value(&mut self) -> Result<ElementValue> {
        match self.kind() {
            Token::At => Ok(ElementValue::Annotation(Box::new(self.parse_annotation()?))),
            Token::LeftBrace => {
                self.advance();
                let mut values = Vec::new();
                while !self.check(&Token::RightBrace) {
                    values.push(self.parse_element_value()?);
                    if !self.match_token(&Token::Comma) {
                        break;
                    }
                }
                self.consume(Token::RightBrace, "'}' after element value array")?;
                Ok(ElementValue::Array(values))
            }
            _ => Ok(ElementValue::Expression(self.parse_conditional()?)),
        }
    }

    // -- types --------------------------------------------------------------

    fn parse_type(&mut self) -> Result<Type> {
        if let Some(primitive) = primitive_of(self.kind()) {
            self.advance();
            let dimensions = self.parse_bracket_pairs();
            return Ok(Type::primitive(primitive).with_dimensions(dimensions));
        }
        let mut ty = self.parse_class_type()?;
        ty.dimensions = self.parse_bracket_pairs();
        Ok(ty)
    }

    /// Class or interface type, without trailing array dimensions.
    ///
    /// Plain dotted prefixes collapse into one qualified name; a segment
    /// that follows a generic owner becomes its own type enclosed in it,
    /// so `a.b.Map<K, V>.Entry` is `Entry` enclosed in `a.b.Map<K, V>`.
    fn parse_class_type(&mut self) -> Result<Type> {
        let mut result: Option<Type> = None;
        let mut plain = String::new();
        loop {
            let segment = self.consume_identifier("type name")?;
            if self.check(&Token::Less) {
                let arguments = self.parse_type_arguments()?;
                let name = match result {
                    None => {
                        let full = if plain.is_empty() {
                            segment
                        } else {
                            let mut full = std::mem::take(&mut plain);
                            full.push('.');
                            full.push_str(&segment);
                            full
                        };
                        Name::new(full)
                    }
                    Some(_) => Name::new(segment),
                };
                result = Some(Type {
                    name: TypeName::Reference(name),
                    type_arguments: arguments,
                    enclosed_in: result.take().map(Box::new),
                    dimensions: 0,
                });
            } else if result.is_some() {
                result = Some(Type {
                    name: TypeName::Reference(Name::new(segment)),
                    type_arguments: TypeArguments::None,
                    enclosed_in: result.take().map(Box::new),
                    dimensions: 0,
                });
            } else {
                if !plain.is_empty() {
                    plain.push('.');
                }
                plain.push_str(&segment);
            }
            if self.check(&Token::Dot)
                && matches!(self.token_at(self.current + 1), Token::Identifier)
            {
                self.advance();
            } else {
                break;
            }
        }
        Ok(match result {
            Some(ty) => ty,
            None => Type::named(plain),
        })
    }

    fn parse_type_arguments(&mut self) -> Result<TypeArguments> {
        self.consume(Token::Less, "'<'")?;
        if self.match_token(&Token::Greater) {
            return Ok(TypeArguments::Diamond);
        }
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.parse_type_argument()?);
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        self.consume_type_list_gt()?;
        Ok(TypeArguments::List(arguments))
    }

    fn parse_type_argument(&mut self) -> Result<TypeArgument> {
        if self.match_token(&Token::Question) {
            let bound = if self.match_token(&Token::Extends) {
                Some(WildcardBound { kind: BoundKind::Extends, bound_type: self.parse_type()? })
            } else if self.match_token(&Token::Super) {
                Some(WildcardBound { kind: BoundKind::Super, bound_type: self.parse_type()? })
            } else {
                None
            };
            Ok(TypeArgument::Wildcard(Wildcard { bound }))
        } else {
            Ok(TypeArgument::Type(self.parse_type()?))
        }
    }

    fn parse_type_parameters(&mut self) -> Result<Vec<TypeParameter>> {
        self.consume(Token::Less, "'<'")?;
        let mut parameters = Vec::new();
        loop {
            let name = self.consume_identifier("type parameter name")?;
            let bounds = if self.match_token(&Token::Extends) {
                let mut bounds = vec![self.parse_type()?];
                while self.match_token(&Token::Ampersand) {
                    bounds.push(self.parse_type()?);
                }
                bounds
            } else {
                Vec::new()
            };
            parameters.push(TypeParameter { name, bounds });
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        self.consume_type_list_gt()?;
        Ok(parameters)
    }

    fn parse_type_list(&mut self) -> Result<Vec<Type>> {
        let mut types = vec![self.parse_type()?];
        while self.match_token(&Token::Comma) {
            types.push(self.parse_type()?);
        }
        Ok(types)
    }

    fn parse_qualified_name(&mut self, expected: &str) -> Result<Name> {
        let mut name = Name::new(self.consume_identifier(expected)?);
        while self.check(&Token::Dot)
            && matches!(self.token_at(self.current + 1), Token::Identifier)
        {
            self.advance();
            name.append(&self.consume_identifier(expected)?);
        }
        Ok(name)
    }

    /// Counts `[]` pairs, leaving `[expr` untouched.
    fn parse_bracket_pairs(&mut self) -> usize {
        let mut dimensions = 0;
        while self.check(&Token::LeftBracket)
            && matches!(self.token_at(self.current + 1), Token::RightBracket)
        {
            self.advance();
            self.advance();
            dimensions += 1;
        }
        dimensions
    }

    // -- statements ---------------------------------------------------------

    fn parse_block(&mut self) -> Result<Block> {
        self.consume(Token::LeftBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_block_statement()?);
        }
        self.consume(Token::RightBrace, "'}'")?;
        Ok(Block { statements })
    }

    fn parse_block_statement(&mut self) -> Result<Statement> {
        if self.lookahead_is_local_type_declaration() {
            let modifiers = self.parse_modifiers()?;
            let declaration = self.parse_type_declaration(modifiers)?;
            return Ok(Statement::Type(Box::new(declaration)));
        }
        if self.lookahead_is_local_variable() {
            let declaration = self.parse_local_variable()?;
            self.consume(Token::Semicolon, "';' after variable declaration")?;
            return Ok(Statement::LocalVariable(declaration));
        }
        self.parse_statement_inner()
    }

    fn parse_local_variable(&mut self) -> Result<LocalVariableDeclaration> {
        let modifiers = self.parse_modifiers()?;
        let variable_type = self.parse_type()?;
        let mut declarators = vec![self.parse_variable_declarator()?];
        while self.match_token(&Token::Comma) {
            declarators.push(self.parse_variable_declarator()?);
        }
        Ok(LocalVariableDeclaration { modifiers, variable_type, declarators })
    }

    fn parse_statement_inner(&mut self) -> Result<Statement> {
        match self.kind() {
            Token::LeftBrace => Ok(Statement::Block(self.parse_block()?)),
            Token::Semicolon => {
                self.advance();
                Ok(Statement::Empty)
            }
            Token::If => self.parse_if(),
            Token::While => {
                self.advance();
                self.consume(Token::LeftParen, "'(' after 'while'")?;
                let predicate = Box::new(self.parse_expr()?);
                self.consume(Token::RightParen, "')' after condition")?;
                let body = Box::new(self.parse_statement_inner()?);
                Ok(Statement::While(While { predicate, body }))
            }
            Token::Do => {
                self.advance();
                let body = Box::new(self.parse_statement_inner()?);
                self.consume(Token::While, "'while' after do body")?;
                self.consume(Token::LeftParen, "'(' after 'while'")?;
                let predicate = Box::new(self.parse_expr()?);
                self.consume(Token::RightParen, "')' after condition")?;
                self.consume(Token::Semicolon, "';' after do-while")?;
                Ok(Statement::DoWhile(DoWhile { body, predicate }))
            }
            Token::For => self.parse_for(),
            Token::Switch => self.parse_switch(),
            Token::Try => self.parse_try(),
            Token::Throw => {
                self.advance();
                let exception = Box::new(self.parse_expr()?);
                self.consume(Token::Semicolon, "';' after throw statement")?;
                Ok(Statement::Throw(Throw { exception }))
            }
            Token::Return => {
                self.advance();
                let result = if self.check(&Token::Semicolon) {
                    None
                } else {
                    Some(Box::new(self.parse_expr()?))
                };
                self.consume(Token::Semicolon, "';' after return statement")?;
                Ok(Statement::Return(Return { result }))
            }
            Token::Break => {
                self.advance();
                let label = if self.check(&Token::Identifier) {
                    Some(self.advance().lexeme.clone())
                } else {
                    None
                };
                self.consume(Token::Semicolon, "';' after break statement")?;
                Ok(Statement::Break(Break { label }))
            }
            Token::Continue => {
                self.advance();
                let label = if self.check(&Token::Identifier) {
                    Some(self.advance().lexeme.clone())
                } else {
                    None
                };
                self.consume(Token::Semicolon, "';' after continue statement")?;
                Ok(Statement::Continue(Continue { label }))
            }
            Token::Assert => {
                self.advance();
                let predicate = Box::new(self.parse_expr()?);
                let message = if self.match_token(&Token::Colon) {
                    Some(Box::new(self.parse_expr()?))
                } else {
                    None
                };
                self.consume(Token::Semicolon, "';' after assert statement")?;
                Ok(Statement::Assert(Assert { predicate, message }))
            }
            Token::Synchronized => {
                self.advance();
                self.consume(Token::LeftParen, "'(' after 'synchronized'")?;
                let monitor = Box::new(self.parse_expr()?);
                self.consume(Token::RightParen, "')' after monitor expression")?;
                let body = self.parse_block()?;
                Ok(Statement::Synchronized(Synchronized { monitor, body }))
            }
            Token::This if matches!(self.token_at(self.current + 1), Token::LeftParen) => {
                self.parse_constructor_invocation(Vec::new())
            }
            Token::Super if matches!(self.token_at(self.current + 1), Token::LeftParen) => {
                self.parse_constructor_invocation(Vec::new())
            }
            // `<T>this(...)` / `<T>super(...)`: nothing else starts with '<'
            Token::Less => {
                let arguments = match self.parse_type_arguments()? {
                    TypeArguments::List(arguments) => arguments,
                    _ => return Err(self.invalid("expected constructor type arguments")),
                };
                self.parse_constructor_invocation(arguments)
            }
            Token::Identifier if matches!(self.token_at(self.current + 1), Token::Colon) => {
                let label = self.consume_identifier("label")?;
                self.consume(Token::Colon, "':' after label")?;
                let statement = Box::new(self.parse_statement_inner()?);
                Ok(Statement::Labeled(Labeled { label, statement }))
            }
            _ => {
                let expression = self.parse_expr()?;
                self.consume(Token::Semicolon, "';' after expression statement")?;
                Ok(Statement::Expression(Box::new(expression)))
            }
        }
    }

    fn parse_constructor_invocation(
        &mut self,
        type_arguments: Vec<TypeArgument>,
    ) -> Result<Statement> {
        let kind = match self.kind() {
            Token::This => ConstructorKind::This,
            Token::Super => ConstructorKind::Super,
            _ => return Err(self.unexpected("'this' or 'super'")),
        };
        self.advance();
        let arguments = self.parse_arguments()?;
        self.consume(Token::Semicolon, "';' after constructor invocation")?;
        Ok(Statement::ConstructorInvocation(ConstructorInvocation {
            kind,
            type_arguments,
            arguments,
        }))
    }

    fn parse_if(&mut self) -> Result<Statement> {
        self.consume(Token::If, "'if'")?;
        self.consume(Token::LeftParen, "'(' after 'if'")?;
        let predicate = Box::new(self.parse_expr()?);
        self.consume(Token::RightParen, "')' after condition")?;
        let if_true = Box::new(self.parse_statement_inner()?);
        let if_false = if self.match_token(&Token::Else) {
            Some(Box::new(self.parse_statement_inner()?))
        } else {
            None
        };
        Ok(Statement::IfThenElse(IfThenElse { predicate, if_true, if_false }))
    }

    fn parse_for(&mut self) -> Result<Statement> {
        self.consume(Token::For, "'for'")?;
        self.consume(Token::LeftParen, "'(' after 'for'")?;

        if self.lookahead_is_for_each() {
            let modifiers = self.parse_modifiers()?;
            let variable_type = self.parse_type()?;
            let name = self.consume_identifier("loop variable name")?;
            let dimensions = self.parse_bracket_pairs();
            self.consume(Token::Colon, "':' in for-each")?;
            let iterable = Box::new(self.parse_expr()?);
            self.consume(Token::RightParen, "')' after for-each header")?;
            let body = Box::new(self.parse_statement_inner()?);
            return Ok(Statement::ForEach(ForEach {
                modifiers,
                variable_type,
                variable: Variable { name, dimensions },
                iterable,
                body,
            }));
        }

        let init = if self.check(&Token::Semicolon) {
            None
        } else if self.lookahead_is_local_variable() {
            Some(ForInit::Declaration(self.parse_local_variable()?))
        } else {
            Some(ForInit::Expressions(self.parse_expr_list()?))
        };
        self.consume(Token::Semicolon, "';' after for initializer")?;
        let predicate = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        self.consume(Token::Semicolon, "';' after for condition")?;
        let update = if self.check(&Token::RightParen) {
            Vec::new()
        } else {
            self.parse_expr_list()?
        };
        self.consume(Token::RightParen, "')' after for header")?;
        let body = Box::new(self.parse_statement_inner()?);
        Ok(Statement::For(For { init, predicate, update, body }))
    }

    fn parse_switch(&mut self) -> Result<Statement> {
        self.consume(Token::Switch, "'switch'")?;
        self.consume(Token::LeftParen, "'(' after 'switch'")?;
        let expression = Box::new(self.parse_expr()?);
        self.consume(Token::RightParen, "')' after switch expression")?;
        self.consume(Token::LeftBrace, "'{' after switch header")?;
        let mut cases = Vec::new();
        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            let mut labels = Vec::new();
            loop {
                if self.match_token(&Token::Case) {
                    let expr = self.parse_conditional()?;
                    self.consume(Token::Colon, "':' after case label")?;
                    labels.push(SwitchLabel::Case(expr));
                } else if self.match_token(&Token::Default) {
                    self.consume(Token::Colon, "':' after 'default'")?;
                    labels.push(SwitchLabel::Default);
                } else {
                    break;
                }
            }
            if labels.is_empty() {
                return Err(self.unexpected("'case' or 'default'"));
            }
            let mut body = Vec::new();
            while !self.check(&Token::RightBrace)
                && !self.check(&Token::Case)
                && !self.check(&Token::Default)
                && !self.is_at_end()
            {
                body.push(self.parse_block_statement()?);
            }
            cases.push(SwitchCase { labels, body });
        }
        self.consume(Token::RightBrace, "'}' after switch body")?;
        Ok(Statement::Switch(Switch { expression, cases }))
    }

    fn parse_try(&mut self) -> Result<Statement> {
        self.consume(Token::Try, "'try'")?;
        let mut resources = Vec::new();
        if self.match_token(&Token::LeftParen) {
            loop {
                let modifiers = self.parse_modifiers()?;
                let resource_type = self.parse_type()?;
                let name = self.consume_identifier("resource name")?;
                self.consume(Token::Assign, "'=' in resource declaration")?;
                let initializer = self.parse_expr()?;
                resources.push(Resource {
                    modifiers,
                    resource_type,
                    variable: Variable::new(name),
                    initializer,
                });
                if !self.match_token(&Token::Semicolon) || self.check(&Token::RightParen) {
                    break;
                }
            }
            self.consume(Token::RightParen, "')' after resources")?;
        }
        let block = self.parse_block()?;
        let mut catches = Vec::new();
        while self.match_token(&Token::Catch) {
            self.consume(Token::LeftParen, "'(' after 'catch'")?;
            let modifiers = self.parse_modifiers()?;
            let mut types = vec![self.parse_type()?];
            while self.match_token(&Token::Pipe) {
                types.push(self.parse_type()?);
            }
            let name = self.consume_identifier("exception variable name")?;
            self.consume(Token::RightParen, "')' after catch parameter")?;
            let catch_block = self.parse_block()?;
            catches.push(Catch {
                modifiers,
                types,
                variable: Variable::new(name),
                block: catch_block,
            });
        }
        let finally = if self.match_token(&Token::Finally) {
            Some(self.parse_block()?)
        } else {
            None
        };
        if resources.is_empty() && catches.is_empty() && finally.is_none() {
            return Err(self.invalid("try statement requires 'catch', 'finally', or resources"));
        }
        Ok(Statement::Try(Try { resources, block, catches, finally }))
    }

    // -- statement lookahead ------------------------------------------------

    fn lookahead_is_local_type_declaration(&self) -> bool {
        let mut i = self.current;
        if !self.scan_modifiers(&mut i) {
            return false;
        }
        match self.token_at(i) {
            Token::Class | Token::Interface | Token::Enum => true,
            Token::At => matches!(self.token_at(i + 1), Token::Interface),
            _ => false,
        }
    }

    fn lookahead_is_local_variable(&self) -> bool {
        let mut i = self.current;
        if !self.scan_modifiers(&mut i) {
            return false;
        }
        if !self.scan_type(&mut i) {
            return false;
        }
        if !matches!(self.token_at(i), Token::Identifier) {
            return false;
        }
        matches!(
            self.token_at(i + 1),
            Token::Assign | Token::Semicolon | Token::Comma | Token::LeftBracket
        )
    }

    fn lookahead_is_for_each(&self) -> bool {
        let mut i = self.current;
        if !self.scan_modifiers(&mut i) {
            return false;
        }
        if !self.scan_type(&mut i) {
            return false;
        }
        if !matches!(self.token_at(i), Token::Identifier) {
            return false;
        }
        i += 1;
        while matches!(self.token_at(i), Token::LeftBracket)
            && matches!(self.token_at(i + 1), Token::RightBracket)
        {
            i += 2;
        }
        matches!(self.token_at(i), Token::Colon)
    }

    /// Advances `i` past modifiers and annotations. Fails only on malformed
    /// annotation argument lists that never close.
    fn scan_modifiers(&self, i: &mut usize) -> bool {
        loop {
            let token = self.token_at(*i);
            if basic_modifier_of(token).is_some() {
                *i += 1;
            } else if matches!(token, Token::At)
                && matches!(self.token_at(*i + 1), Token::Identifier)
            {
                *i += 2;
                while matches!(self.token_at(*i), Token::Dot)
                    && matches!(self.token_at(*i + 1), Token::Identifier)
                {
                    *i += 2;
                }
                if matches!(self.token_at(*i), Token::LeftParen)
                    && !self.scan_balanced_parens(i)
                {
                    return false;
                }
            } else {
                return true;
            }
        }
    }

    fn scan_balanced_parens(&self, i: &mut usize) -> bool {
        let mut depth = 0usize;
        loop {
            match self.token_at(*i) {
                Token::LeftParen => depth += 1,
                Token::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        *i += 1;
                        return true;
                    }
                }
                Token::Eof => return false,
                _ => {}
            }
            *i += 1;
        }
    }

    /// Advances `i` past something shaped like a type. Does not consume.
    fn scan_type(&self, i: &mut usize) -> bool {
        if primitive_of(self.token_at(*i)).is_some() {
            *i += 1;
        } else if matches!(self.token_at(*i), Token::Identifier) {
            *i += 1;
            loop {
                match self.token_at(*i) {
                    Token::Less => {
                        if !self.scan_type_arguments(i) {
                            return false;
                        }
                    }
                    Token::Dot if matches!(self.token_at(*i + 1), Token::Identifier) => {
                        *i += 2;
                    }
                    _ => break,
                }
            }
        } else {
            return false;
        }
        while matches!(self.token_at(*i), Token::LeftBracket)
            && matches!(self.token_at(*i + 1), Token::RightBracket)
        {
            *i += 2;
        }
        true
    }

    /// Scans a balanced `<...>` containing only tokens that can appear in
    /// type arguments. Compound `>>` / `>>>` close two and three lists, so
    /// depth is counted by weight.
    fn scan_type_arguments(&self, i: &mut usize) -> bool {
        let mut depth: i32 = 0;
        loop {
            match self.token_at(*i) {
                Token::Less => depth += 1,
                Token::Greater => depth -= 1,
                Token::RightShift => depth -= 2,
                Token::UnsignedRightShift => depth -= 3,
                Token::Identifier
                | Token::Dot
                | Token::Comma
                | Token::Question
                | Token::Extends
                | Token::Super
                | Token::LeftBracket
                | Token::RightBracket => {}
                token if primitive_of(token).is_some() => {}
                _ => return false,
            }
            *i += 1;
            if depth <= 0 {
                return depth == 0;
            }
        }
    }

    // -- expressions --------------------------------------------------------

    fn parse_expr_list(&mut self) -> Result<Vec<Expression>> {
        let mut expressions = vec![self.parse_expr()?];
        while self.match_token(&Token::Comma) {
            expressions.push(self.parse_expr()?);
        }
        Ok(expressions)
    }

    /// Full expression, assignment level. Right-associative.
    fn parse_expr(&mut self) -> Result<Expression> {
        let target = self.parse_conditional()?;
        if let Some(operator) = assignment_operator_of(self.kind()) {
            self.advance();
            let value = self.parse_expr()?;
            return Ok(Expression::Assignment(Assignment {
                operator,
                target: Box::new(target),
                value: Box::new(value),
            }));
        }
        Ok(target)
    }

    fn parse_conditional(&mut self) -> Result<Expression> {
        let predicate = self.parse_conditional_or()?;
        if self.match_token(&Token::Question) {
            let if_true = self.parse_expr()?;
            self.consume(Token::Colon, "':' in conditional expression")?;
            let if_false = self.parse_conditional()?;
            return Ok(Expression::Conditional(Conditional {
                predicate: Box::new(predicate),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
            }));
        }
        Ok(predicate)
    }

    fn parse_conditional_or(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_conditional_and()?;
        while self.match_token(&Token::PipePipe) {
            let rhs = self.parse_conditional_and()?;
            lhs = binary(BinaryOperator::ConditionalOr, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_conditional_and(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_inclusive_or()?;
        while self.match_token(&Token::AmpAmp) {
            let rhs = self.parse_inclusive_or()?;
            lhs = binary(BinaryOperator::ConditionalAnd, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_inclusive_or(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_exclusive_or()?;
        while self.match_token(&Token::Pipe) {
            let rhs = self.parse_exclusive_or()?;
            lhs = binary(BinaryOperator::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_exclusive_or(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_and()?;
        while self.match_token(&Token::Caret) {
            let rhs = self.parse_and()?;
            lhs = binary(BinaryOperator::Xor, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_equality()?;
        while self.match_token(&Token::Ampersand) {
            let rhs = self.parse_equality()?;
            lhs = binary(BinaryOperator::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_equality(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_relational()?;
        loop {
            let operator = match self.kind() {
                Token::Equal => BinaryOperator::Equal,
                Token::NotEqual => BinaryOperator::NotEqual,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_relational()?;
            lhs = binary(operator, lhs, rhs);
        }
    }

    fn parse_relational(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_shift()?;
        loop {
            if self.match_token(&Token::InstanceOf) {
                let target_type = self.parse_type()?;
                lhs = Expression::InstanceOf(InstanceOf {
                    expression: Box::new(lhs),
                    target_type,
                });
                continue;
            }
            let operator = match self.kind() {
                Token::Less => BinaryOperator::Less,
                Token::LessEqual => BinaryOperator::LessEqual,
                Token::Greater => BinaryOperator::Greater,
                Token::GreaterEqual => BinaryOperator::GreaterEqual,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_shift()?;
            lhs = binary(operator, lhs, rhs);
        }
    }

    fn parse_shift(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_additive()?;
        loop {
            let operator = match self.kind() {
                Token::LeftShift => BinaryOperator::LeftShift,
                Token::RightShift => BinaryOperator::RightShift,
                Token::UnsignedRightShift => BinaryOperator::UnsignedRightShift,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = binary(operator, lhs, rhs);
        }
    }

    fn parse_additive(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let operator = match self.kind() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = binary(operator, lhs, rhs);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_unary()?;
        loop {
            let operator = match self.kind() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                Token::Percent => BinaryOperator::Remainder,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = binary(operator, lhs, rhs);
        }
    }

    fn parse_unary(&mut self) -> Result<Expression> {
        let operator = match self.kind() {
            Token::Plus => Some(UnaryOperator::Plus),
            Token::Minus => Some(UnaryOperator::Minus),
            Token::Increment => Some(UnaryOperator::PreIncrement),
            Token::Decrement => Some(UnaryOperator::PreDecrement),
            Token::Bang => Some(UnaryOperator::Not),
            Token::Tilde => Some(UnaryOperator::BitNot),
            _ => None,
        };
        if let Some(operator) = operator {
            self.advance();
            let expression = self.parse_unary()?;
            return Ok(Expression::Unary(UnaryExpression {
                operator,
                expression: Box::new(expression),
            }));
        }
        if self.check(&Token::LeftParen) && self.lookahead_is_cast() {
            self.advance();
            let target_type = self.parse_type()?;
            self.consume(Token::RightParen, "')' after cast type")?;
            let expression = self.parse_unary()?;
            return Ok(Expression::Cast(Cast {
                target_type,
                expression: Box::new(expression),
            }));
        }
        self.parse_postfix()
    }

    fn lookahead_is_cast(&self) -> bool {
        let mut i = self.current + 1;
        if primitive_of(self.token_at(i)).is_some() {
            i += 1;
            while matches!(self.token_at(i), Token::LeftBracket)
                && matches!(self.token_at(i + 1), Token::RightBracket)
            {
                i += 2;
            }
            return matches!(self.token_at(i), Token::RightParen)
                && starts_unary(self.token_at(i + 1));
        }
        if matches!(self.token_at(i), Token::Identifier) {
            if !self.scan_type(&mut i) {
                return false;
            }
            return matches!(self.token_at(i), Token::RightParen)
                && starts_unary_not_plus_minus(self.token_at(i + 1));
        }
        false
    }

    fn parse_postfix(&mut self) -> Result<Expression> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.kind() {
                Token::Dot => {
                    expr = self.parse_selector(expr)?;
                }
                Token::LeftBracket => {
                    if matches!(self.token_at(self.current + 1), Token::RightBracket) {
                        // `Name[].class`
                        let dimensions = self.parse_bracket_pairs();
                        self.consume(Token::Dot, "'.' after array type")?;
                        self.consume(Token::Class, "'class'")?;
                        expr = self.name_to_class_literal(expr, dimensions)?;
                    } else {
                        self.advance();
                        let index = self.parse_expr()?;
                        self.consume(Token::RightBracket, "']' after array index")?;
                        expr = Expression::ArrayAccess(ArrayAccess {
                            target: Box::new(expr),
                            index: Box::new(index),
                        });
                    }
                }
                Token::Increment => {
                    self.advance();
                    expr = Expression::Unary(UnaryExpression {
                        operator: UnaryOperator::PostIncrement,
                        expression: Box::new(expr),
                    });
                }
                Token::Decrement => {
                    self.advance();
                    expr = Expression::Unary(UnaryExpression {
                        operator: UnaryOperator::PostDecrement,
                        expression: Box::new(expr),
                    });
                }
                Token::LeftParen if matches!(expr, Expression::Name(_)) => {
                    // Call on a plain name: the last segment is the method,
                    // everything before it is the target.
                    let name = match expr {
                        Expression::Name(name) => name,
                        _ => unreachable!(),
                    };
                    let arguments = self.parse_arguments()?;
                    expr = match name.split_last() {
                        None => Expression::MethodInvocation(MethodInvocation {
                            name: name.value,
                            target: None,
                            type_arguments: Vec::new(),
                            arguments,
                        }),
                        Some((prefix, method)) => Expression::MethodInvocation(MethodInvocation {
                            name: method.to_string(),
                            target: Some(Box::new(Expression::Name(prefix))),
                            type_arguments: Vec::new(),
                            arguments,
                        }),
                    };
                }
                _ => return Ok(expr),
            }
        }
    }

    /// One `.`-selector after a postfix expression.
    fn parse_selector(&mut self, expr: Expression) -> Result<Expression> {
        match self.token_at(self.current + 1) {
            Token::Identifier => {
                if matches!(self.token_at(self.current + 2), Token::LeftParen) {
                    self.advance();
                    let name = self.consume_identifier("method name")?;
                    let arguments = self.parse_arguments()?;
                    return Ok(Expression::MethodInvocation(MethodInvocation {
                        name,
                        target: Some(Box::new(expr)),
                        type_arguments: Vec::new(),
                        arguments,
                    }));
                }
                self.advance();
                let segment = self.consume_identifier("member name")?;
                // `a.b.c` stays one qualified name until context says otherwise
                match expr {
                    Expression::Name(mut name) => {
                        name.append(&segment);
                        Ok(Expression::Name(name))
                    }
                    other => Ok(Expression::FieldAccess(FieldAccess {
                        name: segment,
                        target: Box::new(other),
                    })),
                }
            }
            Token::This => {
                self.advance();
                self.advance();
                match expr {
                    Expression::Name(mut name) => {
                        name.append("this");
                        Ok(Expression::Name(name))
                    }
                    _ => Err(self.invalid("'this' must be qualified by a name")),
                }
            }
            Token::Class => {
                self.advance();
                self.advance();
                self.name_to_class_literal(expr, 0)
            }
            Token::New => {
                self.advance();
                self.parse_instance_creation(Some(expr))
            }
            Token::Less => {
                // explicit type arguments: `target.<T>method(...)`
                self.advance();
                let type_arguments = match self.parse_type_arguments()? {
                    TypeArguments::List(arguments) => arguments,
                    _ => return Err(self.invalid("expected method type arguments")),
                };
                let name = self.consume_identifier("method name")?;
                let arguments = self.parse_arguments()?;
                Ok(Expression::MethodInvocation(MethodInvocation {
                    name,
                    target: Some(Box::new(expr)),
                    type_arguments,
                    arguments,
                }))
            }
            _ => {
                self.advance();
                Err(self.unexpected("member name after '.'"))
            }
        }
    }

    fn name_to_class_literal(&self, expr: Expression, dimensions: usize) -> Result<Expression> {
        match expr {
            Expression::Name(name) => Ok(Expression::ClassLiteral(ClassLiteral {
                literal_type: Type::named(name.value).with_dimensions(dimensions),
            })),
            _ => Err(self.invalid("'.class' must be qualified by a type name")),
        }
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        if self.kind().is_literal() {
            let lexeme = self.advance().lexeme.clone();
            return Ok(Expression::Literal(Literal::new(lexeme)));
        }
        if let Some(primitive) = primitive_of(self.kind()) {
            // `int.class`, `int[].class`
            self.advance();
            let dimensions = self.parse_bracket_pairs();
            self.consume(Token::Dot, "'.' after primitive type")?;
            self.consume(Token::Class, "'class'")?;
            return Ok(Expression::ClassLiteral(ClassLiteral {
                literal_type: Type::primitive(primitive).with_dimensions(dimensions),
            }));
        }
        match self.kind() {
            Token::Identifier => {
                let lexeme = self.advance().lexeme.clone();
                Ok(Expression::Name(Name::new(lexeme)))
            }
            Token::This => {
                self.advance();
                Ok(Expression::Name(Name::new("this")))
            }
            Token::Super => {
                self.advance();
                Ok(Expression::Name(Name::new("super")))
            }
            Token::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.consume(Token::RightParen, "')' after expression")?;
                Ok(Expression::Bracketed(Box::new(inner)))
            }
            Token::New => self.parse_instance_creation(None),
            Token::Void => {
                self.advance();
                self.consume(Token::Dot, "'.' after 'void'")?;
                self.consume(Token::Class, "'class'")?;
                Ok(Expression::ClassLiteral(ClassLiteral {
                    literal_type: Type::primitive(PrimitiveType::Void),
                }))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_instance_creation(&mut self, enclosed: Option<Expression>) -> Result<Expression> {
        self.consume(Token::New, "'new'")?;
        let type_arguments = if self.check(&Token::Less) {
            match self.parse_type_arguments()? {
                TypeArguments::List(arguments) => arguments,
                _ => return Err(self.invalid("expected constructor type arguments")),
            }
        } else {
            Vec::new()
        };

        if let Some(primitive) = primitive_of(self.kind()) {
            if enclosed.is_some() {
                return Err(self.invalid("array creation cannot be qualified"));
            }
            self.advance();
            return self.parse_array_creation_rest(Type::primitive(primitive));
        }

        let created_type = self.parse_class_type()?;
        match self.kind() {
            Token::LeftBracket => {
                if enclosed.is_some() {
                    return Err(self.invalid("array creation cannot be qualified"));
                }
                self.parse_array_creation_rest(created_type)
            }
            Token::LeftParen => {
                let arguments = self.parse_arguments()?;
                let body = if self.check(&Token::LeftBrace) {
                    Some(self.parse_class_body()?)
                } else {
                    None
                };
                Ok(Expression::InstanceCreation(InstanceCreation {
                    instance_type: created_type,
                    type_arguments,
                    arguments,
                    body,
                    enclosed_in: enclosed.map(Box::new),
                }))
            }
            _ => Err(self.unexpected("'(' or '[' after created type")),
        }
    }

    fn parse_array_creation_rest(&mut self, element_type: Type) -> Result<Expression> {
        let mut dimensions = Vec::new();
        while self.match_token(&Token::LeftBracket) {
            if self.match_token(&Token::RightBracket) {
                dimensions.push(None);
            } else {
                let size = self.parse_expr()?;
                self.consume(Token::RightBracket, "']' after array dimension")?;
                dimensions.push(Some(size));
            }
        }
        let initializer = if self.check(&Token::LeftBrace) {
            if dimensions.iter().any(Option::is_some) {
                return Err(self.invalid("array initializer not allowed with sized dimensions"));
            }
            Some(self.parse_array_initializer()?)
        } else {
            if dimensions.first().map_or(true, Option::is_none) {
                return Err(self.invalid("array creation needs a size or an initializer"));
            }
            None
        };
        Ok(Expression::ArrayCreation(ArrayCreation {
            element_type,
            dimensions,
            initializer,
        }))
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expression>> {
        self.consume(Token::LeftParen, "'('")?;
        let mut arguments = Vec::new();
        if !self.check(&Token::RightParen) {
            arguments = self.parse_expr_list()?;
        }
        self.consume(Token::RightParen, "')' after arguments")?;
        Ok(arguments)
    }
}

fn binary(operator: BinaryOperator, lhs: Expression, rhs: Expression) -> Expression {
    Expression::Binary(BinaryExpression {
        operator,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

fn basic_modifier_of(token: &Token) -> Option<BasicModifier> {
    Some(match token {
        Token::Public => BasicModifier::Public,
        Token::Protected => BasicModifier::Protected,
        Token::Private => BasicModifier::Private,
        Token::Static => BasicModifier::Static,
        Token::Abstract => BasicModifier::Abstract,
        Token::Final => BasicModifier::Final,
        Token::Native => BasicModifier::Native,
        Token::Synchronized => BasicModifier::Synchronized,
        Token::Transient => BasicModifier::Transient,
        Token::Volatile => BasicModifier::Volatile,
        Token::Strictfp => BasicModifier::Strictfp,
        _ => return None,
    })
}

fn primitive_of(token: &Token) -> Option<PrimitiveType> {
    Some(match token {
        Token::Boolean => PrimitiveType::Boolean,
        Token::Byte => PrimitiveType::Byte,
        Token::Short => PrimitiveType::Short,
        Token::Int => PrimitiveType::Int,
        Token::Long => PrimitiveType::Long,
        Token::Char => PrimitiveType::Char,
        Token::Float => PrimitiveType::Float,
        Token::Double => PrimitiveType::Double,
        _ => return None,
    })
}

fn assignment_operator_of(token: &Token) -> Option<AssignmentOperator> {
    Some(match token {
        Token::Assign => AssignmentOperator::Assign,
        Token::PlusAssign => AssignmentOperator::Add,
        Token::MinusAssign => AssignmentOperator::Subtract,
        Token::StarAssign => AssignmentOperator::Multiply,
        Token::SlashAssign => AssignmentOperator::Divide,
        Token::PercentAssign => AssignmentOperator::Remainder,
        Token::AmpAssign => AssignmentOperator::And,
        Token::PipeAssign => AssignmentOperator::Or,
        Token::CaretAssign => AssignmentOperator::Xor,
        Token::LeftShiftAssign => AssignmentOperator::LeftShift,
        Token::RightShiftAssign => AssignmentOperator::RightShift,
        Token::UnsignedRightShiftAssign => AssignmentOperator::UnsignedRightShift,
        _ => return None,
    })
}

fn starts_unary(token: &Token) -> bool {
    starts_unary_not_plus_minus(token)
        || matches!(
            token,
            Token::Plus | Token::Minus | Token::Increment | Token::Decrement
        )
}

fn starts_unary_not_plus_minus(token: &Token) -> bool {
    token.is_literal()
        || matches!(
            token,
            Token::Identifier
                | Token::This
                | Token::Super
                | Token::New
                | Token::LeftParen
                | Token::Bang
                | Token::Tilde
                | Token::Void
        )
        || matches!(
            token,
            Token::Boolean
                | Token::Byte
                | Token::Short
                | Token::Int
                | Token::Long
                | Token::Char
                | Token::Float
                | Token::Double
        )
}

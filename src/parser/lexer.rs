use logos::Logos;

use crate::parser::error::Diagnostic;
use crate::parser::span::Location;

/// Token kinds recognised by the lexer.
///
/// Literal tokens carry no payload; the surrounding [`LexicalToken`] keeps
/// the raw lexeme so literal text survives a parse/serialize round trip
/// exactly as written (`0x1F` stays hexadecimal, `1.0f` keeps its suffix).
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Keywords
    #[token("abstract")]
    Abstract,
    #[token("assert")]
    Assert,
    #[token("boolean")]
    Boolean,
    #[token("break")]
    Break,
    #[token("byte")]
    Byte,
    #[token("case")]
    Case,
    #[token("catch")]
    Catch,
    #[token("char")]
    Char,
    #[token("class")]
    Class,
    #[token("continue")]
    Continue,
    #[token("default")]
    Default,
    #[token("do")]
    Do,
    #[token("double")]
    Double,
    #[token("else")]
    Else,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("final")]
    Final,
    #[token("finally")]
    Finally,
    #[token("float")]
    Float,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("implements")]
    Implements,
    #[token("import")]
    Import,
    #[token("instanceof")]
    InstanceOf,
    #[token("int")]
    Int,
    #[token("interface")]
    Interface,
    #[token("long")]
    Long,
    #[token("native")]
    Native,
    #[token("new")]
    New,
    #[token("package")]
    Package,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("public")]
    Public,
    #[token("return")]
    Return,
    #[token("short")]
    Short,
    #[token("static")]
    Static,
    #[token("strictfp")]
    Strictfp,
    #[token("super")]
    Super,
    #[token("switch")]
    Switch,
    #[token("synchronized")]
    Synchronized,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("throws")]
    Throws,
    #[token("transient")]
    Transient,
    #[token("try")]
    Try,
    #[token("void")]
    Void,
    #[token("volatile")]
    Volatile,
    #[token("while")]
    While,

    // Literals
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    HexLiteral,
    #[regex(r"0[bB][01_]+[lL]?")]
    BinaryLiteral,
    #[regex(r"[0-9][0-9_]*[lL]?")]
    IntegerLiteral,
    #[regex(r"([0-9][0-9_]*\.[0-9_]*|\.[0-9][0-9_]*)([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    #[regex(r"0[xX]([0-9a-fA-F_]+\.?[0-9a-fA-F_]*|\.[0-9a-fA-F_]+)[pP][+-]?[0-9]+[fFdD]?")]
    FloatLiteral,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    CharLiteral,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,

    // Identifiers
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,

    // Separators
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("@")]
    At,

    // Operators
    #[token("=")]
    Assign,
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&")]
    Ampersand,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("<<")]
    LeftShift,
    #[token(">>")]
    RightShift,
    #[token(">>>")]
    UnsignedRightShift,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,
    #[token("%=")]
    PercentAssign,
    #[token("&=")]
    AmpAssign,
    #[token("|=")]
    PipeAssign,
    #[token("^=")]
    CaretAssign,
    #[token("<<=")]
    LeftShiftAssign,
    #[token(">>=")]
    RightShiftAssign,
    #[token(">>>=")]
    UnsignedRightShiftAssign,

    // Trivia, filtered out before parsing
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,
    #[token("\u{FEFF}")]
    Bom,

    /// End of input marker appended by the lexer
    Eof,
}

impl Token {
    /// Basic (non-annotation) modifier keywords.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Token::Public
                | Token::Protected
                | Token::Private
                | Token::Static
                | Token::Abstract
                | Token::Final
                | Token::Native
                | Token::Synchronized
                | Token::Transient
                | Token::Volatile
                | Token::Strictfp
        )
    }

    pub fn is_primitive_type(&self) -> bool {
        matches!(
            self,
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

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::True
                | Token::False
                | Token::Null
                | Token::HexLiteral
                | Token::BinaryLiteral
                | Token::IntegerLiteral
                | Token::FloatLiteral
                | Token::CharLiteral
                | Token::StringLiteral
        )
    }

    pub fn is_assignment_operator(&self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::PlusAssign
                | Token::MinusAssign
                | Token::StarAssign
                | Token::SlashAssign
                | Token::PercentAssign
                | Token::AmpAssign
                | Token::PipeAssign
                | Token::CaretAssign
                | Token::LeftShiftAssign
                | Token::RightShiftAssign
                | Token::UnsignedRightShiftAssign
        )
    }

    fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::LineComment | Token::BlockComment | Token::Bom
        )
    }
}

/// A token together with its raw text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalToken {
    pub token: Token,
    pub lexeme: String,
    pub location: Location,
}

impl LexicalToken {
    pub fn new(token: Token, lexeme: String, location: Location) -> Self {
        Self { token, lexeme, location }
    }
}

/// Streaming lexer over a source string, tracking line/column positions.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
    line: usize,
    column: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: Token::lexer(source),
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Lexes the whole input, dropping whitespace and comments.
    ///
    /// Unrecognised characters are skipped and reported as diagnostics.
    /// The returned stream always ends with a single [`Token::Eof`].
    pub fn tokenize(mut self) -> (Vec<LexicalToken>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        while let Some(result) = self.inner.next() {
            let lexeme = self.inner.slice();
            let location = Location::new(self.line, self.column, self.inner.span().start);
            match result {
                Ok(token) => {
                    let keep = !token.is_trivia();
                    let lexeme = lexeme.to_string();
                    self.update_position(&lexeme);
                    if keep {
                        tokens.push(LexicalToken::new(token, lexeme, location));
                    }
                }
                Err(()) => {
                    for ch in lexeme.chars() {
                        self.diagnostics.push(Diagnostic {
                            character: ch,
                            location: Location::new(self.line, self.column, location.offset),
                        });
                        self.bump(ch);
                    }
                }
            }
        }
        let end = Location::new(self.line, self.column, self.inner.span().end);
        tokens.push(LexicalToken::new(Token::Eof, String::new(), end));
        (tokens, self.diagnostics)
    }

    fn update_position(&mut self, lexeme: &str) {
        for ch in lexeme.chars() {
            self.bump(ch);
        }
    }

    fn bump(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

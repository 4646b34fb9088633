use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Span;

lazy_static! {
    pub static ref DATA_TYPES: HashSet<&'static str> = [
        "int", "float", "double", "char", "void", "bool", "long", "short", "unsigned", "signed",
        "string",
    ]
    .into_iter()
    .collect();

    pub static ref KEYWORDS: HashSet<&'static str> = [
        "if", "else", "for", "while", "switch", "case", "default", "return", "break", "continue",
        "do", "goto", "sizeof", "typedef", "static", "const", "class", "struct", "union", "enum",
        "namespace", "using", "try", "catch", "throw", "new", "delete", "main", "cout", "cin",
    ]
    .into_iter()
    .collect();

    pub static ref MULTI_CHAR_OPERATORS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("++", TokenKind::Increment);
        map.insert("--", TokenKind::Decrement);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("<=", TokenKind::LessEqual);
        map.insert(">=", TokenKind::GreaterEqual);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("<<", TokenKind::ShiftLeft);
        map.insert(">>", TokenKind::ShiftRight);
        map
    };

    pub static ref SINGLE_CHAR_TOKENS: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert('=', TokenKind::Assign);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::Greater);
        map.insert('!', TokenKind::Not);
        map.insert(';', TokenKind::Semicolon);
        map.insert(',', TokenKind::Comma);
        map.insert(':', TokenKind::Colon);
        map.insert('.', TokenKind::Dot);
        map.insert('?', TokenKind::Question);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map
    };
}

/// Category assigned to a lexeme. The discriminants are the stable numeric
/// codes printed in the classification report, 1 through 37.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    DataType = 1,
    Keyword = 2,

    Increment = 3,    // ++
    Decrement = 4,    // --
    Equal = 5,        // ==
    NotEqual = 6,     // !=
    LessEqual = 7,    // <=
    GreaterEqual = 8, // >=
    Less = 9,
    Greater = 10,
    Assign = 11, // =
    Plus = 12,
    Minus = 13,
    Star = 14,
    Slash = 15,
    And = 16, // &&
    Or = 17,  // ||
    Not = 18, // !
    ShiftLeft = 19,
    ShiftRight = 20,

    OpenParen = 21,
    CloseParen = 22,
    OpenCurly = 23,
    CloseCurly = 24,
    OpenBracket = 25,
    CloseBracket = 26,
    Semicolon = 27,
    Comma = 28,
    Colon = 29,
    Dot = 30,
    Question = 31,

    StringLiteral = 32,
    CharLiteral = 33,
    FloatLiteral = 34,
    IntegerLiteral = 35,
    Identifier = 36,

    Unknown = 37,
}

impl TokenKind {
    pub const ALL: [TokenKind; 37] = [
        TokenKind::DataType,
        TokenKind::Keyword,
        TokenKind::Increment,
        TokenKind::Decrement,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::ShiftLeft,
        TokenKind::ShiftRight,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Question,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::FloatLiteral,
        TokenKind::IntegerLiteral,
        TokenKind::Identifier,
        TokenKind::Unknown,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<TokenKind> {
        match code {
            1..=37 => Some(TokenKind::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Label used by the named report format.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::DataType => "Data_Type",
            TokenKind::Keyword => "Reserved_Word",
            TokenKind::Increment => "Inc_Op",
            TokenKind::Decrement => "Dec_Op",
            TokenKind::Equal => "Equal_Op",
            TokenKind::NotEqual => "Inequal_Op",
            TokenKind::LessEqual => "LE_Comparison",
            TokenKind::GreaterEqual => "GE_Comparison",
            TokenKind::Less => "Less_Op",
            TokenKind::Greater => "Greater_Op",
            TokenKind::Assign => "Assign_Op",
            TokenKind::Plus => "Plus_Op",
            TokenKind::Minus => "Sub_Op",
            TokenKind::Star => "Mult_Op",
            TokenKind::Slash => "Div_Op",
            TokenKind::And => "AND_Gate",
            TokenKind::Or => "OR_Gate",
            TokenKind::Not => "NOT_Gate",
            TokenKind::ShiftLeft => "LS_Op",
            TokenKind::ShiftRight => "RS_Op",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::Dot => "Dot",
            TokenKind::Question => "Question_Mark",
            TokenKind::StringLiteral => "String_Literal",
            TokenKind::CharLiteral => "Char_Literal",
            TokenKind::FloatLiteral => "Float_Literal",
            TokenKind::IntegerLiteral => "Integer_Literal",
            TokenKind::Identifier => "Identifier",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Raw scanner output: the exact source text of one lexeme and where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::StringLiteral,
            TokenKind::CharLiteral,
            TokenKind::FloatLiteral,
            TokenKind::IntegerLiteral,
        ])
    }
}

use tracing::{debug, trace};

use crate::{
    lexer::tokens::{
        Lexeme, Token, TokenKind, DATA_TYPES, KEYWORDS, MULTI_CHAR_OPERATORS, SINGLE_CHAR_TOKENS,
    },
    MK_TOKEN,
};

/// Returns the category of `lexeme`. Total: anything no rule accepts,
/// including the empty string, is `Unknown`.
///
/// Rules apply in order, first match wins:
///
/// 1. data type, then keyword vocabulary
/// 2. two-character operators, then single-character tokens
/// 3. `"..."` string literal, `'...'` character literal
/// 4. leading digit, or `.` followed by anything: float if a `.` appears, else integer
/// 5. leading letter or `_`: identifier
///
/// Literals and numbers are not validated, so `"abc` is `Unknown` and
/// `1.2.3` is a float.
pub fn classify(lexeme: &str) -> TokenKind {
    if DATA_TYPES.contains(lexeme) {
        return TokenKind::DataType;
    }
    if KEYWORDS.contains(lexeme) {
        return TokenKind::Keyword;
    }
    if let Some(kind) = MULTI_CHAR_OPERATORS.get(lexeme) {
        return *kind;
    }

    let Some(first) = lexeme.chars().next() else {
        return TokenKind::Unknown;
    };

    if lexeme.len() == first.len_utf8() {
        if let Some(kind) = SINGLE_CHAR_TOKENS.get(&first) {
            return *kind;
        }
    }

    match first {
        '"' if lexeme.len() >= 2 && lexeme.ends_with('"') => TokenKind::StringLiteral,
        '\'' if lexeme.len() >= 2 && lexeme.ends_with('\'') => TokenKind::CharLiteral,
        '0'..='9' => classify_number(lexeme),
        '.' if lexeme.len() > 1 => classify_number(lexeme),
        'a'..='z' | 'A'..='Z' | '_' => TokenKind::Identifier,
        _ => TokenKind::Unknown,
    }
}

fn classify_number(lexeme: &str) -> TokenKind {
    if lexeme.contains('.') {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntegerLiteral
    }
}

pub fn classify_lexeme(lexeme: Lexeme) -> Token {
    let kind = classify(&lexeme.value);
    trace!(lexeme = %lexeme.value, code = kind.code(), "classified");

    MK_TOKEN!(kind, lexeme.value, lexeme.span)
}

pub fn classify_all(lexemes: Vec<Lexeme>) -> Vec<Token> {
    let tokens: Vec<Token> = lexemes.into_iter().map(classify_lexeme).collect();
    debug!(tokens = tokens.len(), "classified lexemes");

    tokens
}

use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{classifier::classifier::classify_all, MK_LEXEME};

use super::tokens::{Lexeme, Token};

pub type RegexHandler = fn(&mut Scanner, &str);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried top to bottom; every pattern is anchored at the current offset.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"\A[ \t\n\r\x0B\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"\A(?:\+\+|--|==|!=|<=|>=|&&|\|\||<<|>>)").unwrap(), handler: emit_handler },
        RegexPattern { regex: Regex::new(r"\A[+\-*/=<>!;,:.?(){}\[\]]").unwrap(), handler: emit_handler },
        RegexPattern { regex: Regex::new(r#"\A"[^"]*"?"#).unwrap(), handler: emit_handler },
        RegexPattern { regex: Regex::new(r"\A'[^']*'?").unwrap(), handler: emit_handler },
        RegexPattern { regex: Regex::new(r"\A[A-Za-z0-9_.]+").unwrap(), handler: emit_handler },
    ];
}

pub struct Scanner<'a> {
    lexemes: Vec<Lexeme>,
    source: &'a str,
    pos: usize,
    file: Rc<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Scanner<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("stdin"))
        };

        Scanner {
            lexemes: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, lexeme: Lexeme) {
        self.lexemes.push(lexeme);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(scanner: &mut Scanner, matched: &str) {
    scanner.advance_n(matched.len());
}

fn emit_handler(scanner: &mut Scanner, matched: &str) {
    let start = scanner.pos;
    let end = start + matched.len();

    trace!(lexeme = matched, start, end, "lexeme");
    scanner.push(MK_LEXEME!(matched.to_string(), start, end, Rc::clone(&scanner.file)));
    scanner.advance_n(matched.len());
}

/// Splits `source` into lexemes, eliding whitespace.
///
/// Never fails: a character that no pattern accepts becomes a lexeme of its
/// own, so every non-whitespace character ends up in exactly one lexeme.
pub fn scan(source: &str, file: Option<String>) -> Vec<Lexeme> {
    let mut scanner = Scanner::new(source, file);

    while !scanner.at_eof() {
        let remaining = scanner.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

        match matched {
            Some((handler, text)) => handler(&mut scanner, text),
            None => {
                let width = scanner.at().map_or(remaining.len(), char::len_utf8);
                debug!(offset = scanner.pos, text = &remaining[..width], "unrecognised character");
                emit_handler(&mut scanner, &remaining[..width]);
            }
        }
    }

    debug!(file = %scanner.file, lexemes = scanner.lexemes.len(), bytes = source.len(), "scanned source");
    scanner.lexemes
}

/// Scans `source` and classifies every lexeme.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    classify_all(scan(source, file))
}

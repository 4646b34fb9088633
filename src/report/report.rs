use std::{collections::BTreeMap, io::Write};

use clap::ValueEnum;

use crate::{
    errors::errors::{write_failed, Error},
    get_line_at_position,
    lexer::tokens::{Token, TokenKind},
};

const RULE: &str = "----------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Banner plus `Next token is: <code> Next lexeme is <lexeme>` lines
    #[default]
    Reference,
    /// Aligned code, category name and lexeme columns
    Named,
    /// Bare category codes, one per line
    Codes,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Prefix each token with `line:col` (named format only).
    pub positions: bool,
    pub summary: bool,
}

pub fn render<W: Write>(
    tokens: &[Token],
    source: &str,
    options: ReportOptions,
    out: &mut W,
) -> Result<(), Error> {
    let written = match options.format {
        OutputFormat::Reference => render_reference(tokens, out),
        OutputFormat::Named => render_named(tokens, source, options.positions, out),
        OutputFormat::Codes => render_codes(tokens, out),
    };
    written.map_err(|e| write_failed(&e))?;

    if options.summary {
        render_summary(&summarize(tokens), out).map_err(|e| write_failed(&e))?;
    }

    out.flush().map_err(|e| write_failed(&e))
}

pub fn render_reference<W: Write>(tokens: &[Token], out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Lexeme Classification:")?;
    writeln!(out, "{}", RULE)?;
    for token in tokens {
        writeln!(out, "Next token is: {} Next lexeme is {}", token.kind.code(), token.value)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "End of tokenization")
}

fn render_named<W: Write>(
    tokens: &[Token],
    source: &str,
    positions: bool,
    out: &mut W,
) -> std::io::Result<()> {
    for token in tokens {
        if positions {
            let (line, col) = line_col(source, token.span.start.0);
            write!(out, "{:>4}:{:<4} ", line, col)?;
        }
        writeln!(out, "{:>2} {:<16} {}", token.kind.code(), token.kind.name(), token.value)?;
    }

    Ok(())
}

fn render_codes<W: Write>(tokens: &[Token], out: &mut W) -> std::io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token.kind.code())?;
    }

    Ok(())
}

/// 1-based line and column of a byte offset.
pub fn line_col(source: &str, offset: u32) -> (usize, usize) {
    match get_line_at_position(source, offset) {
        Some((line, text, line_pos)) => (line, text[..line_pos].chars().count() + 1),
        None => (1, 1),
    }
}

/// Number of tokens in each category that occurs, in category order.
pub fn summarize(tokens: &[Token]) -> Vec<(TokenKind, usize)> {
    let mut counts: BTreeMap<TokenKind, usize> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.kind).or_default() += 1;
    }

    counts.into_iter().collect()
}

fn render_summary<W: Write>(summary: &[(TokenKind, usize)], out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    for (kind, count) in summary {
        writeln!(out, "{:>2} {:<16} {}", kind.code(), kind.name(), count)?;
    }

    Ok(())
}

//! Utility macros for the lexer.
//!
//! - `MK_LEXEME!` - Creates a Lexeme covering a byte range of the source
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the scanner and classifier.

/// Creates a Lexeme whose span runs from `$start` to `$end` in `$file`.
///
/// # Example
///
/// ```ignore
/// let lexeme = MK_LEXEME!(String::from("++"), 3, 5, Rc::clone(&file));
/// ```
#[macro_export]
macro_rules! MK_LEXEME {
    ($value:expr, $start:expr, $end:expr, $file:expr) => {{
        let file = $file;
        $crate::lexer::tokens::Lexeme {
            value: $value,
            span: $crate::Span {
                start: $crate::Position($start as u32, ::std::rc::Rc::clone(&file)),
                end: $crate::Position($end as u32, file),
            },
        }
    }};
}

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The lexeme text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

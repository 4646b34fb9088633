//! Lexical analysis module.
//!
//! Converts a source buffer into a stream of raw lexemes and, together with
//! the classifier, into categorised tokens. It handles:
//!
//! - Maximal-munch scanning of operators and punctuation
//! - Quoted string and character literals, kept verbatim
//! - Word and number runs (letters, digits, `_` and `.`)
//! - Byte offsets of every lexeme for reporting

pub mod scanner;
pub mod tokens;

//! Lexeme classification.
//!
//! Maps each raw lexeme to exactly one token category. Reserved vocabularies
//! and operator tables are consulted before the literal, number and
//! identifier rules, so `int` is a data type and never an identifier.

pub mod classifier;

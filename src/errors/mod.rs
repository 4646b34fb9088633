//! Error types for the input and output edges of the lexer.
//!
//! Scanning and classification never fail. Errors only come from reading
//! source text (files, stdin, encoding) and writing reports:
//!
//! - Error structures with source position information
//! - Error names and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;

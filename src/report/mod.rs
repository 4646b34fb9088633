//! Token stream rendering.

pub mod report;

#[cfg(test)]
mod tests;

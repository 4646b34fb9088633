//! Source text acquisition.
//!
//! Reads whole files, or assembles a buffer from terminal lines terminated by
//! an `EOF` marker line.

pub mod input;

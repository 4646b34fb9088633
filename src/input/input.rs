use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
    rc::Rc,
};

use tracing::{debug, warn};

use crate::{
    errors::errors::{write_failed, Error, ErrorImpl},
    Position,
};

/// Line that ends interactive input.
pub const END_MARKER: &str = "EOF";

pub const BANNER: &str = "Enter C++ code (type EOF to end input):";

pub const PROMPT: &str = "--> ";

/// Reads lines from `reader` until a line equal to [`END_MARKER`] and joins
/// them, each followed by a single space.
///
/// When `prompt` is set it is written to `out` before every line is read.
/// A stream that ends without the marker yields what was read so far.
pub fn assemble_lines<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
    prompt: Option<&str>,
) -> Result<String, Error> {
    let mut code = String::new();
    let mut offset = 0usize;
    let mut line = Vec::new();

    loop {
        if let Some(prompt) = prompt {
            write!(out, "{}", prompt)
                .and_then(|_| out.flush())
                .map_err(|e| write_failed(&e))?;
        }

        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(|e| {
            Error::new(
                ErrorImpl::ReadFailed {
                    input: String::from("stdin"),
                    reason: e.to_string(),
                },
                Position::null(),
            )
        })?;

        if read == 0 {
            warn!(bytes = code.len(), "input ended without the {} marker", END_MARKER);
            break;
        }

        let text = std::str::from_utf8(&line).map_err(|e| {
            Error::new(
                ErrorImpl::InvalidEncoding {
                    input: String::from("stdin"),
                },
                Position((offset + e.valid_up_to()) as u32, Rc::new(String::from("stdin"))),
            )
        })?;
        offset += read;

        let text = text.trim_end_matches('\n').trim_end_matches('\r');
        if text == END_MARKER {
            break;
        }

        code.push_str(text);
        code.push(' ');
    }

    debug!(bytes = code.len(), "assembled input");
    Ok(code)
}

pub fn read_source_file(path: &Path) -> Result<String, Error> {
    let name = path.to_string_lossy().to_string();

    let bytes = fs::read(path).map_err(|e| {
        Error::new(
            ErrorImpl::ReadFailed {
                input: name.clone(),
                reason: e.to_string(),
            },
            Position::null(),
        )
    })?;

    let source = String::from_utf8(bytes).map_err(|e| {
        let valid_up_to = e.utf8_error().valid_up_to();
        Error::new(
            ErrorImpl::InvalidEncoding {
                input: name.clone(),
            },
            Position(valid_up_to as u32, Rc::new(name.clone())),
        )
    })?;

    debug!(file = %name, bytes = source.len(), "read source file");
    Ok(source)
}

//! Enhanced prompt output

use super::PromptIoError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Write the result to its destination.
///
/// Without a destination the text goes to stdout followed by a newline.
/// With one, the file is created or overwritten with exactly `text`.
pub fn emit_output(text: &str, destination: Option<&Path>) -> Result<(), PromptIoError> {
    match destination {
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_output(&mut handle, text)
        }
        Some(path) => {
            debug!("Writing enhanced prompt to file: {}", path.display());
            fs::write(path, text).map_err(|e| PromptIoError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}

/// Write `text` plus a trailing newline to `writer` and flush it.
pub fn write_output<W: Write>(writer: &mut W, text: &str) -> Result<(), PromptIoError> {
    writeln!(writer, "{}", text).map_err(PromptIoError::Stdout)?;
    writer.flush().map_err(PromptIoError::Stdout)
}

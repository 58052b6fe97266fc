use std::io::Write;

use crate::config::Format;
use crate::dispatch::Reply;
use crate::Result;

/// Writes prompts and replies in the configured format.
///
/// JSON output carries replies only; prompts are suppressed so that
/// the output stays one JSON document per line.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: Format,
}

impl Renderer {
    /// Creates a renderer for `format`.
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Returns `true` if prompts and banners are written.
    pub fn is_interactive(&self) -> bool {
        self.format == Format::Text
    }

    /// Writes `prompt` without a trailing newline and flushes.
    pub fn prompt<W: Write>(&self, out: &mut W, prompt: &str) -> Result<()> {
        if self.is_interactive() {
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Writes a single reply.
    pub fn reply<W: Write>(&self, out: &mut W, reply: &Reply) -> Result<()> {
        match self.format {
            Format::Text => write_text(out, reply)?,
            Format::Json => {
                serde_json::to_writer(&mut *out, reply)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn write_text<W: Write>(out: &mut W, reply: &Reply) -> Result<()> {
    match reply {
        Reply::Results(None) => writeln!(out, "No results found")?,
        Reply::Results(Some(results)) => {
            for (n, result) in results.iter().enumerate() {
                writeln!(out, "{}) {}", n + 1, result)?;
            }
        }
        Reply::Success(message) | Reply::Failure(message) => writeln!(out, "{message}")?,
    }
    Ok(())
}

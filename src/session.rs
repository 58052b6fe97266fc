use std::io::{BufRead, Write};

use log::{debug, info};

use crate::command::Command;
use crate::config::Config;
use crate::dispatch::{self, Reply};
use crate::render::Renderer;
use crate::service::DictionaryService;
use crate::Result;

const CLEAR_PROMPT: &str =
    "Are you sure you want to clear all keys and their members? (Y to confirm, any key to abort) > ";

/// An interactive command session over a dictionary service.
///
/// Reads one command per line from `input` and writes replies to
/// `output` until `EXIT` or end of input.
pub struct Session<S, R, W> {
    service: S,
    input: R,
    output: W,
    config: Config,
    renderer: Renderer,
}

impl<S: DictionaryService, R: BufRead, W: Write> Session<S, R, W> {
    /// Creates a session over `service` reading from `input` and
    /// writing to `output`.
    pub fn new(service: S, input: R, output: W, config: Config) -> Self {
        let renderer = Renderer::new(config.format);
        Self {
            service,
            input,
            output,
            config,
            renderer,
        }
    }

    /// Runs the session to completion.
    pub fn run(&mut self) -> Result<()> {
        info!("Session starting");
        if self.config.banner && self.renderer.is_interactive() {
            self.write_banner()?;
        }

        let prompt = self.config.prompt.clone();
        while let Some(line) = self.read_line(&prompt)? {
            let reply = match line.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(Command::Clear) if self.asks_confirmation() => {
                    if self.confirm_clear()? {
                        dispatch::execute(&self.service, Command::Clear)
                    } else {
                        Reply::Success("Aborted, no keys were cleared".to_owned())
                    }
                }
                Ok(command) => dispatch::execute(&self.service, command),
                Err(e) => {
                    debug!("{}", e);
                    Reply::Failure(e.to_string())
                }
            };
            self.renderer.reply(&mut self.output, &reply)?;
        }

        info!("Session ending");
        Ok(())
    }

    /// Consumes the session and returns its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.renderer.prompt(&mut self.output, prompt)?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        // Invalid UTF-8 becomes U+FFFD and then fails to parse as usual.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// JSON output has no prompts, so a scripted client could not tell
    /// that its next line is taken as the answer.
    fn asks_confirmation(&self) -> bool {
        self.config.confirm_clear && self.renderer.is_interactive()
    }

    fn confirm_clear(&mut self) -> Result<bool> {
        let answer = self.read_line(CLEAR_PROMPT)?.unwrap_or_default();
        Ok(answer.trim().eq_ignore_ascii_case("Y"))
    }

    fn write_banner(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Multi-Value Dictionary {}",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter a command to get started, use EXIT to exit the application"
        )?;
        writeln!(
            self.output,
            "Commands: KEYS, MEMBERS, ADD, REMOVE, REMOVEALL, CLEAR, KEYEXISTS, MEMBEREXISTS, ALLMEMBERS, ITEMS"
        )?;
        Ok(())
    }
}

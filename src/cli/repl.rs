//! Interactive REPL for the Pokedex
//!
//! Reads command lines from the prompt, dispatches through the command
//! registry, and prints each command's output or error before reprompting.

use std::io::{self, BufRead, Write};

use crate::api::{PageSource, PokeApiClient};
use crate::cli::commands::{CommandOutcome, CommandRegistry, ReplContext};
use crate::core::{Config, PokedexError, Result, SessionState};

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl {
    registry: CommandRegistry,
    ctx: ReplContext,
}

impl Repl {
    /// Create a REPL backed by the live PokeAPI
    pub fn with_config(config: Config) -> Result<Self> {
        let client = PokeApiClient::from_config(&config)?;
        Ok(Self::with_source(Box::new(client), config.api.base_url))
    }

    /// Create a REPL around any page source (tests substitute stubs here)
    pub fn with_source(source: Box<dyn PageSource>, root_url: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            ctx: ReplContext::new(source, root_url),
        }
    }

    /// Current pagination cursors
    pub fn session(&self) -> &SessionState {
        &self.ctx.session
    }

    /// Run the REPL on stdin/stdout until `exit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout).await
    }

    /// Run the REPL over an arbitrary line reader and writer
    pub async fn run_with<R, W>(&mut self, input: &mut R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            write!(out, "Pokedex > ")?;
            out.flush()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                // EOF (Ctrl+D): leave cleanly
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    writeln!(out, "Error reading input: {}", e)?;
                    continue;
                }
            }

            if !self.dispatch_line(&line, out).await? {
                break;
            }
        }

        Ok(())
    }

    /// Tokenize one raw line, look up the command, and invoke it.
    ///
    /// Returns `false` when the loop should stop. Handler errors are
    /// rendered here and do not stop the loop.
    pub async fn dispatch_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let tokens = clean_input(line);
        let Some(name) = tokens.first() else {
            // blank line: reprompt without output
            return Ok(true);
        };

        let Some(command) = self.registry.lookup(name) else {
            writeln!(out, "{}", PokedexError::UnknownCommand(name.clone()))?;
            return Ok(true);
        };

        match command.invoke(&mut self.ctx).await {
            Ok(CommandOutcome::Handled(output)) => writeln!(out, "{}", output)?,
            Ok(CommandOutcome::Exit) => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(false);
            }
            Err(e) => writeln!(out, "{}", e)?,
        }

        Ok(true)
    }
}

/// Split a raw input line into lowercase, whitespace-trimmed tokens.
///
/// Only the first token names a command; the rest are reserved for future
/// argument passing.
pub fn clean_input(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

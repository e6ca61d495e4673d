//! CLI commands
//!
//! The command table and the handlers the REPL dispatches to. Descriptors
//! are immutable; the registry is built once at startup.

use std::collections::HashMap;

use futures::future::BoxFuture;

use crate::api::PageSource;
use crate::core::{Direction, Result, SessionState};

/// What a handler produced
#[derive(Debug)]
pub enum CommandOutcome {
    /// Command was handled, show output
    Handled(String),
    /// Leave the REPL
    Exit,
}

/// Shared state handed to every command handler
pub struct ReplContext {
    /// Cursor pair for the current browsing session
    pub session: SessionState,
    source: Box<dyn PageSource>,
    root_url: String,
}

impl ReplContext {
    /// Create a context around a page source and the catalog root URL
    pub fn new(source: Box<dyn PageSource>, root_url: impl Into<String>) -> Self {
        Self {
            session: SessionState::new(),
            source,
            root_url: root_url.into(),
        }
    }

    /// Turn one page in `direction`: pick the target URL, fetch, adopt the
    /// new cursors, and render the item names one per line.
    ///
    /// Backward from the first page is a message-only no-op. Cursors are
    /// updated only after the fetch fully succeeds, so errors leave the
    /// session untouched.
    pub async fn page_turn(&mut self, direction: Direction) -> Result<CommandOutcome> {
        let url = match self.session.target_url(direction, &self.root_url) {
            Some(url) => url,
            None => return Ok(CommandOutcome::Handled("you're on the first page".to_string())),
        };

        let page = self.source.fetch_page(&url).await?;

        let names = page
            .results
            .iter()
            .map(|area| area.name.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        self.session.apply(page.next, page.previous);
        Ok(CommandOutcome::Handled(names))
    }
}

type Handler = for<'a> fn(&'a mut ReplContext) -> BoxFuture<'a, Result<CommandOutcome>>;

/// An immutable (name, description, handler) descriptor
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    handler: Handler,
}

impl Command {
    /// Run this command against the shared context
    pub async fn invoke(&self, ctx: &mut ReplContext) -> Result<CommandOutcome> {
        (self.handler)(ctx).await
    }
}

/// The closed command set
const COMMANDS: &[Command] = &[
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        handler: cmd_exit,
    },
    Command {
        name: "help",
        description: "Displays a help message",
        handler: cmd_help,
    },
    Command {
        name: "map",
        description: "Displays the names of the next 20 location areas in the Pokemon world",
        handler: cmd_map,
    },
    Command {
        name: "mapb",
        description: "Displays the names of the previous 20 location areas in the Pokemon world",
        handler: cmd_mapb,
    },
];

/// Name-indexed view over the command table
pub struct CommandRegistry {
    commands: HashMap<&'static str, &'static Command>,
}

impl CommandRegistry {
    /// Build the registry over the static command table
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| (cmd.name, cmd)).collect(),
        }
    }

    /// Exact-name lookup; `None` for unregistered commands
    pub fn lookup(&self, name: &str) -> Option<&'static Command> {
        self.commands.get(name).copied()
    }

    /// All registered descriptors, in table order
    pub fn commands(&self) -> impl Iterator<Item = &'static Command> + '_ {
        COMMANDS.iter()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn cmd_exit(_ctx: &mut ReplContext) -> BoxFuture<'_, Result<CommandOutcome>> {
    Box::pin(async { Ok(CommandOutcome::Exit) })
}

fn cmd_help(_ctx: &mut ReplContext) -> BoxFuture<'_, Result<CommandOutcome>> {
    Box::pin(async { Ok(CommandOutcome::Handled(help_text())) })
}

fn cmd_map(ctx: &mut ReplContext) -> BoxFuture<'_, Result<CommandOutcome>> {
    Box::pin(ctx.page_turn(Direction::Forward))
}

fn cmd_mapb(ctx: &mut ReplContext) -> BoxFuture<'_, Result<CommandOutcome>> {
    Box::pin(ctx.page_turn(Direction::Backward))
}

/// Generate help text from the command table
pub fn help_text() -> String {
    let mut out = String::from("Welcome to the Pokedex!\nUsage:\n");
    for command in COMMANDS {
        out.push_str(&format!("\n{}: {}", command.name, command.description));
    }
    out
}

use core::str::FromStr;

use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(String),
    Add,
    Edit(String),
    Delete(String),
    Toggle(String),
    Summary,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an invoice id")]
    MissingId(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Everything after the command name is the id, so ids may contain spaces.
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let name = name.to_ascii_lowercase();
        let arg = Some(rest.trim())
            .filter(|rest| !rest.is_empty())
            .map(str::to_string);

        let with_id = |name: &'static str, make: fn(String) -> Command| {
            arg.clone().map(make).ok_or(CommandError::MissingId(name))
        };

        match name.as_str() {
            "list" | "ls" => Ok(Command::List),
            "show" => with_id("show", Command::Show),
            "add" => Ok(Command::Add),
            "edit" => with_id("edit", Command::Edit),
            "delete" | "rm" => with_id("delete", Command::Delete),
            "toggle" => with_id("toggle", Command::Toggle),
            "summary" => Ok(Command::Summary),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name)),
        }
    }
}

pub const HELP: &str = "\
commands:
  list             show all invoices
  show <id>        invoice details
  add              add an invoice
  edit <id>        edit an invoice (id cannot change)
  delete <id>      delete an invoice (asks first)
  toggle <id>      switch between paid and unpaid
  summary          paid / unpaid counts
  json             dump invoices as JSON
  quit";

//! Command parsing

use std::str::FromStr;

use thiserror::Error;

/// A single user request read from the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Start(String),
    Stop(String),
    Reset(String),
    Remove(String),
    List,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs a task name")]
    MissingName(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse `<verb> [name]`; the name is the rest of the line and may contain spaces
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let named = |verb: &'static str, build: fn(String) -> Command| {
            if rest.is_empty() {
                Err(CommandError::MissingName(verb))
            } else {
                Ok(build(rest.to_string()))
            }
        };

        match verb.to_lowercase().as_str() {
            "add" | "new" => named("add", Command::Add),
            "start" => named("start", Command::Start),
            "stop" => named("stop", Command::Stop),
            "reset" => named("reset", Command::Reset),
            "remove" | "rm" => named("remove", Command::Remove),
            "list" | "ls" => Ok(Command::List),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

impl Command {
    /// Usage text shown by `help`
    pub fn usage() -> &'static str {
        "Commands:\n\
         \x20 add <name>     register a new task\n\
         \x20 start <name>   start the task's timer\n\
         \x20 stop <name>    stop the task's timer\n\
         \x20 reset <name>   clear the task's timer\n\
         \x20 remove <name>  drop the task\n\
         \x20 list           show all tasks\n\
         \x20 json           show all tasks as JSON\n\
         \x20 help           show this text\n\
         \x20 quit           exit\n"
    }
}

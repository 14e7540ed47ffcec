//! The static command table and prefix completion over it.

use crate::view::View;

/// What a command does when it is run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Show(View),
    Clear,
    History,
    Banner,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

const fn command(name: &'static str, description: &'static str, kind: CommandKind) -> Command {
    Command {
        name,
        description,
        kind,
    }
}

/// Every command, in the order `help` lists them
pub const COMMANDS: &[Command] = &[
    command("help", "Display available commands", CommandKind::Help),
    command("about", "Learn more about me", CommandKind::Show(View::About)),
    command(
        "hobbies",
        "View my hobbies and projects",
        CommandKind::Show(View::Hobbies),
    ),
    command(
        "projects",
        "Alias for hobbies",
        CommandKind::Show(View::Hobbies),
    ),
    command(
        "workouts",
        "View CrossFit workout stats",
        CommandKind::Show(View::Workouts),
    ),
    command(
        "crossfit",
        "Alias for workouts",
        CommandKind::Show(View::Workouts),
    ),
    command("clear", "Clear the terminal", CommandKind::Clear),
    command("history", "Show command history", CommandKind::History),
    command("banner", "Display the welcome banner", CommandKind::Banner),
    command("exit", "Leave the terminal", CommandKind::Exit),
];

/// Look a command up by its exact name
pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Outcome of completing a partial command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    None,
    Unique(&'static str),
    Ambiguous(Vec<&'static str>),
}

/// Collect every command name starting with `partial`
pub fn complete(partial: &str) -> Completion {
    let mut matches: Vec<&'static str> = COMMANDS
        .iter()
        .map(|c| c.name)
        .filter(|name| name.starts_with(partial))
        .collect();

    match matches.len() {
        0 => Completion::None,
        1 => Completion::Unique(matches.remove(0)),
        _ => Completion::Ambiguous(matches),
    }
}

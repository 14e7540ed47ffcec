//! Interpreter and view state for one visitor session.
//!
//! [Session] owns everything that changes while the program runs: the output pane, history and
//! its cursor, the active view, and the boot/focus flags. Every operation takes the current
//! contents of the prompt and, where relevant, returns what the prompt should show next.

use crate::boot::BootEvent;
use crate::command::{self, Command, CommandKind, Completion, COMMANDS};
use crate::history::History;
use crate::output::{LineKind, Output, OutputLine};
use crate::render::{Pages, ASCII_LOGO};
use crate::view::View;

pub const DEFAULT_PROMPT: &str = "visitor@openpage:~$";

/// What the prompt should do after a history key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// Leave the prompt as it is
    Keep,
    /// Replace the prompt contents
    Replace(String),
}

#[derive(Debug)]
pub struct Session {
    prompt: String,
    output: Output,
    history: History,
    view: View,
    title: Option<String>,
    pages: Pages,
    booting: bool,
    focused: bool,
    exit_requested: bool,
}

impl Session {
    /// A session whose prompt is disabled until the boot sequence completes
    pub fn new(prompt: impl Into<String>, pages: Pages) -> Self {
        Self {
            prompt: prompt.into(),
            output: Output::new(),
            history: History::new(),
            view: View::Welcome,
            title: None,
            pages,
            booting: true,
            focused: false,
            exit_requested: false,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    pub fn is_booting(&self) -> bool {
        self.booting
    }

    /// Whether keystrokes go to the prompt
    pub fn accepts_input(&self) -> bool {
        !self.booting && self.focused && self.view == View::Welcome
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn apply_boot(&mut self, event: BootEvent) {
        match event {
            BootEvent::Line(kind) => self.output.push(OutputLine::styled(kind, "")),
            BootEvent::Char(c) => {
                if let Some(line) = self.output.last_mut() {
                    line.push_char(c);
                }
            }
            BootEvent::Done => self.finish_boot(),
        }
    }

    /// Enable the prompt, print the banner and focus input
    pub fn finish_boot(&mut self) {
        if !self.booting {
            return;
        }

        self.booting = false;
        self.print_banner();
        self.focused = true;
        tracing::debug!("prompt enabled");
    }

    /// Run a line typed at the prompt
    ///
    /// Returns the command that ran, none for blank or unknown input.
    pub fn submit(&mut self, raw: &str) -> Option<&'static Command> {
        let cmd = raw.trim().to_lowercase();
        if cmd.is_empty() {
            return None;
        }

        self.history.push(cmd.clone());
        self.echo(&cmd);

        match command::lookup(&cmd) {
            Some(command) => {
                tracing::info!(command = command.name, "running command");
                self.execute(command.kind);
                Some(command)
            }
            None => {
                tracing::info!(input = %cmd, "unknown command");
                self.output.push(
                    OutputLine::plain("Command not found: ").with(LineKind::Error, cmd.as_str()),
                );
                self.output.push(
                    OutputLine::styled(LineKind::Muted, "Type ")
                        .with(LineKind::Highlight, "help")
                        .with(LineKind::Muted, " for available commands."),
                );
                self.output.blank();
                None
            }
        }
    }

    fn execute(&mut self, kind: CommandKind) {
        match kind {
            CommandKind::Help => self.print_help(),
            CommandKind::Show(view) => self.switch_to(view),
            CommandKind::Clear => self.output.clear(),
            CommandKind::History => self.print_history(),
            CommandKind::Banner => self.print_banner(),
            CommandKind::Exit => {
                self.output.push(OutputLine::styled(LineKind::Muted, "Goodbye!"));
                self.exit_requested = true;
            }
        }
    }

    /// Complete the command name in `partial`, returning the new prompt contents
    ///
    /// Leaves the history cursor where it is.
    pub fn complete(&mut self, partial: &str) -> String {
        let partial = partial.trim().to_lowercase();
        if partial.is_empty() {
            return partial;
        }

        match command::complete(&partial) {
            Completion::None => partial,
            Completion::Unique(name) => name.to_string(),
            Completion::Ambiguous(names) => {
                self.echo(&partial);
                self.output.blank();
                self.output
                    .push(OutputLine::styled(LineKind::Info, "Possible completions:"));
                for name in names {
                    self.output
                        .push(OutputLine::plain("  ").with(LineKind::Highlight, name));
                }
                self.output.blank();
                partial
            }
        }
    }

    pub fn history_prev(&mut self) -> Recall {
        match self.history.prev() {
            Some(entry) => Recall::Replace(entry.to_string()),
            None => Recall::Keep,
        }
    }

    pub fn history_next(&mut self) -> Recall {
        Recall::Replace(self.history.next().unwrap_or_default().to_string())
    }

    pub fn switch_to(&mut self, view: View) {
        if self.view == view {
            return;
        }

        tracing::debug!(from = %self.view, to = %view, "switching view");
        self.view = view;
        self.title = view.title();
        self.focused = view == View::Welcome;
    }

    /// Leave a full-screen view; returns whether anything changed
    pub fn escape(&mut self) -> bool {
        if self.view == View::Welcome {
            return false;
        }

        self.switch_to(View::Welcome);
        true
    }

    /// Echo an abandoned line the way a shell shows Ctrl-C
    pub fn interrupt(&mut self, partial: &str) {
        self.output.push(
            OutputLine::styled(LineKind::Prompt, format!("{} ", self.prompt))
                .with(LineKind::Command, partial)
                .with(LineKind::Muted, "^C"),
        );
    }

    fn echo(&mut self, cmd: &str) {
        self.output.push(
            OutputLine::styled(LineKind::Prompt, format!("{} ", self.prompt))
                .with(LineKind::Command, cmd),
        );
    }

    fn print_banner(&mut self) {
        for line in ASCII_LOGO.lines() {
            self.output.push(OutputLine::styled(LineKind::Art, line));
        }
        self.output.blank();
        self.output.push(OutputLine::styled(
            LineKind::Success,
            "Welcome to my interactive terminal page!",
        ));
        self.output.push(
            OutputLine::styled(LineKind::Info, "Type ")
                .with(LineKind::Highlight, "help")
                .with(LineKind::Info, " to see available commands."),
        );
        self.output.blank();
    }

    fn print_help(&mut self) {
        self.output
            .push(OutputLine::styled(LineKind::Header, "Available Commands"));
        self.output.blank();
        for command in COMMANDS {
            self.output.push(
                OutputLine::plain("  ")
                    .with(LineKind::Highlight, format!("{:<15}", command.name))
                    .with(LineKind::Plain, command.description),
            );
        }
        self.output.blank();
        self.output.push(OutputLine::styled(
            LineKind::Info,
            "Tip: Use ↑/↓ arrow keys to navigate command history",
        ));
        self.output.push(OutputLine::styled(
            LineKind::Info,
            "Tip: Use TAB for command completion",
        ));
        self.output.blank();
    }

    fn print_history(&mut self) {
        if self.history.is_empty() {
            self.output
                .push(OutputLine::styled(LineKind::Muted, "No command history yet."));
            return;
        }

        let lines: Vec<OutputLine> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, cmd)| {
                OutputLine::plain("  ")
                    .with(LineKind::Muted, format!("{:>3}.", i + 1))
                    .with(LineKind::Plain, format!(" {cmd}"))
            })
            .collect();

        self.output
            .push(OutputLine::styled(LineKind::Header, "Command History"));
        self.output.blank();
        for line in lines {
            self.output.push(line);
        }
        self.output.blank();
    }
}

//! The append-only pane of the Welcome view.

use std::mem;

use tui::{
    style::{Color, Modifier, Style},
    text::{Span, Spans},
};

use crate::util;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Prompt,
    Command,
    Info,
    Muted,
    Error,
    Success,
    Highlight,
    Header,
    Art,
    BootSystem,
    BootOk,
    BootInfo,
}

impl LineKind {
    pub fn style(self) -> Style {
        let s = Style::default();
        match self {
            LineKind::Plain | LineKind::Command => s,
            LineKind::Prompt => s.fg(Color::Green).add_modifier(Modifier::BOLD),
            LineKind::Info | LineKind::BootInfo => s.fg(Color::Cyan),
            LineKind::Muted => s.fg(Color::DarkGray),
            LineKind::Error => s.fg(Color::Red),
            LineKind::Success | LineKind::BootOk => s.fg(Color::Green),
            LineKind::Highlight => s.fg(Color::Yellow),
            LineKind::Header => s.fg(Color::Magenta).add_modifier(Modifier::BOLD),
            LineKind::Art => s.fg(Color::LightGreen),
            LineKind::BootSystem => s.fg(Color::LightBlue),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: LineKind,
    pub text: String,
}

/// One row of the pane, made of differently styled segments
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputLine {
    segments: Vec<Segment>,
}

impl OutputLine {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(LineKind::Plain, text)
    }

    pub fn styled(kind: LineKind, text: impl Into<String>) -> Self {
        Self::blank().with(kind, text)
    }

    pub fn with(mut self, kind: LineKind, text: impl Into<String>) -> Self {
        self.segments.push(Segment {
            kind,
            text: text.into(),
        });
        self
    }

    /// Append a character to the last segment, starting a plain one if there is none
    pub fn push_char(&mut self, c: char) {
        match self.segments.last_mut() {
            Some(seg) => seg.text.push(c),
            None => self.segments.push(Segment {
                kind: LineKind::Plain,
                text: c.to_string(),
            }),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Split into rows of at most `width` characters, keeping each segment's style
    ///
    /// A blank line still takes one row.
    pub fn wrap(&self, width: usize) -> Vec<Spans<'_>> {
        let width = width.max(1);
        let mut rows = Vec::new();
        let mut current = Vec::new();
        let mut used = 0;

        for seg in &self.segments {
            let style = seg.kind.style();
            let mut rest = seg.text.as_str();
            while !rest.is_empty() {
                if used == width {
                    rows.push(Spans::from(mem::take(&mut current)));
                    used = 0;
                }

                let split = rest
                    .char_indices()
                    .nth(width - used)
                    .map_or(rest.len(), |(i, _)| i);
                let (head, tail) = rest.split_at(split);
                used += head.chars().count();
                current.push(Span::styled(head, style));
                rest = tail;
            }
        }

        rows.push(Spans::from(current));
        rows
    }
}

#[derive(Debug, Default, Clone)]
pub struct Output {
    lines: Vec<OutputLine>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.push(OutputLine::blank());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn last_mut(&mut self) -> Option<&mut OutputLine> {
        self.lines.last_mut()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text().contains(needle))
    }

    /// The lines that fit into a pane of `max_height` rows, newest at the bottom
    pub fn visible(&self, max_height: usize) -> &[OutputLine] {
        util::visible_tail(&self.lines, max_height)
    }
}

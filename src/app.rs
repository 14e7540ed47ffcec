//! The full-screen terminal application: key handling, drawing and the event loop.

use std::{io, ops::ControlFlow};

use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Span, Spans, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
    Terminal,
};

use crate::events::{Event, EventsService};
use crate::input::InputLine;
use crate::output::LineKind;
use crate::session::{Recall, Session};
use crate::util;

const PAGE_STEP: u16 = 10;

#[derive(Debug)]
pub struct App {
    session: Session,
    input: InputLine,
    page_scroll: u16,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input: InputLine::new(),
            page_scroll: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn page_scroll(&self) -> u16 {
        self.page_scroll
    }

    pub async fn run_fullscreen(&mut self, events: EventsService) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_on_terminal(&mut terminal, events).await;

        // restore terminal
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    pub async fn run_on_terminal<B: Backend>(
        &mut self,
        term: &mut Terminal<B>,
        mut events: EventsService,
    ) -> io::Result<()> {
        loop {
            term.draw(|f| {
                let size = f.size();
                if let Some((cursor_x, cursor_y)) = self.cursor_pos_in(size) {
                    f.set_cursor(cursor_x, cursor_y);
                }
                f.render_widget(&*self, size);
            })?;

            if let ControlFlow::Break(()) = self.feed_event(events.next().await?) {
                tracing::info!("leaving terminal");
                return Ok(());
            }
        }
    }

    pub fn feed_event(&mut self, event: Event) -> ControlFlow<()> {
        match event {
            Event::Key(key) => self.feed_key_event(key),
            Event::Boot(boot) => {
                self.session.apply_boot(boot);
                ControlFlow::Continue(())
            }
            Event::Resize | Event::Tick => ControlFlow::Continue(()),
        }
    }

    pub fn feed_key_event(&mut self, key: KeyEvent) -> ControlFlow<()> {
        if let KeyEvent {
            code: KeyCode::Char('d' | 'q' | 'x'),
            modifiers: KeyModifiers::CONTROL,
        } = key
        {
            return ControlFlow::Break(());
        }

        if self.session.is_booting() {
            return ControlFlow::Continue(());
        }

        if key.code == KeyCode::Esc {
            if self.session.escape() {
                self.page_scroll = 0;
            }
            return ControlFlow::Continue(());
        }

        if self.session.view().is_page() {
            self.feed_page_key(key);
            return ControlFlow::Continue(());
        }

        if self.session.accepts_input() {
            self.feed_prompt_key(key);
        }

        if self.session.exit_requested() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn feed_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.page_scroll = self.page_scroll.saturating_sub(1),
            KeyCode::Down => {
                self.page_scroll = self.page_scroll.saturating_add(1).min(self.max_page_scroll())
            }
            KeyCode::PageUp => self.page_scroll = self.page_scroll.saturating_sub(PAGE_STEP),
            KeyCode::PageDown => {
                self.page_scroll = self
                    .page_scroll
                    .saturating_add(PAGE_STEP)
                    .min(self.max_page_scroll())
            }
            KeyCode::Home => self.page_scroll = 0,
            _ => (),
        }
    }

    fn feed_prompt_key(&mut self, key: KeyEvent) {
        match key {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            } => {
                let abandoned = self.input.take();
                self.session.interrupt(&abandoned);
            }
            KeyEvent {
                code: KeyCode::Up,
                modifiers: KeyModifiers::NONE,
            } => {
                if let Recall::Replace(entry) = self.session.history_prev() {
                    self.input.set(&entry);
                }
            }
            KeyEvent {
                code: KeyCode::Down,
                modifiers: KeyModifiers::NONE,
            } => {
                if let Recall::Replace(entry) = self.session.history_next() {
                    self.input.set(&entry);
                }
            }
            KeyEvent {
                code: KeyCode::Tab,
                modifiers: _,
            } => {
                let partial = self.input.as_string();
                if !partial.trim().is_empty() {
                    let completed = self.session.complete(&partial);
                    self.input.set(&completed);
                }
            }
            KeyEvent {
                code: KeyCode::Right,
                modifiers: KeyModifiers::NONE,
            } => self.input.move_right(),
            KeyEvent {
                code: KeyCode::Left,
                modifiers: KeyModifiers::NONE,
            } => self.input.move_left(),
            KeyEvent {
                code: KeyCode::Home,
                modifiers: _,
            } => self.input.home(),
            KeyEvent {
                code: KeyCode::End,
                modifiers: _,
            } => self.input.end(),
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            } => self.input.insert(c),
            KeyEvent {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            } => self.input.backspace(),
            KeyEvent {
                code: KeyCode::Delete,
                modifiers: KeyModifiers::NONE,
            } => self.input.delete(),
            KeyEvent {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            } => {
                let line = self.input.take();
                self.session.submit(&line);
                self.page_scroll = 0;
            }
            _ => (),
        }
    }

    fn prompt_width(&self) -> u16 {
        self.session.prompt().chars().count() as u16 + 1
    }

    /// How many input characters are scrolled off the left edge so the cursor stays on screen
    fn input_offset(&self, width: u16) -> u16 {
        let available = width
            .saturating_sub(self.prompt_width())
            .saturating_sub(1);
        self.input.cursor_column().saturating_sub(available)
    }

    /// Wrapped output rows that fit above the prompt, newest at the bottom
    fn output_rows(&self, width: u16, max_height: usize) -> Vec<Spans<'_>> {
        let rows: Vec<Spans> = self
            .session
            .output()
            .visible(max_height)
            .iter()
            .flat_map(|l| l.wrap(width as usize))
            .collect();
        util::visible_tail(&rows, max_height).to_vec()
    }

    /// Where the terminal cursor belongs, none while the prompt is not shown
    pub fn cursor_pos_in(&self, rect: Rect) -> Option<(u16, u16)> {
        if !self.session.accepts_input() || rect.height == 0 {
            return None;
        }

        let max_height = rect.height.saturating_sub(1) as usize;
        let row = self.output_rows(rect.width, max_height).len() as u16;
        let col = self.prompt_width() + self.input.cursor_column() - self.input_offset(rect.width);
        Some((
            rect.left() + col.min(rect.width.saturating_sub(1)),
            rect.top() + row,
        ))
    }

    fn render_terminal(&self, area: Rect, buf: &mut Buffer) {
        let prompt_shown = self.session.accepts_input();
        let max_height = if prompt_shown {
            area.height.saturating_sub(1)
        } else {
            area.height
        };

        let mut lines = self.output_rows(area.width, max_height as usize);

        if prompt_shown {
            let shown: String = self
                .input
                .as_string()
                .chars()
                .skip(self.input_offset(area.width) as usize)
                .collect();
            lines.push(Spans::from(vec![
                Span::styled(
                    format!("{} ", self.session.prompt()),
                    LineKind::Prompt.style(),
                ),
                Span::raw(shown),
            ]));
        }

        Paragraph::new(Text::from(lines)).render(area, buf);
    }

    /// Last scroll offset that still shows part of the page
    fn max_page_scroll(&self) -> u16 {
        self.session
            .pages()
            .get(self.session.view())
            .map_or(0, |t| t.height().saturating_sub(1) as u16)
    }

    fn render_page(&self, area: Rect, buf: &mut Buffer) {
        let title = self.session.title().unwrap_or_default();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(Spans::from(vec![
                Span::styled(format!(" {title} "), LineKind::Header.style()),
                Span::styled("| Esc to return ", LineKind::Muted.style()),
            ]));

        let text = self
            .session
            .pages()
            .get(self.session.view())
            .cloned()
            .unwrap_or_default();

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.page_scroll, 0))
            .render(area, buf);
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.session.view().is_page() {
            self.render_page(area, buf);
        } else {
            self.render_terminal(area, buf);
        }
    }
}

#[cfg(test)]
mod test {
    use tui::backend::TestBackend;

    use super::*;
    use crate::boot::BootEvent;
    use crate::data::Portfolio;
    use crate::render::Pages;
    use crate::session::DEFAULT_PROMPT;
    use crate::view::View;

    fn app() -> App {
        App::new(Session::new(DEFAULT_PROMPT, Pages::build(&Portfolio::default())))
    }

    fn booted() -> App {
        let mut app = app();
        assert_eq!(
            app.feed_event(Event::Boot(BootEvent::Done)),
            ControlFlow::Continue(())
        );
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        assert_eq!(app.feed_key_event(key(code)), ControlFlow::Continue(()));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| f.render_widget(app, f.size())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect())
            .collect()
    }

    #[test]
    fn keys_ignored_while_booting() {
        let mut app = app();
        type_line(&mut app, "help");
        assert!(app.input().is_empty());
        assert_eq!(app.cursor_pos_in(Rect::new(0, 0, 80, 24)), None);

        let quit = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(app.feed_key_event(quit), ControlFlow::Break(()));
    }

    #[test]
    fn enter_submits_and_switches_view() {
        let mut app = booted();
        type_line(&mut app, "About");
        assert_eq!(app.input().as_string(), "About");
        press(&mut app, KeyCode::Enter);
        assert!(app.input().is_empty());
        assert_eq!(app.session().view(), View::About);

        // typing goes nowhere while a page is shown
        type_line(&mut app, "x");
        assert!(app.input().is_empty());

        press(&mut app, KeyCode::Down);
        assert_eq!(app.page_scroll(), 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session().view(), View::Welcome);
        assert_eq!(app.page_scroll(), 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session().view(), View::Welcome);
    }

    #[test]
    fn arrows_recall_history() {
        let mut app = booted();
        for cmd in ["help", "banner"] {
            type_line(&mut app, cmd);
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input().as_string(), "banner");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input().as_string(), "help");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input().as_string(), "banner");
        press(&mut app, KeyCode::Down);
        assert!(app.input().is_empty());
    }

    #[test]
    fn tab_completes_prompt() {
        let mut app = booted();
        type_line(&mut app, "wo");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input().as_string(), "workouts");

        app.input = InputLine::new();
        type_line(&mut app, "h");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input().as_string(), "h");
        assert!(app.session().output().contains("Possible completions:"));
    }

    #[test]
    fn ctrl_c_abandons_line() {
        let mut app = booted();
        type_line(&mut app, "hob");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.feed_key_event(ctrl_c), ControlFlow::Continue(()));
        assert!(app.input().is_empty());
        assert!(app.session().output().contains("hob^C"));
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn exit_command_breaks_loop() {
        let mut app = booted();
        type_line(&mut app, "exit");
        assert_eq!(app.feed_key_event(key(KeyCode::Enter)), ControlFlow::Break(()));
    }

    #[test]
    fn prompt_follows_output() {
        let mut app = booted();
        type_line(&mut app, "hi");
        let rows = screen(&app, 80, 60);
        let prompt_row = rows
            .iter()
            .position(|r| r.starts_with(&format!("{DEFAULT_PROMPT} hi")))
            .unwrap();
        assert_eq!(
            app.cursor_pos_in(Rect::new(0, 0, 80, 60)),
            Some((DEFAULT_PROMPT.len() as u16 + 3, prompt_row as u16))
        );
    }

    #[test]
    fn page_view_draws_title_and_placeholders() {
        let mut app = booted();
        app.session_mut().submit("about");
        let rows = screen(&app, 80, 20);
        assert!(rows[0].contains("ABOUT"));
        assert!(rows.iter().any(|r| r.contains("Not set")));
        assert_eq!(app.cursor_pos_in(Rect::new(0, 0, 80, 20)), None);
    }

    #[test]
    fn long_output_lines_wrap() {
        let mut app = booted();
        let token = "z".repeat(100);
        app.session_mut().submit(&token);
        let rows = screen(&app, 40, 60);
        let shown: usize = rows.iter().map(|r| r.matches('z').count()).sum();
        // the echoed command and the error line each carry the token
        assert_eq!(shown, 200);

        let prompt_row = rows
            .iter()
            .rposition(|r| r.starts_with(DEFAULT_PROMPT))
            .unwrap();
        assert_eq!(
            app.cursor_pos_in(Rect::new(0, 0, 40, 60)).map(|(_, y)| y),
            Some(prompt_row as u16)
        );
    }

    #[test]
    fn long_input_scrolls_to_keep_cursor_visible() {
        let mut app = booted();
        app.session_mut().submit("clear");
        type_line(&mut app, "abcdefghijklmnopqrstuvwxyz0123");
        let rows = screen(&app, 40, 10);
        assert!(rows[0].starts_with(DEFAULT_PROMPT));
        assert!(rows[0].trim_end().ends_with("z0123"));
        assert!(!rows[0].contains("abc"));
        assert_eq!(app.cursor_pos_in(Rect::new(0, 0, 40, 10)), Some((39, 0)));

        press(&mut app, KeyCode::Home);
        let rows = screen(&app, 40, 10);
        assert!(rows[0].contains(&format!("{DEFAULT_PROMPT} abc")));
        assert_eq!(
            app.cursor_pos_in(Rect::new(0, 0, 40, 10)),
            Some((DEFAULT_PROMPT.len() as u16 + 1, 0))
        );
    }

    #[test]
    fn page_scroll_stops_at_last_line() {
        let mut app = booted();
        app.session_mut().submit("workouts");
        let last = app.session().pages().get(View::Workouts).unwrap().height() as u16 - 1;
        for _ in 0..20 {
            press(&mut app, KeyCode::PageDown);
        }
        assert_eq!(app.page_scroll(), last);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.page_scroll(), last);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.page_scroll(), last - 1);
    }
}

/// The editable contents of the prompt line
///
/// The cursor is stored as a distance from the end of the line, so 0 means "after the last
/// character".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputLine {
    current_input: Vec<char>,
    cursor_pos: u16,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_string(&self) -> String {
        self.current_input.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.current_input.is_empty()
    }

    pub fn cursor_pos(&self) -> u16 {
        self.cursor_pos
    }

    /// Column of the cursor, counted from the start of the line
    pub fn cursor_column(&self) -> u16 {
        self.current_input
            .len()
            .saturating_sub(self.cursor_pos as usize) as u16
    }

    pub fn set_cursor_pos(&mut self, pos: u16) {
        self.cursor_pos = pos.clamp(0, self.current_input.len() as u16)
    }

    /// Replace the line, placing the cursor at its end
    pub fn set(&mut self, text: &str) {
        self.current_input = text.chars().collect();
        self.cursor_pos = 0;
    }

    /// Empty the line and return what it held
    pub fn take(&mut self) -> String {
        self.cursor_pos = 0;
        self.current_input.drain(..).collect()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.current_input.len() - self.cursor_pos as usize;
        self.current_input.insert(idx, c);
    }

    pub fn move_left(&mut self) {
        self.set_cursor_pos(self.cursor_pos.saturating_add(1))
    }

    pub fn move_right(&mut self) {
        self.set_cursor_pos(self.cursor_pos.saturating_sub(1))
    }

    pub fn home(&mut self) {
        self.set_cursor_pos(self.current_input.len() as u16)
    }

    pub fn end(&mut self) {
        self.set_cursor_pos(0)
    }

    pub fn backspace(&mut self) {
        let rm_idx = self.current_input.len() - self.cursor_pos as usize;
        if rm_idx != 0 {
            self.current_input.remove(rm_idx - 1);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos != 0 {
            self.current_input
                .remove(self.current_input.len() - self.cursor_pos as usize);
            self.cursor_pos -= 1;
        }
    }
}

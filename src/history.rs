/// A structure storing the commands entered during a session
///
/// Entries are only ever appended. The cursor points at the entry currently shown in the prompt,
/// or one past the newest entry when the prompt holds fresh input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    stored_commands: Vec<String>,
    cur: usize,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history containing the given entries, with the cursor past the newest one
    pub fn with_initial(initial: impl IntoIterator<Item = String>) -> Self {
        let stored_commands: Vec<String> = initial.into_iter().collect();
        Self {
            cur: stored_commands.len(),
            stored_commands,
        }
    }

    /// Push entry to the end of the history
    ///
    /// This resets the cursor, which means that the next [Self::prev] returns the newest entry.
    pub fn push(&mut self, command: impl Into<String>) {
        self.stored_commands.push(command.into());
        self.cur = self.stored_commands.len();
    }

    pub fn len(&self) -> usize {
        self.stored_commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stored_commands.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.stored_commands.get(idx).map(String::as_str)
    }

    /// Get a reference to the newest element
    pub fn newest(&self) -> Option<&str> {
        self.stored_commands.last().map(String::as_str)
    }

    /// Position of the cursor, `len()` when on a clean line
    pub fn cursor(&self) -> usize {
        self.cur
    }

    /// Get a reference to the current element, none if on a clean line
    pub fn current(&self) -> Option<&str> {
        self.get(self.cur)
    }

    /// Move the cursor back one entry and return it
    ///
    /// Returns none when the cursor already sits on the oldest entry (or the history is empty),
    /// in which case the prompt keeps whatever it shows.
    pub fn prev(&mut self) -> Option<&str> {
        if self.cur == 0 {
            return None;
        }

        self.cur -= 1;
        self.current()
    }

    /// Move the cursor forward one entry and return it
    ///
    /// Stepping past the newest entry parks the cursor on a clean line and returns none, which
    /// means the prompt should be cleared.
    pub fn next(&mut self) -> Option<&str> {
        if self.cur + 1 < self.stored_commands.len() {
            self.cur += 1;
            self.current()
        } else {
            self.cur = self.stored_commands.len();
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stored_commands.iter().map(String::as_str)
    }
}

use std::fmt::{self, Display, Formatter};

/// The mutually exclusive display regions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// The scrolling terminal
    #[default]
    Welcome,
    About,
    Hobbies,
    Workouts,
}

impl View {
    pub const ALL: [View; 4] = [View::Welcome, View::About, View::Hobbies, View::Workouts];

    pub fn name(self) -> &'static str {
        match self {
            View::Welcome => "welcome",
            View::About => "about",
            View::Hobbies => "hobbies",
            View::Workouts => "workouts",
        }
    }

    /// Title shown above a full-screen view, none for the terminal itself
    pub fn title(self) -> Option<String> {
        match self {
            View::Welcome => None,
            view => Some(view.name().to_uppercase()),
        }
    }

    pub fn is_page(self) -> bool {
        self != View::Welcome
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Builds the full-screen views out of loaded portfolio data.

use tui::text::{Span, Spans, Text};

use crate::data::{HobbyData, Portfolio, ProfileData, WorkoutData};
use crate::output::LineKind;
use crate::util::{self, or_placeholder};
use crate::view::View;

pub const NOT_SET: &str = "Not set";
pub const NOT_AVAILABLE: &str = "N/A";

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 16;

pub const ASCII_LOGO: &str = r"
    ╔═══════════════════════════════════════════╗
    ║                                           ║
    ║     ██████╗ ██████╗ ███████╗███╗   ██╗    ║
    ║    ██╔═══██╗██╔══██╗██╔════╝████╗  ██║    ║
    ║    ██║   ██║██████╔╝█████╗  ██╔██╗ ██║    ║
    ║    ██║   ██║██╔═══╝ ██╔══╝  ██║╚██╗██║    ║
    ║    ╚██████╔╝██║     ███████╗██║ ╚████║    ║
    ║     ╚═════╝ ╚═╝     ╚══════╝╚═╝  ╚═══╝    ║
    ║                                           ║
    ║           P  A  G  E                      ║
    ║                                           ║
    ╚═══════════════════════════════════════════╝
";

pub const CROSSFIT_ASCII: &str = r"
    ┌─────────────────────────────────────┐
    │    ╔═╗╦═╗╔═╗╔═╗╔═╗╔═╗╦╔╦╗           │
    │    ║  ╠╦╝║ ║╚═╗╚═╗╠╣ ║ ║            │
    │    ╚═╝╩╚═╚═╝╚═╝╚═╝╚  ╩ ╩            │
    └─────────────────────────────────────┘
";

fn span(kind: LineKind, text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), kind.style())
}

fn styled(kind: LineKind, text: impl Into<String>) -> Spans<'static> {
    Spans::from(span(kind, text))
}

fn blank() -> Spans<'static> {
    Spans::default()
}

fn art(text: &str) -> impl Iterator<Item = Spans<'static>> + '_ {
    text.lines().map(|l| styled(LineKind::Art, l))
}

/// `315` rather than `315.0`, fractions kept when present
fn number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

fn gauge(label: &str, percentage: f64, value: String) -> Spans<'static> {
    Spans::from(vec![
        span(LineKind::Plain, format!("  {label:<LABEL_WIDTH$} ")),
        span(LineKind::Success, util::bar(percentage, BAR_WIDTH)),
        span(LineKind::Highlight, format!(" {value}")),
    ])
}

fn field(label: &str, value: &str, placeholder: &str) -> Spans<'static> {
    let shown = or_placeholder(value, placeholder);
    let kind = if shown == placeholder {
        LineKind::Muted
    } else {
        LineKind::Plain
    };
    Spans::from(vec![
        span(LineKind::Highlight, format!("  {label:<LABEL_WIDTH$}")),
        span(kind, shown.to_string()),
    ])
}

fn none_line(lines: &mut Vec<Spans<'static>>) {
    lines.push(styled(LineKind::Muted, format!("  {NOT_AVAILABLE}")));
}

pub fn about_page(profile: &ProfileData) -> Text<'static> {
    let mut lines = vec![styled(LineKind::Header, "About Me"), blank()];

    for (label, value) in profile.personal_info.fields() {
        lines.push(field(label, value, NOT_SET));
    }

    lines.push(blank());
    lines.push(styled(LineKind::Header, "Bio"));
    if profile.bio.trim().is_empty() {
        lines.push(styled(LineKind::Muted, format!("  {NOT_SET}")));
    } else {
        lines.extend(
            profile
                .bio
                .lines()
                .map(|l| styled(LineKind::Plain, format!("  {l}"))),
        );
    }

    lines.push(blank());
    lines.push(styled(LineKind::Header, "Skills"));
    if profile.skills.is_empty() {
        none_line(&mut lines);
    }
    for skill in &profile.skills {
        let value = if skill.label.is_empty() {
            format!("{}%", number(skill.level))
        } else {
            skill.label.clone()
        };
        lines.push(gauge(or_placeholder(&skill.name, NOT_SET), skill.level, value));
    }

    Text::from(lines)
}

pub fn hobbies_page(hobbies: &HobbyData) -> Text<'static> {
    let mut lines = vec![
        styled(LineKind::Header, "Hobbies & Projects"),
        blank(),
        styled(LineKind::Highlight, "Current Projects"),
        blank(),
    ];

    if hobbies.projects.is_empty() {
        none_line(&mut lines);
    }
    for project in &hobbies.projects {
        lines.push(Spans::from(vec![
            span(LineKind::Prompt, "  > "),
            span(LineKind::Highlight, or_placeholder(&project.title, NOT_SET).to_string()),
        ]));
        if !project.description.is_empty() {
            lines.push(styled(LineKind::Plain, format!("    {}", project.description)));
        }
        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|t| format!("[{t}]")).collect();
            lines.push(styled(LineKind::Info, format!("    {}", tags.join(" "))));
        }
        lines.push(blank());
    }

    lines.push(blank());
    lines.push(styled(LineKind::Highlight, "For Fun"));
    lines.push(blank());
    if hobbies.fun_activities.is_empty() {
        none_line(&mut lines);
    }
    for activity in &hobbies.fun_activities {
        let mut spans = vec![
            span(LineKind::Plain, format!("  {} ", or_placeholder(&activity.icon, "*"))),
            span(LineKind::Highlight, or_placeholder(&activity.name, NOT_SET).to_string()),
        ];
        if !activity.description.is_empty() {
            spans.push(span(LineKind::Muted, format!(" - {}", activity.description)));
        }
        lines.push(Spans::from(spans));
    }

    Text::from(lines)
}

pub fn workouts_page(workouts: &WorkoutData) -> Text<'static> {
    let mut lines: Vec<Spans<'static>> = art(CROSSFIT_ASCII).collect();
    lines.push(blank());

    lines.push(styled(LineKind::Header, "THIS WEEK'S STATS"));
    if workouts.week_stats.is_empty() {
        none_line(&mut lines);
    }
    for (label, value) in workouts.week_stat_rows() {
        lines.push(field(&format!("{label}:"), &value, NOT_AVAILABLE));
    }

    lines.push(blank());
    lines.push(styled(LineKind::Header, "PERSONAL RECORDS (1RM)"));
    if workouts.personal_records.is_empty() {
        none_line(&mut lines);
    }
    for pr in &workouts.personal_records {
        let value = format!("{} {}", number(pr.weight), pr.unit);
        lines.push(gauge(
            or_placeholder(&pr.exercise, NOT_SET),
            pr.percentage,
            value.trim_end().to_string(),
        ));
    }

    lines.push(blank());
    lines.push(styled(LineKind::Header, "BENCHMARK WOD TIMES"));
    if workouts.benchmarks.is_empty() {
        none_line(&mut lines);
    }
    for wod in &workouts.benchmarks {
        lines.push(gauge(
            or_placeholder(&wod.name, NOT_SET),
            wod.percentage,
            or_placeholder(&wod.time, NOT_AVAILABLE).to_string(),
        ));
    }

    lines.push(blank());
    lines.push(Spans::from(vec![
        span(LineKind::Muted, "Last updated: "),
        span(
            LineKind::Muted,
            or_placeholder(workouts.last_updated.as_deref().unwrap_or(""), NOT_AVAILABLE)
                .to_string(),
        ),
    ]));

    Text::from(lines)
}

/// The three full-screen views, built once per session
#[derive(Debug, Clone, Default)]
pub struct Pages {
    about: Text<'static>,
    hobbies: Text<'static>,
    workouts: Text<'static>,
}

impl Pages {
    pub fn build(portfolio: &Portfolio) -> Self {
        Self {
            about: about_page(&portfolio.profile),
            hobbies: hobbies_page(&portfolio.hobbies),
            workouts: workouts_page(&portfolio.workouts),
        }
    }

    pub fn get(&self, view: View) -> Option<&Text<'static>> {
        match view {
            View::Welcome => None,
            View::About => Some(&self.about),
            View::Hobbies => Some(&self.hobbies),
            View::Workouts => Some(&self.workouts),
        }
    }
}

/// Plain text of every line, for assertions
#[cfg(test)]
pub(crate) fn plain_lines(text: &Text) -> Vec<String> {
    text.lines
        .iter()
        .map(|spans| spans.0.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

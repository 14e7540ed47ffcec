//! The startup animation that gates the prompt.
//!
//! [run] reveals [BOOT_SEQUENCE] one character at a time by sending [BootEvent]s; the session
//! applies them to the output pane and keeps input disabled until [BootEvent::Done].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use crate::output::LineKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootLine {
    pub text: &'static str,
    pub kind: LineKind,
    pub char_delay_ms: u64,
    pub pause_ms: u64,
}

pub const BOOT_SEQUENCE: [BootLine; 5] = [
    BootLine {
        text: "[SYSTEM] Initializing OpenPage v2.0...",
        kind: LineKind::BootSystem,
        char_delay_ms: 30,
        pause_ms: 300,
    },
    BootLine {
        text: "[  OK  ] Starting terminal interface...",
        kind: LineKind::BootOk,
        char_delay_ms: 20,
        pause_ms: 200,
    },
    BootLine {
        text: "[  OK  ] Loading user profile...",
        kind: LineKind::BootOk,
        char_delay_ms: 20,
        pause_ms: 200,
    },
    BootLine {
        text: "[  OK  ] Establishing connection...",
        kind: LineKind::BootOk,
        char_delay_ms: 20,
        pause_ms: 400,
    },
    BootLine {
        text: "[INFO] System ready. Welcome!",
        kind: LineKind::BootInfo,
        char_delay_ms: 30,
        pause_ms: 500,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    /// Start a new, empty line of the given kind
    Line(LineKind),
    /// Reveal the next character of the current line
    Char(char),
    Done,
}

fn scaled(ms: u64, pace: f64) -> Duration {
    Duration::from_nanos((ms as f64 * pace * 1_000_000.0).round() as u64)
}

/// Play the boot sequence into `tx`, stretching every delay by `pace`
///
/// Returns early if the receiving end goes away.
pub async fn run(tx: mpsc::UnboundedSender<BootEvent>, pace: f64) {
    tracing::debug!(pace, "boot sequence started");
    for line in BOOT_SEQUENCE {
        if tx.send(BootEvent::Line(line.kind)).is_err() {
            return;
        }

        for c in line.text.chars() {
            time::sleep(scaled(line.char_delay_ms, pace)).await;
            if tx.send(BootEvent::Char(c)).is_err() {
                return;
            }
        }

        time::sleep(scaled(line.pause_ms, pace)).await;
    }

    if tx.send(BootEvent::Done).is_ok() {
        tracing::debug!("boot sequence finished");
    }
}

/// Spawn [run] on the current runtime and hand back the receiving end
pub fn spawn(pace: f64) -> mpsc::UnboundedReceiver<BootEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run(tx, pace));
    rx
}

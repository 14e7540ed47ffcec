//! Merges keyboard input, boot progress and a redraw tick into one stream of [Event]s.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::boot::BootEvent;

const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Boot(BootEvent),
    Resize,
    Tick,
}

pub struct EventsService {
    crossterm_events: EventStream,
    boot: Option<mpsc::UnboundedReceiver<BootEvent>>,
}

impl EventsService {
    pub fn new(boot: mpsc::UnboundedReceiver<BootEvent>) -> EventsService {
        EventsService {
            crossterm_events: EventStream::new(),
            boot: Some(boot),
        }
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key) => Some(Event::Key(key)),
            CrosstermEvent::Resize(..) => Some(Event::Resize),
            CrosstermEvent::Mouse(_) => None,
        }
    }

    async fn next_boot(boot: &mut Option<mpsc::UnboundedReceiver<BootEvent>>) -> Option<BootEvent> {
        match boot {
            Some(rx) => rx.recv().await,
            None => futures::future::pending().await,
        }
    }

    pub async fn next(&mut self) -> std::io::Result<Event> {
        loop {
            let evt = tokio::select! {
                event = Self::next_boot(&mut self.boot) => match event {
                    Some(event) => Some(Event::Boot(event)),
                    None => {
                        self.boot = None;
                        None
                    }
                },
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => return Err(err),
                    None => None,
                },
                _ = time::sleep(TICK) => Some(Event::Tick),
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

//! Terminal event stream
//!
//! A reader thread forwards crossterm events over a channel and emits a
//! tick at a fixed cadence so the UI can redraw without input.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// An event delivered to the main loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize (columns, rows)
    Resize(u16, u16),
    /// Periodic tick
    Tick,
}

/// Background reader for terminal events
#[derive(Debug)]
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handle: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Spawn the reader thread with the given tick cadence
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => sender.send(Event::Key(key)),
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            sender.send(Event::Resize(width, height))
                        }
                        Ok(_) => Ok(()),
                        Err(_) => break,
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handle }
    }

    /// Block until the next event arrives
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

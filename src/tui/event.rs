//! Event handling for the TUI
//!
//! Terminal events (key presses, mouse, resize) are read on a dedicated
//! thread and funneled into one channel together with ticks and the result
//! of the background fetch, so the main loop has a single place to wait.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use log::error;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::wizard::FetchOutcome;

/// Events the main loop reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// The step contents fetch finished
    ItemsLoaded(FetchOutcome),
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event sender
    sender: mpsc::Sender<Event>,
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        {
            let sender = sender.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    let ready = match event::poll(timeout) {
                        Ok(ready) => ready,
                        Err(err) => {
                            error!("Failed to poll terminal events: {}", err);
                            return;
                        }
                    };

                    if ready {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                            Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                            Ok(CrosstermEvent::Resize(width, height)) => {
                                Some(Event::Resize(width, height))
                            }
                            Ok(_) => None,
                            Err(err) => {
                                error!("Failed to read terminal event: {}", err);
                                return;
                            }
                        };
                        if let Some(event) = forwarded {
                            if sender.send(event).is_err() {
                                return;
                            }
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(Event::Tick).is_err() {
                            return;
                        }
                        last_tick = Instant::now();
                    }
                }
            });
        }

        Self { sender, receiver }
    }

    /// A sender for events produced outside the terminal thread
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

//! Event plumbing for the countdown loop.
//!
//! Two background tasks feed one channel: a ticker that fires once a
//! second to drive the countdown, and an input poller for key presses.
//! The draw loop just awaits the next event.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::interval;

/// How long the input task blocks waiting for a key before yielding.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum Event {
    /// Once-a-second countdown tick.
    Tick,
    /// Key press.
    Key(KeyEvent),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawn the tick and input tasks and return the receiving half.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let tick_tx = tx.clone();
        tokio::spawn(async move {
            let mut ticker = interval(tick_rate);
            loop {
                ticker.tick().await;
                if tick_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        let input_tx = tx;
        tokio::task::spawn_blocking(move || {
            loop {
                if event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        // Some terminals report release events too; only
                        // presses count.
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if input_tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                } else if input_tx.is_closed() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Next event, or `None` once both producers are gone.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

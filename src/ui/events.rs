use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::capture::{CreateEntryError, Entry};
use crate::shutdown::ShutdownHandle;

/// How often the input thread re-checks the shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// The capture pipeline finished on its worker thread.
    CaptureFinished(Result<Entry, CreateEntryError>),
    /// OS signal received (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                let _ = event_tx.send(AppEvent::Shutdown);
                break;
            }

            let ready = match event::poll(POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal poll failed");
                    let _ = event_tx.send(AppEvent::Shutdown);
                    break;
                }
            };
            if !ready {
                continue;
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    let _ = event_tx.send(AppEvent::Shutdown);
                    break;
                }
            };
            if let Some(app_event) = forwarded {
                if event_tx.send(app_event).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

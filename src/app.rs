//! Event-driven application state for the interactive form.
//!
//! [`App`] wraps a [`Session`] with the bits only an interactive front end
//! needs: which control has focus, the spinner frame, and the channel that
//! carries finished generations back from their spawned tasks.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::RoadmapError;
use crate::form::Field;
use crate::generation::RoadmapGenerator;
use crate::session::{Session, Trigger};

/// Spinner frames shown on the trigger while a generation is in flight
pub const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Lines moved per PgUp/PgDn in the result panel
pub const SCROLL_STEP: u16 = 3;

/// Which control receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Generate,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Field(Field::Experience),
        Focus::Field(Field::Skills),
        Focus::Field(Field::TargetRole),
        Focus::Generate,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Experience)
    }
}

/// Discrete user intents, already decoded from raw key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Backspace,
    FocusNext,
    FocusPrev,
    Submit,
    DismissAlert,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// A finished generation travelling back to the event loop
#[derive(Debug)]
pub struct Completion {
    pub ticket_id: u64,
    pub roadmap: String,
}

pub struct App {
    session: Session,
    focus: Focus,
    generator: Arc<dyn RoadmapGenerator>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    spinner_frame: usize,
    result_scroll: u16,
    title: String,
    should_quit: bool,
}

impl App {
    pub fn new(generator: Arc<dyn RoadmapGenerator>, title: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            focus: Focus::default(),
            generator,
            tx,
            rx,
            spinner_frame: 0,
            result_scroll: 0,
            title: title.into(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// First visible row of the result panel
    pub fn result_scroll(&self) -> u16 {
        self.result_scroll
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    /// Apply one user action. Must be called from within a tokio runtime,
    /// since a successful submit spawns the generation task.
    pub fn handle(&mut self, action: Action) {
        // The alert is modal
        if self.session.alert().is_some() {
            match action {
                Action::DismissAlert | Action::Submit => self.session.dismiss_alert(),
                Action::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            Action::Type(c) => {
                if let Focus::Field(field) = self.focus {
                    self.session.type_char(field, c);
                }
            }
            Action::Backspace => {
                if let Focus::Field(field) = self.focus {
                    self.session.backspace(field);
                }
            }
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Submit => self.submit(),
            Action::ScrollUp => {
                self.result_scroll = self.result_scroll.saturating_sub(SCROLL_STEP);
            }
            Action::ScrollDown => {
                // Rendered rows are at least the logical lines, so this keeps the last line reachable
                let max = self.session.roadmap().lines().count() as u16 + 1;
                self.result_scroll = self.result_scroll.saturating_add(SCROLL_STEP).min(max);
            }
            Action::DismissAlert => {}
            Action::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self) {
        match self.session.request_generation() {
            Ok(Trigger::Started(ticket)) => {
                self.spinner_frame = 0;
                let generator = Arc::clone(&self.generator);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let roadmap = generator.generate(ticket.form).await;
                    // Receiver is gone only when the app is shutting down
                    let _ = tx.send(Completion {
                        ticket_id: ticket.id,
                        roadmap,
                    });
                });
            }
            Ok(Trigger::Disabled) => {}
            // The session has already raised the alert
            Err(RoadmapError::Validation { .. }) => {}
            Err(err) => debug!(%err, "unexpected error from generation request"),
        }
    }

    /// Fold any finished generations into the session without waiting
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(done) = self.rx.try_recv() {
            if self.apply(done) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next finished generation and apply it
    pub async fn wait_for_completion(&mut self) -> bool {
        match self.rx.recv().await {
            Some(done) => self.apply(done),
            None => false,
        }
    }

    fn apply(&mut self, done: Completion) -> bool {
        let applied = self.session.complete(done.ticket_id, done.roadmap);
        if applied {
            self.result_scroll = 0;
        }
        applied
    }

    /// Advance the spinner; called once per UI tick
    pub fn tick(&mut self) {
        if self.session.status().is_in_progress() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

//! Session state and the generation controller.
//!
//! A [`Session`] owns the form, the generation status, the last roadmap and
//! any open alert. Front ends drive it with discrete events: field edits,
//! generation requests and completions. Requests are split into a
//! synchronous half ([`Session::request_generation`]) that validates and
//! flips the status, and a completion half ([`Session::complete`]) that
//! stores the text once the generator's future resolves. In between, the
//! status is observably `InProgress`.

use tracing::{debug, info, warn};

use crate::error::{RoadmapError, Result, VALIDATION_MESSAGE};
use crate::form::{Field, FormData};
use crate::generation::{GenerationStatus, RoadmapGenerator};

/// A blocking notification; it must be dismissed before input resumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

/// Handle for one in-flight generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub id: u64,
    /// Form values at the moment the request was accepted
    pub form: FormData,
}

/// Outcome of pressing the trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Validation passed and the status is now `InProgress`
    Started(GenerationTicket),
    /// The trigger is disabled because a generation is already in flight
    Disabled,
}

#[derive(Debug, Default)]
pub struct Session {
    form: FormData,
    status: GenerationStatus,
    roadmap: String,
    alert: Option<Alert>,
    next_ticket: u64,
    completed: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: FormData) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Last completed roadmap, empty until the first completion
    pub fn roadmap(&self) -> &str {
        &self.roadmap
    }

    pub fn has_roadmap(&self) -> bool {
        !self.roadmap.is_empty()
    }

    pub fn completed_generations(&self) -> u64 {
        self.completed
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// The trigger is disabled for as long as a generation is in flight
    pub fn trigger_enabled(&self) -> bool {
        !self.status.is_in_progress()
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.form.update(field, value);
        debug!(field = %field, len = self.form.get(field).len(), "field updated");
    }

    /// Append a typed character if the field's control accepts it
    pub fn type_char(&mut self, field: Field, c: char) -> bool {
        if !field.accepts(c) {
            return false;
        }
        let mut value = self.form.get(field).to_string();
        value.push(c);
        self.update(field, value);
        true
    }

    pub fn backspace(&mut self, field: Field) {
        let mut value = self.form.get(field).to_string();
        if value.pop().is_some() {
            self.update(field, value);
        }
    }

    /// Validate the form and, if complete, move to `InProgress`.
    ///
    /// An empty field raises the alert and returns
    /// [`RoadmapError::Validation`]; status and roadmap are left as they
    /// were.
    pub fn request_generation(&mut self) -> Result<Trigger> {
        if !self.trigger_enabled() {
            debug!("generation requested while in progress; ignored");
            return Ok(Trigger::Disabled);
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "generation rejected: empty fields");
            self.alert = Some(Alert {
                message: VALIDATION_MESSAGE.to_string(),
            });
            return Err(RoadmapError::Validation { missing });
        }

        self.next_ticket += 1;
        self.status = GenerationStatus::InProgress;
        info!(ticket = self.next_ticket, "generation started");
        Ok(Trigger::Started(GenerationTicket {
            id: self.next_ticket,
            form: self.form.clone(),
        }))
    }

    /// Store the text for the in-flight ticket and return to `Idle`.
    ///
    /// Returns false and changes nothing if `ticket_id` is not the
    /// generation currently in flight.
    pub fn complete(&mut self, ticket_id: u64, roadmap: String) -> bool {
        if !self.status.is_in_progress() || ticket_id != self.next_ticket {
            debug!(ticket = ticket_id, "stale generation result dropped");
            return false;
        }
        self.roadmap = roadmap;
        self.status = GenerationStatus::Idle;
        self.completed += 1;
        info!(ticket = ticket_id, "generation completed");
        true
    }

    /// Request, await and complete one generation in place.
    ///
    /// Returns the new roadmap, or `None` when the trigger was disabled.
    pub async fn generate_with(
        &mut self,
        generator: &dyn RoadmapGenerator,
    ) -> Result<Option<String>> {
        match self.request_generation()? {
            Trigger::Started(ticket) => {
                let text = generator.generate(ticket.form).await;
                self.complete(ticket.id, text);
                Ok(Some(self.roadmap.clone()))
            }
            Trigger::Disabled => Ok(None),
        }
    }
}

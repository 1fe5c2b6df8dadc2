//! The asynchronous generation boundary.
//!
//! A [`RoadmapGenerator`] turns a form snapshot into roadmap text at some
//! point in the future. The only implementation is [`SimulatedGenerator`],
//! which sleeps for a fixed delay and then renders the static template.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::form::FormData;
use crate::roadmap::render_roadmap;

/// Default artificial delay before a roadmap is produced
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Whether a generation is currently in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Idle,
    InProgress,
}

impl GenerationStatus {
    pub fn is_in_progress(self) -> bool {
        matches!(self, GenerationStatus::InProgress)
    }
}

#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    /// Produce the roadmap for a validated form snapshot. Cannot fail.
    async fn generate(&self, form: FormData) -> String;
}

/// Stand-in for a real backend: waits, then fills in the template
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    delay: Duration,
}

impl SimulatedGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

#[async_trait]
impl RoadmapGenerator for SimulatedGenerator {
    async fn generate(&self, form: FormData) -> String {
        tokio::time::sleep(self.delay).await;
        render_roadmap(&form)
    }
}

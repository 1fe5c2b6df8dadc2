pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod generation;
pub mod roadmap;
pub mod session;
pub mod tui;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use error::{RoadmapError, VALIDATION_MESSAGE};
pub use form::{Field, FormData};
pub use generation::{GenerationStatus, RoadmapGenerator, SimulatedGenerator};
pub use session::{Session, Trigger};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber is installed
    Off,
}

/// Install the global tracing subscriber.
///
/// The filter comes from `level` (usually `RUST_LOG`), falling back to
/// `career_roadmap=info` when it does not parse.
pub fn init_tracing(level: &str, target: LogTarget<'_>) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("career_roadmap=info"));
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        LogTarget::Off => {}
    }
    Ok(())
}

//! Progress reporting for the loader
//!
//! The loader only talks to the [`Ui`] trait:
//! - Current phase (Preparing, Loading, Committing)
//! - Progress through the category list
//! - Activity log lines

use tracing::{debug, info};

/// Loader phases
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Preparing,
    Loading,
    Committing,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Preparing => write!(f, "Preparing database"),
            Phase::Loading => write!(f, "Loading categories"),
            Phase::Committing => write!(f, "Committing"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Trait for UI implementations - allows both logging and silent/test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>);
    fn log(&mut self, message: impl Into<String>);
}

/// Reports progress as `tracing` events
#[derive(Default)]
pub struct LogUi {
    phase: Option<Phase>,
}

impl LogUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for LogUi {
    fn set_phase(&mut self, phase: Phase) {
        if self.phase != Some(phase) {
            info!(phase = %phase, "phase");
            self.phase = Some(phase);
        }
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        debug!(current, total, "{}", label.into());
    }

    fn log(&mut self, message: impl Into<String>) {
        info!("{}", message.into());
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_progress(&mut self, _current: u64, _total: u64, _label: impl Into<String>) {}
    fn log(&mut self, _message: impl Into<String>) {}
}

//! Phase and row progress reporting for synthesis runs
//!
//! Adapts the synthesis progress callback `(fraction, phase)` to a single
//! indicatif bar. The bar's message tracks the current phase label and its
//! position tracks the completion fraction on a fixed scale, so per-row
//! updates during synthesis render as a smooth fill with an elapsed/ETA
//! readout.

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_SCALE;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg:30} [{bar:30.cyan/blue}] {percent:>3}% (eta {eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Renders synthesis phases on a single progress bar
#[derive(Debug)]
pub struct PhaseReporter {
    bar: ProgressBar,
    phase: String,
}

impl Default for PhaseReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseReporter {
    /// Create a reporter with the phase bar style
    pub fn new() -> Self {
        let bar = ProgressBar::new(PROGRESS_SCALE);
        bar.set_style(PHASE_STYLE.clone());
        Self {
            bar,
            phase: String::new(),
        }
    }

    /// Record a progress callback invocation
    ///
    /// A fraction of zero marks a phase boundary and restarts the fill;
    /// later fractions advance it.
    pub fn update(&mut self, fraction: f32, phase: &str) {
        let clamped = fraction.clamp(0.0, 1.0);
        self.bar.set_position((clamped * PROGRESS_SCALE as f32) as u64);
        if self.phase != phase {
            self.phase = phase.to_string();
            self.bar.set_message(self.phase.clone());
        }
    }

    /// Complete and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

//! Refresh loop
//!
//! One iteration: clear, sample every reader, format, draw, commit, sleep.
//! Reader failures degrade single fields and never stop the loop; display
//! errors after startup are logged and the loop carries on.

use crate::format::format_frame;
use log::{error, info, trace, warn};
use pi_sens_core::{BoxedReader, DisplayConfig, DisplaySurface, SurfaceError};
use pi_sens_types::{DisplayFrame, Snapshot};
use std::time::{Duration, Instant};

/// Where the loop currently is within an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first iteration
    Idle,
    Clearing,
    Sampling,
    Formatting,
    Committing,
    Sleeping,
}

impl Phase {
    /// The phase that follows this one. There is no terminal phase.
    pub fn next(self) -> Phase {
        match self {
            Phase::Idle => Phase::Clearing,
            Phase::Clearing => Phase::Sampling,
            Phase::Sampling => Phase::Formatting,
            Phase::Formatting => Phase::Committing,
            Phase::Committing => Phase::Sleeping,
            Phase::Sleeping => Phase::Clearing,
        }
    }
}

/// Drives a display surface from a set of metric readers
pub struct RefreshLoop<S: DisplaySurface> {
    surface: S,
    readers: Vec<BoxedReader>,
    interval: Duration,
    phase: Phase,
    iterations: u64,
}

impl<S: DisplaySurface> RefreshLoop<S> {
    pub fn new(surface: S, readers: Vec<BoxedReader>, interval: Duration) -> Self {
        Self {
            surface,
            readers,
            interval,
            phase: Phase::Idle,
            iterations: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames committed so far
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Initialize the display and hold the splash for `splash_duration`.
    ///
    /// A failure here means there is nothing to draw on; the caller should
    /// treat it as fatal.
    pub fn start(
        &mut self,
        config: &DisplayConfig,
        splash_duration: Duration,
    ) -> Result<(), SurfaceError> {
        self.surface.initialize(config)?;
        self.surface.clear()?;
        self.surface.show_splash()?;
        info!("Display initialized, splash shown");

        if !splash_duration.is_zero() {
            std::thread::sleep(splash_duration);
        }
        Ok(())
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        info!("Entering refresh loop ({:?} interval)", self.interval);
        loop {
            self.run_once();
            self.sleep();
        }
    }

    /// Run `count` iterations, sleeping between them
    pub fn run_for(&mut self, count: u64) {
        for i in 0..count {
            self.run_once();
            if i + 1 < count {
                self.sleep();
            }
        }
    }

    /// One full iteration up to and including the commit. Returns the
    /// committed frame.
    pub fn run_once(&mut self) -> DisplayFrame {
        let start = Instant::now();

        self.enter(Phase::Clearing);
        if let Err(e) = self.surface.clear() {
            warn!("Failed to clear display: {}", e);
        }

        self.enter(Phase::Sampling);
        let snapshot = self.sample();

        self.enter(Phase::Formatting);
        let frame = match format_frame(&snapshot) {
            Ok(frame) => frame,
            Err(e) => {
                error!("Failed to lay out frame: {}", e);
                DisplayFrame::new()
            }
        };

        self.enter(Phase::Committing);
        for line in frame.lines() {
            if let Err(e) = self.surface.draw_text(line.x, line.y, line.text.as_str()) {
                warn!("Failed to draw {:?} at ({}, {}): {}", line.text.as_str(), line.x, line.y, e);
            }
        }
        if let Err(e) = self.surface.commit() {
            warn!("Failed to commit frame: {}", e);
        }

        self.iterations += 1;
        trace!(
            "Frame {} took {:?}: {}",
            self.iterations,
            start.elapsed(),
            serde_json::to_string(&frame).unwrap_or_default()
        );
        frame
    }

    fn sample(&mut self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        for reader in &mut self.readers {
            snapshot.absorb(reader.read_or_fallback());
        }
        snapshot
    }

    fn sleep(&mut self) {
        self.enter(Phase::Sleeping);
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }

    fn enter(&mut self, phase: Phase) {
        trace!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

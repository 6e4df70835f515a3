//! Surface that records calls instead of drawing

use pi_sens_core::{DisplayConfig, DisplaySurface, SurfaceError};

/// One call made on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Initialize(DisplayConfig),
    Clear,
    DrawText { x: u8, y: u8, text: String },
    Commit,
    Splash,
}

/// Records every call, for checking what the refresh loop does to a display
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    initialized: bool,
    init_failure: Option<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose initialization always fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            init_failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Calls grouped per committed frame: each group runs from the call after
    /// the previous commit up to and including the next commit
    pub fn frames(&self) -> Vec<&[SurfaceCall]> {
        let mut frames = Vec::new();
        let mut start = 0;
        for (i, call) in self.calls.iter().enumerate() {
            if *call == SurfaceCall::Commit {
                frames.push(&self.calls[start..=i]);
                start = i + 1;
            }
        }
        frames
    }

    fn record(&mut self, call: SurfaceCall) -> Result<(), SurfaceError> {
        if !self.initialized {
            return Err(SurfaceError::NotInitialized);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl DisplaySurface for RecordingSurface {
    fn initialize(&mut self, config: &DisplayConfig) -> Result<(), SurfaceError> {
        if let Some(reason) = &self.init_failure {
            return Err(SurfaceError::Init(reason.clone()));
        }
        self.calls.push(SurfaceCall::Initialize(*config));
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Clear)
    }

    fn draw_text(&mut self, x: u8, y: u8, text: &str) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::DrawText {
            x,
            y,
            text: text.to_string(),
        })
    }

    fn commit(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Commit)
    }

    fn show_splash(&mut self) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Splash)
    }
}

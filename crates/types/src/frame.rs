//! Formatted lines and the frame committed to the display

use crate::text::FieldText;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows available on a 48px-high panel with an 8px font
pub const MAX_LINES: usize = 6;

/// Minimum vertical distance between two lines, in pixels
pub const MIN_ROW_SPACING: u8 = 8;

/// Reasons a line cannot be added to a frame
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("line at row {row} overlaps the line at row {existing}")]
    RowCollision { row: u8, existing: u8 },
    #[error("frame has no free line slots")]
    FrameFull,
}

/// One display row: text and where it goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLine {
    /// Pixel column
    pub x: u8,
    /// Pixel row
    pub y: u8,
    pub text: FieldText,
}

impl FormattedLine {
    pub fn new(x: u8, y: u8, text: FieldText) -> Self {
        Self { x, y, text }
    }
}

/// All lines drawn during one refresh, in drawing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    lines: heapless::Vec<FormattedLine, MAX_LINES>,
}

impl DisplayFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, refusing rows that would overlap an existing one
    pub fn push(&mut self, line: FormattedLine) -> Result<(), LayoutError> {
        if let Some(existing) = self
            .lines
            .iter()
            .find(|l| l.y.abs_diff(line.y) < MIN_ROW_SPACING)
        {
            return Err(LayoutError::RowCollision {
                row: line.y,
                existing: existing.y,
            });
        }

        self.lines.push(line).map_err(|_| LayoutError::FrameFull)
    }

    pub fn lines(&self) -> &[FormattedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the line placed at pixel row `y`
    pub fn text_at_row(&self, y: u8) -> Option<&str> {
        self.lines.iter().find(|l| l.y == y).map(|l| l.text.as_str())
    }
}

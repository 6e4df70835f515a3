//! Character-cell emulation of the PCD8544 panel
//!
//! The 84x48 panel with a 6x8 font holds 14 columns by 6 rows of text. This
//! surface keeps that grid as its staging buffer and prints it to any writer
//! on commit, which makes it usable on a desktop or over SSH when no LCD is
//! attached.

use log::{debug, info};
use pi_sens_core::{
    DisplayConfig, DisplaySurface, SurfaceError, GLYPH_HEIGHT, GLYPH_WIDTH, LCD_HEIGHT, LCD_WIDTH,
};
use std::io::Write;

/// Text columns on the panel
pub const TEXT_COLUMNS: usize = (LCD_WIDTH / GLYPH_WIDTH) as usize;

/// Text rows on the panel
pub const TEXT_ROWS: usize = (LCD_HEIGHT / GLYPH_HEIGHT) as usize;

/// Drawn in place of characters the LCD font cannot show
const REPLACEMENT_CHAR: char = '?';

/// ANSI: cursor home, then clear screen
const ANSI_REDRAW: &str = "\x1b[H\x1b[2J";

const SPLASH_LINES: [&str; TEXT_ROWS] = [
    "",
    "   pi-Sens",
    "",
    " Raspberry Pi",
    "  system info",
    "",
];

/// LCD emulation on a text stream
pub struct TerminalSurface<W: Write> {
    out: W,
    grid: [[char; TEXT_COLUMNS]; TEXT_ROWS],
    initialized: bool,
    /// Redraw in place instead of appending frames
    redraw: bool,
    commits: u64,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            grid: [[' '; TEXT_COLUMNS]; TEXT_ROWS],
            initialized: false,
            redraw: false,
            commits: 0,
        }
    }

    /// Move the cursor home before each frame (for interactive terminals)
    pub fn with_redraw(mut self, redraw: bool) -> Self {
        self.redraw = redraw;
        self
    }

    /// Staged rows, trailing blanks removed
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    /// Number of frames pushed to the writer
    pub fn commits(&self) -> u64 {
        self.commits
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ensure_initialized(&self) -> Result<(), SurfaceError> {
        if self.initialized {
            Ok(())
        } else {
            Err(SurfaceError::NotInitialized)
        }
    }

    fn blank(&mut self) {
        self.grid = [[' '; TEXT_COLUMNS]; TEXT_ROWS];
    }

    fn write_frame(&mut self) -> Result<(), SurfaceError> {
        let border = format!("+{}+", "-".repeat(TEXT_COLUMNS));

        if self.redraw {
            self.out.write_all(ANSI_REDRAW.as_bytes())?;
        }
        writeln!(self.out, "{}", border)?;
        for row in &self.grid {
            let line: String = row.iter().collect();
            writeln!(self.out, "|{}|", line)?;
        }
        writeln!(self.out, "{}", border)?;
        self.out.flush()?;

        self.commits += 1;
        Ok(())
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn initialize(&mut self, config: &DisplayConfig) -> Result<(), SurfaceError> {
        config.validate()?;
        info!(
            "Initializing {}x{} LCD emulation (pins {:?}, contrast {})",
            LCD_WIDTH,
            LCD_HEIGHT,
            config.pins.as_array(),
            config.contrast
        );

        self.blank();
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.ensure_initialized()?;
        self.blank();
        Ok(())
    }

    fn draw_text(&mut self, x: u8, y: u8, text: &str) -> Result<(), SurfaceError> {
        self.ensure_initialized()?;
        if x >= LCD_WIDTH || y >= LCD_HEIGHT {
            return Err(SurfaceError::OutOfBounds { x, y });
        }

        let row = usize::from(y / GLYPH_HEIGHT);
        let first_col = usize::from(x / GLYPH_WIDTH);

        // Text running past the right edge is clipped, as on the panel
        for (cell, ch) in self.grid[row][first_col..].iter_mut().zip(text.chars()) {
            *cell = if ch == ' ' || ch.is_ascii_graphic() {
                ch
            } else {
                REPLACEMENT_CHAR
            };
        }

        Ok(())
    }

    fn commit(&mut self) -> Result<(), SurfaceError> {
        self.ensure_initialized()?;
        self.write_frame()
    }

    fn show_splash(&mut self) -> Result<(), SurfaceError> {
        self.ensure_initialized()?;
        debug!("Showing splash screen");

        self.blank();
        for (row, line) in SPLASH_LINES.iter().enumerate() {
            self.draw_text(0, row as u8 * GLYPH_HEIGHT, line)?;
        }
        self.write_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> TerminalSurface<Vec<u8>> {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.initialize(&DisplayConfig::default()).unwrap();
        surface
    }

    #[test]
    fn test_grid_matches_panel() {
        assert_eq!(TEXT_COLUMNS, 14);
        assert_eq!(TEXT_ROWS, 6);
    }

    #[test]
    fn test_use_before_initialize_fails() {
        let mut surface = TerminalSurface::new(Vec::new());
        assert!(matches!(surface.clear(), Err(SurfaceError::NotInitialized)));
        assert!(matches!(
            surface.draw_text(0, 0, "x"),
            Err(SurfaceError::NotInitialized)
        ));
        assert!(matches!(surface.commit(), Err(SurfaceError::NotInitialized)));
    }

    #[test]
    fn test_invalid_config_fails_initialize() {
        let mut surface = TerminalSurface::new(Vec::new());
        let config = DisplayConfig {
            contrast: 255,
            ..DisplayConfig::default()
        };
        assert!(surface.initialize(&config).is_err());
        assert!(matches!(surface.clear(), Err(SurfaceError::NotInitialized)));
    }

    #[test]
    fn test_draw_places_text_by_pixel_position() {
        let mut surface = surface();
        surface.draw_text(0, 0, "Up 2 min").unwrap();
        surface.draw_text(12, 16, "RAM").unwrap();

        let rows = surface.rows();
        assert_eq!(rows[0], "Up 2 min");
        assert_eq!(rows[2], "  RAM");
    }

    #[test]
    fn test_long_text_is_clipped_at_right_edge() {
        let mut surface = surface();
        surface.draw_text(0, 40, "192.168.100.200").unwrap();
        assert_eq!(surface.rows()[5], "192.168.100.20");
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        let mut surface = surface();
        surface.draw_text(0, 0, "45°C\r").unwrap();
        assert_eq!(surface.rows()[0], "45?C?");
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut surface = surface();
        assert!(matches!(
            surface.draw_text(0, 48, "x"),
            Err(SurfaceError::OutOfBounds { x: 0, y: 48 })
        ));
        assert!(matches!(
            surface.draw_text(84, 0, "x"),
            Err(SurfaceError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_clear_blanks_staged_text() {
        let mut surface = surface();
        surface.draw_text(0, 8, "CPU 12%").unwrap();
        surface.clear().unwrap();
        assert!(surface.rows().iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_commit_writes_bordered_frame() {
        let mut surface = surface();
        surface.draw_text(0, 0, "Up 2 min").unwrap();
        surface.commit().unwrap();
        assert_eq!(surface.commits(), 1);

        let output = String::from_utf8(surface.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), TEXT_ROWS + 2);
        assert_eq!(lines[0], "+--------------+");
        assert_eq!(lines[1], "|Up 2 min      |");
        assert_eq!(lines[7], "+--------------+");
    }

    #[test]
    fn test_splash_commits_a_frame() {
        let mut surface = surface();
        surface.show_splash().unwrap();
        assert_eq!(surface.commits(), 1);
        assert_eq!(surface.rows()[1], "   pi-Sens");
    }
}

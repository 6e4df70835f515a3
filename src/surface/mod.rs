//! Display surfaces the refresh loop can draw on

mod recording;
mod terminal;

pub use recording::{RecordingSurface, SurfaceCall};
pub use terminal::{TerminalSurface, TEXT_COLUMNS, TEXT_ROWS};

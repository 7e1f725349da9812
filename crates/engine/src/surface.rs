//! Seams to the outside world: where frames go and where events come from.
//!
//! The loop never talks to a terminal or window directly. A presentation
//! surface paints whole grid cells in palette colors; an input source yields
//! player commands and quit requests.

use std::time::Duration;

use anyhow::Result;

use crate::event::GameEvent;
use crate::types::Rgb;

/// A canvas of `cols * cell_width` by `rows * cell_height` units.
pub trait Surface {
    /// Fill the whole play area with one color.
    fn clear(&mut self, color: Rgb);

    /// Fill the rectangle covering grid cell (`col`, `row`).
    fn fill_cell(&mut self, col: u16, row: u16, color: Rgb);

    /// Centered status text over the play area.
    fn overlay_text(&mut self, _text: &str) {}

    /// Show what was drawn since the last `clear`.
    fn present(&mut self) -> Result<()>;
}

/// A queue of player events.
pub trait InputSource {
    /// Wait at most `timeout` for the next event. `Ok(None)` means the wait
    /// timed out.
    fn poll(&mut self, timeout: Duration) -> Result<Option<GameEvent>>;
}

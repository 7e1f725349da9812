//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Output is a list of row spans. With no previous frame, or after a resize,
//! every row is one span after a screen clear; otherwise only the spans whose
//! glyphs changed are rewritten. Consecutive glyphs of one style go out as a
//! single print.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors};
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::types::Rgb;

pub struct TerminalRenderer {
    out: io::Stdout,
    shown: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            scratch: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide, DisableLineWrap)?;
        self.shown = None;
        Ok(())
    }

    /// Back to the shell's screen and cooked mode.
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            EnableLineWrap,
            Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Show `frame`. Afterwards `frame` holds the previously shown buffer
    /// (or a blank one), ready to be painted again without allocating.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        encode_frame(self.shown.as_ref(), frame, &mut self.scratch)?;
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;

        let previous = self
            .shown
            .replace(std::mem::replace(frame, FrameBuffer::new(0, 0)));
        if let Some(previous) = previous {
            *frame = previous;
        }
        Ok(())
    }
}

/// Encode the commands that turn `prev` (the screen as last shown) into
/// `next`. `None` means the screen content is unknown.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|prev| prev.same_size(next));
    if prev.is_none() {
        queue!(out, Clear(ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        let spans = match prev {
            Some(prev) => changed_spans(prev.row(y), row),
            None => vec![0..row.len()],
        };
        for span in spans {
            queue!(out, MoveTo(span.start as u16, y))?;
            pen.draw(out, &row[span])?;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal runs of positions where the two rows differ.
fn changed_spans(old: &[Glyph], new: &[Glyph]) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = Vec::new();
    for (x, (a, b)) in old.iter().zip(new).enumerate() {
        if a == b {
            continue;
        }
        match spans.last_mut() {
            Some(last) if last.end == x => last.end = x + 1,
            _ => spans.push(x..x + 1),
        }
    }
    spans
}

/// Tracks the terminal's current style so it is only set on change.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
    text: String,
}

impl Pen {
    fn draw(&mut self, out: &mut Vec<u8>, glyphs: &[Glyph]) -> Result<()> {
        for glyph in glyphs {
            if self.style != Some(glyph.style) {
                self.flush(out)?;
                let weight = if glyph.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(
                    out,
                    SetAttribute(weight),
                    SetColors(Colors::new(color(glyph.style.fg), color(glyph.style.bg)))
                )?;
                self.style = Some(glyph.style);
            }
            self.text.push(glyph.ch);
        }
        self.flush(out)
    }

    fn flush(&mut self, out: &mut Vec<u8>) -> Result<()> {
        if !self.text.is_empty() {
            queue!(out, Print(&self.text))?;
            self.text.clear();
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

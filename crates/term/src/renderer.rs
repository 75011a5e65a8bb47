//! Flushes framebuffers to the real terminal.
//!
//! Only glyph runs that changed since the previous frame are written; a size
//! change or [`TerminalRenderer::invalidate`] forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::types::Rgb;

pub struct TerminalRenderer {
    out: io::Stdout,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
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
            prev: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `frame`, then swap it with the previous frame.
    ///
    /// On return `frame` holds stale contents the caller will overwrite with
    /// the next render, so no frame is ever cloned.
    pub fn draw_swap(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.prev.take() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(&prev, frame, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(frame, &mut self.buf)?;
                prev.resize(frame.width(), frame.height());
                prev
            }
            None => {
                encode_full_into(frame, &mut self.buf)?;
                FrameBuffer::new(frame.width(), frame.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut prev, frame);
        self.prev = Some(prev);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full redraw into `out` without touching stdout.
pub fn encode_full_into(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(frame, 0, y, frame.width(), &mut style, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the glyph runs that differ between `prev` and `next`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for y in 0..next.height() {
        let (Some(old), Some(new)) = (prev.row(y), next.row(y)) else {
            continue;
        };
        for (start, len) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(start, y))?;
            encode_run(next, start, y, len, &mut style, out)?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn encode_run(
    frame: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    style: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let glyph = frame.get(x + dx, y).unwrap_or_default();
        if *style != Some(glyph.style) {
            apply_style(out, glyph.style)?;
            *style = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

/// (start, len) runs of differing glyphs in one row
fn changed_runs<'a>(old: &'a [Glyph], new: &'a [Glyph]) -> impl Iterator<Item = (u16, u16)> + 'a {
    let w = new.len().min(old.len());
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < w && old[x] == new[x] {
            x += 1;
        }
        if x >= w {
            return None;
        }
        let start = x;
        while x < w && old[x] != new[x] {
            x += 1;
        }
        Some((start as u16, (x - start) as u16))
    })
}

fn apply_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

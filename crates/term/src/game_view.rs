//! GameView: maps a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Phase, PieceKind, Rgb, BOARD_COLS, BOARD_ROWS};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(90, 90, 100);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);

/// Widest board cell, in terminal columns.
const MAX_CELL_W: u16 = 8;
/// Width of the side panel, border to border.
const PANEL_W: u16 = 14;
/// Preview area inside the NEXT box: 4x2 shape cells.
const PREVIEW_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed in the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
    show_grid: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keep cells roughly square in most fonts.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
            show_grid: true,
        }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=8` columns.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Board frame position for a viewport (border included).
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let w = BOARD_COLS as u16 * self.cell_w + 2;
        let h = BOARD_ROWS as u16 + 2;
        let total_w = w + 1 + PANEL_W;
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        BoardRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::new(TEXT_FG, SCREEN_BG).into_glyph(' '));

        let rect = self.board_rect(viewport);
        let border = CellStyle::new(BORDER_FG, SCREEN_BG);
        fb.draw_box(rect.x, rect.y, rect.w, rect.h, border);

        let empty = CellStyle::new(GRID_FG, BOARD_BG).dim();
        let empty_ch = if self.show_grid { '·' } else { ' ' };
        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_cell(fb, rect, col as u16, row as u16, *kind),
                    None => self.fill_cell(fb, rect, col as u16, row as u16, empty_ch, empty),
                }
            }
        }

        if let Some(piece) = snap.current {
            for (col, row) in snap.piece_cells() {
                self.draw_cell(fb, rect, col as u16, row as u16, piece.kind);
            }
        }

        self.draw_panel(fb, snap, rect);

        match snap.phase {
            Phase::NotStarted => self.draw_overlay(fb, rect, "PRESS ENTER"),
            Phase::Paused => self.draw_overlay(fb, rect, "PAUSED"),
            Phase::Over => self.draw_overlay(fb, rect, "GAME OVER"),
            Phase::Running => {}
        }
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, rect: BoardRect, col: u16, row: u16, kind: PieceKind) {
        let style = CellStyle::new(kind.color(), BOARD_BG).bold();
        self.fill_cell(fb, rect, col, row, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        rect: BoardRect,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let x = rect.x + 1 + col * self.cell_w;
        let y = rect.y + 1 + row;
        fb.fill_rect(x, y, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: BoardRect) {
        let x = rect.x + rect.w + 1;
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::new(TEXT_FG, SCREEN_BG).bold();
        let value = CellStyle::new(TEXT_FG, SCREEN_BG);

        let mut y = rect.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let box_h = PREVIEW_ROWS + 2;
        fb.draw_box(x, y, PANEL_W, box_h, CellStyle::new(BORDER_FG, SCREEN_BG));
        if let Some(next) = snap.next {
            self.draw_preview(fb, x + 1, y + 1, next);
        }
        y += box_h + 1;

        let hint = CellStyle::new(GRID_FG, SCREEN_BG);
        for line in ["←→ move", "↑ rotate", "↓ soft drop", "SPC hard drop", "P pause", "Q quit"] {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }

    /// Shape only, centred in the preview box, never its board position.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: Piece) {
        let inner_w = PANEL_W - 2;
        let shape_w = piece.shape.cols() as u16 * self.cell_w;
        let ox = x + inner_w.saturating_sub(shape_w) / 2;
        let style = CellStyle::new(piece.kind.color(), SCREEN_BG).bold();
        for (dc, dr) in piece.shape.cells() {
            let px = ox + dc as u16 * self.cell_w;
            fb.fill_rect(px, y + dr as u16, self.cell_w, 1, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, rect: BoardRect, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = rect.x + rect.w.saturating_sub(text_w) / 2;
        let y = rect.y + rect.h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, y, text, style);
    }
}

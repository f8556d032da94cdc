//! GameView: maps a composite board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const PANEL_MIN_WIDTH: u16 = 12;
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
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

/// Numbers shown beside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub rows_cleared: u32,
    pub pieces_locked: u32,
    pub games_played: u32,
    pub best_rows_cleared: u32,
    pub soft_drop: bool,
    pub game_over: bool,
}

/// How big one board cell is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSize {
    /// Largest square cell that fits the viewport (two columns per row).
    Fit,
    Fixed { w: u16, h: u16 },
}

/// Board placement computed for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cell_w: u16,
    pub cell_h: u16,
    /// Top-left corner of the border.
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    size: CellSize,
}

impl Default for GameView {
    fn default() -> Self {
        Self { size: CellSize::Fit }
    }
}

impl GameView {
    pub fn new(size: CellSize) -> Self {
        Self { size }
    }

    /// Cell size and board origin for `viewport`.
    ///
    /// In `Fit` mode the cell height is the viewport height (minus the
    /// border) divided by the board rows, reduced if the board would not fit
    /// horizontally, and never below one row.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let (cell_w, cell_h) = match self.size {
            CellSize::Fixed { w, h } => (w.max(1), h.max(1)),
            CellSize::Fit => {
                let by_height = viewport.height.saturating_sub(2) / BOARD_HEIGHT as u16;
                let by_width = viewport.width.saturating_sub(2) / (2 * BOARD_WIDTH as u16);
                let h = by_height.min(by_width).max(1);
                (2 * h, h)
            }
        };

        let frame_w = (BOARD_WIDTH as u16) * cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * cell_h + 2;
        Layout {
            cell_w,
            cell_h,
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        board: &Grid,
        status: &StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, &layout, border);

        for (y, row) in board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(color) => {
                        let style = CellStyle {
                            bold: true,
                            ..CellStyle::new(*color, BOARD_BG)
                        };
                        fill_cell_rect(fb, &layout, x, y, '█', style);
                    }
                    None => {
                        let style = CellStyle {
                            dim: true,
                            ..CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG)
                        };
                        fill_cell_rect(fb, &layout, x, y, '·', style);
                    }
                }
            }
        }

        self.draw_side_panel(fb, status, viewport, &layout);

        if status.game_over {
            draw_overlay_text(fb, &layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Grid, status: &StatusView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, status, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: &StatusView,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = layout.start_y;
        for (name, n) in [
            ("LINES", status.rows_cleared),
            ("PIECES", status.pieces_locked),
            ("GAMES", status.games_played),
            ("BEST", status.best_rows_cleared),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        let speed = if status.soft_drop { "QUICK" } else { "NORMAL" };
        fb.put_str(panel_x, y, speed, value);
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &Layout, style: CellStyle) {
    let (x, y, w, h) = (layout.start_x, layout.start_y, layout.frame_w, layout.frame_h);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn fill_cell_rect(
    fb: &mut FrameBuffer,
    layout: &Layout,
    cell_x: u16,
    cell_y: u16,
    ch: char,
    style: CellStyle,
) {
    let px = layout.start_x + 1 + cell_x * layout.cell_w;
    let py = layout.start_y + 1 + cell_y * layout.cell_h;
    fb.fill_rect(px, py, layout.cell_w, layout.cell_h, ch, style);
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &Layout, text: &str) {
    let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = layout
        .start_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        bold: true,
        ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
    };
    fb.put_str(x, mid_y, text, style);
}

//! Grid renderer: `GridSnapshot` → RGB image.
//!
//! One square block of `cell_px × cell_px` pixels per cell.  Empty cells are
//! light grey; group A and B use the two earth tones below.  Groups beyond B
//! cycle through the group palette.

use image::{Rgb, RgbImage};
use sg_core::{Group, Pos};
use sg_grid::GridSnapshot;

pub const EMPTY_COLOR: Rgb<u8> = Rgb([0xD3, 0xD3, 0xD3]);

pub const GROUP_COLORS: [Rgb<u8>; 2] = [Rgb([0x9E, 0x82, 0x57]), Rgb([0xE6, 0xA0, 0x67])];

pub const GRID_LINE_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// How to draw a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side of one cell in pixels.  Clamped to at least 1.
    pub cell_px:   u32,
    /// Draw a one-pixel line on each cell's top and left edge.  Ignored when
    /// `cell_px < 3`.
    pub show_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_px:   20,
            show_grid: false,
        }
    }
}

/// Fill color for a cell.
pub fn color_for(cell: Option<Group>) -> Rgb<u8> {
    match cell {
        None => EMPTY_COLOR,
        Some(g) => {
            let i = (g.label().max(1) as usize - 1) % GROUP_COLORS.len();
            GROUP_COLORS[i]
        }
    }
}

pub fn render_grid(snapshot: &GridSnapshot, options: &RenderOptions) -> RgbImage {
    let cell = options.cell_px.max(1);
    let side = snapshot.size as u32 * cell;
    let lines = options.show_grid && cell >= 3;

    RgbImage::from_fn(side, side, |x, y| {
        if lines && (x % cell == 0 || y % cell == 0) {
            return GRID_LINE_COLOR;
        }
        let pos = Pos::new((y / cell) as usize, (x / cell) as usize);
        color_for(snapshot.get(pos))
    })
}

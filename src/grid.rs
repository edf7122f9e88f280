//! Module grid storage and excavation.
//!
//! This module provides [`ModuleGrid`], the square boolean grid of dark and
//! light modules that the renderer consumes. The grid is produced by an
//! external QR encoder (any `qrcode::QrCode` converts directly) and treated
//! as read-only from then on: excavating a logo area returns a derived copy
//! and never touches the input.

use log::debug;
use qrcode::{Color, QrCode};

/// A centered rectangular area to blank out of the symbol, in the same
/// units as the logical rendering size (see [`ModuleGrid::excavate`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Excavate {
    pub width: f64,
    pub height: f64,
}

/// A square grid of QR modules, `true` for dark and `false` for light.
///
/// Modules are stored row-major. The side length is one of the standard QR
/// symbol sizes (`4 * version + 17`, so 21 and up) when the grid comes from
/// an encoder, but the type itself only requires squareness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Creates a grid from a side length and row-major module states.
    ///
    /// # Panics
    ///
    /// Panics if `modules.len()` is not `size * size`.
    pub fn new(size: usize, modules: Vec<bool>) -> Self {
        assert_eq!(modules.len(), size * size, "Invalid module count");
        Self { size, modules }
    }

    /// Returns the side length of the grid, in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the state of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules.
    /// Coordinates outside the grid's bounds return `false`; edge modules
    /// therefore read as having fewer dark neighbors, which is what rounds
    /// the symbol's perimeter outward.
    ///
    /// # Arguments
    ///
    /// * `row` - Row index (0 is the top).
    /// * `col` - Column index (0 is the left).
    pub fn module(&self, row: i32, col: i32) -> bool {
        let range = 0..self.size as i32;
        range.contains(&row) &&
            range.contains(&col) &&
            self.modules[row as usize * self.size + col as usize]
    }

    /// Returns the state of the module at the given offset from a cell.
    ///
    /// Offsets that land outside the grid read as light, never as an error.
    pub fn neighbor(&self, row: i32, col: i32, row_offset: i32, col_offset: i32) -> bool {
        self.module(row + row_offset, col + col_offset)
    }

    /// Returns a copy of the grid with a centered rectangle forced light,
    /// leaving room for an overlaid logo.
    ///
    /// The rectangle is given in the same units as `size`, the logical
    /// dimension the whole symbol will be scaled to. It is mapped into
    /// module units, centered, and snapped outward (floor the origin, ceil
    /// the span) so the blanked cells always cover the requested area.
    ///
    /// # Arguments
    ///
    /// * `size` - Logical rendering size of the whole symbol.
    /// * `excavate` - Width and height of the area to blank, in the same
    ///   units as `size`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrsvg::grid::{Excavate, ModuleGrid};
    ///
    /// let grid = ModuleGrid::new(21, vec![true; 21 * 21]);
    /// let excavated = grid.excavate(21.0, Excavate { width: 4.0, height: 4.0 });
    ///
    /// assert!(!excavated.module(10, 10));
    /// assert!(excavated.module(0, 0));
    /// assert!(grid.module(10, 10)); // the input grid is untouched
    /// ```
    pub fn excavate(&self, size: f64, excavate: Excavate) -> ModuleGrid {
        let n = self.size as f64;
        let scale = n / size;

        let w = excavate.width * scale;
        let h = excavate.height * scale;
        let x = n / 2.0 - w / 2.0;
        let y = n / 2.0 - h / 2.0;

        let floor_x = x.floor();
        let floor_y = y.floor();
        let ceil_w = (w + x - floor_x).ceil();
        let ceil_h = (h + y - floor_y).ceil();
        debug!("excavating {}x{} modules at ({}, {})", ceil_w, ceil_h, floor_x, floor_y);

        let col0 = floor_x as i32;
        let row0 = floor_y as i32;
        let col1 = col0 + ceil_w as i32;
        let row1 = row0 + ceil_h as i32;

        let mut modules = self.modules.clone();
        for row in row0.max(0)..row1.min(self.size as i32) {
            for col in col0.max(0)..col1.min(self.size as i32) {
                modules[row as usize * self.size + col as usize] = false;
            }
        }
        ModuleGrid { size: self.size, modules }
    }
}

impl From<&QrCode> for ModuleGrid {
    fn from(code: &QrCode) -> Self {
        let size = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|module| module == Color::Dark)
            .collect();
        Self { size, modules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_grid(size: usize) -> ModuleGrid {
        ModuleGrid::new(size, vec![true; size * size])
    }

    #[test]
    fn test_module_out_of_range_is_light() {
        let grid = dark_grid(21);
        assert!(grid.module(0, 0));
        assert!(grid.module(20, 20));
        assert!(!grid.module(-1, 0));
        assert!(!grid.module(0, -1));
        assert!(!grid.module(21, 0));
        assert!(!grid.module(0, 21));
    }

    #[test]
    fn test_neighbor_offsets() {
        let mut modules = vec![false; 9];
        modules[3 + 2] = true; // (1, 2)
        let grid = ModuleGrid::new(3, modules);
        assert!(grid.neighbor(1, 1, 0, 1));
        assert!(!grid.neighbor(1, 1, 0, -1));
        assert!(grid.neighbor(0, 2, 1, 0));
        assert!(!grid.neighbor(0, 2, -1, 0)); // off the top edge
    }

    #[test]
    fn test_from_qr_code() {
        let code = QrCode::new("hello").unwrap();
        let grid = ModuleGrid::from(&code);
        assert_eq!(grid.size(), 21);
        // The finder pattern corner is always dark.
        assert!(grid.module(0, 0));
    }

    #[test]
    fn test_excavate_blanks_centered_rect() {
        let grid = dark_grid(21);
        let excavated = grid.excavate(21.0, Excavate { width: 4.0, height: 4.0 });
        // A 4x4 request at unit scale snaps to a 5x5 rect with its corner
        // at (8, 8).
        for row in 8..13 {
            for col in 8..13 {
                assert!(!excavated.module(row, col), "({row}, {col}) should be light");
            }
        }
        assert!(excavated.module(7, 8));
        assert!(excavated.module(8, 7));
        assert!(excavated.module(13, 8));
        assert!(excavated.module(8, 13));
    }

    #[test]
    fn test_excavate_covers_requested_area() {
        let grid = dark_grid(25);
        let excavated = grid.excavate(100.0, Excavate { width: 30.0, height: 20.0 });
        // scale 0.25: 7.5x5 modules centered at 12.5 snaps to cols 8..17,
        // rows 10..15.
        assert!(!excavated.module(10, 8));
        assert!(!excavated.module(14, 16));
        assert!(excavated.module(9, 8));
        assert!(excavated.module(15, 8));
        assert!(excavated.module(10, 7));
        assert!(excavated.module(10, 17));
    }

    #[test]
    fn test_excavate_leaves_input_untouched() {
        let grid = dark_grid(21);
        let _ = grid.excavate(21.0, Excavate { width: 4.0, height: 4.0 });
        assert!(grid.module(10, 10));
    }

    #[test]
    fn test_excavate_is_idempotent() {
        let excavate = Excavate { width: 4.0, height: 4.0 };
        let once = dark_grid(21).excavate(21.0, excavate);
        let twice = once.excavate(21.0, excavate);
        assert_eq!(once, twice);
    }
}

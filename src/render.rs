//! Grid traversal and path assembly.
//!
//! [`render`] walks a [`ModuleGrid`] in row-major order, emits one body
//! fragment per dark module outside the three finder-pattern zones, then
//! appends the three eye placements, and returns the concatenated path with
//! the metadata callers need to embed it in an SVG viewport.

use log::debug;

use crate::grid::{Excavate, ModuleGrid};
use crate::shapes::{Neighbors, Reflection, Styles};

/// Options for one render call.
///
/// `size` is the logical dimension the whole symbol will be scaled to and
/// `excavate` the centered area to blank for a logo, in the same units.
/// Excavation runs only when both are present; a half-configured pair is
/// silently skipped (with a debug log), matching the permissive contract of
/// the public API.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    pub size: Option<f64>,
    pub excavate: Option<Excavate>,
    pub styles: Styles,
}

/// Placement metadata for the rendered path: origin plus viewport-relative
/// spans, suitable for an SVG `<rect>`/`<svg>` wrapper.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: String,
    pub height: String,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, width: "100%".to_owned(), height: "100%".to_owned() }
    }
}

/// The result of a render: the combined path, its bounds, and the grid's
/// side length for caller-side scaling (one path unit = one module).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgData {
    pub path: String,
    pub bounds: Bounds,
    pub length: usize,
}

/// Whether `(row, col)` lies in one of the three 7x7 finder-pattern zones
/// (top-left, top-right, bottom-left). The bottom-right corner never hosts
/// a finder pattern.
fn in_finder_zone(row: usize, col: usize, length: usize) -> bool {
    (row < 7 && col < 7) || (row < 7 && col + 8 > length) || (row + 8 > length && col < 7)
}

/// Renders a module grid to a single SVG path string.
///
/// Dark modules outside the finder zones each contribute one body tile;
/// the three eyes are appended last, in top-left, bottom-left, top-right
/// order. Neighbor lookups always read the original grid, so excavation
/// only suppresses ink and never changes how the surviving modules are
/// rounded. The input grid is never mutated and the output is a pure
/// function of the inputs.
///
/// # Example
///
/// ```rust
/// use qrsvg::grid::ModuleGrid;
/// use qrsvg::render::{render, RenderOptions};
///
/// let grid = ModuleGrid::new(21, vec![false; 21 * 21]);
/// let svg = render(&grid, &RenderOptions::default());
///
/// assert_eq!(svg.length, 21);
/// assert!(svg.path.starts_with('M')); // the three eyes are always drawn
/// ```
pub fn render(grid: &ModuleGrid, options: &RenderOptions) -> SvgData {
    let excavated = match (options.size, options.excavate) {
        (Some(size), Some(excavate)) => Some(grid.excavate(size, excavate)),
        (Some(_), None) | (None, Some(_)) => {
            debug!("excavation skipped: needs both a logical size and a rectangle");
            None
        }
        (None, None) => None,
    };
    let drawn = excavated.as_ref().unwrap_or(grid);
    let length = grid.size();

    let mut path = String::new();
    for row in 0..length {
        for col in 0..length {
            if in_finder_zone(row, col, length) {
                continue;
            }
            if !drawn.module(row as i32, col as i32) {
                continue;
            }
            let neighbors = Neighbors::of(grid, row as i32, col as i32);
            let tile = options.styles.body.tile(neighbors);
            path.push_str(&tile.path(col as f64, row as f64));
        }
    }

    for reflection in [Reflection::Identity, Reflection::Vertical, Reflection::Horizontal] {
        path.push_str(&options.styles.eyeball.eyeball_path(reflection, length as f64));
        path.push_str(&options.styles.eyeframe.eyeframe_path(reflection, length as f64));
    }

    SvgData { path, bounds: Bounds::default(), length }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::BodyStyle;

    fn grid_with(size: usize, cells: &[(usize, usize)]) -> ModuleGrid {
        let mut modules = vec![false; size * size];
        for &(row, col) in cells {
            modules[row * size + col] = true;
        }
        ModuleGrid::new(size, modules)
    }

    #[test]
    fn test_finder_zone_predicate() {
        // The three eye corners are zones, the fourth is not.
        assert!(in_finder_zone(0, 0, 21));
        assert!(in_finder_zone(6, 6, 21));
        assert!(in_finder_zone(0, 14, 21));
        assert!(in_finder_zone(14, 0, 21));
        assert!(!in_finder_zone(14, 14, 21));
        assert!(!in_finder_zone(20, 20, 21));
        // Just outside each zone.
        assert!(!in_finder_zone(7, 0, 21));
        assert!(!in_finder_zone(0, 7, 21));
        assert!(!in_finder_zone(0, 13, 21));
        assert!(!in_finder_zone(13, 0, 21));
    }

    #[test]
    fn test_dark_zone_cells_emit_no_body_fragment() {
        let on_in_zones = grid_with(21, &[(0, 0), (3, 17), (17, 3)]);
        let empty = grid_with(21, &[]);
        let zoned = render(&on_in_zones, &RenderOptions::default());
        let bare = render(&empty, &RenderOptions::default());
        assert_eq!(zoned.path, bare.path);
    }

    #[test]
    fn test_render_is_deterministic() {
        let grid = grid_with(21, &[(10, 10), (10, 11), (12, 7)]);
        let options = RenderOptions {
            size: Some(21.0),
            excavate: Some(Excavate { width: 4.0, height: 4.0 }),
            styles: Styles::default(),
        };
        assert_eq!(render(&grid, &options), render(&grid, &options));
    }

    #[test]
    fn test_partial_excavation_options_render_unchanged() {
        let grid = grid_with(21, &[(10, 10), (10, 11)]);
        let plain = render(&grid, &RenderOptions::default());
        let size_only = render(
            &grid,
            &RenderOptions { size: Some(21.0), ..RenderOptions::default() },
        );
        let rect_only = render(
            &grid,
            &RenderOptions {
                excavate: Some(Excavate { width: 4.0, height: 4.0 }),
                ..RenderOptions::default()
            },
        );
        assert_eq!(plain.path, size_only.path);
        assert_eq!(plain.path, rect_only.path);
    }

    #[test]
    fn test_excavation_keeps_original_neighbor_shading() {
        // (10, 8) falls inside the excavated rectangle, (10, 7) just
        // outside it. The survivor must still round as if its excavated
        // right neighbor were present.
        let grid = grid_with(21, &[(10, 7), (10, 8)]);
        let options = RenderOptions {
            size: Some(21.0),
            excavate: Some(Excavate { width: 4.0, height: 4.0 }),
            styles: Styles::default(),
        };
        let svg = render(&grid, &options);
        // Side-rounded-left tile at column 7, row 10.
        assert!(svg.path.contains("M7.5 10h0.5v1h-0.5a0.5 0.5 0 0 1 0 -1z"));
        // Not the isolated-module circle.
        assert!(!svg.path.contains("M7.9 10.45"));
        // The excavated cell emits nothing at its origin.
        assert!(!svg.path.contains("M8 10"));
    }

    #[test]
    fn test_body_style_square_uses_plain_tiles() {
        let grid = grid_with(21, &[(10, 10)]);
        let options = RenderOptions {
            styles: Styles { body: BodyStyle::Square, ..Styles::default() },
            ..RenderOptions::default()
        };
        let svg = render(&grid, &options);
        assert!(svg.path.contains("M10 10h1v1h-1z"));
    }

    #[test]
    fn test_eyes_drawn_in_fixed_order() {
        let svg = render(&grid_with(21, &[]), &RenderOptions::default());
        // Top-left eyeball first, then its frame, then the two reflected
        // placements.
        assert!(svg.path.starts_with("M4 2"));
        let bottom_left = svg.path.find("M4 19").expect("vertical flip present");
        let top_right = svg.path.find("M17 2").expect("horizontal flip present");
        assert!(bottom_left < top_right);
    }

    #[test]
    fn test_bounds_and_length() {
        let svg = render(&grid_with(25, &[]), &RenderOptions::default());
        assert_eq!(svg.length, 25);
        assert_eq!(svg.bounds.x, 0.0);
        assert_eq!(svg.bounds.y, 0.0);
        assert_eq!(svg.bounds.width, "100%");
        assert_eq!(svg.bounds.height, "100%");
    }
}

//! The shape catalog: body tile fragments and finder-pattern ("eye")
//! templates.
//!
//! Every fragment is a self-contained closed SVG subpath in a coordinate
//! frame where one module is one unit square, so fragments compose by plain
//! concatenation. Body tiles are anchored at a cell origin; eye templates
//! are drawn once for the top-left corner and moved to the other two
//! corners by [`Reflection`].

use crate::grid::ModuleGrid;

/// Dark/light state of a cell's four axis-aligned neighbors.
///
/// Neighbors outside the grid always read as light, which is what makes
/// edge and corner modules round outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Neighbors {
    /// Reads the four neighbors of `(row, col)` from the grid.
    pub fn of(grid: &ModuleGrid, row: i32, col: i32) -> Self {
        Self {
            left: grid.module(row, col - 1),
            right: grid.module(row, col + 1),
            top: grid.module(row - 1, col),
            bottom: grid.module(row + 1, col),
        }
    }

    fn count(&self) -> u32 {
        self.left as u32 + self.right as u32 + self.top as u32 + self.bottom as u32
    }
}

/// A corner of the unit cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// A side of the unit cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// The tile drawn for one dark module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    /// A filled disk inscribed in the cell (radius 0.45).
    Circle,
    /// The full unit square.
    Square,
    /// A unit square with one corner rounded off (quarter circle, radius
    /// 0.5).
    CornerRounded(Corner),
    /// A unit square with one side replaced by a half circle (radius 0.5).
    SideRounded(Side),
}

impl Tile {
    /// Selects the tile for a cell from its neighbor states.
    ///
    /// An isolated module becomes a circle. A module with more than two
    /// dark neighbors, or with dark neighbors on opposite sides, stays a
    /// plain square since no single rounding direction is meaningful. With
    /// exactly two adjacent dark neighbors the diagonally opposite corner
    /// is rounded, and with exactly one the opposite side is.
    pub fn from_neighbors(neighbors: Neighbors) -> Self {
        let Neighbors { left, right, top, bottom } = neighbors;
        match neighbors.count() {
            0 => Tile::Circle,
            count if count > 2 => Tile::Square,
            _ if (left && right) || (top && bottom) => Tile::Square,
            2 => Tile::CornerRounded(if left && top {
                Corner::BottomRight
            } else if top && right {
                Corner::BottomLeft
            } else if right && bottom {
                Corner::TopLeft
            } else {
                Corner::TopRight
            }),
            _ => Tile::SideRounded(if top {
                Side::Bottom
            } else if right {
                Side::Left
            } else if bottom {
                Side::Top
            } else {
                Side::Right
            }),
        }
    }

    /// Emits the tile's path fragment anchored at the cell origin `(x, y)`.
    pub fn path(&self, x: f64, y: f64) -> String {
        match self {
            Tile::Circle => format!(
                "M{} {}a0.45 0.45 0 1 0 -0.9 0a0.45 0.45 0 1 0 0.9 0z",
                num(x + 0.9),
                num(y + 0.45)
            ),
            Tile::Square => format!("M{} {}h1v1h-1z", num(x), num(y)),
            Tile::CornerRounded(Corner::TopLeft) => format!(
                "M{} {}h-0.5a0.5 0.5 0 0 0 -0.5 0.5v0.5h1z",
                num(x + 1.0),
                num(y)
            ),
            Tile::CornerRounded(Corner::TopRight) => format!(
                "M{} {}v1h1v-0.5a0.5 0.5 0 0 0 -0.5 -0.5z",
                num(x),
                num(y)
            ),
            Tile::CornerRounded(Corner::BottomRight) => format!(
                "M{} {}h1v0.5a0.5 0.5 0 0 1 -0.5 0.5h-0.5z",
                num(x),
                num(y)
            ),
            Tile::CornerRounded(Corner::BottomLeft) => format!(
                "M{} {}h1v1h-0.5a0.5 0.5 0 0 1 -0.5 -0.5z",
                num(x),
                num(y)
            ),
            Tile::SideRounded(Side::Left) => format!(
                "M{} {}h0.5v1h-0.5a0.5 0.5 0 0 1 0 -1z",
                num(x + 0.5),
                num(y)
            ),
            Tile::SideRounded(Side::Right) => format!(
                "M{} {}v1h0.5a0.5 0.5 0 0 0 0 -1z",
                num(x),
                num(y)
            ),
            Tile::SideRounded(Side::Top) => format!(
                "M{} {}v0.5h1v-0.5a0.5 0.5 0 0 0 -1 0z",
                num(x),
                num(y + 0.5)
            ),
            Tile::SideRounded(Side::Bottom) => format!(
                "M{} {}h1v0.5a0.5 0.5 0 0 1 -1 0z",
                num(x),
                num(y)
            ),
        }
    }
}

/// Rendering style of the symbol body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BodyStyle {
    /// Every dark module is the inscribed disk.
    Circle,
    /// Every dark module is the plain unit square.
    Square,
    /// Neighbor-aware rounding (the default).
    #[default]
    Rounded,
}

impl BodyStyle {
    /// Picks the tile for one module under this style.
    pub fn tile(&self, neighbors: Neighbors) -> Tile {
        match self {
            BodyStyle::Circle => Tile::Circle,
            BodyStyle::Square => Tile::Square,
            BodyStyle::Rounded => Tile::from_neighbors(neighbors),
        }
    }
}

/// Rendering style of an eyeball or eyeframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EyeStyle {
    /// Plain axis-aligned square geometry.
    Square,
    /// Rounded corners (the default).
    #[default]
    Rounded,
}

/// Per-region style selection for a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Styles {
    pub body: BodyStyle,
    pub eyeball: EyeStyle,
    pub eyeframe: EyeStyle,
}

/// The affine reflection that moves the top-left eye template to one of the
/// three finder-pattern corners.
///
/// All three eyes share one template per region; the bottom-left and
/// top-right placements are the same geometry with one axis mirrored about
/// the grid, never redrawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reflection {
    /// Top-left corner: the template as drawn.
    Identity,
    /// Bottom-left corner: `y` becomes `length - y`.
    Vertical,
    /// Top-right corner: `x` becomes `length - x`.
    Horizontal,
}

impl Reflection {
    fn apply(&self, length: f64, x: f64, y: f64) -> (f64, f64) {
        match self {
            Reflection::Identity => (x, y),
            Reflection::Vertical => (x, length - y),
            Reflection::Horizontal => (length - x, y),
        }
    }

    /// A mirror reverses orientation, so arc sweep flags invert.
    fn inverts_sweep(&self) -> bool {
        !matches!(self, Reflection::Identity)
    }
}

/// One command of an eye template, in absolute top-left-corner coordinates.
#[derive(Clone, Copy, Debug)]
enum Segment {
    Move(f64, f64),
    Line(f64, f64),
    Arc { r: f64, sweep: bool, x: f64, y: f64 },
    Close,
}

/// Rounded square covering cells (2,2)..(5,5), corner radius 1.
const ROUNDED_EYEBALL: &[Segment] = &[
    Segment::Move(4.0, 2.0),
    Segment::Line(3.0, 2.0),
    Segment::Arc { r: 1.0, sweep: false, x: 2.0, y: 3.0 },
    Segment::Line(2.0, 4.0),
    Segment::Arc { r: 1.0, sweep: false, x: 3.0, y: 5.0 },
    Segment::Line(4.0, 5.0),
    Segment::Arc { r: 1.0, sweep: false, x: 5.0, y: 4.0 },
    Segment::Line(5.0, 3.0),
    Segment::Arc { r: 1.0, sweep: false, x: 4.0, y: 2.0 },
    Segment::Close,
];

/// Rounded 7x7 ring: outer contour clockwise with radius-2 corners, inner
/// contour counter-clockwise with radius-1 corners, so the ring fills under
/// both nonzero and evenodd rules.
const ROUNDED_EYEFRAME: &[Segment] = &[
    Segment::Move(0.0, 2.0),
    Segment::Arc { r: 2.0, sweep: true, x: 2.0, y: 0.0 },
    Segment::Line(5.0, 0.0),
    Segment::Arc { r: 2.0, sweep: true, x: 7.0, y: 2.0 },
    Segment::Line(7.0, 5.0),
    Segment::Arc { r: 2.0, sweep: true, x: 5.0, y: 7.0 },
    Segment::Line(2.0, 7.0),
    Segment::Arc { r: 2.0, sweep: true, x: 0.0, y: 5.0 },
    Segment::Line(0.0, 2.0),
    Segment::Close,
    Segment::Move(2.0, 1.0),
    Segment::Arc { r: 1.0, sweep: false, x: 1.0, y: 2.0 },
    Segment::Line(1.0, 5.0),
    Segment::Arc { r: 1.0, sweep: false, x: 2.0, y: 6.0 },
    Segment::Line(5.0, 6.0),
    Segment::Arc { r: 1.0, sweep: false, x: 6.0, y: 5.0 },
    Segment::Line(6.0, 2.0),
    Segment::Arc { r: 1.0, sweep: false, x: 5.0, y: 1.0 },
    Segment::Line(2.0, 1.0),
    Segment::Close,
];

/// Plain square covering cells (2,2)..(5,5).
const SQUARE_EYEBALL: &[Segment] = &[
    Segment::Move(2.0, 2.0),
    Segment::Line(5.0, 2.0),
    Segment::Line(5.0, 5.0),
    Segment::Line(2.0, 5.0),
    Segment::Close,
];

/// Plain 7x7 ring, outer clockwise and inner counter-clockwise.
const SQUARE_EYEFRAME: &[Segment] = &[
    Segment::Move(0.0, 0.0),
    Segment::Line(7.0, 0.0),
    Segment::Line(7.0, 7.0),
    Segment::Line(0.0, 7.0),
    Segment::Close,
    Segment::Move(1.0, 1.0),
    Segment::Line(1.0, 6.0),
    Segment::Line(6.0, 6.0),
    Segment::Line(6.0, 1.0),
    Segment::Close,
];

impl EyeStyle {
    /// Emits the inner eyeball fragment placed by `reflection` on a grid of
    /// side `length`.
    pub fn eyeball_path(&self, reflection: Reflection, length: f64) -> String {
        let template = match self {
            EyeStyle::Square => SQUARE_EYEBALL,
            EyeStyle::Rounded => ROUNDED_EYEBALL,
        };
        write_segments(template, reflection, length)
    }

    /// Emits the outer eyeframe fragment placed by `reflection` on a grid
    /// of side `length`.
    pub fn eyeframe_path(&self, reflection: Reflection, length: f64) -> String {
        let template = match self {
            EyeStyle::Square => SQUARE_EYEFRAME,
            EyeStyle::Rounded => ROUNDED_EYEFRAME,
        };
        write_segments(template, reflection, length)
    }
}

fn write_segments(segments: &[Segment], reflection: Reflection, length: f64) -> String {
    let mut path = String::new();
    for segment in segments {
        match *segment {
            Segment::Move(x, y) => {
                let (x, y) = reflection.apply(length, x, y);
                path.push_str(&format!("M{} {}", num(x), num(y)));
            }
            Segment::Line(x, y) => {
                let (x, y) = reflection.apply(length, x, y);
                path.push_str(&format!("L{} {}", num(x), num(y)));
            }
            Segment::Arc { r, sweep, x, y } => {
                let (x, y) = reflection.apply(length, x, y);
                let sweep = sweep != reflection.inverts_sweep();
                path.push_str(&format!(
                    "A{0} {0} 0 0 {1} {2} {3}",
                    num(r),
                    sweep as u8,
                    num(x),
                    num(y)
                ));
            }
            Segment::Close => path.push('Z'),
        }
    }
    path
}

/// Formats a coordinate without a trailing `.0` on whole values.
fn num(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

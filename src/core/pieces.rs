//! Shape catalog and SRS rotation engine
//!
//! Shapes are 4x4 occupancy grids whose cells carry the shape's index key.
//! The four orientation grids per shape are precomputed at compile time by
//! repeated 90-degree clockwise rotation of the spawn grid. Wall kicks follow
//! the Super Rotation System: <https://tetris.wiki/SRS>, expressed here with
//! y growing downward.

use crate::types::{KickClass, Rotation, Shape, Spin};

/// A 4x4 occupancy grid; non-zero cells carry the shape index.
pub type ShapeGrid = [[u8; 4]; 4];

/// Spawn-orientation grids, indexed by shape discriminant.
const BASE_GRIDS: [ShapeGrid; 8] = [
    // Empty
    [
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    // Z
    [
        [0, 0, 0, 0],
        [0, 1, 1, 0],
        [0, 0, 1, 1],
        [0, 0, 0, 0],
    ],
    // S
    [
        [0, 0, 0, 0],
        [0, 0, 2, 2],
        [0, 2, 2, 0],
        [0, 0, 0, 0],
    ],
    // J
    [
        [0, 0, 0, 0],
        [0, 3, 0, 0],
        [0, 3, 3, 3],
        [0, 0, 0, 0],
    ],
    // O
    [
        [0, 0, 0, 0],
        [0, 4, 4, 0],
        [0, 4, 4, 0],
        [0, 0, 0, 0],
    ],
    // T
    [
        [0, 0, 0, 0],
        [0, 0, 5, 0],
        [0, 5, 5, 5],
        [0, 0, 0, 0],
    ],
    // I
    [
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [6, 6, 6, 6],
        [0, 0, 0, 0],
    ],
    // L
    [
        [0, 0, 0, 0],
        [0, 0, 0, 7],
        [0, 7, 7, 7],
        [0, 0, 0, 0],
    ],
];

/// Rotate a grid 90 degrees clockwise: input (i, j) lands at (j, 3-i).
pub const fn rotate_grid_cw(grid: ShapeGrid) -> ShapeGrid {
    let mut out = [[0u8; 4]; 4];
    let mut i = 0;
    while i < 4 {
        let mut j = 0;
        while j < 4 {
            out[j][3 - i] = grid[i][j];
            j += 1;
        }
        i += 1;
    }
    out
}

const fn build_orientations() -> [[ShapeGrid; 4]; 8] {
    let mut table = [[[[0u8; 4]; 4]; 4]; 8];
    let mut shape = 0;
    while shape < 8 {
        let mut grid = BASE_GRIDS[shape];
        let mut orientation = 0;
        while orientation < 4 {
            table[shape][orientation] = grid;
            grid = rotate_grid_cw(grid);
            orientation += 1;
        }
        shape += 1;
    }
    table
}

/// All orientation grids, `[shape][orientation]`.
const ORIENTATIONS: [[ShapeGrid; 4]; 8] = build_orientations();

/// The occupancy grid for a shape at a given rotation.
pub fn grid(shape: Shape, rotation: Rotation) -> &'static ShapeGrid {
    &ORIENTATIONS[shape.index() as usize][rotation.index()]
}

/// SRS wall kick data: one row of 5 `(dx, dy)` offsets per
/// (from-orientation, direction) transition, 8 rows per class.
pub type KickTable = [[(i8, i8); 5]; 8];

/// O rotates in place: identity offset only.
const O_KICKS: KickTable = [[(0, 0); 5]; 8];

/// Kick table shared by J, L, S, T and Z.
const JLSTZ_KICKS: KickTable = [
    // N->E (clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // N->W (counter-clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // E->N (counter-clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->S (clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // S->E (counter-clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // S->W (clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // W->S (counter-clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // W->N (clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// Kick table for I, which kicks further along its long axis.
const I_KICKS: KickTable = [
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // N->W
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // E->N
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // S->E
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // W->S
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

pub fn kick_table(class: KickClass) -> &'static KickTable {
    match class {
        KickClass::Jlstz => &JLSTZ_KICKS,
        KickClass::I => &I_KICKS,
        KickClass::O => &O_KICKS,
    }
}

/// Row index for a (from-orientation, direction) transition.
fn kick_index(from: Rotation, spin: Spin) -> usize {
    match (from, spin) {
        (Rotation::North, Spin::Cw) => 0,
        (Rotation::North, Spin::Ccw) => 1,
        (Rotation::East, Spin::Ccw) => 2,
        (Rotation::East, Spin::Cw) => 3,
        (Rotation::South, Spin::Ccw) => 4,
        (Rotation::South, Spin::Cw) => 5,
        (Rotation::West, Spin::Ccw) => 6,
        (Rotation::West, Spin::Cw) => 7,
    }
}

/// Resolve a rotation with wall kicks.
///
/// Offsets from the class's kick row are tried in table order; the first
/// candidate position accepted by `fits` wins. Returns the new rotation and
/// the applied `(dx, dy)` kick, or `None` if every offset is rejected — the
/// caller's piece state is never touched, so a failed rotation has no
/// side effects.
pub fn attempt_rotate(
    shape: Shape,
    rotation: Rotation,
    x: i8,
    y: i8,
    spin: Spin,
    fits: impl Fn(Shape, Rotation, i8, i8) -> bool,
) -> Option<(Rotation, (i8, i8))> {
    let target = match spin {
        Spin::Cw => rotation.rotate_cw(),
        Spin::Ccw => rotation.rotate_ccw(),
    };

    let kicks = &kick_table(shape.kick_class())[kick_index(rotation, spin)];
    for &(dx, dy) in kicks.iter() {
        if fits(shape, target, x + dx, y + dy) {
            return Some((target, (dx, dy)));
        }
    }

    None
}

//! The [`CellGrid`] type — per-map traversal costs with obstacle semantics.
//!
//! A `CellGrid` stores one integer cost per cell, indexed `[x][y]`. The
//! sentinel [`OBSTACLE`] marks impassable cells, and every coordinate outside
//! the grid reads as [`OBSTACLE`] too, so the map behaves as if surrounded by
//! an infinite wall.

use std::fmt;

use crate::geom::Point;

/// Cost sentinel marking an impassable cell.
///
/// Any read outside the grid bounds also yields this value. Real traversal
/// costs live in `[0, OBSTACLE)` and are expected to stay well below the
/// bound in practice.
pub const OBSTACLE: i32 = (1 << 26) - 1;

/// A 2D grid of traversal costs for one named map.
///
/// The grid starts uninitialized: every cell reads [`OBSTACLE`] until
/// [`init`](CellGrid::init) supplies cell data. [`clear`](CellGrid::clear)
/// returns it to that state while keeping dimensions and the diagonal
/// movement flag.
#[derive(Debug, Clone)]
pub struct CellGrid {
    hcells: i32,
    vcells: i32,
    /// Column-major storage (`[x][y]`); empty while uninitialized.
    cells: Vec<i32>,
    diagonals: bool,
}

impl CellGrid {
    /// Create an uninitialized grid. Diagonal movement defaults to enabled.
    pub fn new() -> Self {
        Self {
            hcells: 0,
            vcells: 0,
            cells: Vec::new(),
            diagonals: true,
        }
    }

    /// Replace the entire grid.
    ///
    /// `data` must hold `hcells` columns of `vcells` costs each (`data[x][y]`
    /// layout). Shapes are validated; cost *values* are trusted as-is, so
    /// out-of-range costs produce undefined search results rather than an
    /// error.
    pub fn init(
        &mut self,
        hcells: i32,
        vcells: i32,
        data: Vec<Vec<i32>>,
        diagonals: bool,
    ) -> Result<(), GridError> {
        if hcells <= 0 || vcells <= 0 {
            return Err(GridError::Dimensions { hcells, vcells });
        }
        if data.len() != hcells as usize {
            return Err(GridError::ColumnCount {
                expected: hcells,
                found: data.len(),
            });
        }
        for (x, column) in data.iter().enumerate() {
            if column.len() != vcells as usize {
                return Err(GridError::ColumnLength {
                    column: x,
                    expected: vcells,
                    found: column.len(),
                });
            }
        }
        self.hcells = hcells;
        self.vcells = vcells;
        self.cells = data.into_iter().flatten().collect();
        self.diagonals = diagonals;
        Ok(())
    }

    /// Overwrite the sub-rectangle `[origin_x, origin_x+width) ×
    /// [origin_y, origin_y+height)` from `patch` (`patch[x][y]` layout).
    ///
    /// A no-op on an uninitialized grid. The rectangle must lie inside the
    /// grid and `patch` must match its shape.
    pub fn update_region(
        &mut self,
        origin_x: i32,
        origin_y: i32,
        width: i32,
        height: i32,
        patch: &[Vec<i32>],
    ) -> Result<(), GridError> {
        if !self.is_initialized() {
            return Ok(());
        }
        if origin_x < 0
            || origin_y < 0
            || width < 0
            || height < 0
            || i64::from(origin_x) + i64::from(width) > i64::from(self.hcells)
            || i64::from(origin_y) + i64::from(height) > i64::from(self.vcells)
        {
            return Err(GridError::RegionBounds {
                origin: Point::new(origin_x, origin_y),
                width,
                height,
                hcells: self.hcells,
                vcells: self.vcells,
            });
        }
        if patch.len() != width as usize {
            return Err(GridError::ColumnCount {
                expected: width,
                found: patch.len(),
            });
        }
        for (x, column) in patch.iter().enumerate() {
            if column.len() != height as usize {
                return Err(GridError::ColumnLength {
                    column: x,
                    expected: height,
                    found: column.len(),
                });
            }
        }
        for (x, column) in patch.iter().enumerate() {
            let start = self.idx(origin_x + x as i32, origin_y);
            self.cells[start..start + height as usize].copy_from_slice(column);
        }
        Ok(())
    }

    /// Discard cell contents, returning the grid to the uninitialized state.
    ///
    /// Dimensions and the diagonal flag are untouched; a subsequent path
    /// query reports "no path" rather than an error.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Enable or disable diagonal (8-way) movement.
    pub fn set_diagonals(&mut self, enabled: bool) {
        self.diagonals = enabled;
    }

    /// Whether diagonal movement is enabled.
    #[inline]
    pub fn diagonals(&self) -> bool {
        self.diagonals
    }

    /// Horizontal extent in cells.
    #[inline]
    pub fn hcells(&self) -> i32 {
        self.hcells
    }

    /// Vertical extent in cells.
    #[inline]
    pub fn vcells(&self) -> i32 {
        self.vcells
    }

    /// Whether cell data is present.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.hcells && p.y < self.vcells
    }

    /// The cost at `(x, y)`, or [`OBSTACLE`] outside bounds or while
    /// uninitialized.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> i32 {
        if self.cells.is_empty() || x < 0 || y < 0 || x >= self.hcells || y >= self.vcells {
            return OBSTACLE;
        }
        self.cells[self.idx(x, y)]
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        x as usize * self.vcells as usize + y as usize
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors reported for malformed grid input.
#[derive(Debug, Clone)]
pub enum GridError {
    /// Grid dimensions were zero or negative.
    Dimensions { hcells: i32, vcells: i32 },
    /// Cell data held the wrong number of columns.
    ColumnCount { expected: i32, found: usize },
    /// One column held the wrong number of cells.
    ColumnLength {
        column: usize,
        expected: i32,
        found: usize,
    },
    /// An update rectangle fell outside the grid.
    RegionBounds {
        origin: Point,
        width: i32,
        height: i32,
        hcells: i32,
        vcells: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { hcells, vcells } => {
                write!(f, "grid dimensions must be positive, got {hcells}x{vcells}")
            }
            Self::ColumnCount { expected, found } => {
                write!(f, "cell data has {found} columns, expected {expected}")
            }
            Self::ColumnLength {
                column,
                expected,
                found,
            } => {
                write!(f, "cell column {column} has {found} entries, expected {expected}")
            }
            Self::RegionBounds {
                origin,
                width,
                height,
                hcells,
                vcells,
            } => {
                write!(
                    f,
                    "update region {width}x{height} at {origin} falls outside the {hcells}x{vcells} grid"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    /// `hcells` columns of `vcells` zeros.
    fn zeros(hcells: usize, vcells: usize) -> Vec<Vec<i32>> {
        vec![vec![0; vcells]; hcells]
    }

    #[test]
    fn init_and_read() {
        let mut grid = CellGrid::new();
        let mut data = zeros(3, 2);
        data[2][1] = 7;
        grid.init(3, 2, data, false).unwrap();
        assert!(grid.is_initialized());
        assert_eq!(grid.hcells(), 3);
        assert_eq!(grid.vcells(), 2);
        assert!(!grid.diagonals());
        assert_eq!(grid.at(0, 0), 0);
        assert_eq!(grid.at(2, 1), 7);
    }

    #[test]
    fn out_of_bounds_reads_obstacle() {
        let mut grid = CellGrid::new();
        grid.init(3, 3, zeros(3, 3), true).unwrap();
        assert_eq!(grid.at(-1, 0), OBSTACLE);
        assert_eq!(grid.at(0, -1), OBSTACLE);
        assert_eq!(grid.at(3, 0), OBSTACLE);
        assert_eq!(grid.at(0, 3), OBSTACLE);
        assert!(!grid.contains(Point::new(3, 0)));
        assert!(grid.contains(Point::new(2, 2)));
    }

    #[test]
    fn uninitialized_reads_obstacle() {
        let grid = CellGrid::new();
        assert!(!grid.is_initialized());
        assert_eq!(grid.at(0, 0), OBSTACLE);
    }

    #[test]
    fn new_defaults_to_diagonals() {
        assert!(CellGrid::new().diagonals());
    }

    #[test]
    fn init_rejects_bad_shapes() {
        let mut grid = CellGrid::new();
        assert!(matches!(
            grid.init(0, 3, vec![], true),
            Err(GridError::Dimensions { .. })
        ));
        assert!(matches!(
            grid.init(3, 3, zeros(2, 3), true),
            Err(GridError::ColumnCount { .. })
        ));
        assert!(matches!(
            grid.init(3, 3, vec![vec![0; 3], vec![0; 2], vec![0; 3]], true),
            Err(GridError::ColumnLength { column: 1, .. })
        ));
        // A failed init leaves the grid uninitialized.
        assert!(!grid.is_initialized());
    }

    #[test]
    fn update_region_overwrites_sub_rectangle() {
        let mut grid = CellGrid::new();
        grid.init(4, 4, zeros(4, 4), true).unwrap();
        let patch = vec![vec![5, 6], vec![7, 8]];
        grid.update_region(1, 2, 2, 2, &patch).unwrap();
        assert_eq!(grid.at(1, 2), 5);
        assert_eq!(grid.at(1, 3), 6);
        assert_eq!(grid.at(2, 2), 7);
        assert_eq!(grid.at(2, 3), 8);
        // Cells outside the rectangle keep their value.
        assert_eq!(grid.at(0, 2), 0);
        assert_eq!(grid.at(3, 3), 0);
        assert_eq!(grid.at(1, 1), 0);
    }

    #[test]
    fn update_region_before_init_is_a_no_op() {
        let mut grid = CellGrid::new();
        grid.update_region(0, 0, 2, 2, &zeros(2, 2)).unwrap();
        assert!(!grid.is_initialized());
    }

    #[test]
    fn update_region_rejects_bad_input() {
        let mut grid = CellGrid::new();
        grid.init(4, 4, zeros(4, 4), true).unwrap();
        assert!(matches!(
            grid.update_region(3, 3, 2, 2, &zeros(2, 2)),
            Err(GridError::RegionBounds { .. })
        ));
        assert!(matches!(
            grid.update_region(-1, 0, 2, 2, &zeros(2, 2)),
            Err(GridError::RegionBounds { .. })
        ));
        assert!(matches!(
            grid.update_region(0, 0, 2, 2, &zeros(3, 2)),
            Err(GridError::ColumnCount { .. })
        ));
        assert!(matches!(
            grid.update_region(0, 0, 2, 2, &zeros(2, 3)),
            Err(GridError::ColumnLength { .. })
        ));
    }

    #[test]
    fn clear_keeps_dimensions_and_flag() {
        let mut grid = CellGrid::new();
        grid.init(3, 3, zeros(3, 3), false).unwrap();
        grid.clear();
        assert!(!grid.is_initialized());
        assert_eq!(grid.hcells(), 3);
        assert_eq!(grid.vcells(), 3);
        assert!(!grid.diagonals());
        assert_eq!(grid.at(1, 1), OBSTACLE);
        // Re-init brings it back.
        grid.init(2, 2, zeros(2, 2), true).unwrap();
        assert_eq!(grid.at(1, 1), 0);
    }

    #[test]
    fn set_diagonals_is_independent_of_cell_data() {
        let mut grid = CellGrid::new();
        grid.init(2, 2, zeros(2, 2), true).unwrap();
        grid.set_diagonals(false);
        assert!(!grid.diagonals());
        assert_eq!(grid.at(0, 0), 0);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GridError::ColumnCount {
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "cell data has 2 columns, expected 4");
    }
}

//! Rectangular search areas and their local cell coordinates

use std::fmt;

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::history::SearchHistory;

/// Identity of one of the three search areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    /// Search area 1
    One,
    /// Search area 2
    Two,
    /// Search area 3
    Three,
}

impl RegionId {
    /// All areas in ascending order
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Zero-based position in per-area arrays
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// One-based area number as shown to operators
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Area at a zero-based position
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::One),
            1 => Some(Self::Two),
            2 => Some(Self::Three),
            _ => None,
        }
    }
}

impl TryFrom<u8> for RegionId {
    type Error = AlgorithmError;

    fn try_from(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(AlgorithmError::InvalidRegion { number }),
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Local coordinates inside a search area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, in `[0, width)`
    pub x: usize,
    /// Row, in `[0, height)`
    pub y: usize,
}

impl Cell {
    /// Create a cell at the given local coordinates
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangular search area measured in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    id: RegionId,
    width: usize,
    height: usize,
}

impl Region {
    /// Create a search area
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the area overflows
    pub fn new(id: RegionId, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "region_dims",
                &format!("{width}x{height}"),
                &format!("area {id} must be at least one cell in each direction"),
            ));
        }
        if width.checked_mul(height).is_none() {
            return Err(invalid_parameter(
                "region_dims",
                &format!("{width}x{height}"),
                &"cell count overflows",
            ));
        }

        Ok(Self { id, width, height })
    }

    /// Area identity
    pub const fn id(&self) -> RegionId {
        self.id
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Coordinate containment test
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Linear position of a cell, `None` outside the region
    ///
    /// Matches the order produced by [`Region::cells`].
    pub const fn linear_index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.x * self.height + cell.y)
        } else {
            None
        }
    }

    /// Every cell of the region, x-major
    ///
    /// The iterator is lazy and cheap to clone; calling again restarts it.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + Clone + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Cell::new(x, y)))
    }

    /// Cells that appear in none of the recorded search events
    pub fn unsearched(&self, history: &SearchHistory) -> Vec<Cell> {
        self.cells()
            .filter(|&cell| !history.is_searched(cell))
            .collect()
    }
}

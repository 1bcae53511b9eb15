//! Rectangular cell grids with wildcard cells.
//!
//! A [`Pattern`] is the shared grid abstraction: rule templates, rule
//! outcomes, and the working target grid are all patterns. Cells are
//! palette indices (`0..N-1`); [`WILDCARD`] marks a cell that matches
//! anything when reading and writes through nothing when writing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ident::PatternId;

/// Cell value that matches any target cell in a match template, and leaves
/// the target cell untouched in an outcome template.
pub const WILDCARD: i32 = -1;

/// A dense rectangular grid of cells.
///
/// Cells are stored row-major. The shape invariant (`cells.len() ==
/// width * height`, both dimensions nonzero) is established by the
/// constructors and cannot be broken through the accessor API; it can
/// still be violated by hand-built serialized data, which is why the
/// engine calls [`Pattern::validate`] before matching.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    /// Authoring identity.
    id: PatternId,
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
    /// Row-major cell values.
    cells: Vec<i32>,
}

impl Pattern {
    /// Creates a `width` x `height` pattern with every cell set to `fill`.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero.
    pub fn filled(id: impl Into<PatternId>, width: usize, height: usize, fill: i32) -> Result<Self> {
        let id = id.into();
        if width == 0 || height == 0 {
            return Err(Error::empty_pattern(id));
        }
        Ok(Self {
            id,
            width,
            height,
            cells: vec![fill; width * height],
        })
    }

    /// Creates a pattern from explicit rows.
    ///
    /// # Errors
    /// Returns an error if `rows` is empty, the first row is empty, or any
    /// row's length differs from the first.
    pub fn from_rows(id: impl Into<PatternId>, rows: &[Vec<i32>]) -> Result<Self> {
        let id = id.into();
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(Error::empty_pattern(id));
        }
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::ragged_rows(id, y, width, row.len()));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            id,
            width,
            height,
            cells,
        })
    }

    /// Assembles a pattern from raw parts without re-validating.
    ///
    /// For layers that derive shapes from patterns already holding the
    /// invariant (the transform operations). The caller must supply nonzero
    /// dimensions and a matching cell count; only checked in debug builds.
    #[must_use]
    pub fn from_raw(id: PatternId, width: usize, height: usize, cells: Vec<i32>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(cells.len(), width * height);
        Self {
            id,
            width,
            height,
            cells,
        }
    }

    /// Returns this pattern's id.
    #[must_use]
    pub fn id(&self) -> &PatternId {
        &self.id
    }

    /// Replaces this pattern's id, consuming and returning the pattern.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<PatternId>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// Returns `false` when the coordinates are out of bounds; the grid
    /// shape never changes after construction.
    pub fn set(&mut self, x: usize, y: usize, value: i32) -> bool {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
            true
        } else {
            false
        }
    }

    /// Returns the row-major cell buffer.
    #[must_use]
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Returns the row-major cell buffer mutably.
    ///
    /// The buffer length is fixed; only cell values may change.
    pub fn cells_mut(&mut self) -> &mut [i32] {
        &mut self.cells
    }

    /// Iterates the grid one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks_exact(self.width)
    }

    /// Returns true if `other` has the same dimensions and cell values.
    ///
    /// Ids are ignored; this is pixel equality.
    #[must_use]
    pub fn same_cells(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }

    /// Checks the shape invariant.
    ///
    /// Constructors establish the invariant, but deserialized data may not
    /// hold it, so the engine re-checks before matching.
    ///
    /// # Errors
    /// Returns an error if a dimension is zero or the cell count does not
    /// match the dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::empty_pattern(self.id.clone()));
        }
        let expected = self.width * self.height;
        if self.cells.len() != expected {
            return Err(Error::malformed_pattern(
                self.id.clone(),
                expected,
                self.cells.len(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({} {}x{})", self.id, self.width, self.height)
    }
}

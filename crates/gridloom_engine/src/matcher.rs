//! Positional sub-pattern search with wildcard semantics.
//!
//! The matcher scans candidate window offsets in deterministic row-major
//! order and compares cell-by-cell. A wildcard on either side (template or
//! target) matches anything; a mismatch requires two concrete, unequal
//! cells.

use std::cmp::Ordering;

use gridloom_foundation::Pattern;

// =============================================================================
// Position
// =============================================================================

/// A matched top-left window offset in the target grid.
///
/// Ordered by `(y, x)`, the matcher's scan order: rows before columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column of the window's top-left cell.
    pub x: usize,
    /// Row of the window's top-left cell.
    pub y: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// Matcher
// =============================================================================

/// Deterministic sub-pattern search over a target grid.
pub struct Matcher;

impl Matcher {
    /// Tests whether `template` matches `target` with its top-left corner
    /// at `(x, y)`.
    ///
    /// A template cell and a target cell mismatch only when **both** are
    /// concrete (`>= 0`) and unequal; a wildcard on either side always
    /// matches. Returns `false` when the window does not fit.
    #[must_use]
    pub fn is_match(template: &Pattern, target: &Pattern, x: usize, y: usize) -> bool {
        let (tw, th) = (template.width(), template.height());
        if x + tw > target.width() || y + th > target.height() {
            return false;
        }
        let target_w = target.width();
        let template_cells = template.cells();
        let target_cells = target.cells();
        for ty in 0..th {
            let template_row = &template_cells[ty * tw..(ty + 1) * tw];
            let target_row = &target_cells[(y + ty) * target_w + x..(y + ty) * target_w + x + tw];
            for (&p, &t) in template_row.iter().zip(target_row) {
                if p >= 0 && t >= 0 && p != t {
                    return false;
                }
            }
        }
        true
    }

    /// Finds the first window offset where `template` matches `target`.
    ///
    /// Candidate offsets step by `stride` along both axes, `y` outer and
    /// `x` inner, so the smallest `(y, x)` in lexicographic order wins.
    /// Returns `None` when the template does not fit or nothing matches.
    ///
    /// `stride` must be nonzero; the session layer validates it before any
    /// matching starts.
    #[must_use]
    pub fn find(template: &Pattern, target: &Pattern, stride: usize) -> Option<Position> {
        debug_assert!(stride > 0);
        if stride == 0
            || template.width() > target.width()
            || template.height() > target.height()
        {
            return None;
        }
        let max_x = target.width() - template.width();
        let max_y = target.height() - template.height();
        for y in (0..=max_y).step_by(stride) {
            for x in (0..=max_x).step_by(stride) {
                if Self::is_match(template, target, x, y) {
                    return Some(Position::new(x, y));
                }
            }
        }
        None
    }
}

// =============================================================================
// Tests
// =============================================================================

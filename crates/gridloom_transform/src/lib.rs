//! Pure geometric operations over Gridloom patterns.
//!
//! This crate provides:
//! - [`rotate`] - 90 degree clockwise rotation (the only op that swaps dims)
//! - [`flip`] - Mirror along either axis
//! - [`shift`] - Toroidal (wrap-around) translation
//! - [`resize`] - Crop/pad anchored at the origin
//!
//! Every operation allocates a new pattern carrying the input's id; inputs
//! are never mutated. The engine depends on [`rotate`] for rotational rule
//! expansion; the rest serve the editing layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use gridloom_foundation::{Error, Pattern, Result};

// =============================================================================
// Rotate
// =============================================================================

/// Rotates a pattern 90 degrees clockwise, `times` times.
///
/// One rotation is a transpose followed by a row reversal; width and height
/// swap when the pattern is not square. Four rotations return a grid
/// pixel-identical to the original, so `times` is taken modulo 4.
#[must_use]
pub fn rotate(pattern: &Pattern, times: usize) -> Pattern {
    let mut out = pattern.clone();
    for _ in 0..times % 4 {
        out = rotate_once(&out);
    }
    out
}

fn rotate_once(pattern: &Pattern) -> Pattern {
    let (w, h) = (pattern.width(), pattern.height());
    let input = pattern.cells();
    let mut cells = vec![0; w * h];
    // Output is h wide and w tall: out(x, y) = in(y, h - 1 - x).
    for y in 0..w {
        for x in 0..h {
            cells[y * h + x] = input[(h - 1 - x) * w + y];
        }
    }
    Pattern::from_raw(pattern.id().clone(), h, w, cells)
}

// =============================================================================
// Flip
// =============================================================================

/// Axis of a [`flip`] operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-right: reverse each row.
    Horizontal,
    /// Mirror top-bottom: reverse the row order.
    Vertical,
}

/// Mirrors a pattern along the given axis. Dimensions are unchanged.
#[must_use]
pub fn flip(pattern: &Pattern, axis: FlipAxis) -> Pattern {
    let (w, h) = (pattern.width(), pattern.height());
    let input = pattern.cells();
    let mut cells = vec![0; w * h];
    for y in 0..h {
        for x in 0..w {
            let (sx, sy) = match axis {
                FlipAxis::Horizontal => (w - 1 - x, y),
                FlipAxis::Vertical => (x, h - 1 - y),
            };
            cells[y * w + x] = input[sy * w + sx];
        }
    }
    Pattern::from_raw(pattern.id().clone(), w, h, cells)
}

// =============================================================================
// Shift
// =============================================================================

/// Translates a pattern toroidally: the cell at `(x, y)` moves to
/// `((x + dx) mod w, (y + dy) mod h)`. Negative offsets wrap the other way.
#[must_use]
pub fn shift(pattern: &Pattern, dx: i64, dy: i64) -> Pattern {
    let (w, h) = (pattern.width(), pattern.height());
    // Normalize to [0, dim) so the per-cell math stays in usize.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let dx = dx.rem_euclid(w as i64) as usize;
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let dy = dy.rem_euclid(h as i64) as usize;

    let input = pattern.cells();
    let mut cells = vec![0; w * h];
    for y in 0..h {
        for x in 0..w {
            let sx = (x + w - dx) % w;
            let sy = (y + h - dy) % h;
            cells[y * w + x] = input[sy * w + sx];
        }
    }
    Pattern::from_raw(pattern.id().clone(), w, h, cells)
}

// =============================================================================
// Resize
// =============================================================================

/// Crops or pads a pattern to `new_w` x `new_h`, anchored at the origin.
///
/// Cells inside the old bounds are copied; cells outside are set to `fill`.
/// Content is never rescaled.
///
/// # Errors
/// Returns an error if either target dimension is zero.
pub fn resize(pattern: &Pattern, new_w: usize, new_h: usize, fill: i32) -> Result<Pattern> {
    if new_w == 0 || new_h == 0 {
        return Err(Error::empty_pattern(pattern.id().clone()));
    }
    let (w, h) = (pattern.width(), pattern.height());
    let input = pattern.cells();
    let mut cells = vec![fill; new_w * new_h];
    for y in 0..new_h.min(h) {
        for x in 0..new_w.min(w) {
            cells[y * new_w + x] = input[y * w + x];
        }
    }
    Ok(Pattern::from_raw(pattern.id().clone(), new_w, new_h, cells))
}

// =============================================================================
// Tests
// =============================================================================

//! Anchor table: maps selectable indices to stack offsets.
//!
//! Index `i` is centred when the stack is translated by `-(i * row_height)`,
//! so anchors form an arithmetic progression from `0` down to
//! `-(len - 1) * row_height`. Only the length and spacing are stored.

use crate::error::PickerError;

/// Offsets closer than this (in pixels) are treated as the same anchor.
pub const ANCHOR_EPSILON: f32 = 0.01;

/// Position of an offset between two neighbouring anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Anchor index at or above the offset (the smaller index).
    pub lower: usize,
    /// Anchor index at or below the offset (the larger index).
    pub upper: usize,
    /// How far the offset has travelled from `lower` towards `upper`, in `0.0..=1.0`.
    pub fraction: f32,
}

impl Bracket {
    /// True when the offset sits exactly on a single anchor.
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }
}

/// The legal resting offsets for a picker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorTable {
    len: usize,
    row_height: f32,
}

impl AnchorTable {
    /// Build the anchors for `item_count` rows of `row_height` pixels.
    pub fn build(item_count: usize, row_height: f32) -> Result<Self, PickerError> {
        if item_count == 0 {
            return Err(PickerError::EmptySelection);
        }
        if !row_height.is_finite() || row_height <= 0.0 {
            return Err(PickerError::InvalidItemHeight(row_height));
        }
        Ok(Self {
            len: item_count,
            row_height,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Offset that centres `index`, if the index exists.
    pub fn offset_of(&self, index: usize) -> Option<f32> {
        (index < self.len).then(|| -(index as f32 * self.row_height))
    }

    /// Index whose anchor is exactly `offset` (within [`ANCHOR_EPSILON`]).
    pub fn index_at(&self, offset: f32) -> Option<usize> {
        let bracket = self.bracket(offset)?;
        let candidate = if bracket.fraction < 0.5 {
            bracket.lower
        } else {
            bracket.upper
        };
        let anchor = self.offset_of(candidate)?;
        ((anchor - offset).abs() <= ANCHOR_EPSILON).then_some(candidate)
    }

    /// Highest (least negative) anchor offset. Always `0.0` for a non-empty table.
    pub fn max_offset(&self) -> f32 {
        0.0
    }

    /// Lowest anchor offset, belonging to the last index.
    pub fn min_offset(&self) -> f32 {
        -(self.len.saturating_sub(1) as f32 * self.row_height)
    }

    /// Clamp an offset into the span covered by the anchors.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.min_offset(), self.max_offset())
    }

    /// Find the two anchors surrounding `offset`. Offsets outside the span are
    /// clamped first. Returns `None` for an empty table.
    pub fn bracket(&self, offset: f32) -> Option<Bracket> {
        if self.is_empty() || self.row_height <= 0.0 {
            return None;
        }
        let last = self.len - 1;
        let position = (-self.clamp(offset) / self.row_height).max(0.0);
        let lower = (position.floor() as usize).min(last);
        let fraction = (position - lower as f32).clamp(0.0, 1.0);
        if fraction <= ANCHOR_EPSILON / self.row_height {
            return Some(Bracket {
                lower,
                upper: lower,
                fraction: 0.0,
            });
        }
        let upper = (lower + 1).min(last);
        Some(Bracket {
            lower,
            upper,
            fraction,
        })
    }

    /// Index of the anchor closest to `offset`; midpoints go to the larger index.
    pub fn nearest(&self, offset: f32) -> Option<usize> {
        let bracket = self.bracket(offset)?;
        Some(if bracket.fraction < 0.5 {
            bracket.lower
        } else {
            bracket.upper
        })
    }

    /// Iterate `(index, offset)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        (0..self.len).map(|index| (index, -(index as f32 * self.row_height)))
    }
}

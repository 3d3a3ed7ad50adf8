//! Picker error types.

use thiserror::Error;

/// Errors raised while building or driving a picker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// The item sequence was empty, so there is nothing to select.
    #[error("picker needs at least one item")]
    EmptySelection,

    /// Row height must be a finite, positive number of pixels.
    #[error("item height must be positive, got {0}")]
    InvalidItemHeight(f32),

    /// The viewport must show at least one row.
    #[error("visible count must be at least 1, got {0}")]
    InvalidVisibleCount(usize),

    /// Selection line length is a fraction of the viewport width.
    #[error("selection line fraction must be within 0..=1, got {0}")]
    InvalidLineFraction(f32),

    /// An explicit jump targeted an index outside the item range.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items in the picker.
        len: usize,
    },

    /// The active gesture cannot be mapped onto the current anchors.
    #[error("drag cannot be resolved against the current anchors")]
    UnresolvableDrag,
}

impl PickerError {
    /// Returns true for errors detected while validating configuration or items.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::EmptySelection
                | Self::InvalidItemHeight(_)
                | Self::InvalidVisibleCount(_)
                | Self::InvalidLineFraction(_)
        )
    }
}

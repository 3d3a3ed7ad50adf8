use serde::{Deserialize, Serialize};

/// Persistable picker position.
///
/// Holds the settled item index, or `-1` to start on the default middle item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerState {
    pub current_index: i32,
}

impl PickerState {
    /// Sentinel meaning "no saved position".
    pub const UNSET: i32 = -1;

    pub fn new(current_index: usize) -> Self {
        Self {
            current_index: i32::try_from(current_index).unwrap_or(i32::MAX),
        }
    }

    pub fn unset() -> Self {
        Self {
            current_index: Self::UNSET,
        }
    }

    /// The saved index, if one is set.
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.current_index).ok()
    }

    /// The saved index if it is valid for `len` items.
    pub fn index_within(&self, len: usize) -> Option<usize> {
        self.index().filter(|&index| index < len)
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::unset()
    }
}

//! Selection model: the picker's entries and their selected flags.

use crate::error::PickerError;

/// A caller item together with its selection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry<E> {
    pub value: E,
    pub selected: bool,
}

impl<E> PickerEntry<E> {
    pub fn new(value: E) -> Self {
        Self {
            value,
            selected: false,
        }
    }
}

/// Emitted when the selected entry moves to a different index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: usize,
    pub index: usize,
}

/// Middle-biased starting index for `len` items.
///
/// Odd lengths start on the exact middle; even lengths on the lower of the
/// two middle items. A two-item list starts on the second item.
pub fn default_index(len: usize) -> usize {
    let len = len as isize;
    let slot = ((len - 1) / 2 - 1).max(0).min(len - 2);
    (slot + 1).max(0) as usize
}

/// Ordered entries with exactly one selected.
#[derive(Debug, Clone)]
pub struct SelectionModel<E> {
    entries: Vec<PickerEntry<E>>,
    selected: usize,
}

impl<E> SelectionModel<E> {
    /// Wrap `items`, selecting `initial` or the default index when `initial`
    /// is `None` or out of range.
    pub fn new(items: Vec<E>, initial: Option<usize>) -> Result<Self, PickerError> {
        if items.is_empty() {
            return Err(PickerError::EmptySelection);
        }
        let mut entries: Vec<_> = items.into_iter().map(PickerEntry::new).collect();
        let selected = match initial {
            Some(index) if index < entries.len() => index,
            _ => default_index(entries.len()),
        };
        entries[selected].selected = true;
        Ok(Self { entries, selected })
    }

    /// Move the selection to `index`.
    ///
    /// Returns the change when the index differs from the current one;
    /// settling on the already selected index is a no-op.
    pub fn on_settle(&mut self, index: usize) -> Result<Option<SelectionChanged>, PickerError> {
        if index >= self.entries.len() {
            return Err(PickerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        if index == self.selected {
            return Ok(None);
        }
        let previous = self.selected;
        self.entries[previous].selected = false;
        self.entries[index].selected = true;
        self.selected = index;
        Ok(Some(SelectionChanged { previous, index }))
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &E {
        &self.entries[self.selected].value
    }

    pub fn entries(&self) -> &[PickerEntry<E>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PickerEntry<E>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries flagged as selected. Always 1 for a valid model.
    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.selected).count()
    }

    /// Consume the model, returning the raw items.
    pub fn into_items(self) -> Vec<E> {
        self.entries.into_iter().map(|entry| entry.value).collect()
    }
}

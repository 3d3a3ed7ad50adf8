//! Picker facade.
//!
//! Wires the anchor table, snap state machine, selection model and stack
//! layout together behind one owner.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use log::{debug, warn};

use crate::anchor::AnchorTable;
use crate::config::{LineSegment, PickerConfig};
use crate::error::PickerError;
use crate::event::{GestureEvent, PickerOutcome};
use crate::layout::{Rect, RowPlacement, StackLayout};
use crate::selection::{PickerEntry, SelectionChanged, SelectionModel};
use crate::snap::{Phase, Resolution, SnapMachine};
use crate::state::PickerState;

type IndexCallback = Box<dyn FnMut(usize) + Send>;
type CancelCallback = Box<dyn FnMut() + Send>;

/// A visible row produced by [`Picker::rows`].
#[derive(Debug, Clone, PartialEq)]
pub struct PickerRow<R> {
    pub placement: RowPlacement,
    /// Part of the row inside the viewport.
    pub clip: Rect,
    /// Rendered content, or `None` for padding rows.
    pub content: Option<R>,
    pub selected: bool,
}

/// A vertical wheel picker over caller items of type `E`.
pub struct Picker<E> {
    config: PickerConfig,
    selection: SelectionModel<E>,
    snap: SnapMachine,
    on_change: Vec<IndexCallback>,
    subscribers: Vec<Sender<SelectionChanged>>,
    on_confirm: Option<IndexCallback>,
    on_cancel: Option<CancelCallback>,
}

impl<E: fmt::Debug> fmt::Debug for Picker<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("config", &self.config)
            .field("selection", &self.selection)
            .field("snap", &self.snap)
            .field("on_change", &self.on_change.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<E> Picker<E> {
    /// Build a picker starting on the default middle item.
    pub fn new(items: Vec<E>, config: PickerConfig) -> Result<Self, PickerError> {
        Self::with_state(items, config, PickerState::unset())
    }

    /// Build a picker starting on a persisted position. Out-of-range
    /// positions fall back to the default middle item.
    pub fn with_state(
        items: Vec<E>,
        config: PickerConfig,
        state: PickerState,
    ) -> Result<Self, PickerError> {
        config.validate()?;
        let (selection, anchors) = build_model(items, &config, state)?;
        let snap = SnapMachine::new(anchors, selection.selected_index())
            .with_settle(config.settle)
            .with_velocity_threshold(config.velocity_threshold);
        debug!(
            "picker built: {} items, settled on {}",
            selection.len(),
            selection.selected_index()
        );
        Ok(Self {
            config,
            selection,
            snap,
            on_change: Vec::new(),
            subscribers: Vec::new(),
            on_confirm: None,
            on_cancel: None,
        })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replace the items, starting again on the default middle item.
    pub fn set_items(&mut self, items: Vec<E>) -> Result<(), PickerError> {
        self.set_items_with_state(items, PickerState::unset())
    }

    /// Replace the items, carrying over a position from `state`.
    ///
    /// On error the picker keeps its previous items. A gesture active during
    /// the swap can no longer be resolved and is aborted on release.
    pub fn set_items_with_state(
        &mut self,
        items: Vec<E>,
        state: PickerState,
    ) -> Result<(), PickerError> {
        let (selection, anchors) = build_model(items, &self.config, state)?;
        self.snap
            .replace_anchors(anchors, selection.selected_index());
        self.selection = selection;
        debug!(
            "items replaced: {} items, settled on {}",
            self.selection.len(),
            self.selection.selected_index()
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn settled_index(&self) -> usize {
        self.snap.settled_index()
    }

    pub fn selected(&self) -> &E {
        self.selection.selected()
    }

    pub fn entries(&self) -> &[PickerEntry<E>] {
        self.selection.entries()
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn anchors(&self) -> &AnchorTable {
        self.snap.anchors()
    }

    /// Position to persist across restarts.
    pub fn state(&self) -> PickerState {
        PickerState::new(self.settled_index())
    }

    /// Move to a persisted position. Out-of-range or unset positions go to
    /// the default middle item.
    pub fn restore(&mut self, state: PickerState) {
        let index = match state.index_within(self.len()) {
            Some(index) => index,
            None => {
                if state.index().is_some() {
                    warn!(
                        "restored index {} out of range for {} items, using default",
                        state.current_index,
                        self.len()
                    );
                }
                crate::selection::default_index(self.len())
            }
        };
        if let Err(e) = self.jump_to(index) {
            warn!("restore failed: {e}");
        }
    }

    /// Jump to `index` without a gesture.
    pub fn jump_to(&mut self, index: usize) -> Result<(), PickerError> {
        self.snap.jump_to(index)?;
        debug!("jumped to {index}");
        self.commit(index);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    pub fn offset(&self) -> f32 {
        self.snap.offset()
    }

    pub fn phase(&self) -> Phase {
        self.snap.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.snap.is_dragging()
    }

    pub fn drag_start(&mut self, now: Instant) {
        self.snap.drag_start(now);
    }

    pub fn drag_move(&mut self, delta: f32) -> f32 {
        self.snap.drag_move(delta)
    }

    /// Release the gesture. Returns the resolution, or `None` when the drag
    /// could not be resolved and was rolled back to the settled item.
    pub fn drag_end(&mut self, velocity: f32, now: Instant) -> Option<Resolution> {
        match self.snap.drag_end(velocity, now) {
            Ok(resolution) => {
                if resolution.changed() {
                    self.commit(resolution.index);
                }
                Some(resolution)
            }
            Err(e) => {
                warn!("{e}; reverting to index {}", self.snap.settled_index());
                self.snap.abort_drag();
                None
            }
        }
    }

    /// Feed one gesture event.
    pub fn handle(&mut self, event: GestureEvent, now: Instant) -> Option<Resolution> {
        match event {
            GestureEvent::DragStart => {
                self.drag_start(now);
                None
            }
            GestureEvent::DragMove { delta } => {
                self.drag_move(delta);
                None
            }
            GestureEvent::DragEnd { velocity } => self.drag_end(velocity, now),
        }
    }

    /// Advance the settle animation. Returns true while it is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.snap.tick(now)
    }

    /// Install a hook that can veto a resolved index: `(from, to) -> accept`.
    pub fn set_accept_hook(&mut self, hook: impl FnMut(usize, usize) -> bool + Send + 'static) {
        self.snap.set_accept_hook(hook);
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Lay out the stack for a viewport `viewport_width` pixels wide.
    pub fn layout(&self, viewport_width: f32) -> StackLayout {
        StackLayout::for_items(
            self.len(),
            self.config.item_height,
            self.config.visible_count,
            viewport_width,
            self.snap.offset(),
        )
    }

    /// Render the rows visible in the viewport with `render(item, selected)`.
    pub fn rows<R>(
        &self,
        viewport_width: f32,
        mut render: impl FnMut(&E, bool) -> R,
    ) -> Vec<PickerRow<R>> {
        let layout = self.layout(viewport_width);
        layout
            .visible_rows()
            .map(|(placement, clip)| {
                let entry = placement
                    .item_index()
                    .and_then(|index| self.selection.get(index));
                PickerRow {
                    placement: *placement,
                    clip,
                    content: entry.map(|entry| render(&entry.value, entry.selected)),
                    selected: entry.is_some_and(|entry| entry.selected),
                }
            })
            .collect()
    }

    /// The two lines framing the centre slot.
    pub fn selection_lines(&self, viewport_width: f32) -> [LineSegment; 2] {
        self.config.selection_line.lines(
            viewport_width,
            self.config.item_height,
            self.config.visible_count,
        )
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Call `callback` with the new index whenever the selection changes.
    pub fn on_selection_changed(&mut self, callback: impl FnMut(usize) + Send + 'static) {
        self.on_change.push(Box::new(callback));
    }

    /// Receive every selection change on a channel.
    pub fn subscribe(&mut self) -> Receiver<SelectionChanged> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn on_confirm(&mut self, callback: impl FnMut(usize) + Send + 'static) {
        self.on_confirm = Some(Box::new(callback));
    }

    pub fn on_cancel(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    /// Confirm the settled index.
    pub fn confirm(&mut self) -> PickerOutcome {
        let index = self.settled_index();
        if let Some(callback) = self.on_confirm.as_mut() {
            callback(index);
        }
        PickerOutcome::Confirmed(index)
    }

    pub fn cancel(&mut self) -> PickerOutcome {
        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
        PickerOutcome::Cancelled
    }

    /// Consume the picker, returning its items.
    pub fn into_items(self) -> Vec<E> {
        self.selection.into_items()
    }

    fn commit(&mut self, index: usize) {
        match self.selection.on_settle(index) {
            Ok(Some(change)) => {
                debug!("selection changed {} -> {}", change.previous, change.index);
                for callback in &mut self.on_change {
                    callback(change.index);
                }
                self.subscribers.retain(|tx| tx.send(change).is_ok());
            }
            Ok(None) => {}
            Err(e) => warn!("selection out of sync with anchors: {e}"),
        }
    }
}

fn build_model<E>(
    items: Vec<E>,
    config: &PickerConfig,
    state: PickerState,
) -> Result<(SelectionModel<E>, AnchorTable), PickerError> {
    let anchors = AnchorTable::build(items.len(), config.item_height)?;
    let initial = state.index_within(items.len());
    if initial.is_none() && state.index().is_some() {
        warn!(
            "persisted index {} out of range for {} items, using default",
            state.current_index,
            items.len()
        );
    }
    let selection = SelectionModel::new(items, initial)?;
    Ok((selection, anchors))
}

/// Gesture input delivered by the host's pointer layer, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed on the picker.
    DragStart,
    /// Pointer moved while pressed; positive moves the stack down.
    DragMove { delta: f32 },
    /// Pointer released. Velocity in pixels per second, same sign as `delta`.
    DragEnd { velocity: f32 },
}

/// Outcome reported to callers of pickers with OK/Cancel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// The user confirmed the settled index.
    Confirmed(usize),
    Cancelled,
}

pub mod anchor;
pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod picker;
pub mod selection;
pub mod snap;
pub mod state;
pub mod transitions;

pub use anchor::{AnchorTable, Bracket};
pub use animation::SettleAnimation;
pub use color::Color;
pub use config::{LineSegment, PickerConfig, SelectionLineStyle};
pub use error::PickerError;
pub use event::{GestureEvent, PickerOutcome};
pub use layout::{Rect, RowKind, RowPlacement, StackLayout};
pub use picker::{Picker, PickerRow};
pub use selection::{PickerEntry, SelectionChanged, SelectionModel};
pub use snap::{Phase, Resolution, SnapMachine};
pub use state::PickerState;
pub use transitions::{Easing, TransitionConfig};

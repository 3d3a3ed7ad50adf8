//! Picker configuration types.

use crate::color::Color;
use crate::error::PickerError;
use crate::transitions::TransitionConfig;

/// Default fling velocity (pixels per second) above which a release moves
/// to the next anchor in the fling direction regardless of position.
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 125.0;

/// Appearance of the two horizontal lines framing the selected slot.
///
/// Purely cosmetic; nothing in the state machine reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionLineStyle {
    pub color: Color,
    /// Share of the viewport width covered by each line, centred.
    pub length_fraction: f32,
    pub stroke_width: f32,
}

impl Default for SelectionLineStyle {
    fn default() -> Self {
        Self {
            color: Color::from_argb(0xff83cde6),
            length_fraction: 1.0,
            stroke_width: 3.0,
        }
    }
}

impl SelectionLineStyle {
    /// Shorter lines spanning the middle two thirds of the viewport.
    pub fn bar() -> Self {
        Self {
            length_fraction: 2.0 / 3.0,
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn length_fraction(mut self, fraction: f32) -> Self {
        self.length_fraction = fraction;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if !(0.0..=1.0).contains(&self.length_fraction) {
            return Err(PickerError::InvalidLineFraction(self.length_fraction));
        }
        Ok(())
    }

    /// The top and bottom lines framing the centre slot of a viewport
    /// `width` pixels wide showing `visible_count` rows of `item_height`.
    ///
    /// The slot row is `(visible_count - 1) / 2` (integer division), so an
    /// even count frames the upper of the two middle rows.
    pub fn lines(&self, width: f32, item_height: f32, visible_count: usize) -> [LineSegment; 2] {
        let start_fraction = (1.0 - self.length_fraction) / 2.0;
        let end_fraction = start_fraction + self.length_fraction;
        let slot = (visible_count.saturating_sub(1) / 2) as f32;

        let line_at = |y: f32| LineSegment {
            x1: width * start_fraction,
            x2: width * end_fraction,
            y,
            stroke_width: self.stroke_width,
            color: self.color,
        };
        [line_at(item_height * slot), line_at(item_height * (slot + 1.0))]
    }
}

/// A horizontal line in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub stroke_width: f32,
    pub color: Color,
}

/// Configuration for a picker instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Height of every row, in pixels.
    pub item_height: f32,
    /// Number of rows visible through the viewport.
    pub visible_count: usize,
    pub selection_line: SelectionLineStyle,
    /// Settle transition after release. `None` snaps instantly.
    pub settle: Option<TransitionConfig>,
    /// Fling speed that forces a move in the fling direction. `None` disables
    /// velocity handling so only position decides.
    pub velocity_threshold: Option<f32>,
}

impl PickerConfig {
    pub fn new(item_height: f32) -> Self {
        Self {
            item_height,
            visible_count: 3,
            selection_line: SelectionLineStyle::default(),
            settle: Some(TransitionConfig::default()),
            velocity_threshold: Some(DEFAULT_VELOCITY_THRESHOLD),
        }
    }

    pub fn visible_count(mut self, count: usize) -> Self {
        self.visible_count = count;
        self
    }

    pub fn selection_line(mut self, style: SelectionLineStyle) -> Self {
        self.selection_line = style;
        self
    }

    pub fn settle(mut self, transition: TransitionConfig) -> Self {
        self.settle = Some(transition);
        self
    }

    /// Snap straight to the resolved anchor on release.
    pub fn instant_settle(mut self) -> Self {
        self.settle = None;
        self
    }

    pub fn velocity_threshold(mut self, threshold: Option<f32>) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    /// Height of the viewport in pixels.
    pub fn viewport_height(&self) -> f32 {
        self.item_height * self.visible_count as f32
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(PickerError::InvalidItemHeight(self.item_height));
        }
        if self.visible_count == 0 {
            return Err(PickerError::InvalidVisibleCount(self.visible_count));
        }
        self.selection_line.validate()
    }
}

//! Mouse-to-gesture recognition for the picker viewport.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use slidepick::{GestureEvent, Rect};

/// Samples older than this are ignored when estimating release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(120);

/// A pointer held still this long before release has stopped.
const STOP_WINDOW: Duration = Duration::from_millis(40);

/// Turns left-button press/drag/release inside a region into picker gestures.
///
/// One terminal row is one pixel of picker space.
#[derive(Debug, Default)]
pub struct GestureTracker {
    last_row: Option<u16>,
    samples: VecDeque<(Instant, f32)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.last_row.is_some()
    }

    /// Translate one mouse event. `area` is the picker viewport in
    /// terminal cells; presses outside it are ignored.
    pub fn handle(&mut self, mouse: &MouseEvent, area: Rect, now: Instant) -> Option<GestureEvent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !area.contains(mouse.column as f32, mouse.row as f32) {
                    return None;
                }
                self.last_row = Some(mouse.row);
                self.samples.clear();
                self.samples.push_back((now, 0.0));
                Some(GestureEvent::DragStart)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let last = self.last_row?;
                let delta = mouse.row as f32 - last as f32;
                if delta == 0.0 {
                    return None;
                }
                self.last_row = Some(mouse.row);
                self.record(now, delta);
                Some(GestureEvent::DragMove { delta })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.last_row.take()?;
                let velocity = self.velocity(now);
                self.samples.clear();
                Some(GestureEvent::DragEnd { velocity })
            }
            _ => None,
        }
    }

    fn record(&mut self, now: Instant, delta: f32) {
        self.samples.push_back((now, delta));
        while let Some(&(at, _)) = self.samples.front() {
            if now.saturating_duration_since(at) <= VELOCITY_WINDOW {
                break;
            }
            self.samples.pop_front();
        }
    }

    /// Rows per second over the recent window.
    fn velocity(&self, now: Instant) -> f32 {
        let Some(&(last_move, _)) = self.samples.back() else {
            return 0.0;
        };
        if now.saturating_duration_since(last_move) > STOP_WINDOW {
            return 0.0;
        }
        let recent: Vec<_> = self
            .samples
            .iter()
            .filter(|(at, _)| now.saturating_duration_since(*at) <= VELOCITY_WINDOW)
            .collect();
        let (Some(first), Some(last)) = (recent.first(), recent.last()) else {
            return 0.0;
        };
        let span = last.0.saturating_duration_since(first.0).as_secs_f32();
        if span <= f32::EPSILON {
            return 0.0;
        }
        let distance: f32 = recent.iter().skip(1).map(|(_, delta)| delta).sum();
        distance / span
    }
}

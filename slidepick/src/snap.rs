//! Snap state machine.
//!
//! Turns a stream of drag gestures into a discrete settled index. The
//! machine is in one of three phases:
//!
//! - `Idle`: the offset sits exactly on the settled index's anchor.
//! - `Dragging`: the offset follows the accumulated drag, clamped to the
//!   anchor span.
//! - `Settling`: a release has been resolved and the offset is animating
//!   towards the new anchor. The settled index is already final.

use std::fmt;
use std::time::Instant;

use log::{debug, trace};

use crate::anchor::AnchorTable;
use crate::animation::SettleAnimation;
use crate::error::PickerError;
use crate::transitions::TransitionConfig;

/// Fractions this close to one half count as an exact midpoint.
const MIDPOINT_EPSILON: f32 = 1e-4;

/// Veto hook consulted before a resolution is committed: `(from, to) -> accept`.
pub type AcceptHook = Box<dyn FnMut(usize, usize) -> bool + Send>;

/// Current phase of the snap state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Dragging {
        /// Set when the anchors were replaced mid-gesture.
        stale: bool,
    },
    Settling(SettleAnimation),
}

/// Outcome of a drag release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Settled index before the release.
    pub previous: usize,
    /// Settled index after the release.
    pub index: usize,
    /// False when the accept hook rejected the resolved index.
    pub accepted: bool,
}

impl Resolution {
    fn unchanged(index: usize) -> Self {
        Self {
            previous: index,
            index,
            accepted: true,
        }
    }

    /// True when the settled index moved.
    pub fn changed(&self) -> bool {
        self.previous != self.index
    }
}

/// Owns the continuous offset, the anchors and the settled index.
pub struct SnapMachine {
    anchors: AnchorTable,
    settled: usize,
    offset: f32,
    phase: Phase,
    /// Offset when the current drag started.
    drag_origin: f32,
    /// Sum of all deltas in the current drag, before clamping.
    drag_total: f32,
    settle: Option<TransitionConfig>,
    velocity_threshold: Option<f32>,
    accept: Option<AcceptHook>,
}

impl fmt::Debug for SnapMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapMachine")
            .field("anchors", &self.anchors)
            .field("settled", &self.settled)
            .field("offset", &self.offset)
            .field("phase", &self.phase)
            .field("settle", &self.settle)
            .field("velocity_threshold", &self.velocity_threshold)
            .field("accept", &self.accept.is_some())
            .finish()
    }
}

impl SnapMachine {
    /// Create an idle machine resting on `initial`, clamped to the last anchor.
    pub fn new(anchors: AnchorTable, initial: usize) -> Self {
        let settled = initial.min(anchors.len().saturating_sub(1));
        let offset = anchors.offset_of(settled).unwrap_or(0.0);
        Self {
            anchors,
            settled,
            offset,
            phase: Phase::Idle,
            drag_origin: offset,
            drag_total: 0.0,
            settle: None,
            velocity_threshold: None,
            accept: None,
        }
    }

    /// Animate releases with `transition`; `None` snaps instantly.
    pub fn with_settle(mut self, transition: Option<TransitionConfig>) -> Self {
        self.settle = transition.filter(|t| !t.is_instant());
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: Option<f32>) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    /// Install a hook that may veto resolutions.
    pub fn set_accept_hook(&mut self, hook: impl FnMut(usize, usize) -> bool + Send + 'static) {
        self.accept = Some(Box::new(hook));
    }

    pub fn clear_accept_hook(&mut self) {
        self.accept = None;
    }

    pub fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    pub fn settled_index(&self) -> usize {
        self.settled
    }

    /// Current continuous offset of the stack.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Settling(_))
    }

    /// Begin a gesture. An in-flight settle animation is cancelled and its
    /// current value becomes the drag baseline.
    pub fn drag_start(&mut self, now: Instant) {
        match self.phase {
            Phase::Dragging { .. } => {
                trace!("drag_start ignored: gesture already active");
                return;
            }
            Phase::Settling(animation) => {
                self.offset = animation.value_at(now);
                debug!("settle cancelled at offset {:.1}", self.offset);
            }
            Phase::Idle => {}
        }
        self.drag_origin = self.offset;
        self.drag_total = 0.0;
        self.phase = Phase::Dragging { stale: false };
    }

    /// Apply a drag delta. Ignored outside a gesture. Returns the new offset.
    pub fn drag_move(&mut self, delta: f32) -> f32 {
        if !self.is_dragging() || !delta.is_finite() {
            return self.offset;
        }
        self.drag_total += delta;
        let raw = self.drag_origin + self.drag_total;
        self.offset = if self.anchors.is_empty() {
            raw
        } else {
            self.anchors.clamp(raw)
        };
        trace!("drag_move {delta:+.1} -> offset {:.1}", self.offset);
        self.offset
    }

    /// Release the gesture and resolve the settled index.
    ///
    /// `velocity` is in pixels per second, positive when the stack moves
    /// towards lower indices. Fails with [`PickerError::UnresolvableDrag`]
    /// when the anchors are empty or were replaced during the gesture; the
    /// machine then stays in `Dragging` until [`SnapMachine::abort_drag`].
    pub fn drag_end(&mut self, velocity: f32, now: Instant) -> Result<Resolution, PickerError> {
        let Phase::Dragging { stale } = self.phase else {
            return Ok(Resolution::unchanged(self.settled));
        };
        if stale {
            return Err(PickerError::UnresolvableDrag);
        }
        let target = self
            .resolve(self.offset, velocity)
            .ok_or(PickerError::UnresolvableDrag)?;

        let previous = self.settled;
        let accepted = target == previous
            || self
                .accept
                .as_mut()
                .is_none_or(|accept| accept(previous, target));
        let index = if accepted { target } else { previous };

        debug!(
            "drag resolved: offset {:.1} velocity {velocity:.1} -> index {index} (was {previous}, accepted {accepted})",
            self.offset
        );

        self.settled = index;
        self.settle_to(index, now);
        Ok(Resolution {
            previous,
            index,
            accepted,
        })
    }

    /// Abandon the active gesture and return to the settled anchor.
    /// Returns false when no gesture was active.
    pub fn abort_drag(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.offset = self.anchors.offset_of(self.settled).unwrap_or(0.0);
        self.drag_total = 0.0;
        self.phase = Phase::Idle;
        debug!("drag aborted, back at index {}", self.settled);
        true
    }

    /// Jump straight to `index`, bypassing drag resolution.
    pub fn jump_to(&mut self, index: usize) -> Result<(), PickerError> {
        let offset = self
            .anchors
            .offset_of(index)
            .ok_or(PickerError::IndexOutOfRange {
                index,
                len: self.anchors.len(),
            })?;
        self.settled = index;
        self.offset = offset;
        self.drag_total = 0.0;
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Swap in a new anchor table, resting on `settled`.
    ///
    /// An active gesture is kept alive but marked stale, so its release fails
    /// to resolve and the caller must abort it.
    pub fn replace_anchors(&mut self, anchors: AnchorTable, settled: usize) {
        self.anchors = anchors;
        self.settled = settled.min(anchors.len().saturating_sub(1));
        if let Phase::Dragging { .. } = self.phase {
            self.phase = Phase::Dragging { stale: true };
            return;
        }
        self.offset = anchors.offset_of(self.settled).unwrap_or(0.0);
        self.phase = Phase::Idle;
    }

    /// Advance a settle animation. Returns true while the offset is moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Phase::Settling(animation) = self.phase else {
            return false;
        };
        if animation.is_finished(now) {
            self.offset = animation.target();
            self.phase = Phase::Idle;
            return false;
        }
        self.offset = animation.value_at(now);
        true
    }

    /// Anchor index that a release at `offset` with `velocity` would pick.
    pub fn resolve(&self, offset: f32, velocity: f32) -> Option<usize> {
        let bracket = self.anchors.bracket(offset)?;
        if bracket.is_exact() {
            return Some(bracket.lower);
        }

        if let Some(threshold) = self.velocity_threshold
            && velocity.abs() >= threshold
        {
            return Some(if velocity > 0.0 {
                bracket.lower
            } else {
                bracket.upper
            });
        }

        if (bracket.fraction - 0.5).abs() <= MIDPOINT_EPSILON {
            // Exact midpoint: follow the motion. Decreasing offsets travel
            // towards the larger index.
            let motion = offset - self.drag_origin;
            return Some(if motion > 0.0 {
                bracket.lower
            } else {
                bracket.upper
            });
        }

        Some(if bracket.fraction < 0.5 {
            bracket.lower
        } else {
            bracket.upper
        })
    }

    fn settle_to(&mut self, index: usize, now: Instant) {
        self.drag_total = 0.0;
        let target = self.anchors.offset_of(index).unwrap_or(0.0);
        match self.settle {
            Some(config) if (target - self.offset).abs() > f32::EPSILON => {
                self.phase = Phase::Settling(SettleAnimation::new(self.offset, target, now, config));
            }
            _ => {
                self.offset = target;
                self.phase = Phase::Idle;
            }
        }
    }
}

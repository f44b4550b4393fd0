// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap/drag classification over a single press-release sequence.
//!
//! ## Usage
//!
//! 1) Feed every [`PointerEvent`] into [`GestureState::handle`].
//! 2) On pointer-up the state reports either [`GestureOutcome::Tap`] when the
//!    press was short and stayed within the travel limit, or
//!    [`GestureOutcome::Released`] for drag-only interactions.
//! 3) Moves report the offset from the press position, which callers can use
//!    to drive scrolling.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::{GestureOutcome, GestureState, PointerEvent, TapPolicy};
//!
//! let mut gesture = GestureState::new(TapPolicy::new(400));
//!
//! gesture.handle(PointerEvent::down((10.0, 20.0), 1_000));
//! let outcome = gesture.handle(PointerEvent::up((12.0, 21.0), 1_150));
//! assert_eq!(outcome, GestureOutcome::Tap { position: Point::new(12.0, 21.0) });
//!
//! gesture.handle(PointerEvent::down((10.0, 20.0), 2_000));
//! let outcome = gesture.handle(PointerEvent::up((10.0, 20.0), 2_900));
//! assert!(matches!(outcome, GestureOutcome::Released { .. }));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::{PointerEvent, PointerKind};

/// Which position a recognized tap reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TapAnchor {
    /// Where the pointer went down.
    Press,
    /// Where the pointer lifted.
    #[default]
    Release,
}

/// Limits under which a press-release sequence counts as a tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapPolicy {
    /// Longest press, in milliseconds, that still counts as a tap (inclusive).
    pub max_press_ms: u64,
    /// Horizontal travel from the press position that turns the gesture into
    /// a drag. Once reached, the gesture can no longer become a tap.
    pub max_travel_x: Option<f64>,
    /// Position reported with a recognized tap.
    pub anchor: TapAnchor,
}

impl TapPolicy {
    /// Time-only policy anchored at the release position.
    #[must_use]
    pub const fn new(max_press_ms: u64) -> Self {
        Self {
            max_press_ms,
            max_travel_x: None,
            anchor: TapAnchor::Release,
        }
    }

    /// Sets the horizontal travel limit.
    #[must_use]
    pub const fn with_max_travel_x(mut self, travel: f64) -> Self {
        self.max_travel_x = Some(travel);
        self
    }

    /// Sets the reported tap position.
    #[must_use]
    pub const fn anchored_at(mut self, anchor: TapAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Phase of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// The pointer is down and has not moved.
    Pressed,
    /// The pointer is down and has moved since the press.
    ///
    /// Movement alone does not rule out a tap; only the travel limit does.
    Dragging,
}

/// Result of feeding one event into [`GestureState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// The event does not belong to a gesture (for example an up without a down).
    Ignored,
    /// A new gesture started.
    Pressed,
    /// The pointer moved; `offset` is measured from the press position.
    Moved {
        /// Total offset from the press position.
        offset: Vec2,
    },
    /// The gesture ended as a tap.
    Tap {
        /// Press or release position, per [`TapPolicy::anchor`].
        position: Point,
    },
    /// The gesture ended without tap semantics.
    Released {
        /// Total offset from the press position at release.
        offset: Vec2,
    },
}

/// Per-widget gesture tracking.
///
/// There is no cancel signal: a press that never sees its release leaves
/// state behind, which the next press overwrites.
#[derive(Clone, Debug)]
pub struct GestureState {
    policy: TapPolicy,
    phase: GesturePhase,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    press_ms: u64,
    travel_exceeded: bool,
}

impl GestureState {
    /// Creates an idle state classifying with `policy`.
    #[must_use]
    pub fn new(policy: TapPolicy) -> Self {
        Self {
            policy,
            phase: GesturePhase::Idle,
            start_pos: None,
            last_pos: None,
            press_ms: 0,
            travel_exceeded: false,
        }
    }

    /// Current policy.
    #[must_use]
    pub fn policy(&self) -> TapPolicy {
        self.policy
    }

    /// Replaces the policy; applies from the next event on.
    pub fn set_policy(&mut self, policy: TapPolicy) {
        self.policy = policy;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Press position of the gesture in progress.
    #[must_use]
    pub fn start_position(&self) -> Option<Point> {
        self.start_pos
    }

    /// Last position seen during the gesture in progress.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last_pos
    }

    /// Returns `true` once the travel limit was reached during this gesture.
    #[must_use]
    pub fn travel_exceeded(&self) -> bool {
        self.travel_exceeded
    }

    /// Dispatches `event` to the matching handler.
    pub fn handle(&mut self, event: PointerEvent) -> GestureOutcome {
        match event.kind {
            PointerKind::Down => self.on_down(event.position, event.time_ms),
            PointerKind::Move => self.on_move(event.position),
            PointerKind::Up => self.on_up(event.position, event.time_ms),
        }
    }

    /// Starts a gesture, discarding any unfinished one.
    pub fn on_down(&mut self, pos: Point, time_ms: u64) -> GestureOutcome {
        self.phase = GesturePhase::Pressed;
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.press_ms = time_ms;
        self.travel_exceeded = false;
        GestureOutcome::Pressed
    }

    /// Tracks a move of the pressed pointer.
    pub fn on_move(&mut self, pos: Point) -> GestureOutcome {
        let Some(start) = self.start_pos else {
            return GestureOutcome::Ignored;
        };
        let offset = pos - start;
        self.last_pos = Some(pos);
        if offset != Vec2::ZERO {
            self.phase = GesturePhase::Dragging;
        }
        if self
            .policy
            .max_travel_x
            .is_some_and(|limit| offset.x.abs() >= limit)
        {
            self.travel_exceeded = true;
        }
        GestureOutcome::Moved { offset }
    }

    /// Ends the gesture and classifies it.
    pub fn on_up(&mut self, pos: Point, time_ms: u64) -> GestureOutcome {
        let Some(start) = self.start_pos.take() else {
            return GestureOutcome::Ignored;
        };
        let elapsed = time_ms.saturating_sub(self.press_ms);
        let is_tap = elapsed <= self.policy.max_press_ms && !self.travel_exceeded;
        let offset = pos - start;
        self.reset();
        if is_tap {
            let position = match self.policy.anchor {
                TapAnchor::Press => start,
                TapAnchor::Release => pos,
            };
            GestureOutcome::Tap { position }
        } else {
            GestureOutcome::Released { offset }
        }
    }

    /// Returns to idle without classifying.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.start_pos = None;
        self.last_pos = None;
        self.travel_exceeded = false;
    }
}

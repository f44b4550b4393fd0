// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events as reported by the host.

use kurbo::Point;

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// The pointer touched down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted.
    Up,
}

/// A single pointer event in widget-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Phase of the event.
    pub kind: PointerKind,
    /// Position relative to the widget's top-left corner.
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// A pointer-down event.
    #[must_use]
    pub fn down(position: impl Into<Point>, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Down,
            position: position.into(),
            time_ms,
        }
    }

    /// A pointer-move event.
    #[must_use]
    pub fn moved(position: impl Into<Point>, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Move,
            position: position.into(),
            time_ms,
        }
    }

    /// A pointer-up event.
    #[must_use]
    pub fn up(position: impl Into<Point>, time_ms: u64) -> Self {
        Self {
            kind: PointerKind::Up,
            position: position.into(),
            time_ms,
        }
    }
}

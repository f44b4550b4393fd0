// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: tap and drag classification for pointer sequences.
//!
//! A gesture runs `Idle → Pressed → (Dragging) → Idle`. Each widget owns its
//! own [`GestureState`]; nothing is shared between instances.
//!
//! - [`PointerEvent`]: down/move/up with a position and a monotonic timestamp.
//! - [`TapPolicy`]: how short a press must be, and how far it may travel
//!   horizontally, to count as a tap.
//! - [`GestureState`]: the state machine, reporting [`GestureOutcome`]s.
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_gesture::{GestureOutcome, GestureState, PointerEvent, TapAnchor, TapPolicy};
//!
//! let policy = TapPolicy::new(500)
//!     .with_max_travel_x(50.0)
//!     .anchored_at(TapAnchor::Press);
//! let mut gesture = GestureState::new(policy);
//!
//! gesture.handle(PointerEvent::down((300.0, 200.0), 0));
//! let moved = gesture.handle(PointerEvent::moved((220.0, 205.0), 40));
//! assert_eq!(moved, GestureOutcome::Moved { offset: Vec2::new(-80.0, 5.0) });
//!
//! // Quick, but it travelled too far to be a tap.
//! let done = gesture.handle(PointerEvent::up((220.0, 205.0), 120));
//! assert!(matches!(done, GestureOutcome::Released { .. }));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod pointer;
pub mod tap;

pub use pointer::{PointerEvent, PointerKind};
pub use tap::{GestureOutcome, GesturePhase, GestureState, TapAnchor, TapPolicy};

//! Core state types for the session.
//!
//! Two coordinate spaces are in play:
//! - screen space: origin top-left, y grows downward (what the window reports)
//! - simulation space: origin bottom-left, y grows upward (what the engine uses)
//!
//! Both use `nalgebra` points/vectors so the session logic stays independent of the
//! engine and the windowing layer.

use bevy::prelude::Event;
use nalgebra::{Point2, Vector2};

pub type ScreenPoint = Point2<f32>;
pub type SimPoint = Point2<f32>;
pub type SimVec = Vector2<f32>;

/// Press/release pair of an in-progress drag
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    pub press: Option<ScreenPoint>,   // set by pointer-down, overwritten by the next one
    pub release: Option<ScreenPoint>, // set by pointer-up
}

impl DragGesture {
    /// Hands out the press/release pair and resets the gesture, but only once both are set.
    pub fn take_complete(&mut self) -> Option<(ScreenPoint, ScreenPoint)> {
        let pair = (self.press?, self.release?);
        *self = Self::default();
        Some(pair)
    }
}

/// Initial state of a ball about to be handed to the engine, already in simulation space
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BallSpawn {
    pub position: SimPoint, // flipped press position
    pub velocity: SimVec,   // drag delta with y negated
}

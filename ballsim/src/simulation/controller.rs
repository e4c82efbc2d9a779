//! Session controller: turns polled input into simulation mutations.
//!
//! The controller owns everything the frame loop mutates between frames: the running
//! flag, the pending drag gesture and the count of balls already spawned. It knows
//! nothing about Bevy's window events or Rapier; the visualization layer translates
//! window events into [`InputEvent`]s and carries out the returned [`SessionAction`]s.

use bevy::prelude::{Event, Resource};

use crate::simulation::params::Parameters;
use crate::simulation::states::{BallSpawn, DragGesture, ScreenPoint, SimPoint, SimVec};

/// Keys the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Snapshot, // P
    Other,
}

/// Input already polled from the window, in screen space
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    PointerDown(ScreenPoint),
    PointerUp(ScreenPoint),
}

/// Side effect the frame loop has to perform after an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionAction {
    Spawn(BallSpawn),
    SaveSnapshot,
    Exit,
}

/// Maps a screen-space point to simulation space. `x` is kept, `y` is mirrored about
/// the extent, so applying it twice gives the original point back.
pub fn coordinate_flip(extent: f32, p: ScreenPoint) -> SimPoint {
    SimPoint::new(p.x, extent - p.y)
}

#[derive(Resource, Debug, Clone)]
pub struct SessionController {
    extent: f32,
    max_bodies: usize,
    live_bodies: usize,
    gesture: DragGesture,
    running: bool,
}

impl SessionController {
    pub fn new(extent: f32, max_bodies: usize) -> Self {
        Self {
            extent,
            max_bodies,
            live_bodies: 0,
            gesture: DragGesture::default(),
            running: true,
        }
    }

    pub fn from_parameters(p: &Parameters) -> Self {
        Self::new(p.extent, p.max_bodies)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn live_bodies(&self) -> usize {
        self.live_bodies
    }

    pub fn max_bodies(&self) -> usize {
        self.max_bodies
    }

    pub fn gesture(&self) -> DragGesture {
        self.gesture
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Option<SessionAction> {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                self.running = false;
                Some(SessionAction::Exit)
            }
            InputEvent::KeyDown(Key::Snapshot) => Some(SessionAction::SaveSnapshot),
            InputEvent::KeyDown(Key::Other) => None,
            InputEvent::PointerDown(p) => {
                self.handle_press(p.x, p.y);
                None
            }
            InputEvent::PointerUp(p) => self.handle_release(p.x, p.y).map(SessionAction::Spawn),
        }
    }

    pub fn handle_press(&mut self, x: f32, y: f32) {
        self.gesture.press = Some(ScreenPoint::new(x, y));
    }

    /// Records the release. A complete gesture is consumed exactly once: it yields a ball
    /// while under the cap and is discarded otherwise. A release without a press stays
    /// recorded until the next one replaces it.
    pub fn handle_release(&mut self, x: f32, y: f32) -> Option<BallSpawn> {
        self.gesture.release = Some(ScreenPoint::new(x, y));
        let (press, release) = self.gesture.take_complete()?;

        if self.live_bodies >= self.max_bodies {
            return None;
        }

        // velocity comes from a screen-space delta, so only its y sign needs flipping
        let delta = release - press;
        let spawn = BallSpawn {
            position: coordinate_flip(self.extent, press),
            velocity: SimVec::new(delta.x, -delta.y),
        };
        self.live_bodies += 1;
        Some(spawn)
    }
}


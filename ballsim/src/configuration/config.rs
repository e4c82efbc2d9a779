//! Configuration types for the bouncing-balls demo.
//!
//! This module defines a thin, `serde`-deserializable representation of the demo
//! settings. Every section falls back to the built-in defaults, so running with no
//! config file at all reproduces the stock demo. A config consists of:
//!
//! - [`WindowConfig`]  – window extent, target frame rate
//! - [`PhysicsConfig`] – fixed time step and steps per frame
//! - [`BallConfig`]    – mass, radius and material of spawned balls, plus the spawn cap
//! - [`WallConfig`]    – geometry and material of the static enclosure
//! - [`DemoConfig`]    – top-level wrapper
//!
//! # YAML format
//! Any subset of the fields may be given:
//!
//! ```yaml
//! window:
//!   extent: 300.0         # square window side, in logical pixels
//!   fps: 50.0             # target frame rate
//!
//! physics:
//!   dt: 0.0166667         # fixed step per physics update
//!   steps_per_frame: 1
//!
//! ball:
//!   mass: 10.0
//!   radius: 5.0
//!   elasticity: 0.999
//!   friction: 0.1
//!   max_bodies: 2
//!
//! walls:
//!   inset: 5.0            # distance of each wall from the window edge
//!   radius: 1.0
//!   elasticity: 0.999
//!   friction: 0.2
//!
//! snapshot_path: "bouncing_balls.png"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub extent: f32, // side length of the square window and of the simulation area
    pub fps: f32,    // frame rate cap
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { extent: 300.0, fps: 50.0 }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub dt: f32,                // fixed time step
    pub steps_per_frame: usize, // full `dt` steps per rendered frame
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { dt: 1.0 / 60.0, steps_per_frame: 1 }
    }
}

/// Properties shared by every ball spawned from a drag gesture
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub mass: f32,
    pub radius: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub max_bodies: usize, // balls that may ever be spawned in one session
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            mass: 10.0,
            radius: 5.0,
            elasticity: 0.999,
            friction: 0.1,
            max_bodies: 2,
        }
    }
}

/// Static box the balls bounce around in
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WallConfig {
    pub inset: f32,  // distance of every wall from the window border
    pub radius: f32, // thickness radius of each segment
    pub elasticity: f32,
    pub friction: f32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            inset: 5.0,
            radius: 1.0,
            elasticity: 0.999,
            friction: 0.2,
        }
    }
}

/// Top-level demo configuration, optionally loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub ball: BallConfig,
    pub walls: WallConfig,
    pub snapshot_path: String, // where the P key writes the current frame
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            ball: BallConfig::default(),
            walls: WallConfig::default(),
            snapshot_path: "bouncing_balls.png".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: DemoConfig = serde_yaml::from_str(text).context("invalid demo config YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Rejects settings the engine cannot run with.
    /// Mouse input is never validated; only the static setup is.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.window.extent > 0.0, "window.extent must be positive");
        ensure!(self.window.fps > 0.0, "window.fps must be positive");
        ensure!(self.physics.dt > 0.0, "physics.dt must be positive");
        ensure!(self.physics.steps_per_frame >= 1, "physics.steps_per_frame must be at least 1");
        ensure!(self.ball.mass > 0.0, "ball.mass must be positive");
        ensure!(self.ball.radius > 0.0, "ball.radius must be positive");
        ensure!(
            self.walls.inset * 2.0 < self.window.extent,
            "walls.inset ({}) leaves no room inside a window of extent {}",
            self.walls.inset,
            self.window.extent
        );
        Ok(())
    }
}

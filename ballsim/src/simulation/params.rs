//! Runtime parameters for the session
//!
//! `Parameters` holds the settings the engine and the frame loop read every frame:
//! - window/simulation extent and frame rate cap,
//! - fixed step size and steps per frame,
//! - ball and wall materials, spawn cap

use crate::configuration::config::DemoConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub elasticity: f32, // restitution coefficient
    pub friction: f32,   // friction coefficient
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub extent: f32, // side of the square window, equal in both spaces
    pub fps: f32, // target frame rate
    pub dt: f32, // fixed step
    pub steps_per_frame: usize, // full steps of `dt` per frame
    pub ball_mass: f32, // mass of every spawned ball
    pub ball_radius: f32, // radius of every spawned ball
    pub ball_material: Surface,
    pub max_bodies: usize, // spawn cap
    pub wall_inset: f32, // wall distance from the window border
    pub wall_radius: f32, // wall thickness radius
    pub wall_material: Surface,
    pub snapshot_path: String, // frame snapshot target
}

impl Parameters {
    pub fn from_config(cfg: &DemoConfig) -> Self {
        Self {
            extent: cfg.window.extent,
            fps: cfg.window.fps,
            dt: cfg.physics.dt,
            steps_per_frame: cfg.physics.steps_per_frame,
            ball_mass: cfg.ball.mass,
            ball_radius: cfg.ball.radius,
            ball_material: Surface {
                elasticity: cfg.ball.elasticity,
                friction: cfg.ball.friction,
            },
            max_bodies: cfg.ball.max_bodies,
            wall_inset: cfg.walls.inset,
            wall_radius: cfg.walls.radius,
            wall_material: Surface {
                elasticity: cfg.walls.elasticity,
                friction: cfg.walls.friction,
            },
            snapshot_path: cfg.snapshot_path.clone(),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

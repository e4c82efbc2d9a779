//! Glue between the session and the Rapier engine
//!
//! Everything that touches `bevy_rapier2d` types lives here: world configuration,
//! the static enclosure and ball creation. Simulation space is Bevy world space with
//! one unit per logical pixel, origin at the window's bottom-left corner.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::simulation::params::{Parameters, Surface};
use crate::simulation::states::{BallSpawn, SimPoint};

/// Marker for balls spawned by drag gestures
#[derive(Component, Debug)]
pub struct SpawnedBall;

/// Marker for the enclosure walls
#[derive(Component, Debug)]
pub struct EnclosureWall;

/// Zero gravity, and every frame advances `steps_per_frame` full steps of `dt`
pub fn world_configuration(p: &Parameters) -> RapierConfiguration {
    let mut cfg = RapierConfiguration::new(1.0);
    cfg.gravity = Vec2::ZERO;
    // rapier splits the frame step evenly across substeps
    cfg.timestep_mode = TimestepMode::Fixed {
        dt: p.dt * p.steps_per_frame as f32,
        substeps: p.steps_per_frame,
    };
    cfg
}

/// Moment of inertia of a uniform solid disc about its centre
pub fn disc_inertia(mass: f32, radius: f32) -> f32 {
    0.5 * mass * radius * radius
}

/// Endpoints of the four walls, each `wall_inset` away from the window border
pub fn enclosure_segments(p: &Parameters) -> [(SimPoint, SimPoint); 4] {
    let lo = p.wall_inset;
    let hi = p.extent - p.wall_inset;
    [
        (SimPoint::new(lo, lo), SimPoint::new(lo, hi)), // left
        (SimPoint::new(lo, lo), SimPoint::new(hi, lo)), // bottom
        (SimPoint::new(lo, hi), SimPoint::new(hi, hi)), // top
        (SimPoint::new(hi, lo), SimPoint::new(hi, hi)), // right
    ]
}

// Rapier averages coefficients by default; contacts here multiply them instead
fn restitution(m: &Surface) -> Restitution {
    Restitution {
        coefficient: m.elasticity,
        combine_rule: CoefficientCombineRule::Multiply,
    }
}

fn friction(m: &Surface) -> Friction {
    Friction {
        coefficient: m.friction,
        combine_rule: CoefficientCombineRule::Multiply,
    }
}

fn to_vec2(p: SimPoint) -> Vec2 {
    Vec2::new(p.x, p.y)
}

pub fn spawn_enclosure(commands: &mut Commands, segments: &[(SimPoint, SimPoint)], p: &Parameters) {
    for &(a, b) in segments {
        commands.spawn((
            EnclosureWall,
            RigidBody::Fixed,
            // a capsule is a segment with thickness
            Collider::capsule(to_vec2(a), to_vec2(b), p.wall_radius),
            restitution(&p.wall_material),
            friction(&p.wall_material),
            TransformBundle::default(),
        ));
    }
}

pub fn spawn_body(commands: &mut Commands, p: &Parameters, spawn: &BallSpawn) -> Entity {
    let inertia = disc_inertia(p.ball_mass, p.ball_radius);

    commands
        .spawn((
            SpawnedBall,
            RigidBody::Dynamic,
            Collider::ball(p.ball_radius),
            ColliderMassProperties::MassProperties(MassProperties {
                local_center_of_mass: Vec2::ZERO,
                mass: p.ball_mass,
                principal_inertia: inertia,
            }),
            Velocity {
                linvel: Vec2::new(spawn.velocity.x, spawn.velocity.y),
                angvel: 0.0,
            },
            restitution(&p.ball_material),
            friction(&p.ball_material),
            TransformBundle::from_transform(Transform::from_xyz(
                spawn.position.x,
                spawn.position.y,
                0.0,
            )),
        ))
        .id()
}

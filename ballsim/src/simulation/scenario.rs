//! Build the runtime scenario from configuration
//!
//! Takes a `DemoConfig` (YAML-facing) and produces the `Scenario` resource holding:
//! - runtime parameters (`Parameters`)
//! - the enclosure geometry handed to the engine at startup
//!
//! The scenario is inserted into Bevy as a `Resource` and read by the startup,
//! spawning and frame-pacing systems.

use bevy::prelude::Resource;

use crate::configuration::config::DemoConfig;
use crate::simulation::engine::enclosure_segments;
use crate::simulation::params::Parameters;
use crate::simulation::states::SimPoint;

#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub enclosure: [(SimPoint, SimPoint); 4], // wall endpoints in simulation space
}

impl Scenario {
    pub fn build_scenario(cfg: &DemoConfig) -> Self {
        let parameters = Parameters::from_config(cfg);
        let enclosure = enclosure_segments(&parameters);

        Self {
            parameters,
            enclosure,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::build_scenario(&DemoConfig::default())
    }
}
